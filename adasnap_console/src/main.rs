use adasnap_core::{
    pages::{self, StakingCredential},
    protocol_magics, AddressKind, DerivationPath, DisplayGeometry, Pointer,
};
use anyhow::anyhow;
use clap::{Parser, Subcommand};
use std::io;
use tracing::Level;

mod terminal;

use terminal::TerminalUi;

#[derive(Parser)]
#[command(author, version, about = "Step through Cardano confirmation screens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Characters per line
    #[arg(long, default_value_t = DisplayGeometry::DEFAULT.line_width)]
    line_width: usize,
    /// Lines under each page header
    #[arg(long, default_value_t = DisplayGeometry::DEFAULT.max_lines)]
    max_lines: usize,
    /// Lines on each page a long value continues onto
    #[arg(long, default_value_t = DisplayGeometry::DEFAULT.overflow_lines)]
    overflow_lines: usize,
    /// Print the pages as JSON rather than asking for gestures
    #[arg(long)]
    json: bool,
    #[arg(short)]
    verbosity: bool,
}

#[derive(Subcommand)]
enum Command {
    Send {
        #[arg(long, value_name = "LOVELACE")]
        amount: u64,
        #[arg(long)]
        to: String,
    },
    Total {
        #[arg(long, value_name = "LOVELACE")]
        amount: u64,
        #[arg(long, value_name = "LOVELACE")]
        fee: u64,
        #[arg(long, default_value_t = protocol_magics::MAINNET)]
        network: u32,
    },
    Address {
        #[arg(long)]
        address: String,
        /// Address type tag as sent in the request
        #[arg(long)]
        kind: u8,
        #[arg(long)]
        path: DerivationPath,
        #[arg(long)]
        network: Option<u32>,
    },
    WarnStaking {
        #[arg(long)]
        spending_path: DerivationPath,
        #[arg(long, conflicts_with = "key_hash", required_unless_present = "key_hash")]
        staking_path: Option<DerivationPath>,
        #[arg(long, value_name = "HEX")]
        key_hash: Option<String>,
    },
    WarnPointer {
        #[arg(long)]
        block: u64,
        #[arg(long)]
        tx: u64,
        #[arg(long)]
        certificate: u64,
    },
}

fn staking_credential(
    staking_path: Option<DerivationPath>,
    key_hash: Option<String>,
) -> anyhow::Result<StakingCredential> {
    match (staking_path, key_hash) {
        (Some(path), _) => Ok(StakingCredential::Path(path)),
        (None, Some(key_hash)) => Ok(StakingCredential::KeyHash(hex::decode(key_hash)?)),
        (None, None) => Err(anyhow!("need either a staking path or a key hash")),
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbosity {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(io::stderr)
        .finish();
    // use that subscriber to process traces emitted after this point
    tracing::subscriber::set_global_default(subscriber)?;

    let geometry = DisplayGeometry::new(cli.line_width, cli.max_lines, cli.overflow_lines)?;

    if cli.json {
        match cli.command {
            Command::Send { amount, to } => print_json(&pages::send_pages(&geometry, amount, &to)?)?,
            Command::Total {
                amount,
                fee,
                network,
            } => print_json(&pages::transaction_total_pages(
                &geometry, amount, fee, network,
            )?)?,
            Command::Address {
                address,
                kind,
                path,
                network,
            } => print_json(&pages::address_pages(
                &geometry,
                &address,
                AddressKind::try_from(kind)?,
                &path,
                network,
            )?)?,
            Command::WarnStaking {
                spending_path,
                staking_path,
                key_hash,
            } => print_json(&pages::foreign_staking_key_pages(
                &geometry,
                &spending_path,
                &staking_credential(staking_path, key_hash)?,
            )?)?,
            Command::WarnPointer {
                block,
                tx,
                certificate,
            } => print_json(&pages::pointer_address_pages(
                &geometry,
                &Pointer {
                    block_index: block,
                    tx_index: tx,
                    certificate_index: certificate,
                },
            )?)?,
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut ui = TerminalUi::new(geometry, stdin.lock(), io::stdout());

    match cli.command {
        Command::Send { amount, to } => {
            let confirmed = adasnap_core::confirm_send(&mut ui, amount, &to)?;
            println!("confirmed: {confirmed}");
        }
        Command::Total {
            amount,
            fee,
            network,
        } => {
            let confirmed = adasnap_core::confirm_transaction_total(&mut ui, amount, fee, network)?;
            println!("confirmed: {confirmed}");
        }
        Command::Address {
            address,
            kind,
            path,
            network,
        } => {
            let kind = AddressKind::try_from(kind)?;
            let outcome = adasnap_core::show_address(&mut ui, &address, kind, &path, network)?;
            println!("outcome: {outcome:?}");
        }
        Command::WarnStaking {
            spending_path,
            staking_path,
            key_hash,
        } => {
            let staking = staking_credential(staking_path, key_hash)?;
            adasnap_core::warn_foreign_staking_key(&mut ui, &spending_path, &staking)?;
            println!("acknowledged");
        }
        Command::WarnPointer {
            block,
            tx,
            certificate,
        } => {
            let pointer = Pointer {
                block_index: block,
                tx_index: tx,
                certificate_index: certificate,
            };
            adasnap_core::warn_pointer_address(&mut ui, &pointer)?;
            println!("acknowledged");
        }
    }

    Ok(())
}
