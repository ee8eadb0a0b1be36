//! Pages and the page sequences for each confirmation screen.
use crate::{
    format::{format_address_kind, format_coin_amount, format_hex, format_network, format_path},
    paginate::{chunk, paginate},
    palette::PALETTE,
    protocol_magics, AddressKind, DerivationPath, DisplayGeometry, LayoutError, Pointer,
};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::mem;
use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

/// Address lines that go on the lead page of a send confirmation.
pub const SEND_LEAD_LINES: usize = 1;
/// Address lines that go on the lead page when showing one of our addresses.
pub const ADDRESS_LEAD_LINES: usize = 3;

const CONFIRM_TRANSACTION: &str = "Confirm transaction";
const WARNING: &str = "Warning";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emphasis {
    Normal,
    Bold,
}

impl Emphasis {
    pub fn color(self) -> Rgb565 {
        match self {
            Emphasis::Normal => PALETTE.text_secondary,
            Emphasis::Bold => PALETTE.on_background,
        }
    }
}

/// One line of text that is known to fit across the screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    text: String,
    emphasis: Emphasis,
}

impl DisplayLine {
    pub fn new(
        text: impl Into<String>,
        emphasis: Emphasis,
        line_width: usize,
    ) -> Result<Self, LayoutError> {
        let text = text.into();
        let width = text.chars().count();
        if width > line_width {
            return Err(LayoutError::LineTooWide {
                width,
                max: line_width,
            });
        }
        Ok(Self { text, emphasis })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    pub fn is_bold(&self) -> bool {
        self.emphasis == Emphasis::Bold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    Send,
    Receive,
    Warning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Green,
    Red,
    Orange,
}

impl Tint {
    pub fn rgb565(self) -> Rgb565 {
        match self {
            Tint::Green => PALETTE.green,
            Tint::Red => PALETTE.red,
            Tint::Orange => PALETTE.orange,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeader {
    pub title: String,
    pub icon: Icon,
    pub tint: Tint,
}

impl PageHeader {
    pub fn new(title: impl Into<String>, icon: Icon, tint: Tint) -> Self {
        Self {
            title: title.into(),
            icon,
            tint,
        }
    }
}

/// What fits on the screen at once: a header and between one and `max_lines` lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    header: PageHeader,
    lines: Vec<DisplayLine>,
}

impl Page {
    pub fn new(
        header: PageHeader,
        lines: Vec<DisplayLine>,
        max_lines: usize,
    ) -> Result<Self, LayoutError> {
        if lines.is_empty() {
            return Err(LayoutError::EmptyPage);
        }
        if lines.len() > max_lines {
            return Err(LayoutError::PageOverflow {
                lines: lines.len(),
                max: max_lines,
            });
        }
        Ok(Self { header, lines })
    }

    pub fn header(&self) -> &PageHeader {
        &self.header
    }

    pub fn title(&self) -> &str {
        &self.header.title
    }

    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }
}

/// The pages of one confirmation in the order they must be shown. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageSequence(Vec<Page>);

impl PageSequence {
    pub fn new(pages: Vec<Page>) -> Result<Self, LayoutError> {
        if pages.is_empty() {
            return Err(LayoutError::EmptySequence);
        }
        Ok(Self(pages))
    }

    pub fn pages(&self) -> &[Page] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Page> {
        self.0.iter()
    }

    /// Every line of every page, in display order.
    pub fn lines(&self) -> impl Iterator<Item = &DisplayLine> + '_ {
        self.0.iter().flat_map(|page| page.lines.iter())
    }
}

impl<'a> IntoIterator for &'a PageSequence {
    type Item = &'a Page;
    type IntoIter = core::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds the fixed layout of a lead page: labels in normal text, values in
/// bold, each wrapped at the line width.
///
/// A value and the labels just before it stay on one page. When the layout is
/// taller than a page the next label and value start another page with the
/// same header rather than being cut.
#[derive(Clone, Debug)]
pub struct TextPage {
    header: PageHeader,
    geometry: DisplayGeometry,
    segments: Vec<Vec<(Emphasis, String)>>,
}

impl TextPage {
    pub fn new(header: PageHeader, geometry: DisplayGeometry) -> Self {
        Self {
            header,
            geometry,
            segments: Vec::new(),
        }
    }

    pub fn normal(self, text: &str) -> Self {
        self.wrapped(text, Emphasis::Normal)
    }

    pub fn bold(self, text: &str) -> Self {
        self.wrapped(text, Emphasis::Bold)
    }

    /// Lines that were already wrapped elsewhere, e.g. the head of a long value.
    pub fn push_lines<'a>(self, lines: impl IntoIterator<Item = &'a DisplayLine>) -> Self {
        let segment = lines
            .into_iter()
            .map(|line| (line.emphasis, line.text.clone()))
            .collect();
        self.push_segment(segment)
    }

    fn wrapped(self, text: &str, emphasis: Emphasis) -> Self {
        let segment = chunk(text, self.geometry.line_width)
            .map(|line| (emphasis, line.to_string()))
            .collect();
        self.push_segment(segment)
    }

    fn push_segment(mut self, segment: Vec<(Emphasis, String)>) -> Self {
        if !segment.is_empty() {
            self.segments.push(segment);
        }
        self
    }

    /// Groups each value with the labels before it. Trailing labels with no
    /// value form a group of their own.
    fn groups(&self) -> Result<Vec<Vec<DisplayLine>>, LayoutError> {
        let width = self.geometry.line_width;
        let mut groups = Vec::new();
        let mut pending = Vec::new();
        for segment in &self.segments {
            for (emphasis, text) in segment {
                pending.push(DisplayLine::new(text.as_str(), *emphasis, width)?);
            }
            if segment.last().map(|(emphasis, _)| *emphasis) == Some(Emphasis::Bold) {
                groups.push(mem::take(&mut pending));
            }
        }
        if !pending.is_empty() {
            groups.push(pending);
        }
        Ok(groups)
    }

    pub fn build(self) -> Result<Vec<Page>, LayoutError> {
        let max_lines = self.geometry.max_lines;
        let mut pages = Vec::new();
        let mut current: Vec<DisplayLine> = Vec::new();
        for group in self.groups()? {
            if !current.is_empty() && current.len() + group.len() > max_lines {
                pages.push(Page::new(
                    self.header.clone(),
                    mem::take(&mut current),
                    max_lines,
                )?);
            }
            // a group taller than a page has to be split
            for line in group {
                if current.len() == max_lines {
                    pages.push(Page::new(
                        self.header.clone(),
                        mem::take(&mut current),
                        max_lines,
                    )?);
                }
                current.push(line);
            }
        }
        if current.is_empty() {
            return Err(LayoutError::EmptyPage);
        }
        pages.push(Page::new(self.header, current, max_lines)?);
        Ok(pages)
    }
}

/// Wraps a value that must be shown in full, like an address.
pub fn value_lines(value: &str, geometry: &DisplayGeometry) -> Result<Vec<DisplayLine>, LayoutError> {
    chunk(value, geometry.line_width)
        .map(|line| DisplayLine::new(line, Emphasis::Bold, geometry.line_width))
        .collect()
}

/// How the stake rights of an address we don't own are identified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StakingCredential {
    Path(DerivationPath),
    KeyHash(Vec<u8>),
}

pub fn send_pages(
    geometry: &DisplayGeometry,
    amount: u64,
    to: &str,
) -> Result<PageSequence, LayoutError> {
    let header = PageHeader::new(CONFIRM_TRANSACTION, Icon::Send, Tint::Green);
    let to_lines = value_lines(to, geometry)?;

    let mut pages = TextPage::new(header.clone(), *geometry)
        .normal("Confirm sending:")
        .bold(&format_coin_amount(amount))
        .normal("to:")
        .push_lines(to_lines.iter().take(SEND_LEAD_LINES))
        .build()?;
    pages.extend(paginate(
        &to_lines,
        SEND_LEAD_LINES,
        geometry.overflow_lines,
        &header,
    )?);

    PageSequence::new(pages)
}

pub fn transaction_total_pages(
    geometry: &DisplayGeometry,
    amount: u64,
    fee: u64,
    protocol_magic: u32,
) -> Result<PageSequence, LayoutError> {
    let header = PageHeader::new(CONFIRM_TRANSACTION, Icon::Send, Tint::Green);

    let mut pages = TextPage::new(header.clone(), *geometry)
        .normal("Total amount:")
        .bold(&format_coin_amount(amount))
        .normal("including fee:")
        .bold(&format_coin_amount(fee))
        .build()?;
    pages.extend(
        TextPage::new(header, *geometry)
            .normal("Network:")
            .bold(&format_network(protocol_magic))
            .build()?,
    );

    PageSequence::new(pages)
}

pub fn address_pages(
    geometry: &DisplayGeometry,
    address: &str,
    kind: AddressKind,
    path: &DerivationPath,
    network: Option<u32>,
) -> Result<PageSequence, LayoutError> {
    let header = PageHeader::new(format_path(path), Icon::Receive, Tint::Green);
    let address_lines = value_lines(address, geometry)?;

    let mut lead = TextPage::new(header.clone(), *geometry);
    if let Some(magic) = network {
        lead = lead.normal(&network_label(magic));
    }
    let mut pages = lead
        .normal(&format!("Type: {}", format_address_kind(kind)))
        .push_lines(address_lines.iter().take(ADDRESS_LEAD_LINES))
        .build()?;
    pages.extend(paginate(
        &address_lines,
        ADDRESS_LEAD_LINES,
        geometry.overflow_lines,
        &header,
    )?);

    PageSequence::new(pages)
}

fn network_label(magic: u32) -> String {
    match magic {
        protocol_magics::MAINNET | protocol_magics::TESTNET => {
            format!("Network: {}", format_network(magic))
        }
        // the full fallback name is wider than a line
        _ => format!("Net: {magic}"),
    }
}

/// Two screens: the disclosure with our account's path, then whatever
/// identifies the stake rights instead.
pub fn foreign_staking_key_pages(
    geometry: &DisplayGeometry,
    spending_account_path: &DerivationPath,
    staking: &StakingCredential,
) -> Result<[PageSequence; 2], LayoutError> {
    let header = PageHeader::new(WARNING, Icon::Warning, Tint::Red);

    let disclosure = TextPage::new(header.clone(), *geometry)
        .normal("Stake rights of")
        .normal("this address are")
        .normal("not yours:")
        .bold(&format_path(spending_account_path))
        .build()?;

    let credential = TextPage::new(header, *geometry);
    let credential = match staking {
        StakingCredential::Path(path) => credential
            .normal("Staking path:")
            .bold(&format_path(path)),
        StakingCredential::KeyHash(hash) => credential
            .normal("Staking key:")
            .bold(&format_hex(hash)),
    }
    .build()?;

    Ok([PageSequence::new(disclosure)?, PageSequence::new(credential)?])
}

pub fn pointer_address_pages(
    geometry: &DisplayGeometry,
    pointer: &Pointer,
) -> Result<PageSequence, LayoutError> {
    let pages = TextPage::new(
        PageHeader::new(WARNING, Icon::Warning, Tint::Orange),
        *geometry,
    )
    .normal("Pointer address:")
    .bold(&format!("Block: {}", pointer.block_index))
    .bold(&format!("Transaction: {}", pointer.tx_index))
    .bold(&format!("Certificate: {}", pointer.certificate_index))
    .build()?;

    PageSequence::new(pages)
}
