//! A stand-in for the device screen and buttons that runs in a terminal.
use adasnap_core::{
    ButtonRequest, CancelStyle, ConfirmStyle, Controls, DisplayGeometry, Gesture, Icon, Page,
    UserInteraction,
};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use std::io::{BufRead, Write};
use tracing::{event, Level};

pub struct TerminalUi<R, W> {
    geometry: DisplayGeometry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(geometry: DisplayGeometry, input: R, output: W) -> Self {
        Self {
            geometry,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn draw(&mut self, page: &Page, controls: &Controls) -> std::io::Result<()> {
        let width = self.geometry.line_width;
        let header = page.header();
        let icon = match header.icon {
            Icon::Send => "➜",
            Icon::Receive => "⬇",
            Icon::Warning => "⚠",
        };

        writeln!(self.output)?;
        writeln!(self.output, "┌{}┐", "─".repeat(width + 2))?;
        let title = fit(&header.title, width.saturating_sub(2));
        writeln!(
            self.output,
            "│ {}{} {}\x1b[0m{} │",
            ansi(header.tint.rgb565()),
            icon,
            title,
            " ".repeat(width.saturating_sub(2 + title.chars().count()))
        )?;
        writeln!(self.output, "├{}┤", "─".repeat(width + 2))?;
        for line in page.lines() {
            let padding = width - line.text().chars().count().min(width);
            let weight = if line.is_bold() { "\x1b[1m" } else { "" };
            writeln!(
                self.output,
                "│ {}{}{}\x1b[0m{} │",
                weight,
                ansi(line.emphasis().color()),
                line.text(),
                " ".repeat(padding)
            )?;
        }
        writeln!(self.output, "└{}┘", "─".repeat(width + 2))?;

        let mut buttons = Vec::new();
        if let Some(cancel) = controls.cancel_label() {
            buttons.push(String::from("[x] Cancel"));
            if let CancelStyle::Alternative { .. } = controls.cancel {
                buttons.push(format!("[a] {cancel}"));
            }
        }
        if !controls.is_last_page() {
            buttons.push("[n] Next".into());
        } else if controls.confirm == ConfirmStyle::Hold {
            buttons.push(format!("[h] {}", controls.confirm_label()));
        } else {
            buttons.push(format!("[y] {}", controls.confirm_label()));
        }
        writeln!(
            self.output,
            "page {}/{}   {}",
            controls.index + 1,
            controls.count,
            buttons.join("  ")
        )?;
        self.output.flush()
    }
}

/// Cuts `text` to `width` chars, marking the cut with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn ansi(color: Rgb565) -> String {
    let r = (color.r() << 3) | (color.r() >> 2);
    let g = (color.g() << 2) | (color.g() >> 4);
    let b = (color.b() << 3) | (color.b() >> 2);
    format!("\x1b[38;2;{r};{g};{b}m")
}

pub fn parse_gesture(input: &str) -> Option<Gesture> {
    Some(match input.trim() {
        "" | "n" => Gesture::Next,
        "y" => Gesture::Confirm,
        "h" => Gesture::HoldConfirm,
        "x" => Gesture::Decline,
        "a" => Gesture::Alternative,
        _ => return None,
    })
}

impl<R: BufRead, W: Write> UserInteraction for TerminalUi<R, W> {
    fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    fn button_request(&mut self, request: ButtonRequest) {
        event!(Level::DEBUG, request = ?request, "button request");
    }

    fn present(&mut self, page: &Page, controls: &Controls) {
        if let Err(e) = self.draw(page, controls) {
            event!(Level::WARN, error = %e, "failed to draw page");
        }
    }

    fn await_gesture(&mut self) -> Gesture {
        loop {
            let _ = write!(self.output, "> ");
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    event!(Level::WARN, "input closed, declining");
                    return Gesture::Decline;
                }
                Ok(_) => match parse_gesture(&line) {
                    Some(gesture) => return gesture,
                    None => {
                        event!(Level::DEBUG, input = line.trim(), "unrecognised input");
                    }
                },
                Err(e) => {
                    event!(Level::WARN, error = %e, "failed to read input, declining");
                    return Gesture::Decline;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use adasnap_core::{path::HARDENED, AddressKind, ConfirmationOutcome, DerivationPath};
    use std::io::Cursor;

    fn ui(input: &str) -> TerminalUi<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalUi::new(
            DisplayGeometry::default(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    #[test]
    fn gestures_from_keys() {
        assert_eq!(parse_gesture("\n"), Some(Gesture::Next));
        assert_eq!(parse_gesture(" y \n"), Some(Gesture::Confirm));
        assert_eq!(parse_gesture("h"), Some(Gesture::HoldConfirm));
        assert_eq!(parse_gesture("x"), Some(Gesture::Decline));
        assert_eq!(parse_gesture("a"), Some(Gesture::Alternative));
        assert_eq!(parse_gesture("yes"), None);
    }

    #[test]
    fn drives_a_send_confirmation() {
        let mut ui = ui("n\nwhat\ny\n");
        let to = "addr1vpu5vlrf4xkxv2qpwngf6cjhtw542ayty80v8dyr49rf5eg0yu80w";
        assert!(adasnap_core::confirm_send(&mut ui, 2_000_000, to).unwrap());

        let output = String::from_utf8(ui.into_output()).unwrap();
        assert!(output.contains("Confirm sending:"));
        assert!(output.contains("2.000000 ADA"));
        assert!(output.contains("page 2/2"));
        assert!(output.contains("[y] Confirm"));
    }

    fn visible_width(row: &str) -> usize {
        let mut width = 0;
        let mut chars = row.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                let _ = chars.by_ref().find(|&c| c == 'm');
            } else {
                width += 1;
            }
        }
        width
    }

    #[test]
    fn long_titles_keep_the_box_closed() {
        let mut ui = ui("y\n");
        let path = DerivationPath::new(vec![1852 | HARDENED, 1815 | HARDENED, HARDENED, 0, 0]).unwrap();
        let outcome =
            adasnap_core::show_address(&mut ui, "addr1", AddressKind::Base, &path, None).unwrap();
        assert_eq!(outcome, ConfirmationOutcome::Confirmed);

        let output = String::from_utf8(ui.into_output()).unwrap();
        let rows: Vec<&str> = output
            .lines()
            .filter(|row| row.starts_with(|c| matches!(c, '┌' | '│' | '├' | '└')))
            .collect();
        // two border rows, the title, a divider and two lines
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| visible_width(row) == 17 + 4));
        assert!(rows[1].contains("m/1852'/1815'/…"));
        assert!(rows[1].ends_with(" │"));
    }

    #[test]
    fn closed_input_declines() {
        let mut ui = ui("");
        let path = DerivationPath::new(vec![1852 | HARDENED, 1815 | HARDENED, HARDENED, 0, 0]).unwrap();
        let outcome =
            adasnap_core::show_address(&mut ui, "addr1", AddressKind::Enterprise, &path, None)
                .unwrap();
        assert_eq!(outcome, ConfirmationOutcome::Declined);

        let output = String::from_utf8(ui.into_output()).unwrap();
        assert!(output.contains("[a] QR"));
    }
}
