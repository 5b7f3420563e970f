//! In-place terminal progress bar.

use std::io::{self, Write};

const WIDTH: usize = 30;
const FILLED: &str = "█";
const EMPTY: &str = "▒";

/// Fixed-width bar redrawn in place with carriage returns.
///
/// Values are clamped to [0, 1]; a value of 1.0 erases the bar and moves
/// to the next line, leaving the terminal clean for the final message.
#[derive(Debug)]
pub struct ProgressBar<W: Write> {
    writer: W,
}

impl<W: Write> ProgressBar<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Redraw the bar for the given fraction.
    pub fn update(&mut self, value: f64) -> io::Result<()> {
        let value = value.clamp(0.0, 1.0);
        let filled = ((WIDTH as f64 * value) as usize).min(WIDTH);

        write!(
            self.writer,
            "\r{}{}",
            FILLED.repeat(filled),
            EMPTY.repeat(WIDTH - filled)
        )?;

        if value >= 1.0 {
            write!(self.writer, "\r{}\r", " ".repeat(WIDTH))?;
            writeln!(self.writer)?;
        }

        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(values: &[f64]) -> String {
        let mut buffer = Vec::new();
        let mut bar = ProgressBar::new(&mut buffer);
        for &value in values {
            bar.update(value).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_bar_at_zero() {
        assert_eq!(render(&[0.0]), format!("\r{}", EMPTY.repeat(30)));
    }

    #[test]
    fn half_bar_fills_fifteen_cells() {
        let output = render(&[0.5]);

        assert_eq!(
            output,
            format!("\r{}{}", FILLED.repeat(15), EMPTY.repeat(15))
        );
    }

    #[test]
    fn values_outside_range_are_clamped() {
        assert_eq!(render(&[-0.5]), render(&[0.0]));
    }

    #[test]
    fn partial_cells_round_down() {
        // 0.33 * 30 = 9.9 -> 9 cells
        let output = render(&[0.33]);

        assert_eq!(output, format!("\r{}{}", FILLED.repeat(9), EMPTY.repeat(21)));
    }

    #[test]
    fn completion_erases_the_bar() {
        let output = render(&[1.0]);

        assert!(output.starts_with(&format!("\r{}", FILLED.repeat(30))));
        assert!(output.ends_with(&format!("\r{}\r\n", " ".repeat(30))));
    }

    #[test]
    fn each_update_redraws_in_place() {
        let output = render(&[0.0, 0.33, 0.67]);

        assert_eq!(output.matches('\r').count(), 3);
        assert!(!output.contains('\n'));
    }
}
