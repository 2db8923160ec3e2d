//! Interactive prompting.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use tracing::debug;

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Ask once and return the trimmed answer. Fails on end of input.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for an answer");
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer. A blank answer falls back to
    /// `default` when one is given.
    pub fn ask_until_valid<T, E: Display>(
        &mut self,
        message: &str,
        default: Option<&str>,
        parse: impl Fn(&str) -> std::result::Result<T, E>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(message)?;
            let text = match (answer.is_empty(), default) {
                (true, Some(d)) => d.to_string(),
                _ => answer,
            };
            match parse(&text) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(input = %text, "Rejected answer");
                    self.say(format_args!("Invalid format: {e}. Please try again."))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxcut_units::parse_mm;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut p = prompter("abc\n5ft\n5cm\n");
        let mm = p.ask_until_valid("Dimension: ", None, parse_mm).unwrap();
        assert_eq!(mm, 50.0);

        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches("Dimension: ").count(), 3);
        assert_eq!(shown.matches("Invalid format").count(), 2);
    }

    #[test]
    fn test_blank_uses_default() {
        let mut p = prompter("\n");
        let mm = p
            .ask_until_valid("Thickness: ", Some("3mm"), parse_mm)
            .unwrap();
        assert_eq!(mm, 3.0);
    }

    #[test]
    fn test_blank_without_default_reprompts() {
        let mut p = prompter("\n  \n2in\n");
        let mm = p.ask_until_valid("Dimension: ", None, parse_mm).unwrap();
        assert_eq!(mm, 50.8);
    }

    #[test]
    fn test_eof_is_error() {
        let mut p = prompter("abc\n");
        assert!(p.ask_until_valid("Dimension: ", None, parse_mm).is_err());
    }
}
