use custman::error::{CustomerError, Result};
use std::io::{BufRead, Write};

/// Line-oriented prompting over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// True once the input has reached end of file.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `label` and reads one line, trimmed. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            self.closed = true;
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Yes/no question; only `y` or `Y` counts as yes.
    pub fn confirm(&mut self, label: &str) -> Result<Option<bool>> {
        Ok(self
            .ask(label)?
            .map(|answer| answer.eq_ignore_ascii_case("y")))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses an integer field, naming `field` in the error.
pub fn parse_number(field: &str, raw: &str) -> std::result::Result<i64, CustomerError> {
    raw.parse().map_err(|_| {
        CustomerError::MalformedInput(format!("{} must be a whole number, got '{}'", field, raw))
    })
}
