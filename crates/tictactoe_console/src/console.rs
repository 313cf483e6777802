//! Line-oriented console shared by the human seat and the frontend.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::trace;

/// Console handle shared between the human mover and the frontend.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

/// A reader and writer pair speaking whole lines.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Creates a console wrapped for sharing.
    pub fn shared(reader: R, writer: W) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(Self::new(reader, writer)))
    }

    /// Writes text without a trailing newline and flushes.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    /// Writes a line.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Reads one line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD so they reach the
    /// parsers as ordinary bad input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            trace!("End of input");
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        trace!(%line, "Read line");
        Ok(Some(line))
    }

    /// Writes `prompt` then reads the answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt)?;
        self.read_line()
    }

    /// Returns the writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the console and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut console = Console::new(Cursor::new("5\r\nyes\n"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("5"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("yes"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut console = Console::new(Cursor::new(vec![0xff, 0xfe, b'\n', b'7', b'\n']), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn test_ask_writes_prompt() {
        let mut console = Console::new(Cursor::new("n\n"), Vec::new());
        assert_eq!(console.ask("again? ").unwrap().as_deref(), Some("n"));
        assert_eq!(console.into_writer(), b"again? ".to_vec());
    }
}
