//! Where the payload comes from: `--text`, or stdin when something is piped in.

use std::io::{self, BufRead as _, IsTerminal as _, Read};

/// Source of piped payload data, swappable in tests.
pub trait StdinReader {
    /// Reads until EOF. `Ok(None)` when nothing was provided.
    fn read_body(&mut self) -> io::Result<Option<String>>;

    /// Whether the source is an interactive terminal (and must not be read).
    fn is_terminal(&self) -> bool;
}

pub struct RealStdinReader<R: Read> {
    reader: io::BufReader<R>,
    terminal: bool,
}

impl RealStdinReader<io::Stdin> {
    pub fn new() -> Self {
        let stdin = io::stdin();
        let terminal = stdin.is_terminal();
        Self {
            reader: io::BufReader::new(stdin),
            terminal,
        }
    }
}

impl Default for RealStdinReader<io::Stdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Read> RealStdinReader<R> {
    /// Reads from any source as if it were piped stdin.
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: io::BufReader::new(reader),
            terminal: false,
        }
    }
}

impl<R: Read> StdinReader for RealStdinReader<R> {
    fn read_body(&mut self) -> io::Result<Option<String>> {
        let mut content = String::new();

        // read_line returns Ok(0) on EOF.
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line)? {
                0 => break,
                _ => content.push_str(&line),
            }
        }

        Ok(Some(content).filter(|c| !c.is_empty()))
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

/// Picks the payload: `--text` wins, then piped stdin, else empty.
///
/// A single trailing newline from stdin is dropped so `echo hello | qrgen url`
/// encodes `hello`, not `hello\n`.
pub fn resolve_payload<R: StdinReader>(text: Option<String>, reader: &mut R) -> io::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if reader.is_terminal() {
        return Ok(String::new());
    }

    let mut body = reader.read_body()?.unwrap_or_default();
    if body.ends_with('\n') {
        body.pop();
        if body.ends_with('\r') {
            body.pop();
        }
    }
    Ok(body)
}
