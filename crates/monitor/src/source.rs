//! Line sources feeding the mainloop.

use std::io::BufRead;

use tracing::warn;

/// Supplies command lines to the shell.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` at end of input.
    ///
    /// Interactive sources show `prompt`; others ignore it.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Reads lines from any buffered reader (piped stdin, a script file, a test string).
///
/// Keeps no history and shows no prompt.
#[derive(Debug)]
pub struct BufReadSource<R> {
    reader: R,
}

impl<R: BufRead> BufReadSource<R> {
    /// Wraps `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(len);
                Some(line)
            }
            Err(e) => {
                warn!(error = %e, "input read failed, treating as end of input");
                None
            }
        }
    }
}
