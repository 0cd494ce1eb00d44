//! Interactive line source backed by rustyline.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use rvmon_sdb::LineSource;
use tracing::warn;

/// Terminal line editor with in-memory history.
pub struct Editor {
    inner: DefaultEditor,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor").finish_non_exhaustive()
    }
}

impl Editor {
    /// Opens the terminal.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be configured.
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            inner: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let line = accept(self.inner.readline(prompt))?;
        if wants_history(&line) {
            if let Err(e) = self.inner.add_history_entry(line.as_str()) {
                warn!(error = %e, "history entry dropped");
            }
        }
        Some(line)
    }
}

/// Maps a readline outcome to the next monitor line; `None` ends the session.
fn accept(res: Result<String, ReadlineError>) -> Option<String> {
    match res {
        Ok(line) => Some(line),
        // Ctrl-C abandons the current line only.
        Err(ReadlineError::Interrupted) => Some(String::new()),
        Err(ReadlineError::Eof) => None,
        Err(e) => {
            warn!(error = %e, "terminal read failed");
            None
        }
    }
}

fn wants_history(line: &str) -> bool {
    !line.is_empty()
}
