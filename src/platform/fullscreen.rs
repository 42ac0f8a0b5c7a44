//! Fullscreen primitive

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

/// Reads and flips the real fullscreen state of the host window
pub trait Fullscreen: Send {
    fn is_fullscreen(&self) -> bool;
    fn toggle(&mut self) -> Result<()>;
}

/// Uses the xterm window-manipulation sequence (`CSI 10 ; n t`).
/// Terminals that do not support it ignore the sequence.
#[derive(Debug, Default)]
pub struct TerminalFullscreen {
    active: bool,
}

impl TerminalFullscreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fullscreen for TerminalFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.active
    }

    fn toggle(&mut self) -> Result<()> {
        let next = !self.active;
        let mut stdout = io::stdout();
        write!(stdout, "\x1b[10;{}t", u8::from(next))?;
        stdout.flush()?;
        debug!(fullscreen = next, "toggled terminal fullscreen");
        self.active = next;
        Ok(())
    }
}
