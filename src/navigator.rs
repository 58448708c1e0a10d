use crate::history::Location;
use color_eyre::Result;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// The shell's own directory change primitive.
pub trait Navigator {
    /// Returns the location the shell is in right now.
    fn current_location(&self) -> Location;

    /// Tries to move the shell to `target`. A failed attempt must leave the
    /// current location where it was.
    fn attempt_change(&mut self, target: &str, literal: bool) -> io::Result<()>;

    /// Compares two locations the way the platform compares paths.
    fn same_location(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

/// Receives text to place on the system clipboard.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Navigates by changing the working directory of this process.
#[derive(Debug)]
pub struct ProcessNavigator {
    /// Fallback for when the working directory can no longer be read, for
    /// instance after it was deleted.
    last_known: Location,
}

impl Default for ProcessNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessNavigator {
    pub fn new() -> Self {
        let last_known = std::env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .or_else(|_| std::env::var("PWD"))
            .unwrap_or_else(|_| std::path::MAIN_SEPARATOR.to_string());
        info!("Starting in {}", last_known);
        Self { last_known }
    }
}

impl Navigator for ProcessNavigator {
    fn current_location(&self) -> Location {
        std::env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_else(|_| self.last_known.clone())
    }

    fn attempt_change(&mut self, target: &str, literal: bool) -> io::Result<()> {
        debug!("set_current_dir({:?}, literal={})", target, literal);
        std::env::set_current_dir(Path::new(target))?;
        self.last_known = self.current_location();
        Ok(())
    }

    fn same_location(&self, a: &str, b: &str) -> bool {
        if cfg!(windows) {
            a.trim_end_matches(['\\', '/'])
                .eq_ignore_ascii_case(b.trim_end_matches(['\\', '/']))
        } else {
            a == b
        }
    }
}

/// The desktop clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set_text(text.to_owned())?;
            debug!("Copied {:?} to clipboard", text);
        }
        Ok(())
    }
}
