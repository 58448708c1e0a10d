#![allow(dead_code)]

use color_eyre::{Result, eyre::eyre};
use dirhist::controller::NavigationController;
use dirhist::history::Location;
use dirhist::navigator::{ClipboardSink, Navigator};
use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::rc::Rc;

/// Navigator over an in-memory set of directory names.
#[derive(Debug, Default)]
pub struct FakeNavigator {
    pub cwd: String,
    pub dirs: HashSet<String>,
    /// Every target passed to `attempt_change`, in order.
    pub attempts: Vec<String>,
    /// Report success without moving.
    pub stuck: bool,
}

impl FakeNavigator {
    pub fn new(start: &str, dirs: &[&str]) -> Self {
        let mut known: HashSet<String> = dirs.iter().map(|d| d.to_string()).collect();
        known.insert(start.to_string());
        Self {
            cwd: start.to_string(),
            dirs: known,
            attempts: Vec::new(),
            stuck: false,
        }
    }
}

impl Navigator for FakeNavigator {
    fn current_location(&self) -> Location {
        self.cwd.clone()
    }

    fn attempt_change(&mut self, target: &str, _literal: bool) -> io::Result<()> {
        self.attempts.push(target.to_string());
        if self.stuck {
            return Ok(());
        }
        if self.dirs.contains(target) {
            self.cwd = target.to_string();
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"))
        }
    }
}

/// Clipboard that keeps the last copied text. Clones share the same text,
/// so a test can keep one while the controller owns another.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Rc<RefCell<Option<String>>>,
    pub broken: bool,
}

impl MemoryClipboard {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.broken {
            return Err(eyre!("no display"));
        }
        *self.text.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

pub type FakeController = NavigationController<FakeNavigator, MemoryClipboard>;

pub fn controller(start: &str, dirs: &[&str]) -> FakeController {
    with_clipboard(start, dirs).0
}

/// Like `controller`, also handing back the clipboard it copies to.
pub fn with_clipboard(start: &str, dirs: &[&str]) -> (FakeController, MemoryClipboard) {
    let clipboard = MemoryClipboard::default();
    let nav = NavigationController::new(FakeNavigator::new(start, dirs), clipboard.clone());
    (nav, clipboard)
}

pub fn locs(items: &[&str]) -> Vec<Location> {
    items.iter().map(|s| s.to_string()).collect()
}
