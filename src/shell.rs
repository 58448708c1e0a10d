use crate::command::{Builtin, CdArgs, DirsArgs, StepArgs};
use crate::config::Config;
use crate::controller::{Intent, NavigationController, Outcome};
use crate::formatter::{HistoryRow, render};
use crate::history::HistoryStore;
use crate::navigator::{ClipboardSink, Navigator};
use clap::Parser;
use color_eyre::{Result, eyre::eyre};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Whether the session keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Splits a command line into words.
///
/// Whitespace separates words, single and double quotes group them, and on
/// unix a backslash escapes the next character outside quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => word.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' if cfg!(unix) => {
                    if let Some(escaped) = chars.next() {
                        word.push(escaped);
                    }
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut word));
                        in_word = false;
                    }
                }
                c => {
                    word.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(eyre!("unterminated quote"));
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}

/// An interactive session: one history, one location, one command at a time.
pub struct Shell<N, C> {
    controller: NavigationController<N, C>,
    store: HistoryStore,
    config: Config,
}

impl<N: Navigator, C: ClipboardSink> Shell<N, C> {
    pub fn new(controller: NavigationController<N, C>, config: Config) -> Self {
        let controller = controller.with_marker(config.marker.clone());
        Self {
            controller,
            store: HistoryStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn controller(&self) -> &NavigationController<N, C> {
        &self.controller
    }

    pub fn prompt(&self) -> String {
        self.config.prompt_for(&self.controller.current_location())
    }

    /// Reads and handles lines until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        info!("Session started");
        loop {
            write!(out, "{}", self.prompt())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
            if self.handle_line(&line, &mut input, &mut out)? == Flow::Exit {
                break;
            }
        }
        info!(
            "Session ended with {} history entries",
            self.store.len() - 1
        );
        Ok(())
    }

    /// Handles one command line. `input` is only read when a command needs
    /// confirmation.
    pub fn handle_line<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
    ) -> Result<Flow> {
        let words = match tokenize(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "dirhist: {}", e)?;
                return Ok(Flow::Continue);
            }
        };
        let Some(name) = words.first() else {
            return Ok(Flow::Continue);
        };

        match Builtin::from_name(name) {
            Some(Builtin::Cd) => {
                if let Some(args) = parse_args::<CdArgs, _>(&words, out)? {
                    self.navigate(args.intent(), args.copy, out)?;
                }
            }
            Some(Builtin::Back) => {
                if let Some(args) = parse_args::<StepArgs, _>(&words, out)? {
                    self.navigate(Intent::Backward, args.copy, out)?;
                }
            }
            Some(Builtin::Forward) => {
                if let Some(args) = parse_args::<StepArgs, _>(&words, out)? {
                    self.navigate(Intent::Forward, args.copy, out)?;
                }
            }
            Some(Builtin::Dirs) => {
                if let Some(args) = parse_args::<DirsArgs, _>(&words, out)? {
                    self.dirs(args, input, out)?;
                }
            }
            Some(Builtin::Pwd) => writeln!(out, "{}", self.controller.current_location())?,
            Some(Builtin::Help) => {
                for builtin in Builtin::ALL {
                    writeln!(out, "{:<6} {}", builtin.name(), builtin.description())?;
                }
            }
            Some(Builtin::Exit) => return Ok(Flow::Exit),
            None => self.spawn(&words, out)?,
        }
        Ok(Flow::Continue)
    }

    fn navigate<W: Write>(&mut self, intent: Intent, copy: bool, out: &mut W) -> Result<()> {
        match self.controller.execute(&mut self.store, intent, copy) {
            Ok(Outcome::Listed(rows)) => self.print_rows(&rows, false, out)?,
            Ok(Outcome::Moved { copied: false, .. }) if copy => {
                writeln!(out, "warning: could not copy location to clipboard")?
            }
            Ok(_) => {}
            Err(e) => writeln!(out, "warning: {}", e)?,
        }
        Ok(())
    }

    fn dirs<R: BufRead, W: Write>(
        &mut self,
        args: DirsArgs,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        if let Some(id) = args.remove {
            match self.controller.remove(&mut self.store, id) {
                Ok(location) => writeln!(out, "removed {}: {}", id, location)?,
                Err(e) => writeln!(out, "warning: {}", e)?,
            }
        } else if args.clear {
            if self.config.confirm_clear
                && !args.yes
                && !confirm("Clear directory history?", input, out)?
            {
                return Ok(());
            }
            self.controller.clear(&mut self.store);
        } else {
            let rows = self.controller.rows(&self.store);
            self.print_rows(&rows, args.json, out)?;
        }
        Ok(())
    }

    fn print_rows<W: Write>(&self, rows: &[HistoryRow], json: bool, out: &mut W) -> Result<()> {
        if json {
            writeln!(out, "{}", serde_json::to_string_pretty(rows)?)?;
        } else {
            write!(out, "{}", render(rows, self.config.color))?;
        }
        Ok(())
    }

    fn spawn<W: Write>(&self, words: &[String], out: &mut W) -> Result<()> {
        let (program, args) = match words.split_first() {
            Some(split) => split,
            None => return Ok(()),
        };

        let status = std::process::Command::new(program)
            .args(args)
            .current_dir(self.controller.current_location())
            .status();
        match status {
            Ok(status) => debug!("{} exited with {}", program, status),
            Err(e) => writeln!(out, "dirhist: {}: {}", program, e)?,
        }
        Ok(())
    }
}

/// Parses builtin arguments, printing usage errors (and `--help`) to `out`.
fn parse_args<P: Parser, W: Write>(words: &[String], out: &mut W) -> Result<Option<P>> {
    match P::try_parse_from(words) {
        Ok(args) => Ok(Some(args)),
        Err(e) => {
            write!(out, "{}", e)?;
            Ok(None)
        }
    }
}

fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "{} [y/N] ", question)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
