use crate::controller::Intent;
use crate::resolver::is_history_id;
use clap::Parser;

/// Commands handled by the shell itself rather than spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Cd,
    Back,
    Forward,
    Dirs,
    Pwd,
    Help,
    Exit,
}

impl Builtin {
    pub const ALL: [Builtin; 7] = [
        Builtin::Cd,
        Builtin::Back,
        Builtin::Forward,
        Builtin::Dirs,
        Builtin::Pwd,
        Builtin::Help,
        Builtin::Exit,
    ];

    /// Looks up the builtin invoked as `name`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Builtin::Cd),
            "back" => Some(Builtin::Back),
            "fwd" | "forward" => Some(Builtin::Forward),
            "dirs" => Some(Builtin::Dirs),
            "pwd" => Some(Builtin::Pwd),
            "help" => Some(Builtin::Help),
            "exit" | "quit" => Some(Builtin::Exit),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Back => "back",
            Builtin::Forward => "fwd",
            Builtin::Dirs => "dirs",
            Builtin::Pwd => "pwd",
            Builtin::Help => "help",
            Builtin::Exit => "exit",
        }
    }

    /// Returns a human-readable description of this command.
    pub fn description(&self) -> &'static str {
        match self {
            Builtin::Cd => "Change directory, list history with no argument",
            Builtin::Back => "Go back in directory history",
            Builtin::Forward => "Go forward in directory history",
            Builtin::Dirs => "List, remove or clear directory history",
            Builtin::Pwd => "Print the current directory",
            Builtin::Help => "Show this help",
            Builtin::Exit => "Leave the shell",
        }
    }
}

/// Arguments of `cd`.
#[derive(Parser, Debug)]
#[command(name = "cd", disable_version_flag = true)]
pub struct CdArgs {
    /// Directory to go to, `-` for back, `+` for forward, or a history id
    #[arg(allow_negative_numbers = true)]
    pub path: Option<String>,

    /// Go back in history
    #[arg(short, long, conflicts_with_all = ["forward", "id", "path"])]
    pub back: bool,

    /// Go forward in history
    #[arg(short, long, conflicts_with_all = ["id", "path"])]
    pub forward: bool,

    /// Go to the history entry with this id
    #[arg(short, long, value_name = "ID", conflicts_with = "path")]
    pub id: Option<usize>,

    /// Take PATH as written, even when it is a number
    #[arg(short, long)]
    pub literal: bool,

    /// Copy the resulting directory to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

impl CdArgs {
    /// Turns the parsed arguments into a navigation intent. A purely
    /// numeric path is a history id unless `--literal` was given.
    pub fn intent(&self) -> Intent {
        if self.back {
            return Intent::Backward;
        }
        if self.forward {
            return Intent::Forward;
        }
        if let Some(id) = self.id {
            return Intent::ById(id);
        }

        match self.path.as_deref() {
            None | Some("") => Intent::Empty,
            Some(path) if self.literal => Intent::Path {
                path: path.to_string(),
                literal: true,
            },
            Some("-") => Intent::Backward,
            Some("+") => Intent::Forward,
            Some(path) if is_history_id(path) => match path.parse() {
                Ok(id) => Intent::ById(id),
                Err(_) => Intent::Path {
                    path: path.to_string(),
                    literal: false,
                },
            },
            Some(path) => Intent::Path {
                path: path.to_string(),
                literal: false,
            },
        }
    }
}

/// Arguments of `back` and `fwd`.
#[derive(Parser, Debug)]
#[command(disable_version_flag = true)]
pub struct StepArgs {
    /// Copy the resulting directory to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

/// Arguments of `dirs`.
#[derive(Parser, Debug)]
#[command(name = "dirs", disable_version_flag = true)]
pub struct DirsArgs {
    /// Remove the entry with this id
    #[arg(short, long, value_name = "ID", conflicts_with = "clear")]
    pub remove: Option<usize>,

    /// Clear the whole history
    #[arg(short, long)]
    pub clear: bool,

    /// Do not ask before clearing
    #[arg(short, long, requires = "clear")]
    pub yes: bool,

    /// Print the history as JSON
    #[arg(long, conflicts_with_all = ["remove", "clear"])]
    pub json: bool,
}
