use regex::Regex;
use std::path::{MAIN_SEPARATOR, PathBuf};
use std::sync::LazyLock;

/// A path made only of three or more dots.
static DOT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\.{3,}$").unwrap());

/// Expands a run of dots into parent directory steps.
///
/// Every `...` becomes two `..` segments, repeated until no run of three
/// dots is left, so `...` climbs two levels and `....` climbs three. Any
/// other path is returned untouched.
pub fn expand_dots(path: &str) -> String {
    if !DOT_RUN.is_match(path) {
        return path.to_string();
    }

    let two_levels = format!("..{MAIN_SEPARATOR}..");
    let mut expanded = path.to_string();
    while let Some(pos) = expanded.find("...") {
        expanded.replace_range(pos..pos + 3, &two_levels);
    }
    expanded
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &str) -> String {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/") {
        rest
    } else if let Some(rest) = path.strip_prefix(&format!("~{MAIN_SEPARATOR}")) {
        rest
    } else {
        return path.to_string();
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home.to_string_lossy().into_owned(),
        Some(home) => home.join(rest).to_string_lossy().into_owned(),
        None => path.to_string(),
    }
}

/// Turns a path typed by the user into the directory to change to.
///
/// Literal paths skip dot and home expansion. An absolute path that is not
/// an existing directory is taken to name a file (or a leaf that does not
/// exist yet) and is replaced by its parent.
pub fn resolve(path: &str, literal: bool) -> String {
    let expanded = if literal {
        path.to_string()
    } else {
        expand_home(&expand_dots(path))
    };

    let candidate = PathBuf::from(&expanded);
    if candidate.is_absolute()
        && !candidate.is_dir()
        && let Some(parent) = candidate.parent().filter(|p| !p.as_os_str().is_empty())
    {
        return parent.to_string_lossy().into_owned();
    }
    expanded
}

/// Returns true when `arg` should be read as a history id instead of a path.
pub fn is_history_id(arg: &str) -> bool {
    !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) && arg.parse::<usize>().is_ok()
}
