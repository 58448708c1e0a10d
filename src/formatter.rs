use crate::history::HistoryStore;
use crossterm::style::Stylize;
use serde::Serialize;

/// Marker shown next to the current location unless configured otherwise.
pub const DEFAULT_MARKER: &str = "*";

/// One line of the history listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// Set only on the row for the current location.
    pub marker: Option<String>,
    pub id: usize,
    pub path: String,
}

impl HistoryRow {
    pub fn is_current(&self) -> bool {
        self.marker.is_some()
    }
}

/// Lists the backward stack oldest first, then `current`, then the forward
/// stack nearest first, numbered with their ids.
pub fn format_history(store: &HistoryStore, current: &str, marker: &str) -> Vec<HistoryRow> {
    let backward = store.backward().iter().map(|path| (None, path.as_str()));
    let current = std::iter::once((Some(marker.to_string()), current));
    let forward = store.forward().iter().map(|path| (None, path.as_str()));

    backward
        .chain(current)
        .chain(forward)
        .enumerate()
        .map(|(id, (marker, path))| HistoryRow {
            marker,
            id,
            path: path.to_string(),
        })
        .collect()
}

/// Renders rows as aligned text, one per line. With `color` the current row
/// is highlighted.
pub fn render(rows: &[HistoryRow], color: bool) -> String {
    let marker_width = rows
        .iter()
        .filter_map(|row| row.marker.as_ref())
        .map(|marker| marker.chars().count())
        .max()
        .unwrap_or(0);
    let id_width = rows.last().map(|row| row.id.to_string().len()).unwrap_or(1);

    let mut out = String::new();
    for row in rows {
        let line = format!(
            "{:>marker_width$} {:>id_width$} {}",
            row.marker.as_deref().unwrap_or(""),
            row.id,
            row.path,
        );
        if color && row.is_current() {
            out.push_str(&line.bold().green().to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}
