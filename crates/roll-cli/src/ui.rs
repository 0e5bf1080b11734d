//! Terminal presentation settings, resolved once from the global flags.

use std::io::IsTerminal;
use std::sync::OnceLock;

use roll_core::enums::Standing;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored; tables would be mostly ellipses.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Color standings and attended flags in table cells.
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = UiPrefs {
        table_color: table_color(
            flags,
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        ),
        term_width: term_width(std::env::var("COLUMNS").ok().as_deref()),
    };
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

/// Only table output is ever colored. `--color always` beats `NO_COLOR`.
fn table_color(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !flags.quiet && !no_color,
    }
}

fn term_width(columns: Option<&str>) -> Option<usize> {
    columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH)
}

/// ANSI SGR code for a rendered cell: projection standings and the
/// `attended` flag. Anything else stays uncolored.
#[must_use]
pub fn cell_style(value: &str) -> Option<&'static str> {
    const GREEN: &str = "32";
    const YELLOW: &str = "33";
    const RED: &str = "31";

    let standing = [Standing::Safe, Standing::Warning, Standing::Critical]
        .into_iter()
        .find(|standing| standing.as_str() == value);
    match (standing, value) {
        (Some(Standing::Safe), _) | (None, "true") => Some(GREEN),
        (Some(Standing::Warning), _) => Some(YELLOW),
        (Some(Standing::Critical), _) | (None, "false") => Some(RED),
        (None, _) => None,
    }
}
