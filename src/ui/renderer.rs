//! Text renderer for screen view models.
//!
//! Writes a [`ScreenViewModel`] as plain lines to any `io::Write`, so the same
//! code serves the terminal host and the tests.
//!
//! # Layout
//!
//! ```text
//! Search: dune  [clear] [search]
//! ----------------------------------------
//! 1. Dune (Frank Herbert)
//!    http://books.google.com/books/content?id=...
//! ```

use super::viewmodel::{Body, ScreenViewModel};
use std::io::{self, Write};

const RULE_WIDTH: usize = 40;

/// Renders the view model to `out`.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render<W: Write>(vm: &ScreenViewModel, out: &mut W) -> io::Result<()> {
    if vm.search_bar.show_buttons {
        writeln!(out, "Search: {}  [clear] [search]", vm.search_bar.query)?;
    } else {
        writeln!(out, "Search: {}", vm.search_bar.query)?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    match &vm.body {
        Body::Start { message } | Body::NoContent { message } => writeln!(out, "{message}")?,
        Body::Loading => writeln!(out, "Loading...")?,
        Body::Error {
            message,
            retry_label,
        } => {
            writeln!(out, "{message}")?;
            writeln!(out, "[{retry_label}]")?;
        }
        Body::Grid { cards } => {
            for (idx, card) in cards.iter().enumerate() {
                match &card.authors {
                    Some(authors) => writeln!(out, "{}. {} ({authors})", idx + 1, card.title)?,
                    None => writeln!(out, "{}. {}", idx + 1, card.title)?,
                }
                writeln!(out, "   {}", card.thumbnail_url)?;
            }
        }
    }

    out.flush()
}
