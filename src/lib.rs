use std::io::Write;

use log::info;
use serde_json::Value;

mod album;

pub use album::{Album, GENRES};

/// Builds a few albums and writes the first one's release date, then the
/// number of albums counted so far, one per line.
pub fn run<W: Write>(out: &mut W) -> std::io::Result<()> {
    let mut album = Album::new("Hip-Hop");
    album.set_release_date(1991);
    if let Some(date) = album.release_date() {
        write_value(out, date)?;
    }

    for genre in ["Hip-Hop", "Pop", "Jazz"] {
        Album::new(genre);
    }

    info!("Albums counted: {}", Album::count());
    writeln!(out, "{}", Album::count())?;

    Ok(())
}

/// Writes `value` on its own line, strings without their JSON quotes.
fn write_value<W: Write>(out: &mut W, value: &Value) -> std::io::Result<()> {
    match value.as_str() {
        Some(s) => writeln!(out, "{}", s),
        None => writeln!(out, "{}", value),
    }
}
