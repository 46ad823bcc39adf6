//! Terminal presentation: list row layout, colored messages, and the purge prompt.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::domain::VirtualId;

/// Number of decimal digits needed to print `count`.
pub fn id_width(count: usize) -> usize {
    count.max(1).ilog10() as usize + 1
}

/// Formats one list row with the id right-aligned to `width`.
pub fn format_row(virtual_id: VirtualId, content: &str, width: usize) -> String {
    format!("{:>width$} - {}", virtual_id.get(), content)
}

/// Writes the preamble shown above a non-empty listing.
pub fn write_list_preamble<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "{}", format!("count {count}").dimmed())?;
    writeln!(out, "{}", "id - note".dimmed())
}

/// Writes the one-time notice for a freshly created database.
pub fn write_creation_notice<W: Write>(
    out: &mut W,
    db_path: &Path,
    dir: &Path,
) -> io::Result<()> {
    let name = db_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| db_path.display().to_string());
    writeln!(
        out,
        "{}",
        format!("Created '{}' database at: {}", name, dir.display()).blue()
    )
}

pub fn write_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message)
}

/// Writes the purge warning and leaves the cursor after the `> ` marker.
pub fn write_purge_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "This operation will delete your entire notes database.".red()
    )?;
    writeln!(out, "Type \"y\" to proceed, type anything else to cancel.")?;
    write!(out, "{}", "> ".blue())?;
    out.flush()
}

pub fn write_purged<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Sticky notes database deleted.".yellow())
}

pub fn write_preserved<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Sticky notes database preserved.".green())
}

/// Reads one line and reports whether it is exactly `y`.
///
/// The answer is compared as raw bytes, so input that is not UTF-8 simply
/// declines. Only the line terminator is stripped; `" y"`, `"Y"` and `"yes"`
/// decline. End of input declines as well.
pub fn read_confirmation<R: BufRead>(input: &mut R) -> io::Result<bool> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(false);
    }

    let answer = line.strip_suffix(b"\n").unwrap_or(&line[..]);
    let answer = answer.strip_suffix(b"\r").unwrap_or(answer);
    Ok(answer == b"y")
}
