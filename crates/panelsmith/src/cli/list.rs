//! List command handler.

use super::load_book;
use std::io::Write;
use std::path::Path;

/// Writes one line per panel: name, aspect ratio, output file.
pub fn handle_list_command<W: Write>(book: Option<&Path>, out: &mut W) -> anyhow::Result<()> {
    let book = load_book(book)?;

    writeln!(out, "model: {}", book.model())?;
    for job in book.jobs()? {
        let ratio: &str = job.aspect_ratio().as_ref();
        writeln!(
            out,
            "{:<32} {:>5}  {}",
            job.name(),
            ratio,
            job.image_file_name()
        )?;
    }
    Ok(())
}
