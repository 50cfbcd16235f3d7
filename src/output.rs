use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes each line followed by a newline, byte for byte.
pub fn dump_lines(out: &mut impl Write, lines: &[&[u8]]) -> io::Result<()> {
    for line in lines {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes `lines` to `path`, replacing anything already there. Progress
/// messages go to `out`.
pub fn write_lines(out: &mut impl Write, path: &Path, lines: &[&[u8]]) -> Result<()> {
    if path.exists() {
        writeln!(out, "WARNING: File already exists: {}", path.display())?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    dump_lines(&mut writer, lines)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), lines = lines.len(), "wrote file");
    writeln!(out, "Wrote {} lines to \"{}\"", lines.len(), path.display())?;
    Ok(())
}
