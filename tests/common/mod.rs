use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a request CSV with the standard header followed by `rows`.
pub fn request_csv(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "principal, birthDate, termMonths")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}
