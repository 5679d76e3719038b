// src/output/writer.rs
//! Delivers rendered output by performing the actual I/O.
//!
//! This is the only place output is written, keeping rendering pure and
//! testable.

use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Print to stdout
    PrintToStdout,
    /// Write to a file, creating parent directories as needed
    WriteFile { path: PathBuf },
}

/// Writes `content` to `target`, returning the number of bytes written.
pub fn deliver(target: &DeliveryTarget, content: &str) -> Result<usize, AppError> {
    match target {
        DeliveryTarget::PrintToStdout => print_to_stdout(content)?,
        DeliveryTarget::WriteFile { path } => write_file(path, content)?,
    }
    Ok(content.len())
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(())
}

fn print_to_stdout(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = std::env::temp_dir().join(format!("rrc_production_writer_{}", std::process::id()));
        let path = dir.join("nested").join("production.tsv");

        let written = deliver(&DeliveryTarget::WriteFile { path: path.clone() }, "API\tMonth\n").unwrap();

        assert_eq!(written, 10);
        assert_eq!(fs::read_to_string(&path).unwrap(), "API\tMonth\n");
        fs::remove_dir_all(&dir).unwrap();
    }
}
