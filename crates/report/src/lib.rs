//! Report writers for the contributor census.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** File creation and encoding live here; the [`census`]
//! crate only hands over a [`census::RepositoryCounts`].
//!
//! ## CSV format
//!
//! ```text
//! Developer,Number of Repos
//! alice,2
//! bob,1
//! ```
//!
//! Rows follow the map's first-seen order. Lines end in `\r\n`. Fields are
//! quoted only when they contain a separator, a quote or a line break.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use census::RepositoryCounts;
use thiserror::Error;
use tracing::debug;

/// Header row of the developer report.
pub const HEADER: [&str; 2] = ["Developer", "Number of Repos"];

/// Errors produced while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The file could not be created or written.
    #[error("Failed to write report to {}", .path.display())]
    Io {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Writes `counts` as CSV to `path`, replacing any existing file.
pub fn write_csv(counts: &RepositoryCounts, path: &Path) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    render_csv(counts, &mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), "CSV file has been created");
    Ok(())
}

/// Writes `counts` as CSV to any writer.
pub fn render_csv<W: Write>(counts: &RepositoryCounts, out: &mut W) -> io::Result<()> {
    write_record(out, &HEADER)?;
    for (login, count) in counts.iter() {
        let count_field = count.to_string();
        write_record(out, &[login.as_str(), count_field.as_str()])?;
        debug!(developer = %login, count, "Wrote developer to CSV");
    }
    Ok(())
}

fn write_record<W: Write>(out: &mut W, fields: &[&str]) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        write_field(out, field)?;
    }
    out.write_all(b"\r\n")
}

fn write_field<W: Write>(out: &mut W, field: &str) -> io::Result<()> {
    if field.contains([',', '"', '\r', '\n']) {
        write!(out, "\"{}\"", field.replace('"', "\"\""))
    } else {
        out.write_all(field.as_bytes())
    }
}
