//! Output destinations for rendered art.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{AsciiError, Result};

/// Where rendered art is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    fn label(&self) -> &Path {
        match self {
            Destination::Stdout => Path::new("<stdout>"),
            Destination::File(path) => path,
        }
    }
}

/// Write the raw bytes of `art` to `destination`.
///
/// A failed write leaves `art` untouched, so callers can still show it.
pub fn write_ascii_art(art: &str, destination: &Destination) -> Result<()> {
    let written = match destination {
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(art.as_bytes())
                .and_then(|_| stdout.flush())
        }
        Destination::File(path) => fs::write(path, art.as_bytes()),
    };

    written.map_err(|source| AsciiError::Write {
        path: destination.label().to_path_buf(),
        source,
    })?;

    log::debug!(
        "wrote {} bytes to {}",
        art.len(),
        destination.label().display()
    );
    Ok(())
}
