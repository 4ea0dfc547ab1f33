//! Output destination for the serialized playlist

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// Where the document is written, selected once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    /// Select the sink from the `--output` argument; `-` means stdout
    pub fn from_arg(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdout,
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// Whether the provider must keep quiet so its output does not mix with the document
    pub fn quiet(&self) -> bool {
        self.is_stdout()
    }

    /// Write the complete document and release the destination
    pub fn write(&self, contents: &[u8]) -> Result<()> {
        let result = match self {
            Self::Stdout => write_stdout(contents),
            Self::File(path) => write_file(path, contents),
        };
        result.map_err(|source| Error::Output {
            target: self.to_string(),
            source,
        })?;

        debug!("Wrote {} bytes to {}", contents.len(), self);
        Ok(())
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn write_stdout(contents: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(contents)?;
    stdout.flush()
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.flush()
}
