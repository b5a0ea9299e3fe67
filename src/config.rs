//! Conversion configuration: where rules come from and where lists go.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::{Error, Result};

/// Where the filter list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Resolve a command-line value; absent, empty and `-` mean stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") | Some("-") => InputSource::Stdin,
            Some(path) => InputSource::File(PathBuf::from(path)),
        }
    }

    /// Open the source for line-by-line reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| Error::OpenInput {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Where an encoded rule list is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Standard output
    Stdout,
    /// A file on disk, replaced once the encoded list is written
    File(PathBuf),
}

impl OutputSink {
    /// Open the sink for writing.
    ///
    /// A file is created if missing but keeps its old contents until the
    /// first write or flush, so a run that fails before encoding finishes
    /// leaves it as it was.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputSink::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputSink::File(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .open(path)
                    .map_err(|source| Error::CreateOutput {
                        path: path.clone(),
                        source,
                    })?;
                Ok(Box::new(ReplacedFile::new(file)))
            }
        }
    }
}

/// File whose previous contents are dropped on the first write or flush.
struct ReplacedFile {
    file: File,
    truncated: bool,
}

impl ReplacedFile {
    fn new(file: File) -> Self {
        Self {
            file,
            truncated: false,
        }
    }

    fn truncate_once(&mut self) -> io::Result<()> {
        if !self.truncated {
            self.file.set_len(0)?;
            self.truncated = true;
        }
        Ok(())
    }
}

impl Write for ReplacedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.truncate_once()?;
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.truncate_once()?;
        self.file.flush()
    }
}

/// Resolved conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Filter list source
    pub input: InputSource,
    /// Site list destination; `None` discards site rules
    pub sites: Option<OutputSink>,
    /// IP list destination; `None` discards ip rules
    pub ips: Option<OutputSink>,
}

impl ConvertConfig {
    /// Resolve raw command-line values.
    ///
    /// - `sites` takes precedence over `output`.
    /// - `ips` of `-` claims stdout; the site list is then written only if it
    ///   names a file, otherwise it is discarded.
    /// - An unset `ips` discards ip rules.
    pub fn resolve(
        input: Option<&str>,
        output: Option<&str>,
        sites: Option<&str>,
        ips: Option<&str>,
    ) -> Self {
        let ips = match ips {
            None | Some("") => None,
            Some("-") => Some(OutputSink::Stdout),
            Some(path) => Some(OutputSink::File(PathBuf::from(path))),
        };

        let sites = match sites.filter(|s| !s.is_empty()).or(output) {
            None | Some("") | Some("-") if ips == Some(OutputSink::Stdout) => None,
            None | Some("") | Some("-") => Some(OutputSink::Stdout),
            Some(path) => Some(OutputSink::File(PathBuf::from(path))),
        };

        Self {
            input: InputSource::from_arg(input),
            sites,
            ips,
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}
