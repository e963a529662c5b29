use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl std::error::Error for Error {}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn new(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

/// The kind of an error that can occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Read(PathBuf, std::io::Error),
    Write(PathBuf, std::io::Error),
    JSONParse(PathBuf, serde_json::Error),
    JSONSerialize(serde_json::Error),
    EmptyApiKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Read(ref path, ref err) => {
                write!(f, "could not read {}: {}", path.display(), err)
            }
            ErrorKind::Write(ref path, ref err) => {
                write!(f, "could not write {}: {}", path.display(), err)
            }
            ErrorKind::JSONParse(ref path, ref err) => {
                write!(f, "invalid config file {}: {}", path.display(), err)
            }
            ErrorKind::JSONSerialize(ref err) => err.fmt(f),
            ErrorKind::EmptyApiKey => write!(f, "API key field is empty."),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::JSONSerialize(e),
        }
    }
}
