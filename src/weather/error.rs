use std::fmt;

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

    /// Coarse classification used to pick the message shown to the user.
    pub fn class(&self) -> FailureClass {
        match self.kind {
            ErrorKind::NotFound => FailureClass::NotFound,
            ErrorKind::Unauthorized => FailureClass::Unauthorized,
            ErrorKind::NetworkUnavailable(_) => FailureClass::NetworkUnavailable,
            ErrorKind::Status(_, _) | ErrorKind::Transport(_) | ErrorKind::Body(_) => {
                FailureClass::OtherHttpError
            }
            ErrorKind::JSONParse(_) | ErrorKind::MissingField(_) => {
                FailureClass::MalformedResponse
            }
        }
    }

    pub(crate) fn status(code: u16, text: &str) -> Self {
        Error {
            kind: ErrorKind::Status(code, text.to_owned()),
        }
    }

    pub(crate) fn missing_field(field: &'static str) -> Self {
        Error {
            kind: ErrorKind::MissingField(field),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    NotFound,
    Unauthorized,
    NetworkUnavailable,
    OtherHttpError,
    MalformedResponse,
}

/// The kind of an error that can occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotFound,
    Unauthorized,
    NetworkUnavailable(ureq::Transport),
    Status(u16, String),
    Transport(ureq::Transport),
    Body(std::io::Error),
    JSONParse(serde_json::Error),
    MissingField(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::NotFound => write!(f, "404 Not Found"),
            ErrorKind::Unauthorized => write!(f, "401 Unauthorized"),
            ErrorKind::NetworkUnavailable(ref err) => err.fmt(f),
            ErrorKind::Status(code, ref text) => write!(f, "{} {}", code, text),
            ErrorKind::Transport(ref err) => err.fmt(f),
            ErrorKind::Body(ref err) => err.fmt(f),
            ErrorKind::JSONParse(ref err) => err.fmt(f),
            ErrorKind::MissingField(field) => write!(f, "response is missing `{}`", field),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let kind = match e {
            ureq::Error::Status(404, _) => ErrorKind::NotFound,
            ureq::Error::Status(401, _) => ErrorKind::Unauthorized,
            ureq::Error::Status(code, resp) => {
                ErrorKind::Status(code, resp.status_text().to_owned())
            }
            ureq::Error::Transport(t) => match t.kind() {
                ureq::ErrorKind::Dns | ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Io => {
                    ErrorKind::NetworkUnavailable(t)
                }
                _ => ErrorKind::Transport(t),
            },
        };
        Error { kind }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Body(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::JSONParse(e),
        }
    }
}
