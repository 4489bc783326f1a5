use std::fmt;

/// A plain message error, used for command parsing and input validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Error {
    message: String,
}

impl Error {
    pub(crate) fn new(message: String) -> Error {
        Error { message }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
