use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingDescription,
    MissingHttpMethod,
    InvalidHttpMethod,
    MissingPath,
    MissingStatusCode,
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingDescription => {
                write!(f, "a description for the interaction is required")
            }
            Error::MissingHttpMethod => write!(f, "an HTTP method is required"),
            Error::InvalidHttpMethod => write!(f, "a valid HTTP method is required"),
            Error::MissingPath => write!(f, "a path is required"),
            Error::MissingStatusCode => write!(f, "a status code is required"),
        }
    }
}
