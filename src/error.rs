use thiserror::Error;

/// Errors returned by the fallible operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The string is not 6 hexadecimal digits, optionally preceded
    /// by `#`.
    #[error("invalid hex color {0:?}: expected 6 hex digits, optionally prefixed by '#'")]
    InvalidFormat(String),
    /// An argument is outside the domain of the operation (e.g. an
    /// empty palette).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
