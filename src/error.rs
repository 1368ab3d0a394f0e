//! Error types for scene serialization and rendering.
//!
//! The core can fail in only a few local, non-recoverable ways: a name that
//! cannot become a tag, a value that cannot be formatted as a scene literal,
//! or a malformed map/call node. Everything else — wrong arity, a keyword
//! POV-Ray does not know, a texture where a pigment belongs — is deliberately
//! not detected here and surfaces as a [`Error::Render`] when POV-Ray parses
//! the generated text.
//!
//! ## Examples
//!
//! ```rust
//! use povgen::{args, to_string, Error, Node};
//!
//! let bad = Node::new("Sphere", args![f64::NAN]).unwrap();
//! match to_string(&bad) {
//!     Err(Error::NonFiniteNumber(_)) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors from building, serializing, or rendering a
/// scene.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A construct name that cannot be turned into a tag.
    #[error("invalid construct name {0:?}: names must start with an ASCII letter")]
    InvalidName(String),

    /// A float with no scene description literal (NaN or infinite).
    #[error("cannot format non-finite number {0} as a scene literal")]
    NonFiniteNumber(f64),

    /// A map node argument that is not an entry sequence.
    #[error("map entries must be sequences of values, found {0}")]
    BadMapEntry(String),

    /// A call node whose first argument is not a macro name.
    #[error("macro calls need a callee name as their first argument")]
    MissingCallee,

    /// IO error while writing the scene source or reading renderer output.
    #[error("IO error: {0}")]
    Io(String),

    /// POV-Ray exited unsuccessfully.
    #[error("POV-Ray rendering failed ({status}): {stderr}")]
    Render { status: String, stderr: String },

    /// Renderer output that could not be decoded as a pixel buffer.
    #[error("cannot decode renderer output: {0}")]
    Decode(String),
}

impl Error {
    /// Creates an I/O error from any displayable cause.
    pub fn io<T: fmt::Display>(cause: T) -> Self {
        Error::Io(cause.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
