//! Result extension for ergonomic wrapping at call sites.
//!
//! [`ResultExt`] avoids the `map_err` boilerplate of threading every error
//! through [`wrap`](crate::wrap) by hand:
//!
//! ```rust
//! use errstack::{BoxError, ResultExt};
//! use std::fs;
//!
//! fn read_config(path: &str) -> Result<String, BoxError> {
//!     fs::read_to_string(path).annotate_with(|| format!("reading {}", path))
//! }
//! ```

use crate::error::BoxError;
use crate::wrap::wrap_message;

/// Extension trait that wraps the error side of a `Result`, converting it
/// into a [`BoxError`] chain.
pub trait ResultExt<T> {
    /// Annotate the error with a message. A stack is captured only if the
    /// error does not already carry one.
    fn annotate(self, msg: &str) -> Result<T, BoxError>;

    /// Annotate with a lazily-built message; the closure runs only on the
    /// error path.
    fn annotate_with(self, f: impl FnOnce() -> String) -> Result<T, BoxError>;

    /// Annotate the error with a message and a stack captured at this call
    /// site, even if the error already carries one.
    fn annotate_here(self, msg: &str) -> Result<T, BoxError>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    #[inline]
    fn annotate(self, msg: &str) -> Result<T, BoxError> {
        self.map_err(|e| wrap_message(e.into(), msg.to_owned(), false))
    }

    #[inline]
    fn annotate_with(self, f: impl FnOnce() -> String) -> Result<T, BoxError> {
        self.map_err(|e| wrap_message(e.into(), f(), false))
    }

    #[inline]
    fn annotate_here(self, msg: &str) -> Result<T, BoxError> {
        self.map_err(|e| wrap_message(e.into(), msg.to_owned(), true))
    }
}
