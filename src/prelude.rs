//! Convenience re-exports of the common surface.
//!
//! ```rust
//! use errstack::prelude::*;
//!
//! let err = wrap(Some(new("disk full")), &["saving config"]).unwrap();
//! assert_eq!(err.to_string(), "disk full: saving config");
//! ```

pub use crate::{
    AsDynError, BoxError, ErrorStack, ResultExt, cause, error_stack, new, wrap,
    wrap_with_current_stack_always,
};
