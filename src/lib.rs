//! # errstack - error wrapping with message chains and captured call stacks
//!
//! Augment any error with human-readable context and a call-stack snapshot,
//! while keeping the original error reachable underneath:
//!
//! ```text
//! connection refused
//! myapp::db::connect
//! 	myapp/db.rs:142
//! myapp::api::handle
//! 	myapp/api.rs:89
//! opening session
//! retrying login
//! ```
//!
//! ## Try It Now
//!
//! Build a root error with [`new()`], add context with [`wrap()`], print the
//! richest available text with [`error_stack()`]:
//!
//! ```rust
//! use errstack::{error_stack, new, wrap};
//!
//! let err = new("connection refused");          // message + captured stack
//! let err = wrap(Some(err), &["opening session"]).unwrap();
//!
//! assert_eq!(err.to_string(), "connection refused: opening session");
//! println!("{}", error_stack(Some(err.as_ref())));  // message chain + stack
//! ```
//!
//! ## Wrapping Rules
//!
//! Wrapping never captures more stacks than needed. Given `wrap(err, msg)`:
//!
//! | `err` state          | `msg`     | Result                                |
//! |----------------------|-----------|---------------------------------------|
//! | `None`               | any       | `None` (wrapping no error is no error)|
//! | already has a stack  | empty     | `err` returned unchanged              |
//! | already has a stack  | non-empty | message node, stack reused            |
//! | no stack yet         | empty     | stack node, fresh capture             |
//! | no stack yet         | non-empty | message + stack node, fresh capture   |
//!
//! [`wrap_with_current_stack_always()`] skips the reuse check and records a
//! fresh snapshot on every call, so the diagnostic shows each wrap site.
//!
//! ## Formatting
//!
//! Every error built by this crate renders three ways:
//!
//! | Verb   | Output                                       |
//! |--------|----------------------------------------------|
//! | `{}`   | plain message (`"disk full: saving config"`) |
//! | `{:?}` | quoted message (`"\"disk full: saving config\""`) |
//! | `{:#}` | full diagnostic: message chain + every stack |
//!
//! ## Foreign Errors
//!
//! Chains interoperate with errors from anywhere. Wrapping a plain
//! `std::io::Error` starts a fresh stack; [`cause()`] walks any
//! [`source`](std::error::Error::source) chain, including segments this crate
//! never touched; [`error_stack()`] degrades to the plain message for errors
//! without a stack.
//!
//! ```rust
//! use errstack::{cause, wrap};
//! use std::io;
//!
//! let io_err = io::Error::other("read failed");
//! let err = wrap(Some(io_err), &["loading index"]).unwrap();
//!
//! let root = cause(Some(err.as_ref())).unwrap();
//! assert!(root.is::<io::Error>());
//! ```
//!
//! ## Format-String Construction
//!
//! The `f`-variants are macros over `format!`:
//!
//! ```rust
//! use errstack::{newf, wrapf};
//!
//! let err = newf!("no shard for key {}", 42);
//! let err = wrapf!(Some(err), "routing request {}", "abc1");
//! assert_eq!(err.unwrap().to_string(), "no shard for key 42: routing request abc1");
//! ```

#![deny(unsafe_code)]

mod error;
mod ext;
pub mod prelude;
mod stack;
mod wrap;

pub use error::{AsDynError, BoxError, ErrorStack};
pub use ext::ResultExt;
pub use wrap::{cause, error_stack, new, wrap, wrap_with_current_stack_always};

#[doc(hidden)]
pub use wrap::__wrap_message;

/// Build a root error with the message `format!(...)` and a stack captured
/// at the point the macro was invoked.
///
/// ## Example
///
/// ```rust
/// let err = errstack::newf!("no route to {}:{}", "db-1", 5432);
/// assert_eq!(err.to_string(), "no route to db-1:5432");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::new(::std::format!($($arg)*))
    };
}

/// Annotate `err` with the message `format!(...)`, reusing the existing
/// stack when `err` already carries one. `None` in, `None` out.
///
/// ## Example
///
/// ```rust
/// use errstack::{new, wrapf};
///
/// let err = wrapf!(Some(new("disk full")), "saving {}", "config.toml").unwrap();
/// assert_eq!(err.to_string(), "disk full: saving config.toml");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::__wrap_message($err, ::std::format!($($arg)*), false)
    };
}

/// Annotate `err` with the message `format!(...)` and a stack captured at
/// the point the macro was invoked, even when `err` already carries one.
/// `None` in, `None` out.
#[macro_export]
macro_rules! wrapf_with_current_stack_always {
    ($err:expr, $($arg:tt)*) => {
        $crate::__wrap_message($err, ::std::format!($($arg)*), true)
    };
}
