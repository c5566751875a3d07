//! Construction, wrapping, and introspection over the causal chain.

use std::error::Error as StdError;

use crate::error::{
    AsDynError, BoxError, ErrorStack, Fundamental, WithMessage, WithMessageStack, WithStack,
};
use crate::stack::Stack;

// Frames to drop so a capture starts near the public entry point's caller.
// The unwinder reports its own frames first, then Stack::capture, then the
// constructor; inlining can shift these by one, which only leaves a residual
// library frame at the top of a rendered trace.
const SKIP_NEW: usize = 4;
const SKIP_WRAP: usize = 5;

// ============================================================================
// Construction
// ============================================================================

/// Build a root error with the supplied message and a stack captured at the
/// point `new` was called.
///
/// ## Example
///
/// ```rust
/// let err = errstack::new("connection refused");
/// assert_eq!(err.to_string(), "connection refused");
/// ```
pub fn new(msg: impl Into<String>) -> BoxError {
    Box::new(Fundamental {
        msg: msg.into(),
        stack: Stack::capture(SKIP_NEW),
    })
}

// ============================================================================
// Wrapping
// ============================================================================

/// Annotate `err` with the given message parts, joined with `": "`.
///
/// Captures a stack at the call point only if `err` does not already carry
/// one; a stack-bearing `err` wrapped with no message is returned unchanged.
/// `None` in, `None` out, so call sites can wrap unconditionally.
///
/// ## Example
///
/// ```rust
/// use errstack::{new, wrap};
///
/// let err = wrap(Some(new("disk full")), &["saving config"]).unwrap();
/// assert_eq!(err.to_string(), "disk full: saving config");
/// assert!(wrap(None::<errstack::BoxError>, &["ignored"]).is_none());
/// ```
pub fn wrap<E: Into<BoxError>>(err: Option<E>, parts: &[&str]) -> Option<BoxError> {
    Some(wrap_message(err?.into(), parts.join(": "), false))
}

/// Like [`wrap`], but always captures a fresh stack at the point it was
/// called, even when `err` already carries one. Each call adds its own stack
/// segment to the full diagnostic.
pub fn wrap_with_current_stack_always<E: Into<BoxError>>(
    err: Option<E>,
    parts: &[&str],
) -> Option<BoxError> {
    Some(wrap_message(err?.into(), parts.join(": "), true))
}

/// Macro plumbing for [`wrapf!`](crate::wrapf) and
/// [`wrapf_with_current_stack_always!`](crate::wrapf_with_current_stack_always).
#[doc(hidden)]
pub fn __wrap_message<E: Into<BoxError>>(
    err: Option<E>,
    msg: String,
    fresh_stack: bool,
) -> Option<BoxError> {
    Some(wrap_message(err?.into(), msg, fresh_stack))
}

/// Core wrap decision.
///
/// A stack-bearing `err` is reused: no message means identity, a message
/// means a [`WithMessage`] node with no capture of its own. Everything else
/// gets a fresh stack, with or without a message. Every returned error
/// renders a full diagnostic.
pub(crate) fn wrap_message(err: BoxError, msg: String, fresh_stack: bool) -> BoxError {
    if !fresh_stack && as_error_stack(&*err).is_some() {
        if msg.is_empty() {
            return err;
        }
        return Box::new(WithMessage { cause: err, msg });
    }
    if msg.is_empty() {
        return Box::new(WithStack {
            cause: err,
            stack: Stack::capture(SKIP_WRAP),
        });
    }
    Box::new(WithMessageStack {
        cause: err,
        msg,
        stack: Stack::capture(SKIP_WRAP),
    })
}

// ============================================================================
// Introspection
// ============================================================================

/// Walk to the deepest underlying error by repeatedly following
/// [`source`](StdError::source). `None` in, `None` out.
///
/// The walk stops at the first error without a source; for a chain bottoming
/// out in a foreign error, that foreign error is returned as-is.
///
/// ## Example
///
/// ```rust
/// use errstack::{cause, new, wrap};
///
/// let err = wrap(Some(new("root")), &["ctx"]).unwrap();
/// let root = cause(Some(err.as_ref())).unwrap();
/// assert_eq!(root.to_string(), "root");
/// ```
pub fn cause<E: AsDynError + ?Sized>(err: Option<&E>) -> Option<&(dyn StdError + 'static)> {
    let mut cur = err?.as_dyn_error();
    while let Some(src) = cur.source() {
        cur = src;
    }
    Some(cur)
}

/// The richest diagnostic text available for `err`: the full diagnostic when
/// `err` carries a stack, its plain message otherwise, and `""` for `None`.
///
/// This is the single entry point external code uses to print any error,
/// whether or not it came from this crate.
pub fn error_stack<E: AsDynError + ?Sized>(err: Option<&E>) -> String {
    match err {
        Some(e) => diagnostic(e.as_dyn_error()),
        None => String::new(),
    }
}

/// Full diagnostic if the capability probe finds one, plain message otherwise.
pub(crate) fn diagnostic(err: &(dyn StdError + 'static)) -> String {
    match as_error_stack(err) {
        Some(e) => e.error_stack(),
        None => err.to_string(),
    }
}

/// Capability probe: view a type-erased error as [`ErrorStack`] if it is one
/// of the family variants. `WithMessage` qualifies through its construction
/// invariant (the cause carries the stack).
pub(crate) fn as_error_stack<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn ErrorStack> {
    if let Some(e) = err.downcast_ref::<Fundamental>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<WithStack>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<WithMessage>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<WithMessageStack>() {
        return Some(e);
    }
    None
}
