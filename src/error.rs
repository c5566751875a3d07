//! The four immutable error node shapes and their renderings.
//!
//! A chain is built strictly by appending new heads: every wrapper owns its
//! cause as a [`BoxError`], so a chain may bottom out in a foreign error that
//! never came from this crate. Nodes are never mutated after construction,
//! which makes concurrent formatting of a shared error safe without locking.
//!
//! Each node supports three renderings selected by format verb:
//!
//! | Verb   | Output                                          |
//! |--------|-------------------------------------------------|
//! | `{}`   | plain message                                   |
//! | `{:?}` | plain message in escaped quotes                 |
//! | `{:#}` | full diagnostic (message chain + all stacks)    |

use std::error::Error as StdError;
use std::fmt;

use crate::stack::Stack;
use crate::wrap::diagnostic;

/// Owned, type-erased error handle used for cause links and returned errors.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// ============================================================================
// ErrorStack - the full-diagnostic capability
// ============================================================================

/// Capability of rendering a full diagnostic: the message chain plus every
/// captured stack along it, innermost message first.
///
/// All errors returned by this crate's constructors carry this capability.
/// The free function [`error_stack`](crate::error_stack) is the entry point
/// for arbitrary errors; it falls back to the plain message when the
/// capability is absent.
pub trait ErrorStack {
    /// Render the message chain and all captured stacks.
    fn error_stack(&self) -> String;
}

// ============================================================================
// AsDynError - type-erasure seam for the introspection entry points
// ============================================================================

/// Conversion to a type-erased `&dyn Error`, so [`cause`](crate::cause) and
/// [`error_stack`](crate::error_stack) accept concrete errors and trait
/// objects alike.
pub trait AsDynError {
    /// View this error as a `&dyn Error`.
    fn as_dyn_error(&self) -> &(dyn StdError + 'static);
}

impl<E: StdError + 'static> AsDynError for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

// ============================================================================
// Fundamental - chain-terminal node: message + stack
// ============================================================================

pub(crate) struct Fundamental {
    pub(crate) msg: String,
    pub(crate) stack: Stack,
}

impl fmt::Display for Fundamental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.error_stack())
        } else {
            f.write_str(&self.msg)
        }
    }
}

impl fmt::Debug for Fundamental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.msg)
    }
}

impl StdError for Fundamental {}

impl ErrorStack for Fundamental {
    fn error_stack(&self) -> String {
        let mut out = self.msg.clone();
        out.push('\n');
        out.push_str(&self.stack.render());
        out
    }
}

// ============================================================================
// WithStack - cause + stack, no message of its own
// ============================================================================

pub(crate) struct WithStack {
    pub(crate) cause: BoxError,
    pub(crate) stack: Stack,
}

impl fmt::Display for WithStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.error_stack())
        } else {
            // Pass-through: no punctuation added.
            write!(f, "{}", self.cause)
        }
    }
}

impl fmt::Debug for WithStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

impl StdError for WithStack {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl ErrorStack for WithStack {
    fn error_stack(&self) -> String {
        let mut out = diagnostic(self.cause.as_ref());
        out.push('\n');
        out.push_str(&self.stack.render());
        out
    }
}

// ============================================================================
// WithMessage - cause + message, no stack of its own
// ============================================================================

/// Constructed only when the cause already renders a full diagnostic, so this
/// node never needs a stack of its own.
pub(crate) struct WithMessage {
    pub(crate) cause: BoxError,
    pub(crate) msg: String,
}

impl fmt::Display for WithMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.error_stack())
        } else {
            write!(f, "{}: {}", self.cause, self.msg)
        }
    }
}

impl fmt::Debug for WithMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

impl StdError for WithMessage {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl ErrorStack for WithMessage {
    fn error_stack(&self) -> String {
        let mut out = diagnostic(self.cause.as_ref());
        out.push('\n');
        out.push_str(&self.msg);
        out
    }
}

// ============================================================================
// WithMessageStack - cause + message + stack
// ============================================================================

pub(crate) struct WithMessageStack {
    pub(crate) cause: BoxError,
    pub(crate) msg: String,
    pub(crate) stack: Stack,
}

impl fmt::Display for WithMessageStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.error_stack())
        } else {
            write!(f, "{}: {}", self.cause, self.msg)
        }
    }
}

impl fmt::Debug for WithMessageStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

impl StdError for WithMessageStack {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl ErrorStack for WithMessageStack {
    fn error_stack(&self) -> String {
        let mut out = diagnostic(self.cause.as_ref());
        out.push('\n');
        out.push_str(&self.msg);
        out.push('\n');
        out.push_str(&self.stack.render());
        out
    }
}
