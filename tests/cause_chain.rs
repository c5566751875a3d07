//! Integration tests for chain construction and cause walking.

use errstack::{BoxError, cause, error_stack, new, wrap, wrapf};
use std::error::Error as StdError;
use std::io;

fn thin_ptr(err: &BoxError) -> *const () {
    let fat: *const (dyn StdError + Send + Sync + 'static) = &**err;
    fat as *const ()
}

// ============================================================================
// Nil propagation
// ============================================================================

#[test]
fn wrapping_none_yields_none() {
    assert!(wrap(None::<BoxError>, &["saving config"]).is_none());
    assert!(wrapf!(None::<BoxError>, "saving {}", "config").is_none());
    assert!(cause(None::<&io::Error>).is_none());
}

// ============================================================================
// Cause walking
// ============================================================================

#[test]
fn wrap_scenario_preserves_message_and_cause() {
    let err = new("disk full");
    let root_ptr = thin_ptr(&err);

    let wrapped = wrap(Some(err), &["saving config"]).unwrap();
    assert_eq!(wrapped.to_string(), "disk full: saving config");

    let deepest = cause(Some(wrapped.as_ref())).unwrap();
    assert_eq!(deepest.to_string(), "disk full");
    let fat: *const (dyn StdError + 'static) = deepest;
    assert_eq!(
        fat as *const (),
        root_ptr,
        "cause must return the original root node, not a copy"
    );
}

#[test]
fn cause_of_double_wrap_is_the_root() {
    let chain = wrap(wrap(Some(new("root")), &["a"]), &["b"]).unwrap();
    let deepest = cause(Some(chain.as_ref())).unwrap();
    assert_eq!(deepest.to_string(), "root");
}

#[test]
fn cause_of_root_is_itself() {
    let root = new("root");
    let deepest = cause(Some(root.as_ref())).unwrap();
    assert_eq!(deepest.to_string(), "root");
}

#[test]
fn cause_walks_through_foreign_source_chains() {
    #[derive(Debug, thiserror::Error)]
    #[error("query aborted")]
    struct QueryError {
        #[source]
        source: io::Error,
    }

    let foreign = QueryError {
        source: io::Error::other("disk offline"),
    };
    let chain = wrap(Some(foreign), &["loading table"]).unwrap();

    let deepest = cause(Some(chain.as_ref())).unwrap();
    assert!(
        deepest.is::<io::Error>(),
        "the walk should continue through a foreign source() chain"
    );
    assert_eq!(deepest.to_string(), "disk offline");
}

#[test]
fn cause_stops_at_sourceless_foreign_error() {
    let chain = wrap(Some(io::Error::other("bottom")), &["ctx"]).unwrap();
    let deepest = cause(Some(chain.as_ref())).unwrap();
    assert!(deepest.is::<io::Error>());
    assert_eq!(deepest.to_string(), "bottom");
}

// ============================================================================
// Message construction
// ============================================================================

#[test]
fn message_chain_grows_in_wrap_order() {
    let err = wrap(wrap(Some(new("root")), &["a"]), &["b"]).unwrap();
    assert_eq!(err.to_string(), "root: a: b");
}

#[test]
fn wrapf_substitutes_format_arguments() {
    let err = wrapf!(Some(new("no shard")), "routing key {}", 42).unwrap();
    assert_eq!(err.to_string(), "no shard: routing key 42");
}

// ============================================================================
// Foreign interop
// ============================================================================

#[test]
fn anyhow_errors_join_the_chain() {
    let foreign: BoxError = anyhow::anyhow!("boom").into();
    let err = wrap(Some(foreign), &["handling request"]).unwrap();

    assert_eq!(err.to_string(), "boom: handling request");

    // A fresh stack was captured: the foreign error had none to reuse.
    let text = error_stack(Some(err.as_ref()));
    assert!(
        text.starts_with("boom\nhandling request\n"),
        "message chain leads, frames follow. Got:\n{}",
        text
    );
    assert!(text.contains("\n\t"), "expected captured frames. Got:\n{}", text);
}
