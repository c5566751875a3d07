//! Integration tests for error output formatting.

use errstack::{error_stack, new, wrap, wrap_with_current_stack_always};
use std::io;

/// Number of `file:line` entries in a rendered diagnostic. Every stack frame
/// contributes exactly one `\n\t` marker; message lines contribute none.
fn stack_lines(text: &str) -> usize {
    text.matches("\n\t").count()
}

// ============================================================================
// Plain message mode
// ============================================================================

#[test]
fn display_is_plain_message() {
    let err = new("disk full");
    assert_eq!(format!("{}", err), "disk full");

    let err = wrap(Some(err), &["saving config"]).unwrap();
    assert_eq!(format!("{}", err), "disk full: saving config");
}

#[test]
fn stack_only_wrapper_passes_message_through() {
    let err = wrap(Some(io::Error::other("read failed")), &[]).unwrap();
    assert_eq!(
        format!("{}", err),
        "read failed",
        "a wrapper without a message must not add punctuation"
    );
}

#[test]
fn default_mode_agrees_with_plain_accessor() {
    let err = wrap(Some(new("disk full")), &["saving config"]).unwrap();
    assert_eq!(format!("{}", err), err.to_string());
    assert_eq!(err.to_string(), "disk full: saving config");
}

// ============================================================================
// Quoted mode
// ============================================================================

#[test]
fn debug_is_quoted_message() {
    let err = wrap(Some(new("disk full")), &["saving config"]).unwrap();
    assert_eq!(
        format!("{:?}", err),
        format!("{:?}", "disk full: saving config")
    );
}

#[test]
fn debug_escapes_embedded_quotes() {
    let err = new("say \"hi\"");
    assert_eq!(format!("{:?}", err), "\"say \\\"hi\\\"\"");
}

// ============================================================================
// Full diagnostic mode
// ============================================================================

#[test]
fn alternate_display_is_full_diagnostic() {
    let err = wrap(Some(new("disk full")), &["saving config"]).unwrap();
    assert_eq!(format!("{:#}", err), error_stack(Some(err.as_ref())));
}

#[test]
fn error_stack_has_message_then_frames() {
    let err = new("x");
    let text = error_stack(Some(err.as_ref()));

    assert!(
        text.starts_with("x\n"),
        "diagnostic must lead with the message. Got:\n{}",
        text
    );
    assert!(
        stack_lines(&text) >= 1,
        "diagnostic must contain at least one function/file:line entry. Got:\n{}",
        text
    );
    let (_, first_location) = text.split_once("\n\t").unwrap();
    let first_location = first_location.lines().next().unwrap();
    assert!(
        first_location.rsplit_once(':').is_some(),
        "frame location should be file:line. Got:\n{}",
        first_location
    );
}

#[test]
fn wrapped_messages_append_to_diagnostic() {
    let err = wrap(wrap(Some(new("root")), &["a"]), &["b"]).unwrap();
    let text = error_stack(Some(err.as_ref()));

    assert!(text.starts_with("root\n"));
    assert!(text.ends_with("\na\nb"), "wrap messages come last, in wrap order. Got:\n{}", text);
}

#[test]
fn foreign_error_degrades_to_plain_message() {
    let io_err = io::Error::other("plain");
    assert_eq!(error_stack(Some(&io_err)), "plain");
}

#[test]
fn error_stack_of_none_is_empty() {
    assert_eq!(error_stack(None::<&io::Error>), "");
}

// ============================================================================
// Stack reuse vs forced capture
// ============================================================================

#[test]
fn wrapping_twice_captures_stack_exactly_once() {
    let root = new("root");
    let root_lines = stack_lines(&error_stack(Some(root.as_ref())));

    let wrapped = wrap(wrap(Some(root), &["a"]), &["b"]).unwrap();
    let wrapped_lines = stack_lines(&error_stack(Some(wrapped.as_ref())));

    assert_eq!(
        root_lines, wrapped_lines,
        "message-only wrapping must not capture additional frames"
    );
}

#[test]
fn forced_wrapping_adds_a_stack_segment_per_call() {
    let root = new("root");
    let text0 = error_stack(Some(root.as_ref()));

    let once = wrap_with_current_stack_always(Some(root), &[]).unwrap();
    let text1 = error_stack(Some(once.as_ref()));

    let twice = wrap_with_current_stack_always(Some(once), &[]).unwrap();
    let text2 = error_stack(Some(twice.as_ref()));

    assert!(
        text1.starts_with(&text0) && text2.starts_with(&text1),
        "each forced wrap appends its own segment"
    );
    assert!(stack_lines(&text1) > stack_lines(&text0));
    assert!(stack_lines(&text2) > stack_lines(&text1));
}
