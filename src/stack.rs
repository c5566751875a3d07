//! Call-stack capture and rendering.
//!
//! A [`Stack`] is a point-in-time snapshot of the calling thread's stack,
//! stored as opaque program-counter addresses. Resolution to function names
//! and source locations is deferred until the snapshot is rendered, so the
//! capture itself stays cheap on the error path.

use std::ffi::c_void;
use std::fmt::Write as _;

/// Upper bound on captured frame addresses per snapshot.
pub(crate) const MAX_DEPTH: usize = 32;

/// Frame address storage with [`MAX_DEPTH`] inline slots (a full capture
/// never spills to heap).
#[cfg(feature = "smallvec")]
type FrameVec = smallvec::SmallVec<[usize; MAX_DEPTH]>;

/// Heap-allocated frame address storage (default).
#[cfg(not(feature = "smallvec"))]
type FrameVec = Vec<usize>;

/// An immutable sequence of frame addresses captured from the current call
/// stack. Empty is valid and renders as empty text.
pub(crate) struct Stack {
    frames: FrameVec,
}

impl Stack {
    /// Record up to [`MAX_DEPTH`] frame addresses from the current call
    /// stack, skipping `skip` leading frames so the capture plumbing stays
    /// out of the result.
    #[inline(never)]
    pub(crate) fn capture(skip: usize) -> Self {
        let mut frames = FrameVec::new();
        let mut seen = 0usize;
        backtrace::trace(|frame| {
            seen += 1;
            if seen <= skip {
                return true;
            }
            frames.push(frame.ip() as usize);
            frames.len() < MAX_DEPTH
        });
        Stack { frames }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.frames.len()
    }

    /// Resolve every captured address and render one `function\n\tfile:line`
    /// entry per frame, innermost call first, entries joined by newline.
    ///
    /// An address at an inlined call site resolves to several symbols; each
    /// renders as its own entry. Rendering stops at the process entry point
    /// or thread trampoline. Unresolvable names fall back to the literal
    /// placeholders `unknown_function` / `unknown_file`.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        'frames: for &ip in self.frames.iter() {
            let mut symbols: Vec<(Option<String>, Option<String>, u32)> = Vec::new();
            backtrace::resolve(ip as *mut c_void, |symbol| {
                symbols.push((
                    symbol.name().map(|name| format!("{:#}", name)),
                    symbol
                        .filename()
                        .map(|path| path.to_string_lossy().into_owned()),
                    symbol.lineno().unwrap_or(0),
                ));
            });
            if symbols.is_empty() {
                // Unresolvable address: keep the frame visible as placeholders.
                symbols.push((None, None, 0));
            }
            for (func, file, line) in symbols {
                let func = match func.as_deref() {
                    Some(name) if !name.is_empty() => name,
                    _ => "unknown_function",
                };
                if is_stack_bottom(func) {
                    break 'frames;
                }
                let file = file.map(|name| name.replace('\\', "/"));
                let file = match file.as_deref() {
                    Some(name) if !name.is_empty() => trim_file_name(name),
                    _ => "unknown_file",
                };
                if !out.is_empty() {
                    out.push('\n');
                }
                let _ = write!(out, "{}\n\t{}:{}", func, file, line);
            }
        }
        out
    }
}

/// Entry-point and trampoline symbols marking the bottom of a useful trace.
pub(crate) fn is_stack_bottom(func: &str) -> bool {
    func == "main"
        || func == "__libc_start_main"
        || func == "start_thread"
        || func.starts_with("std::rt::lang_start")
        || func.contains("__rust_begin_short_backtrace")
}

/// Shorten a source path to a stable, toolchain-independent remainder: drop
/// everything through the first `/src/` segment, then everything through the
/// last `/vendor/` segment. A match with nothing after it is left alone.
pub(crate) fn trim_file_name(name: &str) -> &str {
    let mut name = name;
    if let Some(i) = name.find("/src/") {
        let rest = &name[i + "/src/".len()..];
        if !rest.is_empty() {
            name = rest;
        }
    }
    if let Some(i) = name.rfind("/vendor/") {
        let rest = &name[i + "/vendor/".len()..];
        if !rest.is_empty() {
            name = rest;
        }
    }
    name
}
