//! Stack growth for deep recursion.
//!
//! The parser descends once per nesting level and the evaluator once per
//! expression node and call frame. Wrapping those descents in
//! [`ensure_sufficient_stack`] moves deep programs onto freshly allocated
//! stack segments instead of overflowing the host thread's stack. Runaway
//! user recursion is still bounded separately by the evaluator's call-depth
//! limit.
//!
//! On `wasm32` the guard is a passthrough.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
