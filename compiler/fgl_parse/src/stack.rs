//! Stack growth for deeply nested input.
//!
//! Parenthesised expressions and nested blocks recurse once per level, so a
//! pathological file (thousands of `(` or nested `IF`s) could overflow the
//! native stack. Recursive entry points wrap their bodies in
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! - **Red zone**: 100KB. Below this much remaining stack, a new segment is
//!   allocated before recursing.
//! - **Growth size**: 1MB per segment.

const RED_ZONE: usize = 100 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn test_shallow_recursion() {
        assert_eq!(nest(10), 10);
    }

    #[test]
    fn test_deep_recursion() {
        assert_eq!(nest(100_000), 100_000);
    }
}
