/// Minimum stack space to keep available before recursing further.
pub const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when the red zone is reached.
pub const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
///
/// ## Example
/// ```
/// use intcalc::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u32) -> u32 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
/// }
///
/// assert_eq!(depth(100_000), 100_000);
/// ```
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
