/// Whether the program is being interpreted on the low-level graph interpreter instead of running
/// translated. Always `false` once compiled.
pub const RUNNING_ON_LLINTERP: bool = false;

/// Returns the smaller of `a` and `b`, or `b` if they are equal or unordered.
#[inline(always)]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Tells the JIT that `instance` is known to be of `class`. Compiled code has no JIT to inform,
/// so this does nothing.
#[inline(always)]
pub fn jit_record_known_class<I: ?Sized, C: ?Sized>(_instance: &I, _class: &C) {}
