use crate::{
    abort::rpy_abort,
    array::{NoLengthArray, VarArray},
    config::AccessMode,
};

/// Resolves the place of a structure field or an array item for generated code.
///
/// Every operation returns a pointer to the selected place so the caller can both read and write
/// through it. [`Checked`] validates the precondition of each operation and aborts the process
/// with [`rpy_abort`] when it does not hold; [`Unchecked`] performs the bare pointer arithmetic.
/// Generated code uses [`ActiveAccess`], which is fixed per build.
///
/// # Safety
///
/// All operations share the same contract: when the precondition checked by [`Checked`] holds,
/// every non-null pointer passed in must point to a live object of the stated type, and the
/// returned pointer stays within its allocation. [`Unchecked`] does not verify anything, so
/// violating its preconditions is undefined behavior.
pub trait MemoryAccess {
    /// The mode this implementation corresponds to.
    const MODE: AccessMode;

    /// Returns `ptr`, from which a field is about to be accessed.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn field<S>(ptr: *mut S) -> *mut S;

    /// Returns a pointer to item `index` of `array`, which is valid iff `0 <= index < length`.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn item<T>(array: *mut VarArray<T>, index: isize) -> *mut T;

    /// Returns a pointer to item `index` of an array of `fixed_size` items starting at `base`.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn fixed_item<T>(base: *mut T, index: isize, fixed_size: isize) -> *mut T;

    /// Returns a pointer to item `index` of an array that carries no length.
    ///
    /// Only the lower bound can be validated, the upper bound is the caller's responsibility even
    /// in checked mode.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn nonlength_item<T>(array: *mut NoLengthArray<T>, index: isize) -> *mut T;

    /// Returns a pointer to item `index` of the raw sequence starting at `base`. As with
    /// [`MemoryAccess::nonlength_item`], the upper bound is not known here.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn bare_item<T>(base: *mut T, index: isize) -> *mut T;
}

/// Validates every access and aborts on a null pointer or an out-of-bounds index.
#[derive(Clone, Copy, Debug, Default)]
pub struct Checked;

/// Performs every access without validation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unchecked;

/// The implementation of [`MemoryAccess`] selected for this build.
#[cfg(any(feature = "ll-assertions", feature = "sandboxed"))]
pub type ActiveAccess = Checked;

/// The implementation of [`MemoryAccess`] selected for this build.
#[cfg(not(any(feature = "ll-assertions", feature = "sandboxed")))]
pub type ActiveAccess = Unchecked;

#[inline(always)]
fn check(condition: bool) {
    if !condition {
        rpy_abort()
    }
}

impl MemoryAccess for Checked {
    const MODE: AccessMode = AccessMode::Checked;

    #[inline]
    unsafe fn field<S>(ptr: *mut S) -> *mut S {
        check(!ptr.is_null());
        ptr
    }

    #[inline]
    unsafe fn item<T>(array: *mut VarArray<T>, index: isize) -> *mut T {
        check(!array.is_null());
        check(index >= 0 && index < (*array).length);
        VarArray::items_ptr(array).offset(index)
    }

    #[inline]
    unsafe fn fixed_item<T>(base: *mut T, index: isize, fixed_size: isize) -> *mut T {
        check(!base.is_null() && index >= 0 && index < fixed_size);
        base.offset(index)
    }

    #[inline]
    unsafe fn nonlength_item<T>(array: *mut NoLengthArray<T>, index: isize) -> *mut T {
        check(!array.is_null() && index >= 0);
        NoLengthArray::items_ptr(array).offset(index)
    }

    #[inline]
    unsafe fn bare_item<T>(base: *mut T, index: isize) -> *mut T {
        check(!base.is_null() && index >= 0);
        base.offset(index)
    }
}

impl MemoryAccess for Unchecked {
    const MODE: AccessMode = AccessMode::Unchecked;

    #[inline(always)]
    unsafe fn field<S>(ptr: *mut S) -> *mut S {
        ptr
    }

    #[inline(always)]
    unsafe fn item<T>(array: *mut VarArray<T>, index: isize) -> *mut T {
        VarArray::items_ptr(array).offset(index)
    }

    #[inline(always)]
    unsafe fn fixed_item<T>(base: *mut T, index: isize, _fixed_size: isize) -> *mut T {
        base.offset(index)
    }

    #[inline(always)]
    unsafe fn nonlength_item<T>(array: *mut NoLengthArray<T>, index: isize) -> *mut T {
        NoLengthArray::items_ptr(array).offset(index)
    }

    #[inline(always)]
    unsafe fn bare_item<T>(base: *mut T, index: isize) -> *mut T {
        base.offset(index)
    }
}
