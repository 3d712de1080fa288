/// Accesses field `name` of the structure behind a raw pointer.
///
/// Expands to a place expression, so it can be read from and assigned to. Must be used inside an
/// `unsafe` block. The access goes through [`ActiveAccess`](crate::ActiveAccess) unless an
/// implementation is named explicitly with `in`.
///
/// ```
/// # use rpy_support::rpy_field;
/// #[repr(C)]
/// struct Point { x: i64, y: i64 }
///
/// let mut point = Point { x: 1, y: 2 };
/// let ptr: *mut Point = &mut point;
/// unsafe {
///     let x = &mut rpy_field!(ptr, x);
///     *x += 10;
/// }
/// assert_eq!(unsafe { rpy_field!(ptr, x) }, 11);
/// ```
#[macro_export]
macro_rules! rpy_field {
    (in $access:ty, $ptr:expr, $name:ident) => {
        (*<$access as $crate::MemoryAccess>::field($ptr)).$name
    };
    ($ptr:expr, $name:ident) => {
        $crate::rpy_field!(in $crate::ActiveAccess, $ptr, $name)
    };
}

/// Accesses item `index` of a [`VarArray`](crate::VarArray), bounds-checked against its length
/// in checked builds.
#[macro_export]
macro_rules! rpy_item {
    (in $access:ty, $array:expr, $index:expr) => {
        *<$access as $crate::MemoryAccess>::item($array, $index)
    };
    ($array:expr, $index:expr) => {
        $crate::rpy_item!(in $crate::ActiveAccess, $array, $index)
    };
}

/// Accesses item `index` of a raw array whose size `fixed_size` is known at compile time.
#[macro_export]
macro_rules! rpy_fx_item {
    (in $access:ty, $ptr:expr, $index:expr, $fixed_size:expr) => {
        *<$access as $crate::MemoryAccess>::fixed_item($ptr, $index, $fixed_size)
    };
    ($ptr:expr, $index:expr, $fixed_size:expr) => {
        $crate::rpy_fx_item!(in $crate::ActiveAccess, $ptr, $index, $fixed_size)
    };
}

/// Accesses item `index` of a [`NoLengthArray`](crate::NoLengthArray). The upper bound is never
/// checked.
#[macro_export]
macro_rules! rpy_nlen_item {
    (in $access:ty, $array:expr, $index:expr) => {
        *<$access as $crate::MemoryAccess>::nonlength_item($array, $index)
    };
    ($array:expr, $index:expr) => {
        $crate::rpy_nlen_item!(in $crate::ActiveAccess, $array, $index)
    };
}

/// Accesses item `index` of a raw sequence. The upper bound is never checked.
#[macro_export]
macro_rules! rpy_bare_item {
    (in $access:ty, $ptr:expr, $index:expr) => {
        *<$access as $crate::MemoryAccess>::bare_item($ptr, $index)
    };
    ($ptr:expr, $index:expr) => {
        $crate::rpy_bare_item!(in $crate::ActiveAccess, $ptr, $index)
    };
}

/// Captures the current [`SourceLocation`](crate::SourceLocation).
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation {
            file: ::core::file!(),
            line: ::core::line!(),
            function: {
                fn f() {}
                $crate::enclosing_function_name(::core::any::type_name_of_val(&f))
            },
        }
    };
}

/// Checks an invariant that higher levels of the program are supposed to guarantee.
///
/// With the `assertions` feature a false condition reports through
/// [`assert_failed`](crate::assert_failed) and aborts. Without it, the condition is type-checked
/// but never evaluated.
#[cfg(feature = "assertions")]
#[macro_export]
macro_rules! rpy_assert {
    ($cond:expr, $msg:expr $(,)?) => {
        if !$cond {
            $crate::assert_failed(&$crate::source_location!(), $msg)
        }
    };
}

/// Checks an invariant that higher levels of the program are supposed to guarantee.
///
/// With the `assertions` feature a false condition reports through
/// [`assert_failed`](crate::assert_failed) and aborts. Without it, the condition is type-checked
/// but never evaluated.
#[cfg(not(feature = "assertions"))]
#[macro_export]
macro_rules! rpy_assert {
    ($cond:expr, $msg:expr $(,)?) => {
        if false {
            let _: bool = $cond;
            let _: &str = $msg;
        }
    };
}

/// Returns `Err` from the enclosing function with the exception `raiser` builds for `kind` and
/// `msg`. The exception is converted into the function's error type with `From`.
#[macro_export]
macro_rules! fail_exception {
    ($raiser:expr, $kind:expr, $msg:expr $(,)?) => {{
        use $crate::RaiseSimpleException as _;
        return ::core::result::Result::Err(::core::convert::From::from(
            ($raiser).raise_simple_exception($kind, $msg),
        ));
    }};
}

/// Raises an `OverflowError` from the enclosing function.
#[macro_export]
macro_rules! fail_ovf {
    ($raiser:expr, $msg:expr $(,)?) => {
        $crate::fail_exception!($raiser, $crate::ExceptionKind::OverflowError, $msg)
    };
}

/// Raises a `ValueError` from the enclosing function.
#[macro_export]
macro_rules! fail_val {
    ($raiser:expr, $msg:expr $(,)?) => {
        $crate::fail_exception!($raiser, $crate::ExceptionKind::ValueError, $msg)
    };
}

/// Raises a `ZeroDivisionError` from the enclosing function.
#[macro_export]
macro_rules! fail_zer {
    ($raiser:expr, $msg:expr $(,)?) => {
        $crate::fail_exception!($raiser, $crate::ExceptionKind::ZeroDivisionError, $msg)
    };
}
