#[macro_use]
mod util;

use rpy_support::{
    rpy_item, AccessMode, ActiveAccess, ArrayBuf, BuildConfig, MemoryAccess, VarArray,
};

/// What translated code for `lst[i]` on an already range-checked list looks like.
unsafe fn getitem<A: MemoryAccess>(array: *mut VarArray<i64>, index: isize) -> i64 {
    rpy_item!(in A, array, index)
}

fn list_of_three() -> ArrayBuf<i64> {
    ArrayBuf::from_fn(3, 8, |i| 100 + i as i64).unwrap()
}

#[test]
fn checked_out_of_bounds_terminates() {
    assert_fatal!(
        "checked_out_of_bounds_terminates",
        "Invalid RPython operation",
        {
            let array = list_of_three();
            let value = unsafe { getitem::<rpy_support::Checked>(array.as_ptr(), 5) };
            println!("unreachable: {value}");
        }
    );
}

#[test]
fn unchecked_out_of_bounds_returns() {
    assert_not_fatal!("unchecked_out_of_bounds_returns", {
        let array = list_of_three();
        let value = unsafe { getitem::<rpy_support::Unchecked>(array.as_ptr(), 5) };
        assert_eq!(value, 105);
    });
}

#[test]
fn build_mode_out_of_bounds() {
    let body = || {
        let array = list_of_three();
        let value = unsafe { getitem::<ActiveAccess>(array.as_ptr(), 5) };
        assert_eq!(value, 105);
    };
    match BuildConfig::CURRENT.access_mode() {
        AccessMode::Checked => assert_fatal!(
            "build_mode_out_of_bounds",
            rpy_support::ABORT_MESSAGE,
            { body() }
        ),
        AccessMode::Unchecked => assert_not_fatal!("build_mode_out_of_bounds", { body() }),
    }
}

#[test]
fn in_bounds_is_identical_in_every_mode() {
    let array = list_of_three();
    for index in 0..3 {
        let checked = unsafe { getitem::<rpy_support::Checked>(array.as_ptr(), index) };
        let unchecked = unsafe { getitem::<rpy_support::Unchecked>(array.as_ptr(), index) };
        let active = unsafe { rpy_item!(array.as_ptr(), index) };
        assert_eq!(checked, unchecked);
        assert_eq!(checked, active);
    }
}

#[test]
fn sandboxed_build_checks_without_ll_assertions() {
    let sandboxed = BuildConfig {
        assertions_enabled: false,
        ll_assertions_enabled: false,
        sandboxed: true,
    };
    assert_eq!(sandboxed.access_mode(), AccessMode::Checked);

    #[cfg(feature = "sandboxed")]
    assert_eq!(ActiveAccess::MODE, AccessMode::Checked);
}
