#[macro_use]
mod util;

use rpy_support::{
    rpy_bare_item, rpy_field, rpy_fx_item, rpy_item, rpy_nlen_item, ArrayBuf, Checked,
    NoLengthArray, Unchecked, VarArray, ABORT_MESSAGE,
};
use std::ptr;

#[repr(C)]
struct Node {
    value: i64,
    next: *mut Node,
}

fn small_array() -> ArrayBuf<i64> {
    ArrayBuf::from_fn(3, 8, |i| i as i64 * 10).unwrap()
}

#[test]
fn field_of_null_aborts() {
    assert_fatal!("field_of_null_aborts", ABORT_MESSAGE, {
        let node: *mut Node = ptr::null_mut();
        let _value = unsafe { rpy_field!(in Checked, node, value) };
    });
}

#[test]
fn field_follows_links() {
    let mut tail = Node {
        value: 2,
        next: ptr::null_mut(),
    };
    let mut head = Node {
        value: 1,
        next: &mut tail,
    };
    let head_ptr: *mut Node = &mut head;
    unsafe {
        let next = rpy_field!(in Checked, head_ptr, next);
        rpy_field!(in Checked, next, value) = 20;
        assert_eq!(rpy_field!(in Checked, next, value), 20);
        assert!(rpy_field!(in Checked, next, next).is_null());
    }
    assert_eq!(tail.value, 20);
}

#[test]
fn item_past_length_aborts() {
    assert_fatal!("item_past_length_aborts", ABORT_MESSAGE, {
        let array = small_array();
        let _value = unsafe { rpy_item!(in Checked, array.as_ptr(), 3) };
    });
}

#[test]
fn item_negative_index_aborts() {
    assert_fatal!("item_negative_index_aborts", ABORT_MESSAGE, {
        let array = small_array();
        let _value = unsafe { rpy_item!(in Checked, array.as_ptr(), -1) };
    });
}

#[test]
fn item_of_null_aborts() {
    assert_fatal!("item_of_null_aborts", ABORT_MESSAGE, {
        let array: *mut VarArray<i64> = ptr::null_mut();
        let _value = unsafe { rpy_item!(in Checked, array, 0) };
    });
}

#[test]
fn item_succeeds_exactly_within_length() {
    let array = small_array();
    for index in 0..3 {
        assert_eq!(
            unsafe { rpy_item!(in Checked, array.as_ptr(), index) },
            index as i64 * 10
        );
    }
}

#[test]
fn fixed_item_at_size_aborts() {
    assert_fatal!("fixed_item_at_size_aborts", ABORT_MESSAGE, {
        let mut fixed = [0u32; 4];
        let _value = unsafe { rpy_fx_item!(in Checked, fixed.as_mut_ptr(), 4, 4) };
    });
}

#[test]
fn fixed_item_of_null_aborts() {
    assert_fatal!("fixed_item_of_null_aborts", ABORT_MESSAGE, {
        let base: *mut u32 = ptr::null_mut();
        let _value = unsafe { rpy_fx_item!(in Checked, base, 0, 4) };
    });
}

#[test]
fn fixed_item_ignores_container_length() {
    // Only the fixed size matters, not what a header might claim.
    let array = small_array();
    let value = unsafe { rpy_fx_item!(in Checked, array.items_ptr(), 6, 8) };
    assert_eq!(value, 60);
}

#[test]
fn nonlength_item_negative_aborts() {
    assert_fatal!("nonlength_item_negative_aborts", ABORT_MESSAGE, {
        let array = small_array();
        let _value = unsafe { rpy_nlen_item!(in Checked, array.as_nolength_ptr(), -1) };
    });
}

#[test]
fn nonlength_item_of_null_aborts() {
    assert_fatal!("nonlength_item_of_null_aborts", ABORT_MESSAGE, {
        let array: *mut NoLengthArray<i64> = ptr::null_mut();
        let _value = unsafe { rpy_nlen_item!(in Checked, array, 0) };
    });
}

#[test]
fn nonlength_item_past_length_is_not_caught() {
    assert_not_fatal!("nonlength_item_past_length_is_not_caught", {
        let array = small_array();
        for index in 3..8 {
            let value = unsafe { rpy_nlen_item!(in Checked, array.as_nolength_ptr(), index) };
            assert_eq!(value, index as i64 * 10);
        }
    });
}

#[test]
fn bare_item_negative_aborts() {
    assert_fatal!("bare_item_negative_aborts", ABORT_MESSAGE, {
        let array = small_array();
        let _value = unsafe { rpy_bare_item!(in Checked, array.items_ptr(), -2) };
    });
}

#[test]
fn bare_item_of_null_aborts() {
    assert_fatal!("bare_item_of_null_aborts", ABORT_MESSAGE, {
        let base: *mut i64 = ptr::null_mut();
        let _value = unsafe { rpy_bare_item!(in Checked, base, 0) };
    });
}

#[test]
fn bare_item_assignment() {
    let array = small_array();
    unsafe { rpy_bare_item!(in Checked, array.items_ptr(), 1) = -1 };
    assert_eq!(array.as_slice(), &[0, -1, 20]);
}

#[test]
fn unchecked_never_aborts_on_bad_index() {
    assert_not_fatal!("unchecked_never_aborts_on_bad_index", {
        let array = small_array();
        let value = unsafe { rpy_item!(in Unchecked, array.as_ptr(), 5) };
        assert_eq!(value, 50);
        let value = unsafe { rpy_fx_item!(in Unchecked, array.items_ptr(), 7, 4) };
        assert_eq!(value, 70);
    });
}
