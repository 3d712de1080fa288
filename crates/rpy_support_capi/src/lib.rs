//! Exposes the runtime support reporters and build configuration using the C ABI, so generated C
//! code can link against them directly.

use std::{
    ffi::{CStr, CString},
    os::raw::{c_char, c_long},
    ptr,
};

use rpy_support::{BuildConfig, SourceLocation};

/// Reports an invalid memory operation and terminates the process.
#[no_mangle]
pub extern "C" fn rpy_abort() -> ! {
    rpy_support::rpy_abort()
}

/// Reports a failed assertion and terminates the process.
///
/// Null or non UTF-8 strings are reported as a placeholder instead of being rejected, the
/// process is going down either way.
///
/// # Safety
///
/// Every non-null string argument must be a valid C string with a null terminator.
#[no_mangle]
pub unsafe extern "C" fn rpy_assert_failed(
    filename: *const c_char,
    lineno: c_long,
    function: *const c_char,
    msg: *const c_char,
) -> ! {
    let location = SourceLocation {
        file: c_string_or_placeholder(filename),
        line: u32::try_from(lineno).unwrap_or(0),
        function: c_string_or_placeholder(function),
    };
    rpy_support::assert_failed(&location, c_string_or_placeholder(msg))
}

/// Returns true if field and array accesses are checked in this build.
#[no_mangle]
pub extern "C" fn rpy_checked_access_enabled() -> bool {
    BuildConfig::CURRENT.checked_access()
}

/// Returns true if assertions are enabled in this build.
#[no_mangle]
pub extern "C" fn rpy_assertions_enabled() -> bool {
    BuildConfig::CURRENT.assertions_enabled
}

/// Returns the build configuration of the library as a TOML document, or a null pointer if it
/// could not be serialized.
///
/// The returned string must be deallocated with [`rpy_string_destroy`].
#[no_mangle]
pub extern "C" fn rpy_build_config_toml() -> *const c_char {
    let toml = match BuildConfig::CURRENT.to_toml_string() {
        Ok(toml) => toml,
        Err(err) => {
            log::error!("{err}");
            return ptr::null();
        }
    };
    match CString::new(toml) {
        Ok(toml) => CString::into_raw(toml),
        Err(err) => {
            log::error!("build configuration contains a null byte: {err}");
            ptr::null()
        }
    }
}

/// Deallocates a string that was allocated by this library.
///
/// # Safety
///
/// This function receives a raw pointer as parameter. Only when the argument is not a null pointer,
/// its content will be deallocated. Passing pointers to invalid data or memory allocated by other
/// libraries, will lead to undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn rpy_string_destroy(string: *const c_char) {
    if !string.is_null() {
        let _string = CString::from_raw(string.cast_mut());
    }
}

/// Tries to convert a C style string pointer to a `&str`.
///
/// # Safety
///
/// The caller must provide a valid C string with a null terminator, whose content doesn't change
/// during the lifetime `'a`.
pub unsafe fn try_convert_c_string<'a>(string: *const c_char) -> Result<&'a str, &'static str> {
    if string.is_null() {
        return Err("null pointer");
    }

    match CStr::from_ptr::<'a>(string).to_str() {
        Ok(string) => Ok(string),
        Err(_) => Err("invalid UTF-8 encoded"),
    }
}

unsafe fn c_string_or_placeholder<'a>(string: *const c_char) -> &'a str {
    if string.is_null() {
        return "<null>";
    }
    match try_convert_c_string(string) {
        Ok(string) => string,
        Err(err) => {
            log::warn!("assertion argument is {err}");
            "<invalid UTF-8>"
        }
    }
}
