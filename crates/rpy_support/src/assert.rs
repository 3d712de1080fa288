use std::{
    fmt,
    io::{self, Write},
    process,
};

/// The place in the source an assertion was checked at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation<'a> {
    /// The source file.
    pub file: &'a str,
    /// The line in `file`.
    pub line: u32,
    /// The routine enclosing the assertion.
    pub function: &'a str,
}

impl fmt::Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Formats the diagnostic reported for a failed assertion.
pub fn format_assertion_failure(location: &SourceLocation<'_>, message: &str) -> String {
    format!(
        "RPython assertion failed at {location}:\nin {}: {message}\n",
        location.function
    )
}

/// Reports a failed assertion at `location` and terminates the process.
#[cold]
#[inline(never)]
pub fn assert_failed(location: &SourceLocation<'_>, message: &str) -> ! {
    log::error!("assertion failed in {}: {message}", location.function);

    let diagnostic = format_assertion_failure(location, message);
    let mut stderr = io::stderr().lock();
    let _ = stderr.write_all(diagnostic.as_bytes());
    let _ = stderr.flush();
    process::abort()
}

/// Strips the helper item `source_location!` names itself with from its type name, leaving the
/// path of the routine it was expanded in.
pub fn enclosing_function_name(helper: &'static str) -> &'static str {
    let mut name = helper.strip_suffix("::f").unwrap_or(helper);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
