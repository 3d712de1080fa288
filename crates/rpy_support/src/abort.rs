use std::{
    io::{self, Write},
    process,
};

/// The diagnostic printed when a checked access fails.
pub const ABORT_MESSAGE: &str = "Invalid RPython operation (NULL ptr or bad array index)";

/// Writes the fixed abort diagnostic, followed by a newline, to `out`.
pub fn write_abort_diagnostic<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{ABORT_MESSAGE}")?;
    out.flush()
}

/// Reports an invalid memory operation and terminates the process.
///
/// A null pointer or an out-of-bounds index at this level means the program's invariants are
/// already broken, so this never unwinds and can't be caught.
#[cold]
#[inline(never)]
pub fn rpy_abort() -> ! {
    log::error!("checked memory access failed, aborting");

    // Nothing sensible can be done if stderr is gone; abort regardless.
    let _ = write_abort_diagnostic(&mut io::stderr().lock());
    process::abort()
}
