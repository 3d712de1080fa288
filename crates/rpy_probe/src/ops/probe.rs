use std::ptr;

use anyhow::bail;
use clap::ValueEnum;
use rpy_support::{
    rpy_bare_item, rpy_field, rpy_fx_item, rpy_item, rpy_nlen_item, AccessMode, ArrayBuf,
    BuildConfig, Checked, MemoryAccess, Unchecked,
};

use crate::ExitStatus;

/// The value stored in the probed structure's field.
const FIELD_VALUE: i64 = 42;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Field of a structure
    Field,
    /// Item of an array with a length header
    Item,
    /// Item of an array with a fixed size
    Fixed,
    /// Item of an array without a length header
    Nlen,
    /// Item of a raw sequence
    Bare,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// The implementation this build selected
    Build,
    /// Validate every access
    Checked,
    /// Skip all validation
    Unchecked,
}

#[derive(clap::Args)]
pub struct Args {
    /// The kind of access to perform
    #[clap(long, value_enum, default_value_t = Operation::Item)]
    op: Operation,

    /// Which access implementation to use
    #[clap(long, value_enum, default_value_t = Mode::Build)]
    mode: Mode,

    /// The length stored in the array header
    #[clap(long, default_value_t = 3)]
    length: usize,

    /// The number of items allocated for the array, defaults to the length
    #[clap(long)]
    capacity: Option<usize>,

    /// The index to access
    #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
    index: isize,

    /// The size used by the fixed-size access, defaults to the length
    #[clap(long, allow_negative_numbers = true)]
    fixed_size: Option<isize>,

    /// Pass a null pointer instead of the array or structure
    #[clap(long)]
    null: bool,
}

#[repr(C)]
struct Probed {
    value: i64,
}

/// Performs the requested access and prints the value it read. Item `i` of the storage holds
/// `i * 10`.
pub fn probe(args: Args) -> anyhow::Result<ExitStatus> {
    let capacity = args.capacity.unwrap_or(args.length);
    let fixed_size = args.fixed_size.unwrap_or(args.length as isize);
    if fixed_size > capacity as isize {
        bail!("fixed size {fixed_size} exceeds the allocated capacity {capacity}");
    }

    let array = ArrayBuf::from_fn(args.length, capacity, |i| i as i64 * 10)?;
    let mode = match args.mode {
        Mode::Build => BuildConfig::CURRENT.access_mode(),
        Mode::Checked => AccessMode::Checked,
        Mode::Unchecked => AccessMode::Unchecked,
    };

    if !stays_in_storage(&args, capacity) && !is_caught(&args, mode, fixed_size) {
        bail!(
            "refusing to access outside the allocated storage, the {mode} {:?} access would not catch it",
            args.op
        );
    }

    log::trace!(
        "{:?} access at index {} in {mode} mode (length {}, capacity {capacity})",
        args.op,
        args.index,
        args.length
    );

    let value = match mode {
        AccessMode::Checked => perform::<Checked>(&args, &array, fixed_size),
        AccessMode::Unchecked => perform::<Unchecked>(&args, &array, fixed_size),
    };
    println!("{value}");
    Ok(ExitStatus::Success)
}

fn stays_in_storage(args: &Args, capacity: usize) -> bool {
    match args.op {
        Operation::Field => !args.null,
        _ => !args.null && args.index >= 0 && (args.index as usize) < capacity,
    }
}

/// Returns true if the access is rejected before it touches memory.
fn is_caught(args: &Args, mode: AccessMode, fixed_size: isize) -> bool {
    if mode == AccessMode::Unchecked {
        return false;
    }
    args.null
        || match args.op {
            Operation::Field => false,
            Operation::Item => args.index < 0 || args.index >= args.length as isize,
            Operation::Fixed => args.index < 0 || args.index >= fixed_size,
            Operation::Nlen | Operation::Bare => args.index < 0,
        }
}

fn perform<A: MemoryAccess>(args: &Args, array: &ArrayBuf<i64>, fixed_size: isize) -> i64 {
    let index = args.index;
    let mut probed = Probed { value: FIELD_VALUE };

    // Safety: `probe` only gets here if the access stays inside `array` or `probed`, or if `A`
    // aborts before touching memory.
    unsafe {
        match args.op {
            Operation::Field => {
                let ptr: *mut Probed = if args.null {
                    ptr::null_mut()
                } else {
                    &mut probed
                };
                rpy_field!(in A, ptr, value)
            }
            Operation::Item => {
                let ptr = if args.null {
                    ptr::null_mut()
                } else {
                    array.as_ptr()
                };
                rpy_item!(in A, ptr, index)
            }
            Operation::Fixed => {
                let ptr = if args.null {
                    ptr::null_mut()
                } else {
                    array.items_ptr()
                };
                rpy_fx_item!(in A, ptr, index, fixed_size)
            }
            Operation::Nlen => {
                let ptr = if args.null {
                    ptr::null_mut()
                } else {
                    array.as_nolength_ptr()
                };
                rpy_nlen_item!(in A, ptr, index)
            }
            Operation::Bare => {
                let ptr = if args.null {
                    ptr::null_mut()
                } else {
                    array.items_ptr()
                };
                rpy_bare_item!(in A, ptr, index)
            }
        }
    }
}
