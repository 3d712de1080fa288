use std::{
    alloc::{self, Layout, LayoutError},
    fmt,
    marker::PhantomData,
    ptr::{self, NonNull},
    slice,
};

/// An array with a length header, represented in memory by the header followed by the items.
///
/// This is a dynamically sized layout: only pointers to it are ever handled, the items live past
/// the end of the declared struct.
#[repr(C)]
pub struct VarArray<T> {
    /// The number of valid items.
    pub length: isize,
    /// The first of the trailing items.
    pub items: [T; 0],
}

impl<T> VarArray<T> {
    /// Returns a pointer to the first item of `array`.
    ///
    /// # Safety
    ///
    /// `array` must point to a live `VarArray<T>`.
    #[inline(always)]
    pub unsafe fn items_ptr(array: *mut Self) -> *mut T {
        ptr::addr_of_mut!((*array).items).cast::<T>()
    }
}

/// An array whose length is not stored with it, only the items.
#[repr(C)]
pub struct NoLengthArray<T> {
    /// The first of the items.
    pub items: [T; 0],
}

impl<T> NoLengthArray<T> {
    /// Returns a pointer to the first item of `array`.
    ///
    /// # Safety
    ///
    /// `array` must point to a live `NoLengthArray<T>`.
    #[inline(always)]
    pub unsafe fn items_ptr(array: *mut Self) -> *mut T {
        ptr::addr_of_mut!((*array).items).cast::<T>()
    }
}

/// An error that occurs upon construction of an [`ArrayBuf`].
#[derive(Debug, thiserror::Error)]
pub enum ArrayBufError {
    /// The requested length does not fit in the requested storage.
    #[error("array length {length} exceeds its capacity {capacity}")]
    LengthExceedsCapacity {
        /// The requested length.
        length: usize,
        /// The requested capacity.
        capacity: usize,
    },
    /// The storage is too large to be described by a [`Layout`] or a signed length.
    #[error("array of {capacity} items is too large")]
    TooLarge {
        /// The requested capacity.
        capacity: usize,
    },
    /// The memory layout could not be computed.
    #[error("invalid array layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Owned storage for a [`VarArray`] with room for `capacity` items, of which the header reports
/// the first `length`.
///
/// The storage past `length` is initialized too, mirroring an over-allocated list: reading it is
/// wrong but does not leave the allocation.
pub struct ArrayBuf<T: Copy> {
    ptr: NonNull<VarArray<T>>,
    capacity: usize,
    layout: Layout,
    _phantom: PhantomData<T>,
}

impl<T: Copy> ArrayBuf<T> {
    /// Returns the memory to allocate for an array with `capacity` items.
    fn layout(capacity: usize) -> Result<Layout, ArrayBufError> {
        let (layout, _) = Layout::new::<VarArray<T>>().extend(Layout::array::<T>(capacity)?)?;
        Ok(layout.pad_to_align())
    }

    /// Allocates an array of `length` items backed by `capacity` items of storage. Item `i` of
    /// the storage is initialized with `init(i)`.
    pub fn from_fn<F: FnMut(usize) -> T>(
        length: usize,
        capacity: usize,
        mut init: F,
    ) -> Result<Self, ArrayBufError> {
        if length > capacity {
            return Err(ArrayBufError::LengthExceedsCapacity { length, capacity });
        }
        if isize::try_from(capacity).is_err() {
            return Err(ArrayBufError::TooLarge { capacity });
        }
        let header_length = length as isize;

        let layout = Self::layout(capacity)?;
        let initial: Vec<T> = (0..capacity).map(&mut init).collect();

        // Safety: the layout always contains the non-zero sized header.
        let raw = unsafe { alloc::alloc(layout) }.cast::<VarArray<T>>();
        let Some(ptr) = NonNull::new(raw) else {
            alloc::handle_alloc_error(layout)
        };

        // Safety: the allocation fits the header and `capacity` items.
        unsafe {
            ptr::addr_of_mut!((*raw).length).write(header_length);
            ptr::copy_nonoverlapping(initial.as_ptr(), VarArray::items_ptr(raw), capacity);
        }

        Ok(Self {
            ptr,
            capacity,
            layout,
            _phantom: PhantomData,
        })
    }

    /// Allocates an array holding a copy of `items`, with `capacity` items of storage. Storage
    /// past the copied items is filled with `T::default()`.
    pub fn from_slice(items: &[T], capacity: usize) -> Result<Self, ArrayBufError>
    where
        T: Default,
    {
        Self::from_fn(items.len(), capacity, |i| {
            items.get(i).copied().unwrap_or_default()
        })
    }

    /// Returns the length stored in the header.
    pub fn len(&self) -> usize {
        // Safety: the header was written on construction and is never made negative.
        unsafe { (*self.ptr.as_ptr()).length as usize }
    }

    /// Returns true if the header reports no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of items the storage can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a pointer to the array, as handed to generated code.
    pub fn as_ptr(&self) -> *mut VarArray<T> {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the first item.
    pub fn items_ptr(&self) -> *mut T {
        // Safety: `self.ptr` is live for the lifetime of `self`.
        unsafe { VarArray::items_ptr(self.ptr.as_ptr()) }
    }

    /// Returns the items as an array without a length header.
    pub fn as_nolength_ptr(&self) -> *mut NoLengthArray<T> {
        self.items_ptr().cast::<NoLengthArray<T>>()
    }

    /// Returns the first `len()` items.
    pub fn as_slice(&self) -> &[T] {
        // Safety: all `capacity >= len` items were initialized on construction.
        unsafe { slice::from_raw_parts(self.items_ptr(), self.len()) }
    }

    /// Returns the whole storage, including the items past `len()`.
    pub fn storage(&self) -> &[T] {
        // Safety: all `capacity` items were initialized on construction.
        unsafe { slice::from_raw_parts(self.items_ptr(), self.capacity) }
    }
}

impl<T: Copy> Drop for ArrayBuf<T> {
    fn drop(&mut self) {
        // Safety: allocated in `from_fn` with the same layout. `T: Copy` has no drop glue.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), self.layout) }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for ArrayBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuf")
            .field("items", &self.as_slice())
            .field("capacity", &self.capacity)
            .finish()
    }
}
