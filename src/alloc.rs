//! Allocation accounting.
//!
//! [`CountingAllocator`] forwards to the system allocator and keeps a running total of the bytes
//! it handed out. It only counts once a binary installs it:
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: anscombe::alloc::CountingAllocator = anscombe::alloc::CountingAllocator;
//! ```
//!
//! Without it, [`allocated`] stays at zero.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

static ALLOCATED: AtomicU64 = AtomicU64::new(0);

/// Global allocator that counts allocated bytes
pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size() as u64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size() as u64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        // Only growth counts as new allocation
        if !new_ptr.is_null() && new_size > layout.size() {
            ALLOCATED.fetch_add((new_size - layout.size()) as u64, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Total number of bytes allocated through [`CountingAllocator`] since the program started
pub fn allocated() -> u64 {
    ALLOCATED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_direct_allocations() {
        let layout = Layout::from_size_align(256, 8).unwrap();
        let before = allocated();

        unsafe {
            let ptr = CountingAllocator.alloc(layout);
            assert!(!ptr.is_null());
            let ptr = CountingAllocator.realloc(ptr, layout, 512);
            assert!(!ptr.is_null());
            CountingAllocator.dealloc(ptr, Layout::from_size_align(512, 8).unwrap());
        }

        // Other tests may allocate concurrently through the allocator, never less than this
        assert!(allocated() - before >= 512);
    }
}
