//! SIMD-accelerated helpers used by the crate when the `simd` feature is enabled.

/// Number of bytes inspected by [`continuation_mask`].
pub(crate) const SCAN_WIDTH: usize = 16;

/// Returns a bitmask with bit `i` set when `data[i]` has its continuation bit set,
/// covering the first [`SCAN_WIDTH`] bytes. Returns `None` if `data` is shorter than
/// the scan window, the architecture is unsupported, or the required hardware
/// feature is unavailable at runtime.
pub(crate) fn continuation_mask(data: &[u8]) -> Option<u32> {
    if data.len() < SCAN_WIDTH {
        return None;
    }
    scan(&data[..SCAN_WIDTH])
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "x86_64")] {
        fn scan(window: &[u8]) -> Option<u32> {
            if std::arch::is_x86_feature_detected!("sse2") {
                unsafe {
                    return Some(continuation_mask_x86_sse2(window));
                }
            }
            None
        }

        #[target_feature(enable = "sse2")]
        unsafe fn continuation_mask_x86_sse2(window: &[u8]) -> u32 {
            use std::arch::x86_64::*;

            let ptr = window.as_ptr() as *const __m128i;
            let bytes = unsafe { _mm_loadu_si128(ptr) };
            // movemask gathers the top bit of each lane, which is exactly the continuation flag.
            (_mm_movemask_epi8(bytes) as u32) & 0xffff
        }
    } else {
        fn scan(_window: &[u8]) -> Option<u32> {
            None
        }
    }
}
