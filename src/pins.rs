//! GPIO / shared-memory assignments for the Glimmer indicator board.
//!
//! Single source of truth — every driver references this module rather
//! than hard-coding pin numbers or addresses.

// ---------------------------------------------------------------------------
// Indicator LED
// ---------------------------------------------------------------------------

/// Digital output driving the indicator LED (active HIGH).
/// One fixed, pre-identified channel; there is no second output.
pub const BLINK_LED_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Duty word (host-writable shared memory)
// ---------------------------------------------------------------------------

/// Base of the RTC slow-memory region shared with the host debug link.
pub const SHARED_MEM_BASE: usize = 0x5000_0000;

/// Byte offset of the duty word within the shared region.
/// The raw u32 at `SHARED_MEM_BASE + DUTY_WORD_OFFSET` is the entire
/// wire format: no header, no versioning. Board bring-up zeroes the
/// region, so an unwritten word reads as duty 0.
pub const DUTY_WORD_OFFSET: usize = 0x0000_0000;
