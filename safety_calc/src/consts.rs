//! Controller constants for increment calculation.
//!
//! Single source of truth for the fixed multipliers used by the SSR, SOS and
//! SCW formulas. These are properties of the drive controller, not tunables.

use static_assertions::const_assert;

/// Fixed-point increment resolution bits per motor revolution.
pub const INCREMENT_BITS: u32 = 16;

/// Controller increments per revolution (2^16).
pub const INCREMENTS_PER_REV: f64 = (1u32 << INCREMENT_BITS) as f64;

/// SSR counts speed with a doubled convention.
pub const SSR_COUNT_FACTOR: f64 = 2.0;

/// Number of 125 µs SCW ticks in one millisecond.
pub const SCW_TICKS_PER_MS: f64 = 8.0;

/// Milliseconds per second.
pub const MS_PER_SECOND: f64 = 1000.0;

const_assert!(INCREMENT_BITS < 32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_per_rev_is_two_to_the_sixteen() {
        assert_eq!(INCREMENTS_PER_REV, 65536.0);
    }

    #[test]
    fn scw_tick_is_125_microseconds() {
        assert_eq!(1000.0 / SCW_TICKS_PER_MS, 125.0);
    }

    #[test]
    fn constants_are_consistent() {
        assert!(SSR_COUNT_FACTOR > 0.0);
        assert!(MS_PER_SECOND > 0.0);
    }
}
