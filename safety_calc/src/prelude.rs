//! Prelude module for common re-exports.
//!
//! ```rust
//! use safety_calc::prelude::*;
//! ```

// ─── Calculation ────────────────────────────────────────────────────
pub use crate::convert::{mm_to_rev, rev_to_mm};
pub use crate::increment::{SafetyFunction, compute_scw, compute_sos, compute_ssr};
pub use crate::ratio::{encoder_resolution_from_bits, ratio_from_fraction};
pub use crate::request::{CalculationRequest, CalculationResult, RatioInput};

// ─── Errors ─────────────────────────────────────────────────────────
pub use crate::error::{CalcError, CalcResult};

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{
    ConfigError, ConfigLoader, DriveProfile, LogLevel, ProfileConfig, SharedConfig,
};
