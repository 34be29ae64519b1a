//! Safety increment formulas (SSR, SOS, SCW).
//!
//! Every formula converts the linear input to revolutions per second via the
//! transmission ratio, scales it to revolutions per millisecond, then applies
//! the controller's increment resolution:
//!
//! | Function | Result | Formula |
//! |---|---|---|
//! | SSR | increments / ms | `2 · 2¹⁶ · p · rev_ms` |
//! | SOS | increments | `2¹⁶ · p · rev_ms` |
//! | SCW | increments / 125 µs | `2¹⁶ · p · rev_ms / 8` |
//!
//! No range validation of `pole_pairs` or the input value happens here.
//! Non-finite inputs flow through to a non-finite result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::consts::{INCREMENTS_PER_REV, MS_PER_SECOND, SCW_TICKS_PER_MS, SSR_COUNT_FACTOR};
use crate::convert::mm_to_rev;
use crate::error::CalcResult;

/// Safety function whose threshold is being calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyFunction {
    /// Safety Speed Range: increments per millisecond.
    #[default]
    Ssr,
    /// Safety Operating Stop: absolute increments.
    Sos,
    /// Safety Cam/Window: increments per 125 µs.
    Scw,
}

impl SafetyFunction {
    /// All functions in display order.
    pub const ALL: [SafetyFunction; 3] = [Self::Ssr, Self::Sos, Self::Scw];

    /// Short upper-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ssr => "SSR",
            Self::Sos => "SOS",
            Self::Scw => "SCW",
        }
    }

    /// Label for the linear input this function takes.
    pub const fn input_label(&self) -> &'static str {
        match self {
            Self::Ssr | Self::Scw => "Max Speed (mm/s)",
            Self::Sos => "Max Displacement (mm)",
        }
    }

    /// Label for the result unit.
    pub const fn result_label(&self) -> &'static str {
        match self {
            Self::Ssr => "SSR Increments/ms",
            Self::Sos => "SOS Increments",
            Self::Scw => "SCW Increments/125us",
        }
    }

    /// Dispatch to the matching increment formula.
    #[inline]
    pub fn compute(&self, pole_pairs: f64, max_value: f64, ratio: f64) -> CalcResult<f64> {
        match self {
            Self::Ssr => compute_ssr(pole_pairs, max_value, ratio),
            Self::Sos => compute_sos(pole_pairs, max_value, ratio),
            Self::Scw => compute_scw(pole_pairs, max_value, ratio),
        }
    }
}

impl fmt::Display for SafetyFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SafetyFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssr" => Ok(Self::Ssr),
            "sos" => Ok(Self::Sos),
            "scw" => Ok(Self::Scw),
            other => Err(format!("unknown safety function '{other}' (expected ssr, sos or scw)")),
        }
    }
}

/// Revolutions per millisecond for a linear rate in mm/s.
#[inline]
fn rev_per_ms(mm_per_sec: f64, ratio: f64) -> CalcResult<f64> {
    let rev_per_sec = mm_to_rev(mm_per_sec, ratio)?;
    Ok(rev_per_sec / MS_PER_SECOND)
}

/// SSR threshold in increments per millisecond.
///
/// # Errors
///
/// Propagates [`mm_to_rev`] failures for a zero or non-finite `ratio`.
#[inline]
pub fn compute_ssr(pole_pairs: f64, max_mm_per_sec: f64, ratio: f64) -> CalcResult<f64> {
    let rev_ms = rev_per_ms(max_mm_per_sec, ratio)?;
    Ok(SSR_COUNT_FACTOR * INCREMENTS_PER_REV * pole_pairs * rev_ms)
}

/// SOS threshold in absolute increments.
///
/// `max_mm` is a displacement, yet it goes through the same rev-per-ms
/// derivation as the speed-based functions: `max_mm / ratio / 1000` is
/// treated as revolutions per millisecond. The controller tooling defines the
/// SOS threshold this way, so the result matches its values even though the
/// units do not line up with a pure position count.
///
/// # Errors
///
/// Propagates [`mm_to_rev`] failures for a zero or non-finite `ratio`.
#[inline]
pub fn compute_sos(pole_pairs: f64, max_mm: f64, ratio: f64) -> CalcResult<f64> {
    let rev_ms = rev_per_ms(max_mm, ratio)?;
    Ok(INCREMENTS_PER_REV * pole_pairs * rev_ms)
}

/// SCW threshold in increments per 125 µs tick.
///
/// # Errors
///
/// Propagates [`mm_to_rev`] failures for a zero or non-finite `ratio`.
#[inline]
pub fn compute_scw(pole_pairs: f64, max_mm_per_sec: f64, ratio: f64) -> CalcResult<f64> {
    let rev_ms = rev_per_ms(max_mm_per_sec, ratio)?;
    let inc_ms = INCREMENTS_PER_REV * pole_pairs * rev_ms;
    Ok(inc_ms / SCW_TICKS_PER_MS)
}

// ─── Tests ──────────────────────────────────────────────────────────
