//! Safety Value Calculator Library
//!
//! Converts physical drive parameters into the increment thresholds a drive
//! controller expects for its safety functions.
//!
//! # Module Structure
//!
//! - [`consts`] - Fixed controller constants (increments per revolution, tick scaling)
//! - [`convert`] - Millimeter ↔ revolution conversion
//! - [`ratio`] - Transmission ratio derivation from an encoder fraction
//! - [`increment`] - SSR, SOS and SCW increment formulas
//! - [`request`] - Tagged input model and the full calculation pipeline
//! - [`config`] - TOML drive-profile loading
//! - [`error`] - Calculation error type
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use safety_calc::prelude::*;
//!
//! let request = CalculationRequest {
//!     function: SafetyFunction::Ssr,
//!     pole_pairs: 4.0,
//!     max_value: 100.0,
//!     ratio: RatioInput::Direct { ratio: 10.0 },
//! };
//! let result = request.evaluate().unwrap();
//! assert!((result.value - 5242.88).abs() < 1e-9);
//! ```

pub mod config;
pub mod consts;
pub mod convert;
pub mod error;
pub mod increment;
pub mod prelude;
pub mod ratio;
pub mod request;
