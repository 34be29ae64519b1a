//! Result presentation.
//!
//! The calculator core never formats text; everything the user sees is
//! produced here.

use safety_calc::request::CalculationResult;

/// The only message shown for rejected input or a failed calculation.
pub const GENERIC_ERROR: &str = "Error in input values.";

/// `"<result label>: <value with two decimals>"`.
pub fn format_result(result: &CalculationResult) -> String {
    format!("{}: {:.2}", result.function.result_label(), result.value)
}

/// JSON document for one or more results.
///
/// A single result is emitted as an object, several as an array.
pub fn format_json(results: &[CalculationResult]) -> serde_json::Result<String> {
    match results {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    }
}
