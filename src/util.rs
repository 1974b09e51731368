/// Numeric helpers.
///
/// Parsing of number-literal text into `f64` and formatting of results for
/// display. Literal parsing reports failures as evaluation errors instead of
/// silently producing NaN.
pub mod num;
