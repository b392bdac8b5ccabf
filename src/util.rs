/// Safe numeric conversion helpers.
///
/// Provides checked conversions between `i64` and `f64` used wherever the
/// evaluator promotes integers for mixed arithmetic or turns rounded reals
/// back into integers.
pub mod num;
