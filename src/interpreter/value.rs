/// Core value representation.
///
/// Defines the `Value` enum with all runtime types, the truthiness rule,
/// structural equality, and the printed form used by `Say`.
pub mod core;
/// Insertion-ordered dictionary storage.
///
/// Backs both `Dict` values and instance field tables.
pub mod dict;
/// Function and instance values.
///
/// User-defined functions with closures, and the objects `New` creates.
pub mod function;
