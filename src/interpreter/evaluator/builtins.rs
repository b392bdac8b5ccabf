/// Collection built-ins: `append`, `remove`, `get`, `keys`, `values`,
/// `contains`.
pub mod collections;
/// The built-in registry: the static lookup table, arity checking, and
/// the `BuiltinDef` entries the evaluator dispatches to.
pub mod core;
/// Process environment built-ins: `get_env`, `set_env`, `has_env`,
/// `list_env`.
pub mod env;
/// General utilities: lengths, conversions, ranges, rounding, and
/// randomness.
pub mod general;
/// File built-ins: reading, writing, appending, metadata, and JSON
/// files.
pub mod io;
/// JSON built-ins and the conversions between language values and JSON
/// documents.
pub mod json;
/// String built-ins: case mapping, trimming, splitting, joining, and
/// affix tests.
pub mod strings;
