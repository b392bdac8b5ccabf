use crate::interpreter::{
    evaluator::{
        builtins::{collections, env, general, io, json, strings},
        core::EvalResult,
    },
    value::core::Value,
};

/// Type alias for built-in function handlers.
///
/// A built-in receives the already-evaluated argument values and the call
/// site's line number, and produces a value or a runtime error.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a built-in.
///
/// - `Exact(n)` means the built-in must receive exactly `n` arguments.
/// - `OneOf(slice)` means the built-in accepts any arity listed in
///   `slice`, for the handful of built-ins with an optional argument.
#[derive(Clone, Copy)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of the listed argument counts.
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(options) => options.contains(&n),
        }
    }

    /// Describes the accepted argument counts for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::OneOf(options) => options.iter()
                                           .map(ToString::to_string)
                                           .collect::<Vec<_>>()
                                           .join(" or "),
        }
    }
}

/// A single entry of the built-in registry.
pub struct BuiltinDef {
    /// The name scripts call the built-in by.
    pub name:  &'static str,
    /// The accepted argument counts.
    pub arity: Arity,
    /// The host function implementing the built-in.
    pub func:  BuiltinFn,
}

impl std::fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<builtin {}>", self.name)
    }
}

/// Defines built-in functions by generating a lookup table and a name
/// list.
///
/// Each entry provides a string name, an arity specification, and a
/// function pointer. The macro produces `BUILTIN_TABLE` (the static table
/// consulted after user-defined lookup fails) and `BUILTIN_FUNCTIONS`
/// (the public list of built-in names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of every registered built-in function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    // General utilities.
    "length"      => { arity: Arity::Exact(1), func: general::length },
    "to_text"     => { arity: Arity::Exact(1), func: general::to_text },
    "to_number"   => { arity: Arity::Exact(1), func: general::to_number },
    "to_list"     => { arity: Arity::Exact(1), func: general::to_list },
    "range"       => { arity: Arity::OneOf(&[1, 2]), func: general::range },
    "round"       => { arity: Arity::OneOf(&[1, 2]), func: general::round },
    "floor"       => { arity: Arity::Exact(1), func: |args, line| general::unary_round("floor", args, line) },
    "ceiling"     => { arity: Arity::Exact(1), func: |args, line| general::unary_round("ceiling", args, line) },
    "abs"         => { arity: Arity::Exact(1), func: general::abs },
    "sqrt"        => { arity: Arity::Exact(1), func: general::sqrt },
    "power"       => { arity: Arity::Exact(2), func: general::power },
    "random"      => { arity: Arity::Exact(0), func: general::random },
    "random_int"  => { arity: Arity::Exact(2), func: general::random_int },
    // Strings.
    "upper"       => { arity: Arity::Exact(1), func: strings::upper },
    "lower"       => { arity: Arity::Exact(1), func: strings::lower },
    "trim"        => { arity: Arity::Exact(1), func: strings::trim },
    "split"       => { arity: Arity::OneOf(&[1, 2]), func: strings::split },
    "join"        => { arity: Arity::OneOf(&[1, 2]), func: strings::join },
    "replace"     => { arity: Arity::Exact(3), func: strings::replace },
    "starts_with" => { arity: Arity::Exact(2), func: strings::starts_with },
    "ends_with"   => { arity: Arity::Exact(2), func: strings::ends_with },
    // Collections.
    "append"      => { arity: Arity::Exact(2), func: collections::append },
    "remove"      => { arity: Arity::Exact(2), func: collections::remove },
    "get"         => { arity: Arity::OneOf(&[2, 3]), func: collections::get },
    "keys"        => { arity: Arity::Exact(1), func: collections::keys },
    "values"      => { arity: Arity::Exact(1), func: collections::values },
    "contains"    => { arity: Arity::Exact(2), func: collections::contains },
    // Files.
    "read_file"   => { arity: Arity::Exact(1), func: io::read_file },
    "write_file"  => { arity: Arity::Exact(2), func: io::write_file },
    "append_file" => { arity: Arity::Exact(2), func: io::append_file },
    "file_exists" => { arity: Arity::Exact(1), func: io::file_exists },
    "file_size"   => { arity: Arity::Exact(1), func: io::file_size },
    "delete_file" => { arity: Arity::Exact(1), func: io::delete_file },
    "read_lines"  => { arity: Arity::Exact(1), func: io::read_lines },
    "read_json"   => { arity: Arity::Exact(1), func: io::read_json },
    "write_json"  => { arity: Arity::Exact(2), func: io::write_json },
    // JSON.
    "parse_json"  => { arity: Arity::Exact(1), func: json::parse_json },
    "to_json"     => { arity: Arity::Exact(1), func: json::to_json },
    // Process environment.
    "get_env"     => { arity: Arity::Exact(1), func: env::get_env },
    "set_env"     => { arity: Arity::Exact(2), func: env::set_env },
    "has_env"     => { arity: Arity::Exact(1), func: env::has_env },
    "list_env"    => { arity: Arity::Exact(0), func: env::list_env },
}

/// Looks a name up in the built-in registry.
///
/// The evaluator consults this only after the environment chain came up
/// empty, so user bindings shadow built-ins.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}
