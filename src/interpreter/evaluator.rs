/// Index and member access evaluation.
///
/// Reads from lists, dictionaries and strings by index or key, and from
/// instance field tables by name.
pub mod access;
/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions,
/// including arithmetic, string concatenation, comparisons, and the
/// short-circuiting logical operators.
pub mod binary;
/// The built-in function registry and its implementations.
///
/// A static name-to-callable table consulted after user-defined lookup
/// fails, so user bindings shadow built-ins of the same name.
pub mod builtins;
/// Function calls and object construction.
///
/// Dispatches calls to user functions and built-ins, and implements
/// `New`, which runs any function against a fresh `this`.
pub mod call;
/// Core evaluation logic and interpreter state.
///
/// Contains the main evaluation engine, statement execution, control
/// flow, and error propagation.
pub mod core;
/// The lexical environment chain.
///
/// Name-to-value frames linked towards the globals, shared by closures.
pub mod env;
/// Evaluation of `For each` loops.
///
/// Snapshots the iterated collection and binds the loop variable for
/// each item.
pub mod for_loop;
/// The module registry behind `Import`.
///
/// Host-populated named binding sets merged into the globals on import.
pub mod modules;
/// Unary operator evaluation.
///
/// Implements numeric negation and logical NOT.
pub mod unary;
