use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Reads an environment variable, yielding `null` when it is unset or
/// not valid Unicode.
pub fn get_env(args: &[Value], line: usize) -> EvalResult<Value> {
    let name = args[0].as_str(line)?;
    Ok(std::env::var(name).map_or(Value::Null, Value::Str))
}

/// Sets an environment variable for the remainder of the process.
pub fn set_env(args: &[Value], line: usize) -> EvalResult<Value> {
    let name = args[0].as_str(line)?;
    // The interpreter is single-threaded and nothing else reads the
    // process environment concurrently.
    unsafe {
        std::env::set_var(name, args[1].to_string());
    }
    Ok(Value::Bool(true))
}

/// Checks whether an environment variable is set.
pub fn has_env(args: &[Value], line: usize) -> EvalResult<Value> {
    let name = args[0].as_str(line)?;
    Ok(Value::Bool(std::env::var_os(name).is_some()))
}

/// Lists the names of all environment variables, sorted.
#[allow(clippy::unnecessary_wraps)]
pub fn list_env(_args: &[Value], _line: usize) -> EvalResult<Value> {
    let mut names: Vec<String> = std::env::vars_os()
        .filter_map(|(name, _)| name.into_string().ok())
        .collect();
    names.sort();
    Ok(Value::from(names.into_iter().map(Value::Str).collect::<Vec<_>>()))
}
