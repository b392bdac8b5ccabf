use std::{fs, io::Write, path::Path};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{builtins::json, core::EvalResult},
        value::core::Value,
    },
};

/// Reads a whole file as text.
pub fn read_file(args: &[Value], line: usize) -> EvalResult<Value> {
    let path = args[0].as_str(line)?;
    fs::read_to_string(path).map(Value::Str)
                            .map_err(|e| RuntimeError::Io { details:
                                                                format!("could not read file \
                                                                         '{path}': {e}"),
                                                            line })
}

/// Writes a value's text form to a file, replacing any previous content.
pub fn write_file(args: &[Value], line: usize) -> EvalResult<Value> {
    let path = args[0].as_str(line)?;
    fs::write(path, args[1].to_string()).map_err(|e| RuntimeError::Io {
                                            details: format!("could not write file '{path}': {e}"),
                                            line,
                                        })?;
    Ok(Value::Bool(true))
}

/// Appends a value's text form to a file, creating it when absent.
pub fn append_file(args: &[Value], line: usize) -> EvalResult<Value> {
    let path = args[0].as_str(line)?;
    let io_error = |e| RuntimeError::Io { details: format!("could not append to file '{path}': {e}"),
                                          line };
    let mut file = fs::OpenOptions::new().append(true)
                                         .create(true)
                                         .open(path)
                                         .map_err(io_error)?;
    file.write_all(args[1].to_string().as_bytes())
        .map_err(io_error)?;
    Ok(Value::Bool(true))
}

/// Checks whether a path exists.
pub fn file_exists(args: &[Value], line: usize) -> EvalResult<Value> {
    let path = args[0].as_str(line)?;
    Ok(Value::Bool(Path::new(path).exists()))
}

/// Gets the size of a file in bytes.
pub fn file_size(args: &[Value], line: usize) -> EvalResult<Value> {
    let path = args[0].as_str(line)?;
    let metadata = fs::metadata(path).map_err(|e| RuntimeError::Io {
                       details: format!("could not inspect file '{path}': {e}"),
                       line,
                   })?;
    i64::try_from(metadata.len()).map(Value::Integer)
                                 .map_err(|_| RuntimeError::LiteralTooLarge { line })
}

/// Deletes a file. Returns `false` when the file was already absent.
pub fn delete_file(args: &[Value], line: usize) -> EvalResult<Value> {
    let path = args[0].as_str(line)?;
    match fs::remove_file(path) {
        Ok(()) => Ok(Value::Bool(true)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Value::Bool(false)),
        Err(e) => Err(RuntimeError::Io { details: format!("could not delete file '{path}': {e}"),
                                         line }),
    }
}

/// Reads a file as a list of its lines, without line endings.
pub fn read_lines(args: &[Value], line: usize) -> EvalResult<Value> {
    let path = args[0].as_str(line)?;
    let content = fs::read_to_string(path).map_err(|e| RuntimeError::Io {
                      details: format!("could not read file '{path}': {e}"),
                      line,
                  })?;
    let lines: Vec<Value> = content.lines().map(|l| Value::Str(l.to_string())).collect();
    Ok(Value::from(lines))
}

/// Reads a file and parses its content as JSON.
pub fn read_json(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = read_file(args, line)?;
    json::parse_json(&[text], line)
}

/// Serializes a value as pretty-printed JSON and writes it to a file.
pub fn write_json(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = json::to_json(&args[1..], line)?;
    write_file(&[args[0].clone(), text], line)
}
