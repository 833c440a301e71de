use std::io::{Read, Write};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::output::FunctionResult;
use crate::{Error, Result};

/// Parses the function input and checks that its top-level value is an object.
///
/// Nesting depth is unbounded; the stack grows on demand for deep documents.
pub fn parse_input(input: &[u8]) -> Result<Map<String, Value>> {
    let mut deserializer = serde_json::Deserializer::from_slice(input);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(Error::Parse)?;
    deserializer.end().map_err(Error::Parse)?;
    match value {
        Value::Object(object) => Ok(object),
        other => Err(Error::NotAnObject {
            found: json_type(&other),
        }),
    }
}

/// Computes the function result for a raw input document.
///
/// The input is validated and then ignored: this function has no discounts to
/// offer, so every well-formed object yields the same result.
pub fn run(input: &[u8]) -> Result<FunctionResult> {
    let configuration = parse_input(input)?;
    tracing::debug!(
        bytes = input.len(),
        keys = configuration.len(),
        "parsed function input"
    );
    Ok(FunctionResult::default())
}

/// Writes `result` pretty-printed, followed by a newline.
pub fn write_output<W: Write>(mut writer: W, result: &FunctionResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Reads `reader` to the end, runs the function and writes the result.
///
/// Nothing reaches `writer` unless the input was accepted.
pub fn respond<R: Read, W: Write>(mut reader: R, writer: W) -> Result<()> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let result = run(&input)?;
    write_output(writer, &result)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
