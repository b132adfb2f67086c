//! JSON document input and output

use super::CommandResult;
use std::path::Path;
use valkit_core::{ValkitError, Value};

/// Load a JSON document from `path`
pub fn read_document(path: &Path) -> CommandResult<Value> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let value = serde_json::from_str::<Value>(&text).map_err(ValkitError::from)?;
    Ok(value)
}

/// Pretty JSON for `value`; absent renders as the empty string
pub fn render(value: &Value) -> CommandResult<String> {
    if value.is_undefined() {
        return Ok(String::new());
    }
    let text = serde_json::to_string_pretty(&value.to_json()).map_err(ValkitError::from)?;
    Ok(text)
}

/// Print `value` to stdout, or write it to `output` when given
pub fn emit(value: &Value, output: Option<&Path>) -> CommandResult {
    let text = render(value)?;
    match output {
        Some(output_path) => {
            std::fs::write(output_path, format!("{}\n", text))?;
            println!("✓ Wrote {}", output_path.display());
        }
        None if text.is_empty() => {}
        None => println!("{}", text),
    }
    Ok(())
}
