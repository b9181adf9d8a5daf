//! Conversion driver: JSON object text in, field declarations out

use crate::naming::to_identifier;
use crate::types::{is_integer, ConvertConfig, FieldDecl, RenderConfig, TypeLabel};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("no JSON input was supplied")]
    MissingInput,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Converts flat JSON objects into field declarations
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Converter { config }
    }

    /// Parse JSON text and convert the top-level object.
    ///
    /// Nothing is produced when the text fails to parse.
    pub fn convert_str(&self, text: &str) -> Result<Vec<FieldDecl>> {
        if text.trim().is_empty() {
            return Err(ConvertError::MissingInput);
        }
        let value: Value = serde_json::from_str(text)?;
        self.convert_value(&value)
    }

    /// Convert an already decoded value, which must be an object
    pub fn convert_value(&self, value: &Value) -> Result<Vec<FieldDecl>> {
        match value {
            Value::Object(obj) => Ok(self.convert_object(obj)),
            other => Err(ConvertError::NotAnObject {
                found: kind_of(other),
            }),
        }
    }

    /// One declaration per key, in the object's iteration order
    pub fn convert_object(&self, obj: &Map<String, Value>) -> Vec<FieldDecl> {
        obj.iter()
            .map(|(key, value)| {
                let name = to_identifier(key, self.config.underscores);
                let label = TypeLabel::from_value(value);
                if label == TypeLabel::Unknown {
                    tracing::warn!(key = %key, kind = kind_of(value), "value has no scalar type, labelled Unknown");
                }
                tracing::debug!(key = %key, name = %name, label = ?label, "converted field");
                FieldDecl::new(name, label, key.as_str())
            })
            .collect()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if is_integer(n) => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render declarations as text.
///
/// Each declaration becomes `\t<Identifier> <TypeLabel>`; lines are joined with `\n`
/// and the result has no trailing newline.
pub fn render(fields: &[FieldDecl], config: &RenderConfig) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(fields.len() + config.padding + 3);

    lines.extend(std::iter::repeat(String::new()).take(config.padding));
    if let Some(header) = &config.header {
        lines.push(header.clone());
    }

    if let Some(name) = &config.struct_name {
        lines.push(format!("type {} struct {{", name));
    }

    for field in fields {
        let mut line = format!("\t{} {}", field.name, field.label.render(config.style));
        if config.tags {
            line.push_str(&format!(" `json:\"{}\"`", field.key));
        }
        lines.push(line);
    }

    if config.struct_name.is_some() {
        lines.push(String::from("}"));
    }

    lines.join("\n")
}

/// Render declarations as a pretty-printed JSON array
pub fn render_json(fields: &[FieldDecl]) -> Result<String> {
    Ok(serde_json::to_string_pretty(fields)?)
}
