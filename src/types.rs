use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Coarse type label for a JSON scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeLabel {
    UnsignedInt,
    String,
    Bool,
    Unknown,
}

impl TypeLabel {
    /// Classify a decoded JSON value.
    ///
    /// Integers are never checked for sign, so `-3` is still `UnsignedInt`.
    /// Floats, null and nested structures fall through to `Unknown`.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(_) => TypeLabel::Bool,
            Value::Number(n) => {
                if is_integer(n) {
                    TypeLabel::UnsignedInt
                } else {
                    TypeLabel::Unknown
                }
            }
            Value::String(_) => TypeLabel::String,
            Value::Null | Value::Array(_) | Value::Object(_) => TypeLabel::Unknown,
        }
    }

    /// Render the label in the given style
    pub fn render(self, style: LabelStyle) -> &'static str {
        match style {
            LabelStyle::Descriptive => match self {
                TypeLabel::UnsignedInt => "UnsignedInt",
                TypeLabel::String => "String",
                TypeLabel::Bool => "Bool",
                TypeLabel::Unknown => "Unknown",
            },
            LabelStyle::Go => match self {
                TypeLabel::UnsignedInt => "uint",
                TypeLabel::String => "string",
                TypeLabel::Bool => "bool",
                TypeLabel::Unknown => "unknown",
            },
            LabelStyle::Rust => match self {
                TypeLabel::UnsignedInt => "u64",
                TypeLabel::String => "String",
                TypeLabel::Bool => "bool",
                TypeLabel::Unknown => "serde_json::Value",
            },
        }
    }
}

/// True for integer-valued numbers of any magnitude.
///
/// Literals outside the `i64`/`u64` range are kept verbatim (`arbitrary_precision`),
/// so they are recognised by the absence of a fraction or exponent.
pub fn is_integer(n: &Number) -> bool {
    n.is_i64() || n.is_u64() || !n.to_string().contains(|c: char| matches!(c, '.' | 'e' | 'E'))
}

/// How type labels are spelled in the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    #[default]
    Descriptive,
    Go,
    Rust,
}

/// One output line: derived identifier plus type label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Camel-case identifier, e.g. "HeadBlockId"
    pub name: String,

    pub label: TypeLabel,

    /// The JSON key the declaration was derived from
    pub key: String,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, label: TypeLabel, key: impl Into<String>) -> Self {
        FieldDecl {
            name: name.into(),
            label,
            key: key.into(),
        }
    }
}

/// What to do with an underscore that is not followed by a lowercase letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnderscorePolicy {
    /// Leave it in the identifier (`a__b` -> `A_B`)
    #[default]
    Keep,
    /// Remove it (`a__b` -> `AB`)
    Drop,
}

/// Configuration for the conversion step
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    pub underscores: UnderscorePolicy,
}

/// Configuration for rendering declarations as text
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Spelling of the type labels
    pub style: LabelStyle,

    /// Line printed before the declarations
    pub header: Option<String>,

    /// Blank lines printed before the header
    pub padding: usize,

    /// Wrap the declarations in `type <Name> struct { ... }`
    pub struct_name: Option<String>,

    /// Append a `json:"<key>"` tag to each declaration
    pub tags: bool,
}

impl RenderConfig {
    /// Declarations only: no padding, no header
    pub fn bare() -> Self {
        RenderConfig {
            header: None,
            padding: 0,
            ..Default::default()
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            style: LabelStyle::Descriptive,
            header: Some(String::from("The result is:")),
            padding: 4,
            struct_name: None,
            tags: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool_is_never_an_integer() {
        assert_eq!(TypeLabel::from_value(&json!(true)), TypeLabel::Bool);
        assert_eq!(TypeLabel::from_value(&json!(false)), TypeLabel::Bool);
    }

    #[test]
    fn test_integers_ignore_sign() {
        assert_eq!(TypeLabel::from_value(&json!(72958298)), TypeLabel::UnsignedInt);
        assert_eq!(TypeLabel::from_value(&json!(-5)), TypeLabel::UnsignedInt);
        assert_eq!(TypeLabel::from_value(&json!(u64::MAX)), TypeLabel::UnsignedInt);
    }

    #[test]
    fn test_oversized_integers() {
        let too_big: Value = serde_json::from_str("18446744073709551616").unwrap();
        let too_small: Value = serde_json::from_str("-9223372036854775809").unwrap();

        assert_eq!(TypeLabel::from_value(&too_big), TypeLabel::UnsignedInt);
        assert_eq!(TypeLabel::from_value(&too_small), TypeLabel::UnsignedInt);
    }

    #[test]
    fn test_float_literals_stay_unknown() {
        for text in ["1.0", "1e3", "-2.5E-4", "123456789012345678901234567890.5"] {
            let value: Value = serde_json::from_str(text).unwrap();
            assert_eq!(TypeLabel::from_value(&value), TypeLabel::Unknown, "{}", text);
        }
    }

    #[test]
    fn test_unknown_shapes() {
        assert_eq!(TypeLabel::from_value(&json!(1.5)), TypeLabel::Unknown);
        assert_eq!(TypeLabel::from_value(&json!(null)), TypeLabel::Unknown);
        assert_eq!(TypeLabel::from_value(&json!([1, 2])), TypeLabel::Unknown);
        assert_eq!(TypeLabel::from_value(&json!({"a": 1})), TypeLabel::Unknown);
    }

    #[test]
    fn test_label_styles() {
        assert_eq!(TypeLabel::UnsignedInt.render(LabelStyle::Descriptive), "UnsignedInt");
        assert_eq!(TypeLabel::UnsignedInt.render(LabelStyle::Go), "uint");
        assert_eq!(TypeLabel::Unknown.render(LabelStyle::Rust), "serde_json::Value");
    }
}
