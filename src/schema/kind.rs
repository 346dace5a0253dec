use serde_json::Value;
use std::fmt;

/// Coarse category a field's declared type falls into for prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer(IntegerKind),
    Boolean,
    /// Carries the schema kind that has no prompt mapping.
    Unsupported(String),
}

impl FieldKind {
    /// Classify a property schema. Single-character strings (`char`) are
    /// unsupported since free text cannot be checked until assembly.
    pub fn classify(property: &Value) -> Self {
        let Some(obj) = property.as_object() else {
            return Self::Unsupported(describe(property));
        };
        if obj.contains_key("enum") || obj.contains_key("const") {
            return Self::Unsupported("enum".into());
        }
        match obj.get("type").and_then(Value::as_str) {
            Some("string") if is_single_char(obj) => Self::Unsupported("char".into()),
            Some("string") => Self::Text,
            Some("boolean") => Self::Boolean,
            Some("integer") => Self::Integer(IntegerKind::from_format(
                obj.get("format").and_then(Value::as_str),
            )),
            _ => Self::Unsupported(describe(property)),
        }
    }
}

fn is_single_char(obj: &serde_json::Map<String, Value>) -> bool {
    obj.get("maxLength").and_then(Value::as_u64) == Some(1)
}

/// Signedness and bit width of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerKind {
    pub signed: bool,
    pub bits: u32,
}

impl IntegerKind {
    pub const I64: Self = Self {
        signed: true,
        bits: 64,
    };

    /// Map a schema `format` to a width. Unknown or missing formats read as `i64`.
    pub fn from_format(format: Option<&str>) -> Self {
        let Some(format) = format else {
            return Self::I64;
        };
        let (signed, digits) = match format.strip_prefix("uint") {
            Some(rest) => (false, rest),
            None => match format.strip_prefix("int") {
                Some(rest) => (true, rest),
                None => return Self::I64,
            },
        };
        let bits = if digits.is_empty() {
            usize::BITS
        } else {
            match digits.parse::<u32>() {
                Ok(bits @ (8 | 16 | 32 | 64 | 128)) => bits,
                _ => return Self::I64,
            }
        };
        Self { signed, bits }
    }
}

impl fmt::Display for IntegerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        write!(f, "{prefix}{}", self.bits)
    }
}

/// Short human name for the kind a schema describes.
pub fn describe(schema: &Value) -> String {
    let obj = match schema {
        Value::Bool(_) => return "any".into(),
        Value::Object(obj) => obj,
        _ => return "unknown".into(),
    };
    if obj.contains_key("$ref") {
        return "reference".into();
    }
    if obj.contains_key("enum") || obj.contains_key("oneOf") || obj.contains_key("anyOf") {
        return "enum".into();
    }
    match obj.get("type") {
        Some(Value::String(kind)) => kind.clone(),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("|"),
        _ => "unknown".into(),
    }
}
