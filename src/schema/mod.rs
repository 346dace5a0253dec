//! Field metadata for a target struct, read from its derived JSON schema.
//!
//! The schema is generated at compile time by `#[derive(JsonSchema)]`, so the
//! field list, declaration order and kinds are fixed per type.
//!
//! A field opts into the questionnaire with a schema extension:
//!
//! ```ignore
//! #[schemars(extend("x-prompt" = true))]
//! name: String,
//! ```

mod kind;

pub use kind::{FieldKind, IntegerKind, describe};

use schemars::JsonSchema;
use serde_json::{Map, Value};

use crate::error::QuestionnaireError;

/// Schema extension key that marks a field as asked.
pub const PROMPT_MARKER: &str = "x-prompt";

/// One field of the target struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Serialized field name, used to assign the answer.
    pub name: String,
    /// Prompt title. Falls back to `name`.
    pub title: String,
    pub description: Option<String>,
    pub kind: FieldKind,
    /// Set when the field carries the prompt marker and serde deserializes it.
    pub prompted: bool,
}

impl FieldSpec {
    fn from_property(name: &str, property: &Value) -> Self {
        let text = |key: &str| {
            property
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let flag = |key: &str| property.get(key).and_then(Value::as_bool).unwrap_or(false);
        let marked = flag(PROMPT_MARKER);
        let read_only = flag("readOnly");

        Self {
            name: name.to_string(),
            title: text("title").unwrap_or_else(|| name.to_string()),
            description: text("description"),
            kind: FieldKind::classify(property),
            prompted: marked && !read_only,
        }
    }
}

/// Ordered field list of a struct, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    title: Option<String>,
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Read the schema derived for `T`.
    pub fn of<T: JsonSchema>() -> Result<Self, QuestionnaireError> {
        let root = schemars::schema_for!(T);
        let value = serde_json::to_value(&root).map_err(QuestionnaireError::Schema)?;
        Self::from_json_schema(&value)
    }

    /// Read a JSON schema value. The root must describe an object with named
    /// properties; anything else fails with `NotAStruct`.
    pub fn from_json_schema(root: &Value) -> Result<Self, QuestionnaireError> {
        let Some(obj) = root.as_object() else {
            return Err(not_a_struct(root));
        };
        if obj.get("type").and_then(Value::as_str) != Some("object") || is_enum(obj) {
            return Err(not_a_struct(root));
        }

        let empty = Map::new();
        let properties = match obj.get("properties") {
            Some(Value::Object(properties)) => properties,
            Some(_) => return Err(not_a_struct(root)),
            None if is_map(obj) => {
                return Err(QuestionnaireError::NotAStruct { kind: "map".into() });
            }
            None => &empty,
        };

        let fields = properties
            .iter()
            .map(|(name, property)| FieldSpec::from_property(name, property))
            .collect();

        Ok(Self {
            title: obj.get("title").and_then(Value::as_str).map(str::to_string),
            fields,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn prompted_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.prompted)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn not_a_struct(root: &Value) -> QuestionnaireError {
    QuestionnaireError::NotAStruct {
        kind: describe(root),
    }
}

fn is_enum(obj: &Map<String, Value>) -> bool {
    obj.contains_key("oneOf") || obj.contains_key("anyOf") || obj.contains_key("enum")
}

fn is_map(obj: &Map<String, Value>) -> bool {
    obj.get("additionalProperties")
        .is_some_and(|extra| *extra != Value::Bool(false))
}
