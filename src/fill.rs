//! Turns answered prompts into a value of the target type.

use std::num::ParseIntError;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::QuestionnaireError;
use crate::plan::{PromptGroup, Slot, ValueKind};
use crate::schema::IntegerKind;

/// Assemble a fresh `T` from the slots of an answered group.
///
/// Each answer is keyed by the field its prompt was built for and laid over
/// `T::default()`, so fields without a prompt keep their default. Integer text
/// is parsed in prompt order and the first failure aborts the fill.
pub fn fill<T>(group: PromptGroup) -> Result<T, QuestionnaireError>
where
    T: Default + Serialize + DeserializeOwned,
{
    let mut answers = match serde_json::to_value(T::default()) {
        Ok(Value::Object(base)) => base,
        Ok(_) => Map::with_capacity(group.len()),
        Err(err) => return Err(QuestionnaireError::Assemble(err)),
    };

    for prompt in group.into_prompts() {
        let (field, kind, slot) = prompt.into_answer();
        let value = match slot {
            Slot::Flag(flag) => Value::Bool(flag),
            Slot::Text(text) => match kind {
                ValueKind::Integer(width) => parse_integer(&text, width).map_err(|source| {
                    QuestionnaireError::InvalidIntegerInput {
                        field: field.clone(),
                        source,
                    }
                })?,
                ValueKind::Text | ValueKind::Boolean => Value::String(text),
            },
        };
        answers.insert(field, value);
    }

    tracing::debug!(fields = answers.len(), "assembling answers over defaults");
    serde_json::from_value(Value::Object(answers)).map_err(QuestionnaireError::Assemble)
}

/// Parse base-10 text at the field's declared width, so overflow is reported
/// as a parse error rather than a deserialization error.
fn parse_integer(raw: &str, kind: IntegerKind) -> Result<Value, ParseIntError> {
    let value = match (kind.signed, kind.bits) {
        (true, 8) => Value::from(raw.parse::<i8>()?),
        (true, 16) => Value::from(raw.parse::<i16>()?),
        (true, 32) => Value::from(raw.parse::<i32>()?),
        (true, _) => Value::from(raw.parse::<i64>()?),
        (false, 8) => Value::from(raw.parse::<u8>()?),
        (false, 16) => Value::from(raw.parse::<u16>()?),
        (false, 32) => Value::from(raw.parse::<u32>()?),
        (false, _) => Value::from(raw.parse::<u64>()?),
    };
    Ok(value)
}
