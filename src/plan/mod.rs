mod prompt;

pub use prompt::{Prompt, PromptGroup, PromptStyle, Slot, SlotMut, ValueKind};

use crate::error::QuestionnaireError;
use crate::schema::{FieldKind, Schema};

/// Prompts built for one struct, with each slot bound to its prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    group: PromptGroup,
}

impl Plan {
    pub fn prompts(&self) -> &[Prompt] {
        self.group.prompts()
    }

    pub fn group(&self) -> &PromptGroup {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut PromptGroup {
        &mut self.group
    }

    pub fn into_group(self) -> PromptGroup {
        self.group
    }

    /// Slots holding text: string and integer fields.
    pub fn text_slots(&self) -> usize {
        self.count(|slot| matches!(slot, Slot::Text(_)))
    }

    /// Slots holding a yes/no answer: boolean fields.
    pub fn flag_slots(&self) -> usize {
        self.count(|slot| matches!(slot, Slot::Flag(_)))
    }

    pub fn len(&self) -> usize {
        self.group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    fn count(&self, pred: impl Fn(&Slot) -> bool) -> usize {
        self.prompts().iter().filter(|p| pred(p.slot())).count()
    }
}

/// Build one prompt per prompted field, in declaration order.
///
/// Fails on the first prompted field whose kind has no prompt mapping; no
/// partial plan is returned.
pub fn build_plan(schema: &Schema) -> Result<Plan, QuestionnaireError> {
    let mut prompts = Vec::with_capacity(schema.fields().len());

    for field in schema.fields() {
        if !field.prompted {
            tracing::debug!(field = %field.name, "skipping unasked field");
            continue;
        }

        let kind = match &field.kind {
            FieldKind::Text => ValueKind::Text,
            FieldKind::Integer(width) => ValueKind::Integer(*width),
            FieldKind::Boolean => ValueKind::Boolean,
            FieldKind::Unsupported(kind) => {
                return Err(QuestionnaireError::UnsupportedFieldType {
                    field: field.name.clone(),
                    kind: kind.clone(),
                });
            }
        };
        prompts.push(Prompt::new(field, kind));
    }

    let mut group = PromptGroup::new(prompts);
    if let Some(title) = schema.title() {
        group.set_title(title);
    }

    tracing::debug!(prompts = group.len(), "built prompt plan");
    Ok(Plan { group })
}
