use strum::{Display, EnumString};

use crate::schema::{FieldSpec, IntegerKind};

/// How an engine should ask for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PromptStyle {
    /// Free text input.
    Input,
    /// Yes/no question.
    Confirm,
}

/// Value kind of a prompted field, after unsupported kinds are ruled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    /// Collected as text, parsed when the answers are filled in.
    Integer(IntegerKind),
    Boolean,
}

impl ValueKind {
    pub fn style(self) -> PromptStyle {
        match self {
            Self::Text | Self::Integer(_) => PromptStyle::Input,
            Self::Boolean => PromptStyle::Confirm,
        }
    }
}

/// Single-value output holder written by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Text(String),
    Flag(bool),
}

impl Slot {
    fn empty(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Text | ValueKind::Integer(_) => Self::Text(String::new()),
            ValueKind::Boolean => Self::Flag(false),
        }
    }
}

/// Write access to a slot. The variant is fixed by the prompt.
#[derive(Debug)]
pub enum SlotMut<'a> {
    Text(&'a mut String),
    Flag(&'a mut bool),
}

/// One question, bound to the field it fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    field: String,
    title: String,
    description: Option<String>,
    kind: ValueKind,
    slot: Slot,
}

impl Prompt {
    pub(crate) fn new(spec: &FieldSpec, kind: ValueKind) -> Self {
        Self {
            field: spec.name.clone(),
            title: spec.title.clone(),
            description: spec.description.clone(),
            kind,
            slot: Slot::empty(kind),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn style(&self) -> PromptStyle {
        self.kind.style()
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> SlotMut<'_> {
        match &mut self.slot {
            Slot::Text(value) => SlotMut::Text(value),
            Slot::Flag(value) => SlotMut::Flag(value),
        }
    }

    pub(crate) fn into_answer(self) -> (String, ValueKind, Slot) {
        (self.field, self.kind, self.slot)
    }
}

/// Prompts handed to an engine as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptGroup {
    title: Option<String>,
    prompts: Vec<Prompt>,
}

impl PromptGroup {
    pub(crate) fn new(prompts: Vec<Prompt>) -> Self {
        Self {
            title: None,
            prompts,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn prompts_mut(&mut self) -> &mut [Prompt] {
        &mut self.prompts
    }

    pub fn into_prompts(self) -> Vec<Prompt> {
        self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}
