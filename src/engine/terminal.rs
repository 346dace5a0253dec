use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input};

use super::PromptEngine;
use crate::config::{FormOptions, ThemeChoice};
use crate::error::EngineError;
use crate::plan::{PromptGroup, SlotMut};
use crate::ui::view;

/// Asks each prompt on the terminal with `dialoguer`.
#[derive(Debug, Clone, Default)]
pub struct TerminalEngine {
    options: FormOptions,
}

impl TerminalEngine {
    pub fn new(options: FormOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    fn theme(&self) -> Box<dyn Theme> {
        match self.options.theme {
            ThemeChoice::Colorful => Box::new(ColorfulTheme::default()),
            ThemeChoice::Plain => Box::new(SimpleTheme),
        }
    }
}

impl PromptEngine for TerminalEngine {
    fn run(&mut self, group: &mut PromptGroup) -> Result<(), EngineError> {
        let theme = self.theme();

        if let Some(title) = self.options.title.as_deref().or(group.title()) {
            view::print_form_header(title, group.len());
        }

        for prompt in group.prompts_mut() {
            if self.options.show_descriptions {
                if let Some(description) = prompt.description() {
                    view::print_description(description);
                }
            }

            let title = prompt.title().to_string();
            match prompt.slot_mut() {
                SlotMut::Text(slot) => {
                    *slot = Input::<String>::with_theme(theme.as_ref())
                        .with_prompt(title)
                        .allow_empty(self.options.allow_empty_text)
                        .interact_text()?;
                }
                SlotMut::Flag(slot) => {
                    let answer = Confirm::with_theme(theme.as_ref())
                        .with_prompt(title)
                        .default(self.options.confirm_default)
                        .interact_opt()?;
                    let Some(answer) = answer else {
                        view::print_cancelled();
                        return Err(EngineError::Cancelled);
                    };
                    *slot = answer;
                }
            }
        }

        view::print_done(group.len());
        Ok(())
    }
}
