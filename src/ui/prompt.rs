// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive prompts.
//!
//! Flows ask questions through [`Prompter`]; [`DialoguerPrompter`] is the
//! terminal implementation. Every prompt that supports it treats Esc/q as an
//! explicit cancel.

use crate::error::{GwkError, Result, ValidationError};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

/// Input check run on every submitted answer.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), ValidationError>;

/// Asks the user one question at a time.
pub trait Prompter {
    /// Pick one item. Returns its index.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Pick any number of items. Returns their indices.
    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;

    /// Free text. An empty answer yields the default, or an empty string.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Free text that must pass `validate`.
    fn input_validated(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String>;

    /// Yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts rendered with dialoguer.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()?
            .ok_or(GwkError::Cancelled)
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact_opt()?
            .ok_or(GwkError::Cancelled)
    }

    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);

        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        Ok(input.interact_text()?.trim().to_string())
    }

    fn input_validated(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|value: &String| validate(value.trim()).map_err(|e| e.to_string()));

        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        Ok(input.interact_text()?.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?
            .ok_or(GwkError::Cancelled)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    //! Prompter answering from a fixed script, for flow tests.

    use super::{Prompter, Validator};
    use crate::error::{GwkError, Result};
    use std::collections::VecDeque;

    #[derive(Debug, Clone)]
    pub enum Answer {
        Select(usize),
        Multi(Vec<usize>),
        Text(&'static str),
        Confirm(bool),
        /// Press enter on whatever the prompt preselected.
        Default,
        Cancel,
    }

    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        pub prompts: Vec<String>,
        pub offered: Vec<Vec<String>>,
        /// Preselected index of each select prompt, in order.
        pub select_defaults: Vec<usize>,
        /// Default of each confirm prompt, in order.
        pub confirm_defaults: Vec<bool>,
        /// Default of each text prompt, in order.
        pub input_defaults: Vec<Option<String>>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
                ..Self::default()
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        fn next(&mut self, prompt: &str) -> Result<Answer> {
            self.prompts.push(prompt.to_string());
            match self.answers.pop_front() {
                Some(Answer::Cancel) => Err(GwkError::Cancelled),
                Some(answer) => Ok(answer),
                None => Err(GwkError::Ui(format!("unscripted prompt: {}", prompt))),
            }
        }
    }

    fn mismatch(prompt: &str, answer: &Answer) -> GwkError {
        GwkError::Ui(format!("answer {:?} does not fit prompt {:?}", answer, prompt))
    }

    impl Prompter for ScriptedPrompter {
        fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
            self.offered.push(items.to_vec());
            self.select_defaults.push(default);
            match self.next(prompt)? {
                Answer::Select(i) if i < items.len() => Ok(i),
                Answer::Default => Ok(default),
                other => Err(mismatch(prompt, &other)),
            }
        }

        fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
            self.offered.push(items.to_vec());
            match self.next(prompt)? {
                Answer::Multi(v) if v.iter().all(|i| *i < items.len()) => Ok(v),
                other => Err(mismatch(prompt, &other)),
            }
        }

        fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
            self.input_defaults.push(default.map(str::to_string));
            match self.next(prompt)? {
                Answer::Text("") | Answer::Default => Ok(default.unwrap_or_default().to_string()),
                Answer::Text(text) => Ok(text.trim().to_string()),
                other => Err(mismatch(prompt, &other)),
            }
        }

        fn input_validated(
            &mut self,
            prompt: &str,
            default: Option<&str>,
            validate: Validator<'_>,
        ) -> Result<String> {
            let value = self.input(prompt, default)?;
            validate(value.as_str())?;
            Ok(value)
        }

        fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
            self.confirm_defaults.push(default);
            match self.next(prompt)? {
                Answer::Confirm(yes) => Ok(yes),
                Answer::Default => Ok(default),
                other => Err(mismatch(prompt, &other)),
            }
        }
    }
}
