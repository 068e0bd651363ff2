//! Interactive prompts
//!
//! Questions show `label (default)` and read one answer. An empty answer
//! takes the default; a question without a default is asked again until it
//! gets a non-empty answer.

use anyhow::{Context, Result};
use console::Term;
use dialoguer::Input;

use crate::error::{hints, ScaffoldError};

/// One question put to the operator
#[derive(Debug, Clone)]
pub struct Question {
    /// Stable field name, used in errors
    pub field: &'static str,
    /// Text shown to the operator
    pub label: &'static str,
    /// Value used for an empty answer; `None` makes the answer required
    pub default: Option<String>,
}

impl Question {
    pub fn new(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        let default = default.into();
        self.default = if default.is_empty() { None } else { Some(default) };
        self
    }

    /// Resolve a raw answer against the default
    fn resolve(&self, answer: &str) -> Option<String> {
        let answer = answer.trim();
        if answer.is_empty() {
            self.default.clone()
        } else {
            Some(answer.to_string())
        }
    }
}

/// Source of answers for [`Question`]s
pub trait Prompter {
    fn ask(&mut self, question: &Question) -> Result<String>;
}

/// Prompter asking on the terminal through `dialoguer`
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        if !Term::stderr().is_term() {
            return Err(
                ScaffoldError::missing_input(question.field, hints::flag_required(question.field))
                    .into(),
            );
        }

        let mut input = Input::<String>::new()
            .with_prompt(question.label.trim_end_matches(':'))
            .allow_empty(false)
            .validate_with(|answer: &String| -> std::result::Result<(), &'static str> {
                if answer.trim().is_empty() {
                    Err("A value is required")
                } else {
                    Ok(())
                }
            });
        if let Some(default) = &question.default {
            input = input.default(default.clone());
        }

        let answer = input
            .interact_text()
            .with_context(|| format!("Failed to read answer for '{}'", question.label))?;

        question.resolve(&answer).ok_or_else(|| {
            ScaffoldError::missing_input(question.field, hints::flag_required(question.field))
                .into()
        })
    }
}

/// Prompter answering from a fixed script, recording what was asked
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<&'static str>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        self.asked.push(question.field);
        let answer = self.answers.pop_front().unwrap_or_default();
        question
            .resolve(&answer)
            .ok_or_else(|| ScaffoldError::missing_input(question.field, "scripted").into())
    }
}
