//! Messages: named, localized text templates.

use crate::MessageReference;

/// Template text for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// Language tag, e.g. `en` or `de-CH`.
    pub language: String,
    pub value: String,
}

impl Text {
    pub fn new(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            value: value.into(),
        }
    }
}

/// Message declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub template: Vec<Text>,
    pub is_final: bool,
    pub is_override: bool,
    pub deprecated: bool,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add the template text for a language.
    pub fn text(mut self, language: impl Into<String>, value: impl Into<String>) -> Self {
        self.template.push(Text::new(language, value));
        self
    }

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// Message declarations and references of one owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    pub declarations: Vec<Message>,
    pub references: Vec<MessageReference>,
}

impl Messages {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.references.is_empty()
    }

    /// Get a declaration by name.
    pub fn declaration(&self, name: &str) -> Option<&Message> {
        self.declarations.iter().find(|m| m.name == name)
    }

    /// Whether a declaration or a reference uses the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.declaration(name).is_some() || self.references.iter().any(|r| r.name == name)
    }
}
