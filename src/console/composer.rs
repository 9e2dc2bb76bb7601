//! Editable draft with a caret.

use crate::template::{insert_at_cursor, Caret, TemplateVariable};

/// A text draft and the caret of the field editing it.
///
/// `caret` is `None` while the field is not focused. Every insertion
/// leaves the field focused with a collapsed caret right after the
/// inserted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    text: String,
    caret: Option<Caret>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> Option<Caret> {
        self.caret
    }

    /// Replace the draft, leaving the caret at its end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = Some(Caret::collapsed(self.text.chars().count()));
    }

    /// Move the caret or selection
    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = Some(caret);
    }

    /// The field lost focus
    pub fn blur(&mut self) {
        self.caret = None;
    }

    /// Insert `snippet` at the caret, or append it when unfocused.
    ///
    /// Returns the new caret position.
    pub fn insert(&mut self, snippet: &str) -> usize {
        let insertion = insert_at_cursor(&self.text, self.caret, snippet);
        self.text = insertion.text;
        self.caret = Some(Caret::collapsed(insertion.caret));
        insertion.caret
    }

    /// Insert a `{variable}` placeholder token
    pub fn insert_variable(&mut self, variable: TemplateVariable) -> usize {
        self.insert(&variable.token())
    }

    /// Whether the draft has no visible content
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Take the draft text, leaving the composer empty and unfocused
    pub fn take(&mut self) -> String {
        self.caret = None;
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_variable_at_caret() {
        let mut composer = Composer::new();
        composer.set_text("Hello, !");
        composer.set_caret(Caret::collapsed(7));

        let caret = composer.insert_variable(TemplateVariable::ClientName);
        assert_eq!(composer.text(), "Hello, {clientName}!");
        assert_eq!(caret, 19);
        assert_eq!(composer.caret(), Some(Caret::collapsed(19)));
    }

    #[test]
    fn test_insert_when_blurred_appends_and_focuses() {
        let mut composer = Composer::new();
        composer.set_text("Your email: ");
        composer.set_caret(Caret::collapsed(0));
        composer.blur();

        composer.insert_variable(TemplateVariable::ClientEmail);
        assert_eq!(composer.text(), "Your email: {clientEmail}");
        assert_eq!(composer.caret(), Some(Caret::collapsed(25)));
    }

    #[test]
    fn test_consecutive_inserts_follow_caret() {
        let mut composer = Composer::new();
        composer.insert("a");
        composer.insert("b");
        composer.set_caret(Caret::collapsed(1));
        composer.insert("X");
        assert_eq!(composer.text(), "aXb");
        assert_eq!(composer.caret(), Some(Caret::collapsed(2)));
    }

    #[test]
    fn test_take_resets() {
        let mut composer = Composer::new();
        composer.set_text("  ");
        assert!(composer.is_blank());

        composer.set_text("done");
        assert_eq!(composer.take(), "done");
        assert_eq!(composer.text(), "");
        assert!(composer.caret().is_none());
    }
}
