//! Ordered template collection with CRUD operations

use crate::metrics::TemplateMetrics;

use super::substitution::{extract_placeholders, render};
use super::types::{ClientRecord, TemplatePattern};

/// In-memory, insertion-ordered template collection keyed by id
#[derive(Debug, Clone, Default)]
pub struct TemplateBook {
    templates: Vec<TemplatePattern>,
}

impl TemplateBook {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from existing patterns, keeping their order
    pub fn from_patterns(templates: Vec<TemplatePattern>) -> Self {
        Self { templates }
    }

    /// Collection seeded with the built-in canned responses
    pub fn with_defaults() -> Self {
        Self::from_patterns(default_templates())
    }

    /// Add a template and return its id.
    ///
    /// The id is one past the largest existing id, or 1 for an empty
    /// collection. Ids saturate at `u64::MAX`, so once a template holds that
    /// id later additions share it. Variables are detected from the
    /// placeholders in `text`.
    pub fn add(&mut self, text: impl Into<String>) -> u64 {
        let text = text.into();
        let id = self
            .templates
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        let variables = extract_placeholders(&text);

        tracing::debug!(template_id = id, variables = ?variables, "Template added");

        self.templates.push(TemplatePattern {
            id,
            text,
            variables,
        });
        TemplateMetrics::record_added();
        id
    }

    /// Replace the text of a template. Unknown ids are ignored.
    ///
    /// Returns whether a template was changed.
    pub fn edit(&mut self, id: u64, text: impl Into<String>) -> bool {
        let Some(template) = self.templates.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(template_id = id, "Edit of unknown template ignored");
            return false;
        };

        template.text = text.into();
        template.variables = extract_placeholders(&template.text);
        TemplateMetrics::record_edited();
        true
    }

    /// Remove a template. Unknown ids are ignored.
    ///
    /// Returns whether a template was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| t.id != id);
        let removed = self.templates.len() != before;

        if removed {
            TemplateMetrics::record_deleted();
        } else {
            tracing::debug!(template_id = id, "Delete of unknown template ignored");
        }
        removed
    }

    /// Get a template by id
    pub fn get(&self, id: u64) -> Option<&TemplatePattern> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// All templates in collection order
    pub fn list(&self) -> &[TemplatePattern] {
        &self.templates
    }

    /// Ids in collection order
    pub fn ids(&self) -> Vec<u64> {
        self.templates.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Every template rendered for `client`, in collection order
    pub fn render_all(&self, client: &ClientRecord) -> Vec<TemplatePattern> {
        self.templates
            .iter()
            .map(|t| TemplatePattern {
                id: t.id,
                text: render(t, client),
                variables: t.variables.clone(),
            })
            .collect()
    }
}

/// Stable, case-insensitive substring filter over pattern text.
///
/// An empty query keeps every pattern.
pub fn filter_patterns(patterns: &[TemplatePattern], query: &str) -> Vec<TemplatePattern> {
    let needle = query.to_lowercase();
    patterns
        .iter()
        .filter(|t| needle.is_empty() || t.text.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Built-in canned responses
pub fn default_templates() -> Vec<TemplatePattern> {
    vec![
        TemplatePattern::new(1, "Hello, {clientName}! How can I help you?", ["clientName"]),
        TemplatePattern::new(
            2,
            "Thank you for contacting us, {clientName}! Have a nice day!",
            ["clientName"],
        ),
        TemplatePattern::new(
            3,
            "I have sent the information to your email: {clientEmail}",
            ["clientEmail"],
        ),
        TemplatePattern::new(
            4,
            "To confirm your identity, please tell me the last 4 digits of the phone number {clientPhone}",
            ["clientPhone"],
        ),
        TemplatePattern::new(
            5,
            "I see you have been with us since {clientRegDate}. Thank you for your trust!",
            ["clientRegDate"],
        ),
        TemplatePattern::new(
            6,
            "Could you tell me which browser and version you are using?",
            Vec::<String>::new(),
        ),
        TemplatePattern::new(
            7,
            "Please try clearing the browser cache and reloading the page",
            Vec::<String>::new(),
        ),
        TemplatePattern::new(
            8,
            "Your request has been registered under number #{ticketId}",
            ["ticketId"],
        ),
        TemplatePattern::new(
            9,
            "I checked with the technical team. The problem will be fixed within an hour.",
            Vec::<String>::new(),
        ),
        TemplatePattern::new(
            10,
            "Let's check your account settings. I will send the instructions to {clientEmail} now",
            ["clientEmail"],
        ),
        TemplatePattern::new(
            11,
            "Unfortunately the service is temporarily unavailable. We are working on a fix.",
            Vec::<String>::new(),
        ),
        TemplatePattern::new(
            12,
            "I need to bring in a specialist to resolve your question. Please wait a few minutes.",
            Vec::<String>::new(),
        ),
        TemplatePattern::new(
            13,
            "Please send a screenshot of the error",
            Vec::<String>::new(),
        ),
        TemplatePattern::new(
            14,
            "I checked the status of your payment from {paymentDate}. The funds will arrive within 24 hours.",
            ["paymentDate"],
        ),
        TemplatePattern::new(
            15,
            "To restore access I sent a confirmation code to {clientPhone}",
            ["clientPhone"],
        ),
    ]
}
