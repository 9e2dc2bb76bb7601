//! Template types and error definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(u64),

    #[error("Unknown template variable: {0}")]
    UnknownVariable(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A canned response with `{variable}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePattern {
    /// Unique identifier within the owning collection
    pub id: u64,

    /// Response text with `{variable}` placeholders
    pub text: String,

    /// Declared variable names, informational only
    #[serde(default)]
    pub variables: Vec<String>,
}

impl TemplatePattern {
    /// Create a pattern with explicitly declared variables
    pub fn new<I, S>(id: u64, text: impl Into<String>, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            text: text.into(),
            variables: variables.into_iter().map(Into::into).collect(),
        }
    }
}

/// Client fields available for substitution.
///
/// Every field is optional; a missing one renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
}

impl ClientRecord {
    /// Client record with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Look up the field a template variable maps to.
    ///
    /// Returns `None` for variables that have no client field (such as
    /// `ticketId`) and for fields the record leaves empty.
    pub fn value_for(&self, variable: &str) -> Option<&str> {
        let field = match variable.parse::<TemplateVariable>().ok()? {
            TemplateVariable::ClientName => &self.name,
            TemplateVariable::ClientEmail => &self.email,
            TemplateVariable::ClientPhone => &self.phone,
            TemplateVariable::ClientRegDate => &self.registration_date,
            TemplateVariable::ClientStatus => &self.status,
            TemplateVariable::TicketId | TemplateVariable::PaymentDate => return None,
        };
        field.as_deref()
    }
}

/// Variables the console offers for insertion, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariable {
    ClientName,
    ClientEmail,
    ClientPhone,
    ClientRegDate,
    ClientStatus,
    TicketId,
    PaymentDate,
}

impl TemplateVariable {
    pub const ALL: [TemplateVariable; 7] = [
        TemplateVariable::ClientName,
        TemplateVariable::ClientEmail,
        TemplateVariable::ClientPhone,
        TemplateVariable::ClientRegDate,
        TemplateVariable::ClientStatus,
        TemplateVariable::TicketId,
        TemplateVariable::PaymentDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateVariable::ClientName => "clientName",
            TemplateVariable::ClientEmail => "clientEmail",
            TemplateVariable::ClientPhone => "clientPhone",
            TemplateVariable::ClientRegDate => "clientRegDate",
            TemplateVariable::ClientStatus => "clientStatus",
            TemplateVariable::TicketId => "ticketId",
            TemplateVariable::PaymentDate => "paymentDate",
        }
    }

    /// Placeholder token as it appears in template text, e.g. `{clientName}`
    pub fn token(&self) -> String {
        format!("{{{}}}", self.as_str())
    }
}

impl fmt::Display for TemplateVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateVariable {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateVariable::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| TemplateError::UnknownVariable(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_parse_roundtrip() {
        for variable in TemplateVariable::ALL {
            assert_eq!(variable.as_str().parse::<TemplateVariable>().unwrap(), variable);
        }
        assert!(matches!(
            "clientAge".parse::<TemplateVariable>(),
            Err(TemplateError::UnknownVariable(name)) if name == "clientAge"
        ));
    }

    #[test]
    fn test_variable_token() {
        assert_eq!(TemplateVariable::ClientRegDate.token(), "{clientRegDate}");
    }

    #[test]
    fn test_value_for_mapping() {
        let client = ClientRecord {
            name: Some("Ivan Petrov".to_string()),
            email: Some("ivan@example.com".to_string()),
            phone: Some("+7 (999) 123-45-67".to_string()),
            status: Some("Active client".to_string()),
            registration_date: Some("01.01.2024".to_string()),
        };

        assert_eq!(client.value_for("clientName"), Some("Ivan Petrov"));
        assert_eq!(client.value_for("clientEmail"), Some("ivan@example.com"));
        assert_eq!(client.value_for("clientPhone"), Some("+7 (999) 123-45-67"));
        assert_eq!(client.value_for("clientRegDate"), Some("01.01.2024"));
        assert_eq!(client.value_for("clientStatus"), Some("Active client"));
        assert_eq!(client.value_for("ticketId"), None);
        assert_eq!(client.value_for("name"), None);
    }

    #[test]
    fn test_client_record_camel_case() {
        let client: ClientRecord =
            serde_json::from_str(r#"{"name":"Maria","registrationDate":"15.03.2024"}"#).unwrap();
        assert_eq!(client.registration_date.as_deref(), Some("15.03.2024"));
        assert!(client.email.is_none());
    }
}
