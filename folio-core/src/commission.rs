//! Commission requests: turn the submitted form fields into the plain-text
//! message that is emailed to the artist.
//!
//! Field names follow the form's input names (`commission-type`,
//! `reference-links`, ...), so a request deserializes straight from the
//! submitted form data.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Select value that reveals the free-text "other" field.
pub const OTHER_CHOICE: &str = "other";

const NOT_PROVIDED: &str = "Not provided";
const FLEXIBLE: &str = "Flexible";
const NONE_PROVIDED: &str = "None provided";
const NOT_SPECIFIED: &str = "Not specified";
const OTHER_LABEL: &str = "Other";

/// Raw commission form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CommissionRequest {
    /// Client name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Shown as "Not provided" when blank.
    pub discord: Option<String>,
    /// Selected type; `other` defers to `other_type`.
    pub commission_type: String,
    /// Free-text type for the `other` choice.
    pub other_type: Option<String>,
    /// Selected style; `other` defers to `other_style`.
    pub style: String,
    /// Free-text style for the `other` choice.
    pub other_style: Option<String>,
    /// Shown as "Flexible" when blank.
    pub deadline: Option<String>,
    /// Budget as typed by the client.
    pub budget: String,
    /// Short project title, also used in the subject.
    pub project_title: String,
    /// What the client wants made.
    pub project_description: String,
    /// One link per line.
    pub reference_links: Option<String>,
    /// Shown as "None provided" when blank.
    pub special_requirements: Option<String>,
    /// Shown as "Not specified" when blank.
    pub found_through: Option<String>,
}

/// Why a request cannot be formatted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommissionError {
    /// A required form field is blank.
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    /// The contact address has no `@`.
    #[error("`{0}` is not an email address")]
    InvalidEmail(String),
}

/// Formatted request ready to hand to the mail relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionMessage {
    /// Mail subject line.
    pub subject: String,
    /// Plain-text message body.
    pub body: String,
    /// Non-blank reference links in submission order.
    pub references: Vec<String>,
}

impl CommissionRequest {
    /// Check the fields the form marks as required.
    pub fn validate(&self) -> Result<(), CommissionError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("commission-type", &self.commission_type),
            ("style", &self.style),
            ("budget", &self.budget),
            ("project-title", &self.project_title),
            ("project-description", &self.project_description),
        ];
        if let Some((field, _)) =
            required.iter().find(|(_, value)| value.trim().is_empty())
        {
            return Err(CommissionError::MissingField(*field));
        }
        if !self.email.contains('@') {
            return Err(CommissionError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Commission type, resolving the "other" choice to its free text.
    pub fn resolved_type(&self) -> &str {
        resolve_choice(&self.commission_type, self.other_type.as_deref())
    }

    /// Art style, resolving the "other" choice to its free text.
    pub fn resolved_style(&self) -> &str {
        resolve_choice(&self.style, self.other_style.as_deref())
    }

    /// Trimmed, non-blank reference links.
    pub fn references(&self) -> Vec<String> {
        self.reference_links
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|link| !link.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate and render the request message.
    pub fn format(&self) -> Result<CommissionMessage, CommissionError> {
        self.validate()?;

        let title = self.project_title.trim();
        let references = self.references();
        let mut body = format!("=== COMMISSION REQUEST: {title} ===\n\n");

        body.push_str("--- PERSONAL INFORMATION ---\n");
        body.push_str(&format!("Name: {}\n", self.name.trim()));
        body.push_str(&format!("Email: {}\n", self.email.trim()));
        body.push_str(&format!("Discord: {}\n\n", or_default(&self.discord, NOT_PROVIDED)));

        body.push_str("--- COMMISSION DETAILS ---\n");
        body.push_str(&format!("Type: {}\n", self.resolved_type()));
        body.push_str(&format!("Style: {}\n", self.resolved_style()));
        body.push_str(&format!("Deadline: {}\n", or_default(&self.deadline, FLEXIBLE)));
        body.push_str(&format!("Budget: {}\n\n", self.budget.trim()));

        body.push_str("--- PROJECT DESCRIPTION ---\n");
        body.push_str(&format!("Title: {title}\n"));
        body.push_str(&format!("Description: {}\n\n", self.project_description.trim()));
        body.push_str(&format!(
            "Special Requirements: {}\n\n",
            or_default(&self.special_requirements, NONE_PROVIDED)
        ));

        body.push_str("--- REFERENCE IMAGES & LINKS ---\n");
        if references.is_empty() {
            body.push_str("No reference links provided\n");
        } else {
            for (index, link) in references.iter().enumerate() {
                body.push_str(&format!("[{}] {link}\n", index + 1));
            }
            body.push_str(
                "\nPlease see the reference links above. If they're images, you should be able to click/copy them.\n",
            );
        }

        body.push_str("\n--- ADDITIONAL INFORMATION ---\n");
        body.push_str(&format!(
            "Found Through: {}\n",
            or_default(&self.found_through, NOT_SPECIFIED)
        ));

        debug!(references = references.len(), "formatted commission request");
        Ok(CommissionMessage {
            subject: format!("Commission request: {title}"),
            body,
            references,
        })
    }
}

fn resolve_choice<'a>(choice: &'a str, other: Option<&'a str>) -> &'a str {
    if choice.trim() == OTHER_CHOICE {
        other
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(OTHER_LABEL)
    } else {
        choice.trim()
    }
}

fn or_default<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(fallback)
}
