use serde::{Deserialize, Serialize};

/// A fixed rotation entry. Templates are compiled in; a Poll is produced
/// from one of these by stamping a concrete date onto it.
#[derive(Debug, Clone)]
pub struct PollTemplate {
    pub id: &'static str,
    pub question: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
    pub category: Option<&'static str>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    /// `"{templateId}-{date}"`, globally unique per day.
    pub id: String,
    /// ISO 8601 calendar date, no time component.
    pub date: String,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
