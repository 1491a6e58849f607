//! Shared types for the triage pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Raw message ─────────────────────────────────────────────────────

/// Untyped inbound service request, as read from the source batch.
///
/// Kept as raw JSON so that records diverted to the unprocessable
/// partition pass through unchanged, unknown keys included. Accessors
/// coerce defensively: a missing or wrong-typed field reads as empty
/// text (or `None` for the due date), never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMessage(pub Value);

impl RawMessage {
    fn text_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The `description` field, trimmed.
    pub fn description(&self) -> &str {
        self.text_field("description").unwrap_or("").trim()
    }

    /// The `phone` field, unsanitized.
    pub fn phone(&self) -> &str {
        self.text_field("phone").unwrap_or("")
    }

    /// The `dueDate` field, if present and textual (null reads as absent).
    pub fn due_date(&self) -> Option<&str> {
        self.text_field("dueDate")
    }
}

// ── Status ──────────────────────────────────────────────────────────

/// Scheduling state of a record: `Scheduled` when the message carried a
/// parseable due date, `New` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Scheduled,
    New,
}

impl Status {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::New => "new",
        }
    }
}

// ── Priority ────────────────────────────────────────────────────────

/// Urgency level of an incident report, inferred from the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Normal,
}

impl Priority {
    /// Infer priority from free text.
    ///
    /// "very urgent" also contains "urgent", so the broader phrase must
    /// be checked first.
    pub fn from_description(description: &str) -> Self {
        let lowered = description.to_lowercase();
        if lowered.contains("very urgent") {
            Self::Critical
        } else if lowered.contains("urgent") {
            Self::High
        } else {
            Self::Normal
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Normal => "normal",
        }
    }
}

// ── Output records ──────────────────────────────────────────────────

/// A scheduled or pending facility inspection, derived from a message
/// whose description mentions "inspection".
///
/// `follow_up_recommendations` and `creation_date` are always empty at
/// creation; downstream systems fill them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub description: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub inspection_date: String,
    pub week_of_year: String,
    pub status: Status,
    pub follow_up_recommendations: String,
    pub phone_number: String,
    pub creation_date: String,
}

/// A service request for a non-inspection issue, carrying a priority.
///
/// `service_notes` and `creation_date` are always empty at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub description: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub priority: Priority,
    pub service_visit_date: String,
    pub status: Status,
    pub service_notes: String,
    pub phone_number: String,
    pub creation_date: String,
}

// ── Process outcome ─────────────────────────────────────────────────

/// Result of one processing pass: a partition of the input batch.
///
/// Within each partition, records keep the input order. The three
/// lengths always sum to the input length.
#[derive(Debug, Default)]
pub struct ProcessOutcome {
    pub inspections: Vec<Inspection>,
    pub incident_reports: Vec<IncidentReport>,
    pub unprocessable: Vec<RawMessage>,
}

impl ProcessOutcome {
    /// Total number of records across all three partitions.
    pub fn total(&self) -> usize {
        self.inspections.len() + self.incident_reports.len() + self.unprocessable.len()
    }
}
