//! Message processor — partitions a raw batch into inspections,
//! incident reports, and unprocessable records.
//!
//! Flow per message:
//! 1. Field coercion (trimmed description, phone, optional due date)
//! 2. Skip paths: empty description / duplicate description → unprocessable
//! 3. Routing: description contains "inspection" → inspection, else incident
//! 4. Normalization: due date → status + date fields, phone cleanup

use std::collections::HashSet;

use chrono::Datelike;
use tracing::{debug, info, warn};

use crate::pipeline::normalize::{parse_due_date, sanitize_phone};
use crate::pipeline::types::{
    IncidentReport, Inspection, Priority, ProcessOutcome, RawMessage, Status,
};

/// Record `type` discriminators, fixed by the output format.
const TYPE_INSPECTION: &str = "inspection";
const TYPE_INCIDENT_REPORT: &str = "incident report";

/// Message processor — the core of the pipeline.
///
/// Stateless between calls: the duplicate-description set is local to
/// each `process` invocation, so one instance may be reused freely.
#[derive(Debug, Default)]
pub struct MessageProcessor;

impl MessageProcessor {
    /// Create a new message processor.
    pub fn new() -> Self {
        Self
    }

    /// Process a batch of raw messages in input order.
    ///
    /// Never fails for an individual message: a malformed record degrades
    /// into empty fields or the unprocessable partition, and the batch
    /// always runs to completion. Each output partition preserves the
    /// input order.
    pub fn process(&self, messages: &[RawMessage]) -> ProcessOutcome {
        info!(total = messages.len(), "Starting processing");

        let mut seen: HashSet<String> = HashSet::new();
        let mut outcome = ProcessOutcome::default();

        for msg in messages {
            let description = msg.description();

            if description.is_empty() {
                warn!(raw = %msg.0, "Skipping message with empty description");
                outcome.unprocessable.push(msg.clone());
                continue;
            }
            if !seen.insert(description.to_string()) {
                info!(description = %description, "Duplicate message detected; skipping");
                outcome.unprocessable.push(msg.clone());
                continue;
            }

            let due_date = parse_due_date(msg.due_date());
            let status = match due_date {
                Some(_) => Status::Scheduled,
                None => Status::New,
            };
            let date_text = due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            let phone_number = sanitize_phone(msg.phone());

            if description.to_lowercase().contains("inspection") {
                let week_of_year = due_date
                    .map(|d| format!("{:02}", d.iso_week().week()))
                    .unwrap_or_default();
                debug!(
                    description = %description,
                    status = status.label(),
                    "Created inspection record"
                );
                outcome.inspections.push(Inspection {
                    description: description.to_string(),
                    record_type: TYPE_INSPECTION.to_string(),
                    inspection_date: date_text,
                    week_of_year,
                    status,
                    follow_up_recommendations: String::new(),
                    phone_number,
                    creation_date: String::new(),
                });
            } else {
                let priority = Priority::from_description(description);
                debug!(
                    description = %description,
                    priority = priority.label(),
                    status = status.label(),
                    "Created incident report record"
                );
                outcome.incident_reports.push(IncidentReport {
                    description: description.to_string(),
                    record_type: TYPE_INCIDENT_REPORT.to_string(),
                    priority,
                    service_visit_date: date_text,
                    status,
                    service_notes: String::new(),
                    phone_number,
                    creation_date: String::new(),
                });
            }
        }

        info!(
            inspections = outcome.inspections.len(),
            incident_reports = outcome.incident_reports.len(),
            unprocessable = outcome.unprocessable.len(),
            "Finished processing"
        );

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn msg(value: serde_json::Value) -> RawMessage {
        RawMessage(value)
    }

    fn reference_batch() -> Vec<RawMessage> {
        vec![
            msg(json!({
                "description": "Please schedule an inspection of the HVAC system for next week.",
                "dueDate": "2024-03-20",
                "phone": "+1-555-0123"
            })),
            msg(json!({
                "description": "AC unit not cooling properly, needs immediate attention",
                "dueDate": null,
                "phone": "555-0124"
            })),
            msg(json!({
                "description": "Very urgent! Fire alarm system malfunction detected",
                "dueDate": "2024-03-25",
                "phone": "555-0125"
            })),
            // Duplicate of the first message, different phone.
            msg(json!({
                "description": "Please schedule an inspection of the HVAC system for next week.",
                "dueDate": "2024-03-20",
                "phone": "555-0126"
            })),
        ]
    }

    #[test]
    fn reference_batch_partitions_as_expected() {
        let outcome = MessageProcessor::new().process(&reference_batch());

        assert_eq!(outcome.inspections.len(), 1);
        assert_eq!(outcome.incident_reports.len(), 2);
        assert_eq!(outcome.unprocessable.len(), 1);

        let inspection = &outcome.inspections[0];
        assert_eq!(inspection.status, Status::Scheduled);
        assert_eq!(inspection.inspection_date, "2024-03-20");
        // 2024-03-20 falls in ISO week 12.
        assert_eq!(inspection.week_of_year, "12");
        assert_eq!(inspection.phone_number, "+1-555-0123");

        let ac = &outcome.incident_reports[0];
        assert_eq!(ac.priority, Priority::Normal);
        assert_eq!(ac.status, Status::New);
        assert_eq!(ac.service_visit_date, "");

        let fire = &outcome.incident_reports[1];
        assert_eq!(fire.priority, Priority::Critical);
        assert_eq!(fire.status, Status::Scheduled);
        assert_eq!(fire.service_visit_date, "2024-03-25");
    }

    #[test]
    fn partition_sizes_sum_to_input_size() {
        let batch = reference_batch();
        let outcome = MessageProcessor::new().process(&batch);
        assert_eq!(outcome.total(), batch.len());
    }

    #[test]
    fn duplicate_lands_in_unprocessable_unchanged() {
        let batch = reference_batch();
        let outcome = MessageProcessor::new().process(&batch);
        // First occurrence wins; the duplicate passes through verbatim.
        assert_eq!(outcome.unprocessable[0], batch[3]);
    }

    #[test]
    fn dedup_ignores_other_fields() {
        let batch = vec![
            msg(json!({"description": "Broken window", "phone": "111", "dueDate": "2024-01-05"})),
            msg(json!({"description": "Broken window", "phone": "222"})),
        ];
        let outcome = MessageProcessor::new().process(&batch);
        assert_eq!(outcome.incident_reports.len(), 1);
        assert_eq!(outcome.incident_reports[0].phone_number, "111");
        assert_eq!(outcome.unprocessable.len(), 1);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let batch = vec![
            msg(json!({"description": "Broken window"})),
            msg(json!({"description": "broken window"})),
        ];
        let outcome = MessageProcessor::new().process(&batch);
        assert_eq!(outcome.incident_reports.len(), 2);
        assert!(outcome.unprocessable.is_empty());
    }

    #[test]
    fn dedup_compares_trimmed_descriptions() {
        let batch = vec![
            msg(json!({"description": "Broken window"})),
            msg(json!({"description": "  Broken window  "})),
        ];
        let outcome = MessageProcessor::new().process(&batch);
        assert_eq!(outcome.incident_reports.len(), 1);
        assert_eq!(outcome.unprocessable.len(), 1);
    }

    #[test]
    fn empty_description_is_unprocessable() {
        let batch = vec![
            msg(json!({"description": "   ", "phone": "555-0100", "dueDate": "2024-03-20"})),
            msg(json!({"phone": "555-0101"})),
            msg(json!({"description": null})),
        ];
        let outcome = MessageProcessor::new().process(&batch);
        assert!(outcome.inspections.is_empty());
        assert!(outcome.incident_reports.is_empty());
        assert_eq!(outcome.unprocessable, batch);
    }

    #[test]
    fn routing_is_case_insensitive() {
        let batch = vec![
            msg(json!({"description": "ANNUAL INSPECTION of elevators"})),
            msg(json!({"description": "Reinspection required after repairs"})),
            msg(json!({"description": "Elevator stuck between floors"})),
        ];
        let outcome = MessageProcessor::new().process(&batch);
        assert_eq!(outcome.inspections.len(), 2);
        assert_eq!(outcome.incident_reports.len(), 1);
    }

    #[test]
    fn unparseable_due_date_degrades_to_new() {
        let batch = vec![msg(json!({
            "description": "Inspection of roof drainage",
            "dueDate": "whenever suits"
        }))];
        let outcome = MessageProcessor::new().process(&batch);
        let inspection = &outcome.inspections[0];
        assert_eq!(inspection.status, Status::New);
        assert_eq!(inspection.inspection_date, "");
        assert_eq!(inspection.week_of_year, "");
    }

    #[test]
    fn week_of_year_is_zero_padded() {
        let batch = vec![msg(json!({
            "description": "Inspection of sprinklers",
            "dueDate": "2024-01-16"
        }))];
        let outcome = MessageProcessor::new().process(&batch);
        assert_eq!(outcome.inspections[0].week_of_year, "03");
    }

    #[test]
    fn phone_null_sentinel_is_dropped() {
        let batch = vec![msg(json!({
            "description": "Garage door jammed",
            "phone": "null"
        }))];
        let outcome = MessageProcessor::new().process(&batch);
        assert_eq!(outcome.incident_reports[0].phone_number, "");
    }

    #[test]
    fn constant_fields_are_empty_at_creation() {
        let outcome = MessageProcessor::new().process(&reference_batch());
        let inspection = &outcome.inspections[0];
        assert_eq!(inspection.record_type, "inspection");
        assert_eq!(inspection.follow_up_recommendations, "");
        assert_eq!(inspection.creation_date, "");
        let report = &outcome.incident_reports[0];
        assert_eq!(report.record_type, "incident report");
        assert_eq!(report.service_notes, "");
        assert_eq!(report.creation_date, "");
    }

    #[test]
    fn dedup_state_resets_between_calls() {
        let processor = MessageProcessor::new();
        let batch = vec![msg(json!({"description": "Leaking pipe"}))];
        let first = processor.process(&batch);
        let second = processor.process(&batch);
        assert_eq!(first.incident_reports.len(), 1);
        assert_eq!(second.incident_reports.len(), 1);
        assert!(second.unprocessable.is_empty());
    }

    #[test]
    fn non_object_message_is_unprocessable() {
        let batch = vec![msg(json!("just a string")), msg(json!(17))];
        let outcome = MessageProcessor::new().process(&batch);
        assert_eq!(outcome.unprocessable, batch);
    }
}
