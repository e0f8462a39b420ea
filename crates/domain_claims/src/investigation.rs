//! Investigation report
//!
//! The adjuster's findings, attached during the Investigation stage.
//! Like triage, the content is supplied from outside the core; the
//! domain stores it alongside the invoice it pertains to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Damage severity as assessed by the adjuster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    TotalLoss,
}

/// Status of one investigation checklist task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecklistStatus {
    Pending,
    Complete,
    NotRequired,
}

/// One task on the adjuster's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Task description
    pub task: String,
    /// Current status
    pub status: ChecklistStatus,
}

impl ChecklistItem {
    /// Creates a pending task
    pub fn pending(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            status: ChecklistStatus::Pending,
        }
    }

    /// Marks the task complete
    pub fn complete(&mut self) {
        self.status = ChecklistStatus::Complete;
    }
}

/// The adjuster's investigation findings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestigationReport {
    /// Damage severity
    pub severity: Severity,
    /// Liability determination narrative
    pub liability_summary: String,
    /// Investigation checklist
    pub checklist: Vec<ChecklistItem>,
    /// Adjuster's summary of the claim
    pub adjuster_summary: String,
    /// Anomalies surfaced by invoice analysis
    pub anomalies: Vec<String>,
    /// When the report was filed
    pub reported_at: DateTime<Utc>,
}

impl InvestigationReport {
    /// Creates a report with an empty checklist
    pub fn new(
        severity: Severity,
        liability_summary: impl Into<String>,
        adjuster_summary: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            liability_summary: liability_summary.into(),
            checklist: Vec::new(),
            adjuster_summary: adjuster_summary.into(),
            anomalies: Vec::new(),
            reported_at: Utc::now(),
        }
    }

    /// Replaces the checklist
    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }

    /// Replaces the anomaly list
    pub fn with_anomalies(mut self, anomalies: Vec<String>) -> Self {
        self.anomalies = anomalies;
        self
    }

    /// Number of checklist tasks still pending
    pub fn open_tasks(&self) -> usize {
        self.checklist
            .iter()
            .filter(|item| item.status == ChecklistStatus::Pending)
            .count()
    }
}
