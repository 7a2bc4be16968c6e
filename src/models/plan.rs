//! Assignment plan (pass output) model.
//!
//! A plan records one decision per operation the pass touched, including
//! why an operation was left unassigned. The batch never aborts: a
//! skipped operation is a normal outcome, not an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{OperationCategory, ProjectKind};

/// Why an operation was left without an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The project's primary window is missing or invalid; the project
    /// was excluded from the pass entirely.
    MissingDates,
    /// The specialist operation is not required; it was cleared.
    NotRequired,
    /// Skills and/or limits excluded every candidate.
    NoEligibleWorker,
}

/// The outcome of one operation decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// A worker was assigned for the given window.
    Assigned {
        /// The selected worker.
        worker_id: String,
        /// Window start.
        start: NaiveDate,
        /// Window end (inclusive).
        end: NaiveDate,
    },
    /// The operation was left unassigned.
    Skipped {
        /// Why no assignment was made.
        reason: SkipReason,
    },
}

impl Outcome {
    /// Whether a worker was assigned.
    pub fn is_assigned(&self) -> bool {
        matches!(self, Outcome::Assigned { .. })
    }

    /// The assigned worker, if any.
    pub fn worker(&self) -> Option<&str> {
        match self {
            Outcome::Assigned { worker_id, .. } => Some(worker_id),
            Outcome::Skipped { .. } => None,
        }
    }
}

/// One operation decision within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDecision {
    /// Owning project.
    pub project_id: String,
    /// Owning project's kind.
    pub project_kind: ProjectKind,
    /// Which operation was decided.
    pub category: OperationCategory,
    /// What happened.
    pub outcome: Outcome,
}

impl OperationDecision {
    /// Creates an assignment decision.
    pub fn assigned(
        project_id: impl Into<String>,
        project_kind: ProjectKind,
        category: OperationCategory,
        worker_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            project_kind,
            category,
            outcome: Outcome::Assigned {
                worker_id: worker_id.into(),
                start,
                end,
            },
        }
    }

    /// Creates a skip decision.
    pub fn skipped(
        project_id: impl Into<String>,
        project_kind: ProjectKind,
        category: OperationCategory,
        reason: SkipReason,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            project_kind,
            category,
            outcome: Outcome::Skipped { reason },
        }
    }
}

/// The complete output of one assignment pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPlan {
    /// Decisions in the order they were made (phase order, then project
    /// order within each phase).
    pub decisions: Vec<OperationDecision>,
}

impl AssignmentPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a decision.
    pub fn push(&mut self, decision: OperationDecision) {
        self.decisions.push(decision);
    }

    /// Finds the decision for a given project operation.
    pub fn decision_for(
        &self,
        project_id: &str,
        category: OperationCategory,
    ) -> Option<&OperationDecision> {
        self.decisions
            .iter()
            .find(|d| d.project_id == project_id && d.category == category)
    }

    /// All decisions that assigned a given worker.
    pub fn decisions_for_worker(&self, worker_id: &str) -> Vec<&OperationDecision> {
        self.decisions
            .iter()
            .filter(|d| d.outcome.worker() == Some(worker_id))
            .collect()
    }

    /// Number of assignments made.
    pub fn assigned_count(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| d.outcome.is_assigned())
            .count()
    }

    /// Number of operations left unassigned.
    pub fn skipped_count(&self) -> usize {
        self.decisions.len() - self.assigned_count()
    }

    /// Whether every decided operation that wanted a worker got one.
    ///
    /// `NotRequired` and `MissingDates` skips are intentional, so they do
    /// not count against completeness.
    pub fn is_complete(&self) -> bool {
        !self.decisions.iter().any(|d| {
            matches!(
                d.outcome,
                Outcome::Skipped {
                    reason: SkipReason::NoEligibleWorker
                }
            )
        })
    }

    /// Number of decisions.
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    /// Whether the plan holds no decisions.
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}
