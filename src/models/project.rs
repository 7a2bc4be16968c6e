//! Project and operation models.
//!
//! A project is either an implementation or an offer, carries a status,
//! and owns a fixed set of operations: one primary operation anchoring
//! the project's date window, plus three specialist operations that may
//! or may not be required. Operation assignment fields (worker and
//! dates) are the only attributes the engine ever mutates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectKind {
    /// A production rollout.
    Implementation,
    /// A quotation being prepared.
    Offer,
}

/// Project lifecycle status. Only `InProgress` projects are eligible
/// inputs to the assignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Actively worked on.
    InProgress,
    /// Finished; kept for history, never reassigned.
    Completed,
}

/// Operation classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationCategory {
    /// The main stage anchoring the project's overall date window.
    Primary,
    /// Welding specialist stage.
    Welding,
    /// Painting specialist stage.
    Painting,
    /// Gluing specialist stage.
    Gluing,
}

impl OperationCategory {
    /// Specialist categories in processing order. The assignment pass
    /// visits them in exactly this order within each project.
    pub const SPECIALISTS: [OperationCategory; 3] = [
        OperationCategory::Welding,
        OperationCategory::Painting,
        OperationCategory::Gluing,
    ];

    /// Whether this is the primary operation.
    #[inline]
    pub fn is_primary(self) -> bool {
        matches!(self, OperationCategory::Primary)
    }
}

/// A single stage of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Stage classification.
    pub category: OperationCategory,
    /// Whether this stage must be staffed. Non-required specialist
    /// operations are cleared by the pass rather than assigned.
    pub required: bool,
    /// Minimum stage length in calendar days (clamped to >= 1 before use).
    pub min_duration_days: u32,
    /// Assigned worker, if any.
    pub worker_id: Option<String>,
    /// Stage start date, set together with an assignment.
    pub start: Option<NaiveDate>,
    /// Stage end date (inclusive), set together with an assignment.
    pub end: Option<NaiveDate>,
}

impl Operation {
    /// Creates an unassigned, required operation with a one-day minimum.
    pub fn new(category: OperationCategory) -> Self {
        Self {
            category,
            required: true,
            min_duration_days: 1,
            worker_id: None,
            start: None,
            end: None,
        }
    }

    /// Sets the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the minimum duration in days.
    pub fn with_min_duration(mut self, days: u32) -> Self {
        self.min_duration_days = days;
        self
    }

    /// Sets the assigned worker.
    pub fn with_worker(mut self, worker_id: impl Into<String>) -> Self {
        self.worker_id = Some(worker_id.into());
        self
    }

    /// Sets the date window.
    pub fn with_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Minimum duration with the >= 1 clamp applied.
    #[inline]
    pub fn effective_min_days(&self) -> u32 {
        self.min_duration_days.max(1)
    }

    /// The date window, if both dates are set and ordered.
    pub fn window(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => Some((start, end)),
            _ => None,
        }
    }

    /// Whether a worker is assigned with a complete window.
    pub fn is_assigned(&self) -> bool {
        self.worker_id.is_some() && self.start.is_some() && self.end.is_some()
    }

    /// Removes the worker and dates, returning the operation to the
    /// unassigned state.
    pub fn clear_assignment(&mut self) {
        self.worker_id = None;
        self.start = None;
        self.end = None;
    }
}

/// A project with its fixed operation set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Implementation or offer.
    pub kind: ProjectKind,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// The operations composing this project. Seeded with the primary
    /// operation and all three specialists on construction.
    pub operations: Vec<Operation>,
}

impl Project {
    /// Creates an in-progress project with the full default operation set.
    pub fn new(id: impl Into<String>, kind: ProjectKind) -> Self {
        let mut operations = Vec::with_capacity(4);
        operations.push(Operation::new(OperationCategory::Primary));
        for category in OperationCategory::SPECIALISTS {
            operations.push(Operation::new(category));
        }
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            status: ProjectStatus::InProgress,
            operations,
        }
    }

    /// Creates an in-progress implementation project.
    pub fn implementation(id: impl Into<String>) -> Self {
        Self::new(id, ProjectKind::Implementation)
    }

    /// Creates an in-progress offer project.
    pub fn offer(id: impl Into<String>) -> Self {
        Self::new(id, ProjectKind::Offer)
    }

    /// Sets the project name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Replaces the operation of the same category.
    ///
    /// The fixed operation set is seeded by the constructor, so builders
    /// substitute rather than append.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        if let Some(slot) = self
            .operations
            .iter_mut()
            .find(|op| op.category == operation.category)
        {
            *slot = operation;
        } else {
            self.operations.push(operation);
        }
        self
    }

    /// Looks up an operation by category.
    pub fn operation(&self, category: OperationCategory) -> Option<&Operation> {
        self.operations.iter().find(|op| op.category == category)
    }

    /// Looks up an operation by category, mutably.
    pub fn operation_mut(&mut self, category: OperationCategory) -> Option<&mut Operation> {
        self.operations.iter_mut().find(|op| op.category == category)
    }

    /// The primary operation.
    pub fn primary(&self) -> Option<&Operation> {
        self.operation(OperationCategory::Primary)
    }

    /// The primary operation, mutably.
    pub fn primary_mut(&mut self) -> Option<&mut Operation> {
        self.operation_mut(OperationCategory::Primary)
    }

    /// The primary operation's date window, if valid.
    pub fn primary_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.primary().and_then(Operation::window)
    }

    /// Whether the project is eligible for assignment.
    #[inline]
    pub fn is_in_progress(&self) -> bool {
        self.status == ProjectStatus::InProgress
    }
}
