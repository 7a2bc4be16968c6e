//! Input validation for assignment passes.
//!
//! Checks structural integrity of the roster, roles, and projects before
//! a pass. Detects:
//! - Duplicate IDs
//! - Missing role or worker references
//! - Inverted operation date ranges
//! - Malformed operation sets (duplicate category, missing primary)
//!
//! Validation is advisory: the pass itself tolerates bad records by
//! skipping them, so callers run these checks when ingesting edited
//! data, not on every pass.

use std::collections::HashSet;

use crate::models::{OperationCategory, Project, Role, Worker};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A worker references a role that doesn't exist.
    UnknownRole,
    /// An operation is assigned to a worker not on the roster.
    UnknownWorker,
    /// An operation's start date is after its end date.
    InvalidDateRange,
    /// A project has two operations of the same category.
    DuplicateOperation,
    /// A project has no primary operation.
    MissingPrimary,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for an assignment pass.
///
/// Checks:
/// 1. No duplicate worker IDs
/// 2. No duplicate role IDs
/// 3. No duplicate project IDs
/// 4. All role references on workers point to existing roles
/// 5. All assigned operations reference roster workers
/// 6. No operation has `start > end`
/// 7. No project carries two operations of one category
/// 8. Every project has a primary operation
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    workers: &[Worker],
    roles: &[Role],
    projects: &[Project],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect role IDs
    let mut role_ids = HashSet::new();
    for role in roles {
        if !role_ids.insert(role.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate role ID: {}", role.id),
            ));
        }
    }

    // Collect worker IDs and check their role references
    let mut worker_ids = HashSet::new();
    for worker in workers {
        if !worker_ids.insert(worker.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", worker.id),
            ));
        }
        for role_id in &worker.role_ids {
            if !role_ids.contains(role_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRole,
                    format!("Worker '{}' references unknown role '{role_id}'", worker.id),
                ));
            }
        }
    }

    // Check projects
    let mut project_ids = HashSet::new();
    for project in projects {
        if !project_ids.insert(project.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate project ID: {}", project.id),
            ));
        }

        let mut categories = HashSet::new();
        for op in &project.operations {
            if !categories.insert(op.category) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateOperation,
                    format!(
                        "Project '{}' has more than one {:?} operation",
                        project.id, op.category
                    ),
                ));
            }

            if let (Some(start), Some(end)) = (op.start, op.end) {
                if start > end {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidDateRange,
                        format!(
                            "Project '{}' {:?} operation starts {start} after it ends {end}",
                            project.id, op.category
                        ),
                    ));
                }
            }

            if let Some(worker_id) = &op.worker_id {
                if !worker_ids.contains(worker_id.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownWorker,
                        format!(
                            "Project '{}' {:?} operation is assigned to unknown worker '{worker_id}'",
                            project.id, op.category
                        ),
                    ));
                }
            }
        }

        if !categories.contains(&OperationCategory::Primary) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPrimary,
                format!("Project '{}' has no primary operation", project.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
