//! The batch assignment pass.
//!
//! # Algorithm
//!
//! 1. Build the skill index; rebuild workload state from the existing
//!    assignments the pass will not re-decide.
//! 2. Assign implementation primaries, earliest start first.
//! 3. Assign offer primaries the same way. Implementations have first
//!    claim on workers under the shared total-projects ceiling.
//! 4. Assign implementation specialists (welding, painting, gluing, in
//!    that order per project).
//! 5. Assign offer specialists the same way.
//! 6. Return the plan. The pass always completes; an operation nobody
//!    can take is recorded as skipped, never raised as an error.
//!
//! # Complexity
//! O(workers * projects * categories * window-days).

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::models::{
    AssignmentPlan, OperationCategory, OperationDecision, Project, ProjectKind, Role, SkipReason,
    WorkloadLimits, Worker,
};
use crate::selector::{CandidateSelector, Requirement};
use crate::skills::SkillIndex;
use crate::workload::WorkloadTracker;

/// Runs one synchronous assignment pass over a project snapshot.
///
/// The pass mutates only the worker/date fields of the operations it is
/// given and returns a plan describing every decision. Repeated runs
/// against unchanged input produce identical plans: all working state is
/// rebuilt from the supplied records each time.
///
/// Concurrent passes over the same project collection are not safe; the
/// caller must serialize invocations (single-writer discipline).
///
/// # Example
///
/// ```
/// use crew_assign::models::{
///     Capability, Operation, OperationCategory, Project, Role, WorkloadLimits, Worker,
/// };
/// use crew_assign::scheduler::AssignmentScheduler;
///
/// let roles = vec![Role::new("impl").with_grant(Capability::Implementation)];
/// let workers = vec![Worker::new("W1").with_role("impl")];
/// let mut projects = vec![Project::implementation("P1").with_operation(
///     Operation::new(OperationCategory::Primary).with_window(
///         "2025-02-01".parse().unwrap(),
///         "2025-02-10".parse().unwrap(),
///     ),
/// )];
///
/// let plan = AssignmentScheduler::new().assign(
///     &workers,
///     &roles,
///     &mut projects,
///     &WorkloadLimits::default(),
/// );
/// assert_eq!(plan.assigned_count(), 1);
/// assert_eq!(
///     projects[0].primary().unwrap().worker_id.as_deref(),
///     Some("W1")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentScheduler;

impl AssignmentScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Computes a complete assignment plan.
    ///
    /// Projects not `InProgress` are ignored. In-progress projects
    /// without a valid primary window are skipped outright: none of
    /// their operations are touched, and their existing assignments
    /// still count toward workload.
    pub fn assign(
        &self,
        workers: &[Worker],
        roles: &[Role],
        projects: &mut [Project],
        limits: &WorkloadLimits,
    ) -> AssignmentPlan {
        let skills = SkillIndex::build(workers, roles);
        let mut tracker = WorkloadTracker::initialize(workers);

        let eligible: Vec<usize> = projects
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_in_progress())
            .map(|(i, _)| i)
            .collect();

        // Everything the pass is about to re-decide is cleared before
        // workload is counted; otherwise a second run would see its own
        // output as prior load and decide differently.
        for &i in &eligible {
            clear_redecidable(&mut projects[i]);
        }
        for &i in &eligible {
            tracker.record_project(&projects[i]);
        }

        let implementations = phase_order(projects, &eligible, ProjectKind::Implementation);
        let offers = phase_order(projects, &eligible, ProjectKind::Offer);

        debug!(
            implementations = implementations.len(),
            offers = offers.len(),
            workers = workers.len(),
            "assignment pass started"
        );

        let selector = CandidateSelector::new(&skills, limits);
        let mut plan = AssignmentPlan::new();

        self.assign_primaries(&implementations, projects, &selector, &mut tracker, &mut plan);
        self.assign_primaries(&offers, projects, &selector, &mut tracker, &mut plan);
        self.assign_specialists(&implementations, projects, &selector, &mut tracker, &mut plan);
        self.assign_specialists(&offers, projects, &selector, &mut tracker, &mut plan);

        debug!(
            assigned = plan.assigned_count(),
            skipped = plan.skipped_count(),
            "assignment pass finished"
        );
        plan
    }

    fn assign_primaries(
        &self,
        order: &[usize],
        projects: &mut [Project],
        selector: &CandidateSelector<'_>,
        tracker: &mut WorkloadTracker,
        plan: &mut AssignmentPlan,
    ) {
        for &idx in order {
            let (project_id, kind) = (projects[idx].id.clone(), projects[idx].kind);

            let Some((start, end)) = projects[idx].primary_window() else {
                plan.push(OperationDecision::skipped(
                    project_id,
                    kind,
                    OperationCategory::Primary,
                    SkipReason::MissingDates,
                ));
                continue;
            };

            let requirement = Requirement::primary(kind, Some(start), Some(end));
            match selector.select(&requirement, tracker) {
                Some(worker_id) => {
                    tracker.reserve(&worker_id, true, kind, start, end);
                    if let Some(op) = projects[idx].primary_mut() {
                        op.worker_id = Some(worker_id.clone());
                    }
                    plan.push(OperationDecision::assigned(
                        project_id,
                        kind,
                        OperationCategory::Primary,
                        worker_id,
                        start,
                        end,
                    ));
                }
                None => {
                    plan.push(OperationDecision::skipped(
                        project_id,
                        kind,
                        OperationCategory::Primary,
                        SkipReason::NoEligibleWorker,
                    ));
                }
            }
        }
    }

    fn assign_specialists(
        &self,
        order: &[usize],
        projects: &mut [Project],
        selector: &CandidateSelector<'_>,
        tracker: &mut WorkloadTracker,
        plan: &mut AssignmentPlan,
    ) {
        for &idx in order {
            // Projects without a primary window were skipped outright in
            // the primary phase; their operations stay untouched.
            let Some((primary_start, primary_end)) = projects[idx].primary_window() else {
                continue;
            };
            let (project_id, kind) = (projects[idx].id.clone(), projects[idx].kind);

            for category in OperationCategory::SPECIALISTS {
                let Some(op) = projects[idx].operation_mut(category) else {
                    continue;
                };

                if !op.required {
                    op.clear_assignment();
                    plan.push(OperationDecision::skipped(
                        project_id.clone(),
                        kind,
                        category,
                        SkipReason::NotRequired,
                    ));
                    continue;
                }

                let (start, end) =
                    specialist_window(primary_start, primary_end, op.effective_min_days());
                let requirement = Requirement::specialist(category, kind, Some(start), Some(end));

                match selector.select(&requirement, tracker) {
                    Some(worker_id) => {
                        let op = match projects[idx].operation_mut(category) {
                            Some(op) => op,
                            None => continue,
                        };
                        op.worker_id = Some(worker_id.clone());
                        op.start = Some(start);
                        op.end = Some(end);
                        tracker.reserve(&worker_id, false, kind, start, end);
                        plan.push(OperationDecision::assigned(
                            project_id.clone(),
                            kind,
                            category,
                            worker_id,
                            start,
                            end,
                        ));
                    }
                    None => {
                        if let Some(op) = projects[idx].operation_mut(category) {
                            op.clear_assignment();
                        }
                        plan.push(OperationDecision::skipped(
                            project_id.clone(),
                            kind,
                            category,
                            SkipReason::NoEligibleWorker,
                        ));
                    }
                }
            }
        }
    }
}

/// Clears the assignments the pass is going to re-decide.
///
/// The primary keeps its dates (they define the project window and are
/// caller-owned); specialists lose worker and dates. Projects without a
/// valid primary window keep everything.
fn clear_redecidable(project: &mut Project) {
    if project.primary_window().is_none() {
        return;
    }
    if let Some(primary) = project.primary_mut() {
        primary.worker_id = None;
    }
    for category in OperationCategory::SPECIALISTS {
        if let Some(op) = project.operation_mut(category) {
            op.clear_assignment();
        }
    }
}

/// Eligible projects of one kind, ordered by primary start ascending.
///
/// Projects with no primary start sort last; the sort is stable, so
/// input order breaks ties.
fn phase_order(projects: &[Project], eligible: &[usize], kind: ProjectKind) -> Vec<usize> {
    let mut order: Vec<usize> = eligible
        .iter()
        .copied()
        .filter(|&i| projects[i].kind == kind)
        .collect();
    order.sort_by_key(|&i| {
        let start = projects[i].primary().and_then(|op| op.start);
        (start.is_none(), start)
    });
    order
}

/// The window a specialist operation gets: the primary start plus the
/// minimum duration, clipped so it never runs past the primary end.
fn specialist_window(
    primary_start: NaiveDate,
    primary_end: NaiveDate,
    min_days: u32,
) -> (NaiveDate, NaiveDate) {
    let end = primary_start
        .checked_add_days(Days::new(u64::from(min_days.saturating_sub(1))))
        .map_or(primary_end, |d| d.min(primary_end));
    (primary_start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Capability, Operation, Outcome};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn standard_roles() -> Vec<Role> {
        vec![
            Role::new("impl").with_grant(Capability::Implementation),
            Role::new("offers").with_grant(Capability::Offer),
            Role::new("welders").with_grant(Capability::Welding),
            Role::new("painters").with_grant(Capability::Painting),
            Role::new("gluers").with_grant(Capability::Gluing),
        ]
    }

    fn project_with_window(
        id: &str,
        kind: ProjectKind,
        start: &str,
        end: &str,
    ) -> Project {
        Project::new(id, kind).with_operation(
            Operation::new(OperationCategory::Primary).with_window(date(start), date(end)),
        )
    }

    /// Implementation with only the primary required (specialists off).
    fn primary_only_project(id: &str, kind: ProjectKind, start: &str, end: &str) -> Project {
        let mut p = project_with_window(id, kind, start, end);
        for category in OperationCategory::SPECIALISTS {
            p = p.with_operation(Operation::new(category).with_required(false));
        }
        p
    }

    #[test]
    fn test_scenario_limit_exclusion() {
        // One implementer, max one implementation: the earlier-starting
        // project wins, the other stays unassigned.
        let roles = standard_roles();
        let workers = vec![Worker::new("alice").with_role("impl")];
        let limits = WorkloadLimits::new(1, 2, 2);
        let mut projects = vec![
            primary_only_project("ImplB", ProjectKind::Implementation, "2025-02-05", "2025-02-15"),
            primary_only_project("ImplA", ProjectKind::Implementation, "2025-02-01", "2025-02-10"),
        ];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        let a = plan.decision_for("ImplA", OperationCategory::Primary).unwrap();
        assert_eq!(a.outcome.worker(), Some("alice"));

        let b = plan.decision_for("ImplB", OperationCategory::Primary).unwrap();
        assert_eq!(
            b.outcome,
            Outcome::Skipped {
                reason: SkipReason::NoEligibleWorker
            }
        );
        // The records mirror the plan.
        assert_eq!(
            projects[1].primary().unwrap().worker_id.as_deref(),
            Some("alice")
        );
        assert_eq!(projects[0].primary().unwrap().worker_id, None);
    }

    #[test]
    fn test_scenario_tie_break_by_iteration_order() {
        // Two equally idle welders: the first in ascending id order wins.
        let roles = standard_roles();
        let workers = vec![
            Worker::new("carol").with_role("welders"),
            Worker::new("bob").with_role("welders"),
        ];
        let limits = WorkloadLimits::default();
        let mut projects = vec![Project::implementation("P1")
            .with_operation(
                Operation::new(OperationCategory::Primary)
                    .with_window(date("2025-03-01"), date("2025-03-10")),
            )
            .with_operation(Operation::new(OperationCategory::Welding).with_min_duration(3))
            .with_operation(Operation::new(OperationCategory::Painting).with_required(false))
            .with_operation(Operation::new(OperationCategory::Gluing).with_required(false))];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        let welding = plan.decision_for("P1", OperationCategory::Welding).unwrap();
        assert_eq!(welding.outcome.worker(), Some("bob"));
    }

    #[test]
    fn test_scenario_overload_penalty_prefers_lighter_worker() {
        // Dave already has two tasks on 2025-04-05. An equally skilled
        // idle colleague takes the new operation crossing that day.
        let roles = standard_roles();
        let workers = vec![
            Worker::new("dave").with_role("welders"),
            Worker::new("erin").with_role("welders"),
        ];
        let limits = WorkloadLimits::default();

        // Two completed-window welding jobs pin Dave's load; their
        // projects lack primary windows, so the pass leaves them alone.
        let busy = |id: &str| {
            Project::implementation(id).with_operation(
                Operation::new(OperationCategory::Welding)
                    .with_worker("dave")
                    .with_window(date("2025-04-05"), date("2025-04-05")),
            )
        };
        let mut projects = vec![
            busy("Busy1"),
            busy("Busy2"),
            Project::implementation("New")
                .with_operation(
                    Operation::new(OperationCategory::Primary)
                        .with_window(date("2025-04-04"), date("2025-04-08")),
                )
                .with_operation(Operation::new(OperationCategory::Welding).with_min_duration(2))
                .with_operation(Operation::new(OperationCategory::Painting).with_required(false))
                .with_operation(Operation::new(OperationCategory::Gluing).with_required(false)),
        ];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        let welding = plan.decision_for("New", OperationCategory::Welding).unwrap();
        assert_eq!(welding.outcome.worker(), Some("erin"));
    }

    #[test]
    fn test_scenario_non_required_operation_cleared() {
        // A stale painting assignment on a non-required operation is
        // wiped even though a capable painter exists.
        let roles = standard_roles();
        let workers = vec![
            Worker::new("frank").with_role("impl"),
            Worker::new("grace").with_role("painters"),
        ];
        let limits = WorkloadLimits::default();
        let mut projects = vec![Project::implementation("P1")
            .with_operation(
                Operation::new(OperationCategory::Primary)
                    .with_window(date("2025-06-01"), date("2025-06-10")),
            )
            .with_operation(
                Operation::new(OperationCategory::Painting)
                    .with_required(false)
                    .with_worker("grace")
                    .with_window(date("2025-06-02"), date("2025-06-03")),
            )
            .with_operation(Operation::new(OperationCategory::Welding).with_required(false))
            .with_operation(Operation::new(OperationCategory::Gluing).with_required(false))];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        let painting = projects[0].operation(OperationCategory::Painting).unwrap();
        assert_eq!(painting.worker_id, None);
        assert_eq!(painting.start, None);
        assert_eq!(painting.end, None);

        let decision = plan.decision_for("P1", OperationCategory::Painting).unwrap();
        assert_eq!(
            decision.outcome,
            Outcome::Skipped {
                reason: SkipReason::NotRequired
            }
        );
    }

    #[test]
    fn test_implementations_claim_workers_before_offers() {
        // One worker capable of both kinds, total cap 1. The offer
        // starts earlier, but implementations are processed first.
        let roles = standard_roles();
        let workers = vec![Worker::new("hank").with_role("impl").with_role("offers")];
        let limits = WorkloadLimits::new(1, 1, 1);
        let mut projects = vec![
            primary_only_project("Offer1", ProjectKind::Offer, "2025-01-01", "2025-01-05"),
            primary_only_project("Impl1", ProjectKind::Implementation, "2025-03-01", "2025-03-05"),
        ];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        assert_eq!(
            plan.decision_for("Impl1", OperationCategory::Primary)
                .unwrap()
                .outcome
                .worker(),
            Some("hank")
        );
        assert_eq!(
            plan.decision_for("Offer1", OperationCategory::Primary)
                .unwrap()
                .outcome,
            Outcome::Skipped {
                reason: SkipReason::NoEligibleWorker
            }
        );
    }

    #[test]
    fn test_missing_primary_dates_skips_project_untouched() {
        let roles = standard_roles();
        let workers = vec![Worker::new("ivy").with_role("impl").with_role("welders")];
        let limits = WorkloadLimits::default();

        // No primary window, but a stale welding assignment that must
        // survive the pass untouched.
        let mut projects = vec![Project::implementation("P1").with_operation(
            Operation::new(OperationCategory::Welding)
                .with_worker("ivy")
                .with_window(date("2025-05-01"), date("2025-05-02")),
        )];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        let primary = plan.decision_for("P1", OperationCategory::Primary).unwrap();
        assert_eq!(
            primary.outcome,
            Outcome::Skipped {
                reason: SkipReason::MissingDates
            }
        );
        // No specialist decisions for a skipped project.
        assert!(plan.decision_for("P1", OperationCategory::Welding).is_none());
        // The stale assignment is still there.
        let welding = projects[0].operation(OperationCategory::Welding).unwrap();
        assert_eq!(welding.worker_id.as_deref(), Some("ivy"));
    }

    #[test]
    fn test_completed_projects_ignored() {
        let roles = standard_roles();
        let workers = vec![Worker::new("W1").with_role("impl")];
        let limits = WorkloadLimits::default();
        let mut projects = vec![primary_only_project(
            "Done",
            ProjectKind::Implementation,
            "2025-02-01",
            "2025-02-10",
        )
        .with_status(crate::models::ProjectStatus::Completed)];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);
        assert!(plan.is_empty());
        assert_eq!(projects[0].primary().unwrap().worker_id, None);
    }

    #[test]
    fn test_specialist_window_derivation() {
        // min 3 days from the primary start.
        assert_eq!(
            specialist_window(date("2025-03-01"), date("2025-03-10"), 3),
            (date("2025-03-01"), date("2025-03-03"))
        );
        // Clipped to the primary end.
        assert_eq!(
            specialist_window(date("2025-03-01"), date("2025-03-02"), 10),
            (date("2025-03-01"), date("2025-03-02"))
        );
        // Zero clamps to one day.
        assert_eq!(
            specialist_window(date("2025-03-01"), date("2025-03-10"), 0),
            (date("2025-03-01"), date("2025-03-01"))
        );
    }

    #[test]
    fn test_specialist_window_containment_property() {
        let roles = standard_roles();
        let workers = vec![
            Worker::new("W1").with_role("impl"),
            Worker::new("W2")
                .with_role("welders")
                .with_role("painters")
                .with_role("gluers"),
        ];
        let limits = WorkloadLimits::default();
        let mut projects = vec![Project::implementation("P1")
            .with_operation(
                Operation::new(OperationCategory::Primary)
                    .with_window(date("2025-03-03"), date("2025-03-06")),
            )
            .with_operation(Operation::new(OperationCategory::Welding).with_min_duration(2))
            .with_operation(Operation::new(OperationCategory::Painting).with_min_duration(9))
            .with_operation(Operation::new(OperationCategory::Gluing))];

        AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        let (p_start, p_end) = projects[0].primary_window().unwrap();
        for category in OperationCategory::SPECIALISTS {
            let op = projects[0].operation(category).unwrap();
            assert!(op.is_assigned(), "{category:?} should be staffed");
            let (start, end) = op.window().unwrap();
            assert!(p_start <= start);
            assert!(end <= p_end);
        }
    }

    #[test]
    fn test_skill_and_limit_conformance() {
        // A mixed roster and several projects; afterwards every
        // assignment respects skills and every worker respects limits.
        let roles = standard_roles();
        let workers = vec![
            Worker::new("W1").with_role("impl").with_role("welders"),
            Worker::new("W2").with_role("impl"),
            Worker::new("W3").with_role("offers").with_role("painters"),
        ];
        let limits = WorkloadLimits::new(1, 2, 2);
        let mut projects = vec![
            Project::implementation("I1")
                .with_operation(
                    Operation::new(OperationCategory::Primary)
                        .with_window(date("2025-02-01"), date("2025-02-05")),
                )
                .with_operation(Operation::new(OperationCategory::Gluing).with_required(false)),
            Project::implementation("I2").with_operation(
                Operation::new(OperationCategory::Primary)
                    .with_window(date("2025-02-02"), date("2025-02-06")),
            ),
            primary_only_project("O1", ProjectKind::Offer, "2025-02-01", "2025-02-03"),
            primary_only_project("O2", ProjectKind::Offer, "2025-02-02", "2025-02-04"),
        ];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        let skills = SkillIndex::build(&workers, &roles);
        for decision in &plan.decisions {
            if let Outcome::Assigned { worker_id, .. } = &decision.outcome {
                let requirement = match decision.category {
                    OperationCategory::Primary => {
                        Requirement::primary(decision.project_kind, None, None)
                    }
                    other => Requirement::specialist(other, decision.project_kind, None, None),
                };
                assert!(
                    skills.can(worker_id, requirement.capability()),
                    "{worker_id} lacks capability for {:?}",
                    decision.category
                );
            }
        }

        // Recount from the mutated records and check the caps.
        let mut tracker = WorkloadTracker::initialize(&workers);
        tracker.record_existing(&projects);
        for (_, state) in tracker.states() {
            assert!(state.implementations <= limits.max_implementations);
            assert!(state.offers <= limits.max_offers);
            assert!(state.total_projects <= limits.max_total_projects);
            assert_eq!(state.implementations + state.offers, state.total_projects);
        }
    }

    #[test]
    fn test_pass_is_idempotent() {
        let roles = standard_roles();
        let workers = vec![
            Worker::new("W1")
                .with_role("impl")
                .with_role("welders")
                .with_role("gluers"),
            Worker::new("W2").with_role("impl").with_role("painters"),
            Worker::new("W3").with_role("offers"),
        ];
        let limits = WorkloadLimits::default();
        let mut projects = vec![
            Project::implementation("I1")
                .with_operation(
                    Operation::new(OperationCategory::Primary)
                        .with_window(date("2025-02-01"), date("2025-02-10")),
                )
                .with_operation(Operation::new(OperationCategory::Welding).with_min_duration(2))
                .with_operation(Operation::new(OperationCategory::Painting).with_required(false)),
            primary_only_project("O1", ProjectKind::Offer, "2025-02-03", "2025-02-07"),
            Project::implementation("NoDates"),
        ];

        let scheduler = AssignmentScheduler::new();
        let first_plan = scheduler.assign(&workers, &roles, &mut projects, &limits);
        let after_first = projects.clone();

        let second_plan = scheduler.assign(&workers, &roles, &mut projects, &limits);

        assert_eq!(first_plan, second_plan);
        assert_eq!(after_first, projects);
    }

    #[test]
    fn test_empty_inputs() {
        let plan = AssignmentScheduler::new().assign(
            &[],
            &[],
            &mut [],
            &WorkloadLimits::default(),
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_primary_phase_spreads_load_across_workers() {
        // Two implementers, two overlapping projects: each gets one,
        // because the first assignment raises the first worker's load.
        let roles = standard_roles();
        let workers = vec![
            Worker::new("W1").with_role("impl"),
            Worker::new("W2").with_role("impl"),
        ];
        let limits = WorkloadLimits::new(2, 2, 4);
        let mut projects = vec![
            primary_only_project("I1", ProjectKind::Implementation, "2025-02-01", "2025-02-10"),
            primary_only_project("I2", ProjectKind::Implementation, "2025-02-01", "2025-02-10"),
        ];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        let first = plan.decision_for("I1", OperationCategory::Primary).unwrap();
        let second = plan.decision_for("I2", OperationCategory::Primary).unwrap();
        assert_eq!(first.outcome.worker(), Some("W1"));
        assert_eq!(second.outcome.worker(), Some("W2"));
    }

    #[test]
    fn test_required_specialist_without_candidates_left_cleared() {
        let roles = standard_roles();
        let workers = vec![Worker::new("W1").with_role("impl")];
        let limits = WorkloadLimits::default();
        // Welding required, nobody can weld; a stale assignment must not
        // survive either.
        let mut projects = vec![Project::implementation("P1")
            .with_operation(
                Operation::new(OperationCategory::Primary)
                    .with_window(date("2025-02-01"), date("2025-02-05")),
            )
            .with_operation(
                Operation::new(OperationCategory::Welding)
                    .with_worker("W1")
                    .with_window(date("2025-02-01"), date("2025-02-02")),
            )
            .with_operation(Operation::new(OperationCategory::Painting).with_required(false))
            .with_operation(Operation::new(OperationCategory::Gluing).with_required(false))];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        let decision = plan.decision_for("P1", OperationCategory::Welding).unwrap();
        assert_eq!(
            decision.outcome,
            Outcome::Skipped {
                reason: SkipReason::NoEligibleWorker
            }
        );
        assert!(!projects[0].operation(OperationCategory::Welding).unwrap().is_assigned());
        // The pass as a whole still completed and reported everything.
        assert_eq!(plan.len(), 4);
    }

    #[test]
    fn test_projects_ordered_by_primary_start() {
        // Later-starting project listed first in the input; the earlier
        // one must still be decided first and claim the capped worker.
        let roles = standard_roles();
        let workers = vec![Worker::new("W1").with_role("offers")];
        let limits = WorkloadLimits::new(1, 1, 1);
        let mut projects = vec![
            primary_only_project("Late", ProjectKind::Offer, "2025-04-10", "2025-04-20"),
            primary_only_project("Early", ProjectKind::Offer, "2025-04-01", "2025-04-05"),
        ];

        let plan =
            AssignmentScheduler::new().assign(&workers, &roles, &mut projects, &limits);

        assert_eq!(
            plan.decision_for("Early", OperationCategory::Primary)
                .unwrap()
                .outcome
                .worker(),
            Some("W1")
        );
        assert!(!plan
            .decision_for("Late", OperationCategory::Primary)
            .unwrap()
            .outcome
            .is_assigned());
    }
}
