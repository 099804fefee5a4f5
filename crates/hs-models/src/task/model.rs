//! Task model

use hs_core::error::HsError;
use hs_core::result::{HsResult, OptionExt};
use hs_core::traits::Id;
use serde::Serialize;

use crate::employee::{Employee, EmployeeKind, EmployeeRoster};

/// Planned duration that staff employees bill as a full day
const HALF_DAY: f64 = 0.5;

/// A unit of work inside a project
///
/// The responsible employee is referenced by id only. Assignment history is
/// append-only and `finished` never reverts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    title: String,
    description: String,
    planned_days: f64,
    responsible: Option<Id>,
    delay_days: f64,
    finished: bool,
    locked_cost: f64,
    history: Vec<Id>,
}

impl Task {
    pub fn new(title: impl Into<String>, description: impl Into<String>, planned_days: f64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            planned_days,
            responsible: None,
            delay_days: 0.0,
            finished: false,
            locked_cost: 0.0,
            history: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn planned_days(&self) -> f64 {
        self.planned_days
    }

    pub fn responsible(&self) -> Option<Id> {
        self.responsible
    }

    pub fn delay_days(&self) -> f64 {
        self.delay_days
    }

    pub fn is_delayed(&self) -> bool {
        self.delay_days > 0.0
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Cost fixed when the task finished; 0 before that
    pub fn locked_cost(&self) -> f64 {
        self.locked_cost
    }

    /// Every employee ever assigned, oldest first
    pub fn history(&self) -> &[Id] {
        &self.history
    }

    /// The employee most recently assigned, even after the task finished
    pub fn last_responsible(&self) -> Option<Id> {
        self.history.last().copied()
    }

    /// Open and nobody working on it
    pub fn is_unassigned(&self) -> bool {
        self.responsible.is_none() && !self.finished
    }

    /// Days billed when the given employee completes this task
    pub fn billable_days(&self, employee: &Employee) -> f64 {
        match employee.kind() {
            EmployeeKind::Staff { .. } if self.planned_days == HALF_DAY => 1.0,
            _ => self.planned_days,
        }
    }

    /// Make `employee_id` responsible, releasing the previous responsible
    ///
    /// Returns the employee that was released, if any. The swap itself is
    /// unconditional; callers decide whether the task may be reassigned.
    pub fn assign<R>(&mut self, employee_id: Id, roster: &mut R) -> HsResult<Option<Id>>
    where
        R: EmployeeRoster + ?Sized,
    {
        roster
            .employee(employee_id)
            .or_not_found("Employee", "id", employee_id)?;

        let previous = self.responsible.take();
        if let Some(previous_id) = previous {
            if let Some(employee) = roster.employee_mut(previous_id) {
                employee.mark_available();
            }
        }
        if let Some(employee) = roster.employee_mut(employee_id) {
            employee.mark_unavailable();
        }

        self.responsible = Some(employee_id);
        self.history.push(employee_id);
        Ok(previous)
    }

    /// Accrue a delay; the responsible employee gets one delay event
    pub fn record_delay<R>(&mut self, days: f64, roster: &mut R) -> HsResult<()>
    where
        R: EmployeeRoster + ?Sized,
    {
        if !days.is_finite() || days <= 0.0 {
            return Err(HsError::invalid("days", "must be greater than 0"));
        }

        self.delay_days += days;
        if let Some(responsible) = self.responsible {
            if let Some(employee) = roster.employee_mut(responsible) {
                employee.register_delay();
            }
        }
        Ok(())
    }

    /// Close the task, lock its cost and free the responsible employee
    pub fn finish<R>(&mut self, roster: &mut R) -> HsResult<f64>
    where
        R: EmployeeRoster + ?Sized,
    {
        if self.finished {
            return Err(HsError::conflict(format!(
                "task '{}' is already finished",
                self.title
            )));
        }
        let responsible = self.responsible.ok_or_else(|| {
            HsError::conflict(format!("task '{}' has no responsible employee", self.title))
        })?;
        let employee = roster
            .employee_mut(responsible)
            .or_not_found("Employee", "id", responsible)?;

        let cost = employee.daily_cost() * self.billable_days(employee);
        employee.mark_available();

        self.finished = true;
        self.locked_cost = cost;
        self.responsible = None;
        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crew() -> Vec<Employee> {
        vec![
            Employee::contracted(1000, "Ana", 20.0),
            Employee::staff(1001, "Luis", 100.0, "Senior"),
        ]
    }

    #[test]
    fn test_new_task_is_open_and_unassigned() {
        let task = Task::new("Paint", "Walls", 2.0);
        assert!(task.is_unassigned());
        assert!(!task.is_finished());
        assert_eq!(task.locked_cost(), 0.0);
        assert!(task.history().is_empty());
    }

    #[test]
    fn test_assign_swaps_availability() {
        let mut roster = crew();
        let mut task = Task::new("Paint", "Walls", 2.0);

        assert_eq!(task.assign(1000, &mut roster).unwrap(), None);
        assert!(!roster.employee(1000).unwrap().is_available());

        assert_eq!(task.assign(1001, &mut roster).unwrap(), Some(1000));
        assert!(roster.employee(1000).unwrap().is_available());
        assert!(!roster.employee(1001).unwrap().is_available());
        assert_eq!(task.history(), &[1000, 1001]);
        assert_eq!(task.responsible(), Some(1001));
    }

    #[test]
    fn test_assign_unknown_employee_changes_nothing() {
        let mut roster = crew();
        let mut task = Task::new("Paint", "Walls", 2.0);
        task.assign(1000, &mut roster).unwrap();

        let err = task.assign(4242, &mut roster).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(task.responsible(), Some(1000));
        assert!(!roster.employee(1000).unwrap().is_available());
    }

    #[test]
    fn test_record_delay_counts_events_not_days() {
        let mut roster = crew();
        let mut task = Task::new("Paint", "Walls", 2.0);
        task.assign(1000, &mut roster).unwrap();

        task.record_delay(3.0, &mut roster).unwrap();
        task.record_delay(0.5, &mut roster).unwrap();

        assert_eq!(task.delay_days(), 3.5);
        assert!(task.is_delayed());
        assert_eq!(roster.employee(1000).unwrap().delay_count(), 2);
    }

    #[test]
    fn test_record_delay_rejects_non_positive() {
        let mut roster = crew();
        let mut task = Task::new("Paint", "Walls", 2.0);
        assert!(task.record_delay(0.0, &mut roster).unwrap_err().is_invalid_argument());
        assert!(task.record_delay(-2.0, &mut roster).unwrap_err().is_invalid_argument());
        assert_eq!(task.delay_days(), 0.0);
    }

    #[test]
    fn test_finish_locks_cost_and_frees_employee() {
        let mut roster = crew();
        let mut task = Task::new("Paint", "Walls", 2.0);
        task.assign(1000, &mut roster).unwrap();

        let cost = task.finish(&mut roster).unwrap();
        assert_eq!(cost, 320.0);
        assert_eq!(task.locked_cost(), 320.0);
        assert!(task.is_finished());
        assert_eq!(task.responsible(), None);
        assert_eq!(task.last_responsible(), Some(1000));
        assert!(roster.employee(1000).unwrap().is_available());
    }

    #[test]
    fn test_half_day_rounds_up_for_staff_only() {
        let mut roster = crew();

        let mut staff_task = Task::new("Fix tap", "Kitchen", 0.5);
        staff_task.assign(1001, &mut roster).unwrap();
        assert_eq!(staff_task.finish(&mut roster).unwrap(), 100.0);

        let mut contracted_task = Task::new("Fix door", "Hall", 0.5);
        contracted_task.assign(1000, &mut roster).unwrap();
        assert_eq!(contracted_task.finish(&mut roster).unwrap(), 80.0);
    }

    #[test]
    fn test_finish_guards() {
        let mut roster = crew();
        let mut task = Task::new("Paint", "Walls", 1.0);
        assert!(task.finish(&mut roster).unwrap_err().is_state_conflict());

        task.assign(1000, &mut roster).unwrap();
        task.finish(&mut roster).unwrap();
        assert!(task.finish(&mut roster).unwrap_err().is_state_conflict());
    }
}
