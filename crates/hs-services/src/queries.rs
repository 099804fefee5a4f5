//! Read-only views over the engine
//!
//! Unlike mutations, queries about a missing project or employee do not fail:
//! they log a warning and answer with an empty value.

use hs_core::traits::{Id, Identifiable};
use hs_core::types::ProjectStatus;
use hs_models::{Employee, Project, Task};
use serde::Serialize;
use tracing::warn;

use crate::engine::Engine;

/// One line of a project listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub number: Id,
    pub address: String,
    pub client: String,
    pub status: ProjectStatus,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            number: project.number(),
            address: project.address().to_string(),
            client: project.client().name().to_string(),
            status: project.status(),
        }
    }
}

impl Engine {
    fn projects_with_status(&self, status: ProjectStatus) -> Vec<ProjectSummary> {
        self.projects
            .iter()
            .filter(|p| p.status() == status)
            .map(ProjectSummary::from)
            .collect()
    }

    fn project_or_warn(&self, number: Id) -> Option<&Project> {
        let project = self.projects.get(number);
        if project.is_none() {
            warn!(project = number, "Query on unknown project");
        }
        project
    }

    fn employee_or_warn(&self, id: Id) -> Option<&Employee> {
        let employee = self.employees.get(id);
        if employee.is_none() {
            warn!(employee = id, "Query on unknown employee");
        }
        employee
    }

    pub fn finished_projects(&self) -> Vec<ProjectSummary> {
        self.projects_with_status(ProjectStatus::Finalized)
    }

    pub fn pending_projects(&self) -> Vec<ProjectSummary> {
        self.projects_with_status(ProjectStatus::Pending)
    }

    pub fn active_projects(&self) -> Vec<ProjectSummary> {
        self.projects_with_status(ProjectStatus::Active)
    }

    /// Ids of employees not holding any open task, in registration order
    pub fn unassigned_employees(&self) -> Vec<Id> {
        self.employees
            .iter()
            .filter(|e| e.is_available())
            .map(Identifiable::id)
            .collect()
    }

    /// Every employee as `(id, name)`
    pub fn employees(&self) -> Vec<(Id, String)> {
        self.employees
            .iter()
            .map(|e| (e.id(), e.name().to_string()))
            .collect()
    }

    pub fn employee(&self, id: Id) -> Option<&Employee> {
        self.employees.get(id)
    }

    /// 0 for unknown employees
    pub fn employee_delay_count(&self, id: Id) -> u32 {
        self.employee_or_warn(id)
            .map_or(0, Employee::delay_count)
    }

    pub fn employee_has_delays(&self, id: Id) -> bool {
        self.employee_or_warn(id)
            .is_some_and(Employee::has_delays)
    }

    /// Employees currently responsible for an open task of the project
    pub fn employees_assigned_to(&self, number: Id) -> Vec<(Id, String)> {
        let Some(project) = self.project_or_warn(number) else {
            return Vec::new();
        };
        project
            .current_responsibles()
            .into_iter()
            .filter_map(|id| self.employees.get(id))
            .map(|e| (e.id(), e.name().to_string()))
            .collect()
    }

    pub fn project(&self, number: Id) -> Option<&Project> {
        self.projects.get(number)
    }

    /// Open tasks of the project nobody is working on
    pub fn unassigned_tasks(&self, number: Id) -> Vec<Task> {
        self.project_or_warn(number)
            .map(|p| p.unassigned_tasks().cloned().collect())
            .unwrap_or_default()
    }

    /// All tasks of the project in insertion order
    pub fn tasks_of_project(&self, number: Id) -> Vec<Task> {
        self.project_or_warn(number)
            .map(|p| p.tasks().to_vec())
            .unwrap_or_default()
    }

    /// Title and planned days of the longest task across all projects
    ///
    /// Ties keep the task found first.
    pub fn longest_task(&self) -> Option<(String, f64)> {
        let mut longest: Option<&Task> = None;
        for task in self.projects.iter().flat_map(Project::tasks) {
            if longest.map_or(true, |l| task.planned_days() > l.planned_days()) {
                longest = Some(task);
            }
        }
        longest.map(|t| (t.title().to_string(), t.planned_days()))
    }

    /// Human-readable project detail; empty for unknown projects
    pub fn project_detail(&self, number: Id) -> String {
        self.project_or_warn(number)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn is_finalized(&self, number: Id) -> bool {
        self.project_or_warn(number)
            .is_some_and(Project::is_finalized)
    }

    pub fn project_address(&self, number: Id) -> String {
        self.project_or_warn(number)
            .map(|p| p.address().to_string())
            .unwrap_or_default()
    }

    /// Final cost; 0 until the project is finalized
    pub fn project_cost(&self, number: Id) -> f64 {
        self.project_or_warn(number)
            .map_or(0.0, Project::final_cost)
    }
}
