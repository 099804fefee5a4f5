//! The engine facade: every state-changing operation
//!
//! Each operation checks everything it needs before touching state, so a
//! failed call leaves employees and projects exactly as they were.

use chrono::NaiveDate;
use hs_contracts::{
    parse_iso_date, AddTaskContract, Contract, CreateProjectContract, RecordDelayContract,
    RegisterEmployeeContract,
};
use hs_contracts::dates::INVALID_DATE_MESSAGE;
use hs_core::config::{AppConfig, EngineConfig};
use hs_core::error::HsError;
use hs_core::result::{HsResult, OptionExt};
use hs_core::traits::Id;
use hs_models::{
    Client, Employee, NewContractedEmployee, NewProject, NewStaffEmployee, NewTask, Project, Task,
};
use tracing::{debug, info, instrument};

use crate::assignment::{AssignmentPolicy, FirstAvailable, LeastDelayed};
use crate::registry::{EmployeeRegistry, ProjectRegistry};

/// Single-owner engine holding every employee and project
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub(crate) config: EngineConfig,
    pub(crate) employees: EmployeeRegistry,
    pub(crate) projects: ProjectRegistry,
}

fn task_in<'a>(project: &'a mut Project, title: &str) -> HsResult<&'a mut Task> {
    project.task_mut(title).or_not_found("Task", "title", title)
}

fn ensure_open(task: &Task) -> HsResult<()> {
    if task.is_finished() {
        return Err(HsError::conflict(format!(
            "task '{}' is already finished",
            task.title()
        )));
    }
    Ok(())
}

fn ensure_responsible(task: &Task) -> HsResult<Id> {
    task.responsible().ok_or_else(|| {
        HsError::conflict(format!("task '{}' has no responsible employee", task.title()))
    })
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            employees: EmployeeRegistry::new(),
            projects: ProjectRegistry::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.engine.clone())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register a contracted employee paid by the hour
    #[instrument(skip(self))]
    pub fn register_employee(&mut self, name: &str, hourly_rate: f64) -> HsResult<Id> {
        let params = NewContractedEmployee::new(name.trim(), hourly_rate);
        RegisterEmployeeContract::new().validate(&params)?;

        let id = self
            .employees
            .register(|id| Employee::contracted(id, params.name, params.hourly_rate))?;
        info!(employee = id, kind = "contracted", "Employee registered");
        Ok(id)
    }

    /// Register a staff employee paid by the day
    #[instrument(skip(self))]
    pub fn register_staff_employee(
        &mut self,
        name: &str,
        daily_rate: f64,
        category: &str,
    ) -> HsResult<Id> {
        let params = NewStaffEmployee::new(name.trim(), daily_rate, category.trim());
        RegisterEmployeeContract::new().validate(&params)?;

        let id = self.employees.register(|id| {
            Employee::staff(id, params.name, params.daily_rate, params.category)
        })?;
        info!(employee = id, kind = "staff", "Employee registered");
        Ok(id)
    }

    /// Register a project with its initial tasks
    #[instrument(skip(self, params), fields(address = %params.address, tasks = params.titles.len()))]
    pub fn register_project(&mut self, params: NewProject) -> HsResult<Id> {
        CreateProjectContract::new().validate(&params)?;

        let start_date = parse_iso_date(&params.start_date)
            .ok_or_else(|| HsError::invalid("start_date", INVALID_DATE_MESSAGE))?;
        let placeholder = self.config.default_task_description.as_str();

        let number = self.projects.register(|number| {
            let client = Client::new(&params.client[0], &params.client[1], &params.client[2]);
            let mut project = Project::new(number, client, params.address.trim(), start_date);
            for (index, (title, days)) in params.titles.iter().zip(&params.durations).enumerate() {
                let description = params.description_or(index, placeholder);
                project.add_task(Task::new(title.trim(), description, *days))?;
            }
            Ok(project)
        })?;

        info!(project = number, "Project registered");
        Ok(number)
    }

    /// Append a task to an existing project
    #[instrument(skip(self))]
    pub fn add_task_to_project(&mut self, number: Id, params: NewTask) -> HsResult<()> {
        AddTaskContract::new().validate(&params)?;

        let description = params
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(self.config.default_task_description.as_str());
        let task = Task::new(params.title.trim(), description, params.days);

        let project = self.projects.find_mut(number)?;
        project.add_task(task)?;
        info!(project = number, task = %params.title, days = params.days, "Task added");
        Ok(())
    }

    /// Give a task to the first available employee, releasing any current one
    #[instrument(skip(self))]
    pub fn assign_first_available(&mut self, number: Id, title: &str) -> HsResult<Id> {
        self.assign_with(&FirstAvailable, number, title)
    }

    /// Give a task to the available employee with the fewest delays
    #[instrument(skip(self))]
    pub fn assign_least_delayed(&mut self, number: Id, title: &str) -> HsResult<Id> {
        self.assign_with(&LeastDelayed, number, title)
    }

    fn assign_with(
        &mut self,
        policy: &dyn AssignmentPolicy,
        number: Id,
        title: &str,
    ) -> HsResult<Id> {
        let project = self.projects.find_mut(number)?;
        let task = task_in(project, title)?;
        ensure_open(task)?;

        let employee = policy
            .select(self.employees.as_slice())
            .ok_or_else(|| HsError::not_found("Employee", "available", true))?;
        debug!(policy = policy.name(), employee, "Employee selected");

        let previous = task.assign(employee, &mut self.employees)?;
        info!(project = number, task = title, employee, ?previous, "Employee assigned");
        Ok(employee)
    }

    /// Move a task to a specific employee
    #[instrument(skip(self))]
    pub fn reassign_employee(&mut self, number: Id, employee_id: Id, title: &str) -> HsResult<()> {
        let project = self.projects.find_mut(number)?;
        let task = task_in(project, title)?;
        ensure_open(task)?;
        let current = ensure_responsible(task)?;

        let target = self.employees.find(employee_id)?;
        if current == employee_id {
            return Err(HsError::conflict(format!(
                "employee {} is already responsible for '{}'",
                employee_id,
                task.title()
            )));
        }
        if !target.is_available() {
            return Err(HsError::conflict(format!(
                "employee {} is busy with another task",
                employee_id
            )));
        }

        task.assign(employee_id, &mut self.employees)?;
        info!(project = number, task = title, from = current, to = employee_id, "Employee reassigned");
        Ok(())
    }

    /// Move a task to the available employee with the fewest delays
    #[instrument(skip(self))]
    pub fn reassign_least_delayed(&mut self, number: Id, title: &str) -> HsResult<Id> {
        let project = self.projects.find_mut(number)?;
        let task = task_in(project, title)?;
        ensure_open(task)?;
        let current = ensure_responsible(task)?;

        let policy = LeastDelayed;
        let employee = policy
            .select(self.employees.as_slice())
            .ok_or_else(|| HsError::not_found("Employee", "available", true))?;
        debug!(policy = policy.name(), employee, "Employee selected");

        task.assign(employee, &mut self.employees)?;
        info!(project = number, task = title, from = current, to = employee, "Employee reassigned");
        Ok(employee)
    }

    /// Record a delay on an assigned, open task and move the actual end date
    #[instrument(skip(self))]
    pub fn record_delay(&mut self, number: Id, title: &str, days: f64) -> HsResult<()> {
        RecordDelayContract::new().validate(&days)?;

        let project = self.projects.find_mut(number)?;
        let task = task_in(project, title)?;
        ensure_open(task)?;
        let employee = ensure_responsible(task)?;

        task.record_delay(days, &mut self.employees)?;
        project.recompute_dates();
        info!(
            project = number,
            task = title,
            employee,
            days,
            actual_end = %project.actual_end_date(),
            "Delay recorded"
        );
        Ok(())
    }

    /// Finish a task and lock its cost
    ///
    /// With `auto_finalize_on_last_task` enabled the project is finalized as
    /// soon as no open task remains.
    #[instrument(skip(self))]
    pub fn finish_task(&mut self, number: Id, title: &str) -> HsResult<f64> {
        let project = self.projects.find_mut(number)?;
        let task = task_in(project, title)?;
        ensure_open(task)?;
        let employee = ensure_responsible(task)?;
        self.employees.find(employee)?;

        let cost = task.finish(&mut self.employees)?;
        info!(project = number, task = title, employee, cost, "Task finished");

        if self.config.auto_finalize_on_last_task && project.all_tasks_finished() {
            let final_cost = project.finalize(None, &self.employees)?;
            info!(project = number, cost = final_cost, "Project finalized after last task");
        }
        Ok(cost)
    }

    /// Finalize a project with an explicit `YYYY-MM-DD` end date
    #[instrument(skip(self))]
    pub fn finalize_project(&mut self, number: Id, end_date: &str) -> HsResult<f64> {
        let end_date = parse_iso_date(end_date)
            .ok_or_else(|| HsError::invalid("end_date", INVALID_DATE_MESSAGE))?;
        self.finalize(number, Some(end_date))
    }

    /// Finalize a project keeping its computed end date
    #[instrument(skip(self))]
    pub fn finalize_project_now(&mut self, number: Id) -> HsResult<f64> {
        self.finalize(number, None)
    }

    fn finalize(&mut self, number: Id, end_date: Option<NaiveDate>) -> HsResult<f64> {
        let project = self.projects.find_mut(number)?;
        if project.is_finalized() {
            debug!(project = number, "Project already finalized");
            return Ok(project.final_cost());
        }

        let cost = project.finalize(end_date, &self.employees)?;
        info!(
            project = number,
            cost,
            actual_end = %project.actual_end_date(),
            "Project finalized"
        );
        Ok(cost)
    }
}
