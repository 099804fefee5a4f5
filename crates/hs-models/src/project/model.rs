//! Project model
//!
//! A project exclusively owns its tasks. Dates are derived from the tasks and
//! recomputed whenever a task is added or delayed.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use hs_core::error::HsError;
use hs_core::result::HsResult;
use hs_core::traits::{Entity, Id, Identifiable};
use hs_core::types::{ceil_days, format_date, plus_days, round_days, ProjectStatus};
use serde::Serialize;

use super::client::Client;
use crate::employee::EmployeeRoster;
use crate::task::Task;

/// Markup applied to the sum of locked task costs
pub const MARGIN_RATE: f64 = 1.35;

/// Factor applied to the margin when any task in the project was delayed
pub const DELAY_PENALTY: f64 = 0.75;

/// How a final cost was put together
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub base: f64,
    pub margin: f64,
    pub bonus: f64,
    pub delayed: bool,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.margin + self.bonus
    }
}

/// Project entity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    number: Id,
    client: Client,
    address: String,
    tasks: Vec<Task>,
    #[serde(skip)]
    title_index: HashMap<String, usize>,
    start_date: NaiveDate,
    estimated_end_date: NaiveDate,
    actual_end_date: NaiveDate,
    status: ProjectStatus,
    final_cost: f64,
}

impl Identifiable for Project {
    fn id(&self) -> Id {
        self.number
    }
}

impl Entity for Project {
    const TYPE_NAME: &'static str = "Project";
    const ID_FIELD: &'static str = "number";
}

fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

impl Project {
    /// An empty, pending project; both end dates start at `start_date`
    pub fn new(number: Id, client: Client, address: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            number,
            client,
            address: address.into(),
            tasks: Vec::new(),
            title_index: HashMap::new(),
            start_date,
            estimated_end_date: start_date,
            actual_end_date: start_date,
            status: ProjectStatus::Pending,
            final_cost: 0.0,
        }
    }

    pub fn number(&self) -> Id {
        self.number
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn is_finalized(&self) -> bool {
        self.status.is_finalized()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn estimated_end_date(&self) -> NaiveDate {
        self.estimated_end_date
    }

    pub fn actual_end_date(&self) -> NaiveDate {
        self.actual_end_date
    }

    /// 0 until the project is finalized
    pub fn final_cost(&self) -> f64 {
        self.final_cost
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task by title, ignoring case
    pub fn task(&self, title: &str) -> Option<&Task> {
        let index = *self.title_index.get(&title_key(title))?;
        self.tasks.get(index)
    }

    pub fn task_mut(&mut self, title: &str) -> Option<&mut Task> {
        let index = *self.title_index.get(&title_key(title))?;
        self.tasks.get_mut(index)
    }

    pub fn unassigned_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_unassigned())
    }

    pub fn all_tasks_finished(&self) -> bool {
        self.tasks.iter().all(Task::is_finished)
    }

    /// Project-wide: one delayed task marks the whole project as delayed
    pub fn is_delayed(&self) -> bool {
        self.tasks.iter().any(Task::is_delayed)
    }

    /// Ids of employees currently responsible for a task, without repeats
    pub fn current_responsibles(&self) -> Vec<Id> {
        let mut ids: Vec<Id> = Vec::new();
        for id in self.tasks.iter().filter_map(Task::responsible) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Append a task and recompute the dates
    pub fn add_task(&mut self, task: Task) -> HsResult<()> {
        if self.is_finalized() {
            return Err(HsError::conflict(format!(
                "project {} is finalized",
                self.number
            )));
        }
        let key = title_key(task.title());
        if self.title_index.contains_key(&key) {
            return Err(HsError::invalid(
                "title",
                format!("'{}' has already been taken", task.title()),
            ));
        }

        self.title_index.insert(key, self.tasks.len());
        self.tasks.push(task);
        if self.status == ProjectStatus::Pending {
            self.status = ProjectStatus::Active;
        }
        self.recompute_dates();
        Ok(())
    }

    /// Derive both end dates from the current tasks
    pub fn recompute_dates(&mut self) {
        let planned: u64 = self.tasks.iter().map(|t| ceil_days(t.planned_days())).sum();
        let elapsed: f64 = self
            .tasks
            .iter()
            .map(|t| t.planned_days() + t.delay_days())
            .sum();

        self.estimated_end_date = plus_days(self.start_date, planned);
        self.actual_end_date = plus_days(self.start_date, round_days(elapsed));
    }

    /// Cost components for the current task state
    pub fn cost_breakdown<R>(&self, roster: &R) -> CostBreakdown
    where
        R: EmployeeRoster + ?Sized,
    {
        let delayed = self.is_delayed();
        let base: f64 = self.tasks.iter().map(Task::locked_cost).sum();

        let mut margin = base * MARGIN_RATE;
        if delayed {
            margin *= DELAY_PENALTY;
        }

        let bonus = if delayed {
            0.0
        } else {
            self.tasks
                .iter()
                .filter_map(|t| {
                    let employee = roster.employee(t.last_responsible()?)?;
                    employee.bonus_for(t.locked_cost())
                })
                .sum()
        };

        CostBreakdown {
            base,
            margin,
            bonus,
            delayed,
        }
    }

    /// Compute and store the final cost
    pub fn calculate_final_cost<R>(&mut self, roster: &R) -> f64
    where
        R: EmployeeRoster + ?Sized,
    {
        self.final_cost = self.cost_breakdown(roster).total();
        self.final_cost
    }

    /// Close the project once every task is finished
    ///
    /// A pending project has no tasks yet and cannot be finalized.
    /// Finalizing again returns the stored cost and keeps the stored dates.
    /// When `actual_end_date` is given it replaces the computed one.
    pub fn finalize<R>(&mut self, actual_end_date: Option<NaiveDate>, roster: &R) -> HsResult<f64>
    where
        R: EmployeeRoster + ?Sized,
    {
        if self.is_finalized() {
            return Ok(self.final_cost);
        }
        if self.status == ProjectStatus::Pending {
            return Err(HsError::conflict(format!(
                "project {} has no tasks",
                self.number
            )));
        }
        if let Some(open) = self.tasks.iter().find(|t| !t.is_finished()) {
            return Err(HsError::conflict(format!(
                "project {} has unfinished task '{}'",
                self.number,
                open.title()
            )));
        }

        self.status = ProjectStatus::Finalized;
        if let Some(date) = actual_end_date {
            self.actual_end_date = date;
        }
        Ok(self.calculate_final_cost(roster))
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project {} [{}]", self.number, self.status)?;
        writeln!(f, "Client: {}", self.client)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(
            f,
            "Start: {} | Estimated end: {} | Actual end: {}",
            format_date(self.start_date),
            format_date(self.estimated_end_date),
            format_date(self.actual_end_date)
        )?;
        writeln!(f, "Tasks:")?;
        for task in &self.tasks {
            write!(
                f,
                "  - {} ({} days, delay {})",
                task.title(),
                task.planned_days(),
                task.delay_days()
            )?;
            match (task.is_finished(), task.responsible()) {
                (true, _) => writeln!(f, " finished, cost {:.2}", task.locked_cost())?,
                (false, Some(id)) => writeln!(f, " responsible {}", id)?,
                (false, None) => writeln!(f, " unassigned")?,
            }
        }
        write!(f, "Final cost: {:.2}", self.final_cost)
    }
}
