//! Employee model
//!
//! Employees are owned by the registry; tasks only hold their id.

use hs_core::traits::{Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Billable hours in one working day for contracted employees
pub const HOURS_PER_DAY: f64 = 8.0;

/// Share of a task's cost paid to staff employees as a bonus
pub const STAFF_BONUS_RATE: f64 = 0.02;

/// Employment variant and its rate data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Paid by the hour
    Contracted { hourly_rate: f64 },
    /// Paid by the day, eligible for the on-time bonus
    Staff { daily_rate: f64, category: String },
}

impl EmployeeKind {
    pub fn daily_cost(&self) -> f64 {
        match self {
            Self::Contracted { hourly_rate } => hourly_rate * HOURS_PER_DAY,
            Self::Staff { daily_rate, .. } => *daily_rate,
        }
    }
}

/// Employee entity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: Id,
    name: String,
    available: bool,
    delay_count: u32,
    #[serde(flatten)]
    kind: EmployeeKind,
}

impl Identifiable for Employee {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Employee {
    const TYPE_NAME: &'static str = "Employee";
    const ID_FIELD: &'static str = "id";
}

impl Employee {
    /// A new employee starts available with no recorded delays
    pub fn new(id: Id, name: impl Into<String>, kind: EmployeeKind) -> Self {
        Self {
            id,
            name: name.into(),
            available: true,
            delay_count: 0,
            kind,
        }
    }

    pub fn contracted(id: Id, name: impl Into<String>, hourly_rate: f64) -> Self {
        Self::new(id, name, EmployeeKind::Contracted { hourly_rate })
    }

    pub fn staff(id: Id, name: impl Into<String>, daily_rate: f64, category: impl Into<String>) -> Self {
        Self::new(
            id,
            name,
            EmployeeKind::Staff {
                daily_rate,
                category: category.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn delay_count(&self) -> u32 {
        self.delay_count
    }

    pub fn has_delays(&self) -> bool {
        self.delay_count > 0
    }

    pub fn is_staff(&self) -> bool {
        matches!(self.kind, EmployeeKind::Staff { .. })
    }

    /// Staff category, if any
    pub fn category(&self) -> Option<&str> {
        match &self.kind {
            EmployeeKind::Staff { category, .. } => Some(category),
            EmployeeKind::Contracted { .. } => None,
        }
    }

    pub fn daily_cost(&self) -> f64 {
        self.kind.daily_cost()
    }

    /// Bonus earned on a task of the given cost; `None` for contracted employees
    pub fn bonus_for(&self, task_cost: f64) -> Option<f64> {
        self.is_staff().then(|| task_cost * STAFF_BONUS_RATE)
    }

    pub fn mark_available(&mut self) {
        self.available = true;
    }

    pub fn mark_unavailable(&mut self) {
        self.available = false;
    }

    /// One delay event, regardless of how many days it spans
    pub fn register_delay(&mut self) {
        self.delay_count = self.delay_count.saturating_add(1);
    }
}

/// New contracted employee parameters
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewContractedEmployee {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub hourly_rate: f64,
}

impl NewContractedEmployee {
    pub fn new(name: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            hourly_rate,
        }
    }
}

/// New staff employee parameters
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewStaffEmployee {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub daily_rate: f64,

    #[validate(length(min = 1, max = 100))]
    pub category: String,
}

impl NewStaffEmployee {
    pub fn new(name: impl Into<String>, daily_rate: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            daily_rate,
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contracted_daily_cost() {
        let employee = Employee::contracted(1000, "Ana", 20.0);
        assert_eq!(employee.daily_cost(), 160.0);
        assert!(!employee.is_staff());
        assert_eq!(employee.category(), None);
        assert_eq!(employee.bonus_for(320.0), None);
    }

    #[test]
    fn test_staff_daily_cost_and_bonus() {
        let employee = Employee::staff(1001, "Luis", 150.0, "Senior");
        assert_eq!(employee.daily_cost(), 150.0);
        assert!(employee.is_staff());
        assert_eq!(employee.category(), Some("Senior"));
        assert_eq!(employee.bonus_for(300.0), Some(6.0));
    }

    #[test]
    fn test_new_employee_is_available() {
        let mut employee = Employee::contracted(1000, "Ana", 10.0);
        assert!(employee.is_available());
        assert_eq!(employee.delay_count(), 0);

        employee.mark_unavailable();
        assert!(!employee.is_available());
        employee.mark_available();
        assert!(employee.is_available());
    }

    #[test]
    fn test_delay_count_only_grows() {
        let mut employee = Employee::contracted(1000, "Ana", 10.0);
        employee.register_delay();
        employee.register_delay();
        assert_eq!(employee.delay_count(), 2);
        assert!(employee.has_delays());
    }

    #[test]
    fn test_serialized_shape() {
        let employee = Employee::staff(1001, "Luis", 150.0, "Senior");
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 1001);
        assert_eq!(json["kind"], "staff");
        assert_eq!(json["category"], "Senior");
        assert_eq!(json["delayCount"], 0);
    }

    #[test]
    fn test_dto_validation() {
        assert!(NewContractedEmployee::new("Ana", 10.0).validate().is_ok());
        assert!(NewContractedEmployee::new("", 10.0).validate().is_err());
        assert!(NewContractedEmployee::new("Ana", -1.0).validate().is_err());
        assert!(NewStaffEmployee::new("Luis", 100.0, "").validate().is_err());
    }
}
