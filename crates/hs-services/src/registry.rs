//! In-memory registries for employees and projects
//!
//! Both keep registration order in a `Vec` and an id index for O(1) lookup.
//! Ids come from a per-registry counter and are never reused.

use std::collections::HashMap;

use hs_core::error::HsError;
use hs_core::result::{HsResult, OptionExt};
use hs_core::traits::{Entity, Id, Identifiable};
use hs_models::{Employee, EmployeeRoster, Project};

/// First id handed out to employees
pub const FIRST_EMPLOYEE_ID: Id = 1000;

/// First number handed out to projects
pub const FIRST_PROJECT_NUMBER: Id = 5000;

/// Monotonic id counter
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    next: Id,
}

impl SequenceGenerator {
    pub fn starting_at(first: Id) -> Self {
        Self { next: first }
    }

    /// The id the next call to [`Self::advance`] will hand out
    pub fn peek(&self) -> Id {
        self.next
    }

    pub fn advance(&mut self) -> HsResult<Id> {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .ok_or_else(|| HsError::conflict("id sequence exhausted"))?;
        Ok(id)
    }
}

/// Ordered storage with an id index
#[derive(Debug, Clone)]
struct Store<T> {
    sequence: SequenceGenerator,
    items: Vec<T>,
    index: HashMap<Id, usize>,
}

impl<T: Identifiable> Store<T> {
    fn new(first: Id) -> Self {
        Self {
            sequence: SequenceGenerator::starting_at(first),
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build an item with the next id; the id is consumed only if `build` succeeds
    fn insert_with<F>(&mut self, build: F) -> HsResult<Id>
    where
        F: FnOnce(Id) -> HsResult<T>,
    {
        let item = build(self.sequence.peek())?;
        let id = self.sequence.advance()?;
        debug_assert_eq!(item.id(), id);

        self.index.insert(id, self.items.len());
        self.items.push(item);
        Ok(id)
    }

    fn get(&self, id: Id) -> Option<&T> {
        self.index.get(&id).and_then(|&i| self.items.get(i))
    }

    fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        let i = *self.index.get(&id)?;
        self.items.get_mut(i)
    }
}

/// Canonical employee collection
#[derive(Debug, Clone)]
pub struct EmployeeRegistry {
    store: Store<Employee>,
}

impl Default for EmployeeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRegistry {
    pub fn new() -> Self {
        Self {
            store: Store::new(FIRST_EMPLOYEE_ID),
        }
    }

    /// Register an employee built around the issued id
    pub fn register<F>(&mut self, build: F) -> HsResult<Id>
    where
        F: FnOnce(Id) -> Employee,
    {
        self.store.insert_with(|id| Ok(build(id)))
    }

    pub fn get(&self, id: Id) -> Option<&Employee> {
        self.store.get(id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut Employee> {
        self.store.get_mut(id)
    }

    pub fn find(&self, id: Id) -> HsResult<&Employee> {
        self.get(id)
            .or_not_found(Employee::TYPE_NAME, Employee::ID_FIELD, id)
    }

    /// Employees in registration order
    pub fn as_slice(&self) -> &[Employee] {
        &self.store.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.store.items.iter()
    }

    pub fn len(&self) -> usize {
        self.store.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.items.is_empty()
    }
}

impl EmployeeRoster for EmployeeRegistry {
    fn employee(&self, id: Id) -> Option<&Employee> {
        self.get(id)
    }

    fn employee_mut(&mut self, id: Id) -> Option<&mut Employee> {
        self.get_mut(id)
    }
}

/// Project collection
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    store: Store<Project>,
}

impl Default for ProjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self {
            store: Store::new(FIRST_PROJECT_NUMBER),
        }
    }

    /// Register a project; a failing `build` leaves the counter untouched
    pub fn register<F>(&mut self, build: F) -> HsResult<Id>
    where
        F: FnOnce(Id) -> HsResult<Project>,
    {
        self.store.insert_with(build)
    }

    pub fn get(&self, number: Id) -> Option<&Project> {
        self.store.get(number)
    }

    pub fn get_mut(&mut self, number: Id) -> Option<&mut Project> {
        self.store.get_mut(number)
    }

    pub fn find(&self, number: Id) -> HsResult<&Project> {
        self.get(number)
            .or_not_found(Project::TYPE_NAME, Project::ID_FIELD, number)
    }

    pub fn find_mut(&mut self, number: Id) -> HsResult<&mut Project> {
        self.get_mut(number)
            .or_not_found(Project::TYPE_NAME, Project::ID_FIELD, number)
    }

    /// Projects in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.store.items.iter()
    }

    pub fn len(&self) -> usize {
        self.store.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hs_models::Client;

    fn blank_project(number: Id) -> Project {
        Project::new(
            number,
            Client::new("Marge", "marge@example.com", "555-0101"),
            "Evergreen 742",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_sequence_is_monotonic() {
        let mut sequence = SequenceGenerator::starting_at(10);
        assert_eq!(sequence.advance().unwrap(), 10);
        assert_eq!(sequence.advance().unwrap(), 11);
        assert_eq!(sequence.peek(), 12);
    }

    #[test]
    fn test_sequence_exhaustion_is_an_error() {
        let mut sequence = SequenceGenerator::starting_at(Id::MAX);
        assert!(sequence.advance().unwrap_err().is_state_conflict());
    }

    #[test]
    fn test_employee_ids_start_at_1000() {
        let mut registry = EmployeeRegistry::new();
        let first = registry
            .register(|id| Employee::contracted(id, "Ana", 10.0))
            .unwrap();
        let second = registry
            .register(|id| Employee::staff(id, "Luis", 100.0, "Senior"))
            .unwrap();

        assert_eq!((first, second), (1000, 1001));
        assert_eq!(registry.get(1001).unwrap().name(), "Luis");
        assert_eq!(
            registry.iter().map(|e| e.id()).collect::<Vec<_>>(),
            vec![1000, 1001]
        );
    }

    #[test]
    fn test_failed_project_build_keeps_counter() {
        let mut registry = ProjectRegistry::new();
        let err = registry
            .register(|_| Err(HsError::invalid("start_date", "is invalid")))
            .unwrap_err();
        assert!(err.is_invalid_argument());

        let number = registry.register(|n| Ok(blank_project(n))).unwrap();
        assert_eq!(number, 5000);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_reports_not_found() {
        let registry = ProjectRegistry::new();
        let err = registry.find(5000).unwrap_err();
        assert_eq!(err.to_string(), "Not found: Project with number=5000");
    }
}
