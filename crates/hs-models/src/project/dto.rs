//! Input DTOs for project registration

use serde::Deserialize;
use validator::Validate;

/// DTO for registering a new project
///
/// Tasks arrive as parallel arrays: `titles[i]`, `descriptions[i]` and
/// `durations[i]` describe task `i`. Missing descriptions get the configured
/// placeholder; entries past the last title are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1))]
    pub titles: Vec<String>,

    #[serde(default)]
    pub descriptions: Vec<String>,

    pub durations: Vec<f64>,

    pub address: String,

    /// name, email, phone
    #[validate(length(equal = 3))]
    pub client: Vec<String>,

    /// ISO `YYYY-MM-DD`
    pub start_date: String,
}

impl NewProject {
    pub fn new(
        titles: Vec<String>,
        descriptions: Vec<String>,
        durations: Vec<f64>,
        address: impl Into<String>,
        client: Vec<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            titles,
            descriptions,
            durations,
            address: address.into(),
            client,
            start_date: start_date.into(),
        }
    }

    /// Builder entry point for callers assembling tasks one at a time
    pub fn builder(address: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            start_date: start_date.into(),
            ..Default::default()
        }
    }

    pub fn with_client(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.client = vec![name.into(), email.into(), phone.into()];
        self
    }

    pub fn with_task(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        days: f64,
    ) -> Self {
        self.titles.push(title.into());
        self.descriptions.push(description.into());
        self.durations.push(days);
        self
    }

    /// Description for task `index`, falling back to `placeholder`
    pub fn description_or<'a>(&'a self, index: usize, placeholder: &'a str) -> &'a str {
        self.descriptions
            .get(index)
            .map(String::as_str)
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(placeholder)
    }
}

/// DTO for adding a task to an existing project
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub description: Option<String>,

    pub days: f64,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: Option<String>, days: f64) -> Self {
        Self {
            title: title.into(),
            description,
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_arrays_aligned() {
        let dto = NewProject::builder("Av. Siempre Viva 742", "2024-01-01")
            .with_client("Marge", "marge@example.com", "555-0101")
            .with_task("Paint", "Living room", 2.0)
            .with_task("Plumbing", "", 1.5);

        assert_eq!(dto.titles.len(), 2);
        assert_eq!(dto.durations, vec![2.0, 1.5]);
        assert_eq!(dto.client.len(), 3);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_description_placeholder() {
        let dto = NewProject::new(
            vec!["Paint".into(), "Tiles".into(), "Roof".into()],
            vec!["Living room".into(), "  ".into()],
            vec![1.0, 1.0, 1.0],
            "Somewhere 1",
            vec!["A".into(), "B".into(), "C".into()],
            "2024-01-01",
        );

        assert_eq!(dto.description_or(0, "n/a"), "Living room");
        assert_eq!(dto.description_or(1, "n/a"), "n/a");
        assert_eq!(dto.description_or(2, "n/a"), "n/a");
    }

    #[test]
    fn test_client_arity_is_validated() {
        let dto = NewProject::builder("Somewhere 1", "2024-01-01").with_task("Paint", "", 1.0);
        assert!(dto.validate().is_err());
    }
}
