//! Project filters.

use serde::{Deserialize, Serialize};

/// Keyword selecting every project.
const ALL_PROJECTS: &str = "all";

/// Which project's records a report covers.
///
/// Serializes as the project name, with `"all"` meaning no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectFilter {
    /// Every project.
    #[default]
    All,
    /// A single named project.
    Named(String),
}

impl ProjectFilter {
    /// Creates a filter for a single project.
    #[must_use]
    pub fn named(project: impl Into<String>) -> Self {
        Self::Named(project.into())
    }

    /// Returns true if a record for `project` passes the filter.
    #[must_use]
    pub fn matches(&self, project: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == project,
        }
    }

    /// Returns true if the filter selects every project.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for ProjectFilter {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ALL_PROJECTS) {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }
}

impl From<String> for ProjectFilter {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case(ALL_PROJECTS) {
            Self::All
        } else {
            Self::Named(value)
        }
    }
}

impl From<ProjectFilter> for String {
    fn from(value: ProjectFilter) -> Self {
        match value {
            ProjectFilter::All => ALL_PROJECTS.to_string(),
            ProjectFilter::Named(name) => name,
        }
    }
}

impl std::fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_PROJECTS),
            Self::Named(name) => f.write_str(name),
        }
    }
}
