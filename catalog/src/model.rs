use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Whether a technology is a primary stack entry or a supporting skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Sub,
}

/// A single skill or tool in the catalog, e.g. "React.js".
///
/// Owned and mutated only by the admin side (imports, edits). The explorer
/// treats these records as read-only snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub name: String,
    pub category: Category,
    pub display_order: u32,
    pub vacancies: u32,
    pub fresher_package: String,
    pub experienced_package: String,
    /// Comma-separated top hiring companies, kept in the raw catalog form.
    pub top_companies: String,
    pub popularity_score: u32,
    pub description: String,
}

/// A pre-curated set of technologies mapped to a named job role.
///
/// `technologies` is treated as an unordered set with no duplicates. Entries
/// that do not resolve to a known [`Technology`] are tolerated: matching
/// compares names as opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    pub technologies: Vec<String>,
    pub job_role: String,
    pub category: String,
    pub vacancies: u32,
    pub fresher_package: String,
    pub experienced_package: String,
    pub top_companies: String,
    pub popularity_score: u32,
}

/// A prospective-student lead captured from the public inquiry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_interest: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// One full snapshot of the catalog, read in a single load so an in-flight
/// computation never sees a partially updated view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub technologies: Vec<Technology>,
    pub combinations: Vec<Combination>,
}

impl Catalog {
    /// Look up a technology by normalized name.
    pub fn technology(&self, name: &str) -> Option<&Technology> {
        let wanted = normalize(name);
        self.technologies
            .iter()
            .find(|tech| normalize(&tech.name) == wanted)
    }
}
