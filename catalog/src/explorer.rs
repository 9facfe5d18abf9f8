//! # Course Explorer
//!
//! The matching pipeline behind the public Course Explorer.
//!
//! Given the user's selected technologies, first look for a curated
//! [`Combination`] whose technology set equals the selection exactly. On a
//! miss, build a [`CalculatedResult`] from the selected technologies' own
//! market attributes. Both steps are pure functions over one catalog
//! snapshot; nothing here holds state between calls.
//!
//! ## Matching policy
//!
//! A combination matches only on symmetric set equality, never on subset
//! containment. A partial overlap showing up as a "Perfect Match" would
//! mislead the user, so three selected technologies against a four-technology
//! combination is always a miss.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Combination, Technology};
use crate::normalize::{normalize, split_companies};

/// Display cap on the synthesized company list. Companies past the cap are
/// dropped, not reported.
pub const MAX_DISPLAY_COMPANIES: usize = 8;

/// Package bands for ad-hoc combinations are fixed placeholders. No estimate
/// is attempted for a technology set nobody curated.
pub const FRESHER_PACKAGE_PLACEHOLDER: &str = "Competitive";
pub const EXPERIENCED_PACKAGE_PLACEHOLDER: &str = "As per experience";

/// Estimate derived from the selected technologies when no curated
/// combination covers the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedResult {
    pub title: String,
    pub vacancies: u32,
    pub top_companies: Vec<String>,
    pub fresher_package: String,
    pub experienced_package: String,
}

/// Outcome of evaluating a selection.
///
/// Tagged so the frontend can style "Perfect Match" and "Custom Combination"
/// without probing for field presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MatchResult {
    Exact(Combination),
    Calculated(CalculatedResult),
}

/// Find the curated combination whose technology set equals the selection.
///
/// Names are compared as normalized, case-sensitive strings; whether they
/// resolve to real catalog technologies does not matter here. When two
/// combinations carry the same technology set, the first in catalog order
/// wins. An empty selection never matches.
pub fn find_exact_match<'a>(
    selection_names: &[String],
    combinations: &'a [Combination],
) -> Option<&'a Combination> {
    if selection_names.is_empty() {
        return None;
    }

    let selected: HashSet<&str> = selection_names.iter().map(|name| normalize(name)).collect();

    combinations.iter().find(|combination| {
        let combination_set: HashSet<&str> = combination
            .technologies
            .iter()
            .map(|name| normalize(name))
            .collect();

        combination_set == selected
    })
}

/// Build the calculated estimate for a selection no curated combination
/// covers.
///
/// The caller guarantees a non-empty selection; with nothing selected there
/// is nothing to estimate and the explorer shows no result at all.
///
/// The title follows the selection's insertion order, matching the order the
/// user added the chips. Companies are deduplicated case-sensitively in
/// first-seen order across the selection and capped at
/// [`MAX_DISPLAY_COMPANIES`].
pub fn synthesize(selection: &[Technology]) -> CalculatedResult {
    let names: Vec<&str> = selection
        .iter()
        .map(|tech| normalize(&tech.name))
        .collect();

    let title = format!("{} Developer", names.join(" + "));

    let vacancies = selection.iter().map(|tech| tech.vacancies).sum();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut top_companies: Vec<String> = Vec::new();
    'selection: for tech in selection {
        for company in split_companies(&tech.top_companies) {
            if top_companies.len() == MAX_DISPLAY_COMPANIES {
                break 'selection;
            }

            if seen.insert(company) {
                top_companies.push(company.to_string());
            }
        }
    }

    CalculatedResult {
        title,
        vacancies,
        top_companies,
        fresher_package: FRESHER_PACKAGE_PLACEHOLDER.to_string(),
        experienced_package: EXPERIENCED_PACKAGE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech(name: &str, vacancies: u32, top_companies: &str) -> Technology {
        Technology {
            name: name.to_string(),
            category: crate::model::Category::Main,
            display_order: 0,
            vacancies,
            fresher_package: "3-5 LPA".to_string(),
            experienced_package: "8-15 LPA".to_string(),
            top_companies: top_companies.to_string(),
            popularity_score: 5,
            description: String::new(),
        }
    }

    fn combination(technologies: &[&str], job_role: &str, vacancies: u32) -> Combination {
        Combination {
            technologies: technologies.iter().map(|name| name.to_string()).collect(),
            job_role: job_role.to_string(),
            category: "web".to_string(),
            vacancies,
            fresher_package: "3-6 LPA".to_string(),
            experienced_package: "10-18 LPA".to_string(),
            top_companies: "TCS, Wipro".to_string(),
            popularity_score: 10,
        }
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_exact_match_ignores_selection_order() {
        let combinations = vec![combination(
            &["HTML5", "CSS3", "JavaScript"],
            "Frontend Developer",
            13000,
        )];

        let matched =
            find_exact_match(&names(&["JavaScript", "HTML5", "CSS3"]), &combinations).unwrap();

        assert_eq!(matched.job_role, "Frontend Developer");
        assert_eq!(matched.vacancies, 13000);
        assert_eq!(matched.popularity_score, 10);
    }

    #[test]
    fn test_partial_overlap_is_never_a_match() {
        let combinations = vec![combination(
            &["HTML5", "CSS3", "JavaScript"],
            "Frontend Developer",
            13000,
        )];

        // subset of the combination
        assert!(find_exact_match(&names(&["HTML5", "CSS3"]), &combinations).is_none());
        // superset of the combination
        assert!(
            find_exact_match(
                &names(&["HTML5", "CSS3", "JavaScript", "React.js"]),
                &combinations
            )
            .is_none()
        );
    }

    #[test]
    fn test_first_combination_wins_on_duplicate_sets() {
        let combinations = vec![
            combination(&["Java", "Spring"], "Java Developer", 9000),
            combination(&["Spring", "Java"], "Backend Developer", 7000),
        ];

        let matched = find_exact_match(&names(&["Spring", "Java"]), &combinations).unwrap();

        assert_eq!(matched.job_role, "Java Developer");
    }

    #[test]
    fn test_whitespace_trimmed_case_sensitive() {
        let combinations = vec![combination(&["React.js", "Node.js"], "MERN Developer", 8000)];

        assert!(find_exact_match(&names(&[" React.js ", "Node.js"]), &combinations).is_some());
        assert!(find_exact_match(&names(&["react.js", "Node.js"]), &combinations).is_none());
    }

    #[test]
    fn test_empty_selection_never_matches() {
        let combinations = vec![combination(&["Python"], "Python Developer", 9000)];

        assert!(find_exact_match(&[], &combinations).is_none());
    }

    #[test]
    fn test_unknown_names_compare_as_opaque_strings() {
        // "Cobol" resolves to no catalog technology, the set comparison does
        // not care
        let combinations = vec![combination(&["Cobol", "JCL"], "Mainframe Developer", 400)];

        assert!(find_exact_match(&names(&["JCL", "Cobol"]), &combinations).is_some());
    }

    #[test]
    fn test_single_technology_title() {
        let result = synthesize(&[tech("Python", 9000, "Amazon, Google")]);

        assert_eq!(result.title, "Python Developer");
    }

    #[test]
    fn test_multi_technology_title_follows_insertion_order() {
        let result = synthesize(&[
            tech("React.js", 6000, "Amazon"),
            tech("Node.js", 5000, "Google"),
        ]);

        assert_eq!(result.title, "React.js + Node.js Developer");
    }

    #[test]
    fn test_vacancies_are_summed() {
        let result = synthesize(&[tech("A", 9000, ""), tech("B", 6000, "")]);

        assert_eq!(result.vacancies, 15000);
    }

    #[test]
    fn test_companies_deduplicated_in_first_seen_order() {
        let result = synthesize(&[
            tech("A", 100, "Amazon, Google, TCS"),
            tech("B", 100, "Google, Wipro, Amazon"),
        ]);

        assert_eq!(result.top_companies, vec!["Amazon", "Google", "TCS", "Wipro"]);
    }

    #[test]
    fn test_company_dedup_is_case_sensitive() {
        let result = synthesize(&[tech("A", 100, "Amazon, amazon")]);

        assert_eq!(result.top_companies, vec!["Amazon", "amazon"]);
    }

    #[test]
    fn test_companies_capped_at_eight() {
        let result = synthesize(&[
            tech("A", 100, "C1, C2, C3, C4, C5"),
            tech("B", 100, "C6, C7, C8, C9, C10"),
        ]);

        assert_eq!(result.top_companies.len(), MAX_DISPLAY_COMPANIES);
        assert_eq!(
            result.top_companies,
            vec!["C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8"]
        );
    }

    #[test]
    fn test_package_bands_are_placeholders() {
        let result = synthesize(&[tech("Python", 9000, "")]);

        assert_eq!(result.fresher_package, "Competitive");
        assert_eq!(result.experienced_package, "As per experience");
    }

    #[test]
    fn test_python_core_scenario() {
        let result = synthesize(&[tech(
            "Python Core",
            9000,
            "Amazon, Google, Infosys, Capgemini, Cognizant",
        )]);

        assert_eq!(result.title, "Python Core Developer");
        assert_eq!(result.vacancies, 9000);
        assert_eq!(
            result.top_companies,
            vec!["Amazon", "Google", "Infosys", "Capgemini", "Cognizant"]
        );
        assert_eq!(result.fresher_package, "Competitive");
    }

    #[test]
    fn test_match_result_wire_tag() {
        let exact = MatchResult::Exact(combination(&["Python"], "Python Developer", 9000));
        let value = serde_json::to_value(&exact).unwrap();
        assert_eq!(value["type"], "exact");
        assert_eq!(value["jobRole"], "Python Developer");

        let calculated = MatchResult::Calculated(synthesize(&[tech("Python", 9000, "")]));
        let value = serde_json::to_value(&calculated).unwrap();
        assert_eq!(value["type"], "calculated");
        assert_eq!(value["title"], "Python Developer");
    }
}
