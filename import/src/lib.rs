//! # Catalog Import
//!
//! Ingestion path for the admin side: take one catalog export (the sheet
//! tooling publishes it as JSON, locally or behind a URL), clean the cells,
//! and merge the rows into the stored catalog.
//!
//! Merging is by normalized name for technologies and by job role for
//! combinations: existing rows are updated in place and keep their display
//! order, new rows are appended after the current ordering. Combination rows
//! with no technologies are skipped, never written.

use std::fs;
use std::path::Path;

use anyhow::{Context, Error};
use indicatif::{ProgressBar, ProgressStyle};

use catalog::model::{Catalog, Combination, Technology};
use catalog::normalize::normalize;
use catalog::store::{read_catalog, write_catalog};

pub mod models;
pub mod utils;

use models::{CatalogExport, CombinationRow, TechnologyRow};
use utils::{parse_category, sanitize, split_cell};

pub async fn run_import(source: &str, catalog_path: &Path) -> Result<(), Error> {
    let export = load_export(source).await?;

    let mut catalog = if catalog_path.exists() {
        read_catalog(catalog_path)?
    } else {
        Catalog::default()
    };

    println!("Loaded Technologies: {}", catalog.technologies.len());
    println!("Loaded Combinations: {}\n", catalog.combinations.len());

    let total_rows = export.technologies.len() + export.combinations.len();

    let pb = ProgressBar::new(total_rows as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let mut new_rows = 0;
    let mut updated_rows = 0;
    let mut skipped_rows = 0;

    for row in export.technologies {
        pb.set_message(format!("Technology {}", sanitize(&row.name)));

        match merge_technology(&mut catalog, row) {
            Some(true) => new_rows += 1,
            Some(false) => updated_rows += 1,
            None => skipped_rows += 1,
        }

        pb.inc(1);
    }

    for row in export.combinations {
        pb.set_message(format!("Combination {}", sanitize(&row.job_role)));

        match merge_combination(&mut catalog, row) {
            Some(true) => new_rows += 1,
            Some(false) => updated_rows += 1,
            None => skipped_rows += 1,
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    if new_rows == 0 && updated_rows == 0 {
        println!("No new or updated rows found. Exiting.");
        return Ok(());
    }

    println!("Total New Rows: {new_rows}");
    println!("Total Updated Rows: {updated_rows}");
    println!("Total Skipped Rows: {skipped_rows}\n");

    println!("Technology Verification: {}", catalog.technologies.len());
    println!("Combination Verification: {}", catalog.combinations.len());

    write_catalog(catalog_path, &catalog)
}

async fn load_export(source: &str) -> Result<CatalogExport, Error> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return reqwest::get(source)
            .await
            .with_context(|| format!("Failed to fetch export from {source}"))?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("Malformed export payload from {source}"));
    }

    let data = fs::read_to_string(source)
        .with_context(|| format!("Failed to read export file {source}"))?;

    serde_json::from_str(&data).with_context(|| format!("Malformed export file {source}"))
}

/// Merge one technology row. `Some(true)` new, `Some(false)` updated,
/// `None` skipped (blank name).
fn merge_technology(catalog: &mut Catalog, row: TechnologyRow) -> Option<bool> {
    let name = sanitize(&row.name);
    if name.is_empty() {
        return None;
    }

    let existing = catalog
        .technologies
        .iter_mut()
        .find(|tech| normalize(&tech.name) == name);

    match existing {
        Some(tech) => {
            tech.category = parse_category(&row.category);
            tech.vacancies = row.vacancies;
            tech.fresher_package = row.fresher_package;
            tech.experienced_package = row.experienced_package;
            tech.top_companies = row.top_companies;
            tech.popularity_score = row.popularity_score;
            tech.description = row.description;

            Some(false)
        }
        None => {
            #[cfg(feature = "verbose")]
            println!("New technology! {name}");

            let display_order = next_display_order(catalog);
            catalog.technologies.push(Technology {
                name,
                category: parse_category(&row.category),
                display_order,
                vacancies: row.vacancies,
                fresher_package: row.fresher_package,
                experienced_package: row.experienced_package,
                top_companies: row.top_companies,
                popularity_score: row.popularity_score,
                description: row.description,
            });

            Some(true)
        }
    }
}

/// Merge one combination row, keyed by job role. Rows with no technologies
/// are skipped.
fn merge_combination(catalog: &mut Catalog, row: CombinationRow) -> Option<bool> {
    let job_role = sanitize(&row.job_role);
    let technologies = split_cell(&row.technologies);

    if job_role.is_empty() || technologies.is_empty() {
        return None;
    }

    let existing = catalog
        .combinations
        .iter_mut()
        .find(|combination| normalize(&combination.job_role) == job_role);

    match existing {
        Some(combination) => {
            combination.technologies = technologies;
            combination.category = sanitize(&row.category);
            combination.vacancies = row.vacancies;
            combination.fresher_package = row.fresher_package;
            combination.experienced_package = row.experienced_package;
            combination.top_companies = row.top_companies;
            combination.popularity_score = row.popularity_score;

            Some(false)
        }
        None => {
            #[cfg(feature = "verbose")]
            println!("New combination! {job_role}");

            catalog.combinations.push(Combination {
                technologies,
                job_role,
                category: sanitize(&row.category),
                vacancies: row.vacancies,
                fresher_package: row.fresher_package,
                experienced_package: row.experienced_package,
                top_companies: row.top_companies,
                popularity_score: row.popularity_score,
            });

            Some(true)
        }
    }
}

fn next_display_order(catalog: &Catalog) -> u32 {
    catalog
        .technologies
        .iter()
        .map(|tech| tech.display_order)
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technology_row(name: &str, vacancies: u32) -> TechnologyRow {
        TechnologyRow {
            name: name.to_string(),
            category: "main".to_string(),
            vacancies,
            fresher_package: "3-5 LPA".to_string(),
            experienced_package: "8-15 LPA".to_string(),
            top_companies: "Amazon, Google".to_string(),
            popularity_score: 8,
            description: String::new(),
        }
    }

    fn combination_row(job_role: &str, technologies: &str) -> CombinationRow {
        CombinationRow {
            technologies: technologies.to_string(),
            job_role: job_role.to_string(),
            category: "web".to_string(),
            vacancies: 13000,
            fresher_package: "3-6 LPA".to_string(),
            experienced_package: "10-18 LPA".to_string(),
            top_companies: "TCS, Wipro".to_string(),
            popularity_score: 10,
        }
    }

    #[test]
    fn test_new_technology_gets_next_display_order() {
        let mut catalog = Catalog::default();

        assert_eq!(merge_technology(&mut catalog, technology_row("Python", 9000)), Some(true));
        assert_eq!(merge_technology(&mut catalog, technology_row("Java", 7000)), Some(true));

        assert_eq!(catalog.technologies[0].display_order, 1);
        assert_eq!(catalog.technologies[1].display_order, 2);
    }

    #[test]
    fn test_existing_technology_updated_in_place() {
        let mut catalog = Catalog::default();
        merge_technology(&mut catalog, technology_row("Python", 9000));

        assert_eq!(
            merge_technology(&mut catalog, technology_row(" Python ", 9500)),
            Some(false)
        );

        assert_eq!(catalog.technologies.len(), 1);
        assert_eq!(catalog.technologies[0].vacancies, 9500);
        assert_eq!(catalog.technologies[0].display_order, 1);
    }

    #[test]
    fn test_blank_name_is_skipped() {
        let mut catalog = Catalog::default();

        assert_eq!(merge_technology(&mut catalog, technology_row("  ", 100)), None);
        assert!(catalog.technologies.is_empty());
    }

    #[test]
    fn test_combination_cell_is_split_and_sanitized() {
        let mut catalog = Catalog::default();

        merge_combination(
            &mut catalog,
            combination_row("Frontend Developer", "HTML5,  CSS3 , JavaScript"),
        );

        assert_eq!(
            catalog.combinations[0].technologies,
            vec!["HTML5", "CSS3", "JavaScript"]
        );
    }

    #[test]
    fn test_combination_without_technologies_is_skipped() {
        let mut catalog = Catalog::default();

        assert_eq!(
            merge_combination(&mut catalog, combination_row("Frontend Developer", " , ")),
            None
        );
        assert!(catalog.combinations.is_empty());
    }
}
