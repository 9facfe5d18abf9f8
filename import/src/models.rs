use serde::Deserialize;

/// One catalog export as published by the admin sheet tooling.
///
/// Blank cells come through as missing fields, so everything except the name
/// defaults.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExport {
    #[serde(default)]
    pub technologies: Vec<TechnologyRow>,
    #[serde(default)]
    pub combinations: Vec<CombinationRow>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyRow {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub vacancies: u32,
    #[serde(default)]
    pub fresher_package: String,
    #[serde(default)]
    pub experienced_package: String,
    #[serde(default)]
    pub top_companies: String,
    #[serde(default)]
    pub popularity_score: u32,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationRow {
    /// Comma-separated in the sheet, one cell per combination.
    pub technologies: String,
    pub job_role: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub vacancies: u32,
    #[serde(default)]
    pub fresher_package: String,
    #[serde(default)]
    pub experienced_package: String,
    #[serde(default)]
    pub top_companies: String,
    #[serde(default)]
    pub popularity_score: u32,
}
