use catalog::model::Category;
use regex::Regex;

/// Clean a name cell from the export: trim, collapse runs of whitespace.
///
/// Case and punctuation are preserved. Matching in the explorer is
/// case-sensitive, and names like "React.js" or "C++" must survive import
/// untouched.
pub fn sanitize(input: &str) -> String {
    let collapse = Regex::new(r"\s+").unwrap();

    collapse.replace_all(input.trim(), " ").into_owned()
}

/// Category cell to [`Category`]. Anything that is not "main" counts as a
/// supporting skill.
pub fn parse_category(input: &str) -> Category {
    if input.trim().eq_ignore_ascii_case("main") {
        Category::Main
    } else {
        Category::Sub
    }
}

/// Split a comma-separated technologies cell into sanitized names.
pub fn split_cell(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(sanitize)
        .filter(|name| !name.is_empty())
        .collect()
}
