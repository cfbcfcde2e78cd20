use std::path::Path;

use csv::StringRecord;

use crate::error::{Error, Result};
use crate::models::Submission;

/// Rows preceding the real header in the submissions export.
const HEADER_OFFSET: usize = 2;

/// Template text left behind in rows nobody filled in.
const PLACEHOLDER_DESCRIPTION: &str = "Short description of the application";

const COL_APP_NAME: &str = "App Name";
const COL_TEAM_NUMBER: &str = "Factor";
const COL_DESCRIPTION: &str = "Short description";
const COL_TARGET_USERS: &str = "Target User Personas";
const COL_CURRENT_USERS: &str = "Current Users Count";
const COL_INDIC_LANGUAGES: &str = "Indic Languages support";
const COL_AI_ML: &str = "AI/ML Innovation";
const COL_PROD_URL: &str = "PROD URL";
const COL_REPO_URL: &str = "Repo URL";
const COL_CROSS_PLATFORM: &str = "Cross-Platform Availability";

const NAMED_COLUMNS: [&str; 10] = [
    COL_APP_NAME,
    COL_TEAM_NUMBER,
    COL_DESCRIPTION,
    COL_TARGET_USERS,
    COL_CURRENT_USERS,
    COL_INDIC_LANGUAGES,
    COL_AI_ML,
    COL_PROD_URL,
    COL_REPO_URL,
    COL_CROSS_PLATFORM,
];

/// Load submissions from the CSV export, skipping the preamble rows, rows
/// without an app name, and untouched placeholder rows.
pub fn load_submissions(path: impl AsRef<Path>) -> Result<Vec<Submission>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = reader.into_records();
    for _ in 0..HEADER_OFFSET {
        if rows.next().is_none() {
            return Err(Error::DataFormat(format!(
                "{} is shorter than the expected header offset",
                path.display()
            )));
        }
    }

    let header = rows
        .next()
        .ok_or_else(|| Error::DataFormat(format!("{} has no header row", path.display())))??;
    let columns: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

    let column_index = |name: &str| columns.iter().position(|c| c == name);
    let name_col = column_index(COL_APP_NAME).ok_or_else(|| {
        Error::DataFormat(format!("missing '{}' column in {}", COL_APP_NAME, path.display()))
    })?;
    let team_col = column_index(COL_TEAM_NUMBER);
    let description_col = column_index(COL_DESCRIPTION);
    let target_users_col = column_index(COL_TARGET_USERS);
    let current_users_col = column_index(COL_CURRENT_USERS);
    let indic_col = column_index(COL_INDIC_LANGUAGES);
    let ai_ml_col = column_index(COL_AI_ML);
    let prod_col = column_index(COL_PROD_URL);
    let repo_col = column_index(COL_REPO_URL);
    let cross_platform_col = column_index(COL_CROSS_PLATFORM);

    let mut submissions = Vec::new();
    for row in rows {
        let row = row?;

        let app_name = match cell(&row, Some(name_col)) {
            Some(name) => name,
            None => continue,
        };

        let short_description = cell(&row, description_col);
        if short_description
            .as_deref()
            .is_some_and(|d| d.contains(PLACEHOLDER_DESCRIPTION))
        {
            continue;
        }

        let mut submission = Submission::new(app_name);
        submission.short_description = short_description;
        submission.team_number = cell(&row, team_col);
        submission.target_users = cell(&row, target_users_col);
        submission.current_users = cell(&row, current_users_col);
        submission.indic_languages = cell(&row, indic_col);
        submission.ai_ml_innovation = cell(&row, ai_ml_col);
        submission.prod_url = cell(&row, prod_col);
        submission.repo_url = cell(&row, repo_col);
        submission.cross_platform = cell(&row, cross_platform_col);

        for (i, column) in columns.iter().enumerate() {
            if column.is_empty() || NAMED_COLUMNS.contains(&column.as_str()) {
                continue;
            }
            if let Some(value) = cell(&row, Some(i)) {
                submission.extras.push((column.clone(), value));
            }
        }

        submissions.push(submission);
    }

    tracing::debug!("Loaded {} submissions from {}", submissions.len(), path.display());
    Ok(submissions)
}

fn cell(row: &StringRecord, index: Option<usize>) -> Option<String> {
    row.get(index?)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const FIXTURE: &str = "\
Hackathon 2024,,,,,,
exported on request,,,,,,
App Name,Factor,Short description,Target User Personas,PROD URL,Repo URL,Notes
Budget Buddy,12,Track your money and budget,Students,https://budget.example.org,https://code.swecha.org/team12/budget-buddy,Built in a weekend
,13,No name here,Anyone,,,
Template App,14,Short description of the application,Everyone,,,
Quiz Master,15,Trivia quiz game,Schools,,https://code.swecha.org/team15/quiz-master,
";

    #[test]
    fn test_load_skips_preamble_and_placeholder_rows() {
        let file = write_fixture(FIXTURE);
        let submissions = load_submissions(file.path()).unwrap();

        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[0].app_name, "Budget Buddy");
        assert_eq!(submissions[1].app_name, "Quiz Master");
    }

    #[test]
    fn test_load_maps_named_columns() {
        let file = write_fixture(FIXTURE);
        let submissions = load_submissions(file.path()).unwrap();

        let first = &submissions[0];
        assert_eq!(first.team_number.as_deref(), Some("12"));
        assert_eq!(
            first.short_description.as_deref(),
            Some("Track your money and budget")
        );
        assert_eq!(first.target_users.as_deref(), Some("Students"));
        assert_eq!(first.prod_url.as_deref(), Some("https://budget.example.org"));
        assert_eq!(
            first.repo_url.as_deref(),
            Some("https://code.swecha.org/team12/budget-buddy")
        );
    }

    #[test]
    fn test_load_keeps_unrecognized_columns_as_extras() {
        let file = write_fixture(FIXTURE);
        let submissions = load_submissions(file.path()).unwrap();

        assert_eq!(
            submissions[0].extras,
            vec![("Notes".to_string(), "Built in a weekend".to_string())]
        );
        // Empty cells never become extras
        assert!(submissions[1].extras.is_empty());
    }

    #[test]
    fn test_missing_app_name_column_is_an_error() {
        let file = write_fixture("a,b\nc,d\nWrong,Header\nx,y\n");
        let err = load_submissions(file.path()).unwrap_err();
        assert!(matches!(err, Error::DataFormat(_)));
    }

    #[test]
    fn test_file_shorter_than_header_offset_is_an_error() {
        let file = write_fixture("only one line\n");
        let err = load_submissions(file.path()).unwrap_err();
        assert!(matches!(err, Error::DataFormat(_)));
    }
}
