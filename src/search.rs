use crate::models::Submission;

/// Case-insensitive substring filter over the searchable card fields
/// (name, description, target users, cross-platform availability). An empty
/// query keeps every submission.
pub fn filter_submissions(submissions: Vec<Submission>, query: &str) -> Vec<Submission> {
    if query.is_empty() {
        return submissions;
    }

    let query = query.to_lowercase();
    submissions
        .into_iter()
        .filter(|s| s.search_text().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Submission> {
        let mut a = Submission::new("Budget Buddy");
        a.short_description = Some("Track expenses and savings".to_string());
        a.target_users = Some("Students".to_string());

        let mut b = Submission::new("Quiz Master");
        b.short_description = Some("Trivia quiz game".to_string());
        b.cross_platform = Some("Android, Web".to_string());

        vec![a, b]
    }

    #[test]
    fn test_empty_query_is_a_noop() {
        let result = filter_submissions(sample(), "");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_matches_description_case_insensitively() {
        let result = filter_submissions(sample(), "TRIVIA");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].app_name, "Quiz Master");
    }

    #[test]
    fn test_matches_cross_platform_field() {
        let result = filter_submissions(sample(), "android");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].app_name, "Quiz Master");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let result = filter_submissions(sample(), "blockchain");
        assert!(result.is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let result = filter_submissions(sample(), "s");
        let names: Vec<_> = result.iter().map(|s| s.app_name.as_str()).collect();
        assert_eq!(names, vec!["Budget Buddy", "Quiz Master"]);
    }
}
