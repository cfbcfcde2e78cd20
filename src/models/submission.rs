use serde::{Deserialize, Serialize};

/// One hackathon project entry row from the submissions export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub app_name: String,
    pub team_number: Option<String>,
    pub short_description: Option<String>,
    pub target_users: Option<String>,
    pub current_users: Option<String>,
    pub indic_languages: Option<String>,
    pub ai_ml_innovation: Option<String>,
    pub prod_url: Option<String>,
    pub repo_url: Option<String>,
    pub cross_platform: Option<String>,
    /// Remaining columns from the export, in sheet order.
    pub extras: Vec<(String, String)>,
}

impl Submission {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            team_number: None,
            short_description: None,
            target_users: None,
            current_users: None,
            indic_languages: None,
            ai_ml_innovation: None,
            prod_url: None,
            repo_url: None,
            cross_platform: None,
            extras: Vec::new(),
        }
    }

    /// Trimmed repository link, if the row has a non-empty one.
    pub fn repo_link(&self) -> Option<&str> {
        self.repo_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Trimmed live-app link, if present and actually a web URL.
    pub fn live_link(&self) -> Option<&str> {
        self.prod_url
            .as_deref()
            .map(str::trim)
            .filter(|s| is_web_url(s))
    }

    /// Concatenation of the searchable fields, lowercased.
    pub fn search_text(&self) -> String {
        let fields = [
            Some(self.app_name.as_str()),
            self.short_description.as_deref(),
            self.target_users.as_deref(),
            self.cross_platform.as_deref(),
        ];
        fields
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

pub fn is_web_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_link_trims_and_filters_empty() {
        let mut sub = Submission::new("App");
        assert_eq!(sub.repo_link(), None);

        sub.repo_url = Some("   ".to_string());
        assert_eq!(sub.repo_link(), None);

        sub.repo_url = Some(" https://code.swecha.org/team/app ".to_string());
        assert_eq!(sub.repo_link(), Some("https://code.swecha.org/team/app"));
    }

    #[test]
    fn test_live_link_requires_web_url() {
        let mut sub = Submission::new("App");
        sub.prod_url = Some("coming soon".to_string());
        assert_eq!(sub.live_link(), None);

        sub.prod_url = Some("https://app.example.org".to_string());
        assert_eq!(sub.live_link(), Some("https://app.example.org"));
    }

    #[test]
    fn test_search_text_joins_fields() {
        let mut sub = Submission::new("Budget Buddy");
        sub.short_description = Some("Track Expenses".to_string());
        sub.target_users = Some("Students".to_string());

        let text = sub.search_text();
        assert!(text.contains("budget buddy"));
        assert!(text.contains("track expenses"));
        assert!(text.contains("students"));
    }
}
