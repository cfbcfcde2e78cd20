use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::docs::RepoDocs;
use super::submission::Submission;
use crate::taxonomy::Topic;

/// One rendered gallery entry: the submission, its derived topic, and the
/// document probe results (absent when probing was skipped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppCard {
    pub submission: Submission,
    pub topic: Topic,
    pub docs: Option<RepoDocs>,
}

impl AppCard {
    /// Cards without a repository link, or whose README probe came back
    /// absent, get flagged in the rendered output.
    pub fn needs_attention(&self) -> bool {
        match &self.docs {
            Some(docs) => self.submission.repo_link().is_none() || !docs.readme.present,
            None => self.submission.repo_link().is_none(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryReport {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub topic_counts: Vec<(Topic, usize)>,
    pub cards: Vec<AppCard>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::docs::{DocStatus, RepoDocs};

    fn card_with_repo(repo: Option<&str>, docs: Option<RepoDocs>) -> AppCard {
        let mut submission = Submission::new("App");
        submission.repo_url = repo.map(String::from);
        AppCard {
            submission,
            topic: Topic::Games,
            docs,
        }
    }

    #[test]
    fn test_needs_attention_without_repo_link() {
        let card = card_with_repo(None, Some(RepoDocs::absent()));
        assert!(card.needs_attention());
    }

    #[test]
    fn test_needs_attention_without_readme() {
        let card = card_with_repo(
            Some("https://code.swecha.org/team/app"),
            Some(RepoDocs::absent()),
        );
        assert!(card.needs_attention());
    }

    #[test]
    fn test_no_attention_with_readme() {
        let mut docs = RepoDocs::absent();
        docs.readme = DocStatus::found(
            "https://code.swecha.org/team/app/-/blob/main/README.md".to_string(),
        );
        let card = card_with_repo(Some("https://code.swecha.org/team/app"), Some(docs));
        assert!(!card.needs_attention());
    }

    #[test]
    fn test_skipped_docs_only_flag_missing_repo() {
        let card = card_with_repo(Some("https://code.swecha.org/team/app"), None);
        assert!(!card.needs_attention());
    }
}
