use serde::{Deserialize, Serialize};

/// The project-health documents probed on a repository's default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocKind {
    Readme,
    Contributing,
    Changelog,
}

impl DocKind {
    pub const ALL: [DocKind; 3] = [DocKind::Readme, DocKind::Contributing, DocKind::Changelog];

    pub fn file_name(&self) -> &'static str {
        match self {
            DocKind::Readme => "README.md",
            DocKind::Contributing => "CONTRIBUTING.md",
            DocKind::Changelog => "CHANGELOG.md",
        }
    }
}

impl std::fmt::Display for DocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Presence of one document plus its direct web URL when found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocStatus {
    pub present: bool,
    pub url: Option<String>,
}

impl DocStatus {
    pub fn found(url: String) -> Self {
        Self {
            present: true,
            url: Some(url),
        }
    }

    pub fn absent() -> Self {
        Self {
            present: false,
            url: None,
        }
    }
}

/// The three independent document statuses for one repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoDocs {
    pub readme: DocStatus,
    pub contributing: DocStatus,
    pub changelog: DocStatus,
}

impl RepoDocs {
    pub fn absent() -> Self {
        Self {
            readme: DocStatus::absent(),
            contributing: DocStatus::absent(),
            changelog: DocStatus::absent(),
        }
    }

    pub fn status(&self, kind: DocKind) -> &DocStatus {
        match kind {
            DocKind::Readme => &self.readme,
            DocKind::Contributing => &self.contributing,
            DocKind::Changelog => &self.changelog,
        }
    }

    pub fn set_status(&mut self, kind: DocKind, status: DocStatus) {
        match kind {
            DocKind::Readme => self.readme = status,
            DocKind::Contributing => self.contributing = status,
            DocKind::Changelog => self.changelog = status,
        }
    }
}
