use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::gitlab::provider::RepoHost;
use crate::models::{DocKind, DocStatus, RepoDocs};

/// Branch the document probes run against.
const DEFAULT_BRANCH: &str = "main";

pub struct GitLabClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GitLabProject {
    id: u64,
}

impl GitLabClient {
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert("PRIVATE-TOKEN", header::HeaderValue::from_str(token)?);
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("hackgallery/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full project path for a repository link under this instance, or None
    /// when the link lives elsewhere.
    fn project_path(&self, repo_link: &str) -> Option<String> {
        let rest = repo_link.strip_prefix(&self.base_url)?;
        let rest = rest.strip_prefix('/')?;
        let path = rest.trim_end_matches('/');
        if path.is_empty() {
            return None;
        }
        Some(path.to_string())
    }

    async fn project_id(&self, project_path: &str) -> Result<u64> {
        let encoded = urlencoding::encode(project_path);
        let url = format!("{}/api/v4/projects/{}", self.base_url, encoded);
        tracing::debug!("Resolving project id for: {}", project_path);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::ProjectNotFound(project_path.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitLabApi(format!(
                "Failed to resolve project {}: {} - {}",
                project_path, status, body
            )));
        }

        let project: GitLabProject = response.json().await?;
        Ok(project.id)
    }

    /// Probe one repository file on the default branch. Any non-success
    /// status counts as absent.
    async fn file_exists(&self, project_id: u64, file_name: &str) -> Result<bool> {
        let url = format!(
            "{}/api/v4/projects/{}/repository/files/{}",
            self.base_url, project_id, file_name
        );

        let response = self
            .client
            .get(&url)
            .query(&[("ref", DEFAULT_BRANCH)])
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    fn doc_web_url(repo_link: &str, kind: DocKind) -> String {
        format!(
            "{}/-/blob/{}/{}",
            repo_link.trim_end_matches('/'),
            DEFAULT_BRANCH,
            kind.file_name()
        )
    }
}

#[async_trait]
impl RepoHost for GitLabClient {
    /// One project-id lookup, then up to three sequential file probes. Every
    /// failure along the way is logged and mapped to absent.
    async fn repo_docs(&self, repo_link: &str) -> RepoDocs {
        let Some(path) = self.project_path(repo_link) else {
            tracing::warn!(
                "Repository link is not under {}, skipping: {}",
                self.base_url,
                repo_link
            );
            return RepoDocs::absent();
        };

        let project_id = match self.project_id(&path).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Could not resolve project {}: {}", path, e);
                return RepoDocs::absent();
            }
        };

        let mut docs = RepoDocs::absent();
        for kind in DocKind::ALL {
            let status = match self.file_exists(project_id, kind.file_name()).await {
                Ok(true) => DocStatus::found(Self::doc_web_url(repo_link, kind)),
                Ok(false) => DocStatus::absent(),
                Err(e) => {
                    tracing::warn!("Error checking {} for {}: {}", kind, path, e);
                    DocStatus::absent()
                }
            };
            docs.set_status(kind, status);
        }

        docs
    }

    fn name(&self) -> &str {
        "GitLab"
    }
}
