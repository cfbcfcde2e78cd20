use async_trait::async_trait;

use crate::models::RepoDocs;

/// Seam between the gallery pipeline and the repository hosting API.
///
/// Implementations resolve a repository link to the presence (and direct
/// web URL) of the standard project-health documents. Lookup failures never
/// surface here: they degrade to all-absent statuses inside the
/// implementation.
#[async_trait]
pub trait RepoHost: Send + Sync {
    async fn repo_docs(&self, repo_link: &str) -> RepoDocs;

    fn name(&self) -> &str;
}
