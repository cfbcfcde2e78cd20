use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub gitlab_token: String,
    pub gitlab_base_url: String,
    pub data_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let gitlab_token = env::var("GITLAB_TOKEN")
            .map_err(|_| Error::Config("GITLAB_TOKEN environment variable not set".to_string()))?;

        let gitlab_base_url = env::var("GITLAB_BASE_URL")
            .unwrap_or_else(|_| "https://code.swecha.org".to_string());

        let data_path = env::var("DATA_PATH").unwrap_or_else(|_| "data.csv".to_string());

        Ok(Self {
            gitlab_token,
            gitlab_base_url,
            data_path,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub check_docs: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { check_docs: true }
    }
}
