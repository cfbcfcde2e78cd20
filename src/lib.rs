pub mod config;
pub mod error;
pub mod models;
pub mod data;
pub mod taxonomy;
pub mod search;
pub mod gitlab;
pub mod gallery;

pub use config::{Config, GalleryConfig};
pub use error::{Error, Result};
pub use gitlab::{GitLabClient, RepoHost};
pub use gallery::GalleryPipeline;
