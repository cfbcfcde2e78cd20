pub mod submission;
pub mod docs;
pub mod report;

pub use submission::*;
pub use docs::*;
pub use report::*;
