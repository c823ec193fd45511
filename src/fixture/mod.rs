//! The seed dataset - typed records and the loader for the embedded fixture

pub mod loader;
pub mod types;

pub use loader::{declarations, parse_declaration, Declaration, EMBEDDED_FIXTURE};
pub use types::{
    Book, BookMember, Comment, Fixture, LaunchPlan, PublishingStage, Royalty, Task, User,
    Workspace, WorkspaceMember,
};
