pub mod repo_slug;
pub mod state;

pub use repo_slug::RepoSlug;
pub use state::State;
