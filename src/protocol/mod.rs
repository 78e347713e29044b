pub mod payload;
pub mod status;

pub use payload::StatusPayload;
pub use status::{CombinedStatus, Status};
