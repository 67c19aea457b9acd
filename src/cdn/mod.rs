pub mod purge;

pub use purge::{PurgeError, PurgeRequest};
