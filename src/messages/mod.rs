mod storage;
mod types;

pub use storage::Transcript;
pub use types::{Message, Role};
