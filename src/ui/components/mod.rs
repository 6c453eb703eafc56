//! UI components for VoxChat

mod input_bar;
mod message_list;
mod status_line;

pub use input_bar::InputBar;
pub use message_list::MessageList;
pub use status_line::StatusLine;
