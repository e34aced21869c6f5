mod assemble_messages;
mod submit_prompt;

pub use assemble_messages::*;
pub use submit_prompt::*;
