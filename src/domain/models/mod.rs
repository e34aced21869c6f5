mod call_parameters;
mod conversation_turn;
mod submission;

pub use call_parameters::*;
pub use conversation_turn::*;
pub use submission::*;
