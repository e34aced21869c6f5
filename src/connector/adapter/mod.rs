mod credentials;
mod mock_chat_client;
mod openai_client;
mod page_renderer;

pub use credentials::*;
pub use mock_chat_client::*;
pub use openai_client::*;
pub use page_renderer::*;
