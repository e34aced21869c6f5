use std::path::PathBuf;

use clap::Subcommand;

use crate::connector::{API_KEY_ENV, DEFAULT_BASE_URL};

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP relay
    Serve {
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,

        /// Directory containing index.html
        #[arg(long, default_value = "templates")]
        templates_dir: PathBuf,

        /// Base URL of the chat-completion API
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        upstream_url: String,

        /// Environment variable holding the upstream API key
        #[arg(long, default_value = API_KEY_ENV)]
        api_key_env: String,
    },
}
