use std::path::Path;

use minijinja::{context, AutoEscape, Environment};

use crate::domain::DomainError;

pub const INDEX_TEMPLATE: &str = "index.html";

/// Renders the static landing page from a templates directory.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Load templates from `dir`. Fails if `index.html` is missing or does not
    /// parse, so a broken install is caught at startup.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let mut env = Environment::new();
        // Values are URL paths dropped into inline script; HTML escaping breaks them.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_loader(minijinja::path_loader(dir.as_ref().to_path_buf()));
        env.get_template(INDEX_TEMPLATE)
            .map_err(|e| DomainError::template(format!("{}: {e}", dir.as_ref().display())))?;
        Ok(Self { env })
    }

    pub fn render_index(&self) -> Result<String, DomainError> {
        let template = self
            .env
            .get_template(INDEX_TEMPLATE)
            .map_err(|e| DomainError::template(e.to_string()))?;
        template
            .render(context! { submit_path => "/submit" })
            .map_err(|e| DomainError::template(e.to_string()))
    }
}
