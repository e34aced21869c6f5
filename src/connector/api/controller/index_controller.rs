use crate::domain::DomainError;

use super::super::Container;

pub struct IndexController<'a> {
    container: &'a Container,
}

impl<'a> IndexController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn index(&self) -> Result<String, DomainError> {
        self.container.page_renderer().render_index()
    }
}
