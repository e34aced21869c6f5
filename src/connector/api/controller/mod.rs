pub mod index_controller;
pub mod submit_controller;

pub use index_controller::IndexController;
pub use submit_controller::SubmitController;
