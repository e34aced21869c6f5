pub mod container;
pub mod controller;
pub mod router;

pub use container::{Container, ContainerConfig};
pub use router::{router, serve, MAX_SUBMIT_BODY_BYTES};
