pub mod model;
pub mod publisher;
