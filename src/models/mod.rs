pub mod event;
pub mod payload;
pub mod pull_request;
pub mod repository;

pub use event::*;
pub use payload::*;
pub use pull_request::*;
pub use repository::*;
