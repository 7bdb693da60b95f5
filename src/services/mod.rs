mod auth_service;
mod breed_service;
mod cat_service;
mod ownership;

pub use auth_service::*;
pub use breed_service::*;
pub use cat_service::*;
pub use ownership::*;
