mod breed;
mod cat;
mod user;

pub use breed::*;
pub use cat::*;
pub use user::*;
