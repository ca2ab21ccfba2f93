pub mod api;
mod request;
mod revocation;
mod user;

pub use request::*;
pub use revocation::*;
pub use user::*;
