//! Server HTTP handlers.

mod debug;
mod health;
mod redirect;

pub use debug::debug_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
