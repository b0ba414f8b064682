//! Command implementations

mod demo;
mod menu;
mod validate_isbn;

pub use demo::demo;
pub use menu::menu;
pub use validate_isbn::validate_isbn;
