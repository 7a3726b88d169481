pub mod cleaner;
pub mod common;
pub mod manifest;
pub mod reporter;
