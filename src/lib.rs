pub mod commands;
pub mod modules;

pub use modules::cleaner;
pub use modules::cleaner::{preflight, uninstall, uninstall_manifest};
pub use modules::common::error::UninstallerError;
pub use modules::common::utils;
pub use modules::manifest;
pub use modules::manifest::models::{InstallManifest, UninstallConfig};
pub use modules::reporter;
