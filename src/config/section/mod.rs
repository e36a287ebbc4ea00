//! Configuration section definitions.

mod assets;
mod install;
mod publish;

pub use assets::AssetsConfig;
pub use install::InstallConfig;
pub use publish::PublishConfig;
