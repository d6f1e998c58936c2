#[cfg(feature = "cli")]
pub mod cli;
pub mod demo;
pub mod roster;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use demo::DemoRoster;
pub use roster::RosterConfig;
