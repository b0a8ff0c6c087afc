pub mod app;
pub mod config;
pub mod logger;

pub use app::run;
pub use config::CliConfig;
