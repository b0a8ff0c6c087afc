pub mod portfolio;
pub mod profile;
pub mod settings;
pub mod showcase;
pub mod stats;
pub mod timeline;
pub mod view;
