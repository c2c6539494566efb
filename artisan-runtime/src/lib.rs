pub mod client_factory;
pub mod config_store;
pub mod defaults;
pub mod image;
pub mod secrets;
pub mod ui;
