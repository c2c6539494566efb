pub mod action;
pub mod client;
pub mod retry;
pub mod traits;
