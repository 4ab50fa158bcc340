pub mod client;
pub mod input;
pub mod models;
pub mod output;
pub mod popup;
pub mod tab;

pub use models::*;
