pub mod controller;
pub mod label;

pub use controller::{status_for, PopupController, RenderPolicy};
pub use label::{MemoryLabel, StatusLabel, RES_EMAIL, RES_URL};
