//! Windowed front end on top of `engine::app`.

pub mod app;
pub mod gilrs_source;
pub mod input_adapter;

pub use app::BlockfallApp;
pub use gilrs_source::GilrsGamepads;
