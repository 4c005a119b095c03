/// UI module exports
pub mod app;
pub mod components;
pub mod renderer;
pub mod state;

pub use app::{WebsiteBoard, WebsiteBoardProps};
