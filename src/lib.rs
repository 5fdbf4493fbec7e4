pub mod app;
pub mod fetch;
pub mod model;
pub mod render;
pub mod ui;

pub use app::BrowserApp;
