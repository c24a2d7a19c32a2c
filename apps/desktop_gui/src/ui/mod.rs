//! UI layer for the landing shell: page sections, contact window and theme.

pub mod app;
pub mod theme;

pub use app::LandingApp;
