pub mod app;
mod download;
mod verify;

pub use app::{App, Commands};
