//! Per-screen update/draw handlers, dispatched from [`crate::app::App`].

pub mod game_over;
pub mod level;
pub mod splash;
