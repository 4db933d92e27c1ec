//! Terminal UI: a cursor-driven game view for playing against the
//! alpha-beta engine.

mod app;
mod game_view;

pub use app::App;
