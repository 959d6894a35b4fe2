// src/lib.rs
pub mod board;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod surface;
pub mod term;
pub mod testing;
pub mod wait;

// Re-export der wichtigsten Typen
pub use board::{BOARD_ID, Board, BoardContext, DadJokesBoard};
pub use cache::{JokeCache, JokeRecord};
pub use client::{API_URL, FALLBACK_JOKE, JokeClient};
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use layout::{BoardLayout, FileLayouts, LayoutRegion, LayoutSource};
pub use manifest::{BoardDecl, PluginManifest};
pub use surface::{DrawSurface, FontMetrics, parse_color};
pub use term::{TermFont, TermMatrix};
pub use wait::SleepEvent;
