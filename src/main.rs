// src/main.rs
//
// Standalone preview: renders the board into the terminal so the plugin
// can be tried without a scoreboard host or LED hardware.
//
//   dadjokes-preview [config.json] [WxH]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use log::{error, info, warn};

use dadjokes_board::board::{Board, BoardContext, DadJokesBoard};
use dadjokes_board::config;
use dadjokes_board::layout::FileLayouts;
use dadjokes_board::manifest::PluginManifest;
use dadjokes_board::term::{TermFont, TermMatrix};
use dadjokes_board::wait::SleepEvent;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // ------------------------------------------------------------
    // Config
    // ------------------------------------------------------------
    let cfg_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.sample.json".into());
    let (width, height) = parse_display_size(std::env::args().nth(2))?;

    let cfg = config::load(&cfg_path)?;
    info!("[preview] loaded {}", cfg_path);

    if !cfg.enabled {
        warn!("[preview] board disabled in {}, nothing to do", cfg_path);
        return Ok(());
    }

    let manifest = PluginManifest::load("plugin.json")?;
    info!(
        "[preview] plugin {} v{}",
        manifest.board_name(),
        manifest.version
    );

    // ------------------------------------------------------------
    // Graceful shutdown
    // ------------------------------------------------------------
    let sleep = Arc::new(SleepEvent::new());
    {
        let s = sleep.clone();
        ctrlc::set_handler(move || {
            info!("\n[preview] shutdown requested");
            s.set();
        })?;
    }

    // ------------------------------------------------------------
    // Board
    // ------------------------------------------------------------
    let layouts = FileLayouts::load_or_empty(".", width, height);
    let matrix = TermMatrix::new(width, height);

    let ctx = BoardContext {
        manifest,
        config: cfg,
        font: Box::new(TermFont),
        layouts: Box::new(layouts),
        data_dir: PathBuf::from("."),
    };

    let mut board: Box<dyn Board> =
        Box::new(DadJokesBoard::new(ctx, Box::new(matrix), sleep.clone()));

    // ------------------------------------------------------------
    // Render loop
    // ------------------------------------------------------------
    info!("[preview] {}x{} – Ctrl+C to stop", width, height);

    while !sleep.is_set() {
        if let Err(e) = board.render() {
            error!("[preview] render error: {}", e);
        }
    }

    info!("[preview] shutdown complete");
    Ok(())
}

// Largest panel the preview will emulate per dimension.
const MAX_DISPLAY_DIM: u32 = 1024;

fn parse_display_size(arg: Option<String>) -> anyhow::Result<(u32, u32)> {
    let Some(arg) = arg else {
        return Ok((64, 32));
    };
    let (w, h) = arg
        .split_once('x')
        .with_context(|| format!("display size '{}' should look like 64x32", arg))?;
    let width: u32 = w.trim().parse()?;
    let height: u32 = h.trim().parse()?;
    if width == 0 || height == 0 {
        anyhow::bail!("display size '{}' has a zero dimension", arg);
    }
    if width > MAX_DISPLAY_DIM || height > MAX_DISPLAY_DIM {
        anyhow::bail!(
            "display size '{}' exceeds the {}x{} preview limit",
            arg,
            MAX_DISPLAY_DIM,
            MAX_DISPLAY_DIM
        );
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_size_defaults_to_64x32() {
        assert_eq!(parse_display_size(None).unwrap(), (64, 32));
    }

    #[test]
    fn display_size_parses_width_x_height() {
        assert_eq!(parse_display_size(Some("128x64".into())).unwrap(), (128, 64));
        assert_eq!(parse_display_size(Some(" 64 x 32 ".into())).unwrap(), (64, 32));
    }

    #[test]
    fn display_size_rejects_garbage_and_zero() {
        assert!(parse_display_size(Some("64".into())).is_err());
        assert!(parse_display_size(Some("64xA".into())).is_err());
        assert!(parse_display_size(Some("0x32".into())).is_err());
    }

    #[test]
    fn display_size_rejects_oversized_panels() {
        assert!(parse_display_size(Some("100000x100000".into())).is_err());
        assert!(parse_display_size(Some("64x2000".into())).is_err());
        assert!(parse_display_size(Some("1024x1024".into())).is_ok());
    }
}
