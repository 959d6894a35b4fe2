// src/board.rs

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use log::{debug, error, info, warn};

use crate::cache::{JokeCache, JokeRecord};
use crate::client::{FALLBACK_JOKE, JokeClient};
use crate::config::BoardConfig;
use crate::error::BoardResult;
use crate::layout::{LayoutRegion, LayoutSource};
use crate::manifest::PluginManifest;
use crate::surface::{DrawSurface, FontMetrics, parse_color};
use crate::wait::SleepEvent;

pub const BOARD_ID: &str = "dad_jokes";

const HEADER_TEXT: &str = "DAD JOKE";
const HEADER_Y: i32 = 2;
const JOKE_Y_UNDER_HEADER: i32 = 12;
const JOKE_Y_PLAIN: i32 = 8;
const FALLBACK_CHAR_WIDTH: u32 = 6; // rough estimate when the font can't measure

/// What the host rotation drives. One `render()` call shows the board once
/// and returns; the host decides when it runs again.
pub trait Board: Send {
    fn board_id(&self) -> &str;
    fn render(&mut self) -> BoardResult<()>;
}

/// Everything the host supplies to a board at construction.
pub struct BoardContext {
    pub manifest: PluginManifest,
    pub config: BoardConfig,
    pub font: Box<dyn FontMetrics>,
    pub layouts: Box<dyn LayoutSource>,
    /// Directory the cache file lives in.
    pub data_dir: PathBuf,
}

pub struct DadJokesBoard {
    name: String,
    version: String,
    config: BoardConfig,
    text_color: Rgb888,
    record: JokeRecord,
    client: JokeClient,
    cache: JokeCache,
    font: Box<dyn FontMetrics>,
    layouts: Box<dyn LayoutSource>,
    matrix: Box<dyn DrawSurface>,
    sleep: Arc<SleepEvent>,
}

// Resolved once per render and reused by every scroll frame.
struct Placement {
    header: Option<HeaderPlacement>,
    joke_y: i32,
    joke_region: Option<LayoutRegion>,
}

enum HeaderPlacement {
    Region(LayoutRegion),
    Centered,
}

impl DadJokesBoard {
    pub fn new(ctx: BoardContext, matrix: Box<dyn DrawSurface>, sleep: Arc<SleepEvent>) -> Self {
        Self::with_client(ctx, JokeClient::new(), matrix, sleep)
    }

    /// Same as `new`, with the API endpoint under the caller's control.
    pub fn with_client(
        ctx: BoardContext,
        client: JokeClient,
        matrix: Box<dyn DrawSurface>,
        sleep: Arc<SleepEvent>,
    ) -> Self {
        let cache = JokeCache::in_dir(&ctx.data_dir);
        let record = match cache.load() {
            Ok(record) => record,
            Err(e) => {
                warn!("[dad_jokes] {}, starting with an empty cache", e);
                JokeRecord::default()
            }
        };

        let text_color = parse_color(&ctx.config.text_color).unwrap_or_else(|| {
            warn!(
                "[dad_jokes] unknown text_color '{}', using yellow",
                ctx.config.text_color
            );
            Rgb888::YELLOW
        });

        let name = ctx.manifest.board_name().to_string();
        let version = ctx.manifest.version.clone();
        info!("[dad_jokes] board initialized (v{}) – name: {}", version, name);

        Self {
            name,
            version,
            config: ctx.config,
            text_color,
            record,
            client,
            cache,
            font: ctx.font,
            layouts: ctx.layouts,
            matrix,
            sleep,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn current_joke(&self) -> Option<&str> {
        self.record.joke.as_deref()
    }

    /// Refreshes the joke when the cached one has gone stale. Network and
    /// cache failures are logged here and never reach the render loop.
    pub fn maybe_refresh(&mut self) {
        let now = Utc::now();
        if !refresh_due(&self.record, self.config.refresh_interval(), now) {
            return;
        }

        match self.record.last_fetch {
            Some(last) => {
                let hours = (now - last).num_minutes() as f64 / 60.0;
                info!("[dad_jokes] last fetch {:.1}h ago, fetching new joke", hours);
            }
            None => info!("[dad_jokes] fetching new joke"),
        }

        match self.client.fetch() {
            Ok(joke) => {
                info!("[dad_jokes] fetched: {}…", preview(&joke));
                self.record.joke = Some(joke);
                self.record.last_fetch = Some(Utc::now());
                if let Err(e) = self.cache.save(&self.record) {
                    warn!("[dad_jokes] {}", e);
                }
            }
            Err(e) => {
                error!("[dad_jokes] fetch failed: {}", e);
                if self.record.joke.is_none() {
                    info!("[dad_jokes] using fallback joke");
                    // no last_fetch stamp, so the next render retries
                    self.record.joke = Some(FALLBACK_JOKE.to_string());
                    if let Err(e) = self.cache.save(&self.record) {
                        warn!("[dad_jokes] {}", e);
                    }
                }
            }
        }
    }

    fn placement(&self) -> Placement {
        let layout = self.layouts.board_layout(BOARD_ID);
        let header_region = layout.as_ref().and_then(|l| l.region("header").cloned());
        let joke_region = layout.as_ref().and_then(|l| l.region("joke").cloned());
        let layout_joke_y = joke_region.as_ref().and_then(|r| r.position).map(|(_, y)| y);

        let mut header = None;
        let mut joke_y = JOKE_Y_PLAIN;

        if self.config.show_header && header_region.is_some() {
            header = header_region.map(HeaderPlacement::Region);
            joke_y = layout_joke_y.unwrap_or(JOKE_Y_UNDER_HEADER);
        } else if self.config.show_header {
            header = Some(HeaderPlacement::Centered);
            joke_y = JOKE_Y_UNDER_HEADER;
        } else if let Some(y) = layout_joke_y {
            joke_y = y;
        }

        Placement {
            header,
            joke_y,
            joke_region,
        }
    }

    fn measured_width(&self, text: &str) -> u32 {
        match self.font.text_width(text) {
            Ok(width) => width,
            Err(e) => {
                warn!("[dad_jokes] text measure failed ({}), estimating", e);
                text.chars().count() as u32 * FALLBACK_CHAR_WIDTH
            }
        }
    }

    fn draw_header(&mut self, placement: &Placement) -> BoardResult<()> {
        match &placement.header {
            Some(HeaderPlacement::Region(region)) => {
                self.matrix
                    .draw_text_region(region, HEADER_Y, HEADER_TEXT, Rgb888::WHITE)
            }
            Some(HeaderPlacement::Centered) => {
                self.matrix
                    .draw_text_centered(HEADER_Y, HEADER_TEXT, Rgb888::WHITE)
            }
            None => Ok(()),
        }
    }

    fn show_static(&mut self, joke: &str, placement: &Placement) -> BoardResult<()> {
        self.draw_header(placement)?;
        match &placement.joke_region {
            Some(region) => {
                self.matrix
                    .draw_text_region(region, placement.joke_y, joke, self.text_color)?
            }
            None => self
                .matrix
                .draw_text_centered(placement.joke_y, joke, self.text_color)?,
        }
        self.matrix.present()?;
        self.sleep.wait_timeout(self.config.display_duration());
        Ok(())
    }

    /// Marquee pass: x runs from the display width down to -text_width
    /// inclusive, one pixel per frame, every frame followed by an
    /// interruptible wait.
    fn scroll_text(&mut self, joke: &str, text_width: u32, placement: &Placement) -> BoardResult<()> {
        let text_width = text_width as i32;
        let mut x = self.matrix.width() as i32;

        while x >= -text_width {
            if self.sleep.is_set() {
                break;
            }

            self.matrix.clear()?;
            self.draw_header(placement)?;
            self.matrix
                .draw_text((x, placement.joke_y), joke, self.text_color)?;
            self.matrix.present()?;

            x -= 1;
            self.sleep.wait_timeout(self.config.scroll_delay());
        }

        Ok(())
    }
}

impl Board for DadJokesBoard {
    fn board_id(&self) -> &str {
        BOARD_ID
    }

    fn render(&mut self) -> BoardResult<()> {
        self.maybe_refresh();

        let Some(joke) = self.record.joke.clone() else {
            error!("[dad_jokes] no joke available to display");
            return Ok(());
        };

        self.matrix.clear()?;

        let placement = self.placement();
        let width = self.measured_width(&joke);

        if width > self.matrix.width() {
            debug!(
                "[dad_jokes] scrolling ({}px on a {}px display)",
                width,
                self.matrix.width()
            );
            self.scroll_text(&joke, width, &placement)
        } else {
            self.show_static(&joke, &placement)
        }
    }
}

fn refresh_due(record: &JokeRecord, interval: chrono::Duration, now: DateTime<Utc>) -> bool {
    if record.joke.is_none() {
        return true;
    }
    let Some(last_fetch) = record.last_fetch else {
        return true;
    };
    now - last_fetch >= interval
}

fn preview(joke: &str) -> String {
    joke.chars().take(50).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn empty_record_is_due() {
        let record = JokeRecord::default();
        assert!(refresh_due(&record, Duration::hours(1), Utc::now()));
    }

    #[test]
    fn unstamped_joke_is_due() {
        let record = JokeRecord {
            joke: Some("x".into()),
            last_fetch: None,
        };
        assert!(refresh_due(&record, Duration::hours(1), Utc::now()));
    }

    #[test]
    fn fresh_joke_is_not_due() {
        let now = Utc::now();
        let record = JokeRecord {
            joke: Some("x".into()),
            last_fetch: Some(now - Duration::minutes(10)),
        };
        assert!(!refresh_due(&record, Duration::hours(1), now));
    }

    #[test]
    fn stale_joke_is_due() {
        let now = Utc::now();
        let record = JokeRecord {
            joke: Some("x".into()),
            last_fetch: Some(now - Duration::hours(1) - Duration::seconds(1)),
        };
        assert!(refresh_due(&record, Duration::hours(1), now));
    }

    #[test]
    fn exactly_at_the_interval_is_due() {
        let now = Utc::now();
        let record = JokeRecord {
            joke: Some("x".into()),
            last_fetch: Some(now - Duration::hours(1)),
        };
        assert!(refresh_due(&record, Duration::hours(1), now));
    }

    #[test]
    fn preview_truncates_long_jokes() {
        let long = "a".repeat(80);
        assert_eq!(preview(&long).chars().count(), 50);
        assert_eq!(preview("short"), "short");
    }
}
