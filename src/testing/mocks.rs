use std::sync::{Arc, Mutex};

use embedded_graphics::pixelcolor::Rgb888;

use crate::error::{BoardError, BoardResult};
use crate::layout::{BoardLayout, LayoutSource};
use crate::surface::{DrawSurface, FontMetrics};

/// Everything a `MockMatrix` was asked to draw, in call order.
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub clears: usize,
    pub presents: usize,
    pub texts: Vec<TextOp>,
}

impl SurfaceLog {
    /// Text ops recorded for one piece of text.
    pub fn texts_matching(&self, needle: &str) -> Vec<TextOp> {
        self.texts
            .iter()
            .filter(|op| op.text == needle)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Rgb888,
    pub centered: bool,
}

/// Records draw calls instead of lighting pixels.
pub struct MockMatrix {
    width: u32,
    height: u32,
    log: Arc<Mutex<SurfaceLog>>,
}

impl MockMatrix {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_log(width, height).0
    }

    pub fn with_log(width: u32, height: u32) -> (Self, Arc<Mutex<SurfaceLog>>) {
        let log = Arc::new(Mutex::new(SurfaceLog::default()));
        (
            Self {
                width,
                height,
                log: log.clone(),
            },
            log,
        )
    }
}

impl DrawSurface for MockMatrix {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) -> BoardResult<()> {
        self.log.lock().expect("lock surface log").clears += 1;
        Ok(())
    }

    fn present(&mut self) -> BoardResult<()> {
        self.log.lock().expect("lock surface log").presents += 1;
        Ok(())
    }

    fn draw_text(&mut self, position: (i32, i32), text: &str, color: Rgb888) -> BoardResult<()> {
        self.log.lock().expect("lock surface log").texts.push(TextOp {
            x: position.0,
            y: position.1,
            text: text.to_string(),
            color,
            centered: false,
        });
        Ok(())
    }

    fn draw_text_centered(&mut self, y: i32, text: &str, color: Rgb888) -> BoardResult<()> {
        self.log.lock().expect("lock surface log").texts.push(TextOp {
            x: 0,
            y,
            text: text.to_string(),
            color,
            centered: true,
        });
        Ok(())
    }
}

/// Measures every char at a fixed width, like a strict mono font.
pub struct FixedWidthFont(pub u32);

impl FontMetrics for FixedWidthFont {
    fn text_width(&self, text: &str) -> BoardResult<u32> {
        Ok(text.chars().count() as u32 * self.0)
    }
}

/// Always fails to measure, for exercising the estimated-width path.
pub struct FailingFont;

impl FontMetrics for FailingFont {
    fn text_width(&self, _text: &str) -> BoardResult<u32> {
        Err(BoardError::surface("font has no metrics"))
    }
}

/// Hands every board the same layout, or none at all.
pub struct StaticLayouts {
    layout: Option<BoardLayout>,
}

impl StaticLayouts {
    pub fn none() -> Self {
        Self { layout: None }
    }

    pub fn with(layout: BoardLayout) -> Self {
        Self {
            layout: Some(layout),
        }
    }
}

impl LayoutSource for StaticLayouts {
    fn board_layout(&self, _board_id: &str) -> Option<BoardLayout> {
        self.layout.clone()
    }
}
