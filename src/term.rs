//! Terminal-emulated LED matrix for running the board without hardware.
//!
//! Frames land in an in-memory framebuffer and `present()` paints them as
//! ANSI half-blocks (two pixel rows per text line), so a 64x32 panel fits
//! in a normal terminal window.

use std::convert::Infallible;
use std::io::Write;

use embedded_graphics::Pixel;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::error::{BoardError, BoardResult};
use crate::surface::{DrawSurface, FontMetrics};

pub struct TermMatrix {
    width: u32,
    height: u32,
    framebuffer: Vec<Rgb888>,
    first_frame: bool,
}

impl TermMatrix {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            framebuffer: vec![Rgb888::BLACK; (width * height) as usize],
            first_frame: true,
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb888 {
        self.framebuffer[(y * self.width + x) as usize]
    }

    fn style(color: Rgb888) -> MonoTextStyle<'static, Rgb888> {
        MonoTextStyle::new(&FONT_6X10, color)
    }
}

impl OriginDimensions for TermMatrix {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for TermMatrix {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.width
                && (point.y as u32) < self.height
            {
                let idx = point.y as usize * self.width as usize + point.x as usize;
                self.framebuffer[idx] = color;
            }
        }
        Ok(())
    }
}

impl DrawSurface for TermMatrix {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) -> BoardResult<()> {
        self.framebuffer.fill(Rgb888::BLACK);
        Ok(())
    }

    fn present(&mut self) -> BoardResult<()> {
        let mut out = String::with_capacity(
            (self.width as usize * 24 + 8) * (self.height as usize / 2 + 1),
        );
        if self.first_frame {
            out.push_str("\x1b[2J");
            self.first_frame = false;
        }
        out.push_str("\x1b[H");

        // Two pixel rows per terminal line: foreground paints the top
        // pixel, background the bottom one.
        let mut y = 0;
        while y < self.height {
            for x in 0..self.width {
                let top = self.pixel(x, y);
                let bottom = if y + 1 < self.height {
                    self.pixel(x, y + 1)
                } else {
                    Rgb888::BLACK
                };
                out.push_str(&format!(
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.r(),
                    top.g(),
                    top.b(),
                    bottom.r(),
                    bottom.g(),
                    bottom.b()
                ));
            }
            out.push_str("\x1b[0m\n");
            y += 2;
        }

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(out.as_bytes())
            .map_err(|e| BoardError::surface(e.to_string()))?;
        stdout
            .flush()
            .map_err(|e| BoardError::surface(e.to_string()))
    }

    fn draw_text(&mut self, position: (i32, i32), text: &str, color: Rgb888) -> BoardResult<()> {
        let style = Self::style(color);
        Text::with_baseline(text, Point::new(position.0, position.1), style, Baseline::Top)
            .draw(self)
            .map_err(|e| match e {})?;
        Ok(())
    }

    fn draw_text_centered(&mut self, y: i32, text: &str, color: Rgb888) -> BoardResult<()> {
        let style = Self::style(color);
        let text_width = style
            .measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box
            .size
            .width;
        let x = (self.width as i32 - text_width as i32) / 2;
        self.draw_text((x, y), text, color)
    }
}

/// Metrics for the font `TermMatrix` draws with.
pub struct TermFont;

impl FontMetrics for TermFont {
    fn text_width(&self, text: &str) -> BoardResult<u32> {
        let style = TermMatrix::style(Rgb888::WHITE);
        Ok(style
            .measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box
            .size
            .width)
    }
}
