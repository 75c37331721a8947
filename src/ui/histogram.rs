/// Luminance histogram
/// Draws the 256 grayscale buckets of the current image as white bars
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

/// Histogram widget size, in logical pixels
pub const HISTOGRAM_WIDTH: f32 = 274.0;
pub const HISTOGRAM_HEIGHT: f32 = 160.0;

/// Histogram data structure
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Pixel count per luminance level
    pub data: [u32; 256],
}

impl Histogram {
    /// Bar heights scaled so the tallest bucket fills `height`
    pub fn bar_heights(&self, height: f32) -> [f32; 256] {
        let mut bars = [0.0; 256];
        let max_value = self.data.iter().copied().max().unwrap_or(0) as f32;
        if max_value < 1.0 {
            return bars;
        }
        for (bar, &count) in bars.iter_mut().zip(self.data.iter()) {
            *bar = count as f32 / max_value * height;
        }
        bars
    }
}

impl<Message> canvas::Program<Message> for Histogram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let height = bounds.height;
        let bar_width = bounds.width / 256.0;

        let mut path_builder = canvas::path::Builder::new();
        for (i, bar_height) in self.bar_heights(height).into_iter().enumerate() {
            if bar_height > 0.0 {
                let x = i as f32 * bar_width;
                path_builder.move_to(Point::new(x, height));
                path_builder.line_to(Point::new(x, height - bar_height));
            }
        }

        let path: Path = path_builder.build();
        frame.stroke(
            &path,
            Stroke::default()
                .with_color(Color::WHITE)
                .with_width(bar_width.max(1.0)),
        );

        vec![frame.into_geometry()]
    }
}
