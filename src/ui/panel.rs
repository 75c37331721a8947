/// Side panel: key guide, histogram, dimensions and the EXIF table
use iced::widget::{canvas, column, row, text, Column};
use iced::Length;

use super::histogram::{Histogram, HISTOGRAM_HEIGHT, HISTOGRAM_WIDTH};
use super::preview::dimensions_label;
use crate::state::data::{Binding, ExifFields, FIELD_NAMES};

/// Width of the whole panel
pub const PANEL_WIDTH: f32 = 289.0;

/// "Key Guide:" followed by one line per destination
pub fn key_guide<'a, Message: 'a>(bindings: &[Binding]) -> Column<'a, Message> {
    bindings.iter().fold(
        column![text("Key Guide:")].spacing(4),
        |col, b| col.push(text(format!("  {}: {}", b.key, b.label))),
    )
}

/// Histogram, dimension line and EXIF table for the current image.
/// Every part renders empty when there is nothing to show.
pub fn metadata<'a, Message: 'a>(
    histogram: Option<&Histogram>,
    dimensions: Option<(u32, u32)>,
    fields: Option<&ExifFields>,
) -> Column<'a, Message> {
    let histogram = histogram.cloned().unwrap_or(Histogram { data: [0; 256] });
    let dimensions = dimensions
        .map(|(w, h)| dimensions_label(w, h))
        .unwrap_or_default();

    let values: Vec<String> = match fields {
        Some(fields) => fields.entries().iter().map(|(_, v)| v.to_string()).collect(),
        None => vec![String::new(); FIELD_NAMES.len()],
    };

    let table = FIELD_NAMES.iter().zip(values).fold(
        column![].spacing(2),
        |col, (name, value)| {
            col.push(row![
                text(format!("{name}:")).width(Length::FillPortion(1)),
                text(value).width(Length::FillPortion(1)),
            ])
        },
    );

    column![
        text("Metadata:"),
        canvas(histogram)
            .width(Length::Fixed(HISTOGRAM_WIDTH))
            .height(Length::Fixed(HISTOGRAM_HEIGHT)),
        text(dimensions),
        table,
    ]
    .spacing(6)
}
