//! Progress overview image renderer
//!
//! Renders a loading run as a single PNG: a bold title naming the truck, the
//! capacity limits, and a grid table with one row per accepted item. Image
//! height grows linearly with the number of ledger rows; column widths fit
//! the widest cell. Text is drawn with embedded-graphics mono fonts, so no
//! font assets are needed.

use crate::domain::service::LoadingRun;
use crate::error::{Error, Result};
use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_9X15, FONT_9X15_BOLD},
        MonoTextStyle,
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use image::{ImageFormat, Rgb, RgbImage};
use std::convert::Infallible;
use std::path::Path;

const MARGIN: i32 = 24;
const CELL_PAD: i32 = 10;
const HEADER_ROW_HEIGHT: i32 = 30;
const BODY_ROW_HEIGHT: i32 = 26;
const TITLE_BAND_HEIGHT: i32 = 72;
const MIN_WIDTH: i32 = 720;

const INK: Rgb888 = Rgb888::BLACK;
const HEADER_FILL: Rgb888 = Rgb888::new(225, 225, 225);

const HEADERS: [&str; 8] = [
    "Step",
    "Item",
    "Weight",
    "Volume",
    "Current Weight",
    "Current Volume",
    "Filled Capacity",
    "Action",
];

/// Render the progress image for a run, overwriting `output_path`.
///
/// The file is written atomically: the PNG is encoded into a temporary file
/// in the destination directory and only then moved over the output path, so
/// a failed encode never leaves a partial artifact behind. An empty ledger
/// still produces an image with a header-only table.
pub fn render_progress_image(run: &LoadingRun, output_path: &Path) -> Result<()> {
    let rows = cell_rows(run);
    let char_width = FONT_9X15.character_size.width as i32;
    let widths = column_widths(&rows, char_width);
    let table_width: i32 = widths.iter().sum();

    let width = (table_width + MARGIN * 2).max(MIN_WIDTH);
    let height =
        MARGIN + TITLE_BAND_HEIGHT + HEADER_ROW_HEIGHT + BODY_ROW_HEIGHT * rows.len() as i32 + MARGIN;

    let mut canvas = Canvas::new(width as u32, height as u32);
    draw_title(&mut canvas, run, width);
    draw_table(
        &mut canvas,
        &rows,
        &widths,
        (width - table_width) / 2,
        MARGIN + TITLE_BAND_HEIGHT,
    );

    save_atomically(&canvas.img, output_path)
}

fn cell_rows(run: &LoadingRun) -> Vec<[String; 8]> {
    run.ledger
        .iter()
        .map(|entry| {
            [
                entry.step.to_string(),
                entry.item.clone(),
                entry.weight.to_string(),
                entry.volume.to_string(),
                entry.current_weight.to_string(),
                entry.current_volume.to_string(),
                entry.filled_capacity.clone(),
                entry.action.clone(),
            ]
        })
        .collect()
}

fn column_widths(rows: &[[String; 8]], char_width: i32) -> [i32; 8] {
    let mut chars = [0i32; 8];
    for (slot, header) in chars.iter_mut().zip(HEADERS.iter()) {
        *slot = header.len() as i32;
    }
    for row in rows {
        for (slot, cell) in chars.iter_mut().zip(row.iter()) {
            *slot = (*slot).max(cell.len() as i32);
        }
    }
    chars.map(|count| count * char_width + CELL_PAD * 2)
}

fn draw_title(canvas: &mut Canvas, run: &LoadingRun, width: i32) {
    let title = format!("Truck Progress Overview for Truck ID {}", run.vehicle_id);
    let title_style = MonoTextStyle::new(&FONT_10X20, INK);
    let title_width = title.len() as i32 * FONT_10X20.character_size.width as i32;
    let x = (width - title_width) / 2;
    drawn(Text::with_baseline(&title, Point::new(x, MARGIN), title_style, Baseline::Top).draw(canvas));
    // Redraw one pixel right for a bold title
    drawn(
        Text::with_baseline(&title, Point::new(x + 1, MARGIN), title_style, Baseline::Top)
            .draw(canvas),
    );

    let annotation = format!(
        "Max Weight = {} kg   Max Volume = {} cu units",
        run.profile.max_weight, run.profile.max_volume
    );
    let annotation_style = MonoTextStyle::new(&FONT_9X15, INK);
    let annotation_width = annotation.len() as i32 * FONT_9X15.character_size.width as i32;
    drawn(
        Text::with_baseline(
            &annotation,
            Point::new(width - MARGIN - annotation_width, MARGIN + 32),
            annotation_style,
            Baseline::Top,
        )
        .draw(canvas),
    );
}

fn draw_table(canvas: &mut Canvas, rows: &[[String; 8]], widths: &[i32; 8], x0: i32, y0: i32) {
    let table_width: i32 = widths.iter().sum();
    let table_height = HEADER_ROW_HEIGHT + BODY_ROW_HEIGHT * rows.len() as i32;

    // Shaded header band
    drawn(
        Rectangle::new(
            Point::new(x0, y0),
            Size::new(table_width as u32, HEADER_ROW_HEIGHT as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(HEADER_FILL))
        .draw(canvas),
    );

    let header_style = MonoTextStyle::new(&FONT_9X15_BOLD, INK);
    let body_style = MonoTextStyle::new(&FONT_9X15, INK);
    let char_width = FONT_9X15.character_size.width as i32;

    let mut x = x0;
    for (header, cell_width) in HEADERS.iter().zip(widths.iter()) {
        draw_centered(canvas, header, header_style, x, y0, *cell_width, HEADER_ROW_HEIGHT, char_width);
        x += cell_width;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let y = y0 + HEADER_ROW_HEIGHT + BODY_ROW_HEIGHT * row_idx as i32;
        let mut x = x0;
        for (cell, cell_width) in row.iter().zip(widths.iter()) {
            draw_centered(canvas, cell, body_style, x, y, *cell_width, BODY_ROW_HEIGHT, char_width);
            x += cell_width;
        }
    }

    // Grid lines
    let stroke = PrimitiveStyle::with_stroke(INK, 1);
    let mut x = x0;
    drawn(
        Line::new(Point::new(x, y0), Point::new(x, y0 + table_height))
            .into_styled(stroke)
            .draw(canvas),
    );
    for cell_width in widths {
        x += cell_width;
        drawn(
            Line::new(Point::new(x, y0), Point::new(x, y0 + table_height))
                .into_styled(stroke)
                .draw(canvas),
        );
    }

    let mut y = y0;
    drawn(
        Line::new(Point::new(x0, y), Point::new(x0 + table_width, y))
            .into_styled(stroke)
            .draw(canvas),
    );
    y += HEADER_ROW_HEIGHT;
    for _ in 0..=rows.len() {
        drawn(
            Line::new(Point::new(x0, y), Point::new(x0 + table_width, y))
                .into_styled(stroke)
                .draw(canvas),
        );
        y += BODY_ROW_HEIGHT;
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_centered(
    canvas: &mut Canvas,
    text: &str,
    style: MonoTextStyle<'_, Rgb888>,
    x: i32,
    y: i32,
    cell_width: i32,
    cell_height: i32,
    char_width: i32,
) {
    let text_width = text.len() as i32 * char_width;
    let text_height = style.font.character_size.height as i32;
    let tx = x + (cell_width - text_width) / 2;
    let ty = y + (cell_height - text_height) / 2;
    drawn(Text::with_baseline(text, Point::new(tx, ty), style, Baseline::Top).draw(canvas));
}

fn save_atomically(img: &RgbImage, output_path: &Path) -> Result<()> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = tempfile::NamedTempFile::new_in(dir)?;
    img.save_with_format(tmp.path(), ImageFormat::Png)?;
    tmp.persist(output_path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// In-memory RGB canvas bridging embedded-graphics onto an image buffer
struct Canvas {
    img: RgbImage,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, Rgb([255, 255, 255])),
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.img.width(), self.img.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> std::result::Result<(), Infallible>
    where
        I: IntoIterator<Item = Pixel<Rgb888>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                let (x, y) = (point.x as u32, point.y as u32);
                if x < self.img.width() && y < self.img.height() {
                    self.img.put_pixel(x, y, Rgb([color.r(), color.g(), color.b()]));
                }
            }
        }
        Ok(())
    }
}

/// Drawing onto [`Canvas`] cannot fail; collapse the infallible result
fn drawn<T>(result: std::result::Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CapacityProfile;
    use crate::domain::service::{LedgerEntry, RunOutcome};
    use chrono::Utc;
    use tempfile::tempdir;

    fn run_with_rows(rows: u32) -> LoadingRun {
        let mut ledger = Vec::new();
        let mut current_weight = 0.0;
        let mut current_volume = 0;
        for step in 1..=rows {
            current_weight += 100.0;
            current_volume += 1000;
            ledger.push(LedgerEntry {
                step,
                item: format!("item-{}", step),
                weight: 100.0,
                volume: 1000,
                current_weight,
                current_volume,
                filled_capacity: format!(
                    "{:.2}% Weight, {:.2}% Volume",
                    current_weight / 10.0,
                    current_volume as f64 / 200.0
                ),
                action: "load".to_string(),
            });
        }

        LoadingRun {
            vehicle_id: "325101".to_string(),
            profile: CapacityProfile {
                max_weight: 1000.0,
                max_volume: 20000,
            },
            ledger,
            current_weight,
            current_volume,
            outcome: RunOutcome::Completed,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_renders_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overview.png");

        render_progress_image(&run_with_rows(3), &path).unwrap();

        assert!(path.exists());
        let decoded = image::open(&path).unwrap();
        assert!(decoded.width() >= MIN_WIDTH as u32);
    }

    #[test]
    fn test_empty_ledger_still_produces_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overview.png");

        render_progress_image(&run_with_rows(0), &path).unwrap();

        assert!(path.exists());
        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn test_height_scales_with_row_count() {
        let dir = tempdir().unwrap();
        let short_path = dir.path().join("short.png");
        let tall_path = dir.path().join("tall.png");

        render_progress_image(&run_with_rows(1), &short_path).unwrap();
        render_progress_image(&run_with_rows(8), &tall_path).unwrap();

        let short = image::open(&short_path).unwrap();
        let tall = image::open(&tall_path).unwrap();
        assert_eq!(
            tall.height() - short.height(),
            7 * BODY_ROW_HEIGHT as u32
        );
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overview.png");
        std::fs::write(&path, b"not a png").unwrap();

        render_progress_image(&run_with_rows(2), &path).unwrap();

        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("overview.png");

        let err = render_progress_image(&run_with_rows(1), &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
