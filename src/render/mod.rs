//! Layered raster rendering of the control chart.
//!
//! Two off-screen layers — control-limit overlay ("quality") below, series
//! line ("data") above — each draw onto a fresh buffer and are composited
//! onto the visible surface in that fixed z-order; the grid and axis labels
//! are then drawn directly on the surface. A render either completes in full
//! or leaves the surface untouched; there is no partial draw.

mod layers;
pub mod style;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use std::sync::Once;

use crate::limits::ControlLimits;
use crate::models::{ChartError, ChartType, Dataset};
use crate::scale::{BandScale, DEFAULT_BAND_PADDING, LinearScale};
use layers::{LayerContext, draw_data_layer, draw_grid_layer, draw_quality_layer};

/// Logical surface width in pixels.
pub const WIDTH: u32 = 1000;
/// Logical surface height in pixels.
pub const HEIGHT: u32 = 450;
/// Gap between the plot area and the surface edge, on all sides.
pub const PADDING: u32 = 50;

const BACKGROUND: u8 = 0xff;

/// One-time registration of the bundled fonts for the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Bold,
            include_bytes!("../../assets/DejaVuSans-Bold.ttf"),
        );
    });
}

/// The visible pixel surface: a fixed-size RGB8 buffer, cleared and redrawn
/// in full on every successful render.
pub struct Surface {
    data: Vec<u8>,
}

impl Surface {
    pub fn new() -> Self {
        Self {
            data: vec![BACKGROUND; (WIDTH * HEIGHT * 3) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        WIDTH
    }

    pub fn height(&self) -> u32 {
        HEIGHT
    }

    /// Raw RGB8 pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn clear(&mut self) {
        self.data.fill(BACKGROUND);
    }

    /// Copy every pixel of `layer` that differs from the background onto the
    /// surface; background pixels act as transparency.
    fn composite(&mut self, layer: &[u8]) {
        for (dst, src) in self.data.chunks_exact_mut(3).zip(layer.chunks_exact(3)) {
            if src != [BACKGROUND, BACKGROUND, BACKGROUND] {
                dst.copy_from_slice(src);
            }
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a render pass drew onto the surface or skipped as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    Skipped,
}

/// An off-screen layer: draws onto a fresh buffer from the shared context.
type LayerFn =
    for<'a, 'b, 'c, 'd> fn(&'a DrawingArea<BitMapBackend<'b>, Shift>, &'c LayerContext<'d>)
        -> Result<(), ChartError>;

/// Render one control chart for `group` onto `surface`.
///
/// The whole surface is redrawn. When the group key has no category list the
/// render is a no-op (`Skipped`) and prior surface contents persist; a
/// category referencing a missing data row aborts with
/// [`ChartError::RowNotFound`] before the surface is touched.
pub fn render(
    dataset: &Dataset,
    group: &str,
    chart_type: ChartType,
    surface: &mut Surface,
) -> Result<RenderOutcome, ChartError> {
    let Some(series) = dataset.series_for(group)? else {
        return Ok(RenderOutcome::Skipped);
    };
    ensure_fonts_registered();

    let limits = ControlLimits::for_chart(chart_type, &series.values);

    // Vertical domain is the sample extended by the limit band so the limit
    // lines always fall inside the plot, even when the data never nears them.
    let min_y = series.values.iter().copied().fold(limits.lcl, f64::min);
    let max_y = series.values.iter().copied().fold(limits.ucl, f64::max);

    let x = BandScale::new(
        series.labels.clone(),
        (PADDING as f64, (WIDTH - PADDING) as f64),
        DEFAULT_BAND_PADDING,
    );
    let y = LinearScale::new((min_y, max_y), ((HEIGHT - PADDING) as f64, PADDING as f64));

    let ctx = LayerContext {
        series: &series,
        limits,
        chart_type,
        x,
        y,
        min_y,
        max_y,
    };

    // Off-screen layers in compositing order: quality below, data above.
    let layer_fns: [LayerFn; 2] = [draw_quality_layer, draw_data_layer];

    surface.clear();
    for draw_layer in layer_fns {
        let mut buf = vec![BACKGROUND; (WIDTH * HEIGHT * 3) as usize];
        {
            let area = BitMapBackend::with_buffer(&mut buf, (WIDTH, HEIGHT)).into_drawing_area();
            draw_layer(&area, &ctx)?;
            area.present()
                .map_err(|e| ChartError::Draw(format!("{e:?}")))?;
        }
        surface.composite(&buf);
    }

    // Grid and axis labels go straight onto the visible surface, above the
    // composited layers.
    {
        let area =
            BitMapBackend::with_buffer(&mut surface.data, (WIDTH, HEIGHT)).into_drawing_area();
        draw_grid_layer(&area, &ctx)?;
        area.present()
            .map_err(|e| ChartError::Draw(format!("{e:?}")))?;
    }

    Ok(RenderOutcome::Drawn)
}
