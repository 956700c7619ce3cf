//! The individual draw layers.
//!
//! Each layer receives a fresh drawing area plus the shared scale/limit
//! context and knows nothing about the others; the renderer owns the
//! compositing order.

use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;

use super::style::{
    AXIS_TEXT, CL_COLOR, DATA_LINE, GRID_COLOR, LCL_COLOR, UCL_COLOR, format_millions, label_font,
    limit_font,
};
use super::{HEIGHT, PADDING, WIDTH};
use crate::limits::ControlLimits;
use crate::models::{ChartError, ChartType, Series};
use crate::scale::{BandScale, LinearScale};

/// Guide-line steps on the Y axis (six lines at five even intervals).
const GRID_STEPS: u32 = 5;

/// Read-only context shared by every layer for one render pass.
pub(super) struct LayerContext<'a> {
    pub series: &'a Series,
    pub limits: ControlLimits,
    pub chart_type: ChartType,
    pub x: BandScale,
    pub y: LinearScale,
    pub min_y: f64,
    pub max_y: f64,
}

fn draw_err(e: impl std::fmt::Debug) -> ChartError {
    ChartError::Draw(format!("{e:?}"))
}

/// Series polyline, point markers, and per-point value labels.
pub(super) fn draw_data_layer(
    area: &DrawingArea<BitMapBackend, Shift>,
    ctx: &LayerContext,
) -> Result<(), ChartError> {
    // Labels come from the same vector the scale's domain was built from, so
    // every lookup resolves.
    let points: Vec<(i32, i32)> = ctx
        .series
        .labels
        .iter()
        .zip(&ctx.series.values)
        .filter_map(|(label, &v)| {
            let x = ctx.x.center(label)?;
            Some((x.round() as i32, ctx.y.map(v).round() as i32))
        })
        .collect();

    area.draw(&PathElement::new(points.clone(), DATA_LINE.stroke_width(2)))
        .map_err(draw_err)?;

    let value_style = label_font(12.0)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    for (&(x, y), &v) in points.iter().zip(&ctx.series.values) {
        area.draw(&Circle::new((x, y), 3, BLACK.filled()))
            .map_err(draw_err)?;
        area.draw_text(&format_millions(v, 1), &value_style, (x, y - 10))
            .map_err(draw_err)?;
    }
    Ok(())
}

/// Dashed horizontal lines for `cl`, `ucl`, and `lcl` with annotations at
/// the plot's right edge.
pub(super) fn draw_quality_layer(
    area: &DrawingArea<BitMapBackend, Shift>,
    ctx: &LayerContext,
) -> Result<(), ChartError> {
    draw_limit_line(area, ctx, ctx.limits.cl, "CL", &CL_COLOR)?;
    draw_limit_line(area, ctx, ctx.limits.ucl, "UCL", &UCL_COLOR)?;
    draw_limit_line(area, ctx, ctx.limits.lcl, "LCL", &LCL_COLOR)?;
    Ok(())
}

fn draw_limit_line(
    area: &DrawingArea<BitMapBackend, Shift>,
    ctx: &LayerContext,
    value: f64,
    kind: &str,
    color: &RGBColor,
) -> Result<(), ChartError> {
    let y = ctx.y.map(value).round() as i32;
    let line = [(PADDING as i32, y), ((WIDTH - PADDING) as i32, y)];
    area.draw(&DashedPathElement::new(line, 4, 4, color.stroke_width(1)))
        .map_err(draw_err)?;

    let label = format!(
        "{} - {} ({})",
        ctx.chart_type,
        kind,
        format_millions(value, 1)
    );
    let style = limit_font(14.0)
        .color(color)
        .pos(Pos::new(HPos::Left, VPos::Center));
    area.draw_text(&label, &style, ((WIDTH - PADDING) as i32 + 10, y))
        .map_err(draw_err)?;
    Ok(())
}

/// Y guide lines with tick labels, and the category labels along the bottom.
pub(super) fn draw_grid_layer(
    area: &DrawingArea<BitMapBackend, Shift>,
    ctx: &LayerContext,
) -> Result<(), ChartError> {
    let tick_style = label_font(12.0)
        .color(&AXIS_TEXT)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for i in 0..=GRID_STEPS {
        let value = ctx.min_y + (ctx.max_y - ctx.min_y) / GRID_STEPS as f64 * i as f64;
        let y = ctx.y.map(value).round() as i32;
        area.draw(&PathElement::new(
            [(PADDING as i32, y), ((WIDTH - PADDING) as i32, y)],
            GRID_COLOR.stroke_width(1),
        ))
        .map_err(draw_err)?;
        area.draw_text(
            &format_millions(value, 0),
            &tick_style,
            (PADDING as i32 - 5, y),
        )
        .map_err(draw_err)?;
    }

    let category_style = label_font(12.0)
        .color(&AXIS_TEXT)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for label in ctx.x.domain() {
        if let Some(x) = ctx.x.center(label) {
            area.draw_text(
                label,
                &category_style,
                (x.round() as i32, (HEIGHT - PADDING) as i32 + 10),
            )
            .map_err(draw_err)?;
        }
    }
    Ok(())
}
