//! Colors, fonts, and label formatting shared by the chart layers.

use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

/// Series polyline (#2c70b8).
pub const DATA_LINE: RGBColor = RGBColor(0x2c, 0x70, 0xb8);
/// Center line.
pub const CL_COLOR: RGBColor = RGBColor(255, 255, 0);
/// Upper control limit.
pub const UCL_COLOR: RGBColor = RGBColor(0, 128, 0);
/// Lower control limit.
pub const LCL_COLOR: RGBColor = RGBColor(255, 0, 0);
/// Gridlines (#ccc).
pub const GRID_COLOR: RGBColor = RGBColor(0xcc, 0xcc, 0xcc);
/// Axis and category text (#333).
pub const AXIS_TEXT: RGBColor = RGBColor(0x33, 0x33, 0x33);

/// Regular label font at the given pixel size.
pub fn label_font(px: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, px, FontStyle::Normal)
}

/// Bold font used for the limit-line annotations.
pub fn limit_font(px: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, px, FontStyle::Bold)
}

/// Scale a raw value to millions with the trailing `m` the chart uses for
/// every numeric label (`12_345_678` → `"12.3m"` at one decimal).
pub fn format_millions(value: f64, decimals: usize) -> String {
    format!("{:.*}m", decimals, value / 1_000_000.0)
}
