//! Boundary glue: holds the three render inputs and re-renders on change.

use crate::models::{ChartError, ChartType, Dataset};
use crate::render::{self, RenderOutcome, Surface};

/// Owns the chart inputs and the visible surface.
///
/// Each input setter triggers exactly one synchronous re-render of the
/// surface; reads never do. Until a dataset is supplied every render is a
/// skip and the surface stays blank.
pub struct ChartController {
    dataset: Option<Dataset>,
    group: String,
    chart_type: ChartType,
    surface: Surface,
}

impl ChartController {
    pub fn new() -> Self {
        Self {
            dataset: None,
            group: "NO_GROUP".into(),
            chart_type: ChartType::G,
            surface: Surface::new(),
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn set_dataset(&mut self, dataset: Dataset) -> Result<RenderOutcome, ChartError> {
        self.dataset = Some(dataset);
        self.rerender()
    }

    pub fn set_group(&mut self, group: impl Into<String>) -> Result<RenderOutcome, ChartError> {
        self.group = group.into();
        self.rerender()
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) -> Result<RenderOutcome, ChartError> {
        self.chart_type = chart_type;
        self.rerender()
    }

    fn rerender(&mut self) -> Result<RenderOutcome, ChartError> {
        let Some(dataset) = self.dataset.as_ref() else {
            return Ok(RenderOutcome::Skipped);
        };
        render::render(dataset, &self.group, self.chart_type, &mut self.surface)
    }
}

impl Default for ChartController {
    fn default() -> Self {
        Self::new()
    }
}
