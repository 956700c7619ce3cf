use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors surfaced by the chart core.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A category references a data row that is absent from `dataRowMapping`.
    #[error("data row `{data_row_id}` referenced by category `{category_id}` not found")]
    RowNotFound {
        category_id: String,
        data_row_id: String,
    },
    /// The drawing backend rejected a primitive.
    #[error("drawing failed: {0}")]
    Draw(String),
}

/// Control-chart convention selector.
///
/// `G` models Poisson-like counts, `I` individuals with moving ranges, and
/// `T` a range-based band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    G,
    I,
    T,
}

impl ChartType {
    /// Map a selection key to a chart type.
    ///
    /// Anything that is not `"G"` or `"I"` selects the T-chart; callers rely
    /// on that fallback instead of rejecting unknown keys.
    pub fn from_key(key: &str) -> Self {
        match key {
            "G" => ChartType::G,
            "I" => ChartType::I,
            _ => ChartType::T,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::G => "G",
            ChartType::I => "I",
            ChartType::T => "T",
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference from a group's ordered category list into the data-row table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub category_id: String,
    pub data_row_id: String,
}

impl CategoryRef {
    /// Display label: everything after the last `-` in the category id.
    /// An id without a separator is its own label.
    pub fn display_label(&self) -> &str {
        self.category_id
            .rsplit('-')
            .next()
            .unwrap_or(self.category_id.as_str())
    }
}

/// One observation row. Only the actual-value field `AC` is consumed by the
/// chart; other fields in the source JSON are ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DataRow {
    #[serde(rename = "AC")]
    pub ac: f64,
}

/// Parsed input dataset: ordered category lists per group plus the shared
/// data-row table they reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub group_mapping: BTreeMap<String, Vec<CategoryRef>>,
    pub data_row_mapping: BTreeMap<String, DataRow>,
}

impl Dataset {
    /// Group keys in sorted order.
    pub fn group_keys(&self) -> impl Iterator<Item = &str> {
        self.group_mapping.keys().map(String::as_str)
    }

    /// Extract the plotting series for `group`, in category order.
    ///
    /// Returns `Ok(None)` when the group key is absent (the render becomes a
    /// no-op) and `ChartError::RowNotFound` when a category references a row
    /// missing from `dataRowMapping`. No value is ever fabricated for a
    /// missing row.
    pub fn series_for(&self, group: &str) -> Result<Option<Series>, ChartError> {
        let Some(categories) = self.group_mapping.get(group) else {
            return Ok(None);
        };
        let mut labels = Vec::with_capacity(categories.len());
        let mut values = Vec::with_capacity(categories.len());
        for cat in categories {
            let row = self.data_row_mapping.get(&cat.data_row_id).ok_or_else(|| {
                ChartError::RowNotFound {
                    category_id: cat.category_id.clone(),
                    data_row_id: cat.data_row_id.clone(),
                }
            })?;
            labels.push(cat.display_label().to_string());
            values.push(row.ac);
        }
        Ok(Some(Series { labels, values }))
    }
}

/// The (label, value) sample extracted for one group, in plotting order.
///
/// Order matters: it defines both the polyline and, for the I-chart, the
/// moving-range calculation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
