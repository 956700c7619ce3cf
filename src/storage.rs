use crate::limits::ControlLimits;
use crate::models::{Dataset, Series};
use crate::render::Surface;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Load a dataset from a JSON file (`groupMapping` / `dataRowMapping`
/// schema). Parse failures are hard errors at this boundary.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&raw)
        .with_context(|| format!("parsing dataset JSON from {}", path.display()))?;
    Ok(dataset)
}

/// Save a rendered surface as a PNG file.
pub fn save_png<P: AsRef<Path>>(surface: &Surface, path: P) -> Result<()> {
    let img =
        image::RgbImage::from_raw(surface.width(), surface.height(), surface.data().to_vec())
            .context("surface buffer size mismatch")?;
    img.save(path.as_ref())
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}

/// Save the extracted series with its control limits as CSV, one row per
/// category plus a header.
pub fn save_series_csv<P: AsRef<Path>>(
    series: &Series,
    limits: &ControlLimits,
    path: P,
) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("label", "value", "cl", "ucl", "lcl", "out_of_control"))?;
    for (label, &value) in series.labels.iter().zip(&series.values) {
        wtr.serialize((
            label,
            value,
            limits.cl,
            limits.ucl,
            limits.lcl,
            limits.is_out_of_control(value),
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_series_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("series.csv");
        let series = Series {
            labels: vec!["North".into(), "South".into()],
            values: vec![4.0, 8.0],
        };
        let limits = ControlLimits {
            cl: 6.0,
            ucl: 8.0,
            lcl: 4.0,
        };
        save_series_csv(&series, &limits, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "label,value,cl,ucl,lcl,out_of_control"
        );
        assert_eq!(lines.clone().count(), 2);
        assert!(lines.all(|l| l.ends_with("false")));
    }
}
