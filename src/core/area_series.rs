use serde::{Deserialize, Serialize};

use crate::core::{PathCommand, Sample, ScaleMapping, monotone_path};

/// Deterministic geometry for the click-trend area, in plot-area pixels.
///
/// `line` is the smoothed stroke through every sample. `fill` reuses the same
/// curve and closes it against the zero baseline at `baseline_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub points: Vec<(f64, f64)>,
    pub line: Vec<PathCommand>,
    pub fill: Vec<PathCommand>,
    pub baseline_y: f64,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            line: Vec::new(),
            fill: Vec::new(),
            baseline_y: 0.0,
        }
    }

    /// Topmost y reached by any sample, used as the gradient start.
    #[must_use]
    pub fn peak_y(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.1)
            .fold(self.baseline_y, f64::min)
    }
}

/// Projects ascending samples into area/line geometry.
#[must_use]
pub fn project_area_geometry(samples: &[Sample], scales: &ScaleMapping) -> AreaGeometry {
    if samples.is_empty() {
        return AreaGeometry::empty();
    }

    let points: Vec<(f64, f64)> = samples
        .iter()
        .map(|sample| scales.sample_to_point(*sample))
        .collect();
    let baseline_y = scales.baseline_y();
    let line = monotone_path(&points);

    let first_x = points[0].0;
    let last_x = points[points.len() - 1].0;
    let mut fill = Vec::with_capacity(line.len() + 3);
    fill.extend(line.iter().copied());
    fill.push(PathCommand::LineTo {
        x: last_x,
        y: baseline_y,
    });
    fill.push(PathCommand::LineTo {
        x: first_x,
        y: baseline_y,
    });
    fill.push(PathCommand::Close);

    AreaGeometry {
        points,
        line,
        fill,
        baseline_y,
    }
}
