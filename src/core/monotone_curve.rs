use serde::{Deserialize, Serialize};

/// Path command in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    /// Returns a copy shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        match self {
            Self::MoveTo { x, y } => Self::MoveTo { x: x + dx, y: y + dy },
            Self::LineTo { x, y } => Self::LineTo { x: x + dx, y: y + dy },
            Self::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => Self::CubicTo {
                x1: x1 + dx,
                y1: y1 + dy,
                x2: x2 + dx,
                y2: y2 + dy,
                x: x + dx,
                y: y + dy,
            },
            Self::Close => Self::Close,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => [x1, y1, x2, y2, x, y].iter().all(|v| v.is_finite()),
            Self::Close => true,
        }
    }
}

/// Builds a monotone-in-x cubic path through `points` (ascending x).
///
/// Tangents follow Steffen's method: interior slopes are clamped so every
/// Bézier segment keeps its control points between the segment's endpoint
/// values, so the curve never overshoots a sample. One point yields a bare
/// `MoveTo`, two points a straight `LineTo`.
#[must_use]
pub fn monotone_path(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let Some(&(x0, y0)) = points.first() else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo { x: x0, y: y0 });
    match points.len() {
        1 => return commands,
        2 => {
            let (x, y) = points[1];
            commands.push(PathCommand::LineTo { x, y });
            return commands;
        }
        _ => {}
    }

    let tangents = monotone_tangents(points);
    for (index, pair) in points.windows(2).enumerate() {
        let (xa, ya) = pair[0];
        let (xb, yb) = pair[1];
        let dx = (xb - xa) / 3.0;
        commands.push(PathCommand::CubicTo {
            x1: xa + dx,
            y1: ya + dx * tangents[index],
            x2: xb - dx,
            y2: yb - dx * tangents[index + 1],
            x: xb,
            y: yb,
        });
    }
    commands
}

fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let secants: Vec<(f64, f64)> = points
        .windows(2)
        .map(|pair| {
            let h = pair[1].0 - pair[0].0;
            let slope = if h == 0.0 {
                0.0
            } else {
                (pair[1].1 - pair[0].1) / h
            };
            (h, slope)
        })
        .collect();

    let last = points.len() - 1;
    let mut tangents = vec![0.0; points.len()];
    for index in 1..last {
        let (h0, s0) = secants[index - 1];
        let (h1, s1) = secants[index];
        tangents[index] = interior_tangent(h0, s0, h1, s1);
    }

    tangents[0] = endpoint_tangent(secants[0], tangents[1]);
    tangents[last] = endpoint_tangent(secants[last - 1], tangents[last - 1]);
    tangents
}

fn interior_tangent(h0: f64, s0: f64, h1: f64, s1: f64) -> f64 {
    if h0 + h1 == 0.0 {
        return 0.0;
    }
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

fn endpoint_tangent((h, slope): (f64, f64), neighbor_tangent: f64) -> f64 {
    if h == 0.0 {
        return neighbor_tangent;
    }
    (3.0 * slope - neighbor_tangent) / 2.0
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::{PathCommand, monotone_path};

    fn control_points_within_segment(commands: &[PathCommand]) -> bool {
        let mut previous_y = match commands.first() {
            Some(PathCommand::MoveTo { y, .. }) => *y,
            _ => return false,
        };
        for command in &commands[1..] {
            if let PathCommand::CubicTo { y1, y2, y, .. } = *command {
                let low = previous_y.min(y) - 1e-9;
                let high = previous_y.max(y) + 1e-9;
                if !(low..=high).contains(&y1) || !(low..=high).contains(&y2) {
                    return false;
                }
                previous_y = y;
            }
        }
        true
    }

    #[test]
    fn short_inputs_degrade_to_move_and_line() {
        assert!(monotone_path(&[]).is_empty());
        assert_eq!(
            monotone_path(&[(1.0, 2.0)]),
            vec![PathCommand::MoveTo { x: 1.0, y: 2.0 }]
        );
        assert_eq!(
            monotone_path(&[(0.0, 0.0), (10.0, 5.0)])[1],
            PathCommand::LineTo { x: 10.0, y: 5.0 }
        );
    }

    #[test]
    fn peak_does_not_overshoot() {
        let points = [(0.0, 140.0), (270.0, 23.3), (540.0, 81.7)];
        let commands = monotone_path(&points);
        assert_eq!(commands.len(), 3);
        assert!(control_points_within_segment(&commands));
    }

    #[test]
    fn flat_run_stays_flat() {
        let points = [(0.0, 50.0), (10.0, 50.0), (20.0, 50.0), (30.0, 10.0)];
        let commands = monotone_path(&points);
        let PathCommand::CubicTo { y1, y2, .. } = commands[1] else {
            panic!("expected cubic segment");
        };
        assert_eq!(y1, 50.0);
        assert_eq!(y2, 50.0);
    }

    #[test]
    fn duplicate_x_does_not_produce_nan() {
        let points = [(0.0, 10.0), (5.0, 20.0), (5.0, 30.0), (10.0, 5.0)];
        assert!(monotone_path(&points).iter().all(|command| command.is_finite()));
    }
}
