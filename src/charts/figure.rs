//! The chart surface: a retained description of what is drawn.

use super::Marker;

/// One plotted Y series.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub marker: Marker,
}

/// Text placed at a data coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Axes {
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<Trace>,
    pub annotations: Vec<Annotation>,
}

impl Axes {
    /// Bounding box of all trace points as `([x_min, y_min], [x_max, y_max])`.
    pub fn data_bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut points = self.traces.iter().flat_map(|t| t.points.iter());
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                [min[0].min(p[0]), min[1].min(p[1])],
                [max[0].max(p[0]), max[1].max(p[1])],
            )
        }))
    }
}

/// Single drawing surface, cleared and redrawn for every plot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Figure {
    axes: Option<Axes>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.axes = None;
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_none()
    }

    pub fn axes(&self) -> Option<&Axes> {
        self.axes.as_ref()
    }

    /// Discard the previous drawing and start a fresh set of axes.
    pub fn add_axes(&mut self, x_label: &str, y_label: &str) -> &mut Axes {
        self.axes.insert(Axes {
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_traces() {
        let mut figure = Figure::new();
        let axes = figure.add_axes("x", "y");
        axes.traces.push(Trace {
            label: "a".into(),
            points: vec![[0.0, 5.0], [2.0, -1.0]],
            marker: Marker::Line,
        });
        axes.traces.push(Trace {
            label: "b".into(),
            points: vec![[-3.0, 4.0]],
            marker: Marker::Point,
        });
        let (min, max) = figure.axes().unwrap().data_bounds().unwrap();
        assert_eq!(min, [-3.0, -1.0]);
        assert_eq!(max, [2.0, 5.0]);
    }

    #[test]
    fn clear_empties_the_figure() {
        let mut figure = Figure::new();
        figure.add_axes("x", "y");
        assert!(!figure.is_empty());
        figure.clear();
        assert!(figure.is_empty());
        assert!(Axes::default().data_bounds().is_none());
    }
}
