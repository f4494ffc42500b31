//! Charts module - figure model, rendering and export

mod export;
mod figure;
mod plotter;
mod renderer;

pub use export::{export_png, ExportError};
pub use figure::{Annotation, Figure, Trace};
pub use plotter::ChartPlotter;
pub use renderer::{ChartRenderer, RenderError};

/// Chart type requested by the plot buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Scatter,
    /// Scatter points joined by a line.
    SmoothedScatter,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Line, Self::Scatter, Self::SmoothedScatter];

    pub fn marker(self) -> Marker {
        match self {
            Self::Line => Marker::Line,
            Self::Scatter => Marker::Point,
            Self::SmoothedScatter => Marker::PointLine,
        }
    }

    /// Caption of the button that plots this kind.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Line => "Plot line chart",
            Self::Scatter => "Plot scatter points",
            Self::SmoothedScatter => "Plot scatter points with smooth line",
        }
    }
}

/// How a Y series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Solid line.
    Line,
    /// Points only.
    Point,
    /// Points joined by a solid line.
    PointLine,
}

impl Marker {
    pub fn draws_line(self) -> bool {
        matches!(self, Self::Line | Self::PointLine)
    }

    pub fn draws_points(self) -> bool {
        matches!(self, Self::Point | Self::PointLine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_kinds_map_to_markers() {
        assert_eq!(ChartKind::Line.marker(), Marker::Line);
        assert_eq!(ChartKind::Scatter.marker(), Marker::Point);
        assert_eq!(ChartKind::SmoothedScatter.marker(), Marker::PointLine);
        assert!(Marker::PointLine.draws_line() && Marker::PointLine.draws_points());
        assert!(!Marker::Point.draws_line());
        assert!(!Marker::Line.draws_points());
    }
}
