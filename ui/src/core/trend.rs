//! Geometry and direction for the reading-flow charts.

/// Logical drawing area for a chart. Values map into it with 0 % on the
/// bottom edge and 100 % on the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
}

/// Floating panel chart.
pub const PANEL_FRAME: ChartFrame = ChartFrame {
    width: 200.0,
    height: 100.0,
};

/// Compact chart in the footer.
pub const FOOTER_FRAME: ChartFrame = ChartFrame {
    width: 400.0,
    height: 80.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartFrame {
    pub fn y_for(&self, value: f64) -> f64 {
        self.height - (value / 100.0) * self.height
    }

    pub fn points(&self, values: &[f64]) -> Vec<PlotPoint> {
        let span = values.len().saturating_sub(1).max(1) as f64;
        values
            .iter()
            .enumerate()
            .map(|(index, value)| PlotPoint {
                x: index as f64 / span * self.width,
                y: self.y_for(*value),
            })
            .collect()
    }

    /// Closed area under `points`, down to the bottom edge.
    pub fn area_path(&self, points: &[PlotPoint]) -> String {
        let line = line_path(points);
        if line.is_empty() {
            return line;
        }
        format!(
            "{line} L {} {} L 0 {} Z",
            fmt_coord(self.width),
            fmt_coord(self.height),
            fmt_coord(self.height)
        )
    }
}

/// SVG path data through `points`; empty for fewer than two points.
pub fn line_path(points: &[PlotPoint]) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let mut path = String::with_capacity(points.len() * 16);
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { "M" } else { " L" };
        path.push_str(&format!(
            "{command} {} {}",
            fmt_coord(point.x),
            fmt_coord(point.y)
        ));
    }
    path
}

fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

/// Reduce `values` to at most `max_points`, keeping the first and last
/// samples and picking evenly spaced ones in between.
pub fn downsample(values: &[f64], max_points: usize) -> Vec<f64> {
    let max_points = max_points.max(2);
    if values.len() <= max_points {
        return values.to_vec();
    }
    let last = values.len() - 1;
    let slots = max_points - 1;
    (0..=slots)
        .map(|slot| {
            let index = (slot as f64 * last as f64 / slots as f64).round() as usize;
            values[index.min(last)]
        })
        .collect()
}

/// Direction of the last movement in the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub current: f64,
    pub previous: f64,
}

impl Trend {
    pub fn between(previous: f64, current: f64) -> Self {
        Self { current, previous }
    }

    /// Compare the last two samples; missing samples read as `0`.
    pub fn of(values: &[f64]) -> Self {
        let current = values.last().copied().unwrap_or(0.0);
        let previous = values
            .len()
            .checked_sub(2)
            .map(|idx| values[idx])
            .unwrap_or(0.0);
        Self::between(previous, current)
    }

    pub fn going_up(&self) -> bool {
        self.current > self.previous
    }

    pub fn delta(&self) -> f64 {
        (self.current - self.previous).abs()
    }

    pub fn arrow(&self) -> &'static str {
        if self.going_up() {
            "↑"
        } else {
            "↓"
        }
    }

    pub fn palette(&self) -> TrendPalette {
        if self.going_up() {
            TrendPalette::Rising
        } else {
            TrendPalette::Falling
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPalette {
    Rising,
    Falling,
}

impl TrendPalette {
    pub fn stroke(&self) -> &'static str {
        match self {
            TrendPalette::Rising => "#10b981",
            TrendPalette::Falling => "#ef4444",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TrendPalette::Rising => "trend--up",
            TrendPalette::Falling => "trend--down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_map_index_and_invert_value() {
        let points = PANEL_FRAME.points(&[0.0, 50.0, 100.0]);
        assert_eq!(
            points,
            vec![
                PlotPoint { x: 0.0, y: 100.0 },
                PlotPoint { x: 100.0, y: 50.0 },
                PlotPoint { x: 200.0, y: 0.0 },
            ]
        );
    }

    #[test]
    fn single_point_sits_at_origin() {
        let points = FOOTER_FRAME.points(&[25.0]);
        assert_eq!(points, vec![PlotPoint { x: 0.0, y: 60.0 }]);
        assert!(line_path(&points).is_empty());
        assert!(FOOTER_FRAME.area_path(&points).is_empty());
    }

    #[test]
    fn paths_are_built_from_points() {
        let points = PANEL_FRAME.points(&[0.0, 25.0]);
        assert_eq!(line_path(&points), "M 0 100 L 200 75");
        assert_eq!(
            PANEL_FRAME.area_path(&points),
            "M 0 100 L 200 75 L 200 100 L 0 100 Z"
        );
    }

    #[test]
    fn fractional_coordinates_are_rounded() {
        let points = PANEL_FRAME.points(&[0.0, 10.0, 20.0]);
        assert_eq!(line_path(&points), "M 0 100 L 100 90 L 200 80");
        let points = PANEL_FRAME.points(&[33.333, 0.0, 0.0, 0.0]);
        assert!(line_path(&points).starts_with("M 0 66.67 L 66.67 100"));
    }

    #[test]
    fn going_up_follows_each_increase() {
        let values = [0.0, 25.0, 50.0, 75.0, 100.0];
        for pair in values.windows(2) {
            let trend = Trend::between(pair[0], pair[1]);
            assert_eq!(trend.going_up(), pair[1] > pair[0]);
            assert!(trend.going_up());
        }
    }

    #[test]
    fn falling_pair_reports_magnitude() {
        let trend = Trend::of(&[50.0, 30.0]);
        assert!(!trend.going_up());
        assert_eq!(trend.delta(), 20.0);
        assert_eq!(trend.arrow(), "↓");
        assert_eq!(trend.palette(), TrendPalette::Falling);
    }

    #[test]
    fn flat_series_counts_as_falling() {
        let trend = Trend::of(&[40.0, 40.0]);
        assert!(!trend.going_up());
        assert_eq!(trend.delta(), 0.0);
    }

    #[test]
    fn short_series_reads_missing_as_zero() {
        assert_eq!(Trend::of(&[]), Trend::between(0.0, 0.0));
        let trend = Trend::of(&[12.0]);
        assert!(trend.going_up());
        assert_eq!(trend.delta(), 12.0);
    }

    #[test]
    fn downsample_keeps_endpoints() {
        let values: Vec<f64> = (0..1000).map(|v| v as f64 / 10.0).collect();
        let reduced = downsample(&values, 50);
        assert_eq!(reduced.len(), 50);
        assert_eq!(reduced[0], values[0]);
        assert_eq!(*reduced.last().unwrap(), *values.last().unwrap());

        let short = [1.0, 2.0, 3.0];
        assert_eq!(downsample(&short, 50), short.to_vec());
    }
}
