//! Canvas charts fed by fixed illustrative datasets.

use crate::map::tint;
use coastcore::model::EcosystemStats;
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
    Color, Point, Rectangle, Renderer, Size, Theme,
};

/// Monthly indicator variance: (month, NDVI, MNDWI). Placeholder series
/// pending the Sentinel-2 aggregation feed.
pub const INDICATOR_SERIES: [(&str, f32, f32); 7] = [
    ("Jan", 0.65, 0.20),
    ("Feb", 0.68, 0.22),
    ("Mar", 0.72, 0.25),
    ("Apr", 0.60, 0.35),
    ("May", 0.55, 0.45),
    ("Jun", 0.58, 0.40),
    ("Jul", 0.62, 0.30),
];

const VALUE_CEILING: f32 = 0.8;
const PANEL_COLOR: Color = Color {
    r: 0.06,
    g: 0.08,
    b: 0.12,
    a: 1.0,
};
const GRID_COLOR: Color = Color {
    r: 0.16,
    g: 0.20,
    b: 0.27,
    a: 1.0,
};
const NDVI_COLOR: (f32, f32, f32) = (0.063, 0.725, 0.506);
const MNDWI_COLOR: (f32, f32, f32) = (0.231, 0.510, 0.965);
const BAR_COLOR: (f32, f32, f32) = (0.545, 0.361, 0.965);

const PADDING: f32 = 10.0;

fn grid(frame: &mut Frame, size: Size) {
    frame.fill_rectangle(Point::ORIGIN, size, PANEL_COLOR);
    let lines = Path::new(|builder| {
        for step in 1..4 {
            let y = size.height - (step as f32 / 4.0) * (size.height - PADDING);
            builder.move_to(Point::new(PADDING, y));
            builder.line_to(Point::new(size.width - PADDING, y));
        }
    });
    frame.stroke(
        &lines,
        Stroke::default().with_width(1.0).with_color(GRID_COLOR),
    );
}

fn polyline(frame: &mut Frame, size: Size, values: &[f32], rgb: (f32, f32, f32)) {
    if values.len() < 2 {
        return;
    }
    let span = size.width - 2.0 * PADDING;
    let step = span / (values.len() as f32 - 1.0);
    let path = Path::new(|builder| {
        for (i, value) in values.iter().enumerate() {
            let x = PADDING + i as f32 * step;
            let normalized = (value / VALUE_CEILING).clamp(0.0, 1.0);
            let y = size.height - PADDING - normalized * (size.height - 2.0 * PADDING);
            if i == 0 {
                builder.move_to(Point::new(x, y));
            } else {
                builder.line_to(Point::new(x, y));
            }
        }
    });
    frame.stroke(
        &path,
        Stroke::default().with_width(2.0).with_color(tint(rgb, 1.0)),
    );
}

/// Historical indicator variance as two stroked series.
pub struct TrendChart;

impl<Message> canvas::Program<Message> for TrendChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        grid(&mut frame, size);

        let ndvi: Vec<f32> = INDICATOR_SERIES.iter().map(|(_, v, _)| *v).collect();
        let mndwi: Vec<f32> = INDICATOR_SERIES.iter().map(|(_, _, v)| *v).collect();
        polyline(&mut frame, size, &ndvi, NDVI_COLOR);
        polyline(&mut frame, size, &mndwi, MNDWI_COLOR);

        vec![frame.into_geometry()]
    }
}

/// Coverage density per ecosystem as a bar chart.
pub struct CoverageChart {
    pub stats: Vec<EcosystemStats>,
}

impl<Message> canvas::Program<Message> for CoverageChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        grid(&mut frame, size);

        if self.stats.is_empty() {
            return vec![frame.into_geometry()];
        }

        let ceiling = self
            .stats
            .iter()
            .map(|stat| stat.coverage_km2)
            .fold(1.0, f32::max);
        let slot = (size.width - 2.0 * PADDING) / self.stats.len() as f32;
        let bar_width = slot * 0.55;

        for (i, stat) in self.stats.iter().enumerate() {
            let height = (stat.coverage_km2 / ceiling) * (size.height - 2.0 * PADDING);
            let x = PADDING + i as f32 * slot + (slot - bar_width) / 2.0;
            frame.fill_rectangle(
                Point::new(x, size.height - PADDING - height),
                Size::new(bar_width, height),
                tint(BAR_COLOR, 0.9),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_series_stays_under_the_chart_ceiling() {
        for (_, ndvi, mndwi) in INDICATOR_SERIES {
            assert!(ndvi > 0.0 && ndvi <= VALUE_CEILING);
            assert!(mndwi > 0.0 && mndwi <= VALUE_CEILING);
        }
    }
}
