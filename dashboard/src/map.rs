//! Canvas rendering of the coastal region of interest.

use coastcore::features::MockFeature;
use coastcore::model::{EcosystemTarget, MapRegion, SpectralIndex, COAST_BOUNDS, REGIONS};
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke},
    Color, Point, Rectangle, Renderer, Size, Theme,
};

// Viewport in degrees: the ROI plus a margin so its outline stays visible.
const VIEW_SOUTH: f64 = -5.2;
const VIEW_NORTH: f64 = 2.2;
const VIEW_WEST: f64 = 38.5;
const VIEW_EAST: f64 = 42.1;

/// Equirectangular projection of (latitude, longitude) into canvas space.
pub fn project(coords: (f64, f64), size: Size) -> Point {
    let x = ((coords.1 - VIEW_WEST) / (VIEW_EAST - VIEW_WEST)) as f32 * size.width;
    let y = ((VIEW_NORTH - coords.0) / (VIEW_NORTH - VIEW_SOUTH)) as f32 * size.height;
    Point::new(x, y)
}

pub fn tint(rgb: (f32, f32, f32), alpha: f32) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, alpha)
}

/// Side of the simulated raster overlay square, in degrees.
const OVERLAY_HALF_DEG: f64 = 0.05;

pub struct MapCanvas {
    pub features: Vec<MockFeature>,
    pub active_target: Option<EcosystemTarget>,
    pub active_index: Option<SpectralIndex>,
    pub selected_region: MapRegion,
}

impl<Message> canvas::Program<Message> for MapCanvas {
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
        frame.fill_rectangle(Point::ORIGIN, size, Color::from_rgb(0.03, 0.05, 0.09));

        // Graticule at whole degrees.
        let graticule = Path::new(|builder| {
            for lat in -5..=2 {
                let start = project((lat as f64, VIEW_WEST), size);
                let end = project((lat as f64, VIEW_EAST), size);
                builder.move_to(start);
                builder.line_to(end);
            }
            for lon in 39..=42 {
                let start = project((VIEW_SOUTH, lon as f64), size);
                let end = project((VIEW_NORTH, lon as f64), size);
                builder.move_to(start);
                builder.line_to(end);
            }
        });
        frame.stroke(
            &graticule,
            Stroke::default()
                .with_width(1.0)
                .with_color(Color::from_rgb(0.10, 0.13, 0.18)),
        );

        // Dashed outline of the monitored coastline ROI.
        let ((south, west), (north, east)) = COAST_BOUNDS;
        let top_left = project((north, west), size);
        let bottom_right = project((south, east), size);
        let roi = Path::new(|builder| {
            builder.rectangle(
                top_left,
                Size::new(bottom_right.x - top_left.x, bottom_right.y - top_left.y),
            );
        });
        frame.stroke(
            &roi,
            Stroke {
                line_dash: LineDash {
                    segments: &[6.0, 4.0],
                    offset: 0,
                },
                ..Stroke::default()
                    .with_width(1.0)
                    .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.55))
            },
        );

        // Simulated raster overlay around the focused region.
        if let Some(index) = self.active_index {
            let (lat, lon) = self.selected_region.coords;
            let overlay_tl = project((lat + OVERLAY_HALF_DEG, lon - OVERLAY_HALF_DEG), size);
            let overlay_br = project((lat - OVERLAY_HALF_DEG, lon + OVERLAY_HALF_DEG), size);
            frame.fill_rectangle(
                overlay_tl,
                Size::new(overlay_br.x - overlay_tl.x, overlay_br.y - overlay_tl.y),
                tint(index.overlay_rgb(), 0.25),
            );
        }

        // Region anchors; the focused one gets a halo.
        for region in REGIONS {
            let center = project(region.coords, size);
            let anchor = Path::new(|builder| builder.circle(center, 3.5));
            frame.fill(&anchor, Color::from_rgb(0.75, 0.80, 0.88));
            if region == self.selected_region {
                let halo = Path::new(|builder| builder.circle(center, 7.0));
                frame.stroke(
                    &halo,
                    Stroke::default()
                        .with_width(1.5)
                        .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.9)),
                );
            }
        }

        // Mock hotspots for the active target; shoreline plumes draw larger.
        if let Some(target) = self.active_target {
            let radius = if target == EcosystemTarget::Shoreline {
                12.0
            } else {
                8.0
            };
            for feature in &self.features {
                let center = project(feature.coords, size);
                let marker = Path::new(|builder| builder.circle(center, radius));
                frame.fill(&marker, tint(target.accent_rgb(), feature.intensity * 0.85));
                frame.stroke(
                    &marker,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(tint(target.accent_rgb(), 1.0)),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_corners_project_to_canvas_corners() {
        let size = Size::new(400.0, 300.0);
        let origin = project((VIEW_NORTH, VIEW_WEST), size);
        assert!(origin.x.abs() < f32::EPSILON && origin.y.abs() < f32::EPSILON);

        let far = project((VIEW_SOUTH, VIEW_EAST), size);
        assert!((far.x - size.width).abs() < 0.001);
        assert!((far.y - size.height).abs() < 0.001);
    }

    #[test]
    fn regions_project_inside_the_canvas() {
        let size = Size::new(640.0, 480.0);
        for region in REGIONS {
            let point = project(region.coords, size);
            assert!(point.x > 0.0 && point.x < size.width);
            assert!(point.y > 0.0 && point.y < size.height);
        }
    }
}
