/// Named stretch of coastline the dashboard can focus on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub name: &'static str,
    /// (latitude, longitude) in EPSG:4326 degrees.
    pub coords: (f64, f64),
    pub zoom: u8,
    pub description: &'static str,
}

/// Region of interest covering the Kenyan coast, as ((south, west), (north, east)).
pub const COAST_BOUNDS: ((f64, f64), (f64, f64)) = ((-4.7, 39.0), (1.7, 41.6));

/// The three monitored focus areas. Fixed at startup, never mutated.
pub const REGIONS: [MapRegion; 3] = [
    MapRegion {
        name: "Lamu Archipelago",
        coords: (-2.27, 40.90),
        zoom: 11,
        description: "Extensive mangrove forests and complex tidal networks.",
    },
    MapRegion {
        name: "Watamu & Malindi",
        coords: (-3.35, 40.01),
        zoom: 12,
        description: "Marine protected areas with rich coral reef ecosystems.",
    },
    MapRegion {
        name: "Mombasa & Kwale",
        coords: (-4.04, 39.66),
        zoom: 11,
        description: "High urban pressure and industrial port activities.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_sit_inside_coast_bounds() {
        let ((south, west), (north, east)) = COAST_BOUNDS;
        for region in REGIONS {
            assert!(region.coords.0 > south && region.coords.0 < north);
            assert!(region.coords.1 > west && region.coords.1 < east);
        }
    }
}
