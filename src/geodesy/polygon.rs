use geo::{Area, Centroid, Coord, LineString, MapCoords, Polygon};

use super::{GeodesyError, HemispherePolicy, UtmZone};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonMeasure {
    pub area_m2: f64,
    pub perimeter_m: f64,
    pub zone: UtmZone,
}

/// Project a closed ring of (lon, lat) vertices to the UTM zone of its
/// centroid and measure it there.
///
/// The ring is closed implicitly; a repeated closing vertex adds nothing to
/// either measure. Self-intersecting rings are measured as given.
pub fn project_and_measure_polygon(
    vertices: &[Coord<f64>],
    policy: HemispherePolicy,
) -> Result<PolygonMeasure, GeodesyError> {
    if vertices.len() < 3 {
        return Err(GeodesyError::TooFewVertices(vertices.len()));
    }
    if let Some(bad) = vertices
        .iter()
        .find(|c| !c.x.is_finite() || !c.y.is_finite())
    {
        return Err(GeodesyError::NonFiniteCoordinate {
            lon: bad.x,
            lat: bad.y,
        });
    }

    let polygon = Polygon::new(LineString::from(vertices.to_vec()), vec![]);
    let centroid = polygon.centroid().ok_or(GeodesyError::NoCentroid)?;
    let zone = UtmZone::for_position(centroid.x(), centroid.y(), policy);

    let projected = polygon.map_coords(|c| {
        let (x, y) = zone.project(c.x, c.y);
        Coord { x, y }
    });

    let area_m2 = projected.unsigned_area();
    let perimeter_m = projected
        .exterior()
        .lines()
        .map(|line| line.dx().hypot(line.dy()))
        .sum();

    Ok(PolygonMeasure {
        area_m2,
        perimeter_m,
        zone,
    })
}
