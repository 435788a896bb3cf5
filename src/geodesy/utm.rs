//! WGS84 → UTM forward projection (Snyder 1987, USGS Prof. Paper 1395).
//!
//! Only the forward direction is needed: vertices go from geographic degrees
//! to metres in the zone picked from the polygon centroid.

use serde::Deserialize;

// WGS84 ellipsoid
const A: f64 = 6_378_137.0;
const F: f64 = 1.0 / 298.257_223_563;
const E2: f64 = 2.0 * F - F * F;
const E_PRIME2: f64 = E2 / (1.0 - E2);

const K0: f64 = 0.9996;
const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

const ZONE_WIDTH_DEG: f64 = 6.0;
const ZONE_COUNT: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

/// How the hemisphere of the target zone is chosen.
///
/// `North` always uses the 326xx codes whatever the latitude. The false
/// northing is a pure translation, so areas and lengths are the same under
/// both policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HemispherePolicy {
    #[default]
    Auto,
    North,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtmZone {
    pub zone: u8,
    pub hemisphere: Hemisphere,
}

impl UtmZone {
    /// Zone containing the given position: `floor((lon + 180) / 6) + 1`,
    /// clamped to 1..=60 so that lon = 180 lands in zone 60.
    pub fn for_position(lon_deg: f64, lat_deg: f64, policy: HemispherePolicy) -> Self {
        let index = ((lon_deg + 180.0) / ZONE_WIDTH_DEG).floor() as i64 + 1;
        let zone = index.clamp(1, ZONE_COUNT) as u8;

        let hemisphere = match policy {
            HemispherePolicy::North => Hemisphere::North,
            HemispherePolicy::Auto if lat_deg < 0.0 => Hemisphere::South,
            HemispherePolicy::Auto => Hemisphere::North,
        };

        Self { zone, hemisphere }
    }

    pub fn epsg(&self) -> u32 {
        let base = match self.hemisphere {
            Hemisphere::North => 32600,
            Hemisphere::South => 32700,
        };
        base + u32::from(self.zone)
    }

    pub fn central_meridian_deg(&self) -> f64 {
        (f64::from(self.zone) - 1.0) * ZONE_WIDTH_DEG - 180.0 + 3.0
    }

    /// Project a WGS84 position in degrees to (easting, northing) in metres.
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();
        let lon0 = self.central_meridian_deg().to_radians();

        let sin_lat = lat.sin();
        let cos_lat = lat.cos();
        let tan_lat = lat.tan();

        let n = A / (1.0 - E2 * sin_lat * sin_lat).sqrt();
        let t = tan_lat * tan_lat;
        let c = E_PRIME2 * cos_lat * cos_lat;
        let a = cos_lat * (lon - lon0);
        let m = meridional_arc(lat);

        let a2 = a * a;
        let a4 = a2 * a2;
        let a6 = a4 * a2;

        let easting = K0
            * n
            * (a + (1.0 - t + c) * a2 * a / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * E_PRIME2) * a4 * a / 120.0)
            + FALSE_EASTING;

        let northing = K0
            * (m + n
                * tan_lat
                * (a2 / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * E_PRIME2) * a6 / 720.0));

        match self.hemisphere {
            Hemisphere::North => (easting, northing),
            Hemisphere::South => (easting, northing + FALSE_NORTHING_SOUTH),
        }
    }
}

/// Meridional arc from the equator to `lat` (radians), Snyder eq. 3-21.
fn meridional_arc(lat: f64) -> f64 {
    let e4 = E2 * E2;
    let e6 = e4 * E2;

    A * ((1.0 - E2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * lat
        - (3.0 * E2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * lat).sin()
        + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * lat).sin()
        - (35.0 * e6 / 3072.0) * (6.0 * lat).sin())
}
