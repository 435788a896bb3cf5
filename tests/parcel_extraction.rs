use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use geofeat::geodesy::{GeodesyError, HemispherePolicy};
use geofeat::table::{write_rows, OutputFormat};
use geofeat::{ParcelError, ParcelFeatureExtractor};

// Degrees spanning 100 m at the equator on WGS84.
const LAT_100M: f64 = 100.0 / 110_574.3;
const LON_100M: f64 = 100.0 / 111_319.5;

fn write_ring(dir: &Path, name: &str, ring: &[(f64, f64)]) {
    let mut body = String::from("Latitude,Longitude\n");
    for (lat, lon) in ring {
        writeln!(body, "{lat},{lon}").unwrap();
    }
    fs::write(dir.join(name), body).unwrap();
}

fn square(lat0: f64, lon0: f64) -> Vec<(f64, f64)> {
    vec![
        (lat0, lon0),
        (lat0, lon0 + LON_100M),
        (lat0 + LAT_100M, lon0 + LON_100M),
        (lat0 + LAT_100M, lon0),
    ]
}

#[test]
fn hundred_metre_square_near_equator() {
    let dir = tempfile::tempdir().unwrap();
    write_ring(dir.path(), "square.csv", &square(0.0, 10.0));

    let report = ParcelFeatureExtractor::new().extract_dir(dir.path()).unwrap();
    assert!(report.is_complete());
    let f = report.get("square").unwrap();

    assert!((f.area_ha - 1.0).abs() < 0.01, "area {}", f.area_ha);
    assert!((f.perimeter_km - 0.4).abs() < 0.004, "perimeter {}", f.perimeter_km);
    assert_eq!(f.complexity, 4);
}

#[test]
fn complexity_counts_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let n = 37;
    let ring: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let theta = i as f64 / n as f64 * std::f64::consts::TAU;
            (45.0 + 0.001 * theta.sin(), 4.8 + 0.001 * theta.cos())
        })
        .collect();
    write_ring(dir.path(), "round.csv", &ring);

    let mut closed = square(45.0, 4.8);
    closed.push(closed[0]);
    write_ring(dir.path(), "closed.csv", &closed);

    let report = ParcelFeatureExtractor::new().extract_dir(dir.path()).unwrap();
    assert_eq!(report.get("round").unwrap().complexity, n);
    assert_eq!(report.get("closed").unwrap().complexity, 5);
}

#[test]
fn missing_longitude_column_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("no_lon.csv"),
        "Latitude,Altitude\n45.0,210\n45.1,215\n45.1,220\n",
    )
    .unwrap();
    write_ring(dir.path(), "ok.csv", &square(45.0, 4.8));

    let report = ParcelFeatureExtractor::new().extract_dir(dir.path()).unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].id, "ok");
    assert!(report.failures.is_empty());
}

#[test]
fn padded_column_name_is_not_a_match() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = String::from("Latitude, Longitude\n");
    for (lat, lon) in square(45.0, 4.8) {
        writeln!(body, "{lat}, {lon}").unwrap();
    }
    fs::write(dir.path().join("padded.csv"), body).unwrap();

    let report = ParcelFeatureExtractor::new().extract_dir(dir.path()).unwrap();
    assert!(report.rows.is_empty());
    assert!(report.failures.is_empty());
}

#[test]
fn empty_parcels_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_ring(dir.path(), "header_only.csv", &[]);
    fs::write(dir.path().join("blank.csv"), "").unwrap();

    let report = ParcelFeatureExtractor::new().extract_dir(dir.path()).unwrap();
    assert!(report.rows.is_empty());
    assert!(report.failures.is_empty());
}

#[test]
fn degenerate_parcel_is_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    write_ring(dir.path(), "segment.csv", &[(45.0, 4.8), (45.001, 4.8)]);
    write_ring(dir.path(), "ok.csv", &square(45.0, 4.8));

    let report = ParcelFeatureExtractor::new().extract_dir(dir.path()).unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        ParcelError::Degenerate(GeodesyError::TooFewVertices(2))
    ));
}

#[test]
fn southern_parcel_same_under_both_hemisphere_policies() {
    let dir = tempfile::tempdir().unwrap();
    write_ring(dir.path(), "pampa.csv", &square(-34.6, -58.4));

    let auto = ParcelFeatureExtractor::new().extract_dir(dir.path()).unwrap();
    let north = ParcelFeatureExtractor::new()
        .with_hemisphere(HemispherePolicy::North)
        .extract_dir(dir.path())
        .unwrap();

    let a = auto.get("pampa").unwrap();
    let b = north.get("pampa").unwrap();
    assert!((a.area_ha - b.area_ha).abs() < 1e-5);
    assert!((a.perimeter_km - b.perimeter_km).abs() < 1e-8);
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..4 {
        write_ring(dir.path(), &format!("p{i}.csv"), &square(45.0 + i as f64, 4.8));
    }

    let extractor = ParcelFeatureExtractor::new().sorted(true);
    let first = extractor.extract_dir(dir.path()).unwrap();
    let second = extractor.extract_dir(dir.path()).unwrap();
    assert_eq!(first.rows.len(), 4);
    assert_eq!(first.rows, second.rows);
}

#[test]
fn table_has_expected_columns() {
    let dir = tempfile::tempdir().unwrap();
    write_ring(dir.path(), "one.csv", &square(45.0, 4.8));
    let report = ParcelFeatureExtractor::new().extract_dir(dir.path()).unwrap();

    let mut buf = Vec::new();
    write_rows(&report.rows, OutputFormat::Csv, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), "Parcelle,Surface_ha,Perimetre_km,Complexite");
    assert!(lines.next().unwrap().starts_with("one,"));
}
