//! Querying a point index the way a map front-end does.
//!
//! The index is built once at startup. Every pan or zoom queries it with the visible bounds, and
//! rectangles drawn on the map replace the viewport query with the union of their matches.
//!
//! Run with `RUST_LOG=debug` to see the index's log events.

use geo_kdtree::kdtree::{IndexedPoint, KDTree, KDTreeIndex};
use geo_kdtree::Rect;
use tracing_subscriber::EnvFilter;

/// A row of the caller's own table. The index only ever sees its position.
struct Venue {
    name: &'static str,
    lat: f64,
    lon: f64,
}

fn venues() -> Vec<Venue> {
    vec![
        Venue {
            name: "Bar do Zé",
            lat: -19.9191,
            lon: -43.9386,
        },
        Venue {
            name: "Café Central",
            lat: -19.9245,
            lon: -43.9352,
        },
        Venue {
            name: "Restaurante Mineiro",
            lat: -19.9320,
            lon: -43.9378,
        },
        Venue {
            name: "Boteco da Savassi",
            lat: -19.9380,
            lon: -43.9335,
        },
        Venue {
            name: "Cantina do Lourdes",
            lat: -19.9302,
            lon: -43.9441,
        },
        Venue {
            name: "Pampulha Grill",
            lat: -19.8512,
            lon: -43.9702,
        },
        Venue {
            name: "Mercado Novo",
            lat: -19.9172,
            lon: -43.9441,
        },
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let venues = venues();
    let tree: KDTree<f64> = venues
        .iter()
        .enumerate()
        .map(|(row, venue)| IndexedPoint::new((venue.lat, venue.lon), row))
        .collect();

    println!("Indexed {} venues, tree height {}", tree.num_items(), tree.height());

    // 1. The visible map bounds, as (south-west, north-east) corners.
    println!("\nViewport:");
    let viewport = Rect::new((-19.94, -43.95), (-19.91, -43.93));
    print_rows(&venues, &tree.range_rect(&viewport));

    // 2. Two rectangles drawn by the user. Drawing tools report arbitrary opposite corners and
    // the rectangles may overlap; matches are reported once.
    println!("\nDrawn rectangles:");
    let drawn = [
        Rect::from_corners((-19.915, -43.945), (-19.925, -43.935)),
        Rect::from_corners((-19.94, -43.94), (-19.92, -43.93)),
    ];
    print_rows(&venues, &tree.range_many(&drawn));

    // 3. A rectangle drawn as a closed GeoJSON ring of (lon, lat) vertices.
    println!("\nDrawn polygon:");
    let ring = [
        [-43.98, -19.86],
        [-43.98, -19.84],
        [-43.96, -19.84],
        [-43.96, -19.86],
        [-43.98, -19.86],
    ];
    if let Some(rect) = Rect::bounding(ring.iter().map(|[lon, lat]| (*lat, *lon))) {
        print_rows(&venues, &tree.range_rect(&rect));
    }
}

fn print_rows(venues: &[Venue], rows: &[usize]) {
    if rows.is_empty() {
        println!("  (nothing here)");
    }
    for &row in rows {
        let venue = &venues[row];
        println!("  {:<22} ({:.4}, {:.4})", venue.name, venue.lat, venue.lon);
    }
}
