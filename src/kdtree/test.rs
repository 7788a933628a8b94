use crate::kdtree::{build, IndexedPoint, KDTree, KDTreeBuilder, KDTreeIndex};
use crate::r#type::Rect;

fn points() -> Vec<(f64, f64)> {
    let coords: Vec<[i32; 2]> = vec![
        [54, 1],
        [97, 21],
        [65, 35],
        [33, 54],
        [95, 39],
        [54, 3],
        [53, 54],
        [84, 72],
        [33, 34],
        [43, 15],
        [52, 83],
        [81, 23],
        [1, 61],
        [38, 74],
        [11, 91],
        [24, 56],
        [90, 31],
        [25, 57],
        [46, 61],
        [29, 69],
        [49, 60],
        [4, 98],
        [71, 15],
        [60, 25],
        [38, 84],
        [52, 38],
        [94, 51],
        [13, 25],
        [77, 73],
        [88, 87],
        [6, 27],
        [58, 22],
        [53, 28],
        [27, 91],
        [96, 98],
        [93, 14],
        [22, 93],
        [45, 94],
        [18, 28],
        [35, 15],
        [19, 81],
        [20, 81],
        [67, 53],
        [43, 3],
        [47, 66],
        [48, 34],
        [46, 12],
        [32, 38],
        [43, 12],
        [39, 94],
        [88, 62],
        [66, 14],
        [84, 30],
        [72, 81],
        [41, 92],
        [26, 4],
        [6, 76],
        [47, 21],
        [57, 70],
        [71, 82],
        [50, 68],
        [96, 18],
        [40, 31],
        [78, 53],
        [71, 90],
        [32, 14],
        [55, 6],
        [32, 88],
        [62, 32],
        [21, 67],
        [73, 81],
        [44, 64],
        [29, 50],
        [70, 5],
        [6, 22],
        [68, 3],
        [11, 23],
        [20, 42],
        [21, 73],
        [63, 86],
        [9, 40],
        [99, 2],
        [99, 76],
        [56, 77],
        [83, 6],
        [21, 72],
        [78, 30],
        [75, 53],
        [41, 11],
        [95, 20],
        [30, 38],
        [96, 82],
        [65, 48],
        [33, 18],
        [87, 28],
        [10, 10],
        [40, 34],
        [10, 20],
        [47, 29],
        [46, 78],
    ];

    coords
        .into_iter()
        .map(|[x, y]| (x.into(), y.into()))
        .collect()
}

/// Ids of all points in pre-order, for the tree built from [`points`] in insertion order.
fn pre_order_ids() -> Vec<usize> {
    vec![
        98, 3, 65, 30, 76, 97, 95, 74, 27, 55, 77, 80, 38, 72, 90, 93, 48, 88, 43, 39, 9, 46, 62,
        47, 8, 96, 57, 33, 56, 78, 69, 12, 85, 17, 15, 40, 21, 14, 36, 41, 99, 71, 13, 19, 44, 18,
        49, 67, 24, 37, 54, 25, 22, 31, 51, 5, 0, 66, 73, 75, 23, 45, 32, 2, 68, 1, 89, 35, 84, 61,
        81, 52, 86, 11, 16, 94, 70, 83, 58, 20, 6, 60, 42, 92, 59, 79, 10, 64, 53, 7, 50, 63, 87,
        26, 4, 91, 29, 28, 34, 82,
    ]
}

fn make_index() -> KDTree<f64> {
    let points = points();

    let mut builder = KDTreeBuilder::new(points.len());
    for (i, (x, y)) in points.into_iter().enumerate() {
        builder.add(x, y, i);
    }
    builder.finish()
}

#[test]
fn creates_an_index() {
    let tree = make_index();

    assert_eq!(tree.num_items(), 100);
    assert_eq!(tree.height(), 7, "tree is balanced");

    let tree_ids: Vec<_> = tree.iter().map(|p| p.id).collect();
    assert_eq!(tree_ids, pre_order_ids(), "ids are kd-sorted");

    let root = tree.root().unwrap();
    assert_eq!(*root.id(), 98);
    assert_eq!(*root.left().unwrap().id(), 3);
    assert_eq!(*root.right().unwrap().id(), 25);
}

#[test]
fn holds_split_invariant() {
    let tree = make_index();

    for node in tree.iter().nodes() {
        let axis = node.axis().index();
        let value = node.split_value();
        if let Some(left) = node.left() {
            assert!(left.iter().all(|p| p.coord.nth(axis) <= value));
        }
        if let Some(right) = node.right() {
            assert!(right.iter().all(|p| p.coord.nth(axis) >= value));
        }
    }
}

#[test]
fn range_search() {
    let tree = make_index();

    let min_x = 20.;
    let min_y = 30.;
    let max_x = 50.;
    let max_y = 70.;

    let result = tree.range(min_x, min_y, max_x, max_y);
    let expected_ids = vec![
        3, 77, 72, 90, 62, 47, 8, 96, 69, 17, 15, 71, 19, 44, 18, 45, 20, 60,
    ];

    assert_eq!(result, expected_ids, "returns ids");

    let points = points();
    for id in result.iter() {
        let (x, y) = points[*id];
        if x < min_x || x > max_x || y < min_y || y > max_y {
            panic!("result point in range");
        }
    }
    // result points in range

    for (id, (x, y)) in points.iter().enumerate() {
        if !result.contains(&id) && *x >= min_x && *x <= max_x && *y >= min_y && *y <= max_y {
            panic!("outside point not in range");
        }
    }
    // outside points not in range
}

#[test]
fn range_search_on_edges() {
    let tree = make_index();

    // a zero-width rectangle along x = 33 touching (33, 34) and (33, 54) at its ends
    let result = tree.range_rect(&Rect::new((33., 34.), (33., 54.)));
    assert_eq!(result, vec![3, 8]);
}

#[test]
fn rebuilding_gives_the_same_tree() {
    let indexed = || {
        points()
            .into_iter()
            .enumerate()
            .map(|(i, xy)| IndexedPoint::new(xy, i))
    };
    assert_eq!(build(indexed()), build(indexed()));
    assert_eq!(build(indexed()), make_index());
}
