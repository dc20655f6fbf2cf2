//! Shared input fixtures.

/// The twenty-box worked example.
///
/// After the ten shortest pairs the three largest circuits hold 5, 4 and 2
/// boxes, and the last pair needed to join everything is boxes 10 and 12
/// (X coordinates 216 and 117).
pub const SAMPLE_JUNCTION_BOXES: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

/// Connection budget used by the worked example.
pub const SAMPLE_CONNECTION_BUDGET: usize = 10;

/// Bounded-pass answer for the worked example.
pub const SAMPLE_PART_ONE: u64 = 40;

/// Connectivity answer for the worked example.
pub const SAMPLE_PART_TWO: i64 = 25_272;

/// Parses `SAMPLE_JUNCTION_BOXES` into coordinate triples.
///
/// # Examples
/// ```
/// use junction_test_support::fixtures::sample_coordinates;
///
/// let coords = sample_coordinates();
/// assert_eq!(coords.len(), 20);
/// assert_eq!(coords[0], (162, 817, 812));
/// ```
#[must_use]
pub fn sample_coordinates() -> Vec<(i64, i64, i64)> {
    SAMPLE_JUNCTION_BOXES
        .lines()
        .filter_map(|line| {
            let mut fields = line.split(',').map(|field| field.trim().parse::<i64>());
            match (fields.next(), fields.next(), fields.next(), fields.next()) {
                (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Some((x, y, z)),
                _ => None,
            }
        })
        .collect()
}
