//! Integration tests covering the text-backed [`PointSource`] implementation.
use std::io::Cursor;

use junction_core::{Point, PointSet, PointSource};
use junction_providers_text::{PointTextError, PointTextProvider};
use junction_test_support::{fixtures::SAMPLE_JUNCTION_BOXES, tracing::RecordingLayer};
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[rstest]
fn sample_input_loads_every_box() {
    let provider = PointTextProvider::try_from_reader("sample", Cursor::new(SAMPLE_JUNCTION_BOXES))
        .expect("sample must load");
    assert_eq!(provider.len(), 20);
    assert_eq!(provider.skipped(), 0);
    assert_eq!(provider.points().get(0), Some(Point::new(162, 817, 812)));
    assert_eq!(provider.points().get(19), Some(Point::new(425, 690, 689)));
}

#[rstest]
#[case("1,2,3\n4,5,6\n", 2)]
#[case("1,2,3\r\n4,5,6\r\n", 2)]
#[case("\n\n  \n1,2,3\n\n", 1)]
#[case("1,2,3", 1)]
fn blank_lines_and_line_endings_are_ignored(#[case] raw: &str, #[case] expected: usize) {
    let provider =
        PointTextProvider::try_from_reader("demo", Cursor::new(raw)).expect("provider must build");
    assert_eq!(provider.len(), expected);
    assert_eq!(provider.skipped(), 0);
}

#[rstest]
fn malformed_lines_are_skipped_with_warning() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let raw = "1,2,3\nnot a point\n4,5\n\n7,8,9\n";

    let provider = tracing::subscriber::with_default(subscriber, || {
        PointTextProvider::try_from_reader("demo", Cursor::new(raw))
    })
    .expect("valid lines must load");

    assert_eq!(provider.len(), 2);
    assert_eq!(provider.skipped(), 2);
    assert_eq!(provider.points().get(1), Some(Point::new(7, 8, 9)));

    let warnings = layer.events_at(Level::WARN);
    let lines: Vec<&str> = warnings
        .iter()
        .filter_map(|event| event.field("line"))
        .collect();
    assert_eq!(lines, ["2", "3"]);
    assert!(
        warnings
            .iter()
            .all(|event| event.field("data_source") == Some("demo"))
    );
}

#[rstest]
#[case("")]
#[case("\n \n")]
#[case("x,y,z\n")]
fn input_without_points_is_rejected(#[case] raw: &str) {
    let err = PointTextProvider::try_from_reader("demo", Cursor::new(raw))
        .expect_err("input without points must fail");
    assert!(matches!(err, PointTextError::EmptyInput));
}

#[rstest]
fn try_from_reader_propagates_io_error() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    impl std::io::BufRead for FailingReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::other("boom"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    let err = PointTextProvider::try_from_reader("demo", FailingReader)
        .expect_err("I/O failure must propagate");
    assert!(matches!(err, PointTextError::Io(_)));
}

#[rstest]
fn new_wraps_existing_points() {
    let points = PointSet::new(vec![Point::new(0, 0, 0), Point::new(1, 1, 1)]);
    let provider = PointTextProvider::new("inline", points.clone());
    assert_eq!(provider.name(), "inline");
    assert_eq!(provider.points(), &points);
    assert_eq!(provider.skipped(), 0);
}
