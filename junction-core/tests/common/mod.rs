use junction_core::{Point, PointSet, PointSource};
use junction_test_support::fixtures::sample_coordinates;

#[derive(Clone)]
pub struct Named {
    name: &'static str,
    points: PointSet,
}

impl Named {
    #[must_use]
    pub fn new(name: &'static str, coords: &[(i64, i64, i64)]) -> Self {
        Self {
            name,
            points: coords.iter().copied().map(Point::from).collect(),
        }
    }

    #[must_use]
    pub fn sample() -> Self {
        Self::new("sample", &sample_coordinates())
    }
}

impl PointSource for Named {
    fn name(&self) -> &str {
        self.name
    }

    fn points(&self) -> &PointSet {
        &self.points
    }
}
