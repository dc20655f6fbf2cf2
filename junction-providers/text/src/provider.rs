use std::io::BufRead;

use junction_core::{PointSet, PointSource};
use tracing::{debug, warn};

use crate::{errors::PointTextError, parse::parse_point_line};

/// Point source backed by `X,Y,Z` text lines.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use junction_core::PointSource;
/// use junction_providers_text::PointTextProvider;
///
/// let provider =
///     PointTextProvider::try_from_reader("demo", Cursor::new("1,2,3\n\nbad\n4,5,6\n"))?;
/// assert_eq!(provider.name(), "demo");
/// assert_eq!(provider.len(), 2);
/// assert_eq!(provider.skipped(), 1);
/// # Ok::<(), junction_providers_text::PointTextError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PointTextProvider {
    name: String,
    points: PointSet,
    skipped: usize,
}

impl PointTextProvider {
    /// Wraps an already parsed point set.
    #[must_use]
    pub fn new(name: impl Into<String>, points: PointSet) -> Self {
        Self {
            name: name.into(),
            points,
            skipped: 0,
        }
    }

    /// Reads points from `reader`, one per line.
    ///
    /// Blank lines are ignored. Malformed lines are skipped, counted, and
    /// logged at `warn` with their 1-based line number.
    ///
    /// # Errors
    /// Returns [`PointTextError::Io`] when reading fails and
    /// [`PointTextError::EmptyInput`] when no line parses.
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, PointTextError> {
        let name = name.into();
        let mut points = Vec::new();
        let mut skipped = 0_usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_point_line(&line) {
                Ok(point) => points.push(point),
                Err(rejection) => {
                    skipped += 1;
                    warn!(
                        data_source = %name,
                        line = index + 1,
                        reason = %rejection,
                        "skipping malformed junction box line"
                    );
                }
            }
        }

        if points.is_empty() {
            return Err(PointTextError::EmptyInput);
        }
        debug!(data_source = %name, points = points.len(), skipped, "loaded junction boxes");
        Ok(Self {
            name,
            points: PointSet::new(points),
            skipped,
        })
    }

    /// Returns how many non-blank lines were rejected.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl PointSource for PointTextProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn points(&self) -> &PointSet {
        &self.points
    }
}
