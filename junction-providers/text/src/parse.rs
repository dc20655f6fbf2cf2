use junction_core::Point;

use crate::errors::LineRejection;

/// Parses one `X,Y,Z` line into a [`Point`].
///
/// Surrounding whitespace on the line and on each field is ignored.
///
/// # Errors
/// Returns [`LineRejection`] when the line does not hold exactly three
/// integers.
///
/// # Examples
/// ```
/// use junction_core::Point;
/// use junction_providers_text::{LineRejection, parse_point_line};
///
/// assert_eq!(parse_point_line(" 1, -2 ,3 "), Ok(Point::new(1, -2, 3)));
/// assert_eq!(
///     parse_point_line("1,2"),
///     Err(LineRejection::FieldCount { found: 2 })
/// );
/// ```
pub fn parse_point_line(line: &str) -> Result<Point, LineRejection> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    let [x, y, z] = fields.as_slice() else {
        return Err(LineRejection::FieldCount {
            found: fields.len(),
        });
    };
    Ok(Point::new(
        coordinate('X', x)?,
        coordinate('Y', y)?,
        coordinate('Z', z)?,
    ))
}

fn coordinate(axis: char, raw: &str) -> Result<i64, LineRejection> {
    raw.parse::<i64>()
        .map_err(|_| LineRejection::InvalidCoordinate {
            axis,
            raw: raw.to_owned(),
        })
}
