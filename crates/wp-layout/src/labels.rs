//! Well label generation.
//!
//! Turns plate geometry into the full ordered sequence of well labels across
//! all plates. Labels look like `"<plate>-<position>"`: when both axes are
//! numeric the position is a single linear well number, otherwise it is a
//! row/column composite token such as `A1`.

use crate::config::{AxisSpec, Direction, PlateGeometry};
use crate::error::{LayoutError, LayoutResult};

/// A normalized axis: the explicit ordered values wells take along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisValues {
    /// Numeric axis `1..=N`.
    Numeric(Vec<u32>),
    /// Alphabetic axis `'A'..=letter`.
    Alpha(Vec<char>),
}

impl AxisValues {
    pub fn len(&self) -> usize {
        match self {
            AxisValues::Numeric(v) => v.len(),
            AxisValues::Alpha(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_alpha(&self) -> bool {
        matches!(self, AxisValues::Alpha(_))
    }

    fn token(&self, index: usize) -> String {
        match self {
            AxisValues::Numeric(v) => v[index].to_string(),
            AxisValues::Alpha(v) => v[index].to_string(),
        }
    }
}

/// The generated label sequence plus the normalized axes it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet {
    pub labels: Vec<String>,
    pub rows: AxisValues,
    pub columns: AxisValues,
}

/// Normalize one axis spec into its explicit value sequence.
///
/// A count (or a string that parses as one) becomes `1..=N`; a single letter
/// becomes `'A'..=letter` by character code. Anything else is rejected.
fn normalize_axis(spec: &AxisSpec, axis: &'static str) -> LayoutResult<AxisValues> {
    match spec {
        AxisSpec::Count(n) => Ok(AxisValues::Numeric((1..=*n).collect())),
        AxisSpec::Token(token) => {
            if let Ok(n) = token.trim().parse::<u32>() {
                return Ok(AxisValues::Numeric((1..=n).collect()));
            }
            let mut chars = token.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_ascii_alphabetic() => {
                    let last = letter.to_ascii_uppercase();
                    Ok(AxisValues::Alpha(('A'..=last).collect()))
                }
                _ => Err(LayoutError::MalformedAxis {
                    axis,
                    token: token.clone(),
                }),
            }
        }
    }
}

/// Generate the full ordered label sequence for the given geometry.
///
/// Labels are appended plate-by-plate, row-by-row, column-by-column; this is
/// the order the assigner later consumes. Sequence length is always
/// `plates * rows * columns`.
pub fn generate_labels(geometry: &PlateGeometry, direction: Direction) -> LayoutResult<LabelSet> {
    let rows = normalize_axis(&geometry.rows, "rows")?;
    let columns = normalize_axis(&geometry.columns, "columns")?;

    let mut labels = Vec::with_capacity(geometry.plates * rows.len() * columns.len());
    let plate_range = geometry.init_plate..geometry.init_plate + geometry.plates;

    match (&rows, &columns) {
        (AxisValues::Numeric(row_values), AxisValues::Numeric(column_values)) => {
            // The "rod" is the stride axis: positions advance by its length
            // per column step, so vertical fill numbers wells down a column.
            let rod = match direction {
                Direction::Vertical => row_values,
                Direction::Horizontal => column_values,
            };
            for plate in plate_range {
                let offset = if geometry.account_previous_wells {
                    plate * row_values.len() * column_values.len()
                } else {
                    0
                };
                for i in 0..row_values.len() {
                    for j in 0..column_values.len() {
                        let (row_index, column_index) = match direction {
                            Direction::Vertical => (i, j),
                            Direction::Horizontal => (j, i),
                        };
                        let position = offset + column_index * rod.len() + rod[row_index] as usize;
                        labels.push(format!("{}-{}", plate + 1, position));
                    }
                }
            }
        }
        _ => {
            // At least one alphabetic axis: compose row and column tokens,
            // swapping the axes for horizontal fill. The alphabetic token
            // leads, so labels read "A1" regardless of direction.
            let (first, second) = match direction {
                Direction::Vertical => (&rows, &columns),
                Direction::Horizontal => (&columns, &rows),
            };
            for plate in plate_range {
                for i in 0..first.len() {
                    for j in 0..second.len() {
                        let position = if first.is_alpha() {
                            format!("{}{}", first.token(i), second.token(j))
                        } else {
                            format!("{}{}", second.token(j), first.token(i))
                        };
                        labels.push(format!("{}-{}", plate + 1, position));
                    }
                }
            }
        }
    }

    Ok(LabelSet {
        labels,
        rows,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(rows: AxisSpec, columns: AxisSpec, plates: usize) -> PlateGeometry {
        PlateGeometry {
            rows,
            columns,
            plates,
            init_plate: 0,
            account_previous_wells: true,
        }
    }

    #[test]
    fn numeric_vertical_numbers_down_columns() {
        let geom = geometry(AxisSpec::Count(2), AxisSpec::Count(3), 1);
        let set = generate_labels(&geom, Direction::Vertical).unwrap();
        assert_eq!(set.labels, ["1-1", "1-3", "1-5", "1-2", "1-4", "1-6"]);
    }

    #[test]
    fn numeric_horizontal_numbers_along_rows() {
        let geom = geometry(AxisSpec::Count(2), AxisSpec::Count(3), 1);
        let set = generate_labels(&geom, Direction::Horizontal).unwrap();
        assert_eq!(set.labels, ["1-1", "1-2", "1-3", "1-4", "1-5", "1-6"]);
    }

    #[test]
    fn numeric_continuous_numbering_across_plates() {
        let geom = geometry(AxisSpec::Count(2), AxisSpec::Count(3), 2);
        let set = generate_labels(&geom, Direction::Horizontal).unwrap();
        assert_eq!(&set.labels[6..], ["2-7", "2-8", "2-9", "2-10", "2-11", "2-12"]);
    }

    #[test]
    fn numeric_per_plate_numbering_when_not_accounting_previous() {
        let mut geom = geometry(AxisSpec::Count(2), AxisSpec::Count(3), 2);
        geom.account_previous_wells = false;
        let set = generate_labels(&geom, Direction::Horizontal).unwrap();
        assert_eq!(&set.labels[6..], ["2-1", "2-2", "2-3", "2-4", "2-5", "2-6"]);
    }

    #[test]
    fn init_plate_shifts_prefixes() {
        let mut geom = geometry(AxisSpec::Count(1), AxisSpec::Count(2), 1);
        geom.init_plate = 3;
        let set = generate_labels(&geom, Direction::Vertical).unwrap();
        assert_eq!(set.labels, ["4-7", "4-8"]);
    }

    #[test]
    fn alpha_vertical_composes_row_first() {
        let geom = geometry(AxisSpec::Token("B".into()), AxisSpec::Count(3), 1);
        let set = generate_labels(&geom, Direction::Vertical).unwrap();
        assert_eq!(set.labels, ["1-A1", "1-A2", "1-A3", "1-B1", "1-B2", "1-B3"]);
    }

    #[test]
    fn alpha_horizontal_walks_columns_within_each_number() {
        let geom = geometry(AxisSpec::Token("B".into()), AxisSpec::Count(3), 1);
        let set = generate_labels(&geom, Direction::Horizontal).unwrap();
        assert_eq!(set.labels, ["1-A1", "1-B1", "1-A2", "1-B2", "1-A3", "1-B3"]);
    }

    #[test]
    fn lowercase_letter_and_numeric_string_are_accepted() {
        let geom = geometry(AxisSpec::Token("b".into()), AxisSpec::Token("3".into()), 1);
        let set = generate_labels(&geom, Direction::Vertical).unwrap();
        assert_eq!(set.rows, AxisValues::Alpha(vec!['A', 'B']));
        assert_eq!(set.columns, AxisValues::Numeric(vec![1, 2, 3]));
    }

    #[test]
    fn default_96_well_geometry() {
        let geom = geometry(AxisSpec::Token("H".into()), AxisSpec::Count(12), 1);
        let set = generate_labels(&geom, Direction::Vertical).unwrap();
        assert_eq!(set.labels.len(), 96);
        assert_eq!(set.labels[0], "1-A1");
        assert_eq!(set.labels[95], "1-H12");
    }

    #[test]
    fn malformed_axis_is_rejected() {
        let geom = geometry(AxisSpec::Token("!?".into()), AxisSpec::Count(3), 1);
        let err = generate_labels(&geom, Direction::Vertical).unwrap_err();
        assert_eq!(
            err,
            LayoutError::MalformedAxis {
                axis: "rows",
                token: "!?".into()
            }
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn label_count_and_uniqueness(
            rows in 1u32..9,
            columns in 1u32..13,
            plates in 1usize..4,
            vertical in any::<bool>(),
            account in any::<bool>(),
        ) {
            let geom = PlateGeometry {
                rows: AxisSpec::Count(rows),
                columns: AxisSpec::Count(columns),
                plates,
                init_plate: 0,
                account_previous_wells: account,
            };
            let direction = if vertical { Direction::Vertical } else { Direction::Horizontal };
            let set = generate_labels(&geom, direction).unwrap();

            prop_assert_eq!(set.labels.len(), plates * rows as usize * columns as usize);
            let distinct: HashSet<&String> = set.labels.iter().collect();
            prop_assert_eq!(distinct.len(), set.labels.len());
        }

        #[test]
        fn directions_cover_the_same_wells(rows in 1u32..9, columns in 1u32..13) {
            let geom = PlateGeometry {
                rows: AxisSpec::Count(rows),
                columns: AxisSpec::Count(columns),
                plates: 1,
                init_plate: 0,
                account_previous_wells: true,
            };
            let mut vertical = generate_labels(&geom, Direction::Vertical).unwrap().labels;
            let mut horizontal = generate_labels(&geom, Direction::Horizontal).unwrap().labels;
            vertical.sort();
            horizontal.sort();
            prop_assert_eq!(vertical, horizontal);
        }
    }
}
