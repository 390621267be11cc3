use crate::result::ValidationError;
use crate::types::{FeatureType, Position};

/// The most values a position may hold: longitude and latitude.
pub const MAX_POSITION_VALUES: usize = 2;

/// Where validation found a coordinate sequence holding too many values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Indices leading from the outermost coordinate sequence to the offending one.
    /// Empty when the outermost sequence itself is at fault.
    pub path: Vec<usize>,
    /// The number of values found in the offending sequence.
    pub len: usize,
}

/// A coordinate payload of some fixed nesting depth.
///
/// Implemented for a single [Position] and, recursively, for any `Vec` of
/// coordinates, so a single traversal serves every geometry type.
pub trait Coordinates {
    /// Walks the payload outer to inner, first to last, and returns the length of the
    /// first position holding more than [MAX_POSITION_VALUES] values. `path` is left
    /// holding the indices that lead to it.
    fn first_oversized(&self, path: &mut Vec<usize>) -> Option<usize>;

    /// The number of non-empty positions in the payload.
    fn position_count(&self) -> usize;
}

impl Coordinates for Position {
    #[inline]
    fn first_oversized(&self, _path: &mut Vec<usize>) -> Option<usize> {
        (self.len() > MAX_POSITION_VALUES).then(|| self.len())
    }

    #[inline]
    fn position_count(&self) -> usize {
        usize::from(!self.is_empty())
    }
}

impl<T: Coordinates> Coordinates for Vec<T> {
    fn first_oversized(&self, path: &mut Vec<usize>) -> Option<usize> {
        for (i, inner) in self.iter().enumerate() {
            path.push(i);
            if let Some(len) = inner.first_oversized(path) {
                return Some(len);
            }
            path.pop();
        }
        None
    }

    fn position_count(&self) -> usize {
        self.iter().map(Coordinates::position_count).sum()
    }
}

/// Find the first position in `coordinates` with too many values.
pub fn find_oversized<C: Coordinates>(coordinates: &C) -> Option<Violation> {
    let mut path = Vec::new();
    coordinates
        .first_oversized(&mut path)
        .map(|len| Violation { path, len })
}

/// Shared behaviour of every geometry field.
pub trait Validate {
    /// The discriminator stamped on the field at construction.
    fn feature_type(&self) -> FeatureType;

    /// Locate the first coordinate sequence that breaks the field's shape rules.
    fn find_violation(&self) -> Option<Violation>;

    /// The number of non-empty positions held by the field.
    fn position_count(&self) -> usize;

    /// Returns an error if a coordinate sequence checked for this geometry type
    /// holds more than [MAX_POSITION_VALUES] values.
    fn validate(&self) -> Result<(), ValidationError> {
        match self.find_violation() {
            None => Ok(()),
            Some(violation) => {
                log::debug!(
                    "{} coordinates at {:?} hold {} values, at most {} allowed",
                    self.feature_type(),
                    violation.path,
                    violation.len,
                    MAX_POSITION_VALUES
                );
                Err(ValidationError::CoordinateTooManyValues)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_lengths() {
        assert_eq!(find_oversized(&vec![1.0, 2.0]), None);
        assert_eq!(find_oversized(&Vec::<f64>::new()), None);
        assert_eq!(
            find_oversized(&vec![1.0, 2.0, 3.0]),
            Some(Violation {
                path: vec![],
                len: 3
            })
        );
    }

    #[test]
    fn path_points_at_first_offender() {
        let rings: Vec<Vec<Position>> = vec![
            vec![vec![0.0, 0.0], vec![1.0, 1.0]],
            vec![vec![0.0, 0.0], vec![1.0, 1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0]],
        ];
        assert_eq!(
            find_oversized(&rings),
            Some(Violation {
                path: vec![1, 1],
                len: 4
            })
        );
    }

    #[test]
    fn empty_levels_are_fine() {
        let rings: Vec<Vec<Position>> = vec![vec![], vec![vec![]]];
        assert_eq!(find_oversized(&rings), None);
        assert_eq!(rings.position_count(), 0);
    }

    #[test]
    fn counts_positions() {
        let line: Vec<Position> = vec![vec![0.0, 0.0], vec![], vec![1.0, 2.0]];
        assert_eq!(line.position_count(), 2);
    }
}
