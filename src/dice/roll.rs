use super::count::DiceCount;
use super::error::RollError;
use super::face::Face;
use crate::N_DICE;

/// Five dice on the table.
///
/// A `Roll` can only be built from exactly five valid faces, and it keeps
/// them sorted highest first regardless of the order they were given in.
/// Every category rule is invariant to permutation, so two rolls holding
/// the same multiset of faces compare equal.
///
/// # Parsing
///
/// Rolls parse from digits separated by whitespace, commas or dashes
/// (`"4 4 4 1 1"`, `"4,4,4,1,1"`, `"4-4-4-1-1"`) or packed together
/// (`"44411"`). A dash separates only between digits; a leading minus
/// belongs to its token.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct Roll([Face; N_DICE]);

impl Roll {
    /// The faces, highest first.
    pub fn faces(&self) -> &[Face; N_DICE] {
        &self.0
    }
    /// Total pips across all five dice.
    pub fn sum(&self) -> u16 {
        self.0.iter().map(|f| f.pips() as u16).sum()
    }
    /// Total pips across the dice showing `face` only.
    pub fn sum_of(&self, face: Face) -> u16 {
        self.0
            .iter()
            .filter(|&&f| f == face)
            .map(|f| f.pips() as u16)
            .sum()
    }
    pub fn contains(&self, face: Face) -> bool {
        self.0.contains(&face)
    }
    pub fn counts(&self) -> DiceCount {
        DiceCount::from(self)
    }
}

/// Faces are sorted on the way in.
impl From<[Face; N_DICE]> for Roll {
    fn from(mut faces: [Face; N_DICE]) -> Self {
        faces.sort_unstable_by(|a, b| b.cmp(a));
        Self(faces)
    }
}

impl From<Roll> for [u8; N_DICE] {
    fn from(roll: Roll) -> Self {
        roll.0.map(u8::from)
    }
}

/// Shape is checked before any face, so a short roll of bad faces
/// reports the length.
impl TryFrom<&[u8]> for Roll {
    type Error = RollError;
    fn try_from(dice: &[u8]) -> Result<Self, Self::Error> {
        let dice = <[u8; N_DICE]>::try_from(dice)
            .map_err(|_| RollError::InvalidRollShape { len: dice.len() })?;
        Self::try_from(dice)
    }
}
impl TryFrom<[u8; N_DICE]> for Roll {
    type Error = RollError;
    fn try_from(dice: [u8; N_DICE]) -> Result<Self, Self::Error> {
        let mut faces = [Face::One; N_DICE];
        for (slot, pips) in faces.iter_mut().zip(dice) {
            *slot = Face::try_from(pips)?;
        }
        Ok(Self::from(faces))
    }
}
impl TryFrom<Vec<u8>> for Roll {
    type Error = RollError;
    fn try_from(dice: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(dice.as_slice())
    }
}

/// str isomorphism
impl TryFrom<&str> for Roll {
    type Error = RollError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .flat_map(dashed)
            .collect::<Vec<&str>>();
        let tokens: Vec<&str> = match tokens.as_slice() {
            &[packed] if packed.len() > 1 && packed.chars().all(|c| c.is_ascii_digit()) => {
                (0..packed.len()).map(|i| &packed[i..i + 1]).collect()
            }
            _ => tokens.clone(),
        };
        if tokens.len() != N_DICE {
            return Err(RollError::InvalidRollShape { len: tokens.len() });
        }
        let mut faces = [Face::One; N_DICE];
        for (slot, token) in faces.iter_mut().zip(tokens) {
            *slot = Face::try_from(token)?;
        }
        Ok(Self::from(faces))
    }
}

/// Splits `6-5-4-3-2` into digits. A dash only separates when it sits
/// between two digits, so `-5` stays whole and fails as a face.
fn dashed(token: &str) -> Vec<&str> {
    let digits = token.split('-').collect::<Vec<&str>>();
    match digits.len() > 1
        && digits
            .iter()
            .all(|d| !d.is_empty() && d.chars().all(|c| c.is_ascii_digit()))
    {
        true => digits,
        false => vec![token],
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let pips = self.0.iter().map(Face::to_string).collect::<Vec<String>>();
        write!(f, "{}", pips.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_descending() {
        let roll = Roll::try_from([1u8, 4, 4, 4, 4]).unwrap();
        assert_eq!(<[u8; N_DICE]>::from(roll), [4, 4, 4, 4, 1]);
    }

    #[test]
    fn permutations_are_equal() {
        let a = Roll::try_from([2u8, 3, 4, 5, 6]).unwrap();
        let b = Roll::try_from([6u8, 4, 2, 5, 3]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sums() {
        let roll = Roll::try_from([4u8, 4, 4, 1, 1]).unwrap();
        assert_eq!(roll.sum(), 14);
        assert_eq!(roll.sum_of(Face::Four), 12);
        assert_eq!(roll.sum_of(Face::One), 2);
        assert_eq!(roll.sum_of(Face::Six), 0);
        assert!(roll.contains(Face::One));
        assert!(!roll.contains(Face::Two));
    }

    #[test]
    fn short_roll_is_a_shape_error() {
        let dice: &[u8] = &[1, 2, 3, 4];
        assert_eq!(
            Roll::try_from(dice),
            Err(RollError::InvalidRollShape { len: 4 })
        );
    }

    #[test]
    fn long_roll_is_never_truncated() {
        assert_eq!(
            Roll::try_from(vec![1u8, 2, 3, 4, 5, 6]),
            Err(RollError::InvalidRollShape { len: 6 })
        );
    }

    #[test]
    fn shape_is_checked_before_faces() {
        let dice: &[u8] = &[0, 9];
        assert_eq!(
            Roll::try_from(dice),
            Err(RollError::InvalidRollShape { len: 2 })
        );
    }

    #[test]
    fn out_of_range_face() {
        assert_eq!(
            Roll::try_from([1u8, 2, 7, 4, 5]),
            Err(RollError::InvalidDieFace("7".into()))
        );
        assert_eq!(
            Roll::try_from([0u8, 2, 3, 4, 5]),
            Err(RollError::InvalidDieFace("0".into()))
        );
    }

    #[test]
    fn parse_separators() {
        let expected = Roll::try_from([4u8, 4, 4, 1, 1]).unwrap();
        assert_eq!(Roll::try_from("4 4 4 1 1"), Ok(expected));
        assert_eq!(Roll::try_from("4,4,4,1,1"), Ok(expected));
        assert_eq!(Roll::try_from("1-1-4-4-4"), Ok(expected));
        assert_eq!(Roll::try_from("44411"), Ok(expected));
        assert_eq!(Roll::try_from(" 4, 4 4-1 1 "), Ok(expected));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Roll::try_from("1 2 3 4"),
            Err(RollError::InvalidRollShape { len: 4 })
        );
        assert_eq!(
            Roll::try_from("1 2 x 4 5"),
            Err(RollError::InvalidDieFace("x".into()))
        );
        assert_eq!(
            Roll::try_from(""),
            Err(RollError::InvalidRollShape { len: 0 })
        );
    }

    #[test]
    fn negative_faces_are_not_dash_separators() {
        assert_eq!(
            Roll::try_from("1 2 3 4 -5"),
            Err(RollError::InvalidDieFace("-5".into()))
        );
        assert_eq!(
            Roll::try_from("-6 -5 -4 -3 -2"),
            Err(RollError::InvalidDieFace("-6".into()))
        );
        assert_eq!(
            Roll::try_from("6 -5 4 3 2"),
            Err(RollError::InvalidDieFace("-5".into()))
        );
        assert!(Roll::try_from("6-5-4-3-").is_err());
        assert!(Roll::try_from("6--5-4-3-2").is_err());
    }

    #[test]
    fn display() {
        let roll = Roll::try_from([2u8, 3, 4, 5, 6]).unwrap();
        assert_eq!(roll.to_string(), "6-5-4-3-2");
        assert_eq!(Roll::try_from(roll.to_string().as_str()), Ok(roll));
    }
}
