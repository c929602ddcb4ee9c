use super::face::Face;
use super::roll::Roll;
use std::collections::BTreeMap;

/// Occurrences of each face within a roll.
///
/// Only faces actually showing are present. A face with no dice is absent
/// from the map rather than stored with a zero, so [`DiceCount::len`] is
/// the number of distinct faces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceCount(BTreeMap<Face, usize>);

impl DiceCount {
    /// Dice showing `face`, zero when absent.
    pub fn get(&self, face: Face) -> usize {
        self.0.get(&face).copied().unwrap_or(0)
    }
    /// Number of distinct faces showing.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Present faces and their counts, highest face first.
    pub fn iter(&self) -> impl Iterator<Item = (Face, usize)> + '_ {
        self.0.iter().rev().map(|(&face, &n)| (face, n))
    }
    /// The highest face showing on at least `n` dice.
    pub fn with_at_least(&self, n: usize) -> Option<Face> {
        self.iter().find(|&(_, count)| count >= n).map(|(face, _)| face)
    }
    /// Counts with the faces forgotten, largest first. `[3, 2]` is a full house.
    pub fn signature(&self) -> Vec<usize> {
        let mut counts = self.0.values().copied().collect::<Vec<usize>>();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }
}

impl From<&Roll> for DiceCount {
    fn from(roll: &Roll) -> Self {
        Self(roll.faces().iter().fold(BTreeMap::new(), |mut count, &face| {
            *count.entry(face).or_insert(0) += 1;
            count
        }))
    }
}
impl From<Roll> for DiceCount {
    fn from(roll: Roll) -> Self {
        Self::from(&roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_faces_are_not_stored() {
        let count = DiceCount::from(Roll::try_from([4u8, 4, 4, 1, 1]).unwrap());
        assert_eq!(count.len(), 2);
        assert_eq!(count.get(Face::Four), 3);
        assert_eq!(count.get(Face::One), 2);
        assert_eq!(count.get(Face::Six), 0);
        assert!(count.iter().all(|(_, n)| n > 0));
    }

    #[test]
    fn iterates_highest_face_first() {
        let count = DiceCount::from(Roll::try_from([1u8, 3, 5, 3, 1]).unwrap());
        let faces = count.iter().map(|(f, _)| f).collect::<Vec<Face>>();
        assert_eq!(faces, vec![Face::Five, Face::Three, Face::One]);
    }

    #[test]
    fn signature_ignores_faces() {
        let a = DiceCount::from(Roll::try_from([2u8, 2, 6, 6, 6]).unwrap());
        let b = DiceCount::from(Roll::try_from([5u8, 5, 5, 3, 3]).unwrap());
        assert_eq!(a.signature(), vec![3, 2]);
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn with_at_least() {
        let count = DiceCount::from(Roll::try_from([1u8, 4, 4, 4, 4]).unwrap());
        assert_eq!(count.with_at_least(4), Some(Face::Four));
        assert_eq!(count.with_at_least(5), None);
        assert_eq!(count.with_at_least(1), Some(Face::Four));
    }
}
