use super::error::RollError;

/// The pip value showing on a single die.
///
/// Discriminants match the pip count so that `u8::from(face)` is the
/// value added to a score.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl Face {
    /// All six faces, highest first.
    pub const fn all() -> [Face; crate::N_FACES] {
        [
            Face::Six,
            Face::Five,
            Face::Four,
            Face::Three,
            Face::Two,
            Face::One,
        ]
    }
    pub fn pips(&self) -> u8 {
        *self as u8
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Face {
    type Error = RollError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Face::One),
            2 => Ok(Face::Two),
            3 => Ok(Face::Three),
            4 => Ok(Face::Four),
            5 => Ok(Face::Five),
            6 => Ok(Face::Six),
            _ => Err(RollError::InvalidDieFace(n.to_string())),
        }
    }
}
impl From<Face> for u8 {
    fn from(f: Face) -> u8 {
        f as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Face {
    type Error = RollError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| RollError::InvalidDieFace(s.trim().to_string()))
            .and_then(Face::try_from)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.pips())
    }
}
