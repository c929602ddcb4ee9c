use crate::dice::Face;

/// A row on the Yacht score sheet.
///
/// Variants are declared in the fixed sheet order. That order is also the
/// tie-break when two categories award the same score.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "camelCase"))]
pub enum Category {
    Yacht,
    LargeStraight,
    SmallStraight,
    Poker,
    FullHouse,
    PlayerChoice,
    Sixes,
    Fives,
    Fours,
    Threes,
    Twos,
    Ones,
}

impl Category {
    pub const fn all() -> [Category; crate::N_CATEGORIES] {
        [
            Category::Yacht,
            Category::LargeStraight,
            Category::SmallStraight,
            Category::Poker,
            Category::FullHouse,
            Category::PlayerChoice,
            Category::Sixes,
            Category::Fives,
            Category::Fours,
            Category::Threes,
            Category::Twos,
            Category::Ones,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Yacht => "yacht",
            Category::LargeStraight => "largeStraight",
            Category::SmallStraight => "smallStraight",
            Category::Poker => "poker",
            Category::FullHouse => "fullHouse",
            Category::PlayerChoice => "playerChoice",
            Category::Sixes => "sixes",
            Category::Fives => "fives",
            Category::Fours => "fours",
            Category::Threes => "threes",
            Category::Twos => "twos",
            Category::Ones => "ones",
        }
    }

    /// What a roll needs to score in this row. Display only.
    pub fn rule(&self) -> &'static str {
        match self {
            Category::Yacht => "Five dice with the same number",
            Category::LargeStraight => "Five in a row starting with 6 (i.e. 6-5-4-3-2)",
            Category::SmallStraight => "Five in a row starting with 5 (i.e. 5-4-3-2-1)",
            Category::Poker => "Four of the same number",
            Category::FullHouse => "Three of one number, two of a different number (e.g. 4-4-4-1-1)",
            Category::PlayerChoice => "Any combination of dice",
            Category::Sixes => "Only sixes count for scoring",
            Category::Fives => "Only fives count for scoring",
            Category::Fours => "Only fours count for scoring",
            Category::Threes => "Only threes count for scoring",
            Category::Twos => "Only twos count for scoring",
            Category::Ones => "Only ones count for scoring",
        }
    }

    /// The counted face, for the six number rows.
    pub fn face(&self) -> Option<Face> {
        match self {
            Category::Sixes => Some(Face::Six),
            Category::Fives => Some(Face::Five),
            Category::Fours => Some(Face::Four),
            Category::Threes => Some(Face::Three),
            Category::Twos => Some(Face::Two),
            Category::Ones => Some(Face::One),
            _ => None,
        }
    }
}

/// Number row for a face.
impl From<Face> for Category {
    fn from(face: Face) -> Self {
        match face {
            Face::Six => Category::Sixes,
            Face::Five => Category::Fives,
            Face::Four => Category::Fours,
            Face::Three => Category::Threes,
            Face::Two => Category::Twos,
            Face::One => Category::Ones,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Category {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|c| c.name() == s.trim())
            .ok_or_else(|| format!("unknown category: {}", s.trim()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_order_matches_declaration_order() {
        let all = Category::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all.first(), Some(&Category::Yacht));
        assert_eq!(all.last(), Some(&Category::Ones));
    }

    #[test]
    fn bijective_str() {
        for category in Category::all() {
            assert_eq!(Category::try_from(category.name()), Ok(category));
        }
        assert!(Category::try_from("chance").is_err());
    }

    #[test]
    fn number_rows_round_trip_faces() {
        for face in Face::all() {
            assert_eq!(Category::from(face).face(), Some(face));
        }
        assert_eq!(Category::PlayerChoice.face(), None);
    }
}
