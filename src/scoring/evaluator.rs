use super::category::Category;
use crate::N_DICE;
use crate::POKER_COUNT;
use crate::STRAIGHT_SCORE;
use crate::Score;
use crate::YACHT_SCORE;
use crate::dice::DiceCount;
use crate::dice::Face;
use crate::dice::Roll;

const LARGE_STRAIGHT: [Face; N_DICE] = [Face::Six, Face::Five, Face::Four, Face::Three, Face::Two];
const SMALL_STRAIGHT: [Face; N_DICE] = [Face::Five, Face::Four, Face::Three, Face::Two, Face::One];

/// Category rules applied to a single roll.
///
/// Each `is_*` predicate decides whether the roll may be entered in a row,
/// and each `add_*` scorer computes the points it would earn there. Scorers
/// assume their predicate already holds: `add_poker` on a roll without four
/// of a kind scores zero rather than failing.
pub struct Evaluator(Roll);
impl From<Roll> for Evaluator {
    fn from(roll: Roll) -> Self {
        Self(roll)
    }
}

impl Evaluator {
    pub fn qualifies(&self, category: Category) -> bool {
        match category {
            Category::Yacht => self.is_yacht(),
            Category::LargeStraight => self.is_large_straight(),
            Category::SmallStraight => self.is_small_straight(),
            Category::Poker => self.is_poker(),
            Category::FullHouse => self.is_full_house(),
            Category::PlayerChoice => self.is_player_choice(),
            Category::Sixes => self.is_number(Face::Six),
            Category::Fives => self.is_number(Face::Five),
            Category::Fours => self.is_number(Face::Four),
            Category::Threes => self.is_number(Face::Three),
            Category::Twos => self.is_number(Face::Two),
            Category::Ones => self.is_number(Face::One),
        }
    }
    pub fn score(&self, category: Category) -> Score {
        match category {
            Category::Yacht => YACHT_SCORE,
            Category::LargeStraight => STRAIGHT_SCORE,
            Category::SmallStraight => STRAIGHT_SCORE,
            Category::Poker => self.add_poker(),
            Category::FullHouse => self.add_all(),
            Category::PlayerChoice => self.add_all(),
            Category::Sixes => self.add_number(Face::Six),
            Category::Fives => self.add_number(Face::Five),
            Category::Fours => self.add_number(Face::Four),
            Category::Threes => self.add_number(Face::Three),
            Category::Twos => self.add_number(Face::Two),
            Category::Ones => self.add_number(Face::One),
        }
    }
    /// Score for every row this roll qualifies for, in sheet order.
    pub fn find_scores(&self) -> Vec<(Category, Score)> {
        Category::all()
            .into_iter()
            .filter(|&c| self.qualifies(c))
            .map(|c| (c, self.score(c)))
            .collect()
    }

    ///

    pub fn is_yacht(&self) -> bool {
        let faces = self.0.faces();
        faces.iter().all(|f| *f == faces[0])
    }
    pub fn is_large_straight(&self) -> bool {
        self.is_straight(LARGE_STRAIGHT)
    }
    pub fn is_small_straight(&self) -> bool {
        self.is_straight(SMALL_STRAIGHT)
    }
    pub fn is_poker(&self) -> bool {
        self.counts().with_at_least(POKER_COUNT).is_some()
    }
    pub fn is_full_house(&self) -> bool {
        self.counts().signature() == [3, 2]
    }
    pub fn is_player_choice(&self) -> bool {
        true
    }
    pub fn is_number(&self, face: Face) -> bool {
        self.0.contains(face)
    }

    ///

    pub fn add_all(&self) -> Score {
        self.0.sum()
    }
    /// Only the dice of the four- or five-of-a-kind count.
    pub fn add_poker(&self) -> Score {
        self.counts()
            .with_at_least(POKER_COUNT)
            .map(|face| self.add_number(face))
            .unwrap_or(0)
    }
    pub fn add_number(&self, face: Face) -> Score {
        self.0.sum_of(face)
    }

    ///

    /// Sorts highest first, then compares position by position. Any
    /// repeated face makes the match impossible.
    fn is_straight(&self, straight: [Face; N_DICE]) -> bool {
        let mut faces = *self.0.faces();
        faces.sort_unstable_by(|a, b| b.cmp(a));
        faces.iter().zip(straight.iter()).all(|(a, b)| a == b)
    }
    fn counts(&self) -> DiceCount {
        self.0.counts()
    }
}
