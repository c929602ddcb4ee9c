use super::category::Category;
use super::evaluator::Evaluator;
use crate::Score;
use crate::dice::Roll;

/// Every category a roll qualifies for, best first.
///
/// Entries are ordered by descending score. Equal scores keep the fixed
/// sheet order of [`Category::all`], so `fullHouse` precedes
/// `playerChoice` when both score 14. Categories the roll does not
/// qualify for are absent rather than listed with zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scores(Vec<(Category, Score)>);

impl Scores {
    pub fn iter(&self) -> impl Iterator<Item = &(Category, Score)> {
        self.0.iter()
    }
    pub fn get(&self, category: Category) -> Option<Score> {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, score)| *score)
    }
    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }
    /// The highest scoring category. `playerChoice` always qualifies, so
    /// an evaluated roll always has one.
    pub fn best(&self) -> Option<(Category, Score)> {
        self.0.first().copied()
    }
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().map(|(c, _)| *c)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Roll> for Scores {
    fn from(roll: Roll) -> Self {
        Self::from(Evaluator::from(roll))
    }
}
impl From<Evaluator> for Scores {
    fn from(e: Evaluator) -> Self {
        Self::from(e.find_scores())
    }
}
/// Pairs arrive in sheet order; the stable sort keeps it among ties.
impl From<Vec<(Category, Score)>> for Scores {
    fn from(mut pairs: Vec<(Category, Score)>) -> Self {
        pairs.sort_by(|(_, a), (_, b)| b.cmp(a));
        Self(pairs)
    }
}
impl From<Scores> for Vec<(Category, Score)> {
    fn from(scores: Scores) -> Self {
        scores.0
    }
}

impl IntoIterator for Scores {
    type Item = (Category, Score);
    type IntoIter = std::vec::IntoIter<(Category, Score)>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Serialized as a JSON object whose key order is the ranking.
#[cfg(feature = "client")]
impl serde::Serialize for Scores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, score) in self.0.iter() {
            map.serialize_entry(category.name(), score)?;
        }
        map.end()
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (category, score) in self.0.iter() {
            writeln!(f, "{:<14}{:>3}", category.name(), score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_descending_and_stable() {
        let scores = Scores::from(vec![
            (Category::Fours, 12),
            (Category::FullHouse, 14),
            (Category::PlayerChoice, 14),
            (Category::Ones, 2),
        ]);
        assert_eq!(
            scores.categories().collect::<Vec<_>>(),
            vec![
                Category::FullHouse,
                Category::PlayerChoice,
                Category::Fours,
                Category::Ones,
            ]
        );
    }

    #[test]
    fn lookups() {
        let scores = Scores::from(Roll::try_from([4u8, 4, 4, 1, 1]).unwrap());
        assert_eq!(scores.get(Category::Fours), Some(12));
        assert_eq!(scores.get(Category::Poker), None);
        assert!(scores.contains(Category::Ones));
        assert_eq!(scores.best(), Some((Category::FullHouse, 14)));
        assert_eq!(scores.len(), 4);
    }

    #[test]
    fn display() {
        let scores = Scores::from(Roll::try_from([3u8, 3, 3, 3, 3]).unwrap());
        let text = scores.to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("yacht"));
        assert!(first.ends_with("50"));
        assert_eq!(text.lines().count(), scores.len());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn serializes_in_rank_order() {
        let scores = Scores::from(Roll::try_from([1u8, 4, 4, 4, 4]).unwrap());
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"playerChoice":17,"poker":16,"fours":16,"ones":1}"#);
    }
}
