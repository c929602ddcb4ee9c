use super::face::Face;
use super::roll::Roll;
use crate::N_DICE;
use crate::N_FACES;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A source of fresh throws.
///
/// Each throw draws five independent faces uniformly from `1..=6`. The
/// default cup pulls from thread-local entropy; [`Cup::seeded`] replays
/// the same sequence of throws for a given seed.
#[derive(Debug, Clone)]
pub struct Cup(SmallRng);

impl Default for Cup {
    fn default() -> Self {
        Self::new()
    }
}

impl Cup {
    pub fn new() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
    /// A single die.
    pub fn die(&mut self) -> Face {
        Face::all()[self.0.random_range(0..N_FACES)]
    }
    /// All five dice at once.
    pub fn roll(&mut self) -> Roll {
        let mut faces = [Face::One; N_DICE];
        faces.iter_mut().for_each(|f| *f = self.die());
        Roll::from(faces)
    }
}

impl Iterator for Cup {
    type Item = Roll;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.roll())
    }
}
