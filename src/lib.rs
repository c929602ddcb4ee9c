//! Hand evaluation and category scoring for the dice game Yacht.
//!
//! A [`Roll`](dice::Roll) of five dice is checked against each of the twelve
//! [`Category`](scoring::Category) rows of the score sheet. The result is a
//! [`Scores`](scoring::Scores) ranking of every row the roll qualifies for.
//!
//! ```
//! let scores = yacht::evaluate(&[4, 4, 4, 1, 1]).unwrap();
//! assert_eq!(scores.best(), Some((yacht::scoring::Category::FullHouse, 14)));
//! ```
pub mod dice;
pub mod scoring;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Points awarded by a category.
pub type Score = u16;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Dice thrown per roll.
pub const N_DICE: usize = 5;
/// Faces on each die.
pub const N_FACES: usize = 6;
/// Rows on the score sheet.
pub const N_CATEGORIES: usize = 12;
/// Dice that must share a face for poker.
pub const POKER_COUNT: usize = 4;
/// Fixed award for five of a kind.
pub const YACHT_SCORE: Score = 50;
/// Fixed award for either straight.
pub const STRAIGHT_SCORE: Score = 30;

/// How a game of Yacht is played.
pub const RULES: &str = "\
How to Play

A turn starts with a player rolling all five dice. The player may then set
aside any number of dice, rerolling the others, or stop rolling and proceed
to scoring. It is legal for a player to reroll all five dice. It is also
legal to reroll dice previously set aside.

On each turn, a player has a maximum of three rolls. After a third roll,
the player must stop rolling and proceed to scoring.

Each player will have 12 turns during the game. After each turn, the player
must enter a score in one of the rows on the score sheet.

Example: Ana rolls a 1-2-2-4-6. For her second roll, she decides to keep
the 2s and reroll the other three dice. She rolls 4-4-6, so she now has
2-2-4-4-6. She has already scored a Full House, so for her third roll, she
decides to keep the 4s and reroll the other three dice. She rolls 1-4-4 and
now has 1-4-4-4-4. She decides to score for Four of a Kind.

It is likely that a player will make a roll that does not qualify to earn
points in any of the remaining categories. In this case, the player must
mark a \"0\" in one of the available categories.
";

// ============================================================================
// EVALUATION
// ============================================================================
/// Validates five dice and ranks every category they qualify for.
///
/// Fails with [`RollError`](dice::RollError) before any category is
/// checked if there are not exactly five dice or a face is outside `1..=6`.
pub fn evaluate(dice: &[u8]) -> Result<scoring::Scores, dice::RollError> {
    let roll = dice::Roll::try_from(dice)?;
    let scores = scoring::Scores::from(roll);
    log::debug!("{} -> {} categories", roll, scores.len());
    Ok(scores)
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
