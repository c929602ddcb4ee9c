pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod scores;
pub use scores::*;
