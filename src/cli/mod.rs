pub mod args;
pub use args::*;

pub mod run;
pub use run::*;
