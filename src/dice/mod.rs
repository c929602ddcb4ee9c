pub mod count;
pub use count::*;

pub mod cup;
pub use cup::*;

pub mod error;
pub use error::*;

pub mod face;
pub use face::*;

pub mod roll;
pub use roll::*;
