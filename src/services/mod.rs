pub mod catalog;
pub mod news;

pub use catalog::*;
pub use news::*;
