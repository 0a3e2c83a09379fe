pub mod record;
pub mod tool;
pub mod view;

pub use record::*;
pub use tool::*;
pub use view::*;
