pub mod booking;
pub mod macros;
pub mod schedule;
pub mod time;

pub use booking::*;
pub use schedule::*;
pub use time::*;
