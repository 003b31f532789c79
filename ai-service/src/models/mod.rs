pub mod event;
pub mod interest;

pub use event::Event;
pub use interest::Interest;
