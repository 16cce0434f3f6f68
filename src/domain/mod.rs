// src/domain/mod.rs
pub mod auction_desk;
pub mod billing_desk;
pub mod cart;
pub mod clock;
pub mod core;
pub mod display;
pub mod lot;

pub use self::auction_desk::*;
pub use self::billing_desk::*;
pub use self::cart::*;
pub use self::clock::{AuctionClock, ClockEvent, ClockEvents, ClockNotice, ClockSender, Phase};
pub use self::core::*;
pub use self::display::*;
pub use self::lot::*;
