// src/domain/core.rs
use thiserror::Error;

pub type BidderName = String;

/// What the display shows as leader before the first accepted bid.
pub const NO_BIDS_YET: &str = "No bids yet";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Please enter a valid price.")]
    InvalidPrice(String),

    #[error("Please enter a valid bid amount.")]
    InvalidAmount(String),

    #[error("No item has been added to the auction.")]
    NoActiveLot,

    #[error("Auction is not running. Please start the auction.")]
    AuctionNotRunning,

    #[error("The cart total is too large to add this item.")]
    TotalOutOfRange,
}
