// src/domain/lot.rs
use log::{debug, info};
use serde::{Deserialize, Serialize};
use crate::money::Amount;
use super::core::{BidderName, Errors, NO_BIDS_YET};

/// The single item up for auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    pub name: String,
    #[serde(rename = "currentPrice")]
    pub current_price: Amount,
    /// `None` until the first accepted bid.
    #[serde(rename = "leadingBidder")]
    pub leading_bidder: Option<BidderName>,
}

impl Lot {
    pub fn new(name: impl Into<String>, starting_price: Amount) -> Self {
        Lot {
            name: name.into(),
            current_price: starting_price,
            leading_bidder: None,
        }
    }

    pub fn leader_display(&self) -> &str {
        self.leading_bidder.as_deref().unwrap_or(NO_BIDS_YET)
    }

    fn accepts(&self, amount: Amount) -> bool {
        amount > self.current_price
    }
}

/// Holds at most one lot. Setting a new lot discards the previous one.
#[derive(Debug, Default)]
pub struct BiddingModel {
    lot: Option<Lot>,
}

impl BiddingModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_lot(&mut self, name: impl Into<String>, starting_price: Amount) -> &Lot {
        let lot = Lot::new(name, starting_price);
        info!("new lot {:?} starting at {}", lot.name, lot.current_price);
        self.lot.insert(lot)
    }

    /// Returns `Ok(false)` for a bid that does not strictly exceed the current price.
    pub fn place_bid(&mut self, bidder: impl Into<BidderName>, amount: Amount) -> Result<bool, Errors> {
        let lot = self.lot.as_mut().ok_or(Errors::NoActiveLot)?;
        let bidder = bidder.into();

        if !lot.accepts(amount) {
            debug!("bid of {} by {:?} does not beat {}", amount, bidder, lot.current_price);
            return Ok(false);
        }

        info!("{:?} leads {:?} with {}", bidder, lot.name, amount);
        lot.current_price = amount;
        lot.leading_bidder = Some(bidder);
        Ok(true)
    }

    pub fn snapshot(&self) -> Result<Lot, Errors> {
        self.lot.clone().ok_or(Errors::NoActiveLot)
    }

    pub fn lot(&self) -> Option<&Lot> {
        self.lot.as_ref()
    }
}
