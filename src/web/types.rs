use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::domain::{AuctionDesk, BillingDesk, CartItem, Lot, Phase, Transcript};
use crate::money::Amount;

pub type AuctionAppState = Arc<Mutex<AuctionDesk<Transcript>>>;
pub type BillingAppState = Arc<Mutex<BillingDesk<Transcript>>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

// Field values arrive as typed text, the desks do the parsing.

#[derive(Debug, Serialize, Deserialize)]
pub struct AddLotRequest {
    pub name: String,
    #[serde(rename = "startingPrice")]
    pub starting_price: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BidRequest {
    pub bidder: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddCartItemRequest {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Serialize)]
pub struct BidResponse {
    pub accepted: bool,
    pub lot: Lot,
}

#[derive(Debug, Serialize)]
pub struct StartedResponse {
    pub started: bool,
}

#[derive(Debug, Serialize)]
pub struct StoppedResponse {
    pub stopped: bool,
}

#[derive(Debug, Serialize)]
pub struct AuctionView {
    pub lot: Option<Lot>,
    pub phase: Phase,
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u32,
}

impl From<&AuctionDesk<Transcript>> for AuctionView {
    fn from(desk: &AuctionDesk<Transcript>) -> Self {
        AuctionView {
            lot: desk.bidding().lot().cloned(),
            phase: desk.clock().phase(),
            remaining_seconds: desk.clock().remaining_seconds(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: Amount,
}

impl From<&BillingDesk<Transcript>> for CartView {
    fn from(desk: &BillingDesk<Transcript>) -> Self {
        CartView {
            items: desk.ledger().items().to_vec(),
            total: desk.ledger().total(),
        }
    }
}
