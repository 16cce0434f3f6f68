// src/domain/auction_desk.rs
//! The auction window's button handlers, minus the window.
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::money::Amount;
use super::clock::{self, AuctionClock, ClockEvent, ClockEvents, ClockNotice, ClockSender, Phase};
use super::core::{BidderName, Errors};
use super::display::DisplaySink;
use super::lot::{BiddingModel, Lot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum BidOutcome {
    Accepted { lot: Lot },
    Rejected { lot: Lot },
}

impl BidOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BidOutcome::Accepted { .. })
    }

    pub fn lot(&self) -> &Lot {
        match self {
            BidOutcome::Accepted { lot } | BidOutcome::Rejected { lot } => lot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionResult {
    pub item: Option<String>,
    pub winner: Option<BidderName>,
    pub price: Option<Amount>,
}

pub struct AuctionDesk<D: DisplaySink> {
    bidding: BiddingModel,
    clock: AuctionClock,
    duration_seconds: u32,
    tick: Duration,
    events: ClockSender,
    // Set once the current clock's `Ended` has been applied.
    end_announced: bool,
    display: D,
}

impl<D: DisplaySink> AuctionDesk<D> {
    /// Returns the desk and the receiver its clock publishes to. The caller
    /// feeds every received event back through [`AuctionDesk::on_clock_event`].
    pub fn new(display: D, duration_seconds: u32, tick: Duration) -> (Self, ClockEvents) {
        let (events, receiver) = clock::channel();
        let desk = AuctionDesk {
            bidding: BiddingModel::new(),
            clock: AuctionClock::new(duration_seconds, tick),
            duration_seconds,
            tick,
            events,
            end_announced: false,
            display,
        };
        (desk, receiver)
    }

    pub fn with_defaults(display: D) -> (Self, ClockEvents) {
        Self::new(display, clock::AUCTION_DURATION_SECONDS, clock::TICK)
    }

    pub fn add_item(&mut self, name: &str, price_text: &str) -> Result<Lot, Errors> {
        let starting_price = match price_text.parse::<Amount>() {
            Ok(price) => price,
            Err(e) => {
                warn!("rejected starting price {:?}: {}", price_text, e);
                return self.report(Errors::InvalidPrice(price_text.to_string()));
            }
        };

        let lot = self.bidding.set_lot(name, starting_price).clone();
        self.display.append_line(&format!(
            "Added item: {} with starting price: {}",
            lot.name, lot.current_price
        ));
        Ok(lot)
    }

    pub fn place_bid(&mut self, bidder: &str, amount_text: &str) -> Result<BidOutcome, Errors> {
        if !self.clock.is_running() {
            return self.report(Errors::AuctionNotRunning);
        }

        let amount = match amount_text.parse::<Amount>() {
            Ok(amount) => amount,
            Err(e) => {
                warn!("rejected bid amount {:?}: {}", amount_text, e);
                return self.report(Errors::InvalidAmount(amount_text.to_string()));
            }
        };

        let accepted = match self.bidding.place_bid(bidder, amount) {
            Ok(accepted) => accepted,
            Err(e) => return self.report(e),
        };
        let lot = self.bidding.snapshot()?;

        if accepted {
            self.display.append_line(&format!(
                "Bid placed successfully! {} placed {} on {}",
                bidder, amount, lot.name
            ));
            Ok(BidOutcome::Accepted { lot })
        } else {
            self.display
                .append_line("Bid failed. Make sure the bid is higher than the current highest bid.");
            Ok(BidOutcome::Rejected { lot })
        }
    }

    /// Starts the countdown. A running clock is left alone. A closed clock is
    /// replaced by a fresh one, but only after its end has been announced;
    /// until then this returns `false`.
    pub fn start_auction(&mut self) -> bool {
        if self.clock.phase() == Phase::Closed {
            if !self.end_announced {
                debug!("restart refused, previous auction has not announced its end");
                return false;
            }
            self.clock = AuctionClock::new(self.duration_seconds, self.tick);
            self.end_announced = false;
        }
        self.clock.start(self.events.clone())
    }

    pub fn stop_auction(&mut self) -> bool {
        self.clock.stop()
    }

    /// Applies a clock notification on the foreground. Notices from a clock
    /// other than the current one are dropped.
    pub fn on_clock_event(&mut self, notice: ClockNotice) -> Option<AuctionResult> {
        if notice.clock != self.clock.id() {
            debug!("ignoring {:?} from replaced clock {}", notice.event, notice.clock);
            return None;
        }

        match notice.event {
            ClockEvent::TimeUpdated { remaining_seconds } => {
                self.display
                    .set_timer_text(&format!("Time Left: {} seconds", remaining_seconds));
                None
            }
            ClockEvent::Ended => {
                let result = match self.bidding.lot() {
                    Some(lot) => {
                        self.display.append_line(&format!(
                            "Auction ended! Winner: {} with a bid of {}",
                            lot.leader_display(),
                            lot.current_price
                        ));
                        AuctionResult {
                            item: Some(lot.name.clone()),
                            winner: lot.leading_bidder.clone(),
                            price: Some(lot.current_price),
                        }
                    }
                    None => {
                        self.display
                            .append_line("Auction ended! No item was up for auction.");
                        AuctionResult {
                            item: None,
                            winner: None,
                            price: None,
                        }
                    }
                };
                self.display.set_timer_text("Time Left: Auction Ended");
                self.end_announced = true;
                info!("auction ended: {:?}", result);
                Some(result)
            }
        }
    }

    pub fn bidding(&self) -> &BiddingModel {
        &self.bidding
    }

    pub fn clock(&self) -> &AuctionClock {
        &self.clock
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn report<T>(&mut self, error: Errors) -> Result<T, Errors> {
        self.display.append_line(&error.to_string());
        Err(error)
    }
}
