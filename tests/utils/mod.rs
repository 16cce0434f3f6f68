#![allow(dead_code)]
use auction_billing::domain::{AuctionDesk, ClockEvent, ClockEvents, ClockNotice, DisplaySink, Transcript};
use auction_billing::money::Amount;
use chrono::{DateTime, TimeZone, Utc};
use std::time::Duration;
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn sample_item_name() -> String {
    "Vase".to_string()
}

pub fn sample_starting_price() -> Amount {
    amount("10.0")
}

pub fn bidder_a() -> String {
    "A".to_string()
}

pub fn bidder_b() -> String {
    "B".to_string()
}

pub fn sample_checkout_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 1, 15, 8, 28, 0).unwrap()
}

pub fn amount(text: &str) -> Amount {
    text.parse().unwrap()
}

pub fn sample_tick() -> Duration {
    Duration::from_secs(1)
}

pub fn sample_desk() -> (AuctionDesk<Transcript>, ClockEvents) {
    AuctionDesk::new(Transcript::new(), 60, sample_tick())
}

/// Receives until the clock sends `Ended` or the channel closes.
pub async fn drain_clock(events: &mut ClockEvents) -> Vec<ClockNotice> {
    let mut received = Vec::new();
    while let Some(notice) = events.recv().await {
        received.push(notice);
        if notice.event == ClockEvent::Ended {
            break;
        }
    }
    received
}

pub fn events_of(notices: &[ClockNotice]) -> Vec<ClockEvent> {
    notices.iter().map(|n| n.event).collect()
}

pub async fn next_event(events: &mut ClockEvents) -> Option<ClockEvent> {
    events.recv().await.map(|n| n.event)
}

/// Applies clock notices to the desk until the auction ends.
pub async fn run_desk_clock<D: DisplaySink>(desk: &mut AuctionDesk<D>, events: &mut ClockEvents) -> Vec<ClockNotice> {
    let received = drain_clock(events).await;
    for notice in &received {
        desk.on_clock_event(*notice);
    }
    received
}
