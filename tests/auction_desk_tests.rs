use auction_billing::domain::{
    AuctionClock, AuctionResult, BidOutcome, ClockEvent, ClockNotice, DisplaySink, Errors, Phase,
    Transcript, TIMER_NOT_STARTED,
};
#[path="utils/mod.rs"] mod utils;
use utils::*;

#[test]
fn test_add_item_announces_lot() {
    let (mut desk, _events) = sample_desk();

    let lot = desk.add_item("Vase", "10.0").unwrap();

    assert_eq!(lot.name, sample_item_name());
    assert_eq!(lot.current_price, sample_starting_price());
    assert_eq!(
        desk.display().last_line(),
        Some("Added item: Vase with starting price: 10.00")
    );
}

#[test]
fn test_add_item_with_bad_price_keeps_previous_lot() {
    let (mut desk, _events) = sample_desk();
    desk.add_item("Vase", "10").unwrap();

    assert_eq!(
        desk.add_item("Clock", "ten"),
        Err(Errors::InvalidPrice("ten".to_string()))
    );
    assert_eq!(desk.bidding().snapshot().unwrap().name, "Vase");
    assert_eq!(desk.display().last_line(), Some("Please enter a valid price."));
}

#[test]
fn test_bid_before_start_is_not_running() {
    let (mut desk, _events) = sample_desk();
    desk.add_item("Vase", "10").unwrap();

    assert_eq!(desk.place_bid("A", "15"), Err(Errors::AuctionNotRunning));
    assert_eq!(desk.bidding().snapshot().unwrap().leading_bidder, None);
    assert_eq!(
        desk.display().last_line(),
        Some("Auction is not running. Please start the auction.")
    );
}

#[tokio::test(start_paused = true)]
async fn test_bid_without_lot_is_no_active_lot() {
    let (mut desk, _events) = sample_desk();
    assert!(desk.start_auction());

    assert_eq!(desk.place_bid("A", "15"), Err(Errors::NoActiveLot));
}

#[tokio::test(start_paused = true)]
async fn test_bad_bid_amount_changes_nothing() {
    let (mut desk, _events) = sample_desk();
    desk.add_item("Vase", "10").unwrap();
    desk.start_auction();

    assert_eq!(
        desk.place_bid("A", "lots"),
        Err(Errors::InvalidAmount("lots".to_string()))
    );
    let lot = desk.bidding().snapshot().unwrap();
    assert_eq!(lot.current_price, sample_starting_price());
    assert_eq!(lot.leading_bidder, None);
}

#[tokio::test(start_paused = true)]
async fn test_vase_scenario() {
    let (mut desk, mut events) = sample_desk();
    desk.add_item("Vase", "10.0").unwrap();
    assert!(desk.start_auction());

    let first = desk.place_bid("A", "15.0").unwrap();
    assert!(first.is_accepted());
    assert_eq!(first.lot().current_price, amount("15.0"));
    assert_eq!(first.lot().leading_bidder, Some(bidder_a()));
    assert_eq!(
        desk.display().last_line(),
        Some("Bid placed successfully! A placed 15.00 on Vase")
    );

    let second = desk.place_bid("B", "12.0").unwrap();
    assert!(matches!(second, BidOutcome::Rejected { .. }));
    assert_eq!(second.lot().current_price, amount("15.0"));
    assert_eq!(second.lot().leading_bidder, Some(bidder_a()));
    assert_eq!(
        desk.display().last_line(),
        Some("Bid failed. Make sure the bid is higher than the current highest bid.")
    );

    let received = drain_clock(&mut events).await;
    assert_eq!(received.len(), 61);

    let mut result = None;
    for notice in received {
        result = desk.on_clock_event(notice).or(result);
    }

    assert_eq!(result, Some(AuctionResult {
        item: Some(sample_item_name()),
        winner: Some(bidder_a()),
        price: Some(amount("15.0")),
    }));
    assert_eq!(
        desk.display().last_line(),
        Some("Auction ended! Winner: A with a bid of 15.00")
    );
    assert_eq!(desk.display().timer, "Time Left: Auction Ended");
    assert_eq!(desk.clock().phase(), Phase::Closed);

    // The gate is shut once the clock has closed
    assert_eq!(desk.place_bid("B", "99"), Err(Errors::AuctionNotRunning));
}

#[tokio::test(start_paused = true)]
async fn test_timer_text_follows_ticks() {
    let (mut desk, mut events) = sample_desk();
    assert_eq!(desk.display().timer, TIMER_NOT_STARTED);

    desk.start_auction();
    let notice = events.recv().await.unwrap();
    assert_eq!(desk.on_clock_event(notice), None);

    assert_eq!(desk.display().timer, "Time Left: 59 seconds");
}

#[tokio::test(start_paused = true)]
async fn test_end_without_bids_reports_sentinel() {
    let (mut desk, mut events) = sample_desk();
    desk.add_item("Vase", "10").unwrap();
    desk.start_auction();
    desk.stop_auction();

    run_desk_clock(&mut desk, &mut events).await;

    assert_eq!(
        desk.display().last_line(),
        Some("Auction ended! Winner: No bids yet with a bid of 10.00")
    );
}

#[test]
fn test_end_without_lot() {
    let (mut desk, _events) = sample_desk();

    let result = desk.on_clock_event(ClockNotice {
        clock: desk.clock().id(),
        event: ClockEvent::Ended,
    });

    assert_eq!(result, Some(AuctionResult { item: None, winner: None, price: None }));
    assert_eq!(
        desk.display().last_line(),
        Some("Auction ended! No item was up for auction.")
    );
}

#[tokio::test(start_paused = true)]
async fn test_start_while_running_is_ignored() {
    let (mut desk, mut events) = sample_desk();

    assert!(desk.start_auction());
    assert!(!desk.start_auction());

    let received = run_desk_clock(&mut desk, &mut events).await;
    assert_eq!(received.len(), 61);
}

#[tokio::test(start_paused = true)]
async fn test_restart_after_end_uses_fresh_clock() {
    let (mut desk, mut events) = sample_desk();
    desk.add_item("Vase", "10").unwrap();
    desk.start_auction();
    desk.place_bid("A", "20").unwrap();
    desk.stop_auction();
    run_desk_clock(&mut desk, &mut events).await;

    assert!(desk.start_auction());
    assert_eq!(desk.clock().phase(), Phase::Running);
    assert_eq!(desk.clock().remaining_seconds(), 60);

    // The lot carries over, so the price to beat is still 20
    assert!(!desk.place_bid("B", "15").unwrap().is_accepted());
    assert!(desk.place_bid("B", "25").unwrap().is_accepted());
}

#[tokio::test(start_paused = true)]
async fn test_restart_right_after_stop_waits_for_the_end() {
    let (mut desk, mut events) = sample_desk();
    desk.add_item("Vase", "10").unwrap();
    desk.start_auction();
    desk.place_bid("A", "20").unwrap();
    desk.stop_auction();

    // The stopped auction has not announced its winner yet
    assert!(!desk.start_auction());
    assert_eq!(desk.clock().phase(), Phase::Closed);

    let notice = events.recv().await.unwrap();
    assert_eq!(notice.event, ClockEvent::Ended);
    assert_eq!(desk.on_clock_event(notice), Some(AuctionResult {
        item: Some(sample_item_name()),
        winner: Some(bidder_a()),
        price: Some(amount("20.00")),
    }));
    assert_eq!(
        desk.display().last_line(),
        Some("Auction ended! Winner: A with a bid of 20.00")
    );

    assert!(desk.start_auction());
    assert_eq!(desk.clock().phase(), Phase::Running);
}

#[tokio::test(start_paused = true)]
async fn test_notice_from_another_clock_is_ignored() {
    let (mut desk, _events) = sample_desk();
    desk.add_item("Vase", "10").unwrap();
    desk.start_auction();
    let other = AuctionClock::default();

    let ended = desk.on_clock_event(ClockNotice { clock: other.id(), event: ClockEvent::Ended });
    let ticked = desk.on_clock_event(ClockNotice {
        clock: other.id(),
        event: ClockEvent::TimeUpdated { remaining_seconds: 3 },
    });

    assert_eq!(ended, None);
    assert_eq!(ticked, None);
    assert_eq!(desk.display().timer, TIMER_NOT_STARTED);
    assert_eq!(
        desk.display().last_line(),
        Some("Added item: Vase with starting price: 10.00")
    );
    assert!(desk.clock().is_running());
}

#[test]
fn test_transcript_sink() {
    let mut transcript = Transcript::new();
    transcript.append_line("one");
    transcript.append_line("two");
    assert_eq!(transcript.text(), "one\ntwo\n");

    transcript.replace_text("a\nb\nc\n");
    assert_eq!(transcript.lines, vec!["a", "b", "c"]);

    transcript.set_timer_text("Time Left: 3 seconds");
    transcript.clear();
    assert!(transcript.lines.is_empty());
    assert_eq!(transcript.timer, "Time Left: 3 seconds");
}
