use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Result};
use log::{info, warn};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::domain::{AuctionDesk, ClockEvents, Transcript};
use super::types::{
    AddLotRequest, AuctionAppState, AuctionView, BidRequest, BidResponse, StartedResponse,
    StoppedResponse,
};
use super::{bad_request, lock};

pub fn init_app_state(settings: &Settings) -> (AuctionAppState, ClockEvents) {
    let (desk, events) = AuctionDesk::new(Transcript::new(), settings.auction_seconds, settings.tick);
    (Arc::new(Mutex::new(desk)), events)
}

/// Feeds clock notifications into the desk. This is the only place clock
/// output reaches the display.
pub fn spawn_clock_pump(state: AuctionAppState, mut events: ClockEvents) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(notice) = events.recv().await {
            match state.lock() {
                Ok(mut desk) => {
                    desk.on_clock_event(notice);
                }
                Err(_) => {
                    warn!("desk state poisoned, dropping clock events");
                    return;
                }
            }
        }
    })
}

async fn get_auction(data: web::Data<AuctionAppState>) -> Result<HttpResponse> {
    let desk = lock(&data)?;
    Ok(HttpResponse::Ok().json(AuctionView::from(&*desk)))
}

async fn get_display(data: web::Data<AuctionAppState>) -> Result<HttpResponse> {
    let desk = lock(&data)?;
    Ok(HttpResponse::Ok().json(desk.display()))
}

async fn add_item(
    req: web::Json<AddLotRequest>,
    data: web::Data<AuctionAppState>,
) -> Result<HttpResponse> {
    let mut desk = lock(&data)?;
    match desk.add_item(&req.name, &req.starting_price) {
        Ok(lot) => Ok(HttpResponse::Ok().json(lot)),
        Err(err) => Ok(bad_request(&err)),
    }
}

async fn place_bid(
    req: web::Json<BidRequest>,
    data: web::Data<AuctionAppState>,
) -> Result<HttpResponse> {
    let mut desk = lock(&data)?;
    match desk.place_bid(&req.bidder, &req.amount) {
        Ok(outcome) => Ok(HttpResponse::Ok().json(BidResponse {
            accepted: outcome.is_accepted(),
            lot: outcome.lot().clone(),
        })),
        Err(err) => Ok(bad_request(&err)),
    }
}

async fn start_auction(data: web::Data<AuctionAppState>) -> Result<HttpResponse> {
    let mut desk = lock(&data)?;
    let started = desk.start_auction();
    Ok(HttpResponse::Ok().json(StartedResponse { started }))
}

async fn stop_auction(data: web::Data<AuctionAppState>) -> Result<HttpResponse> {
    let mut desk = lock(&data)?;
    let stopped = desk.stop_auction();
    Ok(HttpResponse::Ok().json(StoppedResponse { stopped }))
}

pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .route("/auction", web::get().to(get_auction))
            .route("/auction/items", web::post().to(add_item))
            .route("/auction/bids", web::post().to(place_bid))
            .route("/auction/start", web::post().to(start_auction))
            .route("/auction/stop", web::post().to(stop_auction))
            .route("/display", web::get().to(get_display))
    );
}

pub async fn run_app(settings: Settings) -> std::io::Result<()> {
    let (app_state, events) = init_app_state(&settings);
    let pump = spawn_clock_pump(app_state.clone(), events);

    info!("Starting auction desk on {}:{}", settings.host, settings.port);

    let result = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Logger::default())
            .configure(configure_app)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await;

    pump.abort();
    result
}
