use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Result};
use log::info;
use std::sync::{Arc, Mutex};

use crate::config::Settings;
use crate::domain::{BillingDesk, Transcript};
use super::types::{AddCartItemRequest, BillingAppState, CartView};
use super::{bad_request, lock};

pub fn init_app_state() -> BillingAppState {
    Arc::new(Mutex::new(BillingDesk::new(Transcript::new())))
}

async fn get_cart(data: web::Data<BillingAppState>) -> Result<HttpResponse> {
    let desk = lock(&data)?;
    Ok(HttpResponse::Ok().json(CartView::from(&*desk)))
}

async fn get_display(data: web::Data<BillingAppState>) -> Result<HttpResponse> {
    let desk = lock(&data)?;
    Ok(HttpResponse::Ok().json(desk.display()))
}

async fn add_item(
    req: web::Json<AddCartItemRequest>,
    data: web::Data<BillingAppState>,
) -> Result<HttpResponse> {
    let mut desk = lock(&data)?;
    match desk.add_item(&req.name, &req.price) {
        Ok(item) => Ok(HttpResponse::Ok().json(item)),
        Err(err) => Ok(bad_request(&err)),
    }
}

async fn checkout(data: web::Data<BillingAppState>) -> Result<HttpResponse> {
    let mut desk = lock(&data)?;
    Ok(HttpResponse::Ok().json(desk.checkout()))
}

async fn clear_receipt(data: web::Data<BillingAppState>) -> Result<HttpResponse> {
    let mut desk = lock(&data)?;
    desk.clear_receipt();
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .route("/cart", web::get().to(get_cart))
            .route("/cart/items", web::post().to(add_item))
            .route("/cart/checkout", web::post().to(checkout))
            .route("/receipt/clear", web::post().to(clear_receipt))
            .route("/display", web::get().to(get_display))
    );
}

pub async fn run_app(settings: Settings) -> std::io::Result<()> {
    let app_state = init_app_state();

    info!("Starting billing desk on {}:{}", settings.host, settings.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Logger::default())
            .configure(configure_app)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
