// src/web/mod.rs
pub mod auction_app;
pub mod billing_app;
pub mod types;

use actix_web::{error, HttpResponse};
use std::sync::{Mutex, MutexGuard};

use crate::domain::Errors;
use self::types::ApiError;

/// `RUST_LOG` wins over the `info` default.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn lock<T>(state: &Mutex<T>) -> actix_web::Result<MutexGuard<'_, T>> {
    state
        .lock()
        .map_err(|_| error::ErrorInternalServerError("desk state poisoned"))
}

fn bad_request(err: &Errors) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiError {
        message: err.to_string(),
    })
}
