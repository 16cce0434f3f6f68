use auction_billing::config::{Settings, BILLING_PORT};
use auction_billing::web::{billing_app, init_logging};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_logging();
    let settings = Settings::from_env(BILLING_PORT)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    billing_app::run_app(settings).await
}
