use auction_billing::config::{Settings, AUCTION_PORT};
use auction_billing::web::{auction_app, init_logging};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_logging();
    let settings = Settings::from_env(AUCTION_PORT)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    auction_app::run_app(settings).await
}
