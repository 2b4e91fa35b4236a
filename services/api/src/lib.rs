mod cli;
mod infra;
mod routes;
mod search;
mod server;

use estate_listings::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
