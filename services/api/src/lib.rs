mod cli;
mod commands;
mod infra;
mod routes;
mod server;
mod text;

use contract_templates::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
