mod cli;
mod demo;
mod infra;
mod routes;
mod server;

pub use infra::AppState;
pub use routes::router;

use structural_summary::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
