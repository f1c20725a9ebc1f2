mod application;
mod dto;
mod error;
mod repository;
mod service;

use application::ApplicationEnv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let application_state_to_close = application::create_state(&env).await?;
    tracing::info!("renewal worker started");

    tokio::select! {
        _ = application::shutdown_signal() => {}
        // Connection loss is fatal, supervisor restarts the process
        _ = application_state_to_close
            .rabbitmq_connection
            .listen_network_io_failure() => {
            tracing::error!("rabbitmq connection failed, shutting down");
        }
    }

    application::close(application_state_to_close).await;

    Ok(())
}
