use super::ApplicationStateToClose;
use std::sync::Arc;

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("closing scan scheduler");
    state.scan_scheduler_close_notify.notify_one();
    if let Err(err) = state.scan_scheduler_handle.await {
        tracing::error!(%err, "scan scheduler task failed");
    }

    tracing::info!("closing renewals producer");
    match Arc::try_unwrap(state.renewals_producer_service) {
        Ok(renewals_producer_service) => {
            renewals_producer_service.close().await;
        }
        Err(_) => tracing::error!("cannot close renewals producer"),
    }

    tracing::info!("closing rabbitmq connection");
    state.rabbitmq_connection.close().await;

    tracing::info!("closing connection with database");
    state.db_pool.close().await;
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("starting shutdown");
}
