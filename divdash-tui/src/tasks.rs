//! Background work spawned from the event loop
//!
//! Each task sends exactly one [`AppMessage`] back. The returned handle
//! resolves to `false` when the dashboard had already gone away.

use crate::app::AppMessage;
use divdash_sdk::prelude::*;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::warn;

/// Check the service is reachable
pub fn spawn_probe<S>(service: &Arc<S>, tx: &UnboundedSender<AppMessage>) -> JoinHandle<bool>
where
    S: AnalysisService + ?Sized + 'static,
{
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let delivered = tx.send(AppMessage::Probe(service.health().await)).is_ok();
        if !delivered {
            warn!("Dashboard closed before the health check finished");
        }
        delivered
    })
}

/// Run the backtest for a ticket
pub fn spawn_analysis<S>(
    service: &Arc<S>,
    tx: &UnboundedSender<AppMessage>,
    ticket: RequestTicket,
) -> JoinHandle<bool>
where
    S: AnalysisService + ?Sized + 'static,
{
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let seq = ticket.seq;
        let result = service.backtest(&ticket.request).await;
        let delivered = tx.send(AppMessage::Analysis(ticket, result)).is_ok();
        if !delivered {
            warn!(seq, "Dashboard closed before the analysis finished");
        }
        delivered
    })
}
