//! Network actor - runs page info requests in Tokio async runtime

use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::FetchFailure;
use crate::network::client::PageInfoClient;

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: PageInfoClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: PageInfoClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchPageInfo { id, target }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            // Runs to completion; nothing cancels a started fetch
                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %client.info_url(&target), "Fetching page info");
                                let response = fetch(&client, id, &target).await;
                                tracing::info!(id, time_ms = response.time_ms(), "Fetch completed");
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                Some(result) = self.active_requests.join_next() => {
                    if let Err(e) = result {
                        tracing::warn!(error = %e, "Fetch task ended abnormally");
                    }
                }
            }
        }
    }
}

async fn fetch(client: &PageInfoClient, id: u64, target: &str) -> NetworkResponse {
    let start = Instant::now();
    let result = client.fetch_page_info(target).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(payload) => NetworkResponse::Loaded { id, payload, time_ms },
        Err(e) => NetworkResponse::Failed {
            id,
            failure: FetchFailure::from(&e),
            time_ms,
        },
    }
}
