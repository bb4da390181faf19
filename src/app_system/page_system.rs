use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use url::Url;

use crate::clients::FormClient;
use crate::error::FormError;
use crate::form_framework::FormActor;
use crate::pages::PageConfig;
use crate::transport::{HttpTransport, Navigator};

const MAILBOX_SIZE: usize = 32;

/// Starts form controllers, hands every one the same transport and navigator,
/// and stops them on shutdown.
pub struct PageSystem<H, N> {
    transport: H,
    navigator: N,
    clients: Vec<FormClient>,
    handles: Vec<JoinHandle<()>>,
}

impl<H, N> PageSystem<H, N>
where
    H: HttpTransport + Clone,
    N: Navigator + Clone,
{
    pub fn new(transport: H, navigator: N) -> Self {
        Self {
            transport,
            navigator,
            clients: Vec::new(),
            handles: Vec::new(),
        }
    }

    /// Spawns the controller for `page` displayed at `location`. Its initial
    /// read starts right away.
    pub fn open(&mut self, page: PageConfig, location: &Url) -> Result<FormClient, FormError> {
        info!(page = page.name, location = %location, "Opening page");
        let (actor, client) = FormActor::new(
            MAILBOX_SIZE,
            page,
            location,
            self.transport.clone(),
            self.navigator.clone(),
        )?;
        self.handles.push(tokio::spawn(actor.run()));
        self.clients.push(client.clone());
        Ok(client)
    }

    /// Asks every controller to stop and waits for them. A controller with a
    /// request in flight stops once that request settles.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down pages...");

        for client in &self.clients {
            if let Err(e) = client.shutdown().await {
                warn!(page = client.page(), error = %e, "Page already stopped");
            }
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Controller task failed: {:?}", e);
                return Err(format!("Controller task failed: {:?}", e));
            }
        }

        info!("Page shutdown complete.");
        Ok(())
    }
}
