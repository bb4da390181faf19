#[macro_use]
mod macros;

use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

use crate::domain::{FormState, Record, SearchOutcome, SubmitOutcome};
use crate::error::FormError;
use crate::form_framework::FormRequest;

/// Handle to a running [`FormActor`](crate::form_framework::FormActor).
///
/// Cheap to clone; every clone talks to the same controller.
#[derive(Clone)]
pub struct FormClient {
    page: &'static str,
    sender: mpsc::Sender<FormRequest>,
    states: watch::Receiver<FormState>,
}

impl FormClient {
    pub fn new(
        page: &'static str,
        sender: mpsc::Sender<FormRequest>,
        states: watch::Receiver<FormState>,
    ) -> Self {
        Self {
            page,
            sender,
            states,
        }
    }

    pub fn page(&self) -> &'static str {
        self.page
    }

    /// Receiver updated after every state mutation of the controller.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.states.clone()
    }

    #[instrument(skip(self), fields(page = self.page))]
    pub async fn shutdown(&self) -> Result<(), FormError> {
        debug!("Sending request");
        self.sender
            .send(FormRequest::Shutdown)
            .await
            .map_err(|_| FormError::ActorCommunicationError("Actor closed".to_string()))
    }
}

form_method!(FormClient => fn submit(record: Record) -> SubmitOutcome as FormRequest::Submit);
form_method!(FormClient => fn search(query: Record) -> SearchOutcome as FormRequest::Search);
form_method!(FormClient => fn edit(record: Record) -> () as FormRequest::Edit);
form_method!(FormClient => fn close() -> () as FormRequest::Close);
form_method!(FormClient => fn snapshot() -> FormState as FormRequest::Snapshot);
