use std::future::Future;
use std::pin::Pin;

use serde_json::Value;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::clients::FormClient;
use crate::domain::{
    FormState, LoadEnvelope, LoadStatus, Record, SearchEnvelope, SearchOutcome, SubmitOutcome,
    WriteEnvelope, WriteReply,
};
use crate::error::{FormError, TransportError, NOT_FOUND_CODE};
use crate::pages::{Endpoints, LoadBinding, PageConfig, SuccessAction};
use crate::transport::{HttpTransport, Navigator};

// =============================================================================
// 1. MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FormError>>;

#[derive(Debug)]
pub enum FormRequest {
    Submit {
        record: Record,
        respond_to: Response<SubmitOutcome>,
    },
    Search {
        query: Record,
        respond_to: Response<SearchOutcome>,
    },
    /// Two-way binding from the page: the user edited the bound record.
    Edit {
        record: Record,
        respond_to: Response<()>,
    },
    Close {
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<FormState>,
    },
    Shutdown,
}

// =============================================================================
// 2. THE GENERIC FORM ACTOR
// =============================================================================

/// In-flight initial read, owned by the actor so it is polled from its own loop.
type LoadCall = Pin<Box<dyn Future<Output = Result<Value, TransportError>> + Send>>;

/// One page's controller: owns the bound record and feedback state, talks to
/// the page endpoints, and publishes every state change on a watch channel.
///
/// Submits and searches are handled one at a time. While one is in flight the
/// mailbox keeps being drained: edits, `close` and snapshots are served, a
/// second submit or search is refused with [`FormError::Busy`]. The initial
/// read never holds up the mailbox; if it settles after a submit has bound
/// its record, that record is kept.
pub struct FormActor<H, N> {
    page: PageConfig,
    endpoints: Endpoints,
    transport: H,
    navigator: N,
    receiver: mpsc::Receiver<FormRequest>,
    state: FormState,
    publisher: watch::Sender<FormState>,
    pending_load: Option<LoadCall>,
    submitted: bool,
    open: bool,
}

impl<H, N> FormActor<H, N>
where
    H: HttpTransport + Clone,
    N: Navigator,
{
    pub fn new(
        buffer_size: usize,
        page: PageConfig,
        location: &Url,
        transport: H,
        navigator: N,
    ) -> Result<(Self, FormClient), FormError> {
        let endpoints = page.resolve(location)?;
        let state = FormState::new(page.initial_record(location));
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, states) = watch::channel(state.clone());
        let client = FormClient::new(page.name, sender, states);
        let actor = Self {
            page,
            endpoints,
            transport,
            navigator,
            receiver,
            state,
            publisher,
            pending_load: None,
            submitted: false,
            open: true,
        };
        Ok((actor, client))
    }

    #[instrument(name = "form_actor", skip(self), fields(page = self.page.name))]
    pub async fn run(mut self) {
        info!("Form controller starting");
        self.pending_load = self.start_load();

        while self.open {
            tokio::select! {
                biased;
                reply = Self::await_load(&mut self.pending_load) => self.finish_load(reply),
                msg = self.receiver.recv() => match msg {
                    Some(msg) => self.dispatch(msg).await,
                    None => self.open = false,
                },
            }
        }

        info!("Form controller stopped");
    }

    async fn dispatch(&mut self, msg: FormRequest) {
        match msg {
            FormRequest::Submit { record, respond_to } => {
                self.handle_submit(record, respond_to).await;
            }
            FormRequest::Search { query, respond_to } => {
                self.handle_search(query, respond_to).await;
            }
            FormRequest::Edit { record, respond_to } => self.handle_edit(record, respond_to),
            FormRequest::Close { respond_to } => self.handle_close(respond_to),
            FormRequest::Snapshot { respond_to } => self.handle_snapshot(respond_to),
            FormRequest::Shutdown => {
                info!("Form controller shutting down");
                self.open = false;
            }
        }
    }

    // --- Initialization ---

    fn start_load(&self) -> Option<LoadCall> {
        let url = self.endpoints.read.clone()?;
        debug!(url = %url, "Loading page resource");
        let transport = self.transport.clone();
        Some(Box::pin(async move { transport.get_json(url).await }))
    }

    /// Resolves with the initial read's reply; never resolves once there is
    /// no read pending.
    async fn await_load(slot: &mut Option<LoadCall>) -> Result<Value, TransportError> {
        match slot {
            Some(call) => call.await,
            None => std::future::pending().await,
        }
    }

    /// Folds the initial read into the state. Never fails the controller:
    /// anything but `Ok=true` leaves the default record in place and is only
    /// recorded in `LoadStatus`.
    fn finish_load(&mut self, reply: Result<Value, TransportError>) {
        self.pending_load = None;
        let Some(read) = self.page.read else {
            return;
        };

        let envelope = reply
            .map_err(FormError::from)
            .and_then(LoadEnvelope::from_value);

        self.state.load = match envelope {
            Ok(envelope) if envelope.ok => {
                self.apply_load(read.bind, envelope.payload);
                info!("Page resource loaded");
                LoadStatus::Loaded
            }
            Ok(_) => {
                debug!("Page resource declined, keeping defaults");
                LoadStatus::Declined
            }
            Err(e) => {
                warn!(error = %e, "Page resource unavailable, keeping defaults");
                LoadStatus::Failed(e.to_string())
            }
        };
        self.publish();
    }

    fn apply_load(&mut self, bind: LoadBinding, payload: Record) {
        match bind {
            LoadBinding::Fields(_) | LoadBinding::WholeRecord if self.submitted => {
                debug!("Record already submitted, keeping it over the late read");
            }
            LoadBinding::Fields(names) => self.state.record = payload.subset(names),
            LoadBinding::WholeRecord => self.state.record = payload,
            LoadBinding::InviteOnly => self.state.invite_only = true,
        }
    }

    // --- Submit ---

    #[instrument(skip_all, fields(page = self.page.name))]
    async fn handle_submit(&mut self, record: Record, respond_to: Response<SubmitOutcome>) {
        let Some(url) = self.endpoints.write.clone() else {
            let _ = respond_to.send(Err(self.unsupported("write")));
            return;
        };
        debug!(url = %url, "Processing submit request");

        let payload = record.to_value();
        self.begin_attempt();
        self.state.record = record;
        self.submitted = true;
        self.publish();

        let transport = self.transport.clone();
        let reply = self.drive(transport.post_json(url, payload)).await;
        let outcome = self.settle_submit(reply);

        self.finish_attempt();
        match &outcome {
            Ok(outcome) => info!(outcome = ?outcome, "Submit settled"),
            Err(e) => error!(error = %e, "Submit failed"),
        }
        let _ = respond_to.send(outcome);
    }

    fn settle_submit(
        &mut self,
        reply: Result<Value, TransportError>,
    ) -> Result<SubmitOutcome, FormError> {
        match reply {
            Ok(body) => {
                let envelope = WriteEnvelope::from_value(body)?;
                if envelope.ok {
                    Ok(self.apply_success(envelope.payload))
                } else {
                    let code = envelope.error.unwrap_or_default();
                    warn!(code = %code, "Submit rejected by server");
                    self.state.error = Some(code.clone());
                    Ok(SubmitOutcome::Rejected(code))
                }
            }
            Err(err) if err.is_not_found() => {
                warn!("Write endpoint not found");
                self.state.error = Some(NOT_FOUND_CODE.to_string());
                Ok(SubmitOutcome::Rejected(NOT_FOUND_CODE.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn apply_success(&mut self, reply: WriteReply) -> SubmitOutcome {
        match (self.page.on_success, self.endpoints.navigate.clone()) {
            (SuccessAction::Navigate(_), Some(target)) => {
                self.state.record.blank_fields(self.page.clear_on_success);
                self.navigator.replace(&target);
                SubmitOutcome::Navigated(target)
            }
            (SuccessAction::MarkSaved, _) if reply.change_count() > 0 => {
                self.state.saved = true;
                self.state.record.blank_fields(self.page.clear_on_success);
                SubmitOutcome::Saved {
                    changes: reply.change_count(),
                }
            }
            _ => SubmitOutcome::Unchanged,
        }
    }

    // --- Search ---

    #[instrument(skip_all, fields(page = self.page.name))]
    async fn handle_search(&mut self, query: Record, respond_to: Response<SearchOutcome>) {
        let Some(url) = self.endpoints.search.clone() else {
            let _ = respond_to.send(Err(self.unsupported("search")));
            return;
        };
        debug!(url = %url, "Processing search request");

        let payload = query.to_value();
        self.begin_attempt();
        self.state.query = query;
        self.publish();

        let transport = self.transport.clone();
        let reply = self.drive(transport.post_json(url, payload)).await;
        let outcome = self.settle_search(reply);

        self.finish_attempt();
        match &outcome {
            Ok(outcome) => info!(outcome = ?outcome, "Search settled"),
            Err(e) => error!(error = %e, "Search failed"),
        }
        let _ = respond_to.send(outcome);
    }

    fn settle_search(
        &mut self,
        reply: Result<Value, TransportError>,
    ) -> Result<SearchOutcome, FormError> {
        let envelope = SearchEnvelope::from_value(reply?)?;
        if !envelope.ok {
            return Ok(SearchOutcome::Rejected(envelope.error));
        }
        let results = envelope.payload.results.unwrap_or_default();
        let found = results.len();
        self.state.results = Some(results);
        Ok(SearchOutcome::Found(found))
    }

    // --- Immediate handlers ---

    fn handle_edit(&mut self, record: Record, respond_to: Response<()>) {
        debug!("Bound record edited");
        self.state.record = record;
        self.publish();
        let _ = respond_to.send(Ok(()));
    }

    fn handle_close(&mut self, respond_to: Response<()>) {
        self.state.clear_feedback();
        self.publish();
        let _ = respond_to.send(Ok(()));
    }

    fn handle_snapshot(&self, respond_to: Response<FormState>) {
        let _ = respond_to.send(Ok(self.state.clone()));
    }

    // --- Request lifecycle ---

    fn begin_attempt(&mut self) {
        self.state.clear_feedback();
        self.state.working = true;
    }

    fn finish_attempt(&mut self) {
        self.state.working = false;
        self.publish();
    }

    /// Awaits an in-flight exchange while still serving the mailbox.
    async fn drive<F>(&mut self, call: F) -> Result<Value, TransportError>
    where
        F: Future<Output = Result<Value, TransportError>>,
    {
        tokio::pin!(call);
        loop {
            tokio::select! {
                biased;
                reply = Self::await_load(&mut self.pending_load) => self.finish_load(reply),
                reply = &mut call => return reply,
                msg = self.receiver.recv(), if self.open => match msg {
                    Some(msg) => self.handle_while_working(msg),
                    None => self.open = false,
                },
            }
        }
    }

    fn handle_while_working(&mut self, msg: FormRequest) {
        match msg {
            FormRequest::Submit { respond_to, .. } => {
                warn!("Submit refused, request already in flight");
                let _ = respond_to.send(Err(FormError::Busy));
            }
            FormRequest::Search { respond_to, .. } => {
                warn!("Search refused, request already in flight");
                let _ = respond_to.send(Err(FormError::Busy));
            }
            FormRequest::Edit { record, respond_to } => self.handle_edit(record, respond_to),
            FormRequest::Close { respond_to } => self.handle_close(respond_to),
            FormRequest::Snapshot { respond_to } => self.handle_snapshot(respond_to),
            FormRequest::Shutdown => {
                info!("Shutdown requested, finishing in-flight request first");
                self.open = false;
            }
        }
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }

    fn unsupported(&self, operation: &'static str) -> FormError {
        FormError::Unsupported {
            page: self.page.name,
            operation,
        }
    }
}
