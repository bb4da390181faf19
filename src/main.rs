use clap::Parser;
use tracing::{debug, error, info, warn, Instrument};

use form_controllers::app_system::{setup_tracing, Args, PageSystem};
use form_controllers::busy_button::BusyButton;
use form_controllers::domain::LoadStatus;
use form_controllers::transport::{LogNavigator, ReqwestTransport};

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    setup_tracing(&args.log);

    info!(page = ?args.page, location = %args.location, "Starting form controller");

    let transport = ReqwestTransport::new(&args.user_agent).map_err(|e| e.to_string())?;
    let mut system = PageSystem::new(transport, LogNavigator);
    let client = system
        .open(args.page.config(), &args.location)
        .map_err(|e| e.to_string())?;

    let button = BusyButton::new("Submit", "Working...");
    let states = client.subscribe();
    let binding = tokio::spawn(async move {
        button
            .bind(states, |attrs| debug!(disabled = attrs.disabled, label = %attrs.label, "Button updated"))
            .await;
    });

    if args.page.config().read.is_some() {
        client
            .subscribe()
            .wait_for(|s| s.load != LoadStatus::NotRequested)
            .await
            .map_err(|e| e.to_string())?;
    }
    let state = client.snapshot().await.map_err(|e| e.to_string())?;
    info!(
        load = ?state.load,
        fields = state.record.len(),
        invite_only = state.invite_only,
        "Page ready"
    );

    let record = args.record();
    if args.search {
        let span = tracing::info_span!("search");
        match client.search(record).instrument(span).await {
            Ok(outcome) => info!(outcome = ?outcome, "Search finished"),
            Err(e) => error!(error = %e, "Search failed"),
        }
    } else if !record.is_empty() {
        let span = tracing::info_span!("submit");
        match client.submit(record).instrument(span).await {
            Ok(outcome) => info!(outcome = ?outcome, "Submit finished"),
            Err(e) => error!(error = %e, "Submit failed"),
        }
        let state = client.snapshot().await.map_err(|e| e.to_string())?;
        if let Some(code) = state.error {
            warn!(code = %code, "Form shows error");
        }
        if state.saved {
            info!("Settings saved");
        }
    }

    system.shutdown().await?;
    if let Err(e) = binding.await {
        error!("Button binding failed: {:?}", e);
    }

    info!("Form controller finished");
    Ok(())
}
