use tracing::info;
use url::Url;

/// Replaces the current page location, the way `location.replace` does.
pub trait Navigator: Send + Sync + 'static {
    fn replace(&self, location: &Url);
}

/// Navigator for headless use: records the move in the log and nothing else.
#[derive(Debug, Clone, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn replace(&self, location: &Url) {
        info!(location = %location, "Location replaced");
    }
}
