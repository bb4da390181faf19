use url::Url;

use super::Record;

/// What happened to the page's initial read.
///
/// The UI treats every variant the same way (an empty form is a normal
/// anonymous state), but tests and logs can tell them apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    /// Page has no read endpoint, or the read has not completed yet.
    #[default]
    NotRequested,
    Loaded,
    /// Server answered `Ok=false`.
    Declined,
    /// Transport or decode failure.
    Failed(String),
}

/// Everything a page renders from: the bound records plus transient feedback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub record: Record,
    pub query: Record,
    pub results: Option<Vec<Record>>,
    pub working: bool,
    pub error: Option<String>,
    pub saved: bool,
    pub invite_only: bool,
    pub load: LoadStatus,
}

impl FormState {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    /// Drops feedback left over from the previous attempt.
    pub fn clear_feedback(&mut self) {
        self.error = None;
        self.saved = false;
    }
}

/// Terminal result of a submit that did not fail at the transport level.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Location was replaced with this URL.
    Navigated(Url),
    /// Server applied `changes` (> 0) changes.
    Saved { changes: i64 },
    /// Server accepted the record but changed nothing.
    Unchanged,
    /// Inline error code now shown in [`FormState::error`].
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(usize),
    Rejected(Option<String>),
}
