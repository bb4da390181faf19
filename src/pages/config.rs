use url::Url;

use crate::domain::{fields, Record};
use crate::error::FormError;

/// How a successful read is folded into the form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadBinding {
    /// Copy only these fields into the bound record.
    Fields(&'static [&'static str]),
    /// Replace the bound record with everything the server sent.
    WholeRecord,
    /// The endpoint answering `Ok=true` means registration is invite-only.
    InviteOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadEndpoint {
    pub path: &'static str,
    pub bind: LoadBinding,
}

/// What a page does after the write endpoint answers `Ok=true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessAction {
    /// Replace the current location with this path, relative to the page.
    Navigate(&'static str),
    /// Raise `saved` when the server reports at least one change.
    MarkSaved,
}

/// Per-page configuration of the generic form controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub name: &'static str,
    pub read: Option<ReadEndpoint>,
    pub write: Option<&'static str>,
    pub search: Option<&'static str>,
    pub on_success: SuccessAction,
    pub clear_on_success: &'static [&'static str],
    /// Seed the record's `URL` field with the page location (confirmation links).
    pub seed_location: bool,
}

impl PageConfig {
    /// Record a controller starts with before any read completes.
    pub fn initial_record(&self, location: &Url) -> Record {
        if self.seed_location {
            Record::new().with(fields::URL, location.as_str())
        } else {
            Record::new()
        }
    }

    /// Resolves every relative path against the page location up front so a
    /// bad path fails at startup instead of mid-submit.
    pub fn resolve(&self, location: &Url) -> Result<Endpoints, FormError> {
        let join = |path: &str| {
            location.join(path).map_err(|e| FormError::InvalidEndpoint {
                path: path.to_string(),
                reason: e.to_string(),
            })
        };

        Ok(Endpoints {
            read: self.read.map(|r| join(r.path)).transpose()?,
            write: self.write.map(join).transpose()?,
            search: self.search.map(join).transpose()?,
            navigate: match self.on_success {
                SuccessAction::Navigate(target) => Some(join(target)?),
                SuccessAction::MarkSaved => None,
            },
        })
    }
}

/// Absolute URLs of a page, resolved once per controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub read: Option<Url>,
    pub write: Option<Url>,
    pub search: Option<Url>,
    pub navigate: Option<Url>,
}
