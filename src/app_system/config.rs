use clap::Parser;
use url::Url;

use crate::domain::Record;
use crate::pages::PageKind;

/// Drive one form page against a live server.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Page to open
    #[arg(long, value_enum)]
    pub page: PageKind,

    /// Location the page is displayed at; endpoints resolve against it
    #[arg(long, env = "FORMS_LOCATION")]
    pub location: Url,

    /// Record field as Name=value (repeatable). Without fields nothing is submitted.
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Send the fields to the search endpoint instead of submitting them
    #[arg(long)]
    pub search: bool,

    /// Fallback log filter when RUST_LOG is unset
    #[arg(long, env = "FORMS_LOG", default_value = "info")]
    pub log: String,

    #[arg(long, default_value = concat!("form-controllers/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}

impl Args {
    pub fn record(&self) -> Record {
        self.fields
            .iter()
            .fold(Record::new(), |record, (name, value)| record.with(name.clone(), value.clone()))
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected Name=value, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_build_record() {
        let args = Args::try_parse_from([
            "form_controllers",
            "--page",
            "recovery-confirm",
            "--location",
            "https://example.com/recovery/abc",
            "--field",
            "Passwd=s3cret",
            "--field",
            "Confirm=a=b",
        ])
        .unwrap();

        assert_eq!(args.page, PageKind::RecoveryConfirm);
        let record = args.record();
        assert_eq!(record.get_str("Passwd"), Some("s3cret"));
        assert_eq!(record.get_str("Confirm"), Some("a=b"));
    }

    #[test]
    fn field_without_name_is_rejected() {
        assert!(parse_field("=value").is_err());
        assert!(parse_field("novalue").is_err());
    }
}
