use clap::ValueEnum;

use super::config::{LoadBinding, PageConfig, ReadEndpoint, SuccessAction};
use crate::domain::fields;

const PASSWORD_FIELDS: &[&str] = &[fields::OLD_PASSWD, fields::NEW_PASSWD, fields::CONFIRM];
const INDEX_FIELDS: &[&str] = &[fields::EMAIL];
const AUTHENTICATED_AREA: &str = "../u/";

/// The pages shipped with the signup and admin-panel applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageKind {
    Index,
    Settings,
    Recovery,
    RecoveryConfirm,
    Signup,
    SignupConfirm,
}

impl PageKind {
    pub fn config(self) -> PageConfig {
        match self {
            PageKind::Index => PageConfig::index(),
            PageKind::Settings => PageConfig::settings(),
            PageKind::Recovery => PageConfig::recovery(),
            PageKind::RecoveryConfirm => PageConfig::recovery_confirm(),
            PageKind::Signup => PageConfig::signup(),
            PageKind::SignupConfirm => PageConfig::signup_confirm(),
        }
    }
}

impl PageConfig {
    /// Dashboard: shows the signed-in email and searches users.
    pub fn index() -> Self {
        Self {
            name: "index",
            read: Some(ReadEndpoint {
                path: "index.json",
                bind: LoadBinding::Fields(INDEX_FIELDS),
            }),
            write: None,
            search: Some("search.json"),
            on_success: SuccessAction::MarkSaved,
            clear_on_success: &[],
            seed_location: false,
        }
    }

    pub fn settings() -> Self {
        Self {
            name: "settings",
            read: Some(ReadEndpoint {
                path: "index.json",
                bind: LoadBinding::WholeRecord,
            }),
            write: Some("settings.json"),
            search: None,
            on_success: SuccessAction::MarkSaved,
            clear_on_success: PASSWORD_FIELDS,
            seed_location: false,
        }
    }

    pub fn recovery() -> Self {
        Self {
            name: "recovery",
            read: None,
            write: Some("recovery.json"),
            search: None,
            on_success: SuccessAction::Navigate("recovery-ok.html"),
            clear_on_success: &[],
            seed_location: false,
        }
    }

    pub fn recovery_confirm() -> Self {
        Self {
            name: "recovery-confirm",
            read: None,
            write: Some("../recovery-confirm.json"),
            search: None,
            on_success: SuccessAction::Navigate(AUTHENTICATED_AREA),
            clear_on_success: &[],
            seed_location: true,
        }
    }

    pub fn signup() -> Self {
        Self {
            name: "signup",
            read: Some(ReadEndpoint {
                path: "signup.json",
                bind: LoadBinding::InviteOnly,
            }),
            write: Some("signup.json"),
            search: None,
            on_success: SuccessAction::Navigate("signup-ok.html"),
            clear_on_success: &[],
            seed_location: false,
        }
    }

    pub fn signup_confirm() -> Self {
        Self {
            name: "signup-confirm",
            read: None,
            write: Some("../signup-confirm.json"),
            search: None,
            on_success: SuccessAction::Navigate(AUTHENTICATED_AREA),
            clear_on_success: &[],
            seed_location: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use url::Url;

    #[rstest]
    #[case(PageKind::RecoveryConfirm, "https://example.com/recovery-confirm.json")]
    #[case(PageKind::SignupConfirm, "https://example.com/signup-confirm.json")]
    #[case(PageKind::Recovery, "https://example.com/r/recovery.json")]
    #[case(PageKind::Signup, "https://example.com/r/signup.json")]
    #[case(PageKind::Settings, "https://example.com/r/settings.json")]
    fn write_endpoint_resolves_against_page(#[case] kind: PageKind, #[case] expected: &str) {
        let location = Url::parse("https://example.com/r/token123").unwrap();
        let endpoints = kind.config().resolve(&location).unwrap();
        assert_eq!(endpoints.write.unwrap().as_str(), expected);
    }

    #[test]
    fn confirm_pages_navigate_to_authenticated_area() {
        let location = Url::parse("https://example.com/signup/abc").unwrap();
        let endpoints = PageConfig::signup_confirm().resolve(&location).unwrap();
        assert_eq!(endpoints.navigate.unwrap().as_str(), "https://example.com/u/");
    }

    #[test]
    fn confirm_pages_seed_url_field() {
        let location = Url::parse("https://example.com/recovery/abc").unwrap();
        let record = PageConfig::recovery_confirm().initial_record(&location);
        assert_eq!(record.get_str(fields::URL), Some("https://example.com/recovery/abc"));
        assert!(PageConfig::recovery().initial_record(&location).is_empty());
    }

    #[test]
    fn index_has_search_but_no_write() {
        let location = Url::parse("https://example.com/u/").unwrap();
        let endpoints = PageConfig::index().resolve(&location).unwrap();
        assert!(endpoints.write.is_none());
        assert_eq!(endpoints.read.unwrap().as_str(), "https://example.com/u/index.json");
        assert_eq!(endpoints.search.unwrap().as_str(), "https://example.com/u/search.json");
    }
}
