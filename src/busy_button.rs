//! Reflects a controller's `working` flag onto the control that triggered it.

use tokio::sync::watch;

use crate::domain::FormState;

/// Visual/interactive attributes of a submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAttrs {
    pub disabled: bool,
    pub loading: bool,
    pub label: String,
}

/// A submit button with a ready label and a loading label.
#[derive(Debug, Clone)]
pub struct BusyButton {
    ready_label: String,
    loading_label: String,
}

impl BusyButton {
    pub fn new(ready_label: impl Into<String>, loading_label: impl Into<String>) -> Self {
        Self {
            ready_label: ready_label.into(),
            loading_label: loading_label.into(),
        }
    }

    pub fn render(&self, working: bool) -> ButtonAttrs {
        if working {
            ButtonAttrs {
                disabled: true,
                loading: true,
                label: self.loading_label.clone(),
            }
        } else {
            ButtonAttrs {
                disabled: false,
                loading: false,
                label: self.ready_label.clone(),
            }
        }
    }

    /// Applies the current attributes, then re-applies them every time
    /// `working` flips, until the controller goes away.
    pub async fn bind<F>(&self, mut states: watch::Receiver<FormState>, mut apply: F)
    where
        F: FnMut(ButtonAttrs),
    {
        let mut shown = None;
        loop {
            let working = states.borrow_and_update().working;
            if shown != Some(working) {
                apply(self.render(working));
                shown = Some(working);
            }
            if states.changed().await.is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, true, "Saving...")]
    #[case(false, false, "Save")]
    fn render_follows_working(#[case] working: bool, #[case] disabled: bool, #[case] label: &str) {
        let attrs = BusyButton::new("Save", "Saving...").render(working);
        assert_eq!(attrs.disabled, disabled);
        assert_eq!(attrs.loading, working);
        assert_eq!(attrs.label, label);
    }

    #[tokio::test]
    async fn test_bind_applies_each_flip_once() {
        let (publisher, states) = watch::channel(FormState::default());
        let (seen_tx, mut seen_rx) = tokio::sync::mpsc::unbounded_channel();
        let button = BusyButton::new("Save", "Saving...");

        let binding = tokio::spawn(async move {
            button
                .bind(states, move |attrs| {
                    let _ = seen_tx.send(attrs.loading);
                })
                .await;
        });

        assert_eq!(seen_rx.recv().await, Some(false));

        publisher.send_replace(FormState {
            working: true,
            ..FormState::default()
        });
        assert_eq!(seen_rx.recv().await, Some(true));

        // An unrelated change must not re-apply the same state.
        publisher.send_replace(FormState {
            working: true,
            error: Some("x".into()),
            ..FormState::default()
        });
        publisher.send_replace(FormState::default());
        assert_eq!(seen_rx.recv().await, Some(false));

        drop(publisher);
        binding.await.unwrap();
        assert_eq!(seen_rx.recv().await, None);
    }
}
