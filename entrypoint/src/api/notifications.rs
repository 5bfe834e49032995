use std::sync::{Mutex, PoisonError};

use contact_form::traits::Page;
use serde::Serialize;

/// What the browser has to do once the request completes
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct PageActions {
    pub(crate) notifications: Vec<String>,
    pub(crate) reload: bool,
}

/// Collects the alerts and the reload request raised while handling
/// one submission so they can be sent back in the response
#[derive(Default)]
pub(crate) struct ResponsePage {
    actions: Mutex<PageActions>,
}

impl ResponsePage {
    pub(crate) fn actions(&self) -> PageActions {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Page for ResponsePage {
    fn alert(&self, message: &str) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .notifications
            .push(message.to_string());
    }

    fn reload(&self) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reload = true;
    }
}

#[cfg(test)]
mod tests {
    use contact_form::traits::Page;

    use super::{PageActions, ResponsePage};

    #[test]
    fn starts_empty() {
        assert_eq!(ResponsePage::default().actions(), PageActions::default());
    }

    #[test]
    fn records_alerts_in_order() {
        let page = ResponsePage::default();

        page.alert("first");
        page.alert("second");
        page.reload();

        assert_eq!(
            page.actions(),
            PageActions {
                notifications: vec!["first".into(), "second".into()],
                reload: true,
            }
        );
    }
}
