use std::collections::BTreeSet;

use gatekeeper_core::NotificationId;

use super::commands::NotificationMarkup;

/// Remembers which notifications were already put on the page, so one the
/// user closed by hand is not inserted again. Only ids still listed are kept.
#[derive(Debug, Default)]
pub struct ShownNotifications {
    shown: BTreeSet<NotificationId>,
}

impl ShownNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the current list (newest first) and returns the entries to insert,
    /// oldest first. Ids no longer listed are forgotten.
    pub fn sync<'a>(
        &mut self,
        notifications: &'a [NotificationMarkup],
    ) -> Vec<&'a NotificationMarkup> {
        self.shown
            .retain(|id| notifications.iter().any(|n| n.id == *id));
        notifications
            .iter()
            .rev()
            .filter(|markup| self.shown.insert(markup.id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}
