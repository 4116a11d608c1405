use gatekeeper_core::{FileLabelStyle, FormId, InputId, NavLinkId, NotificationId};

/// Element a class is toggled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassTarget {
    Form(FormId),
    NavLink(NavLinkId),
}

/// One mutation of the live page. Applying the same command twice has the
/// same result as applying it once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    /// Replace the inner markup of the form's submit control.
    SetSubmitLabel { form: FormId, html: String },
    SetSubmitDisabled { form: FormId, disabled: bool },
    SetClass {
        target: ClassTarget,
        class: &'static str,
        present: bool,
    },
    ShowFileName {
        input: InputId,
        style: FileLabelStyle,
        name: String,
    },
    /// Put the file label back the way the page served it.
    ResetFileLabel { input: InputId },
    /// Make the notification area hold exactly these, newest first.
    SyncNotifications {
        notifications: Vec<NotificationMarkup>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMarkup {
    pub id: NotificationId,
    pub class_name: String,
    pub html: String,
}
