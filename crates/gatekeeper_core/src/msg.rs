use crate::{
    AlertId, FileDescriptor, FileLabelStyle, FormId, InputId, NavLinkId, NotificationId, TimerId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A form was found on the page; `validated` mirrors its current marker class.
    FormRegistered { form: FormId, validated: bool },
    /// A file input was found. Only the guarded input is checked against the upload policy.
    FileInputRegistered {
        input: InputId,
        guarded: bool,
        label_style: FileLabelStyle,
    },
    /// The user picked (or cleared) a file.
    FileSelected {
        input: InputId,
        file: Option<FileDescriptor>,
    },
    /// A form is being submitted. `submit_label` is the submit control's current
    /// label, or `None` when the form has no submit control.
    FormSubmitted {
        form: FormId,
        submit_label: Option<String>,
        now_ms: u64,
    },
    /// The one-shot fallback timer armed by a submission elapsed.
    FallbackTimerFired { form: FormId, timer: TimerId },
    /// A reset control inside the form was clicked.
    FormReset { form: FormId },
    /// A number input changed; `value` is the raw input text.
    NumberInputChanged { input: InputId, value: String },
    /// A fragment anchor (`href="#..."`) was clicked.
    AnchorClicked { href: String },
    /// An alert element is on the page and should close itself later.
    AlertRegistered { alert: AlertId },
    AlertExpired { alert: AlertId },
    /// Nav links with their raw `href` attribute, and the page's current path.
    NavLinksRegistered {
        current_path: String,
        links: Vec<(NavLinkId, Option<String>)>,
    },
    /// Script asked to put text on the clipboard.
    CopyRequested { text: String },
    /// Outcome of the asynchronous clipboard write.
    ClipboardWritten(Result<(), String>),
    NotificationExpired { id: NotificationId },
}
