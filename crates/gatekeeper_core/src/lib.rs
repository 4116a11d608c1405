//! Gatekeeper core: pure state machine, upload policy and view-model helpers.
mod effect;
mod format;
mod msg;
mod policy;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use format::{format_currency, format_mib, format_percentage};
pub use msg::Msg;
pub use policy::{extension_of, FileDescriptor, FileSelection, PolicyViolation, UploadPolicy, MIB};
pub use state::{
    AlertId, AppState, FileLabelStyle, FormId, FormSubmission, InputId, NavLinkId, Notification,
    NotificationId, Settings, Severity, SubmissionPhase, TimerId,
};
pub use update::update;
pub use view_model::{AppViewModel, FileInputView, FormView, SubmitControlView};
