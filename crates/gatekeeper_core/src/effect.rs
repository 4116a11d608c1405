use crate::{AlertId, FormId, InputId, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blocking, user-facing alert.
    ShowAlert { message: String },
    /// Reset the file input's value so no file stays attached.
    ClearFileInput { input: InputId },
    FileAccepted {
        input: InputId,
        name: String,
        size_bytes: u64,
    },
    /// Prevent the browser from carrying out this submit.
    SuppressSubmit { form: FormId },
    /// Feed `msg` back into `update` after `delay_ms`.
    Schedule { delay_ms: u32, msg: Box<Msg> },
    SetInputValue { input: InputId, value: String },
    ScrollIntoView { selector: String },
    CloseAlert { alert: AlertId },
    WriteClipboard { text: String },
}
