use crate::{FileLabelStyle, FormId, InputId, NavLinkId, Notification};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub forms: Vec<FormView>,
    pub file_inputs: Vec<FileInputView>,
    pub active_nav_links: Vec<NavLinkId>,
    /// Newest first.
    pub notifications: Vec<Notification>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub form_id: FormId,
    /// `None` while the form was never submitted; the page owns the control then.
    pub submit: Option<SubmitControlView>,
    pub validated: bool,
    /// The page must drop its validation marker on this render.
    pub remove_validation_marker: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControlView {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInputView {
    pub input_id: InputId,
    pub label_style: FileLabelStyle,
    pub selected_name: Option<String>,
}
