use std::collections::{BTreeMap, BTreeSet};

use crate::view_model::{AppViewModel, FileInputView, FormView, SubmitControlView};
use crate::UploadPolicy;

pub type FormId = usize;
pub type InputId = usize;
pub type AlertId = usize;
pub type NavLinkId = usize;
pub type TimerId = u64;
pub type NotificationId = u64;

const DEFAULT_PROCESSING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub policy: UploadPolicy,
    /// Upper bound on how long a submit control stays disabled.
    pub fallback_delay_ms: u32,
    /// Lifetime of alerts and notifications.
    pub dismiss_delay_ms: u32,
    /// Markup swapped into the submit control while a submission is pending.
    pub processing_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: UploadPolicy::default(),
            fallback_delay_ms: 30_000,
            dismiss_delay_ms: 5_000,
            processing_label: DEFAULT_PROCESSING_LABEL.to_string(),
        }
    }
}

/// How a file input shows the name of the chosen file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileLabelStyle {
    /// Wrapped in `.file-upload-wrapper` with name, instruction and icon parts.
    CustomWrapper,
    /// Followed by a sibling `<label>`.
    SiblingLabel,
    #[default]
    Unlabeled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Danger,
}

impl Severity {
    /// Bootstrap contextual class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// A pending submission: the submit control shows the processing label and is
/// disabled until `timer` fires or the page goes away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub form: FormId,
    pub original_label: String,
    pub armed_at_ms: u64,
    pub timer: TimerId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting(FormSubmission),
    /// The fallback timer fired; holds the label that was put back.
    Restored { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FormState {
    phase: SubmissionPhase,
    validated: bool,
    /// A reset happened since the last render.
    marker_reset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FileInputState {
    guarded: bool,
    label_style: FileLabelStyle,
    selected_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: Settings,
    forms: BTreeMap<FormId, FormState>,
    file_inputs: BTreeMap<InputId, FileInputState>,
    active_nav_links: BTreeSet<NavLinkId>,
    notifications: Vec<Notification>,
    next_timer: TimerId,
    next_notification: NotificationId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> AppViewModel {
        let forms = self
            .forms
            .iter()
            .map(|(form_id, form)| FormView {
                form_id: *form_id,
                submit: self.submit_view(&form.phase),
                validated: form.validated,
                remove_validation_marker: form.marker_reset,
            })
            .collect();

        let file_inputs = self
            .file_inputs
            .iter()
            .map(|(input_id, input)| FileInputView {
                input_id: *input_id,
                label_style: input.label_style,
                selected_name: input.selected_name.clone(),
            })
            .collect();

        AppViewModel {
            forms,
            file_inputs,
            active_nav_links: self.active_nav_links.iter().copied().collect(),
            notifications: self.notifications.clone(),
            dirty: self.dirty,
        }
    }

    fn submit_view(&self, phase: &SubmissionPhase) -> Option<SubmitControlView> {
        match phase {
            SubmissionPhase::Idle => None,
            SubmissionPhase::Submitting(_) => Some(SubmitControlView {
                label: self.settings.processing_label.clone(),
                disabled: true,
            }),
            SubmissionPhase::Restored { label } => Some(SubmitControlView {
                label: label.clone(),
                disabled: false,
            }),
        }
    }

    pub fn submission_phase(&self, form: FormId) -> Option<&SubmissionPhase> {
        self.forms.get(&form).map(|f| &f.phase)
    }

    pub fn is_validated(&self, form: FormId) -> bool {
        self.forms.get(&form).is_some_and(|f| f.validated)
    }

    /// Returns true and clears the flag if a render is pending. One-shot
    /// render requests are dropped with it.
    pub fn consume_dirty(&mut self) -> bool {
        for form in self.forms.values_mut() {
            form.marker_reset = false;
        }
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn register_form(&mut self, form: FormId, validated: bool) {
        let entry = self.forms.entry(form).or_default();
        entry.validated = validated;
        self.mark_dirty();
    }

    pub(crate) fn register_file_input(
        &mut self,
        input: InputId,
        guarded: bool,
        label_style: FileLabelStyle,
    ) {
        self.file_inputs.insert(
            input,
            FileInputState {
                guarded,
                label_style,
                selected_name: None,
            },
        );
    }

    /// `None` when the input was never registered.
    pub(crate) fn is_guarded_input(&self, input: InputId) -> Option<bool> {
        self.file_inputs.get(&input).map(|i| i.guarded)
    }

    pub(crate) fn set_selected_file(&mut self, input: InputId, name: Option<String>) {
        if let Some(entry) = self.file_inputs.get_mut(&input) {
            if entry.selected_name != name {
                entry.selected_name = name;
                self.dirty = true;
            }
        }
    }

    pub(crate) fn is_submitting(&self, form: FormId) -> bool {
        matches!(
            self.submission_phase(form),
            Some(SubmissionPhase::Submitting(_))
        )
    }

    /// Moves the form into `Submitting` and returns the id of the timer that
    /// may restore it.
    pub(crate) fn begin_submission(
        &mut self,
        form: FormId,
        original_label: String,
        now_ms: u64,
    ) -> TimerId {
        self.next_timer += 1;
        let timer = self.next_timer;
        let entry = self.forms.entry(form).or_default();
        entry.phase = SubmissionPhase::Submitting(FormSubmission {
            form,
            original_label,
            armed_at_ms: now_ms,
            timer,
        });
        self.dirty = true;
        timer
    }

    /// Restores the submit control if `timer` belongs to the pending
    /// submission. Stale or repeated timers are ignored.
    pub(crate) fn restore_submission(&mut self, form: FormId, timer: TimerId) -> bool {
        let Some(entry) = self.forms.get_mut(&form) else {
            return false;
        };
        let label = match &entry.phase {
            SubmissionPhase::Submitting(pending) if pending.timer == timer => {
                pending.original_label.clone()
            }
            _ => return false,
        };
        entry.phase = SubmissionPhase::Restored { label };
        self.dirty = true;
        true
    }

    pub(crate) fn clear_validated(&mut self, form: FormId) {
        if let Some(entry) = self.forms.get_mut(&form) {
            entry.validated = false;
            entry.marker_reset = true;
            self.dirty = true;
        }
    }

    pub(crate) fn mark_nav_active(&mut self, link: NavLinkId) {
        if self.active_nav_links.insert(link) {
            self.dirty = true;
        }
    }

    pub(crate) fn push_notification(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
    ) -> NotificationId {
        self.next_notification += 1;
        let id = self.next_notification;
        // Newest first, matching insertion at the top of the container.
        self.notifications.insert(
            0,
            Notification {
                id,
                message: message.into(),
                severity,
            },
        );
        self.dirty = true;
        id
    }

    pub(crate) fn remove_notification(&mut self, id: NotificationId) {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() != before {
            self.dirty = true;
        }
    }
}
