use crate::{AppState, Effect, FileDescriptor, FormId, InputId, Msg, Severity};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FormRegistered { form, validated } => {
            state.register_form(form, validated);
            Vec::new()
        }
        Msg::FileInputRegistered {
            input,
            guarded,
            label_style,
        } => {
            state.register_file_input(input, guarded, label_style);
            Vec::new()
        }
        Msg::FileSelected { input, file } => match file {
            Some(file) => file_selected(&mut state, input, file),
            None => Vec::new(),
        },
        Msg::FormSubmitted {
            form,
            submit_label,
            now_ms,
        } => form_submitted(&mut state, form, submit_label, now_ms),
        Msg::FallbackTimerFired { form, timer } => {
            state.restore_submission(form, timer);
            Vec::new()
        }
        Msg::FormReset { form } => {
            state.clear_validated(form);
            Vec::new()
        }
        Msg::NumberInputChanged { input, value } => match clamp_negative(&value) {
            Some(value) => vec![Effect::SetInputValue { input, value }],
            None => Vec::new(),
        },
        Msg::AnchorClicked { href } => match fragment_selector(&href) {
            Some(selector) => vec![Effect::ScrollIntoView { selector }],
            None => Vec::new(),
        },
        Msg::AlertRegistered { alert } => vec![Effect::Schedule {
            delay_ms: state.settings().dismiss_delay_ms,
            msg: Box::new(Msg::AlertExpired { alert }),
        }],
        Msg::AlertExpired { alert } => vec![Effect::CloseAlert { alert }],
        Msg::NavLinksRegistered {
            current_path,
            links,
        } => {
            for (link, href) in links {
                if href.as_deref() == Some(current_path.as_str()) {
                    state.mark_nav_active(link);
                }
            }
            Vec::new()
        }
        Msg::CopyRequested { text } => vec![Effect::WriteClipboard { text }],
        Msg::ClipboardWritten(result) => {
            let (message, severity) = match result {
                Ok(()) => ("Copied to clipboard!", Severity::Success),
                Err(_) => ("Failed to copy", Severity::Danger),
            };
            let id = state.push_notification(message, severity);
            vec![Effect::Schedule {
                delay_ms: state.settings().dismiss_delay_ms,
                msg: Box::new(Msg::NotificationExpired { id }),
            }]
        }
        Msg::NotificationExpired { id } => {
            state.remove_notification(id);
            Vec::new()
        }
    };

    (state, effects)
}

fn file_selected(state: &mut AppState, input: InputId, file: FileDescriptor) -> Vec<Effect> {
    let Some(guarded) = state.is_guarded_input(input) else {
        return Vec::new();
    };
    if !guarded {
        state.set_selected_file(input, Some(file.name));
        return Vec::new();
    }

    match state.settings().policy.check(file) {
        Ok(selection) => {
            state.set_selected_file(input, Some(selection.file.name.clone()));
            vec![Effect::FileAccepted {
                input,
                name: selection.file.name,
                size_bytes: selection.file.size_bytes,
            }]
        }
        Err(violation) => {
            state.set_selected_file(input, None);
            vec![
                Effect::ShowAlert {
                    message: violation.to_string(),
                },
                Effect::ClearFileInput { input },
            ]
        }
    }
}

fn form_submitted(
    state: &mut AppState,
    form: FormId,
    submit_label: Option<String>,
    now_ms: u64,
) -> Vec<Effect> {
    // No submit control: nothing to guard.
    let Some(original_label) = submit_label else {
        return Vec::new();
    };
    if state.is_submitting(form) {
        return vec![Effect::SuppressSubmit { form }];
    }

    let timer = state.begin_submission(form, original_label, now_ms);
    vec![Effect::Schedule {
        delay_ms: state.settings().fallback_delay_ms,
        msg: Box::new(Msg::FallbackTimerFired { form, timer }),
    }]
}

/// `Some("0")` when the raw number input text is below zero.
fn clamp_negative(raw: &str) -> Option<String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value < 0.0 => Some("0".to_string()),
        _ => None,
    }
}

fn fragment_selector(href: &str) -> Option<String> {
    match href.strip_prefix('#') {
        Some(fragment) if !fragment.is_empty() => Some(href.to_string()),
        _ => None,
    }
}
