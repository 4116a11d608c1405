use gatekeeper_core::{AppViewModel, FileInputView, FileLabelStyle, FormView, Notification};

use super::commands::{ClassTarget, DomCommand, NotificationMarkup};
use super::constants::{ACTIVE_CLASS, VALIDATED_CLASS};

pub fn render(view: &AppViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    for form in &view.forms {
        render_form(form, &mut cmds);
    }

    for input in &view.file_inputs {
        if let Some(cmd) = render_file_label(input) {
            cmds.push(cmd);
        }
    }

    cmds.extend(
        view.active_nav_links
            .iter()
            .map(|link| DomCommand::SetClass {
                target: ClassTarget::NavLink(*link),
                class: ACTIVE_CLASS,
                present: true,
            }),
    );

    cmds.push(DomCommand::SyncNotifications {
        notifications: view.notifications.iter().map(notification_markup).collect(),
    });

    cmds
}

fn render_form(form: &FormView, cmds: &mut Vec<DomCommand>) {
    // Untouched submit controls keep whatever the server rendered.
    if let Some(submit) = &form.submit {
        cmds.push(DomCommand::SetSubmitLabel {
            form: form.form_id,
            html: submit.label.clone(),
        });
        cmds.push(DomCommand::SetSubmitDisabled {
            form: form.form_id,
            disabled: submit.disabled,
        });
    }
    // Only touched after a reset; other scripts may own the marker otherwise.
    if form.remove_validation_marker {
        cmds.push(DomCommand::SetClass {
            target: ClassTarget::Form(form.form_id),
            class: VALIDATED_CLASS,
            present: false,
        });
    }
}

fn render_file_label(input: &FileInputView) -> Option<DomCommand> {
    if input.label_style == FileLabelStyle::Unlabeled {
        return None;
    }
    Some(match &input.selected_name {
        Some(name) => DomCommand::ShowFileName {
            input: input.input_id,
            style: input.label_style,
            name: name.clone(),
        },
        None => DomCommand::ResetFileLabel {
            input: input.input_id,
        },
    })
}

fn notification_markup(notification: &Notification) -> NotificationMarkup {
    NotificationMarkup {
        id: notification.id,
        class_name: format!(
            "alert alert-{} alert-dismissible fade show",
            notification.severity.as_str()
        ),
        html: format!(
            r#"{} <button type="button" class="btn-close btn-close-white" data-bs-dismiss="alert"></button>"#,
            escape_html(&notification.message)
        ),
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }
}
