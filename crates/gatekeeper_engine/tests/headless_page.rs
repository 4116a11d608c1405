use std::sync::Once;

use gatekeeper_core::{
    FileDescriptor, FileLabelStyle, Msg, Settings, Severity, SubmitControlView, MIB,
};
use gatekeeper_engine::{HeadlessPage, PageConfig};
use pretty_assertions::assert_eq;

const FORM: usize = 0;
const FILE_INPUT: usize = 0;
const UPLOAD_LABEL: &str = r#"<i class="fas fa-upload"></i> Upload"#;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn upload_page() -> HeadlessPage {
    let mut page = HeadlessPage::new(Settings::default());
    page.dispatch(Msg::FormRegistered {
        form: FORM,
        validated: false,
    });
    page.dispatch(Msg::FileInputRegistered {
        input: FILE_INPUT,
        guarded: true,
        label_style: FileLabelStyle::CustomWrapper,
    });
    page
}

#[test]
fn fallback_restores_submit_control_after_thirty_seconds() {
    init_logging();
    let mut page = upload_page();

    assert!(page.submit(FORM, Some(UPLOAD_LABEL)));
    let pending = page.rendered().forms[FORM].submit.clone();
    assert_eq!(pending.map(|s| s.disabled), Some(true));

    page.advance(29_999);
    assert_eq!(
        page.rendered().forms[FORM].submit.as_ref().map(|s| s.disabled),
        Some(true)
    );

    page.advance(1);
    assert_eq!(
        page.rendered().forms[FORM].submit,
        Some(SubmitControlView {
            label: UPLOAD_LABEL.to_string(),
            disabled: false,
        })
    );
    assert!(page.host().timers.is_empty());
}

#[test]
fn second_submit_while_pending_is_prevented() {
    init_logging();
    let mut page = upload_page();
    assert!(page.submit(FORM, Some(UPLOAD_LABEL)));
    page.advance(1_000);
    let processing = page.state().settings().processing_label.clone();
    assert!(!page.submit(FORM, Some(processing.as_str())));

    // Only the first submission's timer is pending; it restores at t=30s.
    assert_eq!(page.host().timers.len(), 1);
    page.advance(29_000);
    assert_eq!(
        page.rendered().forms[FORM].submit.as_ref().map(|s| s.label.as_str()),
        Some(UPLOAD_LABEL)
    );

    // Restored forms can be submitted again.
    assert!(page.submit(FORM, Some(UPLOAD_LABEL)));
}

#[test]
fn rejected_file_alerts_and_clears_input() {
    init_logging();
    let mut page = upload_page();
    page.dispatch(Msg::FileSelected {
        input: FILE_INPUT,
        file: Some(FileDescriptor::new("customers.json", 2 * MIB)),
    });
    page.dispatch(Msg::FileSelected {
        input: FILE_INPUT,
        file: Some(FileDescriptor::new("customers.csv", 20 * MIB)),
    });

    assert_eq!(
        page.host().alerts,
        vec![
            "Please upload a CSV file only.".to_string(),
            "File size must be less than 16MB.".to_string(),
        ]
    );
    assert_eq!(page.host().cleared_inputs, vec![FILE_INPUT, FILE_INPUT]);
}

#[test]
fn accepted_file_shows_name_without_touching_input() {
    init_logging();
    let mut page = upload_page();
    page.dispatch(Msg::FileSelected {
        input: FILE_INPUT,
        file: Some(FileDescriptor::new("customers.csv", 10 * MIB)),
    });

    assert!(page.host().alerts.is_empty());
    assert!(page.host().cleared_inputs.is_empty());
    assert_eq!(
        page.rendered().file_inputs[0].selected_name.as_deref(),
        Some("customers.csv")
    );
}

#[test]
fn configured_policy_is_applied() {
    init_logging();
    let config = PageConfig::from_ron_str("(max_upload_mib: 1, fallback_delay_ms: 500)")
        .expect("config parses");
    let mut page = HeadlessPage::new(config.settings());
    page.dispatch(Msg::FileInputRegistered {
        input: FILE_INPUT,
        guarded: true,
        label_style: FileLabelStyle::Unlabeled,
    });
    page.dispatch(Msg::FileSelected {
        input: FILE_INPUT,
        file: Some(FileDescriptor::new("a.csv", 2 * MIB)),
    });
    assert_eq!(page.host().alerts, vec!["File size must be less than 1MB."]);

    page.submit(FORM, Some("Go"));
    page.advance(500);
    assert_eq!(
        page.rendered().forms[FORM].submit.as_ref().map(|s| s.disabled),
        Some(false)
    );
}

#[test]
fn alerts_close_after_five_seconds() {
    init_logging();
    let mut page = upload_page();
    page.dispatch(Msg::AlertRegistered { alert: 0 });
    page.dispatch(Msg::AlertRegistered { alert: 1 });

    page.advance(4_999);
    assert!(page.host().closed_alerts.is_empty());
    page.advance(1);
    assert_eq!(page.host().closed_alerts, vec![0, 1]);
}

#[test]
fn clipboard_notifications_come_and_go() {
    init_logging();
    let mut page = upload_page();
    page.dispatch(Msg::CopyRequested {
        text: "segment A".to_string(),
    });
    page.advance(0);
    assert_eq!(page.host().clipboard, vec!["segment A"]);
    assert_eq!(page.rendered().notifications.len(), 1);
    assert_eq!(page.rendered().notifications[0].severity, Severity::Success);

    page.host_mut().deny_clipboard = true;
    page.dispatch(Msg::CopyRequested {
        text: "segment B".to_string(),
    });
    page.advance(0);
    let messages: Vec<_> = page
        .rendered()
        .notifications
        .iter()
        .map(|n| n.message.as_str())
        .collect();
    assert_eq!(messages, vec!["Failed to copy", "Copied to clipboard!"]);

    page.advance(5_000);
    assert!(page.rendered().notifications.is_empty());
}

#[test]
fn number_and_anchor_helpers_reach_the_host() {
    init_logging();
    let mut page = upload_page();
    page.dispatch(Msg::NumberInputChanged {
        input: 4,
        value: "-1".to_string(),
    });
    page.dispatch(Msg::AnchorClicked {
        href: "#segments".to_string(),
    });

    assert_eq!(page.host().input_values.get(&4).map(String::as_str), Some("0"));
    assert_eq!(page.host().scrolled_to, vec!["#segments"]);
}

#[test]
fn table_export_downloads_plain_csv() {
    init_logging();
    let mut page = upload_page();
    let rows = vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string(), "d".to_string()],
    ];
    page.export_table(Some(rows.as_slice()));
    page.export_table::<String>(None);

    let downloads = &page.host().downloads;
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].filename, "export.csv");
    assert_eq!(downloads[0].mime_type, "text/csv");
    assert_eq!(downloads[0].contents, "a,b\nc,d");
}
