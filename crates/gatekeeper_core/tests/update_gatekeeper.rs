use std::sync::Once;

use gatekeeper_core::{
    update, AppState, Effect, FileDescriptor, FileLabelStyle, Msg, SubmissionPhase,
    SubmitControlView, MIB,
};
use pretty_assertions::assert_eq;

const GUARDED: usize = 0;
const PLAIN: usize = 1;
const FORM: usize = 0;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn page() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::FileInputRegistered {
            input: GUARDED,
            guarded: true,
            label_style: FileLabelStyle::CustomWrapper,
        },
    );
    let (state, _) = update(
        state,
        Msg::FileInputRegistered {
            input: PLAIN,
            guarded: false,
            label_style: FileLabelStyle::SiblingLabel,
        },
    );
    let (state, _) = update(
        state,
        Msg::FormRegistered {
            form: FORM,
            validated: false,
        },
    );
    state
}

fn select(state: AppState, input: usize, name: &str, size_bytes: u64) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FileSelected {
            input,
            file: Some(FileDescriptor::new(name, size_bytes)),
        },
    )
}

fn submit(state: AppState, label: &str, now_ms: u64) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FormSubmitted {
            form: FORM,
            submit_label: Some(label.to_string()),
            now_ms,
        },
    )
}

fn fallback_timer(effects: &[Effect]) -> Msg {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Schedule { msg, .. } => Some((**msg).clone()),
            _ => None,
        })
        .expect("fallback timer scheduled")
}

#[test]
fn csv_extension_check_ignores_case() {
    init_logging();
    for name in ["data.csv", "data.CSV", "data.Csv"] {
        let (state, effects) = select(page(), GUARDED, name, 1024);
        assert_eq!(
            effects,
            vec![Effect::FileAccepted {
                input: GUARDED,
                name: name.to_string(),
                size_bytes: 1024,
            }]
        );
        assert_eq!(
            state.view().file_inputs[GUARDED].selected_name.as_deref(),
            Some(name)
        );
    }
}

#[test]
fn ten_mib_csv_is_accepted() {
    init_logging();
    let (_state, effects) = select(page(), GUARDED, "sales.csv", 10 * MIB);
    assert!(matches!(effects.as_slice(), [Effect::FileAccepted { .. }]));
}

#[test]
fn wrong_extension_is_rejected_and_cleared() {
    init_logging();
    let (state, effects) = select(page(), GUARDED, "report.xlsx", 1024);
    assert_eq!(
        effects,
        vec![
            Effect::ShowAlert {
                message: "Please upload a CSV file only.".to_string(),
            },
            Effect::ClearFileInput { input: GUARDED },
        ]
    );
    assert_eq!(state.view().file_inputs[GUARDED].selected_name, None);
}

#[test]
fn oversized_file_is_rejected_whatever_the_extension() {
    init_logging();
    let (_state, effects) = select(page(), GUARDED, "big.csv", 16 * MIB + 1);
    assert_eq!(
        effects,
        vec![
            Effect::ShowAlert {
                message: "File size must be less than 16MB.".to_string(),
            },
            Effect::ClearFileInput { input: GUARDED },
        ]
    );

    // Format is checked before size.
    let (_state, effects) = select(page(), GUARDED, "big.txt", 40 * MIB);
    assert_eq!(
        effects[0],
        Effect::ShowAlert {
            message: "Please upload a CSV file only.".to_string(),
        }
    );
}

#[test]
fn rejection_drops_previously_accepted_name() {
    init_logging();
    let (state, _) = select(page(), GUARDED, "ok.csv", 10);
    let (state, _) = select(state, GUARDED, "bad.txt", 10);
    assert_eq!(state.view().file_inputs[GUARDED].selected_name, None);
}

#[test]
fn unguarded_input_only_updates_its_label() {
    init_logging();
    let (state, effects) = select(page(), PLAIN, "photo.png", 100 * MIB);
    assert!(effects.is_empty());
    assert_eq!(
        state.view().file_inputs[PLAIN].selected_name.as_deref(),
        Some("photo.png")
    );
}

#[test]
fn cleared_selection_and_unknown_input_are_noops() {
    init_logging();
    let state = page();
    let (next, effects) = update(
        state.clone(),
        Msg::FileSelected {
            input: GUARDED,
            file: None,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(next, state);

    let (_next, effects) = select(state, 42, "x.txt", 1);
    assert!(effects.is_empty());
}

#[test]
fn submit_swaps_label_disables_and_arms_timer() {
    init_logging();
    let (mut state, effects) = submit(page(), "Upload", 1_000);

    assert_eq!(
        effects,
        vec![Effect::Schedule {
            delay_ms: 30_000,
            msg: Box::new(Msg::FallbackTimerFired {
                form: FORM,
                timer: 1
            }),
        }]
    );
    let view = state.view();
    assert_eq!(
        view.forms[FORM].submit,
        Some(SubmitControlView {
            label: state.settings().processing_label.clone(),
            disabled: true,
        })
    );
    // Submitting leaves the validation marker to the page.
    assert!(!view.forms[FORM].validated);
    assert!(!state.is_validated(FORM));
    match state.submission_phase(FORM) {
        Some(SubmissionPhase::Submitting(pending)) => {
            assert_eq!(pending.original_label, "Upload");
            assert_eq!(pending.armed_at_ms, 1_000);
        }
        other => panic!("expected pending submission, got {other:?}"),
    }
    assert!(state.consume_dirty());
}

#[test]
fn fallback_timer_restores_pre_submit_label_and_enabled_state() {
    init_logging();
    let (state, effects) = submit(page(), "<b>Upload</b>", 0);
    let (state, effects_after) = update(state, fallback_timer(&effects));

    assert!(effects_after.is_empty());
    assert_eq!(
        state.view().forms[FORM].submit,
        Some(SubmitControlView {
            label: "<b>Upload</b>".to_string(),
            disabled: false,
        })
    );
}

#[test]
fn fallback_timer_fires_at_most_once() {
    init_logging();
    let (state, effects) = submit(page(), "Upload", 0);
    let timer = fallback_timer(&effects);
    let (mut state, _) = update(state, timer.clone());
    assert!(state.consume_dirty());

    let (mut again, effects) = update(state.clone(), timer);
    assert!(effects.is_empty());
    assert_eq!(again.submission_phase(FORM), state.submission_phase(FORM));
    assert!(!again.consume_dirty());
}

#[test]
fn stale_timer_does_not_restore_newer_submission() {
    init_logging();
    let (state, first) = submit(page(), "Upload", 0);
    let (state, _) = update(state, fallback_timer(&first));
    let (state, _second) = submit(state, "Upload", 40_000);

    // The first timer id replayed late must not touch the second submission.
    let (state, _) = update(state, fallback_timer(&first));
    assert!(matches!(
        state.submission_phase(FORM),
        Some(SubmissionPhase::Submitting(_))
    ));
}

#[test]
fn double_submit_is_suppressed_and_keeps_original_label() {
    init_logging();
    let (state, _) = submit(page(), "Upload", 0);
    let processing = state.settings().processing_label.clone();
    let (state, effects) = submit(state, &processing, 10);

    assert_eq!(effects, vec![Effect::SuppressSubmit { form: FORM }]);
    match state.submission_phase(FORM) {
        Some(SubmissionPhase::Submitting(pending)) => {
            assert_eq!(pending.original_label, "Upload");
            assert_eq!(pending.timer, 1);
        }
        other => panic!("expected pending submission, got {other:?}"),
    }
}

#[test]
fn form_without_submit_control_is_left_alone() {
    init_logging();
    let state = page();
    let (next, effects) = update(
        state.clone(),
        Msg::FormSubmitted {
            form: FORM,
            submit_label: None,
            now_ms: 0,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn reset_clears_validation_marker_idempotently() {
    init_logging();
    let (state, _) = update(
        page(),
        Msg::FormRegistered {
            form: FORM,
            validated: true,
        },
    );
    let (state, _) = submit(state, "Upload", 0);
    assert!(state.is_validated(FORM));

    let (mut once, effects) = update(state, Msg::FormReset { form: FORM });
    assert!(effects.is_empty());
    assert!(!once.is_validated(FORM));
    assert!(once.view().forms[FORM].remove_validation_marker);

    let (twice, _) = update(once.clone(), Msg::FormReset { form: FORM });
    assert_eq!(twice.view().forms, once.view().forms);

    // The removal is requested once per reset, not on every later render.
    assert!(once.consume_dirty());
    assert!(!once.view().forms[FORM].remove_validation_marker);
    let (mut again, _) = update(once, Msg::FormReset { form: FORM });
    assert!(again.view().forms[FORM].remove_validation_marker);
    assert!(again.consume_dirty());
}

#[test]
fn forms_are_independent() {
    init_logging();
    let (state, _) = update(
        page(),
        Msg::FormRegistered {
            form: 1,
            validated: true,
        },
    );
    let (state, _) = submit(state, "Upload", 0);

    let view = state.view();
    assert_eq!(view.forms[1].submit, None);
    assert!(view.forms[1].validated);
    assert_eq!(state.submission_phase(1), Some(&SubmissionPhase::Idle));
}
