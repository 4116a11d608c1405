//! A page without a browser: synthetic events in, recorded host calls out.

use std::collections::BTreeMap;

use gatekeeper_core::{AlertId, AppState, AppViewModel, FormId, InputId, Msg, Settings};
use page_logging::page_warn;

use crate::{build_csv_export, run_effects, ExportFile, Host, HostError, PageRuntime, TimerQueue};

/// Host that records every call and keeps scheduled messages on a virtual clock.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub timers: TimerQueue,
    pub alerts: Vec<String>,
    pub cleared_inputs: Vec<InputId>,
    pub input_values: BTreeMap<InputId, String>,
    pub scrolled_to: Vec<String>,
    pub closed_alerts: Vec<AlertId>,
    pub clipboard: Vec<String>,
    pub downloads: Vec<ExportFile>,
    /// When set, clipboard writes report failure.
    pub deny_clipboard: bool,
}

impl Host for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn clear_file_input(&mut self, input: InputId) -> Result<(), HostError> {
        self.cleared_inputs.push(input);
        Ok(())
    }

    fn set_input_value(&mut self, input: InputId, value: &str) -> Result<(), HostError> {
        self.input_values.insert(input, value.to_string());
        Ok(())
    }

    fn schedule(&mut self, delay_ms: u32, msg: Msg) {
        self.timers.schedule(delay_ms, msg);
    }

    fn scroll_into_view(&mut self, selector: &str) -> Result<(), HostError> {
        self.scrolled_to.push(selector.to_string());
        Ok(())
    }

    fn close_alert(&mut self, alert: AlertId) -> Result<(), HostError> {
        self.closed_alerts.push(alert);
        Ok(())
    }

    fn write_clipboard(&mut self, text: String) {
        let result = if self.deny_clipboard {
            Err("clipboard write denied".to_string())
        } else {
            self.clipboard.push(text);
            Ok(())
        };
        // Resolves on the next turn, like the browser promise.
        self.timers.schedule(0, Msg::ClipboardWritten(result));
    }

    fn download(&mut self, file: &ExportFile) -> Result<(), HostError> {
        self.downloads.push(file.clone());
        Ok(())
    }
}

/// Runtime wired to a [`RecordingHost`]. Holds the last rendered view.
#[derive(Debug, Default)]
pub struct HeadlessPage {
    runtime: PageRuntime,
    host: RecordingHost,
    rendered: AppViewModel,
}

impl HeadlessPage {
    pub fn new(settings: Settings) -> Self {
        Self {
            runtime: PageRuntime::new(settings),
            host: RecordingHost::default(),
            rendered: AppViewModel::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut RecordingHost {
        &mut self.host
    }

    /// The view as of the last render.
    pub fn rendered(&self) -> &AppViewModel {
        &self.rendered
    }

    pub fn now_ms(&self) -> u64 {
        self.host.timers.now_ms()
    }

    /// Dispatches `msg` and runs its effects. Returns false when the event's
    /// default action would be prevented.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let dispatch = self.runtime.dispatch(msg);
        let allowed = !dispatch.suppresses_submit();
        if let Some(view) = dispatch.view {
            self.rendered = view;
        }
        run_effects(&mut self.host, dispatch.effects);
        allowed
    }

    /// Submits `form` at the current virtual time.
    pub fn submit(&mut self, form: FormId, submit_label: Option<&str>) -> bool {
        let now_ms = self.now_ms();
        self.dispatch(Msg::FormSubmitted {
            form,
            submit_label: submit_label.map(str::to_string),
            now_ms,
        })
    }

    /// Moves the virtual clock forward by `ms`, delivering every message that
    /// falls due on the way, including ones scheduled while advancing.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms() + ms;
        while let Some(msg) = self.host.timers.pop_due(target) {
            self.dispatch(msg);
        }
        self.host.timers.set_now(target);
    }

    /// Exports table rows as `export.csv`. A missing table does nothing.
    pub fn export_table<S: AsRef<str>>(&mut self, rows: Option<&[Vec<S>]>) {
        let Some(rows) = rows else {
            return;
        };
        let file = build_csv_export(rows);
        if let Err(err) = self.host.download(&file) {
            page_warn!("export failed: {}", err);
        }
    }
}
