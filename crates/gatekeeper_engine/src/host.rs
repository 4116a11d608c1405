use gatekeeper_core::{format_mib, AlertId, Effect, InputId, Msg};
use page_logging::{page_debug, page_info, page_warn};
use thiserror::Error;

use crate::ExportFile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("host capability unavailable: {0}")]
    Unavailable(&'static str),
    #[error("host call failed: {0}")]
    Call(String),
}

/// The environment effects run against: a browser page or a headless harness.
pub trait Host {
    /// Blocking, user-facing message.
    fn alert(&mut self, message: &str);
    fn clear_file_input(&mut self, input: InputId) -> Result<(), HostError>;
    fn set_input_value(&mut self, input: InputId, value: &str) -> Result<(), HostError>;
    /// Deliver `msg` back to the runtime once `delay_ms` has elapsed.
    fn schedule(&mut self, delay_ms: u32, msg: Msg);
    fn scroll_into_view(&mut self, selector: &str) -> Result<(), HostError>;
    fn close_alert(&mut self, alert: AlertId) -> Result<(), HostError>;
    /// Starts a clipboard write; the outcome arrives later as
    /// `Msg::ClipboardWritten`.
    fn write_clipboard(&mut self, text: String);
    fn download(&mut self, file: &ExportFile) -> Result<(), HostError>;
}

/// Executes effects in order. Host failures are logged and do not stop the
/// remaining effects.
pub fn run_effects<H: Host + ?Sized>(host: &mut H, effects: Vec<Effect>) {
    for effect in effects {
        let result = match effect {
            Effect::ShowAlert { message } => {
                host.alert(&message);
                Ok(())
            }
            Effect::ClearFileInput { input } => host.clear_file_input(input),
            Effect::FileAccepted {
                input,
                name,
                size_bytes,
            } => {
                page_info!(
                    "File selected: {} ({} MB) input={}",
                    name,
                    format_mib(size_bytes),
                    input
                );
                Ok(())
            }
            Effect::SuppressSubmit { form } => {
                // Handled by the submit listener before effects run.
                page_debug!("duplicate submit suppressed form={}", form);
                Ok(())
            }
            Effect::Schedule { delay_ms, msg } => {
                host.schedule(delay_ms, *msg);
                Ok(())
            }
            Effect::SetInputValue { input, value } => host.set_input_value(input, &value),
            Effect::ScrollIntoView { selector } => host.scroll_into_view(&selector),
            Effect::CloseAlert { alert } => host.close_alert(alert),
            Effect::WriteClipboard { text } => {
                host.write_clipboard(text);
                Ok(())
            }
        };
        if let Err(err) = result {
            page_warn!("effect failed: {}", err);
        }
    }
}
