use gatekeeper_core::{AlertId, InputId, Msg};
use gatekeeper_engine::{ExportFile, Host, HostError};
use gloo_timers::callback::Timeout;
use page_logging::{page_debug, page_warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Url,
};

use super::app::Page;

/// Runs effects against the live document.
pub(super) struct WebHost {
    page: Page,
}

impl WebHost {
    pub(super) fn new(page: Page) -> Self {
        Self { page }
    }
}

fn js_error(err: JsValue) -> HostError {
    HostError::Call(format!("{err:?}"))
}

impl Host for WebHost {
    fn alert(&mut self, message: &str) {
        if let Err(err) = self.page.window.alert_with_message(message) {
            page_warn!("alert failed: {:?}", err);
        }
    }

    fn clear_file_input(&mut self, input: InputId) -> Result<(), HostError> {
        let file_input = self
            .page
            .dom
            .file_inputs
            .get(input)
            .ok_or_else(|| HostError::MissingElement(format!("file input {input}")))?;
        file_input.element.set_value("");
        Ok(())
    }

    fn set_input_value(&mut self, input: InputId, value: &str) -> Result<(), HostError> {
        let number_input = self
            .page
            .dom
            .number_inputs
            .get(input)
            .ok_or_else(|| HostError::MissingElement(format!("number input {input}")))?;
        number_input.set_value(value);
        Ok(())
    }

    fn schedule(&mut self, delay_ms: u32, msg: Msg) {
        let page = self.page.clone();
        Timeout::new(delay_ms, move || {
            page.dispatch(msg);
        })
        .forget();
    }

    fn scroll_into_view(&mut self, selector: &str) -> Result<(), HostError> {
        // An anchor pointing nowhere, or at an invalid selector, does nothing.
        let Some(target) = self.page.dom.document.query_selector(selector).ok().flatten() else {
            page_debug!("no scroll target for {}", selector);
            return Ok(());
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn close_alert(&mut self, alert: AlertId) -> Result<(), HostError> {
        let element = self
            .page
            .dom
            .alerts
            .get(alert)
            .ok_or_else(|| HostError::MissingElement(format!("alert {alert}")))?;
        element.class_list().remove_1("show").map_err(js_error)?;
        element.remove();
        Ok(())
    }

    fn write_clipboard(&mut self, text: String) {
        let page = self.page.clone();
        let promise = match clipboard_write_text(&self.page, &text) {
            Ok(promise) => promise,
            Err(err) => {
                page.dispatch(Msg::ClipboardWritten(Err(err.to_string())));
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| format!("{err:?}"));
            page.dispatch(Msg::ClipboardWritten(result));
        });
    }

    fn download(&mut self, file: &ExportFile) -> Result<(), HostError> {
        let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
        let options = BlobPropertyBag::new();
        options.set_type(&file.mime_type);
        let blob =
            Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor = self
            .page
            .dom
            .document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| HostError::Unavailable("anchor element"))?;
        anchor.set_href(&url);
        anchor.set_download(&file.filename);
        anchor.click();

        Url::revoke_object_url(&url).map_err(js_error)
    }
}

/// `navigator.clipboard.writeText(text)`, looked up dynamically since the
/// clipboard is missing outside secure contexts.
fn clipboard_write_text(page: &Page, text: &str) -> Result<js_sys::Promise, HostError> {
    let navigator = page.window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(js_error)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(HostError::Unavailable("navigator.clipboard"));
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| HostError::Unavailable("navigator.clipboard.writeText"))?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_error)?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| HostError::Unavailable("clipboard promise"))
}
