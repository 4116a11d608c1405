use std::cell::RefCell;
use std::rc::Rc;

use gatekeeper_core::{FileDescriptor, Msg};
use gatekeeper_engine::{build_csv_export, run_effects, Host, PageConfig, PageRuntime};
use page_logging::{page_debug, page_error, page_info, page_warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use super::dom::{elements, PageDom};
use super::host::WebHost;
use super::logging;
use crate::ui;
use crate::ui::constants::*;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Handle shared by every listener and timer on the page.
#[derive(Clone)]
pub(super) struct Page {
    pub(super) window: Window,
    pub(super) dom: Rc<PageDom>,
    runtime: Rc<RefCell<PageRuntime>>,
}

impl Page {
    /// Runs `msg` through the runtime, renders and executes the effects.
    /// Returns false when the triggering event's default action must be
    /// prevented.
    pub(super) fn dispatch(&self, msg: Msg) -> bool {
        let dispatch = self.runtime.borrow_mut().dispatch(msg);
        if let Some(view) = &dispatch.view {
            for cmd in ui::render(view) {
                if let Err(err) = self.dom.apply(&cmd) {
                    page_warn!("render failed for {:?}: {:?}", cmd, err);
                }
            }
        }
        let allowed = !dispatch.suppresses_submit();
        run_effects(&mut WebHost::new(self.clone()), dispatch.effects);
        allowed
    }

    fn export_table(&self, table_id: &str) {
        let Some(table) = self.dom.document.get_element_by_id(table_id) else {
            page_debug!("no table #{} to export", table_id);
            return;
        };
        let rows = match table_rows(&table) {
            Ok(rows) => rows,
            Err(err) => {
                page_warn!("reading table #{} failed: {:?}", table_id, err);
                return;
            }
        };
        let file = build_csv_export(&rows);
        if let Err(err) = WebHost::new(self.clone()).download(&file) {
            page_warn!("export failed: {}", err);
        }
    }
}

fn table_rows(table: &Element) -> Result<Vec<Vec<String>>, JsValue> {
    elements::<Element>(&table.query_selector_all(TABLE_ROW_SELECTOR)?)
        .iter()
        .map(|row| -> Result<Vec<String>, JsValue> {
            let cells = elements::<HtmlElement>(&row.query_selector_all(TABLE_CELL_SELECTOR)?);
            Ok(cells.iter().map(|cell| cell.inner_text()).collect())
        })
        .collect()
}

fn current_page() -> Option<Page> {
    PAGE.with(|slot| slot.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::initialize();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(move || {
            if let Err(err) = init(window) {
                page_error!("gatekeeper init failed: {:?}", err);
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
        Ok(())
    } else {
        init(window)
    }
}

fn init(window: Window) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let config = load_config(&document);
    let page = Page {
        window: window.clone(),
        dom: Rc::new(PageDom::discover(&document)?),
        runtime: Rc::new(RefCell::new(PageRuntime::new(config.settings()))),
    };
    PAGE.with(|slot| *slot.borrow_mut() = Some(page.clone()));

    wire_forms(&page)?;
    wire_file_inputs(&page, &config.guarded_input_id)?;
    wire_number_inputs(&page)?;
    wire_anchors(&page)?;

    for alert in 0..page.dom.alerts.len() {
        page.dispatch(Msg::AlertRegistered { alert });
    }
    let links = page
        .dom
        .nav_links
        .iter()
        .enumerate()
        .map(|(id, link)| (id, link.get_attribute("href")))
        .collect();
    page.dispatch(Msg::NavLinksRegistered {
        current_path: window.location().pathname()?,
        links,
    });

    page_info!(
        "gatekeeper ready: {} forms, {} file inputs",
        page.dom.forms.len(),
        page.dom.file_inputs.len()
    );
    Ok(())
}

fn load_config(document: &Document) -> PageConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
    else {
        return PageConfig::default();
    };
    PageConfig::from_ron_str(&text).unwrap_or_else(|err| {
        page_warn!("ignoring #{}: {}", CONFIG_SCRIPT_ID, err);
        PageConfig::default()
    })
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_forms(page: &Page) -> Result<(), JsValue> {
    for (form_id, form) in page.dom.forms.iter().enumerate() {
        page.dispatch(Msg::FormRegistered {
            form: form_id,
            validated: form.class_list().contains(VALIDATED_CLASS),
        });
        let page = page.clone();
        listen(form, "submit", move |event| {
            let submit_label = page.dom.submit_control(form_id).map(|b| b.inner_html());
            let allowed = page.dispatch(Msg::FormSubmitted {
                form: form_id,
                submit_label,
                now_ms: js_sys::Date::now() as u64,
            });
            if !allowed {
                event.prevent_default();
            }
        })?;
    }

    for button in &page.dom.reset_buttons {
        let Some(form_id) = page.dom.form_of(button) else {
            continue;
        };
        let page = page.clone();
        listen(button, "click", move |_| {
            page.dispatch(Msg::FormReset { form: form_id });
        })?;
    }
    Ok(())
}

fn wire_file_inputs(page: &Page, guarded_id: &str) -> Result<(), JsValue> {
    for (input_id, input) in page.dom.file_inputs.iter().enumerate() {
        page.dispatch(Msg::FileInputRegistered {
            input: input_id,
            guarded: input.element.id() == guarded_id,
            label_style: input.style,
        });
        let element = input.element.clone();
        let page = page.clone();
        listen(&input.element, "change", move |_| {
            let file = element
                .files()
                .and_then(|files| files.item(0))
                .map(|file| FileDescriptor::new(file.name(), file.size() as u64));
            page.dispatch(Msg::FileSelected {
                input: input_id,
                file,
            });
        })?;
    }
    Ok(())
}

fn wire_number_inputs(page: &Page) -> Result<(), JsValue> {
    for (input_id, input) in page.dom.number_inputs.iter().enumerate() {
        let element = input.clone();
        let page = page.clone();
        listen(input, "input", move |_| {
            page.dispatch(Msg::NumberInputChanged {
                input: input_id,
                value: element.value(),
            });
        })?;
    }
    Ok(())
}

fn wire_anchors(page: &Page) -> Result<(), JsValue> {
    for anchor in &page.dom.anchors {
        let element = anchor.clone();
        let page = page.clone();
        listen(anchor, "click", move |event| {
            event.prevent_default();
            page.dispatch(Msg::AnchorClicked {
                href: element.get_attribute("href").unwrap_or_default(),
            });
        })?;
    }
    Ok(())
}

/// Downloads the rows of table `table_id` as `export.csv`.
#[wasm_bindgen(js_name = exportToCSV)]
pub fn export_to_csv(table_id: &str) {
    if let Some(page) = current_page() {
        page.export_table(table_id);
    }
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    if let Some(page) = current_page() {
        page.dispatch(Msg::CopyRequested { text });
    }
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(value: f64) -> String {
    gatekeeper_core::format_currency(value)
}

#[wasm_bindgen(js_name = formatPercentage)]
pub fn format_percentage(value: f64) -> String {
    gatekeeper_core::format_percentage(value)
}
