use std::cell::RefCell;

use gatekeeper_core::{FileLabelStyle, FormId, NotificationId};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, DomTokenList, Element, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, NodeList,
};

use crate::ui::constants::*;
use crate::ui::{ClassTarget, DomCommand, NotificationMarkup, ShownNotifications};

/// Elements the gatekeeper works with, indexed in document order. The
/// indices are the ids used in `Msg`s.
pub(super) struct PageDom {
    pub(super) document: Document,
    pub(super) forms: Vec<HtmlFormElement>,
    pub(super) reset_buttons: Vec<Element>,
    pub(super) file_inputs: Vec<FileInput>,
    pub(super) number_inputs: Vec<HtmlInputElement>,
    pub(super) anchors: Vec<Element>,
    pub(super) alerts: Vec<Element>,
    pub(super) nav_links: Vec<Element>,
    shown_notifications: RefCell<ShownNotifications>,
}

pub(super) struct FileInput {
    pub(super) element: HtmlInputElement,
    pub(super) style: FileLabelStyle,
    label: FileLabel,
}

enum FileLabel {
    Custom {
        name: Option<HtmlElement>,
        instruction: Option<HtmlElement>,
        icon: Option<Element>,
        served: ServedCustomLabel,
    },
    Sibling {
        label: Element,
        served_text: Option<String>,
    },
    Unlabeled,
}

/// How the custom label looked before any file was chosen.
struct ServedCustomLabel {
    name_text: Option<String>,
    name_weight: String,
    name_color: String,
    instruction_display: String,
    icon_class: String,
}

pub(super) fn elements<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn first<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

impl PageDom {
    pub(super) fn discover(document: &Document) -> Result<Self, JsValue> {
        let file_inputs = elements::<HtmlInputElement>(
            &document.query_selector_all(FILE_INPUT_SELECTOR)?,
        )
        .into_iter()
        .map(FileInput::new)
        .collect();

        Ok(Self {
            document: document.clone(),
            forms: elements(&document.query_selector_all(FORM_SELECTOR)?),
            reset_buttons: elements(&document.query_selector_all(RESET_SELECTOR)?),
            file_inputs,
            number_inputs: elements(&document.query_selector_all(NUMBER_INPUT_SELECTOR)?),
            anchors: elements(&document.query_selector_all(FRAGMENT_ANCHOR_SELECTOR)?),
            alerts: elements(&document.query_selector_all(ALERT_SELECTOR)?),
            nav_links: elements(&document.query_selector_all(NAV_LINK_SELECTOR)?),
            shown_notifications: RefCell::new(ShownNotifications::new()),
        })
    }

    pub(super) fn submit_control(&self, form: FormId) -> Option<Element> {
        let form = self.forms.get(form)?;
        form.query_selector(SUBMIT_SELECTOR).ok().flatten()
    }

    /// Index of the form enclosing `element`.
    pub(super) fn form_of(&self, element: &Element) -> Option<FormId> {
        let enclosing = element.closest(FORM_SELECTOR).ok().flatten()?;
        self.forms.iter().position(|form| {
            let form: &Element = form;
            form == &enclosing
        })
    }

    pub(super) fn apply(&self, cmd: &DomCommand) -> Result<(), JsValue> {
        match cmd {
            DomCommand::SetSubmitLabel { form, html } => {
                if let Some(button) = self.submit_control(*form) {
                    button.set_inner_html(html);
                }
            }
            DomCommand::SetSubmitDisabled { form, disabled } => {
                if let Some(button) = self
                    .submit_control(*form)
                    .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
                {
                    button.set_disabled(*disabled);
                }
            }
            DomCommand::SetClass {
                target,
                class,
                present,
            } => {
                if let Some(classes) = self.class_list(*target) {
                    classes.toggle_with_force(class, *present)?;
                }
            }
            DomCommand::ShowFileName { input, name, .. } => {
                if let Some(input) = self.file_inputs.get(*input) {
                    input.show_name(name)?;
                }
            }
            DomCommand::ResetFileLabel { input } => {
                if let Some(input) = self.file_inputs.get(*input) {
                    input.reset_label()?;
                }
            }
            DomCommand::SyncNotifications { notifications } => {
                self.sync_notifications(notifications)?;
            }
        }
        Ok(())
    }

    fn class_list(&self, target: ClassTarget) -> Option<DomTokenList> {
        match target {
            ClassTarget::Form(form) => self.forms.get(form).map(|f| f.class_list()),
            ClassTarget::NavLink(link) => self.nav_links.get(link).map(|l| l.class_list()),
        }
    }

    fn sync_notifications(&self, notifications: &[NotificationMarkup]) -> Result<(), JsValue> {
        let Some(container) = self
            .document
            .query_selector(NOTIFICATION_CONTAINER_SELECTOR)?
        else {
            return Ok(());
        };

        let rendered: Vec<Element> =
            elements(&container.query_selector_all(&format!("[{NOTIFICATION_ID_ATTR}]"))?);
        for element in rendered {
            let wanted = element
                .get_attribute(NOTIFICATION_ID_ATTR)
                .and_then(|id| id.parse::<NotificationId>().ok())
                .is_some_and(|id| notifications.iter().any(|n| n.id == id));
            if !wanted {
                element.remove();
            }
        }

        // Oldest first, each inserted at the top, so the newest ends up first.
        let fresh = self.shown_notifications.borrow_mut().sync(notifications);
        for markup in fresh {
            let element = self.document.create_element("div")?;
            element.set_class_name(&markup.class_name);
            element.set_attribute("role", "alert")?;
            element.set_attribute(NOTIFICATION_ID_ATTR, &markup.id.to_string())?;
            element.set_inner_html(&markup.html);
            container.insert_before(&element, container.first_child().as_ref())?;
        }
        Ok(())
    }
}

impl FileInput {
    fn new(element: HtmlInputElement) -> Self {
        let label = if element.class_list().contains(CUSTOM_FILE_INPUT_CLASS) {
            element
                .closest(FILE_WRAPPER_SELECTOR)
                .ok()
                .flatten()
                .map(|wrapper| custom_label(&wrapper))
                .unwrap_or(FileLabel::Unlabeled)
        } else {
            match element.next_element_sibling() {
                Some(label) if label.tag_name().eq_ignore_ascii_case("label") => {
                    FileLabel::Sibling {
                        served_text: label.text_content(),
                        label,
                    }
                }
                _ => FileLabel::Unlabeled,
            }
        };
        let style = match label {
            FileLabel::Custom { .. } => FileLabelStyle::CustomWrapper,
            FileLabel::Sibling { .. } => FileLabelStyle::SiblingLabel,
            FileLabel::Unlabeled => FileLabelStyle::Unlabeled,
        };
        Self {
            element,
            style,
            label,
        }
    }

    fn show_name(&self, file_name: &str) -> Result<(), JsValue> {
        match &self.label {
            FileLabel::Custom {
                name,
                instruction,
                icon,
                ..
            } => {
                if let Some(name) = name {
                    name.set_text_content(Some(file_name));
                    name.style().set_property("font-weight", "bold")?;
                    name.style().set_property("color", FILE_NAME_COLOR)?;
                }
                if let Some(instruction) = instruction {
                    instruction.style().set_property("display", "none")?;
                }
                if let Some(icon) = icon {
                    icon.set_class_name(FILE_SELECTED_ICON_CLASS);
                }
            }
            FileLabel::Sibling { label, .. } => label.set_text_content(Some(file_name)),
            FileLabel::Unlabeled => {}
        }
        Ok(())
    }

    fn reset_label(&self) -> Result<(), JsValue> {
        match &self.label {
            FileLabel::Custom {
                name,
                instruction,
                icon,
                served,
            } => {
                if let Some(name) = name {
                    name.set_text_content(served.name_text.as_deref());
                    name.style()
                        .set_property("font-weight", &served.name_weight)?;
                    name.style().set_property("color", &served.name_color)?;
                }
                if let Some(instruction) = instruction {
                    instruction
                        .style()
                        .set_property("display", &served.instruction_display)?;
                }
                if let Some(icon) = icon {
                    icon.set_class_name(&served.icon_class);
                }
            }
            FileLabel::Sibling { label, served_text } => {
                label.set_text_content(served_text.as_deref())
            }
            FileLabel::Unlabeled => {}
        }
        Ok(())
    }
}

fn custom_label(wrapper: &Element) -> FileLabel {
    let name: Option<HtmlElement> = first(wrapper, FILE_NAME_SELECTOR);
    let instruction: Option<HtmlElement> = first(wrapper, FILE_INSTRUCTION_SELECTOR);
    let icon: Option<Element> = first(wrapper, FILE_ICON_SELECTOR);

    let inline = |el: &Option<HtmlElement>, property: &str| {
        el.as_ref()
            .and_then(|el| el.style().get_property_value(property).ok())
            .unwrap_or_default()
    };
    let served = ServedCustomLabel {
        name_text: name.as_ref().and_then(|el| el.text_content()),
        name_weight: inline(&name, "font-weight"),
        name_color: inline(&name, "color"),
        instruction_display: inline(&instruction, "display"),
        icon_class: icon.as_ref().map(|el| el.class_name()).unwrap_or_default(),
    };

    FileLabel::Custom {
        name,
        instruction,
        icon,
        served,
    }
}
