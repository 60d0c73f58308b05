//! [`Page`] over the live browser document.

pub const THEME_CHANGED_EVENT: &str = "themeChanged";

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Payload of the `themeChanged` event, `event.detail.theme` on the JS side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeChange {
    pub theme: Theme,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DomPage;

impl Page for DomPage {
    type Button = HtmlElement;

    fn set_root_property(&mut self, name: &str, value: &str) {
        match gloo_utils::document_element().dyn_into::<HtmlElement>() {
            Ok(root) => report(root.style().set_property(name, value), "set root property"),
            Err(_) => log::warn!("root element does not carry inline styles"),
        }
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        report(
            gloo_utils::document_element().set_attribute(name, value),
            "set root attribute",
        );
    }

    fn set_body_colors(&mut self, background: &str, foreground: &str) {
        let style = gloo_utils::body().style();
        report(
            style.set_property("background-color", background),
            "set body background",
        );
        report(style.set_property("color", foreground), "set body color");
    }

    fn insert_style(&mut self, id: &str, css: &str) {
        let style = match gloo_utils::document().create_element("style") {
            Ok(style) => style,
            Err(e) => {
                report::<()>(Err(e), "create style element");
                return;
            }
        };
        style.set_id(id);
        style.set_text_content(Some(css));

        report(gloo_utils::head().append_child(&style), "insert style");
    }

    fn remove_style(&mut self, id: &str) {
        remove_by_id(id);
    }

    fn remove_style_later(&mut self, id: &str, delay_ms: u32) {
        let id = id.to_owned();
        Timeout::new(delay_ms, move || remove_by_id(&id)).forget();
    }

    fn create_button(&mut self, id: &str, label: &str) -> HtmlElement {
        let button: HtmlElement = gloo_utils::document()
            .create_element("button")
            .expect_throw("document to create a button")
            .unchecked_into();

        button.set_id(id);
        report(button.set_attribute("type", "button"), "set button type");
        report(button.set_attribute("aria-label", label), "set button label");
        report(gloo_utils::body().append_child(&button), "attach button");

        button
    }

    fn set_button_style(&mut self, button: &HtmlElement, property: &str, value: &str) {
        report(button.style().set_property(property, value), "style button");
    }

    fn set_button_icon(&mut self, button: &HtmlElement, markup: &str) {
        button.set_inner_html(markup);
    }

    fn detach_button(&mut self, button: &HtmlElement) {
        if button.parent_node().is_some() {
            button.remove();
        }
    }

    fn notify_theme_change(&mut self, theme: Theme) {
        let detail = match JsValue::from_serde(&ThemeChange { theme }) {
            Ok(detail) => detail,
            Err(e) => {
                log::warn!("failed to encode {THEME_CHANGED_EVENT} detail: {e}");
                return;
            }
        };

        let init = CustomEventInit::new();
        init.set_detail(&detail);

        match CustomEvent::new_with_event_init_dict(THEME_CHANGED_EVENT, &init) {
            Ok(event) => report(
                gloo_utils::document().dispatch_event(&event),
                "dispatch theme change",
            ),
            Err(e) => report::<()>(Err(e), "create theme change event"),
        }
    }

    fn prefers_dark(&self) -> bool {
        gloo_utils::window()
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

fn remove_by_id(id: &str) {
    if let Some(element) = gloo_utils::document().get_element_by_id(id) {
        element.remove();
    }
}

// DOM failures are not expected on a live document, they are logged and skipped
fn report<T>(result: Result<T, JsValue>, action: &str) {
    if let Err(e) = result {
        log::warn!("failed to {action}: {}", describe(&e));
    }
}

use crate::page::Page;
use crate::storage::describe;
use crate::theme::Theme;
use gloo_timers::callback::Timeout;
use gloo_utils::format::JsValueSerdeExt;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};
