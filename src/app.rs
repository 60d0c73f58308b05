//! JavaScript entry point.
//!
//! ```js
//! const toggle = new ThemeToggle({ position: "top-left", useFilter: true });
//! document.addEventListener("themeChanged", (e) => console.log(e.detail.theme));
//! ```

type DomWidget = ToggleWidget<DomPage, LocalPreferenceStore>;
type SharedWidget = Rc<RefCell<DomWidget>>;

#[wasm_bindgen]
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct ThemeToggle {
    widget: SharedWidget,

    #[derivative(Debug = "ignore")]
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ThemeToggle {
    /// Option values that do not fit are reported on the console and left at
    /// their defaults, the constructor never throws.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> ThemeToggle {
        telemetry::init_global_default(LevelFilter::Info);

        let (options, rejected) = ToggleOptions::from_partial(&to_json(&options));
        for e in &rejected {
            log::warn!("{e}: {}, using the default", source_of(e));
        }

        let widget = Rc::new(RefCell::new(ToggleWidget::new(
            options,
            DomPage,
            LocalPreferenceStore,
        )));

        let button = widget.borrow().button().cloned();
        let listeners = button
            .map(|button| listen(&button, &widget))
            .unwrap_or_default();

        Self { widget, listeners }
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> String {
        exclusive(&*self.widget, "toggleTheme", |widget| widget.toggle().to_string())
            .unwrap_or_else(|| self.theme())
    }

    #[wasm_bindgen(js_name = updatePosition)]
    pub fn update_position(&self, position: &str, offset: JsValue) {
        let offset = Offset::from_partial(&to_json(&offset)).unwrap_or_else(|e| {
            log::warn!("{e}: {}, keeping the current one", source_of(&e));
            None
        });

        exclusive(&*self.widget, "updatePosition", |widget| {
            widget.update_position(Position::from(position), offset)
        });
    }

    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        match self.widget.try_borrow() {
            Ok(widget) => widget.theme().to_string(),
            // still inside a toggle, the root attribute is already up to date
            Err(_) => gloo_utils::document_element()
                .get_attribute("data-theme")
                .unwrap_or_else(|| Theme::default().to_string()),
        }
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
        exclusive(&*self.widget, "destroy", |widget| widget.destroy());
    }
}

/// Runs `f` unless the widget is already borrowed, which happens when a
/// `themeChanged` listener calls back into the toggle.
fn exclusive<W, T>(cell: &RefCell<W>, action: &str, f: impl FnOnce(&mut W) -> T) -> Option<T> {
    match cell.try_borrow_mut() {
        Ok(mut widget) => Some(f(&mut widget)),
        Err(_) => {
            log::warn!("{action} while the theme toggle is busy, ignored");
            None
        }
    }
}

fn to_json(value: &JsValue) -> Value {
    if value.is_undefined() || value.is_null() {
        return Value::Null;
    }

    value.into_serde().unwrap_or_else(|e| {
        log::warn!("options are not JSON compatible: {e}");
        Value::Null
    })
}

fn source_of(e: &OptionsError) -> String {
    std::error::Error::source(e)
        .map(|source| source.to_string())
        .unwrap_or_default()
}

fn listen(button: &HtmlElement, widget: &SharedWidget) -> Vec<EventListener> {
    let on = |event: &'static str, handler: fn(&mut DomWidget)| {
        let widget = Rc::clone(widget);
        EventListener::new(button, event, move |_| {
            exclusive(&*widget, event, handler);
        })
    };

    vec![
        on("click", |widget| {
            widget.toggle();
        }),
        on("mouseenter", |widget| widget.set_hovered(true)),
        on("mouseleave", |widget| widget.set_hovered(false)),
    ]
}


use crate::config::{Offset, OptionsError, Position, ToggleOptions};
use crate::dom::DomPage;
use crate::storage::LocalPreferenceStore;
use crate::telemetry;
use crate::theme::prelude::*;
use gloo_events::EventListener;
use gloo_utils::format::JsValueSerdeExt;
use log::LevelFilter;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
