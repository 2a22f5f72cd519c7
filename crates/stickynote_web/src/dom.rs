//! DOM view.
//!
//! # Responsibility
//! - Rebuild every note item on redraw, inserted before the add item.
//! - Remove a single item on delete.
//! - Show blocking confirmations and transient toasts.
//!
//! # Invariants
//! - The add item is never removed by a redraw.
//! - Each textarea carries its note id in `data-id`.

use crate::storage::describe_js_value;
use log::warn;
use stickynote_core::render::html::{ADD_ITEM_CLASS, ITEM_CLASS, NOTES_ATTR, NOTE_ID_ATTR};
use stickynote_core::{BoardView, Note, NoteId, NotificationKind, ViewError, ViewResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlTextAreaElement, NodeList, Window};

const TOAST_CLASS: &str = "notification";
const TOAST_TIMEOUT_MS: i32 = 3000;

/// View bound to one mounted board skeleton.
pub struct DomView {
    window: Window,
    document: Document,
    notes: Element,
    placeholder: String,
}

impl DomView {
    /// Binds to the `[data-notes]` container inside `root`.
    pub fn attach(
        window: Window,
        root: &Element,
        placeholder: impl Into<String>,
    ) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("document is unavailable"))?;
        let notes = root
            .query_selector(&format!("[{NOTES_ATTR}]"))?
            .ok_or_else(|| JsValue::from_str("notes container is missing from the skeleton"))?;
        Ok(Self {
            window,
            document,
            notes,
            placeholder: placeholder.into(),
        })
    }

    /// Container that receives delegated note events.
    pub fn notes_container(&self) -> &Element {
        &self.notes
    }

    fn build_item(&self, note: &Note) -> ViewResult<Element> {
        let item = self.document.create_element("div").map_err(view_error)?;
        item.set_class_name(ITEM_CLASS);

        let textarea = self
            .document
            .create_element("textarea")
            .map_err(view_error)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ViewError("created element is not a textarea".to_string()))?;
        textarea
            .set_attribute(NOTE_ID_ATTR, note.id.as_str())
            .map_err(view_error)?;
        textarea.set_placeholder(&self.placeholder);
        textarea.set_value(&note.text);

        item.append_child(&textarea).map_err(view_error)?;
        Ok(item)
    }

    fn show_toast(&self, kind: NotificationKind, message: &str) -> Result<(), JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document body is unavailable"))?;
        let toast = self.document.create_element("div")?;
        toast.set_class_name(&toast_class(kind));
        toast.set_text_content(Some(message));
        body.append_child(&toast)?;

        let expire = Closure::once_into_js(move || toast.remove());
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                expire.unchecked_ref(),
                TOAST_TIMEOUT_MS,
            )?;
        Ok(())
    }
}

impl BoardView for DomView {
    fn render_notes(&mut self, notes: &[Note]) -> ViewResult<()> {
        let stale = self
            .notes
            .query_selector_all(&format!(".{ITEM_CLASS}:not(.{ADD_ITEM_CLASS})"))
            .map_err(view_error)?;
        for element in elements(&stale) {
            element.remove();
        }

        let anchor = self
            .notes
            .query_selector(&format!(".{ADD_ITEM_CLASS}"))
            .map_err(view_error)?;
        for note in notes {
            let item = self.build_item(note)?;
            self.notes
                .insert_before(&item, anchor.as_deref())
                .map_err(view_error)?;
        }
        Ok(())
    }

    fn remove_note(&mut self, id: &NoteId) -> ViewResult<()> {
        let textareas = self
            .notes
            .query_selector_all(&format!("textarea[{NOTE_ID_ATTR}]"))
            .map_err(view_error)?;
        let target = elements(&textareas)
            .find(|element| element.get_attribute(NOTE_ID_ATTR).as_deref() == Some(id.as_str()));
        if let Some(textarea) = target {
            if let Some(item) = textarea
                .closest(&format!(".{ITEM_CLASS}"))
                .map_err(view_error)?
            {
                item.remove();
            }
        }
        Ok(())
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        if let Err(err) = self.show_toast(kind, message) {
            warn!(
                "event=toast_show module=web status=error kind={} error={}",
                kind.as_str(),
                describe_js_value(&err)
            );
        }
    }

    fn confirm(&mut self, message: &str) -> ViewResult<bool> {
        self.window
            .confirm_with_message(message)
            .map_err(view_error)
    }
}

/// Class list for a toast of `kind`.
pub(crate) fn toast_class(kind: NotificationKind) -> String {
    format!("{TOAST_CLASS} {TOAST_CLASS}--{}", kind.as_str())
}

fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(move |index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

fn view_error(value: JsValue) -> ViewError {
    ViewError(describe_js_value(&value))
}
