//! wasm entry points.
//!
//! # Responsibility
//! - Mount the board skeleton and build the page-wide `NoteBoard`.
//! - Route `click`/`change`/`dblclick` events to board operations.
//!
//! # Invariants
//! - Note events are delegated on the notes container, so a full redraw
//!   never rewires listeners.
//! - Board errors are rethrown to JS as uncaught exceptions.
//! - A handler that finds the board already borrowed drops its event.

use crate::dom::DomView;
use crate::storage::LocalStorageStore;
use log::{error, info, warn, Level};
use std::cell::RefCell;
use std::rc::Rc;
use stickynote_core::render::html::{app_skeleton_html, CREATE_ATTR, NOTE_ID_ATTR};
use stickynote_core::{
    core_version as core_version_inner, ping as ping_inner, BoardConfig, BoardResult, NoteBoard,
    NoteId,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlTextAreaElement};

const DEFAULT_MOUNT_SELECTOR: &str = "#app";

type Board = NoteBoard<LocalStorageStore, DomView>;
type SharedBoard = Rc<RefCell<Board>>;
type Handler = Closure<dyn FnMut(Event) -> Result<(), JsValue>>;

/// Module start hook: installs diagnostics and mounts on `#app`.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(Level::Info));
    mount(DEFAULT_MOUNT_SELECTOR)
}

/// Mounts a board into the element matched by `selector`.
///
/// Uses the default config (storage key `notes`).
#[wasm_bindgen]
pub fn mount(selector: &str) -> Result<(), JsValue> {
    mount_with_config(selector, BoardConfig::default())
}

/// Mounts a board persisted under `storage_key`.
#[wasm_bindgen(js_name = mountWithStorageKey)]
pub fn mount_with_storage_key(selector: &str, storage_key: &str) -> Result<(), JsValue> {
    mount_with_config(selector, BoardConfig::default().with_storage_key(storage_key))
}

#[wasm_bindgen]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[wasm_bindgen(js_name = coreVersion)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

fn mount_with_config(selector: &str, config: BoardConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;
    let root = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("mount point `{selector}` not found")))?;
    root.set_inner_html(&app_skeleton_html());

    let store = LocalStorageStore::from_window(&window).map_err(to_js_error)?;
    let view = DomView::attach(window, &root, config.messages.placeholder.clone())?;
    let board = NoteBoard::load(config, store, view).map_err(to_js_error)?;
    let notes_container = board.view().notes_container().clone();
    let board: SharedBoard = Rc::new(RefCell::new(board));

    let create_button = root
        .query_selector(&format!("[{CREATE_ATTR}]"))?
        .ok_or_else(|| JsValue::from_str("add button is missing from the skeleton"))?;
    listen(&create_button, "click", on_create(Rc::clone(&board)))?;
    listen(&notes_container, "change", on_change(Rc::clone(&board)))?;
    listen(&notes_container, "dblclick", on_delete(board))?;

    info!("event=board_mount module=web status=ok selector={selector}");
    Ok(())
}

fn on_create(board: SharedBoard) -> Handler {
    Closure::new(move |_event: Event| {
        dispatch(&board, "create", |board| board.create().map(|_| ()))
    })
}

fn on_change(board: SharedBoard) -> Handler {
    Closure::new(move |event: Event| {
        let Some((id, textarea)) = note_target(&event) else {
            return Ok(());
        };
        dispatch(&board, "edit", |board| board.edit(&id, textarea.value()))
    })
}

fn on_delete(board: SharedBoard) -> Handler {
    Closure::new(move |event: Event| {
        let Some((id, _)) = note_target(&event) else {
            return Ok(());
        };
        dispatch(&board, "delete", |board| board.delete(&id).map(|_| ()))
    })
}

/// Registers `handler` for the page lifetime.
fn listen(target: &Element, event_name: &str, handler: Handler) -> Result<(), JsValue> {
    target.add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn dispatch(
    board: &SharedBoard,
    action: &str,
    run: impl FnOnce(&mut Board) -> BoardResult<()>,
) -> Result<(), JsValue> {
    let Ok(mut board) = board.try_borrow_mut() else {
        warn!("event=dom_event module=web status=busy action={action}");
        return Ok(());
    };
    run(&mut board).map_err(|err| {
        error!("event=dom_event module=web status=error action={action} error={err}");
        to_js_error(err)
    })
}

/// Resolves the note textarea an event was fired on.
fn note_target(event: &Event) -> Option<(NoteId, HtmlTextAreaElement)> {
    let textarea = event.target()?.dyn_into::<HtmlTextAreaElement>().ok()?;
    let id = parse_note_id(textarea.get_attribute(NOTE_ID_ATTR))?;
    Some((id, textarea))
}

fn parse_note_id(raw: Option<String>) -> Option<NoteId> {
    raw.as_deref().and_then(NoteId::parse)
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
