//! Markup shared by the browser view and static exports.
//!
//! # Invariants
//! - Every user-provided string is escaped before it lands in markup.
//! - Class names and data attributes here are the only selectors views use.

use crate::config::BoardMessages;
use crate::model::note::Note;

pub const APP_CONTAINER_CLASS: &str = "app-container";
pub const NOTES_CLASS: &str = "notes";
pub const TITLE_CLASS: &str = "title";
pub const MAIN_CLASS: &str = "main";
pub const ITEM_CLASS: &str = "item";
pub const ADD_ITEM_CLASS: &str = "item--add";

/// Marks the container holding every note item.
pub const NOTES_ATTR: &str = "data-notes";
/// Marks the add button.
pub const CREATE_ATTR: &str = "data-create";
/// Carries the note id on each textarea.
pub const NOTE_ID_ATTR: &str = "data-id";

const TITLE: &str = "Notes";
const ADD_LABEL: &str = "Add new note";
const PLUS_ICON: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><line x1='12' y1='5' x2='12' y2='19'></line><line x1='5' y1='12' x2='19' y2='12'></line></svg>";

/// Renders the mount skeleton: title, notes container and add affordance.
///
/// Note items are inserted before the add item by the view.
pub fn app_skeleton_html() -> String {
    board_html_with_items("")
}

/// Renders a full static snapshot of `notes` inside the skeleton.
pub fn render_board_html(notes: &[Note], messages: &BoardMessages) -> String {
    let mut items = String::new();
    for note in notes {
        items.push_str(&note_item_html(note, messages.placeholder.as_str()));
    }
    board_html_with_items(&items)
}

/// Renders one note item.
pub fn note_item_html(note: &Note, placeholder: &str) -> String {
    format!(
        "<div class='{ITEM_CLASS}'><textarea {NOTE_ID_ATTR}='{}' placeholder='{}'>{}</textarea></div>",
        escape_html(note.id.as_str()),
        escape_html(placeholder),
        escape_html(note.text.as_str()),
    )
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn board_html_with_items(items: &str) -> String {
    format!(
        "<div class='{APP_CONTAINER_CLASS}'>\
<div class='{NOTES_CLASS}'>\
<h2 class='{TITLE_CLASS}'>{TITLE}</h2>\
<div class='{MAIN_CLASS}' {NOTES_ATTR}=''>\
{items}\
<div class='{ITEM_CLASS} {ADD_ITEM_CLASS}'>\
<button {CREATE_ATTR}=''>{PLUS_ICON}</button>\
<p>{ADD_LABEL}</p>\
</div>\
</div>\
</div>\
</div>"
    )
}
