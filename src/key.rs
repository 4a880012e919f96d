//! Key bindings and key-press dispatch.
//!
//! A [`Binding`] groups the key codes that trigger one action, together
//! with the help text shown for it. [`key_press_helper`] runs an action
//! only when an observed key press matches a target key.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A set of keys bound to a single action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that trigger this binding.
    pub keys: Vec<KeyCode>,
    /// Short key label for help views, e.g. `"←/h"`.
    pub help: String,
    /// What the binding does, e.g. `"prev page"`.
    pub description: String,
}

impl Binding {
    /// Creates a binding for the given keys with no help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Returns true if the key press carries one of this binding's keys.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys.contains(&key_msg.key)
    }
}

/// Runs `execution` if the pressed key equals `key`.
///
/// Returns whether the action ran.
///
/// ```rust
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
/// use listview_widgets::key::key_press_helper;
///
/// let press = KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE };
/// let mut searched = false;
/// assert!(key_press_helper(&press, KeyCode::Enter, || searched = true));
/// assert!(searched);
/// assert!(!key_press_helper(&press, KeyCode::Esc, || {}));
/// ```
pub fn key_press_helper<F: FnOnce()>(key_msg: &KeyMsg, key: KeyCode, execution: F) -> bool {
    if key_msg.key == key {
        execution();
        true
    } else {
        false
    }
}

/// Key bindings of the list view controller.
#[derive(Debug, Clone)]
pub struct ListViewKeyMap {
    /// Go to the previous page.
    pub prev_page: Binding,
    /// Go to the next page.
    pub next_page: Binding,
    /// Re-run filtering with the current search text.
    pub submit_search: Binding,
}

impl Default for ListViewKeyMap {
    fn default() -> Self {
        Self {
            prev_page: Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: Binding::new(vec![KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next page"),
            submit_search: Binding::new(vec![KeyCode::Enter]).with_help("enter", "search"),
        }
    }
}

impl ListViewKeyMap {
    /// Bindings in the order they are listed in help views.
    pub fn bindings(&self) -> Vec<&Binding> {
        vec![&self.prev_page, &self.next_page, &self.submit_search]
    }

    /// Finds the first binding that matches the key press.
    pub fn find_binding(&self, key_msg: &KeyMsg) -> Option<&Binding> {
        self.bindings().into_iter().find(|b| b.matches(key_msg))
    }
}
