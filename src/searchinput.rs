//! Single-line search box.
//!
//! A trimmed-down text input: a value edited at a character cursor, a prompt
//! and a placeholder. Keys are only handled while the input is focused, so
//! the owning view can route every key through [`Model::update`] and fall
//! back to its own bindings when it returns false.

use crate::key::{self, new_binding, with_keys_str, Binding};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Editing bindings of the search box.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor one character right.
    pub character_forward: Binding,
    /// Move the cursor one character left.
    pub character_backward: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Delete everything before the cursor.
    pub delete_before_cursor: Binding,
    /// Jump to the start.
    pub line_start: Binding,
    /// Jump to the end.
    pub line_end: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
            character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
            delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
            delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
            delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
            line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
            line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        }
    }
}

/// Search box state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Shown before the value.
    pub prompt: String,
    /// Shown while the value is empty.
    pub placeholder: String,
    /// Prompt style.
    pub prompt_style: Style,
    /// Value style.
    pub text_style: Style,
    /// Placeholder style.
    pub placeholder_style: Style,
    /// Style of the character under the cursor.
    pub cursor_style: Style,
    /// Editing bindings.
    pub key_map: KeyMap,
    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates an empty, blurred search box with the prompt `"/ "`.
pub fn new() -> Model {
    Model {
        prompt: "/ ".to_string(),
        placeholder: "search…".to_string(),
        prompt_style: Style::new().foreground(AdaptiveColor {
            Light: "#04B575",
            Dark: "#ECFD65",
        }),
        text_style: Style::new(),
        placeholder_style: Style::new().foreground(AdaptiveColor {
            Light: "#A49FA5",
            Dark: "#777777",
        }),
        cursor_style: Style::new().reverse(true),
        key_map: KeyMap::default(),
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value and moves the cursor to its end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.pos = self.value.len();
    }

    /// Empties the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether keys are handled.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Starts handling keys.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Stops handling keys.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    fn insert(&mut self, c: char) {
        self.value.insert(self.pos, c);
        self.pos += 1;
    }

    /// Handles an editing key. Returns true when the value changed.
    ///
    /// Keys that are not editing keys, and every key while blurred, are
    /// left to the caller.
    pub fn update(&mut self, msg: &KeyMsg) -> bool {
        if !self.focus {
            return false;
        }

        let km = &self.key_map;
        if km.delete_character_backward.matches(msg) {
            if self.pos > 0 {
                self.pos -= 1;
                self.value.remove(self.pos);
                return true;
            }
            return false;
        }
        if km.delete_character_forward.matches(msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
                return true;
            }
            return false;
        }
        if km.delete_before_cursor.matches(msg) {
            let changed = self.pos > 0;
            self.value.drain(..self.pos);
            self.pos = 0;
            return changed;
        }
        if km.character_backward.matches(msg) {
            self.pos = self.pos.saturating_sub(1);
            return false;
        }
        if km.character_forward.matches(msg) {
            self.pos = (self.pos + 1).min(self.value.len());
            return false;
        }
        if key::matches(msg, &[&km.line_start]) {
            self.pos = 0;
            return false;
        }
        if key::matches(msg, &[&km.line_end]) {
            self.pos = self.value.len();
            return false;
        }

        if let KeyCode::Char(c) = msg.key {
            let significant = KeyModifiers::CONTROL | KeyModifiers::ALT;
            if !msg.modifiers.intersects(significant) && !c.is_control() {
                self.insert(c);
                return true;
            }
        }
        false
    }

    /// Renders prompt, value and, while focused, the cursor.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() {
            let placeholder = self.placeholder_style.render(&self.placeholder);
            if self.focus {
                return format!("{}{}{}", prompt, self.cursor_style.render(" "), placeholder);
            }
            return format!("{}{}", prompt, placeholder);
        }

        if !self.focus {
            return format!("{}{}", prompt, self.text_style.render(&self.value()));
        }

        let before: String = self.value[..self.pos].iter().collect();
        let (under, after) = match self.value.get(self.pos) {
            Some(c) => (c.to_string(), self.value[self.pos + 1..].iter().collect()),
            None => (" ".to_string(), String::new()),
        };
        format!(
            "{}{}{}{}",
            prompt,
            self.text_style.render(&before),
            self.cursor_style.render(&under),
            self.text_style.render(&after)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn ctrl(c: char) -> KeyMsg {
        KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    fn typed(text: &str) -> Model {
        let mut input = new();
        input.focus();
        for c in text.chars() {
            input.update(&key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn test_blurred_input_ignores_keys() {
        let mut input = new();
        assert!(!input.update(&key(KeyCode::Char('a'))));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = typed("awin");
        assert_eq!(input.value(), "awin");
        assert!(input.update(&key(KeyCode::Backspace)));
        assert_eq!(input.value(), "awi");
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = typed("ana");
        input.update(&key(KeyCode::Left));
        input.update(&key(KeyCode::Char('n')));
        assert_eq!(input.value(), "anna");
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn test_home_end_delete() {
        let mut input = typed("xbudi");
        input.update(&key(KeyCode::Home));
        assert!(input.update(&key(KeyCode::Delete)));
        assert_eq!(input.value(), "budi");
        input.update(&ctrl('e'));
        assert_eq!(input.position(), 4);
        assert!(!input.update(&key(KeyCode::Delete)));
    }

    #[test]
    fn test_ctrl_u_clears_before_cursor() {
        let mut input = typed("hello world");
        for _ in 0..5 {
            input.update(&key(KeyCode::Left));
        }
        assert!(input.update(&ctrl('u')));
        assert_eq!(input.value(), "world");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_ctrl_chars_are_not_inserted() {
        let mut input = typed("a");
        assert!(!input.update(&ctrl('x')));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("café");
        input.update(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "caf");
    }

    #[test]
    fn test_view_shows_value_or_placeholder() {
        let input = new();
        assert!(lipgloss::strip_ansi(&input.view()).ends_with("search…"));
        let input = typed("rina");
        assert!(lipgloss::strip_ansi(&input.view()).contains("rina"));
    }
}
