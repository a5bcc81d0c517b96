use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

/// A key binding from the config, such as `space` or `ctrl+q`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Shortcut {
    key: String,
    ctrl: bool,
    alt: bool,
    logo: bool,
    shift: bool,
}

impl Shortcut {
    /// Blank bindings and bindings naming only modifiers use `fallback` as
    /// the key.
    fn parse(raw: &str, fallback: &str) -> Self {
        let mut shortcut = Shortcut::default();
        for token in raw
            .split('+')
            .map(|token| token.trim().to_ascii_lowercase())
            .filter(|token| !token.is_empty())
        {
            match token.as_str() {
                "ctrl" | "control" => shortcut.ctrl = true,
                "alt" | "option" => shortcut.alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => shortcut.logo = true,
                "shift" => shortcut.shift = true,
                key => shortcut.key = key_alias(key).to_string(),
            }
        }
        if shortcut.key.is_empty() {
            shortcut.key = fallback.to_string();
        }
        shortcut
    }

    /// Exact match: extra held modifiers reject the binding.
    fn matches(&self, pressed: &str, modifiers: Modifiers) -> bool {
        pressed == self.key
            && modifiers.control() == self.ctrl
            && modifiers.alt() == self.alt
            && modifiers.logo() == self.logo
            && modifiers.shift() == self.shift
    }
}

fn key_alias(key: &str) -> &str {
    match key {
        "plus" | "equal" | "equals" => "=",
        "minus" | "dash" => "-",
        "spacebar" => "space",
        other => other,
    }
}

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        let bindings = [
            (&self.config.key_toggle_scroll, "space", Message::ToggleScrolling),
            (&self.config.key_zoom_in, "=", Message::ZoomIn),
            (&self.config.key_zoom_out, "-", Message::ZoomOut),
            (&self.config.key_safe_quit, "q", Message::SafeQuit),
        ];
        bindings
            .into_iter()
            .find(|(raw, fallback, _)| Shortcut::parse(raw, fallback).matches(&pressed, modifiers))
            .map(|(_, _, message)| message)
    }
}
