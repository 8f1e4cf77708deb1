//! Generic input event types fed to the editor.

/// Key representation for editor shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key (abandons a drag in progress)
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Maps a key name from a script or keyboard layer to a key.
    ///
    /// Single characters become [`Key::Char`]; `Escape`/`Esc` are recognized
    /// case-insensitively; everything else is [`Key::Unknown`].
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ if name.eq_ignore_ascii_case("escape") || name.eq_ignore_ascii_case("esc") => {
                Key::Escape
            }
            _ => Key::Unknown,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary editing button)
    Left,
    /// Right mouse button (cancels a drag)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
