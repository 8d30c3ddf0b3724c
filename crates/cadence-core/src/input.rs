#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

impl Modifiers {
    /// True while any of shift, platform-meta, alt, or control is active.
    pub fn any_held(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Down/up are the raw transitions; press is the character-producing event
/// the platform synthesizes between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
    Press,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
    Shift,
    Control,
    Alt,
    Meta,
    F(u8), // F1-F12
    /// Anything else, carried as its legacy numeric key code.
    Other(u32),
}

impl Key {
    /// Legacy numeric key code, where one exists for this key.
    pub fn legacy_code(&self) -> Option<u32> {
        match self {
            Key::Backspace => Some(8),
            Key::Tab => Some(9),
            Key::Enter => Some(13),
            Key::Shift => Some(16),
            Key::Control => Some(17),
            Key::Alt => Some(18),
            Key::Escape => Some(27),
            Key::Space => Some(32),
            Key::PageUp => Some(33),
            Key::PageDown => Some(34),
            Key::End => Some(35),
            Key::Home => Some(36),
            Key::ArrowLeft => Some(37),
            Key::ArrowUp => Some(38),
            Key::ArrowRight => Some(39),
            Key::ArrowDown => Some(40),
            Key::Delete => Some(46),
            Key::Meta => Some(91),
            Key::F(n) if (1..=12).contains(n) => Some(111 + u32::from(*n)),
            Key::Character(c) if c.is_ascii_digit() => Some(u32::from(*c)),
            Key::Character(c) if c.is_ascii_alphabetic() => {
                Some(u32::from(c.to_ascii_uppercase()))
            }
            Key::Other(code) => Some(*code),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub phase: KeyPhase,
    pub modifiers: Modifiers,
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn down(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            phase: KeyPhase::Down,
            modifiers,
            is_repeat: false,
        }
    }

    pub fn up(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            phase: KeyPhase::Up,
            modifiers,
            is_repeat: false,
        }
    }

    pub fn press(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            phase: KeyPhase::Press,
            modifiers,
            is_repeat: false,
        }
    }

    pub fn legacy_code(&self) -> Option<u32> {
        self.key.legacy_code()
    }

    /// The escape key, identified by its legacy code.
    pub fn is_escape(&self) -> bool {
        self.legacy_code() == Some(27)
    }
}
