//! Key and mouse button codes

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Any other button by index
    Other(u16),
}

/// Key codes
///
/// Letters are reported upper-case regardless of shift state; printable
/// keys without a named variant arrive as [`Key::Char`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Digits
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Arrows
    Up,
    Down,
    Left,
    Right,

    Return,
    Escape,
    Space,
    Tab,
    Backspace,

    Char(char),
    Unknown,
}

const LETTERS: [Key; 26] = [
    Key::A,
    Key::B,
    Key::C,
    Key::D,
    Key::E,
    Key::F,
    Key::G,
    Key::H,
    Key::I,
    Key::J,
    Key::K,
    Key::L,
    Key::M,
    Key::N,
    Key::O,
    Key::P,
    Key::Q,
    Key::R,
    Key::S,
    Key::T,
    Key::U,
    Key::V,
    Key::W,
    Key::X,
    Key::Y,
    Key::Z,
];

const DIGITS: [Key; 10] = [
    Key::Num0,
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

impl Key {
    /// Map a printable character to its key
    pub fn from_char(ch: char) -> Self {
        let upper = ch.to_ascii_uppercase();
        match upper {
            'A'..='Z' => LETTERS[(upper as u8 - b'A') as usize],
            '0'..='9' => DIGITS[(upper as u8 - b'0') as usize],
            ' ' => Key::Space,
            '\t' => Key::Tab,
            '\r' | '\n' => Key::Return,
            _ => Key::Char(ch),
        }
    }

    /// The character a printable key types; letters are upper-case
    pub fn to_char(&self) -> Option<char> {
        if let Some(i) = LETTERS.iter().position(|k| k == self) {
            return Some((b'A' + i as u8) as char);
        }
        if let Some(i) = DIGITS.iter().position(|k| k == self) {
            return Some((b'0' + i as u8) as char);
        }
        match self {
            Key::Space => Some(' '),
            Key::Char(ch) => Some(*ch),
            _ => None,
        }
    }

    /// True for the four arrow keys
    pub fn is_arrow(&self) -> bool {
        matches!(self, Key::Up | Key::Down | Key::Left | Key::Right)
    }
}
