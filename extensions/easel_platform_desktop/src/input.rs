//! Desktop input conversion (winit -> easel_platform)

use easel_platform::{Key, MouseButton};
use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::{Key as WinitKey, NamedKey};

/// Convert winit mouse button to easel MouseButton
pub fn convert_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(n) => MouseButton::Other(n),
    }
}

/// Convert winit logical key to easel Key
pub fn convert_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => match named {
            NamedKey::ArrowUp => Key::Up,
            NamedKey::ArrowDown => Key::Down,
            NamedKey::ArrowLeft => Key::Left,
            NamedKey::ArrowRight => Key::Right,
            NamedKey::Enter => Key::Return,
            NamedKey::Escape => Key::Escape,
            NamedKey::Space => Key::Space,
            NamedKey::Tab => Key::Tab,
            NamedKey::Backspace => Key::Backspace,
            _ => Key::Unknown,
        },
        WinitKey::Character(c) => c.chars().next().map_or(Key::Unknown, Key::from_char),
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(convert_key(&WinitKey::Named(NamedKey::ArrowUp)), Key::Up);
        assert_eq!(convert_key(&WinitKey::Named(NamedKey::Enter)), Key::Return);
        assert_eq!(convert_key(&WinitKey::Named(NamedKey::F1)), Key::Unknown);
    }

    #[test]
    fn test_character_keys() {
        assert_eq!(convert_key(&WinitKey::Character("a".into())), Key::A);
        assert_eq!(convert_key(&WinitKey::Character("7".into())), Key::Num7);
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(convert_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(
            convert_mouse_button(WinitMouseButton::Other(9)),
            MouseButton::Other(9)
        );
    }
}
