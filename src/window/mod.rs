//! Window management module for paneless
//!
//! This module owns window creation and the event loop, and implements the
//! two pieces of chrome a borderless window lacks: drag-to-move via the top
//! strip and click-to-close via the top-right hot corner.

pub mod chrome;
pub mod host;

pub use host::RenderHost;

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Convert a winit mouse button to a paneless mouse button
pub(crate) fn convert_mouse_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_conversion() {
        use winit::event::MouseButton as Winit;

        assert_eq!(convert_mouse_button(Winit::Left), Some(MouseButton::Left));
        assert_eq!(convert_mouse_button(Winit::Right), Some(MouseButton::Right));
        assert_eq!(convert_mouse_button(Winit::Middle), Some(MouseButton::Middle));
        assert_eq!(convert_mouse_button(Winit::Other(4)), None);
    }
}
