//! Hot-zone window chrome for the borderless window
//!
//! A borderless window has no native title bar, so the shell provides two
//! affordances itself: the top 20px strip starts an OS drag-move sequence,
//! and the top-right 20x20px corner closes the application. Hit testing is
//! pure and lives here; the OS calls sit behind [`WindowControl`] so the
//! logic stays platform-independent and testable.

use crate::window::MouseButton;
use std::sync::Arc;
use winit::window::Window as WinitWindow;

/// Edge length of both hot zones, in physical pixels.
///
/// Fixed regardless of DPI scale, matching the window title strip the demo
/// GUI draws at the top of the window.
pub const CHROME_ZONE_PX: f64 = 20.0;

/// OS-level window actions triggered by the chrome.
pub trait WindowControl {
    /// Hand mouse tracking to the window manager so the user can drag the
    /// window. Fire-and-forget: backends without interactive-move support
    /// make this a no-op.
    fn begin_drag(&self);

    /// Close the application immediately.
    fn close(&self);
}

/// Stateless hit-test handler for the chrome hot zones.
///
/// Only the current window width is retained; zone geometry is derived from
/// it on every mouse event.
pub struct ChromeHandler {
    width: u32,
}

impl ChromeHandler {
    /// Create a new chrome handler for a window of the given width
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// Update the width after a window resize
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Handle a mouse-button-down event at window-local position (x, y).
    ///
    /// The two zones are tested independently: a press in the overlapping
    /// top-right corner both starts a drag and closes the window. Close is
    /// immediate, so the drag is unobservable there; that mirrors the zones
    /// overlapping by construction and is intended.
    pub fn on_mouse_down(&self, button: MouseButton, x: f64, y: f64, control: &dyn WindowControl) {
        if button != MouseButton::Left {
            return;
        }

        if y <= CHROME_ZONE_PX {
            log::debug!("chrome: drag strip pressed at ({x:.0}, {y:.0})");
            control.begin_drag();
        }

        if x >= self.width as f64 - CHROME_ZONE_PX && y <= CHROME_ZONE_PX {
            log::debug!("chrome: close corner pressed at ({x:.0}, {y:.0})");
            control.close();
        }
    }
}

/// Winit-backed [`WindowControl`] implementation.
pub struct WinitWindowControl {
    window: Arc<WinitWindow>,
}

impl WinitWindowControl {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { window }
    }
}

impl WindowControl for WinitWindowControl {
    fn begin_drag(&self) {
        // Not supported on every backend; the chrome does not care.
        let _ = self.window.drag_window();
    }

    fn close(&self) {
        std::process::exit(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    /// Records calls instead of touching the OS.
    #[derive(Default)]
    struct RecordingControl {
        drags: Cell<u32>,
        closes: Cell<u32>,
    }

    impl WindowControl for RecordingControl {
        fn begin_drag(&self) {
            self.drags.set(self.drags.get() + 1);
        }

        fn close(&self) {
            self.closes.set(self.closes.get() + 1);
        }
    }

    fn press(width: u32, button: MouseButton, x: f64, y: f64) -> (u32, u32) {
        let handler = ChromeHandler::new(width);
        let control = RecordingControl::default();
        handler.on_mouse_down(button, x, y, &control);
        (control.drags.get(), control.closes.get())
    }

    #[test]
    fn test_drag_strip_only() {
        assert_eq!(press(750, MouseButton::Left, 10.0, 5.0), (1, 0));
    }

    #[test]
    fn test_close_corner_fires_both() {
        // Overlap region: the drag request is issued, then close wins.
        assert_eq!(press(750, MouseButton::Left, 740.0, 5.0), (1, 1));
    }

    #[test]
    fn test_body_click_is_ignored() {
        assert_eq!(press(750, MouseButton::Left, 400.0, 100.0), (0, 0));
    }

    #[test]
    fn test_x_at_width_still_closes() {
        assert_eq!(press(750, MouseButton::Left, 750.0, 0.0), (1, 1));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        // y == 20 is inside the strip
        assert_eq!(press(750, MouseButton::Left, 100.0, 20.0), (1, 0));
        // y just below is outside
        assert_eq!(press(750, MouseButton::Left, 100.0, 20.5), (0, 0));
        // x == width - 20 is inside the close zone
        assert_eq!(press(750, MouseButton::Left, 730.0, 20.0), (1, 1));
        // x just left of it drags only
        assert_eq!(press(750, MouseButton::Left, 729.5, 20.0), (1, 0));
    }

    #[test]
    fn test_non_left_buttons_are_ignored() {
        assert_eq!(press(750, MouseButton::Right, 740.0, 5.0), (0, 0));
        assert_eq!(press(750, MouseButton::Middle, 10.0, 5.0), (0, 0));
    }

    #[test]
    fn test_width_update_moves_close_zone() {
        let mut handler = ChromeHandler::new(750);
        handler.set_width(400);

        let control = RecordingControl::default();
        handler.on_mouse_down(MouseButton::Left, 390.0, 5.0, &control);
        assert_eq!((control.drags.get(), control.closes.get()), (1, 1));
    }

    proptest! {
        #[test]
        fn prop_strip_always_drags(x in 0.0..2000.0f64, y in 0.0..=20.0f64) {
            let (drags, _) = press(750, MouseButton::Left, x, y);
            prop_assert_eq!(drags, 1);
        }

        #[test]
        fn prop_below_strip_never_acts(x in 0.0..2000.0f64, y in 20.001..2000.0f64) {
            prop_assert_eq!(press(750, MouseButton::Left, x, y), (0, 0));
        }

        #[test]
        fn prop_close_zone_always_closes(dx in 0.0..=20.0f64, y in 0.0..=20.0f64) {
            let (drags, closes) = press(750, MouseButton::Left, 730.0 + dx, y);
            prop_assert_eq!((drags, closes), (1, 1));
        }

        #[test]
        fn prop_left_of_close_zone_never_closes(x in 0.0..730.0f64, y in 0.0..2000.0f64) {
            let (_, closes) = press(750, MouseButton::Left, x, y);
            prop_assert_eq!(closes, 0);
        }
    }
}
