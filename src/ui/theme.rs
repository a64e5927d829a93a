use fltk::{
    enums::Color,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::settings::Theme;

/// Fixed colors for one theme, covering window chrome, the text surface and
/// the status bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window_bg: Color,
    pub window_fg: Color,
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub cursor: Color,
    pub selection: Color,
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_hover: Color,
    pub status_bg: Color,
    pub status_fg: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            window_bg: Color::from_rgb(244, 247, 251),
            window_fg: Color::from_rgb(51, 51, 51),
            editor_bg: Color::White,
            editor_fg: Color::from_rgb(51, 51, 51),
            cursor: Color::Black,
            selection: Color::from_rgb(173, 216, 230),
            menu_bg: Color::from_rgb(244, 247, 251),
            menu_fg: Color::from_rgb(51, 51, 51),
            menu_hover: Color::from_rgb(200, 200, 200),
            status_bg: Color::from_rgb(244, 247, 251),
            status_fg: Color::from_rgb(51, 51, 51),
        },
        Theme::Dark => Palette {
            window_bg: Color::from_rgb(46, 46, 46),
            window_fg: Color::White,
            editor_bg: Color::from_rgb(51, 51, 51),
            editor_fg: Color::White,
            cursor: Color::White,
            selection: Color::from_rgb(70, 70, 100),
            menu_bg: Color::from_rgb(68, 68, 68),
            menu_fg: Color::White,
            menu_hover: Color::from_rgb(96, 96, 96),
            status_bg: Color::from_rgb(46, 46, 46),
            status_fg: Color::White,
        },
    }
}

/// Recolor every palette-dependent widget. Idempotent: reapplying the
/// current theme leaves all colors as they are.
pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    menu: &mut MenuBar,
    toolbar: &mut Flex,
    status_bar: &mut Frame,
    theme: Theme,
) {
    let p = palette(theme);

    editor.set_color(p.editor_bg);
    editor.set_text_color(p.editor_fg);
    editor.set_cursor_color(p.cursor);
    editor.set_selection_color(p.selection);

    window.set_color(p.window_bg);
    window.set_label_color(p.window_fg);

    menu.set_color(p.menu_bg);
    menu.set_text_color(p.menu_fg);
    menu.set_selection_color(p.menu_hover); // Hover color

    toolbar.set_color(p.window_bg);

    status_bar.set_color(p.status_bg);
    status_bar.set_label_color(p.status_fg);

    editor.redraw();
    window.redraw();
    menu.redraw();
    toolbar.redraw();
    status_bar.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, theme: Theme) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if theme == Theme::Dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(palette(Theme::Light), palette(Theme::Dark));
    }

    #[test]
    fn test_palette_is_pure() {
        assert_eq!(palette(Theme::Dark), palette(Theme::Dark));
    }

    #[test]
    fn test_toggle_twice_restores_palette() {
        let original = palette(Theme::Light);
        assert_eq!(palette(Theme::Light.toggled().toggled()), original);
    }
}
