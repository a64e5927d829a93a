use fltk::{
    app::Sender,
    dialog,
    enums::Color,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::document;
use super::messages::Message;
use super::settings::{AppSettings, FontFamily, Theme};
use super::styles::{StyleRegistry, StyleTag};
use super::text_ops;
use crate::ui::dialogs::find_replace::show_find_replace_dialog;
use crate::ui::file_dialogs::{native_export_dialog, native_open_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::{apply_theme, palette};
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub toolbar: Flex,
    pub status_bar: Frame,
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub styles: StyleRegistry,
    pub theme: Theme,
    pub settings: AppSettings,
    pub sender: Sender<Message>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, settings: AppSettings) -> Self {
        let styles = StyleRegistry::new(settings.font_family, settings.font_size);
        let theme = settings.theme;

        Self {
            editor: widgets.editor,
            window: widgets.wind,
            menu: widgets.menu,
            toolbar: widgets.toolbar,
            status_bar: widgets.status_bar,
            buffer: widgets.buffer,
            style_buffer: widgets.style_buffer,
            styles,
            theme,
            settings,
            sender,
        }
    }

    /// Apply the persisted preferences to the freshly built widgets. Call
    /// after the window is shown.
    pub fn init(&mut self) {
        self.editor.set_text_font(self.styles.base_font());
        self.editor.set_text_size(self.styles.size());
        self.apply_current_theme();
        self.update_status();
    }

    // --- File operations ---

    pub fn file_open_text(&mut self) {
        if let Some(path) = native_open_dialog("Text Files\t*.txt") {
            match document::load(&path) {
                Ok(content) => {
                    self.buffer.set_text(&content);
                    self.window
                        .set_label(&format!("{} - QuillPad", document::display_name(&path)));
                }
                Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
            }
        }
    }

    /// Hand a PDF path to the operating system's default viewer. The app
    /// never parses PDF content itself; the launch is synchronous, so a slow
    /// viewer start stalls the window.
    pub fn file_open_pdf(&mut self) {
        if let Some(path) = native_open_dialog("PDF Files\t*.pdf") {
            if let Err(e) = open::that(&path) {
                dialog::alert_default(&format!("Failed to open PDF: {}", e));
            }
        }
    }

    /// "Export PDF": writes the buffer's text bytes to the chosen path. The
    /// suggested extension is `.pdf` but no PDF encoding occurs.
    pub fn export_pdf(&mut self) {
        if let Some(path) = native_export_dialog("PDF Files\t*.pdf", "untitled.pdf") {
            let contents = self.buffer.text();
            if let Err(e) = document::export(&path, &contents) {
                dialog::alert_default(&format!("Error exporting file: {}", e));
            }
        }
    }

    pub fn find_replace(&mut self) {
        show_find_replace_dialog(&self.buffer);
    }

    // --- Status bar ---

    pub fn update_status(&mut self) {
        let text = self.buffer.text();
        self.status_bar.set_label(&text_ops::status_line(&text));
    }

    // --- Format ---

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.styles.set_family(family);
        self.editor.set_text_font(self.styles.base_font());
        self.refresh_highlight();
        self.editor.redraw();

        self.settings.font_family = family;
        let _ = self.settings.save();
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.styles.set_size(size);
        self.editor.set_text_size(self.styles.size());
        self.refresh_highlight();
        self.editor.redraw();

        self.settings.font_size = size;
        let _ = self.settings.save();
    }

    pub fn toggle_bold(&mut self) {
        self.styles.toggle_bold();
        self.apply_tag_to_selection(StyleTag::Formatted);
    }

    pub fn toggle_italic(&mut self) {
        self.styles.toggle_italic();
        self.apply_tag_to_selection(StyleTag::Formatted);
    }

    pub fn toggle_underline(&mut self) {
        self.styles.toggle_underline();
        self.apply_tag_to_selection(StyleTag::Formatted);
    }

    pub fn pick_font_color(&mut self) {
        if let Some((r, g, b)) = dialog::color_chooser("Choose Font Color", dialog::ColorMode::Byte)
        {
            self.styles.set_font_color(Color::from_rgb(r, g, b));
            self.apply_tag_to_selection(StyleTag::FontColor);
        }
    }

    pub fn pick_highlight_color(&mut self) {
        if let Some((r, g, b)) =
            dialog::color_chooser("Choose Highlight Color", dialog::ColorMode::Byte)
        {
            self.styles.set_highlight_color(Color::from_rgb(r, g, b));
            self.apply_tag_to_selection(StyleTag::Highlight);
        }
    }

    /// Flag non-alphabetic tokens as misspelled. A syntactic scan, not a
    /// dictionary check; only each token's first occurrence is tagged.
    pub fn spell_check(&mut self) {
        let text = self.buffer.text();
        for (start, end) in text_ops::suspect_token_ranges(&text) {
            let run: String = std::iter::repeat(StyleTag::Misspelled.style_char())
                .take(end - start)
                .collect();
            self.style_buffer.replace(start as i32, end as i32, &run);
        }
        self.refresh_highlight();
    }

    // --- Theme ---

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.settings.theme = self.theme;
        let _ = self.settings.save();
        self.apply_current_theme();
    }

    fn apply_current_theme(&mut self) {
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.toolbar,
            &mut self.status_bar,
            self.theme,
        );
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.theme);

        self.styles.set_foreground(palette(self.theme).editor_fg);
        self.refresh_highlight();
    }

    // --- Styling plumbing ---

    /// Write the tag's style character over the current selection. Without a
    /// selection this is a no-op: buffer content, the style table and every
    /// previously tagged range are left untouched.
    fn apply_tag_to_selection(&mut self, tag: StyleTag) {
        if let Some((start, end)) = self.buffer.selection_position() {
            if start != end {
                let run: String = std::iter::repeat(tag.style_char())
                    .take((end - start) as usize)
                    .collect();
                self.style_buffer.replace(start, end, &run);
                self.refresh_highlight();
            }
        }
    }

    /// Push the re-derived style table and the style buffer to the editor.
    fn refresh_highlight(&mut self) {
        self.editor
            .set_highlight_data_ext(self.style_buffer.clone(), self.styles.entries());
    }
}
