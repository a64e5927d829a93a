use fltk::{app, prelude::*};

use quill_pad::app::messages::Message;
use quill_pad::app::settings::AppSettings;
use quill_pad::app::state::AppState;
use quill_pad::app::styles::PLAIN_STYLE;
use quill_pad::ui::main_window::build_main_window;
use quill_pad::ui::menu::build_menu;

fn main() {
    let settings = AppSettings::load();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender, &settings);
    build_menu(&mut widgets.menu, &sender);

    // Mirror every edit into the style buffer (plain filler on insert,
    // removal on delete) so tag ranges stay anchored, then notify the
    // dispatch loop for the status bar.
    let mut style_buf = widgets.style_buffer.clone();
    let s = sender;
    widgets
        .buffer
        .add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                if inserted > 0 {
                    let filler: String = std::iter::repeat(PLAIN_STYLE)
                        .take(inserted as usize)
                        .collect();
                    style_buf.insert(pos, &filler);
                }
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                s.send(Message::BufferModified);
            }
        });

    widgets.wind.set_callback({
        let s = sender;
        move |_| s.send(Message::FileExit)
    });
    widgets.wind.show();

    let mut state = AppState::new(widgets, sender, settings);
    state.init();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileOpenPdf => state.file_open_pdf(),
                Message::FileOpenText => state.file_open_text(),
                Message::FileExit => app.quit(),
                Message::ShowFindReplace => state.find_replace(),
                Message::SetFontFamily(family) => state.set_font_family(family),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::ToggleBold => state.toggle_bold(),
                Message::ToggleItalic => state.toggle_italic(),
                Message::ToggleUnderline => state.toggle_underline(),
                Message::PickFontColor => state.pick_font_color(),
                Message::PickHighlightColor => state.pick_highlight_color(),
                Message::SpellCheck => state.spell_check(),
                Message::ExportPdf => state.export_pdf(),
                Message::ToggleTheme => state.toggle_theme(),
                Message::BufferModified => state.update_status(),
            }
        }
    }
}
