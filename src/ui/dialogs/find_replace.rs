use fltk::{
    button::Button,
    frame::Frame,
    input::Input,
    prelude::*,
    text::TextBuffer,
    window::Window,
};

use super::run_dialog;
use crate::app::text_ops::replace_all;

/// Show the Find & Replace dialog. Blocks until closed.
///
/// When both fields are non-empty, every literal occurrence of the search
/// string is replaced and the whole buffer rewritten. Case-sensitive only,
/// no regex, no scoped replace; no replacement count is reported. Closing
/// the dialog or leaving a field empty is a no-op.
pub fn show_find_replace_dialog(buffer: &TextBuffer) {
    let mut dialog_win = Window::default()
        .with_size(400, 150)
        .with_label("Find & Replace")
        .center_screen();

    Frame::default().with_pos(20, 20).with_size(90, 30).with_label("Find what:");
    let find_input = Input::default().with_pos(120, 20).with_size(260, 30);

    Frame::default().with_pos(20, 60).with_size(90, 30).with_label("Replace with:");
    let replace_input = Input::default().with_pos(120, 60).with_size(260, 30);

    let mut replace_all_btn = Button::default()
        .with_pos(180, 105).with_size(100, 30).with_label("Replace All");
    let mut close_btn = Button::default()
        .with_pos(290, 105).with_size(90, 30).with_label("Close");

    dialog_win.end();
    dialog_win.make_resizable(false);
    dialog_win.show();

    let mut text_buf = buffer.clone();
    let dialog_done = dialog_win.clone();

    replace_all_btn.set_callback(move |_| {
        let query = find_input.value();
        let replacement = replace_input.value();
        if query.is_empty() || replacement.is_empty() {
            return;
        }

        let text = text_buf.text();
        text_buf.set_text(&replace_all(&text, &query, &replacement));
        dialog_done.clone().hide();
    });

    let dialog_close = dialog_win.clone();
    close_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    let dialog_x = dialog_win.clone();
    dialog_win.set_callback(move |_| {
        dialog_x.clone().hide();
    });

    run_dialog(&dialog_win);
}
