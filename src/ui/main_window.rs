use fltk::{
    app::Sender,
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::toolbar::{build_toolbar, TOOLBAR_HEIGHT};
use crate::app::messages::Message;
use crate::app::settings::AppSettings;

pub const STATUS_BAR_HEIGHT: i32 = 26;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub toolbar: Flex,
    pub editor: TextEditor,
    pub status_bar: Frame,
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
}

pub fn build_main_window(sender: &Sender<Message>, settings: &AppSettings) -> MainWidgets {
    let mut wind = Window::new(100, 100, 900, 600, "QuillPad");
    wind.set_xclass("QuillPad");

    let mut flex = Flex::new(0, 0, 900, 600, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let toolbar = build_toolbar(sender, settings);
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    let buffer = TextBuffer::default();
    let style_buffer = TextBuffer::default();
    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    editor.set_buffer(buffer.clone());
    editor.wrap_mode(WrapMode::AtBounds, 0);

    let mut status_bar = Frame::default().with_label("Words: 0 | Characters: 0");
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_align(Align::Inside | Align::Right);
    flex.fixed(&status_bar, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        toolbar,
        editor,
        status_bar,
        buffer,
        style_buffer,
    }
}
