use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Open PDF...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpenPdf) });
    menu.add("File/Open Text File...", Shortcut::Ctrl | 'o', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileOpenText) });
    menu.add("File/Exit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileExit) });

    // Edit
    menu.add("Edit/Find and Replace...", Shortcut::Ctrl | 'h', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFindReplace) });
}
