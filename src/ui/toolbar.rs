use fltk::{
    app::Sender,
    button::{Button, ToggleButton},
    enums::Font,
    frame::Frame,
    group::{Flex, FlexType},
    menu::Choice,
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::settings::{AppSettings, FontFamily};

pub const TOOLBAR_HEIGHT: i32 = 40;

/// Font sizes offered by the toolbar dropdown.
pub const FONT_SIZES: [u32; 9] = [10, 12, 14, 16, 18, 20, 24, 28, 32];

/// Build the toolbar row. Must be called while the main column Flex is the
/// current group; the caller pins the returned row to TOOLBAR_HEIGHT.
pub fn build_toolbar(sender: &Sender<Message>, settings: &AppSettings) -> Flex {
    let mut bar = Flex::new(0, 0, 0, TOOLBAR_HEIGHT, None);
    bar.set_type(FlexType::Row);
    bar.set_margin(4);
    bar.set_pad(6);

    // Font family dropdown
    let mut font_choice = Choice::default();
    for family in FontFamily::ALL {
        font_choice.add_choice(family.label());
    }
    font_choice.set_value(settings.font_family.index());
    font_choice.set_callback({
        let s = *sender;
        move |c| {
            if c.value() >= 0 {
                s.send(Message::SetFontFamily(FontFamily::from_index(c.value())));
            }
        }
    });
    bar.fixed(&font_choice, 120);

    // Font size dropdown
    let mut size_choice = Choice::default();
    for size in FONT_SIZES {
        size_choice.add_choice(&size.to_string());
    }
    let size_index = FONT_SIZES
        .iter()
        .position(|s| *s == settings.font_size)
        .unwrap_or(2);
    size_choice.set_value(size_index as i32);
    size_choice.set_callback({
        let s = *sender;
        move |c| {
            if let Ok(i) = usize::try_from(c.value()) {
                if i < FONT_SIZES.len() {
                    s.send(Message::SetFontSize(FONT_SIZES[i]));
                }
            }
        }
    });
    bar.fixed(&size_choice, 60);

    let mut bold_btn = ToggleButton::default().with_label("B");
    bold_btn.set_label_font(Font::HelveticaBold);
    bold_btn.set_callback({ let s = *sender; move |_| s.send(Message::ToggleBold) });
    bar.fixed(&bold_btn, 32);

    let mut italic_btn = ToggleButton::default().with_label("I");
    italic_btn.set_label_font(Font::HelveticaItalic);
    italic_btn.set_callback({ let s = *sender; move |_| s.send(Message::ToggleItalic) });
    bar.fixed(&italic_btn, 32);

    let mut underline_btn = ToggleButton::default().with_label("U");
    underline_btn.set_callback({ let s = *sender; move |_| s.send(Message::ToggleUnderline) });
    bar.fixed(&underline_btn, 32);

    let mut font_color_btn = Button::default().with_label("A");
    font_color_btn.set_tooltip("Font color");
    font_color_btn.set_callback({ let s = *sender; move |_| s.send(Message::PickFontColor) });
    bar.fixed(&font_color_btn, 32);

    let mut highlight_btn = Button::default().with_label("\u{270e}");
    highlight_btn.set_tooltip("Highlight color");
    highlight_btn.set_callback({ let s = *sender; move |_| s.send(Message::PickHighlightColor) });
    bar.fixed(&highlight_btn, 32);

    let mut spell_btn = Button::default().with_label("Spell Check");
    spell_btn.set_callback({ let s = *sender; move |_| s.send(Message::SpellCheck) });
    bar.fixed(&spell_btn, 100);

    let mut export_btn = Button::default().with_label("Export PDF");
    export_btn.set_callback({ let s = *sender; move |_| s.send(Message::ExportPdf) });
    bar.fixed(&export_btn, 100);

    let mut theme_btn = Button::default().with_label("Toggle Theme");
    theme_btn.set_callback({ let s = *sender; move |_| s.send(Message::ToggleTheme) });
    bar.fixed(&theme_btn, 110);

    // Spacer absorbs the leftover width
    Frame::default();

    bar.end();
    bar
}
