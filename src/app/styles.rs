use fltk::enums::{Color, Font};
use fltk::text::{StyleTableEntryExt, TextAttr};

use super::settings::FontFamily;

/// Style character for untagged text. The style buffer mirrors the document
/// buffer byte for byte; edits insert this as filler so tag ranges stay
/// anchored.
pub const PLAIN_STYLE: char = 'A';

/// Named tags applicable over a selection. Each maps to one style character
/// in the style buffer and one entry in the style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    /// Bold/italic/underline combination from the toolbar toggles.
    Formatted,
    /// Last-picked font color.
    FontColor,
    /// Last-picked highlight (background) color.
    Highlight,
    /// Spell-scan marker: red and underlined.
    Misspelled,
}

impl StyleTag {
    pub fn style_char(self) -> char {
        match self {
            StyleTag::Formatted => 'B',
            StyleTag::FontColor => 'C',
            StyleTag::Highlight => 'D',
            StyleTag::Misspelled => 'E',
        }
    }
}

/// Session styling state and the style table derived from it.
///
/// The table is re-derived in full on every refresh; reapplying a tag
/// overwrites its previous rendering attributes rather than merging them.
pub struct StyleRegistry {
    family: FontFamily,
    size: i32,
    bold: bool,
    italic: bool,
    underline: bool,
    font_color: Color,
    highlight_color: Color,
    foreground: Color,
}

impl StyleRegistry {
    pub fn new(family: FontFamily, size: u32) -> Self {
        Self {
            family,
            size: size as i32,
            bold: false,
            italic: false,
            underline: false,
            font_color: Color::Foreground,
            highlight_color: Color::Yellow,
            foreground: Color::Foreground,
        }
    }

    pub fn set_family(&mut self, family: FontFamily) {
        self.family = family;
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size as i32;
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
    }

    pub fn toggle_underline(&mut self) {
        self.underline = !self.underline;
    }

    pub fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    /// Text color untagged spans render with; follows the theme.
    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    /// The editor's base font: the current family's regular face.
    pub fn base_font(&self) -> Font {
        face(self.family, false, false)
    }

    /// Font for the Formatted tag, honoring the bold/italic toggles.
    pub fn formatted_font(&self) -> Font {
        face(self.family, self.bold, self.italic)
    }

    /// Style table indexed by style character ('A' + index).
    pub fn entries(&self) -> Vec<StyleTableEntryExt> {
        let plain = self.base_font();
        vec![
            // 'A' plain
            StyleTableEntryExt {
                color: self.foreground,
                font: plain,
                size: self.size,
                attr: TextAttr::None,
                bgcolor: Color::Background2,
            },
            // 'B' Formatted
            StyleTableEntryExt {
                color: self.foreground,
                font: self.formatted_font(),
                size: self.size,
                attr: if self.underline {
                    TextAttr::Underline
                } else {
                    TextAttr::None
                },
                bgcolor: Color::Background2,
            },
            // 'C' FontColor
            StyleTableEntryExt {
                color: self.font_color,
                font: plain,
                size: self.size,
                attr: TextAttr::None,
                bgcolor: Color::Background2,
            },
            // 'D' Highlight
            StyleTableEntryExt {
                color: self.foreground,
                font: plain,
                size: self.size,
                attr: TextAttr::BgColor,
                bgcolor: self.highlight_color,
            },
            // 'E' Misspelled
            StyleTableEntryExt {
                color: Color::Red,
                font: plain,
                size: self.size,
                attr: TextAttr::Underline,
                bgcolor: Color::Background2,
            },
        ]
    }
}

/// Map a toolbar family plus bold/italic flags to an FLTK face. FLTK's
/// portable font set has no distinct Arial or Verdana faces: Arial shares
/// the Helvetica faces (which FLTK renders as Arial on Windows anyway) and
/// Verdana uses the Screen faces, which carry no italic variant.
fn face(family: FontFamily, bold: bool, italic: bool) -> Font {
    match family {
        FontFamily::Helvetica | FontFamily::Arial => match (bold, italic) {
            (false, false) => Font::Helvetica,
            (true, false) => Font::HelveticaBold,
            (false, true) => Font::HelveticaItalic,
            (true, true) => Font::HelveticaBoldItalic,
        },
        FontFamily::Verdana => {
            if bold {
                Font::ScreenBold
            } else {
                Font::Screen
            }
        }
        FontFamily::CourierNew => match (bold, italic) {
            (false, false) => Font::Courier,
            (true, false) => Font::CourierBold,
            (false, true) => Font::CourierItalic,
            (true, true) => Font::CourierBoldItalic,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StyleRegistry {
        StyleRegistry::new(FontFamily::Helvetica, 14)
    }

    #[test]
    fn test_one_entry_per_style_char() {
        let entries = registry().entries();
        assert_eq!(entries.len(), 5);
        // 'E' (Misspelled) is the last entry
        let idx = StyleTag::Misspelled.style_char() as usize - PLAIN_STYLE as usize;
        assert_eq!(idx, entries.len() - 1);
    }

    #[test]
    fn test_toggles_rederive_formatted_entry() {
        let mut reg = registry();
        reg.toggle_bold();
        assert_eq!(reg.formatted_font(), Font::HelveticaBold);
        reg.toggle_italic();
        assert_eq!(reg.formatted_font(), Font::HelveticaBoldItalic);
        reg.toggle_bold();
        assert_eq!(reg.formatted_font(), Font::HelveticaItalic);

        reg.toggle_underline();
        let entries = reg.entries();
        assert_eq!(entries[1].attr, TextAttr::Underline);
        // The base font is unaffected by the toggles
        assert_eq!(reg.base_font(), Font::Helvetica);
    }

    #[test]
    fn test_reapplying_color_overwrites() {
        let mut reg = registry();
        reg.set_font_color(Color::from_rgb(10, 20, 30));
        reg.set_font_color(Color::from_rgb(200, 100, 0));
        let entries = reg.entries();
        assert_eq!(entries[2].color, Color::from_rgb(200, 100, 0));
    }

    #[test]
    fn test_highlight_entry_uses_background_attr() {
        let mut reg = registry();
        reg.set_highlight_color(Color::from_rgb(255, 255, 0));
        let entries = reg.entries();
        assert_eq!(entries[3].attr, TextAttr::BgColor);
        assert_eq!(entries[3].bgcolor, Color::from_rgb(255, 255, 0));
    }

    #[test]
    fn test_misspelled_entry_is_red_underline() {
        let entries = registry().entries();
        assert_eq!(entries[4].color, Color::Red);
        assert_eq!(entries[4].attr, TextAttr::Underline);
    }

    #[test]
    fn test_family_face_mapping() {
        assert_eq!(face(FontFamily::CourierNew, true, true), Font::CourierBoldItalic);
        assert_eq!(face(FontFamily::Arial, false, false), Font::Helvetica);
        assert_eq!(face(FontFamily::Verdana, true, false), Font::ScreenBold);
        // Screen has no italic face; italic Verdana stays upright
        assert_eq!(face(FontFamily::Verdana, false, true), Font::Screen);
    }

    #[test]
    fn test_size_change_applies_to_all_entries() {
        let mut reg = registry();
        reg.set_size(24);
        assert!(reg.entries().iter().all(|e| e.size == 24));
    }
}
