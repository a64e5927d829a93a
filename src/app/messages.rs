use super::settings::FontFamily;

/// All messages that can be sent through the FLTK channel.
/// Each menu item and toolbar control sends one of these; the dispatch loop
/// in main handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // File
    FileOpenPdf,
    FileOpenText,
    FileExit,

    // Edit
    ShowFindReplace,

    // Toolbar
    SetFontFamily(FontFamily),
    SetFontSize(u32),
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    PickFontColor,
    PickHighlightColor,
    SpellCheck,
    ExportPdf,
    ToggleTheme,

    // Buffer
    BufferModified,
}
