use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

pub fn native_open_dialog(filter: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_filter(filter);
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Save-as chooser with a preset filename carrying the suggested extension.
pub fn native_export_dialog(filter: &str, preset_name: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter(filter);
    nfc.set_preset_file(preset_name);
    nfc.set_option(FileDialogOptions::SaveasConfirm);
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
