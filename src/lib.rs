//! QuillPad: a single-window FLTK notepad with toolbar styling, a live
//! word/character status bar, text-file open, external PDF viewing and
//! text-as-`.pdf` export.

pub mod app;
pub mod ui;
