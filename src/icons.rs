pub(crate) const FOLDER: &[u8] = include_bytes!("../assets/svg/folder.svg");
pub(crate) const NOTEBOOK: &[u8] =
    include_bytes!("../assets/svg/notebook.svg");
pub(crate) const TERMINAL: &[u8] =
    include_bytes!("../assets/svg/terminal.svg");
pub(crate) const CONSOLE: &[u8] = include_bytes!("../assets/svg/console.svg");
pub(crate) const FILE: &[u8] = include_bytes!("../assets/svg/file.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../assets/svg/close.svg");

/// Resolve an icon-class identifier to glyph bytes. Unknown classes fall
/// back to the generic file glyph.
pub(crate) fn for_class(icon_class: &str) -> &'static [u8] {
    if icon_class.contains("Notebook") {
        return NOTEBOOK;
    }
    if icon_class.contains("Terminal") {
        return TERMINAL;
    }
    if icon_class.contains("Console") {
        return CONSOLE;
    }

    FILE
}

#[cfg(test)]
mod tests {
    use super::{FILE, TERMINAL, for_class};
    use crate::features::launcher::ICON_CLASS_PREFIX;

    #[test]
    fn derived_classes_resolve_to_their_glyph() {
        let class = format!("{ICON_CLASS_PREFIX}NewTerminal");
        assert_eq!(for_class(&class), TERMINAL);
    }

    #[test]
    fn unknown_classes_fall_back_to_the_file_glyph() {
        assert_eq!(for_class("custom-class"), FILE);
    }
}
