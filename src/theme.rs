use iced::Color;

/// Color palette used by the shell's widgets.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
}

impl Palette {
    pub(crate) fn dark() -> Self {
        Self {
            surface: Color::from_rgb8(0x1b, 0x1d, 0x26),
            overlay: Color::from_rgb8(0x27, 0x2a, 0x36),
            foreground: Color::from_rgb8(0xd8, 0xda, 0xe2),
            dim_foreground: Color::from_rgb8(0x8a, 0x8e, 0x9c),
            accent: Color::from_rgb8(0x5c, 0x9c, 0xf5),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
