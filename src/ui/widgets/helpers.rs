use iced::widget::{container, scrollable, svg};
use iced::{Background, Color, Element, Length, alignment};

use crate::theme::Palette;

pub(crate) fn svg_icon<'a, Message: 'a>(
    icon: &'static [u8],
    color: Color,
    width: f32,
) -> Element<'a, Message> {
    let handle = svg::Handle::from_memory(icon);
    let icon_view = svg::Svg::new(handle)
        .width(Length::Fixed(width))
        .height(Length::Fixed(width))
        .style(move |_, _| svg::Style { color: Some(color) });
    container(icon_view)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

pub(crate) fn row_style(
    palette: Palette,
    is_hovered: bool,
) -> container::Style {
    let background = if is_hovered {
        let mut color = palette.overlay;
        color.a = 0.6;
        Some(color.into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

pub(crate) fn thin_scroll_style(
    palette: Palette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;
        style.horizontal_rail.border.radius = radius;
        style.horizontal_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);
        style.horizontal_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}
