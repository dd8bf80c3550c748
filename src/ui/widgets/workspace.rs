use iced::alignment;
use iced::widget::text::Wrapping;
use iced::widget::{column, container, mouse_area, row, scrollable, text};
use iced::{Element, Length};

use crate::features::workspace::{
    Document, DocumentKind, WorkspaceEvent, WorkspaceState,
};
use crate::icons;
use crate::theme::Palette;
use crate::ui::widgets::helpers;

const ROW_HEIGHT: f32 = 30.0;
const ROW_FONT_SIZE: f32 = 13.0;
const ROW_PADDING_X: f32 = 12.0;
const ROW_SPACING: f32 = 8.0;
const ICON_WIDTH: f32 = 14.0;
const CLOSE_ICON_WIDTH: f32 = 12.0;
const HINT_FONT_SIZE: f32 = 13.0;

/// Props for rendering the open-documents pane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) state: &'a WorkspaceState,
    pub(crate) palette: Palette,
}

pub(crate) fn view<'a>(props: Props<'a>) -> Element<'a, WorkspaceEvent> {
    if props.state.documents.is_empty() {
        return empty_hint(props.palette);
    }

    let mut rows = column![].width(Length::Fill);
    for document in &props.state.documents {
        rows = rows.push(document_row(props.palette, document));
    }

    scrollable::Scrollable::new(rows)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(4)
                .margin(0)
                .scroller_width(4),
        ))
        .style(helpers::thin_scroll_style(props.palette))
        .into()
}

fn empty_hint<'a>(palette: Palette) -> Element<'a, WorkspaceEvent> {
    let hint = text("Nothing is open yet")
        .size(HINT_FONT_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        });

    container(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn document_row<'a>(
    palette: Palette,
    document: &'a Document,
) -> Element<'a, WorkspaceEvent> {
    let icon_bytes = match document.kind {
        DocumentKind::Notebook => icons::NOTEBOOK,
        DocumentKind::Terminal => icons::TERMINAL,
        DocumentKind::Console => icons::CONSOLE,
    };
    let icon = helpers::svg_icon(icon_bytes, palette.accent, ICON_WIDTH);

    let title = text(document.title.as_str())
        .size(ROW_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None)
        .align_x(alignment::Horizontal::Left);

    let close = mouse_area(helpers::svg_icon(
        icons::CLOSE,
        palette.dim_foreground,
        CLOSE_ICON_WIDTH,
    ))
    .on_press(WorkspaceEvent::CloseRequested { id: document.id });

    let content = row![icon, title, close]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .style(move |_| iced::widget::container::Style {
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}
