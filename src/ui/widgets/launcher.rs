use iced::alignment;
use iced::widget::text::Wrapping;
use iced::widget::{column, container, mouse_area, row, scrollable, text};
use iced::{Element, Length};

use crate::features::launcher::{LauncherEntry, LauncherEvent, LauncherState};
use crate::icons;
use crate::theme::Palette;
use crate::ui::widgets::helpers;

const HEADER_HEIGHT: f32 = 28.0;
const HEADER_PADDING_X: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 12.0;

const ROW_HEIGHT: f32 = 26.0;
const ROW_FONT_SIZE: f32 = 12.0;
const ROW_PADDING_X: f32 = 8.0;
const ROW_SPACING: f32 = 6.0;
const ICON_WIDTH: f32 = 14.0;

/// Root label shown for the empty path.
pub(crate) const ROOT_LABEL: &str = "home";
/// Separator decoration between breadcrumb segments.
pub(crate) const PATH_SEPARATOR: &str = " > ";

/// Props for rendering the launcher panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) state: &'a LauncherState,
    pub(crate) palette: Palette,
}

/// Re-derive the full panel tree from launcher state. No caching; the
/// runtime diffs the result against the previous tree.
pub(crate) fn view<'a>(props: Props<'a>) -> Element<'a, LauncherEvent> {
    let palette = props.palette;
    let panel = column![header(props), entry_list(props)]
        .width(Length::Fill)
        .height(Length::Fill);

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            ..Default::default()
        })
        .into()
}

/// Breadcrumb label for a slash-delimited path. The empty path is the
/// root and renders as the bare root label.
pub(crate) fn breadcrumb_label(path: &str) -> String {
    if path.is_empty() {
        return String::from(ROOT_LABEL);
    }

    let mut label = String::from(ROOT_LABEL);
    for segment in path.split('/') {
        label.push_str(PATH_SEPARATOR);
        label.push_str(segment);
    }

    label
}

fn header<'a>(props: Props<'a>) -> Element<'a, LauncherEvent> {
    let palette = props.palette;
    let crumbs = breadcrumb_label(props.state.model.current_path());

    let icon =
        helpers::svg_icon(icons::FOLDER, palette.dim_foreground, ICON_WIDTH);
    let label = text(crumbs)
        .size(HEADER_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None)
        .align_x(alignment::Horizontal::Left);

    let content = row![icon, label]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.overlay.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}

fn entry_list<'a>(props: Props<'a>) -> Element<'a, LauncherEvent> {
    let mut rows = column![].width(Length::Fill);
    for entry in props.state.model.entries() {
        rows = rows.push(entry_row(props, entry));
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

fn entry_row<'a>(
    props: Props<'a>,
    entry: &'a LauncherEntry,
) -> Element<'a, LauncherEvent> {
    let palette = props.palette;
    let is_hovered = props.state.hovered == Some(entry.id());

    let icon = helpers::svg_icon(
        icons::for_class(&entry.icon_class),
        palette.accent,
        ICON_WIDTH,
    );
    let title = text(entry.display_name.as_str())
        .size(ROW_FONT_SIZE)
        .width(Length::Fill)
        .wrapping(Wrapping::None)
        .align_x(alignment::Horizontal::Left);

    let content = row![icon, title]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);

    let styled = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .style(move |_| helpers::row_style(palette, is_hovered));

    mouse_area(styled)
        .on_press(LauncherEvent::EntryActivated { id: entry.id() })
        .on_enter(LauncherEvent::EntryHovered {
            id: Some(entry.id()),
        })
        .on_exit(LauncherEvent::EntryHovered { id: None })
        .into()
}

#[cfg(test)]
mod tests {
    use super::breadcrumb_label;

    #[test]
    fn empty_path_renders_the_root_label() {
        assert_eq!(breadcrumb_label(""), "home");
    }

    #[test]
    fn segments_are_joined_with_the_separator_after_the_root_label() {
        assert_eq!(breadcrumb_label("foo/bar"), "home > foo > bar");
    }

    #[test]
    fn single_segment_paths_get_one_separator() {
        assert_eq!(breadcrumb_label("notes"), "home > notes");
    }
}
