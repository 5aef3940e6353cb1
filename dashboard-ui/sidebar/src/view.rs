use iced::font::Weight;
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Space, Stack, button, column, container, hover, row, scrollable,
    svg, text,
};
use iced::{
    Border, Color, Element, Font, Length, Padding, Radians, Rotation,
    alignment,
};

use crate::icons;
use crate::layout::{SidebarLayout, TOGGLE_OVERHANG, TOGGLE_SIZE, TOGGLE_TOP};
use crate::route::Route;
use crate::theme::{Interaction, SidebarTheme, ThemeToken};

const CORNER_RADIUS: f32 = 12.0;
const HEADER_PADDING_VERTICAL: f32 = 24.0;
const CONTENT_PADDING_INLINE: f32 = 18.0;
const CONTENT_PADDING_BOTTOM: f32 = 24.0;
const MENU_GROUP_GAP: f32 = 24.0;
const MENU_ITEM_GAP: f32 = 12.0;
const MENU_ITEM_PADDING_VERTICAL: f32 = 8.0;
const MENU_ITEM_PADDING_HORIZONTAL: f32 = 10.0;
const MENU_ICON_SIZE: f32 = 16.0;
const MENU_LABEL_SIZE: f32 = 14.0;
const LOGO_SIZE: f32 = 36.0;
const BRAND_LABEL_SIZE: f32 = 16.0;
const TOGGLE_ICON_SIZE: f32 = 14.0;

type SelectAction<'a, Message> = dyn Fn(&'static str) -> Message + 'a;

/// Builder that renders the sidebar for one frame.
///
/// The view is stateless: the host owns the open/closed flag, feeds the
/// current [`SidebarLayout`] and location in, and maps the toggle and route
/// callbacks to its own messages.
pub struct SidebarView<'a, Message: Clone + 'a> {
    theme: &'a SidebarTheme,
    layout: SidebarLayout,
    is_opened: bool,
    brand: &'a str,
    primary: &'a [Route],
    bottom: &'a [Route],
    current_path: Option<&'a str>,
    on_toggle: Option<Message>,
    on_select: Option<Box<SelectAction<'a, Message>>>,
}

impl<'a, Message> SidebarView<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a view for the given theme and route lists.
    pub fn new(
        theme: &'a SidebarTheme,
        primary: &'a [Route],
        bottom: &'a [Route],
    ) -> Self {
        Self {
            theme,
            layout: SidebarLayout::COLLAPSED,
            is_opened: false,
            brand: "",
            primary,
            bottom,
            current_path: None,
            on_toggle: None,
            on_select: None,
        }
    }

    /// Set the open/closed state and the geometry to draw.
    pub fn state(mut self, is_opened: bool, layout: SidebarLayout) -> Self {
        self.is_opened = is_opened;
        self.layout = layout;
        self
    }

    /// Label shown next to the logo.
    pub fn brand(mut self, brand: &'a str) -> Self {
        self.brand = brand;
        self
    }

    /// Location used to highlight the matching route.
    pub fn current_path(mut self, path: Option<&'a str>) -> Self {
        self.current_path = path;
        self
    }

    /// Emit `message` when the toggle is pressed.
    pub fn on_toggle(mut self, message: Message) -> Self {
        self.on_toggle = Some(message);
        self
    }

    /// Emit a message carrying the route path when an item is pressed.
    pub fn on_select(
        mut self,
        on_select: impl Fn(&'static str) -> Message + 'a,
    ) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let layout = self.layout;
        let background =
            self.theme.token(ThemeToken::SidebarBackground(Interaction::Default));

        let menus = column![
            scrollable::Scrollable::with_direction(
                self.menu(self.primary),
                scrollable::Direction::Vertical(
                    scrollable::Scrollbar::new()
                        .width(0)
                        .scroller_width(0)
                        .margin(0),
                ),
            )
            .width(Length::Fill)
            .height(Length::Fill),
            self.menu(self.bottom),
        ]
        .spacing(MENU_GROUP_GAP)
        .padding(Padding {
            top: 0.0,
            right: CONTENT_PADDING_INLINE,
            bottom: CONTENT_PADDING_BOTTOM,
            left: CONTENT_PADDING_INLINE,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let panel = container(column![self.header(), menus])
            .width(Length::Fixed(layout.width))
            .height(Length::Fill)
            .clip(true)
            .style(move |_| container::Style {
                background: Some(background.into()),
                border: Border {
                    radius: CORNER_RADIUS.into(),
                    ..Border::default()
                },
                ..Default::default()
            });

        let base = row![
            panel,
            container(Space::new())
                .width(Length::Fixed(TOGGLE_OVERHANG))
                .height(Length::Fill),
        ]
        .height(Length::Fill);

        let toggle_layer = container(self.toggle()).padding(Padding {
            top: TOGGLE_TOP,
            right: 0.0,
            bottom: 0.0,
            left: layout.toggle_left().max(0.0),
        });

        Stack::with_children(vec![base.into(), toggle_layer.into()])
            .width(Length::Fixed(layout.width + TOGGLE_OVERHANG))
            .height(Length::Fill)
            .into()
    }

    fn header(&self) -> Element<'a, Message> {
        let layout = self.layout;
        let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO))
            .width(Length::Fixed(LOGO_SIZE))
            .height(Length::Fixed(LOGO_SIZE));

        let mut logo_row = row![logo].align_y(alignment::Vertical::Center);
        if layout.labels_visible() {
            let color = faded(self.theme.token(ThemeToken::LogoText), layout);
            let brand = text(self.brand.to_string())
                .size(BRAND_LABEL_SIZE)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .wrapping(Wrapping::None)
                .style(move |_| text::Style { color: Some(color) });

            logo_row = logo_row
                .push(gap(layout.logo_label_gap))
                .push(brand);
        }

        container(logo_row)
            .padding([HEADER_PADDING_VERTICAL, CONTENT_PADDING_INLINE])
            .width(Length::Fill)
            .into()
    }

    fn toggle(&self) -> Element<'a, Message> {
        let theme = self.theme;
        let style = toggle_style(theme, self.is_opened);
        let glyph_color = theme.token(ThemeToken::Text(Interaction::Default));

        let glyph = svg::Svg::new(svg::Handle::from_memory(icons::TOGGLE))
            .width(Length::Fixed(TOGGLE_ICON_SIZE))
            .height(Length::Fixed(TOGGLE_ICON_SIZE))
            .rotation(Rotation::Floating(Radians(
                self.layout.toggle_rotation.to_radians(),
            )))
            .style(move |_, _| svg::Style {
                color: Some(glyph_color),
            });

        let content = container(glyph)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let mut toggle = button(content)
            .padding(0)
            .width(Length::Fixed(TOGGLE_SIZE))
            .height(Length::Fixed(TOGGLE_SIZE))
            .style(move |_, _| style);

        if let Some(message) = self.on_toggle.clone() {
            toggle = toggle.on_press(message);
        }

        toggle.into()
    }

    fn menu(&self, routes: &'a [Route]) -> Element<'a, Message> {
        let items = routes.iter().map(|route| {
            match resting_interaction(route, self.current_path) {
                Interaction::Default => hover(
                    self.menu_item(route, Interaction::Default),
                    self.menu_item(route, Interaction::Hover),
                ),
                interaction => self.menu_item(route, interaction),
            }
        });

        Column::with_children(items)
            .spacing(MENU_ITEM_GAP)
            .width(Length::Fill)
            .into()
    }

    fn menu_item(
        &self,
        route: &'a Route,
        interaction: Interaction,
    ) -> Element<'a, Message> {
        let layout = self.layout;
        let style = menu_item_style(self.theme, interaction);
        let foreground = style.text_color;

        let icon: Element<'a, Message> = match icons::resolve(route.icon) {
            Some(bytes) => svg::Svg::new(svg::Handle::from_memory(bytes))
                .width(Length::Fixed(MENU_ICON_SIZE))
                .height(Length::Fixed(MENU_ICON_SIZE))
                .style(move |_, _| svg::Style {
                    color: Some(foreground),
                })
                .into(),
            None => container(Space::new())
                .width(Length::Fixed(MENU_ICON_SIZE))
                .height(Length::Fixed(MENU_ICON_SIZE))
                .into(),
        };

        let mut content = row![icon].align_y(alignment::Vertical::Center);
        if layout.labels_visible() {
            let color = faded(foreground, layout);
            let label = text(route.title)
                .size(MENU_LABEL_SIZE)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::default()
                })
                .wrapping(Wrapping::None)
                .style(move |_| text::Style { color: Some(color) });

            content = content.push(gap(layout.item_label_gap)).push(label);
        }

        let mut item = button(content)
            .padding([MENU_ITEM_PADDING_VERTICAL, MENU_ITEM_PADDING_HORIZONTAL])
            .width(Length::Fill)
            .style(move |_, _| style);

        if let Some(on_select) = self.on_select.as_ref() {
            item = item.on_press(on_select(route.path));
        }

        item.into()
    }
}

/// Interaction state of an item while the pointer is elsewhere.
fn resting_interaction(
    route: &Route,
    current_path: Option<&str>,
) -> Interaction {
    if route.is_current(current_path) {
        Interaction::Active
    } else {
        Interaction::Default
    }
}

fn menu_item_style(
    theme: &SidebarTheme,
    interaction: Interaction,
) -> button::Style {
    let background = match interaction {
        Interaction::Default => Color::TRANSPARENT,
        state => theme.token(ThemeToken::SidebarBackground(state)),
    };

    button::Style {
        background: Some(background.into()),
        text_color: theme.token(ThemeToken::Text(interaction)),
        border: Border {
            radius: CORNER_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// The toggle has no hover fill; only the open state changes its color.
fn toggle_style(theme: &SidebarTheme, is_opened: bool) -> button::Style {
    let interaction = if is_opened {
        Interaction::Active
    } else {
        Interaction::Default
    };

    button::Style {
        background: Some(
            theme.token(ThemeToken::ButtonBackground(interaction)).into(),
        ),
        text_color: theme.token(ThemeToken::Text(Interaction::Default)),
        border: Border {
            radius: (TOGGLE_SIZE / 2.0).into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

fn gap<'a, Message: 'a>(width: f32) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(width))
        .height(Length::Shrink)
        .into()
}

fn faded(color: Color, layout: SidebarLayout) -> Color {
    Color {
        a: color.a * layout.label_opacity,
        ..color
    }
}
