use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container, text_input},
};

/// Light theme matching the upstream product: white panels, soft blue
/// row highlight, purple accents.
#[derive(Debug, Clone, Copy)]
pub struct RendaTheme;

impl RendaTheme {
    // Core colors
    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const PAGE_BG: Color = Color::from_rgb(0.95, 0.95, 0.97); // #F2F2F7
    pub const ACCENT: Color = Color::from_rgb(0.35, 0.23, 0.65); // #5A3BA6
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.42, 0.30, 0.72); // #6B4DB8

    // Rows
    pub const ROW_BG: Color = Color::from_rgb(1.0, 1.0, 1.0); // base stripe
    pub const ROW_HIGHLIGHT: Color = Color::from_rgb(0.94, 0.96, 1.0); // odd stripe
    pub const BORDER_COLOR: Color = Color::from_rgb(0.88, 0.88, 0.90); // #E0E0E6

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.20, 0.20, 0.24); // #333338
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.45, 0.45, 0.50); // #737380
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.62, 0.62, 0.66); // #9E9EA8

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.65, 0.35); // #00A659
    pub const ERROR: Color = Color::from_rgb(0.85, 0.20, 0.25); // #D93340

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::PAGE_BG;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Renda".to_string(), palette)
    }
}

// Container styles using closures
pub enum Container {
    Panel,
    Header,
    Row,
    RowHighlight,
    ErrorBox,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Panel => |_| container::Style {
                text_color: Some(RendaTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RendaTheme::WHITE)),
                border: Border {
                    color: RendaTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Header => |_| container::Style {
                text_color: Some(RendaTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RendaTheme::WHITE)),
                border: Border {
                    color: RendaTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Row => |_| container::Style {
                text_color: Some(RendaTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RendaTheme::ROW_BG)),
                border: Border {
                    color: RendaTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::RowHighlight => |_| container::Style {
                text_color: Some(RendaTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RendaTheme::ROW_HIGHLIGHT)),
                border: Border {
                    color: RendaTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::ErrorBox => |_| container::Style {
                text_color: Some(RendaTheme::ERROR),
                background: Some(Background::Color(RendaTheme::WHITE)),
                border: Border {
                    color: RendaTheme::ERROR,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

// Button styles for the pagination control
pub enum Button {
    Page,
    PageActive,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Page => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        RendaTheme::ROW_HIGHLIGHT
                    }
                    _ => RendaTheme::WHITE,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: RendaTheme::ACCENT,
                    border: Border {
                        color: RendaTheme::BORDER_COLOR,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::PageActive => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        RendaTheme::ACCENT_HOVER
                    }
                    _ => RendaTheme::ACCENT,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: RendaTheme::WHITE,
                    border: Border {
                        color: RendaTheme::ACCENT,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
        }
    }
}

/// Search input styled to sit inside the white header panel.
pub fn search_input(
    _theme: &Theme,
    status: text_input::Status,
) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused => RendaTheme::ACCENT,
        _ => RendaTheme::BORDER_COLOR,
    };
    text_input::Style {
        background: Background::Color(RendaTheme::WHITE),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 4.0.into(),
        },
        icon: RendaTheme::TEXT_DIMMED,
        placeholder: RendaTheme::TEXT_DIMMED,
        value: RendaTheme::TEXT_PRIMARY,
        selection: RendaTheme::ROW_HIGHLIGHT,
    }
}
