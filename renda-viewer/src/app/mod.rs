use iced::{Font, Settings, Theme};

use crate::state::State;
use crate::{theme, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the viewer application.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("Minhas Rendas Fixas", update::update, view::view)
        .settings(default_settings())
        .theme(app_theme)
        .window(iced::window::Settings {
            size: iced::Size::new(1024.0, 720.0),
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .run_with(move || bootstrap::boot(&config))
}

fn default_settings() -> Settings {
    Settings {
        id: Some("renda-viewer".to_string()),
        antialiasing: true,
        default_font: Font::DEFAULT,
        ..Default::default()
    }
}

fn app_theme(_: &State) -> Theme {
    theme::RendaTheme::theme()
}
