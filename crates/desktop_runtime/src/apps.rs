//! Built-in desktop applications and the desktop icon grid.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use window_manager::{OpenWindowRequest, Position, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesktopApp {
    Messenger,
    SecretFolder,
    DosTerminal,
    Adventure,
}

impl DesktopApp {
    pub fn app_id(self) -> &'static str {
        match self {
            Self::Messenger => "messenger",
            Self::SecretFolder => "secretfolder",
            Self::DosTerminal => "dosterminal",
            Self::Adventure => "adventure",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Messenger => "Messenger.exe",
            Self::SecretFolder => "Secret Folder",
            Self::DosTerminal => "MS-DOS Prompt",
            Self::Adventure => "ADVENTURE.EXE - Cyberpunk Mystery",
        }
    }

    pub fn default_position(self) -> Position {
        match self {
            Self::Messenger => Position::new(200, 100),
            Self::SecretFolder => Position::new(250, 150),
            Self::DosTerminal => Position::new(150, 80),
            Self::Adventure => Position::new(100, 50),
        }
    }

    pub fn default_size(self) -> Size {
        match self {
            Self::Messenger => Size::new(450, 500),
            Self::SecretFolder => Size::new(500, 400),
            Self::DosTerminal => Size::new(600, 450),
            Self::Adventure => Size::new(650, 500),
        }
    }

    /// Launch parameters handed to the hosted app. The adventure shortcut is the DOS terminal
    /// booting straight into the game.
    pub fn launch_params(self) -> Value {
        match self {
            Self::Adventure => json!({ "auto_start_adventure": true }),
            _ => Value::Null,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown desktop app `{0}`")]
    UnknownApp(String),
}

impl std::str::FromStr for DesktopApp {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        APP_REGISTRY
            .iter()
            .copied()
            .find(|app| app.app_id() == raw)
            .ok_or_else(|| CatalogError::UnknownApp(raw.to_string()))
    }
}

const APP_REGISTRY: [DesktopApp; 4] = [
    DesktopApp::Messenger,
    DesktopApp::SecretFolder,
    DesktopApp::DosTerminal,
    DesktopApp::Adventure,
];

/// Apps the start button rotates through.
const START_ROTATION: [DesktopApp; 2] = [DesktopApp::Messenger, DesktopApp::SecretFolder];

pub fn app_registry() -> &'static [DesktopApp] {
    &APP_REGISTRY
}

pub fn start_rotation() -> &'static [DesktopApp] {
    &START_ROTATION
}

/// Opaque payload stored on each window: which hosted app to mount and how to launch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppContent {
    pub app: DesktopApp,
    pub launch_params: Value,
}

impl AppContent {
    pub fn new(app: DesktopApp) -> Self {
        Self {
            app,
            launch_params: app.launch_params(),
        }
    }
}

pub fn default_open_request(app: DesktopApp) -> OpenWindowRequest<AppContent> {
    OpenWindowRequest::new(AppContent::new(app))
        .with_title(app.title())
        .with_position(app.default_position())
        .with_size(app.default_size())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopIcon {
    pub glyph: &'static str,
    pub label: &'static str,
    /// `None` for placeholder icons that do nothing yet.
    pub launches: Option<DesktopApp>,
}

const DESKTOP_ICONS: [DesktopIcon; 6] = [
    DesktopIcon {
        glyph: "💬",
        label: "Messenger.exe",
        launches: Some(DesktopApp::Messenger),
    },
    DesktopIcon {
        glyph: "🔒",
        label: "Secret Folder",
        launches: Some(DesktopApp::SecretFolder),
    },
    DesktopIcon {
        glyph: "🎮",
        label: "C:> ADVENTURE.EXE",
        launches: Some(DesktopApp::Adventure),
    },
    DesktopIcon {
        glyph: "⬛",
        label: "MS-DOS Prompt",
        launches: Some(DesktopApp::DosTerminal),
    },
    DesktopIcon {
        glyph: "📁",
        label: "My Computer",
        launches: None,
    },
    DesktopIcon {
        glyph: "🗑️",
        label: "Recycle Bin",
        launches: None,
    },
];

pub fn desktop_icons() -> &'static [DesktopIcon] {
    &DESKTOP_ICONS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_ids_round_trip_through_the_registry() {
        for app in app_registry() {
            assert_eq!(app.app_id().parse::<DesktopApp>(), Ok(*app));
        }
        assert_eq!(
            "calculator".parse::<DesktopApp>(),
            Err(CatalogError::UnknownApp("calculator".to_string()))
        );
    }

    #[test]
    fn serialized_app_names_match_catalog_ids() {
        for app in app_registry() {
            let value = serde_json::to_value(app).expect("serialize app");
            assert_eq!(value, json!(app.app_id()));

            let name = value.as_str().expect("app serializes as a string");
            assert_eq!(name.parse::<DesktopApp>(), Ok(*app));
            assert_eq!(serde_json::from_value::<DesktopApp>(value.clone()).ok(), Some(*app));
        }
    }

    #[test]
    fn adventure_request_boots_the_game() {
        let request = default_open_request(DesktopApp::Adventure);

        assert_eq!(request.window_id, None);
        assert_eq!(request.title.as_deref(), Some("ADVENTURE.EXE - Cyberpunk Mystery"));
        assert_eq!(request.position, Some(Position::new(100, 50)));
        assert_eq!(request.size, Some(Size::new(650, 500)));
        assert_eq!(
            request.content.launch_params,
            json!({ "auto_start_adventure": true })
        );
    }

    #[test]
    fn placeholder_icons_launch_nothing() {
        let placeholders: Vec<&str> = desktop_icons()
            .iter()
            .filter(|icon| icon.launches.is_none())
            .map(|icon| icon.label)
            .collect();

        assert_eq!(placeholders, vec!["My Computer", "Recycle Bin"]);
    }
}
