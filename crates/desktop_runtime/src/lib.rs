pub mod apps;
pub mod interaction;
pub mod model;
pub mod taskbar;

mod effect_executor;
mod runtime_context;

pub use apps::{AppContent, CatalogError, DesktopApp, DesktopIcon};
pub use model::*;
pub use runtime_context::{
    provide_window_manager, use_window_manager, DesktopWindow, WindowManagerContext,
    WindowManagerProvider,
};
pub use window_manager;
