//! In-memory window manager for a desktop-style shell.
//!
//! The crate owns the canonical model of open windows (stacking order, focus, geometry) and the
//! transition rules that keep it consistent while windows are opened, closed, dragged,
//! minimized and restored. Rendering and hosted-application logic live elsewhere and only
//! consume the command set and the derived views.

pub mod clock;
pub mod model;
pub mod reducer;
pub mod store;
pub mod views;

pub use clock::{Clock, ManualClock, SystemClock};
pub use model::*;
pub use reducer::{reduce_windows, WindowAction, WindowEvent};
pub use store::{synthesize_window_id, WindowManager};
