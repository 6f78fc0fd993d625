//! Drains window events emitted by applied commands.

use leptos::*;
use window_manager::WindowEvent;

use crate::runtime_context::WindowManagerContext;

/// Installs the executor that drains the event queue in order.
pub fn install(runtime: WindowManagerContext) {
    // Clear the queue before handling so events emitted while draining land in a fresh batch.
    create_effect(move |_| {
        let queued = runtime.events.get();
        if queued.is_empty() {
            return;
        }

        runtime.events.set(Vec::new());

        for event in queued {
            log_event(&event);
        }
    });
}

fn log_event(event: &WindowEvent) {
    match event {
        // One per pointer sample while dragging.
        WindowEvent::Moved(_) | WindowEvent::Resized(_) => {}
        WindowEvent::Opened(id) => logging::log!("window opened: {id}"),
        WindowEvent::Closed(id) => logging::log!("window closed: {id}"),
        WindowEvent::Focused(id) => logging::log!("window focused: {id}"),
        WindowEvent::FocusCleared => logging::log!("no window focused"),
        WindowEvent::Minimized(id) => logging::log!("window minimized: {id}"),
        WindowEvent::Restored(id) => logging::log!("window restored: {id}"),
    }
}
