//! Application entry point for the distributed-systems concept universe.
//!
//! This binary sets up eframe/egui and delegates all interactive logic and
//! rendering to [`Viewer`] from the `viewer` module. Both engines live in
//! the `universe-core` crate and are ticked once per repaint.

mod content;
mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Distributed Systems Universe",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}
