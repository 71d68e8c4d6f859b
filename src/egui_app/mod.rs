//! Egui-based interactive operator grid (feature = "egui").
//!
//! Construct an [`IconGridApp`] from a loaded package and call [`run`], or
//! embed it in another application through [`update_with_ui`].

#![cfg(feature = "egui")]

mod state;
mod text;
mod ui;

pub use state::IconGridApp;
pub use text::highlight_query_job;
pub use ui::update_with_ui;

use anyhow::Result;
use eframe::egui;

/// Open a native window showing `app` and block until it is closed.
pub fn run(app: IconGridApp) -> Result<()> {
    let title = app.config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
