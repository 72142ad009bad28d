//! Standalone sketch application implementing [`eframe::App`].

use std::path::Path;

use eframe::egui;
use tracing::{info, warn};

use crate::config::SketchConfig;
use crate::hotkeys::{self, HotkeyName};
use crate::persistence;
use crate::scale::Scale;
use crate::sketch::{area_label, perimeter_label, ClickOutcome, Sketch};

use super::canvas::SketchCanvas;
use super::toolbar::{show_toolbar, Status, ToolbarView};

/// Top-level container owning the sketch, the scale field and the canvas.
pub struct SketchApp {
    pub sketch: Sketch,
    pub scale: Scale,
    /// Scale field contents; parsed into `scale` on every edit.
    scale_text: String,
    pub config: SketchConfig,
    canvas: SketchCanvas,
    status: Option<Status>,
}

impl SketchApp {
    pub fn new(config: SketchConfig) -> Self {
        let scale_text = config.initial_scale.clone();
        Self {
            sketch: Sketch::new(),
            scale: Scale::parse(&scale_text),
            scale_text,
            config,
            canvas: SketchCanvas::default(),
            status: None,
        }
    }

    /// Apply a toolbar or hotkey action.
    pub fn apply_action(&mut self, action: HotkeyName) {
        match action {
            HotkeyName::Save => {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name(persistence::DEFAULT_FILE_NAME)
                    .add_filter("JSON", &["json"])
                    .save_file()
                {
                    self.save_to(&path);
                }
            }
            HotkeyName::Load => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .pick_file()
                {
                    self.load_from(&path);
                }
            }
            HotkeyName::Undo => {
                self.sketch.undo();
            }
            HotkeyName::Close => {
                if self.sketch.close() {
                    self.status = None;
                }
            }
            HotkeyName::Reset => {
                self.sketch.reset();
                self.canvas.request_reset_view();
                self.status = None;
                info!("canvas reset");
            }
        }
    }

    pub fn save_to(&mut self, path: &Path) {
        match persistence::save_to_path(&self.sketch, &self.scale, path) {
            Ok(()) => {
                self.status = Some(Status::Info(format!("Saved {}", path.display())));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to save sketch");
                self.status = Some(Status::Error(format!("Failed to save sketch: {e}")));
            }
        }
    }

    /// Replace the current sketch with the file's; keeps the current one on error.
    pub fn load_from(&mut self, path: &Path) {
        match persistence::load_from_path(path) {
            Ok((sketch, scale)) => {
                self.scale_text = scale.text().to_string();
                self.sketch = sketch;
                self.scale = scale;
                self.canvas.request_reset_view();
                self.status = Some(Status::Info(format!("Loaded {}", path.display())));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load sketch");
                self.status = Some(Status::Error(format!("Failed to load sketch: {e}")));
            }
        }
    }

    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        for action in hotkeys::frame_actions(&self.config.hotkeys, ctx) {
            self.apply_action(action);
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);

        if let Some(h) = &self.config.headline {
            egui::TopBottomPanel::top("sketch_headline").show(ctx, |ui| {
                ui.heading(h);
            });
        }

        let cfg = &self.config;
        let view = ToolbarView {
            scale_text: &mut self.scale_text,
            area: area_label(&self.sketch, &self.scale, cfg.label_decimals, &cfg.unit),
            perimeter: perimeter_label(&self.sketch, &self.scale, cfg.label_decimals, &cfg.unit),
            can_close: !self.sketch.is_closed() && self.sketch.len() >= 3,
            can_undo: !self.sketch.is_empty(),
            hotkeys: &cfg.hotkeys,
            status: self.status.as_ref(),
        };
        let (action, scale_changed) = egui::TopBottomPanel::top("sketch_toolbar")
            .show(ctx, |ui| show_toolbar(ui, view))
            .inner;
        if scale_changed {
            self.scale = Scale::parse(&self.scale_text);
        }
        if let Some(action) = action {
            self.apply_action(action);
        }

        let click = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.canvas
                    .show(ui, &self.sketch, &self.scale, &self.config)
            })
            .inner;
        if let Some(click) = click {
            if let ClickOutcome::Closed = self.sketch.handle_click(click.pos, click.tolerance) {
                self.status = None;
            }
        }
    }
}
