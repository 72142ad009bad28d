//! Top toolbar: scale field, read-outs and sketch actions.

use egui::{Color32, RichText, Ui};
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, FLOPPY_DISK, FOLDER_OPEN, POLYGON, TRASH};

use crate::hotkeys::{format_button_tooltip, get_hotkey_for_name, HotkeyName, Hotkeys};

/// Text shown under the toolbar after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Everything the toolbar needs to render for one frame.
pub struct ToolbarView<'a> {
    pub scale_text: &'a mut String,
    pub area: String,
    pub perimeter: String,
    pub can_close: bool,
    pub can_undo: bool,
    pub hotkeys: &'a Hotkeys,
    pub status: Option<&'a Status>,
}

/// Render the toolbar. Returns the action whose button was clicked, and
/// whether the scale text was edited.
pub fn show_toolbar(ui: &mut Ui, view: ToolbarView<'_>) -> (Option<HotkeyName>, bool) {
    let mut action = None;
    let mut scale_changed = false;
    let tip = |name: HotkeyName, description: &str| {
        format_button_tooltip(description, get_hotkey_for_name(view.hotkeys, name).as_ref())
    };

    ui.horizontal(|ui| {
        ui.label("Scale (a:b)");
        let resp = ui.add(egui::TextEdit::singleline(view.scale_text).desired_width(80.0));
        scale_changed = resp.changed();
        resp.on_hover_text("a canvas units correspond to b real units");

        ui.separator();
        ui.label(RichText::new(&view.area).strong());
        ui.label(&view.perimeter);
        ui.separator();

        if ui
            .button(format!("{} Save", FLOPPY_DISK))
            .on_hover_text(tip(HotkeyName::Save, "Save sketch as JSON"))
            .clicked()
        {
            action = Some(HotkeyName::Save);
        }
        if ui
            .button(format!("{} Load", FOLDER_OPEN))
            .on_hover_text(tip(HotkeyName::Load, "Load sketch from JSON"))
            .clicked()
        {
            action = Some(HotkeyName::Load);
        }
        if ui
            .add_enabled(view.can_close, egui::Button::new(format!("{} Close", POLYGON)))
            .on_hover_text(tip(HotkeyName::Close, "Close the polygon"))
            .clicked()
        {
            action = Some(HotkeyName::Close);
        }
        if ui
            .add_enabled(
                view.can_undo,
                egui::Button::new(format!("{} Undo", ARROW_COUNTER_CLOCKWISE)),
            )
            .on_hover_text(tip(HotkeyName::Undo, "Remove the last vertex"))
            .clicked()
        {
            action = Some(HotkeyName::Undo);
        }
        if ui
            .button(format!("{} Reset", TRASH))
            .on_hover_text(tip(HotkeyName::Reset, "Clear the canvas"))
            .clicked()
        {
            action = Some(HotkeyName::Reset);
        }
    });

    match view.status {
        Some(Status::Info(msg)) => {
            ui.label(RichText::new(msg).weak());
        }
        Some(Status::Error(msg)) => {
            ui.label(RichText::new(msg).color(Color32::LIGHT_RED));
        }
        None => {}
    }

    (action, scale_changed)
}
