#![allow(clippy::match_same_arms)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use eframe::egui;

use crate::error::Result;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlAlt,
    CtrlShift,
    AltShift,
    CtrlAltShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlAlt => "Ctrl+Alt",
            Modifier::CtrlShift => "Ctrl+Shift",
            Modifier::AltShift => "Alt+Shift",
            Modifier::CtrlAltShift => "Ctrl+Alt+Shift",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            ' ' => "Space".to_string(),
            other => other.to_string(),
        };

        if self.modifier == Modifier::None {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifier, key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty hotkey".to_string());
        }
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let (last, mods) = parts
            .split_last()
            .ok_or_else(|| "invalid hotkey".to_string())?;
        let key = match last.to_lowercase().as_str() {
            "space" => ' ',
            _ => {
                let mut chars = last.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_ascii_uppercase(),
                    (None, _) => return Err("no key char".to_string()),
                    (Some(_), Some(_)) => return Err(format!("unknown key '{}'", last)),
                }
            }
        };
        let mut lowers: Vec<String> = mods.iter().map(|m| m.to_lowercase()).collect();
        for m in lowers.iter_mut() {
            if m == "control" {
                *m = "ctrl".to_string();
            }
        }
        lowers.sort();
        let lowers: Vec<&str> = lowers.iter().map(String::as_str).collect();
        let modifier = match lowers.as_slice() {
            [] => Modifier::None,
            ["ctrl"] => Modifier::Ctrl,
            ["alt"] => Modifier::Alt,
            ["shift"] => Modifier::Shift,
            ["alt", "ctrl"] => Modifier::CtrlAlt,
            ["ctrl", "shift"] => Modifier::CtrlShift,
            ["alt", "shift"] => Modifier::AltShift,
            ["alt", "ctrl", "shift"] => Modifier::CtrlAltShift,
            _ => return Err(format!("unknown modifier combo '{:?}'", mods)),
        };
        Ok(Hotkey { modifier, key })
    }
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }
}

/// Keyboard shortcuts for the sketch actions. `None` disables an action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub save: Option<Hotkey>,
    pub load: Option<Hotkey>,
    pub undo: Option<Hotkey>,
    pub close: Option<Hotkey>,
    pub reset: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            save: Some(Hotkey::new(Modifier::Ctrl, 'S')),
            load: Some(Hotkey::new(Modifier::Ctrl, 'O')),
            undo: Some(Hotkey::new(Modifier::Ctrl, 'Z')),
            close: Some(Hotkey::new(Modifier::None, 'C')),
            reset: Some(Hotkey::new(Modifier::Ctrl, 'R')),
        }
    }
}

impl Hotkeys {
    pub fn reset_defaults(&mut self) {
        *self = Hotkeys::default();
    }

    /// `~/.polysketch/hotkeys.yaml`, or `None` when `HOME` is not set.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(PathBuf::from(home).join(".polysketch").join("hotkeys.yaml"))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let s = serde_yaml::to_string(self)?;
        fs::write(path, s)?;
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Hotkeys> {
        let s = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Load from [`Hotkeys::default_path`]; defaults when the file is absent.
    pub fn load_or_default() -> Result<Hotkeys> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Hotkeys::default()),
        }
    }
}

/// Sketch action bound to a hotkey.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyName {
    Save,
    Load,
    Undo,
    Close,
    Reset,
}

impl HotkeyName {
    pub const ALL: [HotkeyName; 5] = [
        HotkeyName::Save,
        HotkeyName::Load,
        HotkeyName::Undo,
        HotkeyName::Close,
        HotkeyName::Reset,
    ];
}

pub fn get_hotkey_for_name(hotkeys: &Hotkeys, name: HotkeyName) -> Option<Hotkey> {
    match name {
        HotkeyName::Save => hotkeys.save,
        HotkeyName::Load => hotkeys.load,
        HotkeyName::Undo => hotkeys.undo,
        HotkeyName::Close => hotkeys.close,
        HotkeyName::Reset => hotkeys.reset,
    }
}

/// Button tooltip with the bound hotkey appended, e.g. `"Save [Ctrl+S]"`.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

fn key_from_char(c: char) -> Option<egui::Key> {
    match c {
        ' ' => Some(egui::Key::Space),
        c if c.is_ascii_alphanumeric() => {
            egui::Key::from_name(&c.to_ascii_uppercase().to_string())
        }
        _ => None,
    }
}

/// Collapse egui's modifier state into a [`Modifier`]; Cmd counts as Ctrl.
fn held_modifier(mods: &egui::Modifiers) -> Modifier {
    match (mods.ctrl || mods.command, mods.alt, mods.shift) {
        (false, false, false) => Modifier::None,
        (true, false, false) => Modifier::Ctrl,
        (false, true, false) => Modifier::Alt,
        (false, false, true) => Modifier::Shift,
        (true, true, false) => Modifier::CtrlAlt,
        (true, false, true) => Modifier::CtrlShift,
        (false, true, true) => Modifier::AltShift,
        (true, true, true) => Modifier::CtrlAltShift,
    }
}

fn is_hotkey_pressed(hk: Option<&Hotkey>, input: &egui::InputState) -> bool {
    let Some(hk) = hk else { return false };
    let Some(key) = key_from_char(hk.key) else {
        return false;
    };
    let held = held_modifier(&input.modifiers);
    // Shift alone still matches a plain-letter binding (caps typing).
    let modifier_ok =
        held == hk.modifier || (hk.modifier == Modifier::None && held == Modifier::Shift);
    modifier_ok && input.key_pressed(key)
}

/// Actions whose hotkey was pressed this frame.
pub fn pressed_actions(hotkeys: &Hotkeys, input: &egui::InputState) -> Vec<HotkeyName> {
    HotkeyName::ALL
        .into_iter()
        .filter(|&name| is_hotkey_pressed(get_hotkey_for_name(hotkeys, name).as_ref(), input))
        .collect()
}

/// Like [`pressed_actions`], but empty while a widget holds keyboard focus so
/// plain-letter bindings do not fire while typing.
pub fn frame_actions(hotkeys: &Hotkeys, ctx: &egui::Context) -> Vec<HotkeyName> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|i| pressed_actions(hotkeys, i))
}
