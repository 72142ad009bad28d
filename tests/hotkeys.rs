use std::path::PathBuf;

use polysketch::hotkeys::*;

#[test]
fn tooltip_with_no_hotkey_returns_description_only() {
    let text = format_button_tooltip("Reset", None);
    assert_eq!(text, "Reset");
}

#[test]
fn tooltip_with_ctrl_hotkey() {
    let hk = Hotkey::new(Modifier::Ctrl, 'S');
    let text = format_button_tooltip("Save", Some(&hk));
    assert_eq!(text, "Save [Ctrl+S]");
}

#[test]
fn get_hotkey_close_default() {
    let hk = Hotkeys::default();
    let result = get_hotkey_for_name(&hk, HotkeyName::Close).expect("bound by default");
    assert_eq!(result.key, 'C');
    assert_eq!(result.modifier, Modifier::None);
}

#[test]
fn every_action_has_a_default_binding() {
    let hk = Hotkeys::default();
    for name in HotkeyName::ALL {
        assert!(get_hotkey_for_name(&hk, name).is_some(), "{:?}", name);
    }
}

#[test]
fn parse_and_display_agree() {
    for s in ["Ctrl+S", "C", "Ctrl+Shift+Z", "Ctrl+Alt+Shift+Q", "Space", "Alt+Space"] {
        let hk: Hotkey = s.parse().expect("parses");
        assert_eq!(hk.to_string(), s);
    }
}

#[test]
fn parse_is_case_insensitive_and_order_free() {
    let hk: Hotkey = "shift + control + z".parse().expect("parses");
    assert_eq!(hk, Hotkey::new(Modifier::CtrlShift, 'Z'));
}

#[test]
fn parse_rejects_bad_input() {
    assert!("".parse::<Hotkey>().is_err());
    assert!("Hyper+S".parse::<Hotkey>().is_err());
    assert!("Ctrl+Enter".parse::<Hotkey>().is_err());
}

#[test]
fn yaml_round_trip_through_file() {
    let path: PathBuf = std::env::temp_dir()
        .join(format!("polysketch-hotkeys-{}", std::process::id()))
        .join("hotkeys.yaml");
    let mut hk = Hotkeys::default();
    hk.close = None;
    hk.undo = Some(Hotkey::new(Modifier::None, 'U'));
    hk.save_to_path(&path).expect("save");
    let loaded = Hotkeys::load_from_path(&path).expect("load");
    if let Some(dir) = path.parent() {
        std::fs::remove_dir_all(dir).ok();
    }
    assert_eq!(loaded, hk);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let hk: Hotkeys = serde_yaml::from_str("undo: null\n").expect("parses");
    assert_eq!(hk.undo, None);
    assert_eq!(hk.save, Hotkeys::default().save);
}

#[test]
fn reset_defaults_restores_bindings() {
    let mut hk = Hotkeys::default();
    hk.save = None;
    hk.reset_defaults();
    assert_eq!(hk, Hotkeys::default());
}

fn press(key: egui::Key, modifiers: egui::Modifiers) -> egui::RawInput {
    egui::RawInput {
        modifiers,
        events: vec![egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }],
        ..Default::default()
    }
}

fn actions_for(input: egui::RawInput, hotkeys: &Hotkeys) -> Vec<HotkeyName> {
    let ctx = egui::Context::default();
    let mut actions = Vec::new();
    let _ = ctx.run(input, |ctx| {
        actions = frame_actions(hotkeys, ctx);
    });
    actions
}

#[test]
fn ctrl_s_triggers_save() {
    let actions = actions_for(
        press(egui::Key::S, egui::Modifiers::CTRL),
        &Hotkeys::default(),
    );
    assert_eq!(actions, vec![HotkeyName::Save]);
}

#[test]
fn plain_c_triggers_close() {
    let actions = actions_for(
        press(egui::Key::C, egui::Modifiers::NONE),
        &Hotkeys::default(),
    );
    assert_eq!(actions, vec![HotkeyName::Close]);
}

#[test]
fn plain_binding_does_not_fire_with_ctrl_held() {
    let actions = actions_for(
        press(egui::Key::C, egui::Modifiers::CTRL),
        &Hotkeys::default(),
    );
    assert!(actions.is_empty(), "got {:?}", actions);
}

#[test]
fn unbound_key_yields_no_action() {
    let actions = actions_for(
        press(egui::Key::Q, egui::Modifiers::NONE),
        &Hotkeys::default(),
    );
    assert!(actions.is_empty(), "got {:?}", actions);
}

#[test]
fn disabled_binding_yields_no_action() {
    let mut hk = Hotkeys::default();
    hk.save = None;
    let actions = actions_for(press(egui::Key::S, egui::Modifiers::CTRL), &hk);
    assert!(actions.is_empty(), "got {:?}", actions);
}

#[test]
fn pressed_actions_reads_input_state_directly() {
    let ctx = egui::Context::default();
    let hk = Hotkeys::default();
    let mut actions = Vec::new();
    let _ = ctx.run(press(egui::Key::Z, egui::Modifiers::CTRL), |ctx| {
        actions = ctx.input(|i| pressed_actions(&hk, i));
    });
    assert_eq!(actions, vec![HotkeyName::Undo]);
}

#[test]
fn hotkeys_are_suppressed_while_a_widget_has_focus() {
    let ctx = egui::Context::default();
    let hk = Hotkeys::default();
    let mut actions = vec![HotkeyName::Reset];
    let _ = ctx.run(press(egui::Key::C, egui::Modifiers::NONE), |ctx| {
        ctx.memory_mut(|m| m.request_focus(egui::Id::new("scale_field")));
        actions = frame_actions(&hk, ctx);
    });
    assert!(actions.is_empty(), "got {:?}", actions);
}
