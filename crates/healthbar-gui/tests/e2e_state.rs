/// End-to-end tests for `AppState` -- the demo window's state machine.
///
/// These tests drive the same methods the toolbar, bar list and editor call,
/// without spinning up an egui window.
use healthbar_core::{HealthBarConfig, Invalidation, ValueTarget};
use healthbar_gui::state::{AppState, PRESETS, SAMPLE_MARKUP};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn index_of(state: &AppState, title: &str) -> usize {
    state
        .bars
        .iter()
        .position(|d| d.title == title)
        .unwrap_or_else(|| panic!("no bar titled {title}"))
}

// ── Samples ───────────────────────────────────────────────────────────────────

/// Every built-in sample loads and the first bar is selected for editing.
#[test]
fn samples_load_and_first_bar_is_selected() {
    let state = AppState::new();
    assert_eq!(state.bars.len(), 4);
    assert_eq!(state.selected, Some(0));
    assert_eq!(state.config_text, "{}");
    assert!(state.last_error.is_none());
}

/// Selecting a markup bar loads its source into the editor.
#[test]
fn selecting_markup_bar_loads_source() {
    let mut state = AppState::new();
    let markup = index_of(&state, "Activity (markup)");
    state.select(markup);
    assert_eq!(state.selected, Some(markup));
    assert_eq!(state.config_text, SAMPLE_MARKUP);
}

// ── Editor ────────────────────────────────────────────────────────────────────

/// A valid bag is applied on top of the selected bar and becomes its source.
#[test]
fn apply_editor_updates_selected_bar() {
    let mut state = AppState::new();
    let defaults = index_of(&state, "Defaults");
    state.select(defaults);
    state.config_text = r#"{ "animated": false, "value": 30, "valueSuffix": "%" }"#.to_string();

    let tag = state.apply_editor().unwrap();
    assert_eq!(tag, Invalidation::NeedsRelayout);

    let bar = &state.bars[defaults].bar;
    assert_eq!(bar.value(), 30.0);
    assert_eq!(bar.displayed_value(), 30.0);
    assert_eq!(bar.value_field(ValueTarget::Value).text(), "30%");
    assert_eq!(state.bars[defaults].source, state.config_text);
}

/// Malformed JSON is reported and leaves the bar untouched.
#[test]
fn apply_editor_rejects_malformed_json() {
    let mut state = AppState::new();
    let before = state.bars[0].bar.value();
    state.config_text = "{ value: 3 ".to_string();

    assert!(state.apply_editor().is_err());
    assert!(state.last_error.is_some());
    assert_eq!(state.bars[0].bar.value(), before);

    // A later good apply clears the error.
    state.config_text = "{}".to_string();
    assert_eq!(state.apply_editor().unwrap(), Invalidation::NoOp);
    assert!(state.last_error.is_none());
}

/// Formatting rewrites the buffer to an equivalent bag without touching the
/// bar; unparseable text is left as typed and reported.
#[test]
fn format_editor_normalises_buffer() {
    let mut state = AppState::new();
    let markup = index_of(&state, "Activity (markup)");
    state.select(markup);
    let value_before = state.bars[markup].bar.value();

    state.format_editor().unwrap();
    assert_ne!(state.config_text, SAMPLE_MARKUP);
    assert!(!state.config_text.contains("null"));
    assert_eq!(
        HealthBarConfig::from_json(&state.config_text).unwrap(),
        HealthBarConfig::from_json(SAMPLE_MARKUP).unwrap()
    );
    assert_eq!(state.bars[markup].bar.value(), value_before);
    assert_eq!(state.bars[markup].source, SAMPLE_MARKUP);

    state.config_text = "{ value: 3 ".to_string();
    assert!(state.format_editor().is_err());
    assert_eq!(state.config_text, "{ value: 3 ");
    assert!(state.last_error.is_some());
}

/// Adding from JSON appends a bar; a bad bag adds nothing.
#[test]
fn add_from_json_appends_only_valid_bars() {
    let mut state = AppState::new();
    let index = state
        .add_from_json("Custom", r#"{ "minValue": 0, "maxValue": 5, "value": 2 }"#)
        .unwrap();
    assert_eq!(index, 4);
    assert_eq!(state.bars[index].bar.max_value(), 5.0);

    assert!(state.add_from_json("Broken", r#"{ "value": true }"#).is_err());
    assert_eq!(state.bars.len(), 5);
}

// ── Presets and animation ─────────────────────────────────────────────────────

/// Presets move each bar relative to its own range; out-of-range presets snap
/// to the minimum whichever end they overshoot.
#[test]
fn presets_respect_each_bar_range() {
    let mut state = AppState::new();
    state.set_animated(false);

    state.set_fraction(0.5);
    for demo in &state.bars {
        let mid = (demo.bar.min_value() + demo.bar.max_value()) / 2.0;
        assert!((demo.bar.value() - mid).abs() < 1e-9, "{}", demo.title);
    }

    let (_, over) = PRESETS[PRESETS.len() - 1];
    state.set_fraction(over);
    for demo in &state.bars {
        assert_eq!(demo.bar.value(), demo.bar.min_value(), "{}", demo.title);
    }

    state.set_fraction(1.0);
    for demo in &state.bars {
        assert_eq!(demo.bar.value(), demo.bar.max_value(), "{}", demo.title);
    }

    let (_, under) = PRESETS[0];
    state.set_fraction(under);
    for demo in &state.bars {
        assert_eq!(demo.bar.value(), demo.bar.min_value(), "{}", demo.title);
    }
}

/// Turning animation off snaps every running animation to its target.
#[test]
fn disabling_animation_snaps_all_bars() {
    let mut state = AppState::new();
    state.set_fraction(1.0);
    assert!(state.animating_count() > 0);

    state.set_animated(false);
    assert_eq!(state.animating_count(), 0);
    for demo in &state.bars {
        assert_eq!(demo.bar.displayed_value(), demo.bar.value(), "{}", demo.title);
    }
}
