#![cfg(target_arch = "wasm32")]

use checkers::{CheckersGame, wasm_ready};
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn accepted_click_returns_fresh_state() {
    let mut game = CheckersGame::new();

    game.handle_click(250.0, 550.0).unwrap();
    let reply = game.handle_click(350.0, 450.0).unwrap();

    assert_eq!(field(&reply, "accepted").as_bool(), Some(true));
    let state = field(&reply, "state");
    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("Black"));
    assert_eq!(field(&state, "white_score").as_f64(), Some(12.0));
}

#[wasm_bindgen_test]
fn rejected_click_carries_the_reason() {
    let mut game = CheckersGame::new();
    game.resize(1000.0, 800.0);

    let reply = game.handle_click(10.0, 10.0).unwrap();

    assert_eq!(field(&reply, "accepted").as_bool(), Some(false));
    let error = field(&reply, "error").as_string().unwrap();
    assert!(error.contains("outside the board"));
    assert_eq!(game.winner(), None);
}

#[wasm_bindgen_test]
fn config_object_overrides_layout() {
    let layout = Object::new();
    Reflect::set(&layout, &"left".into(), &100.0.into()).unwrap();
    Reflect::set(&layout, &"top".into(), &0.0.into()).unwrap();
    Reflect::set(&layout, &"size".into(), &400.0.into()).unwrap();
    let config = Object::new();
    Reflect::set(&config, &"layout".into(), &layout).unwrap();

    let mut game = CheckersGame::with_config(config.into()).unwrap();

    let outside = game.handle_click(50.0, 50.0).unwrap();
    assert_eq!(field(&outside, "accepted").as_bool(), Some(false));

    // C3 sits at column 2, row 5 of a 50px grid.
    let selected = game.handle_click(225.0, 275.0).unwrap();
    assert_eq!(field(&selected, "accepted").as_bool(), Some(true));
    let state = game.state().unwrap();
    assert!(!field(&state, "selected").is_undefined());
}

#[wasm_bindgen_test]
fn config_with_non_positive_score_is_refused() {
    let config = Object::new();
    Reflect::set(&config, &"starting_score".into(), &0.0.into()).unwrap();

    let err = CheckersGame::with_config(config.into()).err().unwrap();

    assert!(err.as_string().unwrap().contains("starting score must be positive"));
}
