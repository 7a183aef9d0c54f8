use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod layout;
pub mod report;
pub mod types;

use crate::game::{GameSession, SessionConfig};
use crate::types::ClickReply;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// One game session owned by the page that renders it.
#[wasm_bindgen]
pub struct CheckersGame {
    session: GameSession,
}

#[wasm_bindgen]
impl CheckersGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Builds a session from a plain object; missing fields keep their defaults.
    pub fn with_config(config: JsValue) -> Result<CheckersGame, JsValue> {
        let config: SessionConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|err| JsValue::from_str(&format!("invalid config: {err}")))?;
        let session = GameSession::with_config(config)
            .map_err(|err| JsValue::from_str(&format!("invalid config: {err}")))?;
        Ok(Self { session })
    }

    /// Forwards a click in canvas pixels and returns a `ClickReply`.
    pub fn handle_click(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let result = self.session.handle_click(x, y);
        let reply = ClickReply {
            accepted: result.is_ok(),
            error: result.err().map(|err| err.to_string()),
            state: self.session.snapshot(),
        };
        to_js(&reply)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.resize(width, height);
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.snapshot())
    }

    pub fn winner(&self) -> Option<String> {
        self.session
            .winner()
            .map(|winner| winner.message().to_string())
    }
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
