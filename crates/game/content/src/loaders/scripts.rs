//! Script decoding: editor JSON to typed actions and back.
//!
//! Wire shape per step: `{"kind": "show_dialog", "params": {...}}`. Missing
//! parameters take the kind's defaults here, once; by the time a script
//! reaches the interpreter every field is final. Unrecognized kinds become
//! [`ScriptAction::Unknown`] carrying the kind name, so a stage written by a
//! newer editor still loads and runs around them.

use std::str::FromStr;

use harrow_core::{ActionKind, ScriptAction, Value};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};
use tracing::debug;

/// Dialog stays up this long when the editor leaves `seconds` out.
pub const DEFAULT_DIALOG_SECONDS: f32 = 2.0;
/// Camera pans take this long when the editor leaves `seconds` out.
pub const DEFAULT_PAN_SECONDS: f32 = 1.0;

/// One script step exactly as the editor writes it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Json>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: Map::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: Json) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }
}

fn text(params: &Map<String, Json>, key: &str, default: &str) -> String {
    params
        .get(key)
        .and_then(Json::as_str)
        .unwrap_or(default)
        .to_string()
}

fn number(params: &Map<String, Json>, key: &str, default: f64) -> f64 {
    params.get(key).and_then(Json::as_f64).unwrap_or(default)
}

fn seconds(params: &Map<String, Json>, key: &str, default: f32) -> f32 {
    number(params, key, default.into()) as f32
}

fn boolean(params: &Map<String, Json>, key: &str, default: bool) -> bool {
    params.get(key).and_then(Json::as_bool).unwrap_or(default)
}

fn amount(params: &Map<String, Json>, key: &str, default: u32) -> u32 {
    params
        .get(key)
        .and_then(Json::as_f64)
        .map(|n| n.max(0.0) as u32)
        .unwrap_or(default)
}

/// Variable payloads are scalars. Anything else the editor managed to write
/// degrades to its JSON text rather than failing the load.
fn scalar(params: &Map<String, Json>, key: &str) -> Value {
    match params.get(key) {
        Some(Json::Bool(b)) => Value::Bool(*b),
        Some(Json::Number(n)) => Value::Number(n.as_f64().unwrap_or(0.0)),
        Some(Json::String(s)) => Value::Text(s.clone()),
        Some(other) => {
            debug!(value = %other, "non-scalar variable payload kept as text");
            Value::Text(other.to_string())
        }
        None => Value::Number(0.0),
    }
}

/// Decodes one editor step, applying the kind's parameter defaults.
pub fn decode_action(raw: &RawAction) -> ScriptAction {
    let Ok(kind) = ActionKind::from_str(&raw.kind) else {
        debug!(kind = %raw.kind, "unrecognized action kind kept as-is");
        return ScriptAction::Unknown {
            kind: raw.kind.clone(),
        };
    };
    let p = &raw.params;
    match kind {
        ActionKind::ShowDialog => ScriptAction::ShowDialog {
            text: text(p, "text", ""),
            seconds: seconds(p, "seconds", DEFAULT_DIALOG_SECONDS),
        },
        ActionKind::Wait => ScriptAction::Wait {
            seconds: seconds(p, "seconds", 0.0),
        },
        ActionKind::SetFlag => ScriptAction::SetFlag {
            flag: text(p, "flag", ""),
            value: boolean(p, "value", true),
        },
        ActionKind::SetVariable => ScriptAction::SetVariable {
            variable: text(p, "variable", ""),
            value: scalar(p, "value"),
        },
        ActionKind::AddVariable => ScriptAction::AddVariable {
            variable: text(p, "variable", ""),
            amount: number(p, "amount", 1.0),
        },
        ActionKind::CheckFlag => ScriptAction::CheckFlag {
            flag: text(p, "flag", ""),
            expected: boolean(p, "expected", true),
        },
        ActionKind::CheckItem => ScriptAction::CheckItem {
            item: text(p, "item", ""),
            amount: amount(p, "amount", 1),
        },
        ActionKind::GiveItem => ScriptAction::GiveItem {
            item: text(p, "item", ""),
            amount: amount(p, "amount", 1),
        },
        ActionKind::RemoveItem => ScriptAction::RemoveItem {
            item: text(p, "item", ""),
            amount: amount(p, "amount", 1),
        },
        ActionKind::Teleport => ScriptAction::Teleport {
            spawn: text(p, "spawn", ""),
        },
        ActionKind::LockInput => ScriptAction::LockInput,
        ActionKind::UnlockInput => ScriptAction::UnlockInput,
        ActionKind::CameraPan => ScriptAction::CameraPan {
            x: number(p, "x", 0.0) as f32,
            y: number(p, "y", 0.0) as f32,
            seconds: seconds(p, "seconds", DEFAULT_PAN_SECONDS),
        },
        ActionKind::CameraFollow => ScriptAction::CameraFollow,
        ActionKind::RemoveEntity => ScriptAction::RemoveEntity,
    }
}

/// Decodes a whole script in order.
pub fn decode_script(raw: &[RawAction]) -> Vec<ScriptAction> {
    raw.iter().map(decode_action).collect()
}

/// Encodes one action back to the editor shape. [`ScriptAction::Unknown`]
/// keeps its kind name; its original parameters were not retained.
pub fn encode_action(action: &ScriptAction) -> RawAction {
    fn num(n: f64) -> Json {
        serde_json::Number::from_f64(n).map_or(Json::Null, Json::Number)
    }
    let value_json = |value: &Value| match value {
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => num(*n),
        Value::Text(s) => Json::String(s.clone()),
    };

    let raw = RawAction::new(action.kind_name());
    match action {
        ScriptAction::ShowDialog { text, seconds } => raw
            .with_param("text", Json::String(text.clone()))
            .with_param("seconds", num((*seconds).into())),
        ScriptAction::Wait { seconds } => raw.with_param("seconds", num((*seconds).into())),
        ScriptAction::SetFlag { flag, value } => raw
            .with_param("flag", Json::String(flag.clone()))
            .with_param("value", Json::Bool(*value)),
        ScriptAction::SetVariable { variable, value } => raw
            .with_param("variable", Json::String(variable.clone()))
            .with_param("value", value_json(value)),
        ScriptAction::AddVariable { variable, amount } => raw
            .with_param("variable", Json::String(variable.clone()))
            .with_param("amount", num(*amount)),
        ScriptAction::CheckFlag { flag, expected } => raw
            .with_param("flag", Json::String(flag.clone()))
            .with_param("expected", Json::Bool(*expected)),
        ScriptAction::CheckItem { item, amount }
        | ScriptAction::GiveItem { item, amount }
        | ScriptAction::RemoveItem { item, amount } => raw
            .with_param("item", Json::String(item.clone()))
            .with_param("amount", Json::Number((*amount).into())),
        ScriptAction::Teleport { spawn } => raw.with_param("spawn", Json::String(spawn.clone())),
        ScriptAction::CameraPan { x, y, seconds } => raw
            .with_param("x", num((*x).into()))
            .with_param("y", num((*y).into()))
            .with_param("seconds", num((*seconds).into())),
        ScriptAction::LockInput
        | ScriptAction::UnlockInput
        | ScriptAction::CameraFollow
        | ScriptAction::RemoveEntity
        | ScriptAction::Unknown { .. } => raw,
    }
}

/// Encodes a whole script in order.
pub fn encode_script(actions: &[ScriptAction]) -> Vec<RawAction> {
    actions.iter().map(encode_action).collect()
}
