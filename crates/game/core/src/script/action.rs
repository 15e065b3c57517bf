//! Editor-authored script actions.

use crate::state::Value;

/// Names of the built-in action kinds, exactly as the editor writes them.
///
/// `strum` keeps the names in lockstep with the wire format: `Display` and
/// `AsRefStr` render snake_case, `EnumString` parses it back
/// case-insensitively.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    ShowDialog,
    Wait,
    SetFlag,
    SetVariable,
    AddVariable,
    CheckFlag,
    CheckItem,
    GiveItem,
    RemoveItem,
    Teleport,
    LockInput,
    UnlockInput,
    CameraPan,
    CameraFollow,
    RemoveEntity,
}

/// One step of an editor-authored script.
///
/// Parameters are typed per kind. Defaulting of missing editor fields happens
/// once, at the content boundary; by the time an action reaches the
/// interpreter its fields are final. Kinds this build does not know arrive as
/// [`ScriptAction::Unknown`] and execute as logged no-ops, so stages written
/// by a newer editor still run.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptAction {
    ShowDialog { text: String, seconds: f32 },
    Wait { seconds: f32 },
    SetFlag { flag: String, value: bool },
    SetVariable { variable: String, value: Value },
    AddVariable { variable: String, amount: f64 },
    CheckFlag { flag: String, expected: bool },
    CheckItem { item: String, amount: u32 },
    GiveItem { item: String, amount: u32 },
    RemoveItem { item: String, amount: u32 },
    Teleport { spawn: String },
    LockInput,
    UnlockInput,
    CameraPan { x: f32, y: f32, seconds: f32 },
    CameraFollow,
    RemoveEntity,
    Unknown { kind: String },
}

impl ScriptAction {
    /// The kind of this action; `None` for [`ScriptAction::Unknown`].
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Self::ShowDialog { .. } => Some(ActionKind::ShowDialog),
            Self::Wait { .. } => Some(ActionKind::Wait),
            Self::SetFlag { .. } => Some(ActionKind::SetFlag),
            Self::SetVariable { .. } => Some(ActionKind::SetVariable),
            Self::AddVariable { .. } => Some(ActionKind::AddVariable),
            Self::CheckFlag { .. } => Some(ActionKind::CheckFlag),
            Self::CheckItem { .. } => Some(ActionKind::CheckItem),
            Self::GiveItem { .. } => Some(ActionKind::GiveItem),
            Self::RemoveItem { .. } => Some(ActionKind::RemoveItem),
            Self::Teleport { .. } => Some(ActionKind::Teleport),
            Self::LockInput => Some(ActionKind::LockInput),
            Self::UnlockInput => Some(ActionKind::UnlockInput),
            Self::CameraPan { .. } => Some(ActionKind::CameraPan),
            Self::CameraFollow => Some(ActionKind::CameraFollow),
            Self::RemoveEntity => Some(ActionKind::RemoveEntity),
            Self::Unknown { .. } => None,
        }
    }

    /// The wire name of this action's kind. [`ScriptAction::Unknown`] reports
    /// the name it arrived with.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Unknown { kind } => kind,
            other => match other.kind() {
                Some(kind) => {
                    let name: &'static str = kind.into();
                    name
                }
                None => "unknown",
            },
        }
    }
}
