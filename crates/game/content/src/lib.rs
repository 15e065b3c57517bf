//! Editor data loaders for stages and scripts.
//!
//! The editor writes plain JSON. This crate owns the wire shapes (script
//! steps as `{"kind", "params"}` objects, stage files with spawn points,
//! entities, and triggers), the per-kind parameter defaults, and the
//! conversion into `harrow-core` types. Defaulting and validation happen
//! here, exactly once; core code trusts what this crate hands it.

pub mod loaders;

pub use loaders::{
    EntityData, LoadResult, RawAction, StageData, StageLoader, TriggerData, decode_action,
    decode_script, encode_action, encode_script,
};
