use serde::{Deserialize, Serialize};

use crate::error::{LogoError, LogoResult};
use crate::render::Renderer;

use super::{Logo, LogoSnapshot};

pub const LOGO_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: LogoSnapshot,
}

impl LogoSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> LogoResult<String> {
        let payload = LogoSnapshotJsonContractV1 {
            schema_version: LOGO_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            LogoError::InvalidConfig(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> LogoResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<LogoSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: LogoSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            LogoError::InvalidConfig(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != LOGO_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(LogoError::InvalidConfig(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> Logo<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> LogoResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
