// Copyright 2025 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration of the [`EmailDigest`](crate::EmailDigest).
///
/// This is what the homeserver passes to the module in its `config` section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DigestConfig {
    /// Look up the `m.room.canonical_alias` of each room and expose it in
    /// [`RoomVars::canonical_alias`](crate::RoomVars::canonical_alias).
    ///
    /// When disabled, the room view-models are the same as the ones of the
    /// stock mailer.
    pub include_canonical_alias: bool,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self { include_canonical_alias: true }
    }
}

impl DigestConfig {
    /// Parse the configuration from the module section of the homeserver
    /// configuration.
    ///
    /// A `null` section is the same as an empty one.
    pub fn from_module_config(config: serde_json::Value) -> Result<Self> {
        if config.is_null() {
            return Ok(Self::default());
        }

        serde_json::from_value(config).map_err(Error::InvalidConfig)
    }
}
