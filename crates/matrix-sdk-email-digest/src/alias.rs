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

use ruma::events::StateEventType;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::{EventStore, RoomStateSnapshot};

/// Get the canonical alias of a room out of its state.
///
/// Returns `None` if the room has no `m.room.canonical_alias` state, if the
/// event can't be fetched, or if its `alias` isn't a string. Failures are
/// logged, never returned.
pub(crate) async fn resolve_canonical_alias<S: EventStore>(
    store: &S,
    state: &RoomStateSnapshot,
) -> Option<String> {
    let event_id = state.get(&StateEventType::RoomCanonicalAlias, "")?;

    let event = match store.get_event(event_id).await {
        Ok(event) => event,
        Err(error) => {
            warn!(%event_id, "Error fetching canonical alias: {error}");
            return None;
        }
    };

    match event.get_field::<JsonValue>("content") {
        Ok(content) => content?.get("alias")?.as_str().map(ToOwned::to_owned),
        Err(error) => {
            warn!(%event_id, "Error reading canonical alias content: {error}");
            None
        }
    }
}
