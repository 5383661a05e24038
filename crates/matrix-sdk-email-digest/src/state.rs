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

use std::collections::BTreeMap;

use ruma::{EventId, OwnedEventId, events::StateEventType};

/// The ids of the state events of a room, at the time the digest is
/// generated.
///
/// Maps an event type and a state key to the id of the event currently
/// holding that state.
#[derive(Clone, Debug, Default)]
pub struct RoomStateSnapshot {
    events: BTreeMap<StateEventType, BTreeMap<String, OwnedEventId>>,
}

impl RoomStateSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event holding the state for `event_type` and `state_key`,
    /// replacing any previous one.
    pub fn insert(
        &mut self,
        event_type: StateEventType,
        state_key: impl Into<String>,
        event_id: OwnedEventId,
    ) {
        self.events.entry(event_type).or_default().insert(state_key.into(), event_id);
    }

    /// Get the id of the event holding the state for `event_type` and
    /// `state_key`.
    pub fn get(&self, event_type: &StateEventType, state_key: &str) -> Option<&EventId> {
        self.events.get(event_type)?.get(state_key).map(|event_id| &**event_id)
    }

    /// Number of state entries in the snapshot.
    pub fn len(&self) -> usize {
        self.events.values().map(BTreeMap::len).sum()
    }

    /// Whether the snapshot has no state entry at all.
    pub fn is_empty(&self) -> bool {
        self.events.values().all(BTreeMap::is_empty)
    }
}

impl FromIterator<(StateEventType, String, OwnedEventId)> for RoomStateSnapshot {
    fn from_iter<I: IntoIterator<Item = (StateEventType, String, OwnedEventId)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (event_type, state_key, event_id) in iter {
            snapshot.insert(event_type, state_key, event_id);
        }
        snapshot
    }
}
