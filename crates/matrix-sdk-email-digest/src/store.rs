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

use std::{collections::BTreeMap, fmt};

use async_trait::async_trait;
use ruma::{EventId, OwnedEventId, events::AnyTimelineEvent, serde::Raw};
use thiserror::Error;

/// Access to the events of the homeserver.
#[async_trait]
pub trait EventStore: fmt::Debug + Send + Sync {
    /// The error type used by this event store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get an event by its id.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The id of the event to fetch.
    async fn get_event(&self, event_id: &EventId) -> Result<Raw<AnyTimelineEvent>, Self::Error>;
}

/// Error of the [`MemoryEventStore`].
#[derive(Debug, Error)]
pub enum MemoryEventStoreError {
    /// No event with this id was added to the store.
    #[error("event `{0}` not found")]
    EventNotFound(OwnedEventId),
}

/// In-memory, non-persistent implementation of the [`EventStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryEventStore {
    events: BTreeMap<OwnedEventId, Raw<AnyTimelineEvent>>,
}

impl MemoryEventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to the store, replacing any event with the same id.
    pub fn add_event(&mut self, event_id: OwnedEventId, event: Raw<AnyTimelineEvent>) {
        self.events.insert(event_id, event);
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    type Error = MemoryEventStoreError;

    async fn get_event(&self, event_id: &EventId) -> Result<Raw<AnyTimelineEvent>, Self::Error> {
        self.events
            .get(event_id)
            .cloned()
            .ok_or_else(|| MemoryEventStoreError::EventNotFound(event_id.to_owned()))
    }
}
