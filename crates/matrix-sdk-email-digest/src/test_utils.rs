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

//! Helpers shared by the unit tests of this crate.

use std::{collections::BTreeMap, convert::Infallible};

use async_trait::async_trait;
use ruma::{
    EventId, OwnedEventId, OwnedRoomId, RoomId, UserId, events::AnyTimelineEvent, serde::Raw,
};
use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use crate::{
    EventStore, MessageVars, NotifVars, PushNotification, RoomPresenter, RoomStateSnapshot,
};

pub(crate) fn raw_event(json: JsonValue) -> Raw<AnyTimelineEvent> {
    Raw::new(&json).unwrap().cast_unchecked()
}

pub(crate) fn canonical_alias_event(event_id: &str, alias: &str) -> Raw<AnyTimelineEvent> {
    raw_event(json!({
        "content": { "alias": alias },
        "event_id": event_id,
        "origin_server_ts": 152037280,
        "room_id": "!room:example.org",
        "sender": "@alice:example.org",
        "state_key": "",
        "type": "m.room.canonical_alias",
    }))
}

pub(crate) fn member_event(
    event_id: &str,
    state_key: &str,
    membership: &str,
) -> Raw<AnyTimelineEvent> {
    raw_event(json!({
        "content": { "membership": membership },
        "event_id": event_id,
        "origin_server_ts": 152037280,
        "room_id": "!room:example.org",
        "sender": "@alice:example.org",
        "state_key": state_key,
        "type": "m.room.member",
    }))
}

pub(crate) fn message_event(event_id: &str, body: &str) -> Raw<AnyTimelineEvent> {
    raw_event(json!({
        "content": { "body": body, "msgtype": "m.text" },
        "event_id": event_id,
        "origin_server_ts": 152037280,
        "room_id": "!room:example.org",
        "sender": "@alice:example.org",
        "type": "m.room.message",
    }))
}

pub(crate) fn notification(event_id: &str, stream_ordering: i64) -> PushNotification {
    PushNotification::new(
        OwnedEventId::try_from(event_id).unwrap(),
        OwnedRoomId::try_from("!room:example.org").unwrap(),
        stream_ordering,
    )
}

/// Build a digest entry out of `(event id, is historical)` pairs.
pub(crate) fn notif_vars(messages: &[(&str, bool)]) -> NotifVars {
    NotifVars::new(
        "https://matrix.to/#/!room:example.org",
        messages
            .iter()
            .map(|(event_id, is_historical)| {
                MessageVars::new(OwnedEventId::try_from(*event_id).unwrap(), *is_historical)
            })
            .collect(),
    )
}

/// The ids of the messages of each digest entry.
pub(crate) fn message_ids(notifs: &[NotifVars]) -> Vec<Vec<&str>> {
    notifs
        .iter()
        .map(|notif| notif.messages.iter().map(|message| message.id.as_str()).collect())
        .collect()
}

/// An event store that fails every request.
#[derive(Debug)]
pub(crate) struct FailingEventStore;

#[derive(Debug, Error)]
#[error("the event store is unreachable")]
pub(crate) struct UnreachableStore;

#[async_trait]
impl EventStore for FailingEventStore {
    type Error = UnreachableStore;

    async fn get_event(&self, _: &EventId) -> Result<Raw<AnyTimelineEvent>, Self::Error> {
        Err(UnreachableStore)
    }
}

/// A presenter returning canned digest entries for each notification event.
#[derive(Debug, Default)]
pub(crate) struct TestPresenter {
    pub(crate) rendered: BTreeMap<OwnedEventId, NotifVars>,
}

impl TestPresenter {
    pub(crate) fn with_rendered(mut self, event_id: &str, notif: NotifVars) -> Self {
        self.rendered.insert(OwnedEventId::try_from(event_id).unwrap(), notif);
        self
    }
}

#[async_trait]
impl RoomPresenter for TestPresenter {
    type Error = Infallible;

    async fn room_name(
        &self,
        _state: &RoomStateSnapshot,
        _user_id: &UserId,
    ) -> Result<String, Self::Error> {
        Ok("Test room".to_owned())
    }

    async fn room_avatar_url(
        &self,
        _state: &RoomStateSnapshot,
    ) -> Result<Option<String>, Self::Error> {
        Ok(Some("mxc://example.org/avatar".to_owned()))
    }

    async fn render_notification(
        &self,
        notification: &PushNotification,
        _user_id: &UserId,
        _event: &Raw<AnyTimelineEvent>,
        _state: &RoomStateSnapshot,
    ) -> Result<NotifVars, Self::Error> {
        Ok(self.rendered.get(&notification.event_id).cloned().unwrap_or_default())
    }

    fn room_link(&self, room_id: &RoomId) -> String {
        format!("https://app.example.org/#/room/{room_id}")
    }
}
