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

//! The view-models handed over to the email templates.

use ruma::{MilliSecondsSinceUnixEpoch, OwnedEventId, OwnedRoomId, push::Action};
use serde::Serialize;

/// An unread notification of a user, as stored by the push pipeline.
#[derive(Clone, Debug)]
pub struct PushNotification {
    /// The event that triggered the notification.
    pub event_id: OwnedEventId,
    /// The room the event was sent in.
    ///
    /// Not used to build the room's view-model, handed over to
    /// [`RoomPresenter::render_notification`](crate::RoomPresenter::render_notification)
    /// like the fields below.
    pub room_id: OwnedRoomId,
    /// Position of the event in the server's event stream, for the
    /// presenter.
    pub stream_ordering: i64,
    /// The push actions that applied to the event, e.g. for the presenter to
    /// highlight it.
    pub actions: Vec<Action>,
    /// When the notification was received, if known, for the presenter.
    pub received_ts: Option<MilliSecondsSinceUnixEpoch>,
}

impl PushNotification {
    /// Create a notification with no push actions and no reception time.
    pub fn new(event_id: OwnedEventId, room_id: OwnedRoomId, stream_ordering: i64) -> Self {
        Self { event_id, room_id, stream_ordering, actions: Vec::new(), received_ts: None }
    }
}

/// A single message shown in a digest entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageVars {
    /// The id of the event of this message.
    pub id: OwnedEventId,
    /// Whether this message is only there for context, i.e. the user already
    /// read it.
    pub is_historical: bool,
    /// When the message was sent.
    pub ts: Option<MilliSecondsSinceUnixEpoch>,
    /// The type of the event, e.g. `m.room.message`.
    pub event_type: String,
    /// Display name of the sender.
    pub sender_name: Option<String>,
    /// Avatar URL of the sender.
    pub sender_avatar_url: Option<String>,
    /// Accent of the sender, derived from their user id.
    pub sender_hash: u64,
    /// The `msgtype` of the message, if it's a room message.
    pub msgtype: Option<String>,
    /// The body of the message, as HTML.
    pub body_text_html: Option<String>,
    /// The format of the original body, e.g. `org.matrix.custom.html`.
    pub format: Option<String>,
    /// URL of the image, for image messages.
    pub image_url: Option<String>,
}

impl MessageVars {
    /// Create a message with the given id and no display fields.
    pub fn new(id: OwnedEventId, is_historical: bool) -> Self {
        Self {
            id,
            is_historical,
            ts: None,
            event_type: String::new(),
            sender_name: None,
            sender_avatar_url: None,
            sender_hash: 0,
            msgtype: None,
            body_text_html: None,
            format: None,
            image_url: None,
        }
    }
}

/// One entry of a room in the digest: a notification along with the messages
/// around it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NotifVars {
    /// Link to the notification's event.
    pub link: String,
    /// When the notification's event was sent.
    pub ts: Option<MilliSecondsSinceUnixEpoch>,
    /// The messages to show, oldest first.
    pub messages: Vec<MessageVars>,
}

impl NotifVars {
    /// Create an entry with the given messages.
    pub fn new(link: impl Into<String>, messages: Vec<MessageVars>) -> Self {
        Self { link: link.into(), ts: None, messages }
    }
}

/// The view-model of one room in the digest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoomVars {
    /// The display name of the room.
    pub title: String,
    /// A value derived from the room id, used to pick the accent color of the
    /// room.
    pub hash: u64,
    /// The digest entries of the room, oldest first.
    ///
    /// Always empty for invites.
    pub notifs: Vec<NotifVars>,
    /// Whether the user was invited to this room.
    pub invite: bool,
    /// Link to the room.
    pub link: String,
    /// The avatar of the room, if any.
    pub avatar_url: Option<String>,
    /// The canonical alias of the room, if it has a valid one.
    pub canonical_alias: Option<String>,
}
