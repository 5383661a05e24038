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

use std::fmt;

use async_trait::async_trait;
use ruma::{RoomId, UserId, events::AnyTimelineEvent, serde::Raw};

use crate::{NotifVars, PushNotification, RoomStateSnapshot};

/// The parts of the digest that depend on how the homeserver presents rooms
/// and messages.
///
/// Errors returned by the methods of this trait abort the building of the
/// room's view-model and are forwarded to the caller as
/// [`Error::Presenter`](crate::Error::Presenter).
#[async_trait]
pub trait RoomPresenter: fmt::Debug + Send + Sync {
    /// The error type used by this presenter.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Compute the name of the room, as seen by `user_id`.
    async fn room_name(
        &self,
        state: &RoomStateSnapshot,
        user_id: &UserId,
    ) -> Result<String, Self::Error>;

    /// Get the URL of the room's avatar, if it has one.
    async fn room_avatar_url(
        &self,
        state: &RoomStateSnapshot,
    ) -> Result<Option<String>, Self::Error>;

    /// Render a notification into a digest entry.
    ///
    /// # Arguments
    ///
    /// * `notification` - The notification to render.
    ///
    /// * `user_id` - The user receiving the digest.
    ///
    /// * `event` - The event `notification` points to.
    ///
    /// * `state` - The state of the room the notification happened in.
    async fn render_notification(
        &self,
        notification: &PushNotification,
        user_id: &UserId,
        event: &Raw<AnyTimelineEvent>,
        state: &RoomStateSnapshot,
    ) -> Result<NotifVars, Self::Error>;

    /// Build a link to the room.
    ///
    /// Defaults to a `matrix.to` link.
    fn room_link(&self, room_id: &RoomId) -> String {
        room_id.matrix_to_uri().to_string()
    }

    /// Derive the accent of the room from its id.
    ///
    /// The result must only depend on `room_id`. Defaults to
    /// [`string_ordinal_total`].
    fn room_accent(&self, room_id: &RoomId) -> u64 {
        string_ordinal_total(room_id.as_str())
    }
}

/// The sum of the code points of the characters of `s`.
pub fn string_ordinal_total(s: &str) -> u64 {
    s.chars().map(u64::from).sum()
}
