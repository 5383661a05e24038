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

//! Error conditions.

use ruma::OwnedEventId;
use thiserror::Error;

/// Result type of the email digest builder.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can happen while building the view-model of a room.
///
/// Failures to resolve the canonical alias of a room are not part of this
/// list: they are logged and the alias is left out.
#[derive(Debug, Error)]
pub enum Error {
    /// A notification refers to an event that wasn't handed over with the
    /// other notification events.
    #[error("the event `{event_id}` of a notification is missing from the notification events")]
    MissingNotificationEvent {
        /// The event the notification points to.
        event_id: OwnedEventId,
    },

    /// The [`RoomPresenter`](crate::RoomPresenter) failed to compute one of
    /// the room fields or to render a notification.
    #[error(transparent)]
    Presenter(Box<dyn std::error::Error + Send + Sync>),

    /// The module configuration couldn't be parsed.
    #[error("invalid email digest configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}

impl Error {
    /// Create a new [`Presenter`][Self::Presenter] error.
    pub fn presenter<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Presenter(Box::new(error))
    }
}
