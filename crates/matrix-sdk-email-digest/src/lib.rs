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

//! Per-room view-models for Matrix email notification digests.
//!
//! For every room that has unread notifications, an email digest shows a
//! block with the room's name, avatar, canonical alias and the messages that
//! triggered the notifications. This crate builds that block, the
//! [`RoomVars`], out of data the digest pipeline already holds: the ordered
//! push notifications of the room, the events they point to and a snapshot of
//! the room state.
//!
//! Everything that requires knowledge of the homeserver (fetching events,
//! computing a room name, rendering a message) is delegated to the
//! [`EventStore`] and [`RoomPresenter`] traits.

#![warn(missing_docs, missing_debug_implementations)]

mod alias;
mod config;
mod error;
pub mod merge;
mod presenter;
mod room_vars;
mod state;
mod store;
#[cfg(test)]
mod test_utils;
mod vars;

pub use self::{
    config::DigestConfig,
    error::{Error, Result},
    presenter::{RoomPresenter, string_ordinal_total},
    room_vars::{EmailDigest, EmailDigestBuilder},
    state::RoomStateSnapshot,
    store::{EventStore, MemoryEventStore, MemoryEventStoreError},
    vars::{MessageVars, NotifVars, PushNotification, RoomVars},
};
