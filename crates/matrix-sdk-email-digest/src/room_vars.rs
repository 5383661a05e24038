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

use futures_util::future::{OptionFuture, join3};
use ruma::{
    OwnedEventId, RoomId, UserId,
    events::{AnyTimelineEvent, TimelineEventType, room::member::MembershipState},
    serde::Raw,
};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::{
    DigestConfig, Error, EventStore, PushNotification, Result, RoomPresenter, RoomStateSnapshot,
    RoomVars,
    alias::resolve_canonical_alias,
    merge::{MergeOutcome, merge_notif_vars},
};

/// Builds the per-room view-models of an email digest.
///
/// The digest pipeline decides which rooms and notifications go in a digest;
/// this only turns the notifications of one room into a [`RoomVars`]. Rooms
/// are independent, so several of them can be built concurrently.
#[derive(Debug)]
pub struct EmailDigest<S, P> {
    /// Where the canonical alias events are fetched from.
    store: S,

    /// Computes the room name and avatar, and renders the notifications.
    presenter: P,

    config: DigestConfig,
}

impl<S: EventStore, P: RoomPresenter> EmailDigest<S, P> {
    /// Create a new builder for an email digest.
    pub fn builder(store: S, presenter: P) -> EmailDigestBuilder<S, P> {
        EmailDigestBuilder::new(store, presenter)
    }

    /// The configuration this digest was built with.
    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Get the canonical alias of a room, given its state.
    ///
    /// Failures to fetch or read the `m.room.canonical_alias` event are
    /// logged and result in `None`.
    pub async fn canonical_alias(&self, state: &RoomStateSnapshot) -> Option<String> {
        resolve_canonical_alias(&self.store, state).await
    }

    /// Build the view-model of a room.
    ///
    /// # Arguments
    ///
    /// * `room_id` - The room to build the view-model for.
    ///
    /// * `user_id` - The user receiving the digest.
    ///
    /// * `notifs` - The unread notifications of the user in the room, oldest
    ///   first.
    ///
    /// * `notif_events` - The events of `notifs`, by event id. Every
    ///   notification must have its event in there.
    ///
    /// * `state` - The current state of the room.
    ///
    /// If one of the notifications is an invite of `user_id`, the view-model
    /// is an invite and has no digest entries. Otherwise every notification
    /// is rendered, and entries sharing messages with the one before them are
    /// merged, see [`merge_notif_vars`].
    #[instrument(skip_all, fields(room_id = ?room_id))]
    pub async fn build_room_vars(
        &self,
        room_id: &RoomId,
        user_id: &UserId,
        notifs: &[PushNotification],
        notif_events: &BTreeMap<OwnedEventId, Raw<AnyTimelineEvent>>,
        state: &RoomStateSnapshot,
    ) -> Result<RoomVars> {
        let mut is_invite = false;
        for notif in notifs {
            if is_invite_for(notif_event(notif_events, notif)?, user_id) {
                is_invite = true;
                break;
            }
        }

        let alias = OptionFuture::from(
            self.config.include_canonical_alias.then(|| self.canonical_alias(state)),
        );
        let (title, avatar_url, canonical_alias) = join3(
            self.presenter.room_name(state, user_id),
            self.presenter.room_avatar_url(state),
            alias,
        )
        .await;

        let mut room_vars = RoomVars {
            title: title.map_err(Error::presenter)?,
            hash: self.presenter.room_accent(room_id),
            notifs: Vec::new(),
            invite: is_invite,
            link: self.presenter.room_link(room_id),
            avatar_url: avatar_url.map_err(Error::presenter)?,
            canonical_alias: canonical_alias.flatten(),
        };

        if is_invite {
            debug!("The user was invited to the room, not rendering notifications");
            return Ok(room_vars);
        }

        for notif in notifs {
            let event = notif_event(notif_events, notif)?;
            let notif_vars = self
                .presenter
                .render_notification(notif, user_id, event, state)
                .await
                .map_err(Error::presenter)?;

            if let MergeOutcome::Distinct(notif_vars) =
                merge_notif_vars(&mut room_vars.notifs, notif_vars)
            {
                room_vars.notifs.push(notif_vars);
            }
        }

        Ok(room_vars)
    }
}

/// Builder for an [`EmailDigest`].
#[derive(Debug)]
pub struct EmailDigestBuilder<S, P> {
    store: S,
    presenter: P,
    config: DigestConfig,
}

impl<S: EventStore, P: RoomPresenter> EmailDigestBuilder<S, P> {
    fn new(store: S, presenter: P) -> Self {
        Self { store, presenter, config: DigestConfig::default() }
    }

    /// Use the given configuration, replacing anything set before.
    pub fn config(mut self, config: DigestConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether to look up the canonical alias of the rooms.
    ///
    /// Enabled by default.
    pub fn include_canonical_alias(mut self, include: bool) -> Self {
        self.config.include_canonical_alias = include;
        self
    }

    /// Finishes configuring the [`EmailDigest`].
    pub fn build(self) -> EmailDigest<S, P> {
        info!(
            include_canonical_alias = self.config.include_canonical_alias,
            "Initializing the email digest room builder"
        );

        EmailDigest { store: self.store, presenter: self.presenter, config: self.config }
    }
}

fn notif_event<'a>(
    notif_events: &'a BTreeMap<OwnedEventId, Raw<AnyTimelineEvent>>,
    notif: &PushNotification,
) -> Result<&'a Raw<AnyTimelineEvent>> {
    notif_events
        .get(&notif.event_id)
        .ok_or_else(|| Error::MissingNotificationEvent { event_id: notif.event_id.clone() })
}

#[derive(Deserialize)]
struct MembershipContent {
    membership: MembershipState,
}

/// Whether `event` is an invite of `user_id` in the room.
fn is_invite_for(event: &Raw<AnyTimelineEvent>, user_id: &UserId) -> bool {
    let is_member_event = event
        .get_field::<TimelineEventType>("type")
        .ok()
        .flatten()
        .is_some_and(|event_type| event_type == TimelineEventType::RoomMember);

    let is_about_user = event
        .get_field::<String>("state_key")
        .ok()
        .flatten()
        .is_some_and(|state_key| state_key == user_id.as_str());

    is_member_event
        && is_about_user
        && event
            .get_field::<MembershipContent>("content")
            .ok()
            .flatten()
            .is_some_and(|content| content.membership == MembershipState::Invite)
}
