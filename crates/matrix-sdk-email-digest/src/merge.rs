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

//! Merging of overlapping digest entries.
//!
//! Consecutive notifications of a room often render overlapping windows of
//! messages. Instead of showing the same message twice, the entry of a
//! notification is folded into the previous entry as soon as one of its
//! messages is already there.
//!
//! This relies on the notifications being processed in chronological order.

use tracing::trace;

use crate::{MessageVars, NotifVars};

/// What happened to a digest entry passed to [`merge_notif_vars`].
#[derive(Debug)]
pub enum MergeOutcome {
    /// The entry overlapped with the last one and was folded into it.
    Merged,
    /// The entry doesn't overlap with the last one, it must be added as a new
    /// entry.
    Distinct(NotifVars),
}

/// Try to fold `new` into the last entry of `previous`.
///
/// Nothing happens until a message of `new` is found in the last entry.
/// From that point on:
/// - messages already in the last entry are not duplicated, but lose their
///   historical flag if the new one isn't historical,
/// - other messages are appended to the last entry.
///
/// Messages of `new` coming before the first overlapping one are dropped.
pub fn merge_notif_vars(previous: &mut [NotifVars], new: NotifVars) -> MergeOutcome {
    let Some(last) = previous.last_mut() else {
        return MergeOutcome::Distinct(new);
    };

    let Some(first_overlap) = new.messages.iter().position(|message| contains(last, message))
    else {
        return MergeOutcome::Distinct(new);
    };

    trace!(
        overlap = %new.messages[first_overlap].id,
        "Merging a notification into the previous one"
    );

    for message in new.messages.into_iter().skip(first_overlap) {
        if let Some(previous_message) = last.messages.iter_mut().find(|pm| pm.id == message.id) {
            if !message.is_historical {
                previous_message.is_historical = false;
            }
        } else {
            last.messages.push(message);
        }
    }

    MergeOutcome::Merged
}

fn contains(notif: &NotifVars, message: &MessageVars) -> bool {
    notif.messages.iter().any(|pm| pm.id == message.id)
}
