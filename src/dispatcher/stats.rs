// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dispatch counters.

use serde::Serialize;

/// Counters of dispatcher outcomes since construction.
///
/// `duplicates_after_failure` counts duplicates suppressed since the last
/// transition whose policy failed, until the next successful one. Those are the cases where the
/// light may be out of step with the input, because tracked state follows
/// the device even when the command did not go through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchStats {
    /// Baselines established.
    pub baselines: u64,
    /// Unchanged payloads suppressed.
    pub duplicates: u64,
    /// Genuine transitions processed.
    pub transitions: u64,
    /// Transitions whose policy returned an error.
    pub failures: u64,
    /// Duplicates suppressed since the last failed transition.
    pub duplicates_after_failure: u64,
}

impl DispatchStats {
    /// Returns the number of accepted events processed.
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.baselines + self.duplicates + self.transitions
    }
}
