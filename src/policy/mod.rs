// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Actuation policies.
//!
//! A policy decides which command a genuine input transition produces and
//! issues it. Policies never see or touch the dispatcher's tracked state.
//!
//! # Policies
//!
//! - [`DirectPolicy`]: the light follows the input value
//! - [`TogglePolicy`]: every transition flips the light's live status
//!
//! [`Policy`] selects one of them from the configured
//! [`PolicyMode`](crate::PolicyMode).

mod direct;
mod toggle;

pub use direct::DirectPolicy;
pub use toggle::TogglePolicy;

use crate::PolicyMode;
use crate::actuator::Actuator;
use crate::error::Error;
use crate::types::{ActuatorRef, Payload, PowerState};

/// Trait for turning a new input payload into an actuator command.
#[allow(async_fn_in_trait)]
pub trait ActuationPolicy {
    /// Applies the policy to a new payload and returns the commanded state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if the payload cannot be interpreted and
    /// [`Error::Actuator`] if an actuator call fails.
    async fn apply<A: Actuator>(
        &self,
        payload: &Payload,
        actuator: &A,
        target: &ActuatorRef,
    ) -> Result<PowerState, Error>;
}

/// The policy selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// See [`DirectPolicy`].
    Direct(DirectPolicy),
    /// See [`TogglePolicy`].
    Toggle(TogglePolicy),
}

impl Policy {
    /// Returns the mode this policy implements.
    #[must_use]
    pub const fn mode(&self) -> PolicyMode {
        match self {
            Self::Direct(_) => PolicyMode::Direct,
            Self::Toggle(_) => PolicyMode::Toggle,
        }
    }
}

impl From<PolicyMode> for Policy {
    fn from(mode: PolicyMode) -> Self {
        match mode {
            PolicyMode::Direct => Self::Direct(DirectPolicy),
            PolicyMode::Toggle => Self::Toggle(TogglePolicy),
        }
    }
}

impl ActuationPolicy for Policy {
    async fn apply<A: Actuator>(
        &self,
        payload: &Payload,
        actuator: &A,
        target: &ActuatorRef,
    ) -> Result<PowerState, Error> {
        match self {
            Self::Direct(policy) => policy.apply(payload, actuator, target).await,
            Self::Toggle(policy) => policy.apply(payload, actuator, target).await,
        }
    }
}
