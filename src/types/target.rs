// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identifiers fixed at startup: the topic scope and the controlled light.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Topic prefix selecting the messages one bridge instance reacts to.
///
/// Matching is a plain string prefix test, so `shellies/dev1` also matches
/// `shellies/dev10/...`. Configure the full input topic to avoid that.
///
/// # Examples
///
/// ```
/// use shelly_bridge::types::Scope;
///
/// let scope = Scope::new("shellies/dev1/input/0");
/// assert!(scope.matches("shellies/dev1/input/0"));
/// assert!(!scope.matches("shellies/dev2/input/0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(String);

impl Scope {
    /// Creates a scope from a topic prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    /// Returns the topic prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `topic` falls within this scope.
    #[must_use]
    pub fn matches(&self, topic: &str) -> bool {
        topic.starts_with(&self.0)
    }

    /// Returns the narrowest MQTT subscription filter that receives every
    /// topic this scope matches.
    ///
    /// The last, possibly partial, topic level is replaced by `#`.
    ///
    /// ```
    /// use shelly_bridge::types::Scope;
    ///
    /// assert_eq!(Scope::new("shellies/dev1/input/0").subscription_filter(), "shellies/dev1/input/#");
    /// assert_eq!(Scope::new("shellies/").subscription_filter(), "shellies/#");
    /// assert_eq!(Scope::new("shellies").subscription_filter(), "#");
    /// ```
    #[must_use]
    pub fn subscription_filter(&self) -> String {
        match self.0.rsplit_once('/') {
            Some((parent, _)) => format!("{parent}/#"),
            None => "#".to_string(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of the controlled light (for example `light.hallway`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActuatorRef(String);

impl ActuatorRef {
    /// Creates a reference from an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActuatorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
