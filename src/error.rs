// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the bridge.
//!
//! Only [`ConfigError`] is fatal: it prevents a [`Bridge`](crate::Bridge) from
//! being constructed. Every other error is caught by the dispatcher, logged,
//! and the message that caused it is considered consumed.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The bridge configuration is incomplete or unreadable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An inbound message violated the expected message shape.
    #[error("message error: {0}")]
    Message(#[from] MessageError),

    /// A payload could not be converted to the value a policy needs.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A call to the actuator failed.
    #[error("actuator error: {0}")]
    Actuator(#[from] ActuatorError),

    /// The MQTT transport failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors raised while loading the bridge configuration.
///
/// These are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field is absent.
    #[error("missing required configuration: '{0}'")]
    MissingField(&'static str),

    /// The `mode` field names an unknown policy.
    #[error("unknown policy mode: {0}")]
    InvalidMode(String),

    /// The configuration document is not valid JSON or has wrong types.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors describing protocol violations in inbound messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// A message on an accepted topic carried no payload.
    #[error("message on topic {topic} has no payload")]
    MissingPayload {
        /// The topic the message was published on.
        topic: String,
    },
}

/// Errors related to payload value conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The payload is not an integer.
    #[error("payload {0:?} is not an integer")]
    NotAnInteger(String),
}

/// Errors reported by an [`Actuator`](crate::actuator::Actuator).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActuatorError {
    /// Reading the current status failed.
    #[error("failed to read status of {target}: {message}")]
    StatusUnavailable {
        /// The actuator that was queried.
        target: String,
        /// Description of the failure.
        message: String,
    },

    /// A command was not carried out.
    #[error("command {command} to {target} failed: {message}")]
    CommandFailed {
        /// The actuator that was commanded.
        target: String,
        /// The command that failed (`on` or `off`).
        command: String,
        /// Description of the failure.
        message: String,
    },
}

/// Errors from the MQTT transport adapter.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A request to the MQTT client failed.
    #[cfg(feature = "mqtt")]
    #[error("MQTT error: {0}")]
    Mqtt(#[from] rumqttc::ClientError),

    /// The MQTT connection failed.
    #[cfg(feature = "mqtt")]
    #[error("MQTT connection error: {0}")]
    Connection(Box<rumqttc::ConnectionError>),

    /// The broker closed the session.
    #[error("broker disconnected")]
    Disconnected,
}

#[cfg(feature = "mqtt")]
impl From<rumqttc::ConnectionError> for ProtocolError {
    fn from(err: rumqttc::ConnectionError) -> Self {
        Self::Connection(Box::new(err))
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
