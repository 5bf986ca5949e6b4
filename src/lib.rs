// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelly Bridge - turn Shelly input events into light commands.
//!
//! A Shelly input device (an i1, i3, or the input of a relay) publishes its
//! input state on MQTT, e.g. `shellies/<id>/input/0 → "1"`. This library
//! watches that stream and switches a light whenever the input genuinely
//! changes.
//!
//! # Pipeline
//!
//! ```text
//! InboundMessage → MessageFilter → TransitionDispatcher → Policy → Actuator
//!                  (scope check)   (baseline, dedup)      (toggle | direct)
//! ```
//!
//! - The first message after startup only establishes a baseline.
//! - Repeated payloads (retained or echoed messages) are ignored.
//! - **Direct** mode follows the input: `0` turns the light off, any other
//!   integer turns it on.
//! - **Toggle** mode reads the light's live status and flips it.
//!
//! Driving the light is up to the caller, through the [`Actuator`] trait.
//!
//! # Quick Start
//!
//! ```
//! use shelly_bridge::{Bridge, BridgeConfig, PolicyMode};
//! use shelly_bridge::actuator::MemoryActuator;
//! use shelly_bridge::message::InboundMessage;
//! use shelly_bridge::types::PowerState;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> shelly_bridge::Result<()> {
//! let config = BridgeConfig::from_json(
//!     r#"{"scope": "shellies/dev1/input/0", "actuator_ref": "light.hallway", "mode": "toggle"}"#,
//! )?;
//! let mut bridge = Bridge::new(config, MemoryActuator::with_status("off"));
//! assert_eq!(bridge.config().mode(), PolicyMode::Toggle);
//!
//! bridge.handle(&InboundMessage::new("shellies/dev1/input/0", "1")).await; // baseline
//! bridge.handle(&InboundMessage::new("shellies/dev1/input/0", "0")).await; // toggles
//!
//! assert_eq!(bridge.actuator().commands(), vec![PowerState::On]);
//! # Ok(())
//! # }
//! ```
//!
//! ## With an MQTT connection
//!
//! ```ignore
//! use rumqttc::{AsyncClient, MqttOptions};
//! use shelly_bridge::protocol::mqtt;
//!
//! let (client, mut event_loop) = AsyncClient::new(MqttOptions::new("bridge", "broker", 1883), 10);
//! mqtt::subscribe(&client, bridge.config().scope()).await?;
//! let reason = mqtt::run(&mut bridge, &mut event_loop).await;
//! ```

pub mod actuator;
mod bridge;
mod config;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod policy;
pub mod protocol;
pub mod types;

pub use actuator::Actuator;
pub use bridge::{Bridge, Outcome};
pub use config::{BridgeConfig, PolicyMode};
pub use dispatcher::{Dispatch, DispatchStats, TransitionDispatcher};
pub use error::{ActuatorError, ConfigError, Error, MessageError, ProtocolError, Result, ValueError};
pub use message::{AcceptedEvent, InboundMessage, MessageFilter, Rejection, Verdict};
pub use policy::{ActuationPolicy, DirectPolicy, Policy, TogglePolicy};
pub use types::{ActuatorRef, ActuatorStatus, InputLevel, Payload, PowerState, Scope};
