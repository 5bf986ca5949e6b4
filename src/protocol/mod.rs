// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport adapters.
//!
//! The bridge core is transport agnostic: it consumes
//! [`InboundMessage`](crate::message::InboundMessage)s from any source. With
//! the `mqtt` feature, [`mqtt`] connects it to a caller-owned `rumqttc`
//! client.

#[cfg(feature = "mqtt")]
pub mod mqtt;
