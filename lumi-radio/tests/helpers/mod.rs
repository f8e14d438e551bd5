//! Shared mock transport for the integration tests.
//!
//! The mock records every call and pops scripted replies from a queue, so a
//! test keeps one handle for inspection while the player owns a boxed clone.

// Not every test binary uses every helper
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use lumi_radio::{DeviceInfo, MiioError, MiioTransport, RadioMediaPlayer};
use serde_json::{json, Value};

/// Recording transport with scripted replies.
///
/// When the reply queue is empty, calls succeed with `["ok"]`.
#[derive(Clone, Default)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    replies: Arc<Mutex<VecDeque<Result<Value, MiioError>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next call.
    pub fn push_reply(&self, reply: Result<Value, MiioError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Queue a `miIO.info` reply for [`test_device_info`].
    pub fn push_info(&self) {
        self.push_reply(Ok(json!({
            "model": "lumi.gateway.v3",
            "fw_ver": "1.4.1_164",
            "hw_ver": "MW300",
            "mac": "28:6C:07:AA:BB:CC",
        })));
    }

    /// Queue a `get_prop_fm` reply.
    pub fn push_properties(&self, status: &str, volume: i64) {
        self.push_reply(Ok(json!({
            "current_status": status,
            "current_volume": volume,
        })));
    }

    /// Queue a transport-level failure.
    pub fn push_network_error(&self) {
        self.push_reply(Err(MiioError::Network("connection timed out".to_string())));
    }

    /// All calls recorded so far as (method, params) pairs.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent call.
    pub fn last_call(&self) -> (String, Value) {
        self.calls().last().cloned().expect("no calls recorded")
    }
}

impl MiioTransport for MockTransport {
    fn send(&self, method: &str, params: Value) -> Result<Value, MiioError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!(["ok"])))
    }
}

/// Device info matching [`MockTransport::push_info`].
pub fn test_device_info() -> DeviceInfo {
    DeviceInfo {
        model: "lumi.gateway.v3".to_string(),
        firmware_version: "1.4.1_164".to_string(),
        hardware_version: "MW300".to_string(),
        mac_address: "28:6C:07:AA:BB:CC".to_string(),
    }
}

/// A player wired to a clone of `mock`, skipping the platform bootstrap.
pub fn test_player(mock: &MockTransport) -> RadioMediaPlayer {
    RadioMediaPlayer::new(
        Box::new(mock.clone()),
        "Test Radio".to_string(),
        &test_device_info(),
    )
}
