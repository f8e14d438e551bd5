//! Drive a gateway radio entity against a simulated gateway.
//!
//! The simulated transport stands in for the application's encrypted miIO
//! client so the whole command/poll cycle can be exercised offline:
//!
//! ```sh
//! cargo run --example poll_status
//! ```

use std::sync::Mutex;

use lumi_radio::logging::{init_logging, LoggingMode};
use lumi_radio::{setup_platform, MiioError, MiioTransport, PlatformConfig, PlatformRegistry};
use serde_json::{json, Value};

/// Stand-in for the real transport: a gateway whose radio starts paused.
struct SimulatedGateway {
    playing: Mutex<bool>,
    volume: Mutex<i64>,
}

impl SimulatedGateway {
    fn new() -> Self {
        Self {
            playing: Mutex::new(false),
            volume: Mutex::new(35),
        }
    }
}

impl MiioTransport for SimulatedGateway {
    fn send(&self, method: &str, params: Value) -> Result<Value, MiioError> {
        match method {
            "miIO.info" => Ok(json!({
                "model": "lumi.gateway.v3",
                "fw_ver": "1.4.1_164",
                "hw_ver": "MW300",
                "mac": "28:6C:07:AA:BB:CC",
            })),
            "play_fm" => {
                match params.get(0).and_then(Value::as_str) {
                    Some("on") | Some("next") => *self.playing.lock().unwrap() = true,
                    Some("off") => *self.playing.lock().unwrap() = false,
                    _ => {
                        return Err(MiioError::Device {
                            code: -5001,
                            message: "bad mode".to_string(),
                        })
                    }
                }
                Ok(json!(["ok"]))
            }
            "set_fm_volume" => {
                let volume = params.get(0).and_then(Value::as_i64).ok_or_else(|| {
                    MiioError::Device {
                        code: -5001,
                        message: "bad volume".to_string(),
                    }
                })?;
                *self.volume.lock().unwrap() = volume.clamp(0, 100);
                Ok(json!(["ok"]))
            }
            "get_prop_fm" => {
                let status = if *self.playing.lock().unwrap() {
                    "run"
                } else {
                    "pause"
                };
                Ok(json!({
                    "current_status": status,
                    "current_volume": *self.volume.lock().unwrap(),
                }))
            }
            other => Err(MiioError::Device {
                code: -1,
                message: format!("unknown method {}", other),
            }),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingMode::Development)?;

    let mut registry = PlatformRegistry::new();
    let config = PlatformConfig::new("192.168.1.30", "00112233445566778899aabbccddeeff")
        .with_name("Kitchen Radio");

    let player = setup_platform(&mut registry, &config, Box::new(SimulatedGateway::new()))?;

    println!("{} ({})", player.name(), player.unique_id());
    println!(
        "  power {:?}, volume {:.2}, available {}",
        player.power_state(),
        player.volume_level(),
        player.available()
    );

    player.turn_on();
    player.set_volume_level(0.6);
    player.update();
    println!(
        "  after turn_on + set_volume(0.6): power {:?}, volume {:.2}",
        player.power_state(),
        player.volume_level()
    );

    player.mute_volume(true);
    player.update();
    println!("  muted: {}", player.is_volume_muted());

    player.turn_off();
    player.update();
    println!(
        "  after turn_off: power {:?}, volume {:.2} (stale while paused)",
        player.power_state(),
        player.volume_level()
    );

    Ok(())
}
