//! Integration tests driving the media player through a scripted transport.

mod helpers;

use helpers::{test_player, MockTransport};
use lumi_radio::PowerState;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

#[test]
fn turn_on_sends_play_fm_on() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    player.turn_on();

    assert_eq!(mock.last_call(), ("play_fm".to_string(), json!(["on"])));
}

#[test]
fn turn_off_sends_play_fm_off() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    player.turn_off();

    assert_eq!(mock.last_call(), ("play_fm".to_string(), json!(["off"])));
}

#[test]
fn next_track_sends_play_fm_next() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    player.media_next_track();

    assert_eq!(mock.last_call(), ("play_fm".to_string(), json!(["next"])));
}

#[test]
fn volume_steps_use_the_mirrored_volume() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    // Bring the mirror to 0.50 through a poll, not a remote re-read
    mock.push_properties("run", 50);
    player.update();
    assert_eq!(player.volume_level(), 0.50);

    player.volume_up();
    assert_eq!(mock.last_call(), ("set_fm_volume".to_string(), json!([51])));

    player.volume_down();
    assert_eq!(mock.last_call(), ("set_fm_volume".to_string(), json!([49])));
}

#[test]
fn set_volume_level_sends_rounded_percentage() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    player.set_volume_level(0.675);

    assert_eq!(mock.last_call(), ("set_fm_volume".to_string(), json!([68])));
}

proptest! {
    #[test]
    fn set_volume_level_scales_any_input(level in 0.0f64..=1.0f64) {
        let mock = MockTransport::new();
        let mut player = test_player(&mock);

        player.set_volume_level(level);

        let (method, params) = mock.last_call();
        prop_assert_eq!(method, "set_fm_volume");
        prop_assert_eq!(params, json!([(level * 100.0).round() as i64]));
    }
}

#[test]
fn mute_writes_zero_and_flips_the_flag() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    player.mute_volume(true);
    assert_eq!(mock.last_call(), ("set_fm_volume".to_string(), json!([0])));
    assert!(player.is_volume_muted());

    player.mute_volume(false);
    assert_eq!(mock.last_call(), ("set_fm_volume".to_string(), json!([10])));
    assert!(!player.is_volume_muted());
}

#[test]
fn rejected_mute_leaves_the_flag_alone() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    mock.push_reply(Ok(json!(["error"])));
    player.mute_volume(true);

    assert!(!player.is_volume_muted());
    // The call itself went through, so the entity stays available
    assert!(player.available());
}

#[test]
fn poll_reports_mute_for_zero_volume_however_it_got_there() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    player.mute_volume(true);

    mock.push_properties("run", 0);
    player.update();

    assert!(player.is_volume_muted());
}

#[rstest]
#[case("run", PowerState::On)]
#[case("pause", PowerState::Off)]
#[case("idle", PowerState::Unknown)]
fn poll_maps_status_onto_power_state(#[case] status: &str, #[case] expected: PowerState) {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    mock.push_properties(status, 30);
    player.update();

    assert_eq!(player.power_state(), expected);
    // A poll that reached the device keeps the entity available
    assert!(player.available());
    assert_eq!(player.diagnostics().state_value.as_deref(), Some(status));
}

#[test]
fn running_poll_refreshes_volume_and_mute() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    mock.push_properties("run", 75);
    player.update();

    assert_eq!(player.power_state(), PowerState::On);
    assert_eq!(player.volume_level(), 0.75);
    assert!(!player.is_volume_muted());
    assert!(player.available());
}

#[test]
fn paused_poll_keeps_the_stale_volume() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    mock.push_properties("run", 75);
    player.update();

    mock.push_properties("pause", 0);
    player.update();

    assert_eq!(player.power_state(), PowerState::Off);
    assert!(player.is_volume_muted());
    // The last running value is retained, not zeroed
    assert_eq!(player.volume_level(), 0.75);
}

#[test]
fn failed_poll_only_clears_availability() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    mock.push_properties("run", 75);
    player.update();
    assert!(player.available());

    mock.push_network_error();
    player.update();

    assert!(!player.available());
    assert_eq!(player.power_state(), PowerState::On);
    assert_eq!(player.volume_level(), 0.75);
    assert!(!player.is_volume_muted());
    assert_eq!(player.diagnostics().state_value.as_deref(), Some("run"));
}

#[test]
fn malformed_poll_reply_counts_as_a_failure() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    mock.push_properties("run", 75);
    player.update();

    mock.push_reply(Ok(json!({ "current_status": "run" })));
    player.update();

    assert!(!player.available());
    assert_eq!(player.volume_level(), 0.75);
}

#[test]
fn failed_command_clears_availability_and_changes_nothing_else() {
    let mock = MockTransport::new();
    let mut player = test_player(&mock);

    mock.push_properties("run", 75);
    player.update();

    mock.push_network_error();
    player.set_volume_level(0.2);

    assert!(!player.available());
    assert_eq!(player.power_state(), PowerState::On);
    assert_eq!(player.volume_level(), 0.75);

    // A later successful poll brings the entity back
    mock.push_properties("run", 20);
    player.update();
    assert!(player.available());
    assert_eq!(player.volume_level(), 0.20);
}
