//! PWM loop integration tests.
//!
//! Drives the control loop the way the firmware's run loop does and
//! checks the externally visible contract: the ON/OFF sequence delivered
//! to the output port.

use glimmer::app::ports::LedState;
use glimmer::app::service::PwmService;

use crate::mock_hw::{MockDutyStore, RecordingOutput};

/// 256 ticks = one full PWM period.
const PERIOD: usize = 256;

#[test]
fn periodicity_on_count_is_duty_plus_one() {
    for duty in [0u32, 1, 2, 63, 127, 128, 200, 254, 255] {
        let mut pwm = PwmService::new();
        let store = MockDutyStore::new(duty);
        let mut out = RecordingOutput::new();

        for _ in 0..PERIOD {
            pwm.on_tick(&store, &mut out);
        }

        assert_eq!(
            out.on_count(),
            duty as usize + 1,
            "duty {duty}: one period must give duty+1 ON ticks"
        );
    }
}

#[test]
fn pattern_repeats_identically_across_periods() {
    let mut pwm = PwmService::new();
    let store = MockDutyStore::new(77);
    let mut out = RecordingOutput::new();

    for _ in 0..3 * PERIOD {
        pwm.on_tick(&store, &mut out);
    }

    let first = &out.states[..PERIOD];
    assert_eq!(first, &out.states[PERIOD..2 * PERIOD]);
    assert_eq!(first, &out.states[2 * PERIOD..]);
}

#[test]
fn wraparound_restores_counter() {
    let mut pwm = PwmService::new();
    let store = MockDutyStore::new(10);
    let mut out = RecordingOutput::new();

    // Park the counter somewhere mid-period first.
    for _ in 0..37 {
        pwm.on_tick(&store, &mut out);
    }
    let before = pwm.counter();

    for _ in 0..PERIOD {
        pwm.on_tick(&store, &mut out);
    }
    assert_eq!(pwm.counter(), before);
}

#[test]
fn duty_write_takes_effect_next_tick() {
    let mut pwm = PwmService::new();
    let store = MockDutyStore::new(255);
    let mut out = RecordingOutput::new();

    pwm.on_tick(&store, &mut out);
    assert_eq!(out.last(), Some(LedState::On));

    // Host drops the word to 0 between ticks: the very next tick
    // (counter = 2) must go dark — no buffered value.
    store.write(0);
    pwm.on_tick(&store, &mut out);
    assert_eq!(out.last(), Some(LedState::Off));

    // And back up again, one tick later.
    store.write(255);
    pwm.on_tick(&store, &mut out);
    assert_eq!(out.last(), Some(LedState::On));
}

#[test]
fn saturation_low_fires_only_at_counter_zero() {
    let mut pwm = PwmService::new();
    let store = MockDutyStore::new(0);
    let mut out = RecordingOutput::new();

    for _ in 0..2 * PERIOD {
        pwm.on_tick(&store, &mut out);
    }

    assert_eq!(out.on_count(), 2, "one ON tick per period");
    // The ON tick is the wrap tick: indices 255 and 511.
    for (i, s) in out.states.iter().enumerate() {
        assert_eq!(s.is_on(), i % PERIOD == PERIOD - 1, "tick {i}");
    }
}

#[test]
fn saturation_high_and_above_range_always_on() {
    for duty in [255u32, 256, 4096, u32::MAX] {
        let mut pwm = PwmService::new();
        let store = MockDutyStore::new(duty);
        let mut out = RecordingOutput::new();

        for _ in 0..PERIOD {
            pwm.on_tick(&store, &mut out);
        }
        assert_eq!(out.on_count(), PERIOD, "duty {duty} must pin the LED on");
    }
}

#[test]
fn end_to_end_half_brightness_scenario() {
    // Duty 128 over one period from counter 0: ON while the counter is
    // in [0, 128] (129 ticks), OFF in [129, 255] (127 ticks).
    let mut pwm = PwmService::new();
    let store = MockDutyStore::new(128);
    let mut out = RecordingOutput::new();

    for _ in 0..PERIOD {
        pwm.on_tick(&store, &mut out);
    }

    assert_eq!(out.on_count(), 129);
    assert_eq!(out.states.len() - out.on_count(), 127);
    // First OFF is the tick that brings the counter to 129.
    assert!(out.states[127].is_on()); // counter 128
    assert!(!out.states[128].is_on()); // counter 129
}

// ── Full path through the event queue and the sim shared word ──
//
// Mirrors the firmware run loop: a "timer" pushes tick events, the loop
// drains them into the PWM core, and the duty comes from the real
// shared-word accessor with the sim writer poking it. Kept as a single
// test because the queue and the word are process-wide.
#[test]
fn run_loop_path_with_shared_word() {
    use glimmer::drivers::hw_timer::sim_fire_tick;
    use glimmer::duty::{sim_write_duty, SharedWordDutyStore};
    use glimmer::events::{drain_events, Event};

    let mut pwm = PwmService::new();
    let store = SharedWordDutyStore::new();
    let mut out = RecordingOutput::new();

    sim_write_duty(255);
    for _ in 0..4 {
        assert!(sim_fire_tick());
    }
    drain_events(|event| match event {
        Event::PwmTick => pwm.on_tick(&store, &mut out),
        Event::TelemetryTick => {}
    });
    assert_eq!(out.states.len(), 4, "one PWM step per queued tick");
    assert_eq!(out.on_count(), 4);

    // External write lands before the next batch of ticks.
    sim_write_duty(0);
    for _ in 0..4 {
        assert!(sim_fire_tick());
    }
    drain_events(|event| match event {
        Event::PwmTick => pwm.on_tick(&store, &mut out),
        Event::TelemetryTick => {}
    });
    assert_eq!(out.states.len(), 8);
    assert_eq!(out.on_count(), 4, "duty 0 stays dark away from wrap");

    sim_write_duty(0);
}
