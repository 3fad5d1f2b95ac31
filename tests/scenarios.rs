//! Whole-session scenarios driven through the public sim API

use glam::Vec2;

use sleigh_toss::Settings;
use sleigh_toss::consts::{LAUNCH_ORIGIN, TOTAL_ATTEMPTS};
use sleigh_toss::hud::HudView;
use sleigh_toss::renderer::{DrawCommand, build_scene};
use sleigh_toss::sim::{GameEvent, GamePhase, GameState, InputEvent, Rating, apply_input, tick};

/// Released here the gift climbs and drops into the sleigh
const HIT: Vec2 = Vec2::new(0.0, 585.0);
/// Released here the gift is thrown straight down
const MISS: Vec2 = Vec2::new(100.0, 425.0);

/// Press, drag to `release`, let go, then tick until the gift is gone.
/// Returns every event seen along the way.
fn throw(state: &mut GameState, release: Vec2) -> Vec<GameEvent> {
    let mut events = Vec::new();
    events.extend(apply_input(state, InputEvent::Press(LAUNCH_ORIGIN)));
    events.extend(apply_input(state, InputEvent::Move(release)));
    events.extend(apply_input(state, InputEvent::Release));

    let mut ticks = 0;
    while !matches!(state.phase, GamePhase::Idle | GamePhase::GameOver) {
        events.extend(tick(state));
        ticks += 1;
        assert!(ticks < 10_000, "throw never resolved");
    }
    events
}

#[test]
fn ten_downward_throws_end_with_keep_practicing() {
    let mut state = GameState::new();
    for n in 1..=TOTAL_ATTEMPTS {
        let events = throw(&mut state, MISS);
        assert!(events.contains(&GameEvent::Missed));
        assert_eq!(state.attempts_remaining, TOTAL_ATTEMPTS - n);
    }

    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.score, 0);
    assert_eq!(state.misses, TOTAL_ATTEMPTS);
    assert_eq!(state.rating(), Rating::KeepPracticing);

    let hud = HudView::from_state(&state, &Settings::default());
    let summary = hud.game_over.expect("game over panel");
    assert_eq!(summary.final_score, "Final Score: 0 / 10");
    assert_eq!(summary.message, "🎄 Keep practicing! 🎄");
    assert!(hud.restart_visible);
    assert_eq!(hud.gifts_left, "0");
}

#[test]
fn every_gift_landed_is_perfect() {
    let mut state = GameState::new();
    let mut last_events = Vec::new();
    for _ in 0..TOTAL_ATTEMPTS {
        last_events = throw(&mut state, HIT);
    }

    assert_eq!(state.score, TOTAL_ATTEMPTS);
    assert_eq!(state.misses, 0);
    assert!(last_events.contains(&GameEvent::GameOver {
        score: TOTAL_ATTEMPTS,
        rating: Rating::Perfect,
    }));
}

/// Launch from `release`, tick until the gift resolves and record its
/// height after every flight tick
fn flight_heights(state: &mut GameState, release: Vec2) -> Vec<f32> {
    apply_input(state, InputEvent::Press(LAUNCH_ORIGIN));
    apply_input(state, InputEvent::Move(release));
    apply_input(state, InputEvent::Release);

    let mut heights = Vec::new();
    while state.phase == GamePhase::Flight {
        tick(state);
        heights.push(state.gift.expect("gift in flight").pos.y);
        assert!(heights.len() < 10_000, "gift never resolved");
    }
    heights
}

#[test]
fn vertical_throw_down_exits_after_5_ticks() {
    let mut state = GameState::new();
    let heights = flight_heights(&mut state, MISS);

    assert_eq!(heights.len(), 5);
    assert!(heights[..4].iter().all(|&y| y <= 600.0));
    assert!(heights[4] > 600.0);
    assert_eq!(state.score, 0);
    assert_eq!(state.misses, 1);
    assert_eq!(state.attempts_remaining, TOTAL_ATTEMPTS - 1);
}

#[test]
fn vertical_throw_up_rises_falls_and_exits_after_64_ticks() {
    let mut state = GameState::new();
    let heights = flight_heights(&mut state, Vec2::new(100.0, 625.0));

    assert_eq!(heights.len(), 64);
    assert_eq!(state.score, 0);
    assert_eq!(state.misses, 1);
    assert_eq!(state.attempts_remaining, TOTAL_ATTEMPTS - 1);

    // Climbs first, then falls back through the launch height and out the bottom
    let apex = heights
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .expect("heights");
    assert!(apex > 0 && apex < heights.len() - 1);
    assert!(heights[0] < LAUNCH_ORIGIN.y);
    assert!(heights[..=apex].windows(2).all(|w| w[1] <= w[0]));
    assert!(heights[apex..].windows(2).all(|w| w[1] >= w[0]));
    assert!(heights[..63].iter().all(|&y| y <= 600.0));
    assert!(heights[63] > 600.0);
}

#[test]
fn seven_of_ten_is_great() {
    let mut state = GameState::new();
    for n in 0..TOTAL_ATTEMPTS {
        throw(&mut state, if n < 7 { HIT } else { MISS });
    }
    assert_eq!(state.score, 7);
    assert_eq!(state.rating(), Rating::Great);
}

#[test]
fn release_launches_from_last_move() {
    let mut state = GameState::new();
    apply_input(&mut state, InputEvent::Press(Vec2::new(140.0, 540.0)));
    apply_input(&mut state, InputEvent::Move(Vec2::new(60.0, 560.0)));
    apply_input(&mut state, InputEvent::Move(HIT));
    let event = apply_input(&mut state, InputEvent::Release);

    let Some(GameEvent::Launched { velocity }) = event else {
        panic!("expected a launch, got {event:?}");
    };
    assert!((velocity.x - 15.0).abs() < 1e-4);
    assert!((velocity.y + 9.0).abs() < 1e-4);
}

#[test]
fn input_is_ignored_after_game_over_until_restart() {
    let mut state = GameState::new();
    for _ in 0..TOTAL_ATTEMPTS {
        throw(&mut state, MISS);
    }
    assert!(state.is_game_over());

    let ticks = state.time_ticks;
    assert!(apply_input(&mut state, InputEvent::Press(LAUNCH_ORIGIN)).is_none());
    assert!(apply_input(&mut state, InputEvent::Release).is_none());
    for _ in 0..60 {
        assert!(tick(&mut state).is_none());
    }
    assert_eq!(state.time_ticks, ticks);
    assert_eq!(state.phase, GamePhase::GameOver);

    assert_eq!(apply_input(&mut state, InputEvent::Restart), Some(GameEvent::Restarted));
    assert_eq!(state.phase, GamePhase::Idle);
    assert_eq!(state.score, 0);
    assert_eq!(state.misses, 0);
    assert_eq!(state.attempts_remaining, TOTAL_ATTEMPTS);
    assert!(state.gift.is_none());

    // A fresh session plays normally
    let events = throw(&mut state, HIT);
    assert!(events.contains(&GameEvent::Landed { score: 1 }));
    assert_eq!(state.attempts_remaining, TOTAL_ATTEMPTS - 1);
}

#[test]
fn last_gift_stays_under_the_game_over_shade() {
    let mut state = GameState::new();
    for _ in 0..TOTAL_ATTEMPTS {
        throw(&mut state, HIT);
    }
    let gift = state.gift.expect("last gift kept");
    assert!(gift.settled);

    let scene = build_scene(&state, &Settings::default());
    let gift_index = scene
        .iter()
        .position(|c| matches!(c, DrawCommand::FillRect { rect, .. } if rect.w == gift.size && rect.h == gift.size))
        .expect("gift box drawn");
    assert!(gift_index < scene.len() - 1);
}

#[test]
fn power_meter_tracks_the_drag() {
    let mut state = GameState::new();
    let settings = Settings::default();
    assert_eq!(HudView::from_state(&state, &settings).power, None);

    apply_input(&mut state, InputEvent::Press(LAUNCH_ORIGIN));
    apply_input(&mut state, InputEvent::Move(LAUNCH_ORIGIN + Vec2::new(-60.0, 80.0)));
    assert_eq!(
        HudView::from_state(&state, &settings).power.as_deref(),
        Some("Power: 50%")
    );

    apply_input(&mut state, InputEvent::Release);
    assert_eq!(HudView::from_state(&state, &settings).power, None);
}
