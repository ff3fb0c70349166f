use super::*;
use crate::coeffs::parse::Coefficient;
use crate::foundation::math::approx_eq_vec2;
use crate::playback::clock::ManualClock;
use crate::surface::scene::Scene;

fn unit_circle_chain() -> EpicycleChain {
    EpicycleChain::build(
        &[Coefficient::new(0.0, 0.0), Coefficient::new(1.0, 0.0)],
        10,
    )
    .unwrap()
}

fn origin_config() -> PlaybackConfig {
    PlaybackConfig {
        origin: Some(Vec2::ZERO),
        ..PlaybackConfig::default()
    }
}

#[test]
fn delta_t_is_frame_interval_over_duration() {
    let p = Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &origin_config()).unwrap();
    assert!((p.delta_t() - 1.0 / 60.0).abs() < 1e-12);
    assert_eq!(p.frame_interval(), Duration::from_secs_f64(1.0 / 60.0));
    assert_eq!(p.status(), PlaybackStatus::Running);
}

#[test]
fn invalid_durations_are_rejected() {
    for ms in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let res = Playback::start(unit_circle_chain(), Scene::new(), ms, &origin_config());
        assert!(matches!(res, Err(EpicycleError::Validation(_))), "{ms}");
    }
}

#[test]
fn start_sets_origin_and_mounts_chain() {
    let p = Playback::with_defaults(unit_circle_chain(), Scene::new(), 1000.0).unwrap();
    assert_eq!(p.surface().origin(), Vec2::new(500.0, 500.0));
    assert_eq!(p.surface().circles().count(), 2);
    assert_eq!(p.state().last_trace_point(), Some(Point::new(1.0, 0.0)));
}

#[test]
fn quarter_period_reaches_top_of_unit_circle() {
    let mut p =
        Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &origin_config()).unwrap();
    for _ in 0..15 {
        assert!(matches!(p.tick().unwrap(), TickOutcome::Advanced(_)));
    }
    assert!((p.state().t() - 0.25).abs() < 1e-12);
    assert!(approx_eq_vec2(
        p.chain().tip().to_vec2(),
        Vec2::new(0.0, 1.0),
        1e-9
    ));
    assert_eq!(p.state().trace_segments(), 15);
    assert_eq!(p.surface().trace_segments().len(), 15);
}

#[test]
fn trace_segments_chain_end_to_end() {
    let mut p =
        Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &origin_config()).unwrap();
    for _ in 0..5 {
        p.tick().unwrap();
    }
    let segs = p.surface().trace_segments();
    assert_eq!(segs[0].0, Point::new(1.0, 0.0));
    for pair in segs.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
    assert_eq!(segs.last().unwrap().1, p.chain().tip());
}

#[test]
fn finishes_after_about_sixty_frames_and_stays_finished() {
    let mut p =
        Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &origin_config()).unwrap();
    let mut advanced = 0;
    while let TickOutcome::Advanced(_) = p.tick().unwrap() {
        advanced += 1;
        assert!(advanced <= 61, "playback never finished");
    }
    assert!((60..=61).contains(&advanced), "{advanced}");
    assert!(p.state().t() >= 1.0);
    assert_eq!(
        p.status(),
        PlaybackStatus::Finished(FinishReason::Completed)
    );

    let mutations = p.surface().mutation_count();
    let presented = p.surface().presented_frames();
    for _ in 0..3 {
        assert_eq!(
            p.tick().unwrap(),
            TickOutcome::Finished(FinishReason::Completed)
        );
    }
    assert_eq!(p.surface().mutation_count(), mutations);
    assert_eq!(p.surface().presented_frames(), presented);
}

#[test]
fn full_period_closes_the_loop() {
    let mut p =
        Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &origin_config()).unwrap();
    while let TickOutcome::Advanced(_) = p.tick().unwrap() {}
    let exact = p.chain().sample_at(p.state().t());
    assert!(approx_eq_vec2(
        p.chain().tip().to_vec2(),
        exact.to_vec2(),
        1e-9
    ));
}

#[test]
fn empty_chain_finishes_without_touching_surface() {
    let chain = EpicycleChain::build(&[], 10).unwrap();
    let mut p = Playback::start(chain, Scene::new(), 1000.0, &origin_config()).unwrap();
    assert_eq!(
        p.tick().unwrap(),
        TickOutcome::Finished(FinishReason::Completed)
    );
    assert_eq!(p.surface().mutation_count(), 0);
    assert_eq!(p.state().frame(), FrameIndex(0));
}

#[test]
fn cancel_handle_stops_at_next_frame() {
    let mut p =
        Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &origin_config()).unwrap();
    let handle = p.cancel_handle();
    p.tick().unwrap();
    handle.cancel();
    assert!(handle.is_cancelled());
    assert_eq!(
        p.tick().unwrap(),
        TickOutcome::Finished(FinishReason::Cancelled)
    );
    assert_eq!(p.state().frame(), FrameIndex(1));
}

#[test]
fn stop_is_immediate_and_terminal() {
    let mut p =
        Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &origin_config()).unwrap();
    p.stop();
    assert_eq!(
        p.status(),
        PlaybackStatus::Finished(FinishReason::Cancelled)
    );
    assert_eq!(
        p.tick().unwrap(),
        TickOutcome::Finished(FinishReason::Cancelled)
    );
    let (chain, scene) = p.into_parts();
    assert_eq!(chain.len(), 2);
    assert_eq!(scene.presented_frames(), 0);
}

#[test]
fn run_frame_waits_out_the_budget() {
    let mut p =
        Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &origin_config()).unwrap();
    let mut clock = ManualClock::new().with_step_per_read(Duration::from_millis(4));
    match p.run_frame(&mut clock).unwrap() {
        FrameOutcome::Rendered {
            frame,
            compute,
            wait,
        } => {
            assert_eq!(frame, FrameIndex(0));
            assert_eq!(compute, Duration::from_millis(4));
            assert_eq!(wait, p.frame_interval() - Duration::from_millis(4));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(p.state().last_frame_at().is_some());
}

#[test]
fn slow_frames_schedule_immediately() {
    let mut p =
        Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &origin_config()).unwrap();
    let mut clock = ManualClock::new().with_step_per_read(Duration::from_millis(50));
    match p.run_frame(&mut clock).unwrap() {
        FrameOutcome::Rendered { wait, .. } => assert_eq!(wait, Duration::ZERO),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn run_paces_every_frame_and_honors_lead_in() {
    let cfg = PlaybackConfig {
        lead_in_ms: 3000,
        ..origin_config()
    };
    let mut p = Playback::start(unit_circle_chain(), Scene::new(), 1000.0, &cfg).unwrap();
    let mut clock = ManualClock::new();
    let summary = p.run(&mut clock).unwrap();

    assert_eq!(summary.reason, FinishReason::Completed);
    assert!((60..=61).contains(&summary.frames));
    assert_eq!(summary.trace_segments, summary.frames);
    assert_eq!(clock.sleep_count(), summary.frames + 1);
    let expected = Duration::from_millis(3000) + p.frame_interval() * summary.frames as u32;
    assert_eq!(clock.total_slept(), expected);
}
