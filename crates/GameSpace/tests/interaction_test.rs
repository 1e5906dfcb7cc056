use game_space::hud::DebugHud;
use game_space::input::{
    InputState, ModifiersState, MouseButtons, PanButton, PanTrigger, WheelDirection,
    WindowSize,
};
use game_space::scene::Scene;
use game_space::{InteractionMode, Point, Stage, Vector, ViewEvent, ViewportConfig};

fn create_stage(config: ViewportConfig) -> (Stage, Scene, DebugHud) {
    let stage = Stage::new(config).expect("valid config");
    (stage, Scene::new(), DebugHud::new())
}

fn assert_point_close(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_idle_frame_emits_nothing() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());
    let matrix = stage.viewport.world_to_pixel_matrix();

    let (_, events) = stage.update(&InputState::default(), &scene, &hud);

    assert!(events.is_empty());
    assert_eq!(stage.viewport.world_to_pixel_matrix(), matrix);
}

#[test]
fn test_wheel_zoom_keeps_point_under_cursor() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());
    let cursor = Point::new(700.0, 100.0);
    let before = stage.viewport.pixel_to_world(cursor);

    // 1. Wheel up zooms in
    let mut input = InputState {
        cursor,
        wheel: Some(WheelDirection::Up),
        ..Default::default()
    };
    let (_, events) = stage.update(&input, &scene, &hud);

    assert!((stage.viewport.world_width() - 1.8).abs() < 1e-12);
    assert_point_close(stage.viewport.pixel_to_world(cursor), before);
    match events.as_slice() {
        [ViewEvent::Zoomed { cursor: c, world_width }, ViewEvent::RepaintNeeded] => {
            assert_eq!(*c, cursor);
            assert_eq!(*world_width, stage.viewport.world_width());
        }
        other => panic!("unexpected events: {other:?}"),
    }

    // 2. Wheel down zooms back out
    input.wheel = Some(WheelDirection::Down);
    stage.update(&input, &scene, &hud);

    assert!((stage.viewport.world_width() - 1.98).abs() < 1e-12);
    assert_point_close(stage.viewport.pixel_to_world(cursor), before);
}

#[test]
fn test_zoom_clamped_to_limits() {
    let config = ViewportConfig {
        min_world_width: 1.5,
        ..Default::default()
    };
    let (mut stage, scene, hud) = create_stage(config);
    let input = InputState {
        cursor: Point::new(100.0, 100.0),
        wheel: Some(WheelDirection::Up),
        ..Default::default()
    };

    // 2.0 -> 1.8 -> 1.62 -> 1.5 (clamped)
    for _ in 0..3 {
        let (_, events) = stage.update(&input, &scene, &hud);
        assert!(!events.is_empty());
    }
    assert!((stage.viewport.world_width() - 1.5).abs() < 1e-12);

    // Already at the limit: nothing changes
    let matrix = stage.viewport.world_to_pixel_matrix();
    let (_, events) = stage.update(&input, &scene, &hud);
    assert!(events.is_empty());
    assert_eq!(stage.viewport.world_to_pixel_matrix(), matrix);
}

#[test]
fn test_drag_lifecycle() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());
    let origin = stage.viewport.pixel_origin();

    // 1. Press
    let mut input = InputState {
        cursor: Point::new(10.0, 10.0),
        mouse_buttons: MouseButtons {
            middle: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let (_, events) = stage.update(&input, &scene, &hud);
    assert_eq!(
        events,
        vec![ViewEvent::PanStarted {
            cursor: Point::new(10.0, 10.0)
        }]
    );
    assert!(stage.viewport.panning().is_active());

    // 2. Move while held
    input.cursor = Point::new(50.0, 30.0);
    let (_, events) = stage.update(&input, &scene, &hud);
    assert_eq!(events, vec![ViewEvent::RepaintNeeded]);
    assert_eq!(
        stage.viewport.translation(),
        origin.as_vector() + Vector::new(40.0, 20.0)
    );
    assert_eq!(stage.viewport.pixel_origin(), origin);

    // 3. Hold still: nothing to repaint
    let (_, events) = stage.update(&input, &scene, &hud);
    assert!(events.is_empty());

    // 4. Release
    let before_release = stage.viewport.world_to_pixel_matrix();
    input.mouse_buttons.middle = false;
    let (_, events) = stage.update(&input, &scene, &hud);
    assert_eq!(
        events,
        vec![
            ViewEvent::PanCommitted {
                offset: Vector::new(40.0, 20.0)
            },
            ViewEvent::RepaintNeeded
        ]
    );
    assert!(!stage.viewport.panning().is_active());
    assert_eq!(stage.viewport.world_to_pixel_matrix(), before_release);
    assert_eq!(
        stage.viewport.pixel_origin(),
        origin.translate(Vector::new(40.0, 20.0))
    );
}

#[test]
fn test_release_frame_uses_final_cursor() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());
    let origin = stage.viewport.pixel_origin();

    let mut input = InputState {
        cursor: Point::new(100.0, 100.0),
        mouse_buttons: MouseButtons {
            middle: true,
            ..Default::default()
        },
        ..Default::default()
    };
    stage.update(&input, &scene, &hud);

    // Button released and cursor moved within the same frame
    input.mouse_buttons.middle = false;
    input.cursor = Point::new(90.0, 130.0);
    stage.update(&input, &scene, &hud);

    assert_eq!(
        stage.viewport.pixel_origin(),
        origin.translate(Vector::new(-10.0, 30.0))
    );
}

#[test]
fn test_default_pan_bindings() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());

    // 1. Plain left click does not pan
    let mut input = InputState {
        cursor: Point::new(10.0, 10.0),
        mouse_buttons: MouseButtons {
            left: true,
            ..Default::default()
        },
        ..Default::default()
    };
    stage.update(&input, &scene, &hud);
    assert!(!stage.viewport.panning().is_active());
    assert_eq!(stage.interaction_mode, InteractionMode::Idle);

    // 2. Ctrl + left starts a drag
    input.mouse_buttons.left = false;
    stage.update(&input, &scene, &hud);
    input.mouse_buttons.left = true;
    input.modifiers = ModifiersState {
        ctrl: true,
        ..Default::default()
    };
    let (_, events) = stage.update(&input, &scene, &hud);
    assert!(stage.viewport.panning().is_active());
    assert!(matches!(events.as_slice(), [ViewEvent::PanStarted { .. }]));
    assert_eq!(
        stage.interaction_mode,
        InteractionMode::Panning {
            trigger: PanTrigger::with_ctrl(PanButton::Left)
        }
    );
}

#[test]
fn test_releasing_ctrl_ends_ctrl_drag() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());
    let origin = stage.viewport.pixel_origin();

    let mut input = InputState {
        cursor: Point::new(10.0, 10.0),
        mouse_buttons: MouseButtons {
            left: true,
            ..Default::default()
        },
        modifiers: ModifiersState {
            ctrl: true,
            ..Default::default()
        },
        ..Default::default()
    };
    stage.update(&input, &scene, &hud);

    // Ctrl released while the left button stays down, cursor moved this frame
    input.cursor = Point::new(30.0, 40.0);
    input.modifiers.ctrl = false;
    let (_, events) = stage.update(&input, &scene, &hud);

    assert!(!stage.viewport.panning().is_active());
    assert_eq!(stage.interaction_mode, InteractionMode::Idle);
    assert_eq!(
        events,
        vec![
            ViewEvent::PanCommitted {
                offset: Vector::new(20.0, 30.0)
            },
            ViewEvent::RepaintNeeded
        ]
    );
    assert_eq!(
        stage.viewport.pixel_origin(),
        origin.translate(Vector::new(20.0, 30.0))
    );

    // Still holding left without Ctrl: no new drag
    input.cursor = Point::new(60.0, 60.0);
    let (_, events) = stage.update(&input, &scene, &hud);
    assert!(events.is_empty());
    assert!(!stage.viewport.panning().is_active());
}

#[test]
fn test_middle_drag_ignores_ctrl() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());

    let mut input = InputState {
        cursor: Point::new(10.0, 10.0),
        mouse_buttons: MouseButtons {
            middle: true,
            ..Default::default()
        },
        ..Default::default()
    };
    stage.update(&input, &scene, &hud);
    assert_eq!(
        stage.interaction_mode,
        InteractionMode::Panning {
            trigger: PanTrigger::new(PanButton::Middle)
        }
    );

    // Pressing and releasing Ctrl mid-drag does not end a middle-button drag
    input.modifiers.ctrl = true;
    input.cursor = Point::new(20.0, 10.0);
    stage.update(&input, &scene, &hud);
    input.modifiers.ctrl = false;
    input.cursor = Point::new(30.0, 10.0);
    stage.update(&input, &scene, &hud);
    assert!(stage.viewport.panning().is_active());
    assert_eq!(stage.viewport.panning().vector(), Vector::new(20.0, 0.0));
}

#[test]
fn test_custom_pan_triggers() {
    let config = ViewportConfig {
        pan_triggers: vec![PanTrigger::new(PanButton::Right)],
        ..Default::default()
    };
    let (mut stage, scene, hud) = create_stage(config);

    // Middle is no longer bound
    let mut input = InputState {
        cursor: Point::new(10.0, 10.0),
        mouse_buttons: MouseButtons {
            middle: true,
            ..Default::default()
        },
        ..Default::default()
    };
    stage.update(&input, &scene, &hud);
    assert!(!stage.viewport.panning().is_active());

    input.mouse_buttons = MouseButtons {
        right: true,
        ..Default::default()
    };
    let (_, events) = stage.update(&input, &scene, &hud);
    assert!(stage.viewport.panning().is_active());
    assert!(matches!(events.as_slice(), [ViewEvent::PanStarted { .. }]));

    // No bindings at all: panning is disabled
    let config = ViewportConfig {
        pan_triggers: Vec::new(),
        ..Default::default()
    };
    let (mut stage, scene, hud) = create_stage(config);
    stage.update(&input, &scene, &hud);
    assert!(!stage.viewport.panning().is_active());
}

#[test]
fn test_resize_moves_origin_with_center() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());
    let center_world = stage
        .viewport
        .pixel_to_world(stage.viewport.window_center());

    let input = InputState {
        resized: Some(WindowSize::new(1920, 1080)),
        ..Default::default()
    };
    let (_, events) = stage.update(&input, &scene, &hud);

    assert_eq!(
        events,
        vec![
            ViewEvent::Resized {
                window_size: Vector::new(1920.0, 1080.0)
            },
            ViewEvent::RepaintNeeded
        ]
    );
    assert_eq!(stage.viewport.pixel_origin(), Point::new(960.0, 540.0));
    assert_point_close(
        stage
            .viewport
            .pixel_to_world(stage.viewport.window_center()),
        center_world,
    );

    // Same size again is not a change
    let (_, events) = stage.update(&input, &scene, &hud);
    assert!(events.is_empty());
}

#[test]
fn test_zero_area_resize_ignored() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());
    let matrix = stage.viewport.world_to_pixel_matrix();

    let input = InputState {
        resized: Some(WindowSize::new(0, 0)),
        ..Default::default()
    };
    let (_, events) = stage.update(&input, &scene, &hud);

    assert!(events.is_empty());
    assert_eq!(stage.viewport.window_size(), Vector::new(960.0, 540.0));
    assert_eq!(stage.viewport.world_to_pixel_matrix(), matrix);
}

#[test]
fn test_resize_applied_before_zoom() {
    let (mut stage, scene, hud) = create_stage(ViewportConfig::default());
    let cursor = Point::new(300.0, 200.0);

    let input = InputState {
        cursor,
        wheel: Some(WheelDirection::Down),
        resized: Some(WindowSize::new(960, 800)),
        ..Default::default()
    };

    // The zoom anchors on the world point under the cursor in the resized window
    let mut expected = stage.viewport.clone();
    expected.on_resize(Vector::new(960.0, 800.0));
    let anchor = expected.pixel_to_world(cursor);

    let (_, events) = stage.update(&input, &scene, &hud);

    assert!(matches!(events[0], ViewEvent::Resized { .. }));
    assert!(matches!(events[2], ViewEvent::Zoomed { .. }));
    assert_point_close(stage.viewport.pixel_to_world(cursor), anchor);
}
