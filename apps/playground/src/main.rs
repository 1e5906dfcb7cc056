use game_space::hud::DebugHud;
use game_space::input::{InputState, ModifiersState, MouseButtons, WheelDirection, WindowSize};
use game_space::render::DrawCommand;
use game_space::scene::{Cross, Scene};
use game_space::{ConfigError, Point, Stage, ViewportConfig};
use macroquad::prelude as mq;

fn window_conf() -> mq::Conf {
    let size = ViewportConfig::default().window_size;
    mq::Conf {
        window_title: "GameSpace Playground".to_owned(),
        window_width: size.width as i32,
        window_height: size.height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Reads the config from the JSON file named by the first argument, if any.
fn load_config() -> Result<ViewportConfig, ConfigError> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(ViewportConfig::default());
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => ViewportConfig::from_json(&json),
        Err(err) => {
            tracing::warn!(%path, %err, "Could not read config, using defaults");
            Ok(ViewportConfig::default())
        }
    }
}

fn color(c: glam::Vec4) -> mq::Color {
    mq::Color::new(c.x, c.y, c.z, c.w)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Initialize Stage
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "Invalid config");
            return;
        }
    };
    let mut stage = match Stage::new(config) {
        Ok(stage) => stage,
        Err(err) => {
            tracing::error!(%err, "Failed to create stage");
            return;
        }
    };
    let mut last_size = stage.config.window_size;

    // 2. Scene: one piece of art plus a debug overlay marking the world axes
    let mut scene = Scene::new();
    scene.add_cross(Cross::new(Point::new(-0.1, 0.1), 0.2).rotated());
    scene.add_debug_cross(Cross::new(Point::ORIGIN, 0.1));
    scene.add_debug_cross(Cross::new(Point::new(0.5, 0.5), 0.1).rotated());

    let mut hud = DebugHud::new();

    loop {
        if mq::is_key_pressed(mq::KeyCode::Escape) || mq::is_key_pressed(mq::KeyCode::Q) {
            break;
        }
        if mq::is_key_pressed(mq::KeyCode::D) {
            scene.show_debug_art = !scene.show_debug_art;
        }
        if mq::is_key_pressed(mq::KeyCode::H) {
            hud.toggle();
        }
        if mq::is_key_pressed(mq::KeyCode::C) {
            hud.reset_snapshots();
        }

        // 3. Input Handling
        // Map Macroquad input to GameSpace InputState
        let size = WindowSize::new(mq::screen_width() as u32, mq::screen_height() as u32);
        let resized = (size != last_size).then_some(size);
        last_size = size;

        let cursor = Point::from(mq::mouse_position());

        let mouse_buttons = MouseButtons {
            left: mq::is_mouse_button_down(mq::MouseButton::Left),
            right: mq::is_mouse_button_down(mq::MouseButton::Right),
            middle: mq::is_mouse_button_down(mq::MouseButton::Middle),
        };

        let modifiers = ModifiersState {
            ctrl: mq::is_key_down(mq::KeyCode::LeftControl)
                || mq::is_key_down(mq::KeyCode::RightControl),
            shift: mq::is_key_down(mq::KeyCode::LeftShift)
                || mq::is_key_down(mq::KeyCode::RightShift),
            alt: mq::is_key_down(mq::KeyCode::LeftAlt) || mq::is_key_down(mq::KeyCode::RightAlt),
            meta: mq::is_key_down(mq::KeyCode::LeftSuper)
                || mq::is_key_down(mq::KeyCode::RightSuper),
        };

        let input = InputState {
            cursor,
            mouse_buttons,
            modifiers,
            wheel: WheelDirection::from_delta(mq::mouse_wheel().1),
            resized,
        };

        // 4. Update Logic
        // The HUD painted this frame holds the text gathered at the end of the previous one.
        let (draw_list, events) = stage.update(&input, &scene, &hud);

        if mq::is_key_pressed(mq::KeyCode::S) {
            let world = stage.viewport.pixel_to_world(cursor);
            hud.snapshot(format!("snapshot: {} GCS", world.format_with(3)));
        }
        for event in events {
            tracing::debug!(?event, "View event");
        }

        hud.reset();
        hud.print(format!("fps: {}", mq::get_fps()));
        stage.describe(&mut hud, cursor);

        // 5. Render
        for cmd in draw_list {
            match cmd {
                DrawCommand::Clear { color: c } => mq::clear_background(color(c)),
                DrawCommand::Line {
                    start,
                    end,
                    color: c,
                    width,
                } => {
                    mq::draw_line(start.x, start.y, end.x, end.y, width, color(c));
                }
                DrawCommand::Text {
                    pos,
                    text,
                    color: c,
                    size,
                } => {
                    // draw_text takes the baseline, not the top-left corner
                    mq::draw_text(&text, pos.x, pos.y + size, size, color(c));
                }
            }
        }

        mq::next_frame().await
    }
}
