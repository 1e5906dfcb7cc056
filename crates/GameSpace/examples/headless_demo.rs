use game_space::hud::DebugHud;
use game_space::input::{InputState, MouseButtons, WheelDirection, WindowSize};
use game_space::render::DrawCommand;
use game_space::scene::{Cross, Scene};
use game_space::{Point, Stage, ViewportConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== GameSpace Headless Demo ===");

    // 1. Initialize Stage
    let mut stage = match Stage::new(ViewportConfig::default()) {
        Ok(stage) => stage,
        Err(err) => {
            eprintln!("invalid config: {err}");
            return;
        }
    };

    // 2. Populate Scene
    let mut scene = Scene::new();
    scene.add_cross(Cross::new(Point::new(-0.1, 0.1), 0.2).rotated());
    scene.add_debug_cross(Cross::new(Point::ORIGIN, 0.1));
    scene.add_debug_cross(Cross::new(Point::new(0.5, 0.5), 0.1).rotated());

    let mut hud = DebugHud::new();
    hud.is_visible = false;

    // 3. Simulate frames: zoom in twice, drag, resize
    for frame in 0..7 {
        println!("\n--- Frame {} ---", frame);

        let mut input = InputState {
            cursor: Point::new(600.0, 200.0),
            ..Default::default()
        };
        match frame {
            1 | 2 => {
                println!(">> Wheel up at {}", input.cursor);
                input.wheel = Some(WheelDirection::Up);
            }
            3 => {
                println!(">> Press at {}", input.cursor);
                input.mouse_buttons = MouseButtons {
                    middle: true,
                    ..Default::default()
                };
            }
            4 => {
                input.cursor = Point::new(650.0, 260.0);
                println!(">> Drag to {}", input.cursor);
                input.mouse_buttons.middle = true;
            }
            5 => {
                input.cursor = Point::new(650.0, 260.0);
                println!(">> Release");
            }
            6 => {
                println!(">> Resize to 1280x720");
                input.resized = Some(WindowSize::new(1280, 720));
            }
            _ => {}
        }

        let (draw_list, events) = stage.update(&input, &scene, &hud);

        println!("  Logic Events: {:?}", events);
        println!(
            "  world_width: {:.4}, origin: {}",
            stage.viewport.world_width(),
            stage.viewport.pixel_origin()
        );
        for cmd in &draw_list {
            if let DrawCommand::Line { start, end, .. } = cmd {
                println!("  line {start} -> {end}");
            }
        }
    }

    // 4. Dump the final state the way the playground HUD shows it
    hud.reset();
    stage.describe(&mut hud, Point::new(640.0, 360.0));
    println!();
    for line in hud.text() {
        println!("{line}");
    }

    println!("\nDemo Complete.");
}
