//! Headless симуляция TUXTOWN
//!
//! Запускает Bevy App без рендера: random walk вместо клавиатуры.
//! Опционально первым аргументом — путь к RON конфигу.

use std::process::ExitCode;

use bevy::ecs::world::CommandQueue;
use bevy::prelude::Commands;

use tuxtown_simulation::demo::RandomWalkPlugin;
use tuxtown_simulation::{
    create_headless_app_with_config, log_error, log_info, run_ticks, spawn_player, CameraRig,
    ClipLibrary, GameConfig, PhysicsBody, SpawnPoint, SpriteAnimator,
};

const SEED: u64 = 42;
const TICK_COUNT: usize = 600;

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tuxtown_simulation::logger::init_logger();
                log_error(&format!("Failed to load config {}: {}", path, err));
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let mut app = create_headless_app_with_config(SEED, config.clone());
    app.add_plugins(RandomWalkPlugin);

    log_info(&format!(
        "Starting TUXTOWN headless simulation (seed: {}, speed: {})",
        SEED, config.player.speed
    ));

    let mut queue = CommandQueue::default();
    let player = {
        let mut commands = Commands::new(&mut queue, app.world());
        let player = spawn_player(&mut commands, &config.player, SpawnPoint::default());
        commands.spawn(CameraRig::new(config.viewport(), config.camera_bounds()));
        player
    };
    queue.apply(app.world_mut());

    for tick in 0..TICK_COUNT {
        run_ticks(&mut app, 1);

        if tick % 60 == 0 {
            let world = app.world();
            let (Some(body), Some(animator)) = (
                world.get::<PhysicsBody>(player),
                world.get::<SpriteAnimator>(player),
            ) else {
                log_error("Player entity lost");
                return ExitCode::FAILURE;
            };
            let library = world.resource::<ClipLibrary>();
            let frame = library.atlas_path(&animator.current_frame_name(library));
            log_info(&format!(
                "Tick {}: velocity ({:.1}, {:.1}), frame {}",
                tick, body.velocity.x, body.velocity.y, frame
            ));
        }
    }

    log_info("Simulation complete!");
    ExitCode::SUCCESS
}
