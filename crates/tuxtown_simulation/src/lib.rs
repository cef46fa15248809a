//! TUXTOWN Simulation Core
//!
//! Top-down movement демо на Bevy 0.16 (headless ECS)
//!
//! Каждый FixedUpdate tick:
//! стрелки → DirectionalInput → resolver → PhysicsBody.velocity + SpriteAnimator
//!
//! Рендер, tilemap, ассеты, интеграция velocity и коллизии — на стороне хост-движка.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod animation;
pub mod camera;
pub mod config;
pub mod demo;
pub mod logger;
pub mod movement;
pub mod player;

// Re-export базовых типов для удобства
pub use animation::{AnimationChanged, AnimationSelection, ClipLibrary, Facing, SpriteAnimator, WalkClip};
pub use camera::{CameraPlugin, CameraRig};
pub use config::{ConfigError, GameConfig};
pub use logger::{log, log_error, log_info, log_warning};
pub use movement::{DirectionalInput, MovementPlugin, PhysicsBody, WalkSpeed};
pub use player::{spawn_player, BodyShape, Player, SpawnPoint};

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Конфиг передаётся при создании и кладётся в Resource;
/// системы берут из него только то, что им нужно.
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: GameConfig,
}

impl SimulationPlugin {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // С LogPlugin сообщения идут в tracing, иначе printer ставит create_headless_app
        if app.is_plugin_added::<bevy::log::LogPlugin>() {
            logger::set_logger_if_needed(Box::new(logger::TracingLogger));
        }

        app
            // Fixed timestep для simulation tick (60Hz по умолчанию)
            .insert_resource(Time::<Fixed>::from_hz(self.config.tick_hz))
            .insert_resource(ClipLibrary::from(&self.config.animation))
            .insert_resource(self.config.clone())
            .add_plugins((MovementPlugin, CameraPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции (default конфиг)
pub fn create_headless_app(seed: u64) -> App {
    create_headless_app_with_config(seed, GameConfig::default())
}

pub fn create_headless_app_with_config(seed: u64, config: GameConfig) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .add_plugins(SimulationPlugin::new(config))
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Прогоняет `ticks` simulation tick'ов напрямую (без wall-clock)
///
/// Каждый tick сдвигает Time<Fixed> ровно на один timestep.
pub fn run_ticks(app: &mut App, ticks: usize) {
    let world = app.world_mut();
    for _ in 0..ticks {
        {
            let mut fixed = world.resource_mut::<Time<Fixed>>();
            let step = fixed.timestep();
            fixed.advance_by(step);
        }
        world.run_schedule(FixedUpdate);
    }
}

/// Snapshot мира для сравнения детерминизма
///
/// Компоненты сортируются по Entity index и сериализуются через Debug.
pub fn world_snapshot<T>(world: &mut World) -> Vec<u8>
where
    T: Component + std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
