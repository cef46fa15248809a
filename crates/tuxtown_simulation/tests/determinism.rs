//! Тесты детерминизма random walk
//!
//! Проверяем что симуляция с одинаковым seed даёт идентичные результаты

use bevy::ecs::world::CommandQueue;
use bevy::prelude::*;
use tuxtown_simulation::demo::RandomWalkPlugin;
use tuxtown_simulation::*;

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 1000;

    let trace1 = run_simulation(SEED, TICK_COUNT);
    let trace2 = run_simulation(SEED, TICK_COUNT);

    assert_eq!(
        trace1, trace2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: usize = 500;

    let traces: Vec<_> = (0..5).map(|_| run_simulation(SEED, TICK_COUNT)).collect();

    for (i, trace) in traces.iter().enumerate().skip(1) {
        assert_eq!(traces[0], *trace, "Прогон {} дал результат отличный от прогона 0", i);
    }
}

#[test]
fn test_random_walk_never_exceeds_speed() {
    let mut app = create_headless_app(99);
    app.add_plugins(RandomWalkPlugin);
    let player = spawn(&mut app);

    for _ in 0..2000 {
        run_ticks(&mut app, 1);
        let velocity = app.world().get::<PhysicsBody>(player).unwrap().velocity;
        assert!(velocity.length() <= 175.0 + 1e-3, "|v| = {}", velocity.length());
    }
}

fn spawn(app: &mut App) -> Entity {
    let config = app.world().resource::<GameConfig>().player;
    let mut queue = CommandQueue::default();
    let player = {
        let mut commands = Commands::new(&mut queue, app.world());
        spawn_player(&mut commands, &config, SpawnPoint::default())
    };
    queue.apply(app.world_mut());
    player
}

/// Запускает random walk и возвращает snapshot после каждого tick'а
fn run_simulation(seed: u64, tick_count: usize) -> Vec<Vec<u8>> {
    let mut app = create_headless_app(seed);
    app.add_plugins(RandomWalkPlugin);
    spawn(&mut app);

    (0..tick_count)
        .map(|_| {
            run_ticks(&mut app, 1);
            let mut snapshot = world_snapshot::<PhysicsBody>(app.world_mut());
            snapshot.extend(world_snapshot::<SpriteAnimator>(app.world_mut()));
            snapshot
        })
        .collect()
}
