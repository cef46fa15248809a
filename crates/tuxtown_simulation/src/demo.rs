//! Random walk — scripted input для headless демо
//!
//! Держит случайную комбинацию клавиш случайное число tick'ов,
//! потом выбирает новую. Все случайности из DeterministicRng → повторяемо по seed.

use bevy::prelude::*;
use rand::Rng;

use crate::movement::DirectionalInput;
use crate::player::Player;
use crate::DeterministicRng;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RandomWalk {
    pub current: DirectionalInput,
    pub ticks_left: u32,
    pub min_hold: u32,
    pub max_hold: u32,
}

impl Default for RandomWalk {
    fn default() -> Self {
        // 0.25–1 сек при 60Hz
        Self::new(15, 60)
    }
}

impl RandomWalk {
    pub fn new(min_hold: u32, max_hold: u32) -> Self {
        let min_hold = min_hold.max(1);
        Self {
            current: DirectionalInput::NONE,
            ticks_left: 0,
            min_hold,
            max_hold: max_hold.max(min_hold),
        }
    }

    /// Input на следующий tick
    pub fn next_input(&mut self, rng: &mut impl Rng) -> DirectionalInput {
        if self.ticks_left == 0 {
            self.current = DirectionalInput::from_bits(rng.gen_range(0u8..16));
            self.ticks_left = rng.gen_range(self.min_hold..=self.max_hold);
        }
        self.ticks_left -= 1;
        self.current
    }
}

/// Система: random walk → DirectionalInput игрока
pub fn drive_random_walk(
    mut walk: ResMut<RandomWalk>,
    mut rng: ResMut<DeterministicRng>,
    mut query: Query<&mut DirectionalInput, With<Player>>,
) {
    let input = walk.next_input(&mut rng.rng);

    for mut player_input in query.iter_mut() {
        player_input.set_if_neq(input);
    }
}

/// Random walk Plugin (только headless демо)
pub struct RandomWalkPlugin;

impl Plugin for RandomWalkPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RandomWalk>().add_systems(
            FixedUpdate,
            drive_random_walk
                .after(crate::movement::read_cursor_keys)
                .before(crate::movement::resolve_player_movement),
        );
    }
}
