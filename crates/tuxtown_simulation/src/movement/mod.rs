//! Movement domain — input → velocity + анимация за tick
//!
//! Содержит:
//! - DirectionalInput / PhysicsBody / WalkSpeed (компоненты)
//! - DirectionalKeys / VelocityBody / ClipPlayer (контракты хост-движка)
//! - resolver (чистая логика tick'а)
//! - системы: read_cursor_keys, resolve_player_movement

use bevy::prelude::*;

pub mod components;
pub mod resolver;
pub mod systems;
pub mod traits;

// Tests (отдельный файл с суффиксом _tests)
#[cfg(test)]
mod systems_tests;

pub use components::*;
pub use resolver::{
    apply_velocity, idle_facing, resolve_movement, resolve_tick, resolve_velocity,
    select_animation, MovementResolution, TickOutcome,
};
pub use systems::{read_cursor_keys, resolve_player_movement};
pub use traits::{ClipPlayer, DirectionalKeys, VelocityBody};

use crate::animation::{advance_sprite_animations, AnimationChanged};

/// Movement Plugin
///
/// Регистрирует системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. read_cursor_keys — клавиатура → DirectionalInput
/// 2. resolve_player_movement — velocity + выбор анимации
/// 3. advance_sprite_animations — кадры walk клипов
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AnimationChanged>();

        app.add_systems(
            FixedUpdate,
            (
                read_cursor_keys,
                resolve_player_movement,
                advance_sprite_animations,
            )
                .chain(),
        );
    }
}
