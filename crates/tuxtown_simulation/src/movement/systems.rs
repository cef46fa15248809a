//! Movement ECS системы (FixedUpdate)

use bevy::prelude::*;

use super::components::{DirectionalInput, PhysicsBody, WalkSpeed};
use super::resolver::resolve_tick;
use crate::animation::{AnimationChanged, SpriteAnimator};
use crate::logger;
use crate::player::Player;

/// Система: стрелки клавиатуры → DirectionalInput игрока
///
/// В headless режиме `ButtonInput<KeyCode>` нет — input пишут напрямую
/// (тесты, random walk), система ничего не делает.
pub fn read_cursor_keys(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut query: Query<&mut DirectionalInput, With<Player>>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    let sampled = DirectionalInput {
        up: keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
    };

    for mut input in query.iter_mut() {
        input.set_if_neq(sampled);
    }
}

/// Система: один tick resolver'а для каждого персонажа
///
/// AnimationChanged пишется только когда плеер реально сменил состояние
/// (удержание той же клавиши event не генерирует).
pub fn resolve_player_movement(
    mut query: Query<(
        Entity,
        &DirectionalInput,
        &WalkSpeed,
        &mut PhysicsBody,
        &mut SpriteAnimator,
    )>,
    mut changed: EventWriter<AnimationChanged>,
) {
    for (entity, input, speed, mut body, mut animator) in query.iter_mut() {
        let before = (animator.playing(), animator.frame());

        let outcome = resolve_tick(input, speed.0, &mut *body, &mut *animator);

        if (animator.playing(), animator.frame()) != before {
            logger::log(&format!(
                "{:?}: {:?} (velocity {:?})",
                entity, outcome.selection, outcome.velocity
            ));
            changed.write(AnimationChanged {
                entity,
                selection: outcome.selection,
            });
        }
    }
}
