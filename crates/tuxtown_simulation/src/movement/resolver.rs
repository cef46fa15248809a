//! Movement/Animation resolver — input → velocity + выбор анимации за один tick
//!
//! Порядок (каждый tick):
//! 1. snapshot предыдущей velocity
//! 2. velocity = 0
//! 3. X: left → -speed, иначе right → +speed
//! 4. Y: up → -speed, иначе down → +speed
//! 5. normalize + scale(speed) (диагональ не быстрее прямой)
//! 6. анимация: left > right > up(back) > down(front) > idle
//!
//! Противоположные клавиши на одной оси НЕ гасят друг друга:
//! побеждает первая по приоритету (left+right ≡ left).

use bevy::math::Vec2;

use super::traits::{ClipPlayer, DirectionalKeys, VelocityBody};
use crate::animation::{AnimationSelection, Facing, WalkClip};

/// Результат одного tick'а
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Velocity до этого tick'а (по ней выбирается still кадр)
    pub previous_velocity: Vec2,
    pub velocity: Vec2,
    pub selection: AnimationSelection,
    /// Walk клип был (пере)запущен в этот tick
    pub clip_started: bool,
}

/// Чистый результат tick'а без хост-коллабораторов
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementResolution {
    pub velocity: Vec2,
    pub selection: AnimationSelection,
}

/// Шаги 2–5: пишет новую velocity в тело
pub fn apply_velocity<K, B>(keys: &K, speed: f32, body: &mut B)
where
    K: DirectionalKeys + ?Sized,
    B: VelocityBody + ?Sized,
{
    body.set_velocity(Vec2::ZERO);

    if keys.left() {
        body.set_velocity_x(-speed);
    } else if keys.right() {
        body.set_velocity_x(speed);
    }

    if keys.up() {
        body.set_velocity_y(-speed);
    } else if keys.down() {
        body.set_velocity_y(speed);
    }

    // Нулевой вектор остаётся нулевым
    let direction = body.velocity().normalize_or_zero();
    body.set_velocity(direction * speed);
}

/// Velocity для данного input (чистая версия шагов 2–5)
pub fn resolve_velocity<K: DirectionalKeys + ?Sized>(keys: &K, speed: f32) -> Vec2 {
    let mut velocity = Vec2::ZERO;
    apply_velocity(keys, speed, &mut velocity);
    velocity
}

/// Направление still кадра по знаку предыдущей velocity
///
/// X важнее Y. Нулевая velocity → None (текстура не меняется).
pub fn idle_facing(previous_velocity: Vec2) -> Option<Facing> {
    if previous_velocity.x < 0.0 {
        Some(Facing::Left)
    } else if previous_velocity.x > 0.0 {
        Some(Facing::Right)
    } else if previous_velocity.y < 0.0 {
        Some(Facing::Back)
    } else if previous_velocity.y > 0.0 {
        Some(Facing::Front)
    } else {
        None
    }
}

/// Шаг 6: выбор анимации
pub fn select_animation<K: DirectionalKeys + ?Sized>(
    keys: &K,
    previous_velocity: Vec2,
) -> AnimationSelection {
    if keys.left() {
        AnimationSelection::Walk(WalkClip::Left)
    } else if keys.right() {
        AnimationSelection::Walk(WalkClip::Right)
    } else if keys.up() {
        AnimationSelection::Walk(WalkClip::Back)
    } else if keys.down() {
        AnimationSelection::Walk(WalkClip::Front)
    } else {
        AnimationSelection::Idle(idle_facing(previous_velocity))
    }
}

/// Шаги 2–6 без тела и плеера
pub fn resolve_movement<K: DirectionalKeys + ?Sized>(
    keys: &K,
    previous_velocity: Vec2,
    speed: f32,
) -> MovementResolution {
    MovementResolution {
        velocity: resolve_velocity(keys, speed),
        selection: select_animation(keys, previous_velocity),
    }
}

/// Полный tick: velocity в тело, выбор анимации в плеер
pub fn resolve_tick<K, B, P>(keys: &K, speed: f32, body: &mut B, player: &mut P) -> TickOutcome
where
    K: DirectionalKeys + ?Sized,
    B: VelocityBody + ?Sized,
    P: ClipPlayer + ?Sized,
{
    let previous_velocity = body.velocity();

    apply_velocity(keys, speed, body);

    let selection = select_animation(keys, previous_velocity);
    let clip_started = match selection {
        AnimationSelection::Walk(clip) => player.play(clip, true),
        AnimationSelection::Idle(facing) => {
            player.stop();
            if let Some(facing) = facing {
                player.set_still_frame(facing);
            }
            false
        }
    };

    TickOutcome {
        previous_velocity,
        velocity: body.velocity(),
        selection,
        clip_started,
    }
}
