//! Player control marker + spawn персонажа

use bevy::prelude::*;

use crate::animation::{Facing, SpriteAnimator};
use crate::config::PlayerConfig;
use crate::movement::{DirectionalInput, PhysicsBody, WalkSpeed};

/// Marker component для player-controlled entity
///
/// `read_cursor_keys` пишет клавиатуру только в entity с этим компонентом.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Точка спавна (world px)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpawnPoint(pub Vec2);

impl SpawnPoint {
    /// Объект "Spawn Point" из карты; если его нет — (0, 0)
    pub fn from_object(position: Option<Vec2>) -> Self {
        Self(position.unwrap_or(Vec2::ZERO))
    }
}

/// Размер и смещение коллайдера относительно sprite
///
/// Только данные: коллайдер строит хост-движок.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BodyShape {
    pub size: Vec2,
    pub offset: Vec2,
}

impl From<&PlayerConfig> for BodyShape {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            size: Vec2::new(config.body_size.0, config.body_size.1),
            offset: Vec2::new(config.body_offset.0, config.body_offset.1),
        }
    }
}

/// Spawn helper для персонажа игрока
///
/// Создает entity с полным набором компонентов:
/// - Player marker + Transform в точке спавна
/// - DirectionalInput / PhysicsBody / WalkSpeed (resolver)
/// - SpriteAnimator на still кадре "front"
/// - BodyShape для коллайдера хоста
pub fn spawn_player(commands: &mut Commands, config: &PlayerConfig, spawn: SpawnPoint) -> Entity {
    commands
        .spawn((
            Player,
            Transform::from_translation(spawn.0.extend(0.0)),
            DirectionalInput::default(),
            PhysicsBody::default(),
            WalkSpeed(config.speed),
            SpriteAnimator::with_still(Facing::Front),
            BodyShape::from(config),
        ))
        .id()
}
