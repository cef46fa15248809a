//! Animation domain — walk клипы и still кадры персонажа
//!
//! Содержит:
//! - WalkClip / Facing / AnimationSelection (что показывать)
//! - ClipLibrary (имена кадров в атласе)
//! - SpriteAnimator (плеер клипов, реализует ClipPlayer)
//! - AnimationChanged (event смены показываемой анимации)

use bevy::prelude::*;

pub mod animator;
pub mod clips;

pub use animator::{advance_sprite_animations, SpriteAnimator, SpriteFrame};
pub use clips::{AnimationSelection, ClipLibrary, Facing, WalkClip};

/// Event: показываемая анимация персонажа изменилась
///
/// Пишется resolver системой, когда меняется состояние `SpriteAnimator`
/// (играющий клип или показанный кадр), а не сам `AnimationSelection`.
/// `Idle(Some(f)) → Idle(None)` оставляет still кадр, поэтому event нет;
/// удержание клавиши не перезапускает клип, тоже без event.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AnimationChanged {
    pub entity: Entity,
    pub selection: AnimationSelection,
}
