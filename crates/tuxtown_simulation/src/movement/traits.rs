//! Контракты хост-движка, через которые работает resolver
//!
//! Resolver не знает ни про ECS, ни про конкретный движок: ему нужны
//! только клавиши, velocity тела и плеер клипов.

use bevy::math::Vec2;

use crate::animation::{Facing, WalkClip};

/// Четыре направляющие клавиши, опрашиваемые синхронно
pub trait DirectionalKeys {
    fn up(&self) -> bool;
    fn down(&self) -> bool;
    fn left(&self) -> bool;
    fn right(&self) -> bool;
}

/// Тело с изменяемой velocity
pub trait VelocityBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_velocity_x(&mut self, x: f32);
    fn set_velocity_y(&mut self, y: f32);
}

/// Голая velocity как тело (для чистых вычислений без компонента)
impl VelocityBody for Vec2 {
    fn velocity(&self) -> Vec2 {
        *self
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        *self = velocity;
    }

    fn set_velocity_x(&mut self, x: f32) {
        self.x = x;
    }

    fn set_velocity_y(&mut self, y: f32) {
        self.y = y;
    }
}

/// Keyed looping плеер клипов + still кадры
pub trait ClipPlayer {
    /// Возвращает true если клип (пере)запущен
    fn play(&mut self, clip: WalkClip, ignore_if_playing: bool) -> bool;
    fn stop(&mut self);
    fn is_playing(&self, clip: WalkClip) -> bool;
    fn set_still_frame(&mut self, facing: Facing);
}
