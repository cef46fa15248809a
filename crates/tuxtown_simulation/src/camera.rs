//! Follow камера, ограниченная размером карты
//!
//! Камера центрируется на игроке, но не выходит за (0, 0)..(map width, map height).
//! Если карта уже viewport'а по оси — scroll прижат к левому/верхнему краю.

use bevy::prelude::*;

use crate::player::Player;

/// Состояние камеры: левый верхний угол view (scroll) в world px
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub viewport: Vec2,
    pub bounds: Rect,
    pub scroll: Vec2,
}

impl CameraRig {
    pub fn new(viewport: Vec2, bounds: Rect) -> Self {
        Self {
            viewport,
            bounds,
            scroll: bounds.min,
        }
    }

    /// Центрирует view на `target` с учётом границ
    pub fn center_on(&mut self, target: Vec2) {
        let desired = target - self.viewport * 0.5;
        self.scroll = Vec2::new(
            clamp_axis(desired.x, self.bounds.min.x, self.bounds.max.x, self.viewport.x),
            clamp_axis(desired.y, self.bounds.min.y, self.bounds.max.y, self.viewport.y),
        );
    }

    /// Видимая область в world px
    pub fn view_rect(&self) -> Rect {
        Rect::from_corners(self.scroll, self.scroll + self.viewport)
    }
}

fn clamp_axis(value: f32, min: f32, max: f32, extent: f32) -> f32 {
    let upper = (max - extent).max(min);
    value.clamp(min, upper)
}

/// Система: все камеры следуют за игроком
pub fn follow_player_camera(
    player: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut CameraRig>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let target = target.translation.truncate();

    for mut rig in cameras.iter_mut() {
        rig.center_on(target);
    }
}

/// Camera Plugin
///
/// follow_player_camera идёт после resolver'а и анимаций.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            follow_player_camera.after(crate::animation::advance_sprite_animations),
        );
    }
}
