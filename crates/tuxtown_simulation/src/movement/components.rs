//! Movement компоненты: directional input, скорость, physics body

use bevy::prelude::*;

use super::traits::{DirectionalKeys, VelocityBody};

/// Состояние четырёх направляющих клавиш в этот tick
///
/// Флаги независимы: все четыре могут быть зажаты одновременно.
/// Приоритет разрешается resolver'ом, не здесь.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Биты: 0 = up, 1 = down, 2 = left, 3 = right
    pub fn from_bits(bits: u8) -> Self {
        Self {
            up: bits & 0b0001 != 0,
            down: bits & 0b0010 != 0,
            left: bits & 0b0100 != 0,
            right: bits & 0b1000 != 0,
        }
    }

    /// Все 16 комбинаций клавиш
    pub fn all_combinations() -> impl Iterator<Item = Self> {
        (0u8..16).map(Self::from_bits)
    }

    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

impl DirectionalKeys for DirectionalInput {
    fn up(&self) -> bool {
        self.up
    }

    fn down(&self) -> bool {
        self.down
    }

    fn left(&self) -> bool {
        self.left
    }

    fn right(&self) -> bool {
        self.right
    }
}

/// Physics body персонажа (world units/sec)
///
/// Resolver — единственный writer velocity. Интеграцию в позицию и
/// коллизии с world layer делает хост-движок.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    pub velocity: Vec2,
}

impl VelocityBody for PhysicsBody {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn set_velocity_x(&mut self, x: f32) {
        self.velocity.x = x;
    }

    fn set_velocity_y(&mut self, y: f32) {
        self.velocity.y = y;
    }
}

/// Скорость ходьбы (world units/sec)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct WalkSpeed(pub f32);

impl Default for WalkSpeed {
    fn default() -> Self {
        Self(175.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_covers_all_flags() {
        let all = DirectionalInput::from_bits(0b1111);
        assert!(all.up && all.down && all.left && all.right);

        let left = DirectionalInput::from_bits(0b0100);
        assert_eq!(left, DirectionalInput { left: true, ..default() });
    }

    #[test]
    fn test_all_combinations_are_distinct() {
        let combos: std::collections::HashSet<_> = DirectionalInput::all_combinations().collect();
        assert_eq!(combos.len(), 16);
        assert!(combos.contains(&DirectionalInput::NONE));
    }

    #[test]
    fn test_is_idle() {
        assert!(DirectionalInput::NONE.is_idle());
        assert!(!DirectionalInput { down: true, ..default() }.is_idle());
    }
}
