//! Конфигурация игры (canvas, physics, player, animation, map)
//!
//! Передаётся в `SimulationPlugin` при инициализации и живёт как Resource.
//! Resolver её напрямую НЕ читает — speed приходит аргументом через `WalkSpeed`.
//!
//! Формат файла: RON

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки загрузки конфига
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse RON config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Размер canvas (пиксели)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub pixel_art: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            pixel_art: true,
        }
    }
}

/// Physics backend хоста
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicsBackend {
    /// AABB тела + tile коллизии
    Arcade,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    pub backend: PhysicsBackend,
    /// Top-down: гравитации нет
    pub gravity: (f32, f32),
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            backend: PhysicsBackend::Arcade,
            gravity: (0.0, 0.0),
        }
    }
}

/// Параметры персонажа
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Скорость ходьбы (world units/sec)
    pub speed: f32,
    /// Размер коллайдера (px)
    pub body_size: (f32, f32),
    /// Смещение коллайдера от верхнего левого угла sprite (px)
    pub body_offset: (f32, f32),
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 175.0,
            body_size: (30.0, 40.0),
            body_offset: (0.0, 24.0),
        }
    }
}

/// Параметры walk клипов
///
/// Имя кадра: `{prefix}-{direction}-walk.{index:0pad}`, например `misa-left-walk.000`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub atlas: String,
    pub prefix: String,
    pub frame_rate: f32,
    pub first_frame: u32,
    pub last_frame: u32,
    pub zero_pad: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            atlas: "atlas".to_string(),
            prefix: "misa".to_string(),
            frame_rate: 10.0,
            first_frame: 0,
            last_frame: 3,
            zero_pad: 3,
        }
    }
}

/// Размер карты (px) — для camera bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub width_px: f32,
    pub height_px: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        // tuxemon-town: 40x40 тайлов по 32px
        Self {
            width_px: 1280.0,
            height_px: 1280.0,
        }
    }
}

/// Глобальная конфигурация игры
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas: CanvasConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub animation: AnimationConfig,
    pub map: MapConfig,
    /// Частота simulation tick (FixedUpdate)
    pub tick_hz: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            physics: PhysicsConfig::default(),
            player: PlayerConfig::default(),
            animation: AnimationConfig::default(),
            map: MapConfig::default(),
            tick_hz: 60.0,
        }
    }
}

impl GameConfig {
    /// Парсит RON и валидирует
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Читает RON файл с диска
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Проверка инвариантов
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.player.speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "player.speed must be positive and finite, got {speed}"
            )));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if !(self.animation.frame_rate > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "animation.frame_rate must be positive, got {}",
                self.animation.frame_rate
            )));
        }
        if self.animation.first_frame > self.animation.last_frame {
            return Err(ConfigError::Invalid(format!(
                "animation frame range {}..={} is empty",
                self.animation.first_frame, self.animation.last_frame
            )));
        }
        if !(self.tick_hz > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tick_hz must be positive, got {}",
                self.tick_hz
            )));
        }
        Ok(())
    }

    /// Размер viewport камеры (px)
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.canvas.width as f32, self.canvas.height as f32)
    }

    /// Границы камеры: (0, 0) .. (map width, map height)
    pub fn camera_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.map.width_px, self.map.height_px)
    }
}
