//! Walk клипы, still кадры и их имена в атласе

use bevy::prelude::*;

use crate::config::AnimationConfig;

/// Направление взгляда (ключ still кадра)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Facing {
    Left,
    Right,
    /// Спиной к камере (вверх по экрану)
    Back,
    /// Лицом к камере (вниз по экрану)
    Front,
}

impl Facing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
            Facing::Back => "back",
            Facing::Front => "front",
        }
    }
}

/// Looping walk клип
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum WalkClip {
    Left,
    Right,
    Back,
    Front,
}

impl WalkClip {
    pub fn facing(&self) -> Facing {
        match self {
            WalkClip::Left => Facing::Left,
            WalkClip::Right => Facing::Right,
            WalkClip::Back => Facing::Back,
            WalkClip::Front => Facing::Front,
        }
    }
}

/// Что показывает персонаж в этот tick
///
/// - `Walk(clip)` — looping клип
/// - `Idle(Some(facing))` — анимация остановлена, still кадр по последней скорости
/// - `Idle(None)` — анимация остановлена, текстура не меняется
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AnimationSelection {
    Walk(WalkClip),
    Idle(Option<Facing>),
}

impl AnimationSelection {
    pub fn is_walking(&self) -> bool {
        matches!(self, AnimationSelection::Walk(_))
    }
}

/// Реестр клипов: имена кадров в атласе + frame rate
///
/// Строится из `AnimationConfig` один раз при старте.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ClipLibrary {
    pub atlas: String,
    pub prefix: String,
    pub frame_rate: f32,
    first_frame: u32,
    last_frame: u32,
    zero_pad: usize,
}

impl Default for ClipLibrary {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}

impl From<&AnimationConfig> for ClipLibrary {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            atlas: config.atlas.clone(),
            prefix: config.prefix.clone(),
            frame_rate: config.frame_rate,
            first_frame: config.first_frame,
            last_frame: config.last_frame,
            zero_pad: config.zero_pad,
        }
    }
}

impl ClipLibrary {
    /// Ключ клипа: `misa-left-walk`
    pub fn clip_key(&self, clip: WalkClip) -> String {
        format!("{}-{}-walk", self.prefix, clip.facing().as_str())
    }

    pub fn frame_count(&self) -> usize {
        if self.first_frame > self.last_frame {
            return 0;
        }
        (self.last_frame - self.first_frame) as usize + 1
    }

    /// Имя кадра клипа: `misa-left-walk.002`
    ///
    /// `index` считается от начала клипа и заворачивается по длине.
    pub fn frame_name(&self, clip: WalkClip, index: usize) -> String {
        let count = self.frame_count().max(1);
        let number = self.first_frame as usize + index % count;
        format!("{}.{:0width$}", self.clip_key(clip), number, width = self.zero_pad)
    }

    pub fn frames(&self, clip: WalkClip) -> Vec<String> {
        (0..self.frame_count()).map(|i| self.frame_name(clip, i)).collect()
    }

    /// Кадр с ключом атласа: `atlas/misa-front-walk.000`
    pub fn atlas_path(&self, frame_name: &str) -> String {
        format!("{}/{}", self.atlas, frame_name)
    }

    /// Имя still кадра: `misa-front`
    pub fn still_frame_name(&self, facing: Facing) -> String {
        format!("{}-{}", self.prefix, facing.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_keys() {
        let library = ClipLibrary::default();

        assert_eq!(library.clip_key(WalkClip::Left), "misa-left-walk");
        assert_eq!(library.clip_key(WalkClip::Right), "misa-right-walk");
        assert_eq!(library.clip_key(WalkClip::Back), "misa-back-walk");
        assert_eq!(library.clip_key(WalkClip::Front), "misa-front-walk");
    }

    #[test]
    fn test_frame_names_are_zero_padded() {
        let library = ClipLibrary::default();

        assert_eq!(
            library.frames(WalkClip::Front),
            vec![
                "misa-front-walk.000",
                "misa-front-walk.001",
                "misa-front-walk.002",
                "misa-front-walk.003",
            ]
        );
        // Заворачивается по длине клипа
        assert_eq!(library.frame_name(WalkClip::Front, 5), "misa-front-walk.001");
    }

    #[test]
    fn test_custom_frame_range() {
        let library = ClipLibrary::from(&AnimationConfig {
            prefix: "tux".to_string(),
            first_frame: 2,
            last_frame: 4,
            zero_pad: 2,
            ..default()
        });

        assert_eq!(library.frame_count(), 3);
        assert_eq!(library.frame_name(WalkClip::Back, 0), "tux-back-walk.02");
        assert_eq!(library.still_frame_name(Facing::Back), "tux-back");
    }

    #[test]
    fn test_full_u32_frame_range_does_not_overflow() {
        let library = ClipLibrary::from(&AnimationConfig {
            first_frame: 0,
            last_frame: u32::MAX,
            ..default()
        });

        assert_eq!(library.frame_count(), u32::MAX as usize + 1);
        assert_eq!(library.frame_name(WalkClip::Left, 7), "misa-left-walk.007");
    }

    #[test]
    fn test_atlas_path() {
        let library = ClipLibrary::default();

        assert_eq!(library.atlas_path(&library.still_frame_name(Facing::Back)), "atlas/misa-back");
    }

    #[test]
    fn test_still_frame_names() {
        let library = ClipLibrary::default();

        assert_eq!(library.still_frame_name(Facing::Left), "misa-left");
        assert_eq!(library.still_frame_name(Facing::Front), "misa-front");
    }
}
