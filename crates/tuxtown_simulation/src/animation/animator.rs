//! SpriteAnimator — keyed looping клип плеер + still кадры

use bevy::prelude::*;

use super::clips::{ClipLibrary, Facing, WalkClip};
use crate::movement::ClipPlayer;

/// Кадр, который сейчас отображает sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum SpriteFrame {
    Still(Facing),
    Clip { clip: WalkClip, index: usize },
}

/// Анимационное состояние sprite
///
/// Инварианты:
/// - `playing == Some(clip)` ⇒ `frame == Clip { clip, .. }`
/// - `stop()` оставляет текущий кадр на экране
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct SpriteAnimator {
    frame: SpriteFrame,
    playing: Option<WalkClip>,
    /// Накопленное время с последней смены кадра (сек)
    elapsed: f32,
}

impl Default for SpriteAnimator {
    fn default() -> Self {
        Self::with_still(Facing::Front)
    }
}

impl SpriteAnimator {
    pub fn with_still(facing: Facing) -> Self {
        Self {
            frame: SpriteFrame::Still(facing),
            playing: None,
            elapsed: 0.0,
        }
    }

    pub fn frame(&self) -> SpriteFrame {
        self.frame
    }

    pub fn playing(&self) -> Option<WalkClip> {
        self.playing
    }

    /// Запускает клип с первого кадра
    ///
    /// `ignore_if_playing`: если этот клип уже играет — ничего не делать.
    /// Возвращает true если клип (пере)запущен.
    pub fn play(&mut self, clip: WalkClip, ignore_if_playing: bool) -> bool {
        if ignore_if_playing && self.playing == Some(clip) {
            return false;
        }

        self.playing = Some(clip);
        self.frame = SpriteFrame::Clip { clip, index: 0 };
        self.elapsed = 0.0;
        true
    }

    pub fn stop(&mut self) {
        self.playing = None;
        self.elapsed = 0.0;
    }

    pub fn is_playing(&self, clip: WalkClip) -> bool {
        self.playing == Some(clip)
    }

    pub fn set_still(&mut self, facing: Facing) {
        self.frame = SpriteFrame::Still(facing);
    }

    /// Продвигает looping клип на `delta` секунд
    pub fn advance(&mut self, delta: f32, frame_rate: f32, frame_count: usize) {
        let Some(clip) = self.playing else {
            return;
        };
        if frame_count == 0 || frame_rate <= 0.0 {
            return;
        }

        let step = 1.0 / frame_rate;
        self.elapsed += delta;

        let mut index = match self.frame {
            SpriteFrame::Clip { index, .. } => index,
            SpriteFrame::Still(_) => 0,
        };
        while self.elapsed >= step {
            self.elapsed -= step;
            index = (index + 1) % frame_count;
        }
        self.frame = SpriteFrame::Clip { clip, index };
    }

    /// Имя кадра атласа, которое сейчас на экране
    pub fn current_frame_name(&self, library: &ClipLibrary) -> String {
        match self.frame {
            SpriteFrame::Still(facing) => library.still_frame_name(facing),
            SpriteFrame::Clip { clip, index } => library.frame_name(clip, index),
        }
    }
}

impl ClipPlayer for SpriteAnimator {
    fn play(&mut self, clip: WalkClip, ignore_if_playing: bool) -> bool {
        SpriteAnimator::play(self, clip, ignore_if_playing)
    }

    fn stop(&mut self) {
        SpriteAnimator::stop(self);
    }

    fn is_playing(&self, clip: WalkClip) -> bool {
        SpriteAnimator::is_playing(self, clip)
    }

    fn set_still_frame(&mut self, facing: Facing) {
        self.set_still(facing);
    }
}

/// Система: продвигает walk клипы
///
/// Работает в FixedUpdate после resolver'а.
pub fn advance_sprite_animations(
    library: Res<ClipLibrary>,
    time: Res<Time<Fixed>>,
    mut query: Query<&mut SpriteAnimator>,
) {
    let delta = time.delta_secs();
    let frame_count = library.frame_count();

    for mut animator in query.iter_mut() {
        if animator.playing.is_some() {
            animator.advance(delta, library.frame_rate, frame_count);
        }
    }
}
