//! Tests for movement systems.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::animation::{AnimationChanged, AnimationSelection, ClipLibrary, Facing, SpriteAnimator, SpriteFrame, WalkClip};
    use crate::movement::{DirectionalInput, MovementPlugin, PhysicsBody, WalkSpeed};
    use crate::player::Player;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(Time::<Fixed>::from_hz(60.0))
            .init_resource::<ClipLibrary>()
            .add_plugins(MovementPlugin);
        app
    }

    fn spawn_walker(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Player,
                DirectionalInput::default(),
                WalkSpeed(175.0),
                PhysicsBody::default(),
                SpriteAnimator::default(),
            ))
            .id()
    }

    fn tick(app: &mut App) {
        app.world_mut().run_schedule(FixedUpdate);
    }

    fn changes(app: &App) -> Vec<AnimationSelection> {
        app.world()
            .resource::<Events<AnimationChanged>>()
            .iter_current_update_events()
            .map(|event| event.selection)
            .collect()
    }

    #[test]
    fn test_resolver_system_writes_velocity_and_clip() {
        let mut app = test_app();
        let walker = spawn_walker(&mut app);

        app.world_mut().get_mut::<DirectionalInput>(walker).unwrap().left = true;
        tick(&mut app);

        let body = app.world().get::<PhysicsBody>(walker).unwrap();
        let animator = app.world().get::<SpriteAnimator>(walker).unwrap();
        assert_eq!(body.velocity, Vec2::new(-175.0, 0.0));
        assert!(animator.is_playing(WalkClip::Left));
    }

    #[test]
    fn test_keyboard_is_sampled_into_input() {
        let mut app = test_app();
        app.init_resource::<ButtonInput<KeyCode>>();
        let walker = spawn_walker(&mut app);

        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.press(KeyCode::ArrowUp);
            keyboard.press(KeyCode::ArrowRight);
        }
        tick(&mut app);

        let input = *app.world().get::<DirectionalInput>(walker).unwrap();
        assert_eq!(input, DirectionalInput { up: true, right: true, ..default() });

        let animator = app.world().get::<SpriteAnimator>(walker).unwrap();
        assert!(animator.is_playing(WalkClip::Right));

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release_all();
        tick(&mut app);

        let animator = app.world().get::<SpriteAnimator>(walker).unwrap();
        assert_eq!(animator.playing(), None);
        assert_eq!(animator.frame(), SpriteFrame::Still(Facing::Right));
    }

    #[test]
    fn test_non_player_input_is_not_overwritten_by_keyboard() {
        let mut app = test_app();
        app.init_resource::<ButtonInput<KeyCode>>();
        let npc = app
            .world_mut()
            .spawn((
                DirectionalInput { down: true, ..default() },
                WalkSpeed(100.0),
                PhysicsBody::default(),
                SpriteAnimator::default(),
            ))
            .id();

        tick(&mut app);

        assert_eq!(
            app.world().get::<PhysicsBody>(npc).unwrap().velocity,
            Vec2::new(0.0, 100.0)
        );
    }

    #[test]
    fn test_animation_changed_only_on_transitions() {
        let mut app = test_app();
        let walker = spawn_walker(&mut app);

        // Покой с самого старта: текстура не меняется, event нет
        tick(&mut app);
        assert!(changes(&app).is_empty());

        app.world_mut().get_mut::<DirectionalInput>(walker).unwrap().down = true;
        tick(&mut app);
        tick(&mut app);
        tick(&mut app);

        *app.world_mut().get_mut::<DirectionalInput>(walker).unwrap() = DirectionalInput::NONE;
        tick(&mut app);
        tick(&mut app);

        assert_eq!(
            changes(&app),
            vec![
                AnimationSelection::Walk(WalkClip::Front),
                AnimationSelection::Idle(Some(Facing::Front)),
            ]
        );
    }

    #[test]
    fn test_idle_selection_change_without_sprite_change_is_silent() {
        let mut app = test_app();
        let walker = spawn_walker(&mut app);

        app.world_mut().get_mut::<DirectionalInput>(walker).unwrap().right = true;
        tick(&mut app);
        *app.world_mut().get_mut::<DirectionalInput>(walker).unwrap() = DirectionalInput::NONE;
        tick(&mut app);
        assert_eq!(changes(&app).last(), Some(&AnimationSelection::Idle(Some(Facing::Right))));

        // Idle(Some(Right)) → Idle(None): still кадр тот же, event нет
        let before = changes(&app).len();
        tick(&mut app);

        assert_eq!(changes(&app).len(), before);
        let animator = app.world().get::<SpriteAnimator>(walker).unwrap();
        assert_eq!(animator.frame(), SpriteFrame::Still(Facing::Right));
    }

    #[test]
    fn test_idle_from_spawn_keeps_front_still() {
        let mut app = test_app();
        let walker = spawn_walker(&mut app);

        tick(&mut app);

        let animator = app.world().get::<SpriteAnimator>(walker).unwrap();
        assert_eq!(animator.frame(), SpriteFrame::Still(Facing::Front));
        assert_eq!(app.world().get::<PhysicsBody>(walker).unwrap().velocity, Vec2::ZERO);
    }
}
