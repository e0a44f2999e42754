use scene_catalog::ambient::{AmbientState, Stage};
use scene_catalog::graph::Fog;
use scene_catalog::math::Color;
use scene_catalog::scene::{scene_rng, MountedScene};
use scene_catalog::scenes::find;

fn tinted(hex: u32) -> AmbientState {
    AmbientState::new(Some(Color::hex(hex)), Some(Fog::linear(hex, 1.0, 10.0)))
}

#[cfg(test)]
mod ambient_tests {
    use super::*;

    #[test]
    fn test_nested_scopes_restore_in_lifo_order() {
        let stage = Stage::with_initial(tinted(0x000001));

        let outer = stage.scope(tinted(0x000002));
        let middle = stage.scope(tinted(0x000003));
        let inner = stage.scope(tinted(0x000004));
        assert_eq!(stage.ambient(), tinted(0x000004));

        drop(inner);
        assert_eq!(stage.ambient(), tinted(0x000003));
        drop(middle);
        assert_eq!(stage.ambient(), tinted(0x000002));
        drop(outer);
        assert_eq!(stage.ambient(), tinted(0x000001));
    }

    #[test]
    fn test_scope_remembers_what_it_replaced() {
        let stage = Stage::new();
        let scope = stage.scope(tinted(0xabcdef));
        assert_eq!(scope.previous(), AmbientState::default());
    }

    #[test]
    fn test_stage_clones_share_the_slot() {
        let stage = Stage::new();
        let other = stage.clone();
        let _scope = other.scope(tinted(0x102030));
        assert_eq!(stage.ambient(), tinted(0x102030));
    }

    #[test]
    fn test_mounting_two_scenes_back_to_back() {
        let stage = Stage::new();
        let mut rng = scene_rng(Some(1));

        let first = MountedScene::mount(&stage, find("Bamboo Forest").unwrap(), &mut rng);
        let first_ambient = stage.ambient();
        let second = MountedScene::mount(&stage, find("Cozy Cabin").unwrap(), &mut rng);
        assert_eq!(second.previous_ambient(), first_ambient);
        assert_ne!(stage.ambient(), first_ambient);

        second.unmount();
        assert_eq!(stage.ambient(), first_ambient);
        first.unmount();
        assert_eq!(stage.ambient(), AmbientState::default());
    }

    #[test]
    fn test_scopes_released_out_of_order() {
        let stage = Stage::with_initial(tinted(0x000001));

        let outer = stage.scope(tinted(0x000002));
        let middle = stage.scope(tinted(0x000003));
        let inner = stage.scope(tinted(0x000004));

        drop(outer);
        assert_eq!(stage.ambient(), tinted(0x000004));
        drop(inner);
        assert_eq!(stage.ambient(), tinted(0x000003));
        drop(middle);
        assert_eq!(stage.ambient(), tinted(0x000001));
        assert_eq!(stage.active_scopes(), 0);
    }

    #[test]
    fn test_swapping_scenes_by_reassignment() {
        let stage = Stage::new();
        let mut rng = scene_rng(Some(1));

        let mut current = MountedScene::mount(&stage, find("Bamboo Forest").unwrap(), &mut rng);
        let forest = stage.ambient();

        // The new scene is built before the old one is dropped.
        current = MountedScene::mount(&stage, find("Cozy Cabin").unwrap(), &mut rng);
        let cabin = stage.ambient();
        assert_ne!(cabin, forest);
        assert_eq!(cabin.background, Some(Color::hex(0x1a100a)));
        assert_eq!(stage.active_scopes(), 1);

        current.update(1.0);
        assert_eq!(stage.ambient(), cabin);

        drop(current);
        assert_eq!(stage.ambient(), AmbientState::default());
        assert_eq!(stage.active_scopes(), 0);
    }
}
