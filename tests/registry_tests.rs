use std::collections::HashSet;

use scene_catalog::ambient::{AmbientState, Stage};
use scene_catalog::graph::Shape;
use scene_catalog::math::Color;
use scene_catalog::scene::{scene_rng, MountedScene};
use scene_catalog::scenes::{catalog, find, validate};

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn test_catalog_has_one_hundred_scenes() {
        assert_eq!(catalog().len(), 100);
    }

    #[test]
    fn test_names_are_non_empty_and_unique() {
        let mut names = HashSet::new();
        let mut slugs = HashSet::new();
        for entry in catalog() {
            assert!(!entry.name.trim().is_empty());
            assert!(names.insert(entry.name), "duplicate name {:?}", entry.name);
            assert!(slugs.insert(entry.slug()), "duplicate slug {:?}", entry.slug());
        }
        assert!(validate(catalog()).is_ok());
    }

    #[test]
    fn test_every_entry_is_findable_by_slug() {
        for entry in catalog() {
            let found = find(&entry.slug()).expect("slug lookup");
            assert_eq!(found.name, entry.name);
        }
    }

    #[test]
    fn test_every_scene_mounts_updates_and_unmounts() {
        let initial = AmbientState::new(Some(Color::hex(0x123456)), None);
        let stage = Stage::with_initial(initial);

        for (index, entry) in catalog().iter().enumerate() {
            let mut rng = scene_rng(Some(index as u64));
            let mut scene = MountedScene::mount(&stage, entry, &mut rng);
            assert_eq!(scene.previous_ambient(), initial);

            let stats = scene.stats();
            assert!(stats.meshes + stats.instances > 0, "{} is empty", entry.name);

            for t in [0.5, 1.0, 7.25, 60.0] {
                scene.update(t);
            }
            for batch in scene.graph().batches() {
                if !batch.buffer.is_empty() {
                    assert_eq!(batch.buffer.dirty_marks(), 5, "{}: one mark per update", entry.name);
                }
                for instance in batch.buffer.as_slice() {
                    assert!(instance.translation().is_finite(), "{}: non-finite particle", entry.name);
                }
            }

            scene.unmount();
            assert_eq!(stage.ambient(), initial, "{} leaked ambient state", entry.name);
        }
    }

    #[test]
    fn test_every_scene_sets_a_background() {
        let stage = Stage::new();
        for entry in catalog() {
            let mut rng = scene_rng(Some(3));
            let scene = MountedScene::mount(&stage, entry, &mut rng);
            assert!(stage.ambient().background.is_some() || stage.ambient().fog.is_some(), "{}", entry.name);
            drop(scene);
            assert_eq!(stage.ambient(), AmbientState::default());
        }
    }

    #[test]
    fn test_grand_ballroom_chandeliers_hang_in_descending_tiers() {
        let stage = Stage::new();
        let mut rng = scene_rng(Some(5));
        let scene = MountedScene::mount(&stage, find("Grand Ballroom").unwrap(), &mut rng);

        let crystals: Vec<f32> = scene
            .graph()
            .nodes()
            .iter()
            .filter(|node| matches!(node.shape, Some(Shape::Octahedron { .. })))
            .map(|node| node.transform.translation.y)
            .collect();
        assert_eq!(crystals.len(), 2 * (12 + 9 + 6));
        for tier in 0..3 {
            let y = -(tier as f32) * 0.8;
            let count = crystals.iter().filter(|&&c| (c - y).abs() < 1e-5).count();
            assert_eq!(count, 2 * (12 - tier * 3), "tier {tier}");
        }
    }
}
