use scene_catalog::scene::{scene_rng, MountedScene};
use scene_catalog::scenes::find;
use scene_catalog::timeline::Timeline;
use scene_catalog::ambient::Stage;

#[cfg(test)]
mod timeline_tests {
    use super::*;

    #[test]
    fn test_fixed_times_are_frame_over_fps() {
        for (n, frame) in Timeline::fixed(24.0).take(48).enumerate() {
            assert_eq!(frame.number, n as u64);
            assert!((frame.time - n as f32 / 24.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_replay_at_other_rate_hits_same_pose() {
        let stage = Stage::new();
        let entry = find("Sine Wave Field").unwrap();

        let mut slow = MountedScene::mount(&stage, entry, &mut scene_rng(Some(4)));
        for frame in Timeline::fixed(10.0).take(21) {
            slow.update(frame.time);
        }
        let slow_bytes = slow.graph().batches()[0].buffer.bytes().to_vec();
        slow.unmount();

        let mut fast = MountedScene::mount(&stage, entry, &mut scene_rng(Some(4)));
        for frame in Timeline::fixed(40.0).take(81) {
            fast.update(frame.time);
        }
        assert_eq!(fast.graph().batches()[0].buffer.bytes(), slow_bytes.as_slice());
    }
}
