use std::time::Instant;

use chrono::Local;

use crate::ambient::Stage;
use crate::config::PlaybackConfig;
use crate::gpu::{BufferSink, InstanceUploader};
use crate::report::RunReport;
use crate::scene::{scene_rng, MountedScene};
use crate::scenes::SceneEntry;
use crate::timeline::Timeline;

/// Mounts `entry`, steps it through a fixed timeline and unmounts it.
///
/// With a `sink`, dirty instance batches are uploaded after every frame.
pub fn play<S: BufferSink>(stage: &Stage, entry: &SceneEntry, playback: PlaybackConfig, sink: Option<&S>) -> RunReport {
    let started_at = Local::now();
    let start = Instant::now();
    let fps = Timeline::fixed_rate(playback.fps());
    if fps != playback.fps() {
        log::warn!("{} fps is not a usable rate, stepping at {} fps", playback.fps(), fps);
    }
    let frames = playback.frames();

    let mut rng = scene_rng(playback.seed);
    let mut scene = MountedScene::mount(stage, entry, &mut rng);
    let mut uploader = sink.map(|_| InstanceUploader::<S>::new());

    if let (Some(sink), Some(uploader)) = (sink, uploader.as_mut()) {
        uploader.sync(sink, scene.graph_mut());
    }
    for frame in Timeline::fixed(fps).skip(1).take(frames as usize) {
        scene.update(frame.time);
        if let (Some(sink), Some(uploader)) = (sink, uploader.as_mut()) {
            uploader.sync(sink, scene.graph_mut());
        }
        log::trace!("{}: frame {} at {:.3}s", entry.name, frame.number, frame.time);
    }

    let dirty_marks = scene.graph().batches().iter().map(|b| b.buffer.dirty_marks()).sum();
    let mut report = RunReport {
        scene: entry.name.to_string(),
        slug: entry.slug(),
        seed: playback.seed,
        frames,
        fps,
        stats: scene.stats(),
        dirty_marks,
        uploads: uploader.as_ref().map(InstanceUploader::uploads),
        elapsed_ms: 0.0,
        started_at,
    };
    scene.unmount();
    report.set_elapsed(start.elapsed());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::AmbientState;
    use crate::gpu::GpuContext;
    use crate::scenes;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counter {
        writes: Cell<usize>,
    }

    impl BufferSink for Counter {
        type Buffer = ();

        fn create(&self, _label: &str, _bytes: &[u8]) {}

        fn write(&self, _buffer: &(), _bytes: &[u8]) {
            self.writes.set(self.writes.get() + 1);
        }
    }

    fn playback(frames: u64) -> PlaybackConfig {
        PlaybackConfig { fps: Some(30.0), frames: Some(frames), seed: Some(11) }
    }

    #[test]
    fn dirty_marks_count_mount_plus_frames() {
        let stage = Stage::new();
        let entry = scenes::find("bamboo-forest").unwrap();
        let report = play::<GpuContext>(&stage, entry, playback(10), None);

        assert_eq!(report.frames, 10);
        assert_eq!(report.dirty_marks, report.stats.batches as u64 * 11);
        assert!(report.uploads.is_none());
        assert_eq!(stage.ambient(), AmbientState::default());
    }

    #[test]
    fn uploads_once_per_batch_per_frame() {
        let stage = Stage::new();
        let entry = scenes::find("bamboo-forest").unwrap();
        let sink = Counter::default();
        let report = play(&stage, entry, playback(5), Some(&sink));

        let batches = report.stats.batches;
        assert!(batches > 0);
        assert_eq!(sink.writes.get(), batches * 5);
        assert_eq!(report.uploads, Some((batches * 6) as u64));
    }

    #[test]
    fn report_records_the_rate_actually_stepped() {
        let stage = Stage::new();
        let entry = scenes::find("bamboo-forest").unwrap();
        let playback = PlaybackConfig { fps: Some(0.0), frames: Some(3), seed: Some(11) };
        let report = play::<GpuContext>(&stage, entry, playback, None);

        assert_eq!(report.fps, 60.0);
        assert!(report.to_string().contains("at 60 fps"));
    }
}
