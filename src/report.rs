use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::scene::SceneStats;

/// Summary of one `run`, printed as text or JSON
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub scene: String,
    pub slug: String,
    pub seed: Option<u64>,
    pub frames: u64,
    pub fps: f32,
    pub stats: SceneStats,
    /// Dirty marks summed over every batch, including the mount-time pose
    pub dirty_marks: u64,
    /// GPU uploads performed, when `--gpu` was given
    pub uploads: Option<u64>,
    pub elapsed_ms: f64,
    pub started_at: DateTime<Local>,
}

impl RunReport {
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    }

    /// Mean wall time spent per frame.
    pub fn ms_per_frame(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.elapsed_ms / self.frames as f64
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.scene, self.slug)?;
        writeln!(f, "  started:     {}", self.started_at.format("%Y-%m-%d %H:%M:%S"))?;
        match self.seed {
            Some(seed) => writeln!(f, "  seed:        {seed}")?,
            None => writeln!(f, "  seed:        entropy")?,
        }
        writeln!(f, "  frames:      {} at {} fps", self.frames, self.fps)?;
        writeln!(
            f,
            "  graph:       {} meshes, {} groups, {} lights",
            self.stats.meshes, self.stats.groups, self.stats.lights
        )?;
        writeln!(
            f,
            "  particles:   {} instances in {} batches",
            self.stats.instances, self.stats.batches
        )?;
        writeln!(f, "  animators:   {}", self.stats.animators)?;
        writeln!(f, "  dirty marks: {}", self.dirty_marks)?;
        if let Some(uploads) = self.uploads {
            writeln!(f, "  uploads:     {uploads}")?;
        }
        write!(f, "  elapsed:     {:.2} ms ({:.3} ms/frame)", self.elapsed_ms, self.ms_per_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RunReport {
        RunReport {
            scene: "Bamboo Forest".into(),
            slug: "bamboo-forest".into(),
            seed: Some(3),
            frames: 10,
            fps: 60.0,
            stats: SceneStats { meshes: 5, batches: 1, instances: 200, ..Default::default() },
            dirty_marks: 11,
            uploads: None,
            elapsed_ms: 0.0,
            started_at: Local::now(),
        }
    }

    #[test]
    fn per_frame_time() {
        let mut report = report();
        report.set_elapsed(Duration::from_millis(50));
        assert!((report.ms_per_frame() - 5.0).abs() < 1e-9);

        report.frames = 0;
        assert_eq!(report.ms_per_frame(), 0.0);
    }

    #[test]
    fn json_has_stats_and_timestamp() {
        let value = serde_json::to_value(report()).unwrap();
        assert_eq!(value["slug"], "bamboo-forest");
        assert_eq!(value["stats"]["instances"], 200);
        assert!(value["started_at"].is_string());
        assert!(value["uploads"].is_null());
    }

    #[test]
    fn text_mentions_uploads_only_when_present() {
        let mut report = report();
        assert!(!report.to_string().contains("uploads"));
        report.uploads = Some(4);
        assert!(report.to_string().contains("uploads:     4"));
    }
}
