use std::time::Instant;

const FALLBACK_FPS: f32 = 60.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

#[derive(Debug, Clone, Copy)]
enum Clock {
    /// `time = number / fps`, independent of how fast frames are pulled
    Fixed { fps: f32 },
    /// Wall-clock seconds since the first frame
    Realtime { start: Option<Instant>, last: f32 },
}

/// Infinite iterator that yields frame information.
///
/// Use it with `take`: `for frame in Timeline::fixed(60.0).take(120) { ... }`
#[derive(Debug, Clone)]
pub struct Timeline {
    frame_number: u64,
    clock: Clock,
}

impl Timeline {
    /// Deterministic steps of `1 / fps` seconds; see [`Timeline::fixed_rate`].
    pub fn fixed(fps: f32) -> Self {
        Self {
            frame_number: 0,
            clock: Clock::Fixed { fps: Self::fixed_rate(fps) },
        }
    }

    /// Rate a fixed timeline steps at for a requested `fps`.
    /// Non-positive or non-finite rates fall back to 60.
    pub fn fixed_rate(fps: f32) -> f32 {
        if fps > 0.0 && fps.is_finite() {
            fps
        } else {
            FALLBACK_FPS
        }
    }

    /// Step rate of a fixed timeline, `None` for a realtime one.
    pub fn fps(&self) -> Option<f32> {
        match self.clock {
            Clock::Fixed { fps } => Some(fps),
            Clock::Realtime { .. } => None,
        }
    }

    /// Times taken from the wall clock, starting at zero on the first frame.
    pub fn realtime() -> Self {
        Self {
            frame_number: 0,
            clock: Clock::Realtime { start: None, last: 0.0 },
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.clock, Clock::Fixed { .. })
    }
}

impl Iterator for Timeline {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let number = self.frame_number;
        let info = match &mut self.clock {
            Clock::Fixed { fps } => {
                let time = number as f32 / *fps;
                let delta = if number == 0 { 0.0 } else { 1.0 / *fps };
                FrameInfo::new(number, time, delta)
            }
            Clock::Realtime { start, last } => {
                let start = *start.get_or_insert_with(Instant::now);
                let time = start.elapsed().as_secs_f32();
                let delta = time - *last;
                *last = time;
                FrameInfo::new(number, time, delta)
            }
        };

        self.frame_number += 1;
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn fixed_steps_are_frame_over_fps() {
        let frames: Vec<_> = Timeline::fixed(4.0).take(5).collect();
        let times: Vec<f32> = frames.iter().map(|f| f.time).collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(frames[0].delta, 0.0);
        assert_eq!(frames[3].delta, 0.25);
        assert_eq!(frames[4].number, 4);
    }

    #[test]
    fn fixed_rejects_zero_fps() {
        let second: Vec<_> = Timeline::fixed(0.0).take(2).collect();
        assert!((second[1].time - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(Timeline::fixed(0.0).fps(), Some(60.0));
        assert_eq!(Timeline::fixed_rate(f32::NAN), 60.0);
        assert_eq!(Timeline::fixed_rate(-24.0), 60.0);
        assert_eq!(Timeline::fixed(24.0).fps(), Some(24.0));
        assert_eq!(Timeline::realtime().fps(), None);
    }

    #[test]
    fn realtime_advances() {
        let mut timeline = Timeline::realtime();
        let first = timeline.next().unwrap();
        thread::sleep(Duration::from_millis(10));
        let second = timeline.next().unwrap();

        assert!(first.time < 0.005);
        assert!(second.time >= 0.009);
        assert!((second.delta - (second.time - first.time)).abs() < 1e-6);
        assert!(!timeline.is_fixed());
        assert_eq!(timeline.frame_number(), 2);
    }
}
