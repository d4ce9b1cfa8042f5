// src/metrics.rs
use std::collections::VecDeque;

const WINDOW: usize = 30;

/// Rolling frame-time statistics over the last 30 processed frames.
#[derive(Clone)]
pub struct FrameMetrics {
    frame_times: VecDeque<f32>,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(WINDOW),
        }
    }

    pub fn record(&mut self, elapsed_secs: f32) {
        self.frame_times.push_front(elapsed_secs);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_back();
        }
    }

    pub fn avg_frame_time(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }

    pub fn avg_fps(&self) -> f32 {
        let avg = self.avg_frame_time();
        if avg > 0.0 {
            1.0 / avg
        } else {
            0.0
        }
    }
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_recorded_times() {
        let mut metrics = FrameMetrics::new();
        metrics.record(0.02);
        metrics.record(0.04);
        assert!((metrics.avg_frame_time() - 0.03).abs() < 1e-6);
        assert!((metrics.avg_fps() - 1.0 / 0.03).abs() < 1e-2);
    }

    #[test]
    fn window_is_bounded() {
        let mut metrics = FrameMetrics::new();
        for _ in 0..100 {
            metrics.record(0.01);
        }
        assert_eq!(metrics.frame_times.len(), WINDOW);
    }

    #[test]
    fn empty_metrics_report_zero() {
        let metrics = FrameMetrics::new();
        assert_eq!(metrics.avg_fps(), 0.0);
    }
}
