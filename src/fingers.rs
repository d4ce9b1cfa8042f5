// src/fingers.rs
use crate::geometry::{dot, normalize};
use crate::landmarks::{HandObservation, FINGERTIPS, THUMB_TIP, WRIST};

pub const FINGER_COUNT: usize = 5;

/// Signed openness score per finger, thumb first. Each score is the
/// cosine between the joint-to-tip direction and the wrist-to-joint
/// direction: positive when the finger extends away from the palm,
/// negative when it curls back.
pub fn finger_openness(obs: &HandObservation, thumb_open_threshold: f64) -> [f64; FINGER_COUNT] {
    let lms = &obs.landmarks;
    let wrist = lms[WRIST];
    let mut scores = [0.0; FINGER_COUNT];

    for (finger, &tip) in FINGERTIPS.iter().enumerate() {
        let base = tip - 2;
        let fv = normalize(lms[tip] - lms[base]);
        let pv = normalize(lms[base] - wrist);
        let score = dot(&fv, &pv);

        scores[finger] = if tip == THUMB_TIP {
            thumb_score(score, thumb_open_threshold)
        } else {
            score
        };
    }
    scores
}

/// A thumb folded across the palm still scores moderately positive under
/// the pure dot-product model, so anything at or below the threshold is
/// forced to fully closed.
pub(crate) fn thumb_score(raw: f64, threshold: f64) -> f64 {
    if raw > threshold {
        raw
    } else {
        -1.0
    }
}
