// ABOUTME: Front-view posture screening from pose landmarks
// ABOUTME: Shoulder/hip/head tilt and knee-in ratio checks behind an optional PoseDetector seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! Posture Check
//!
//! Landmark detection is done by an external pose model; this module only
//! consumes its output. Landmarks follow the 33-point `BlazePose` indexing with
//! coordinates normalized to the image (`x` to the right, `y` downwards).
//!
//! The feature is optional: when no detector is available, or detection
//! fails, [`run_posture_check`] returns a skipped report instead of an error
//! so estimation and export carry on.

use crate::logging::AppLogger;
use fitform_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// `BlazePose` landmark indices used by the checks
pub mod landmark_index {
    /// Left ear
    pub const LEFT_EAR: usize = 7;
    /// Right ear
    pub const RIGHT_EAR: usize = 8;
    /// Left shoulder
    pub const LEFT_SHOULDER: usize = 11;
    /// Right shoulder
    pub const RIGHT_SHOULDER: usize = 12;
    /// Left hip
    pub const LEFT_HIP: usize = 23;
    /// Right hip
    pub const RIGHT_HIP: usize = 24;
    /// Left knee
    pub const LEFT_KNEE: usize = 25;
    /// Right knee
    pub const RIGHT_KNEE: usize = 26;
    /// Left ankle
    pub const LEFT_ANKLE: usize = 27;
    /// Right ankle
    pub const RIGHT_ANKLE: usize = 28;
    /// Minimum number of landmarks required
    pub const REQUIRED: usize = 29;
}

/// A single normalized landmark
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Landmark {
    /// Horizontal position (0 = left edge of image)
    pub x: f64,
    /// Vertical position (0 = top edge of image)
    pub y: f64,
}

/// Landmark set for one front-facing photo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoseLandmarks {
    /// Landmarks in `BlazePose` order
    pub landmarks: Vec<Landmark>,
}

impl PoseLandmarks {
    fn point(&self, index: usize) -> AppResult<Landmark> {
        self.landmarks.get(index).copied().ok_or_else(|| {
            AppError::feature_unavailable(
                "posture",
                format!(
                    "landmark {index} missing (got {} landmarks, need {})",
                    self.landmarks.len(),
                    landmark_index::REQUIRED
                ),
            )
        })
    }
}

/// Source of pose landmarks
pub trait PoseDetector {
    /// Detect landmarks for the given input
    ///
    /// # Errors
    ///
    /// Returns `OptionalFeatureUnavailable` when detection is impossible
    fn detect(&self, input: &Path) -> AppResult<PoseLandmarks>;
}

/// Detector used when no pose model is installed
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDetector;

impl PoseDetector for UnavailableDetector {
    fn detect(&self, _input: &Path) -> AppResult<PoseLandmarks> {
        Err(AppError::feature_unavailable(
            "posture",
            "no pose detector is installed, posture analysis skipped",
        ))
    }
}

/// Detector that reads landmarks exported by an external pose model as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct LandmarkFileDetector;

impl PoseDetector for LandmarkFileDetector {
    fn detect(&self, input: &Path) -> AppResult<PoseLandmarks> {
        let raw = fs::read_to_string(input).map_err(|e| {
            AppError::feature_unavailable(
                "posture",
                format!("cannot read landmark file {}: {e}", input.display()),
            )
        })?;
        let parsed: PoseLandmarks = serde_json::from_str(&raw).map_err(|e| {
            AppError::feature_unavailable("posture", format!("malformed landmark file: {e}"))
        })?;
        if parsed.landmarks.len() < landmark_index::REQUIRED {
            return Err(AppError::feature_unavailable(
                "posture",
                "landmarks could not be detected; retry with a bright, front-facing full-body photo",
            ));
        }
        Ok(parsed)
    }
}

/// Thresholds for flagging a finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostureThresholds {
    /// Tilt from horizontal that counts as asymmetric (degrees)
    pub tilt_deg: f64,
    /// Knee/ankle distance ratio below which knee-in is flagged
    pub knee_in_ratio: f64,
}

impl Default for PostureThresholds {
    fn default() -> Self {
        Self {
            tilt_deg: 5.0,
            knee_in_ratio: 0.9,
        }
    }
}

/// Kind of posture finding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Shoulder height asymmetry
    ShoulderTilt,
    /// Pelvic (hip line) asymmetry
    PelvicTilt,
    /// Head tilt (ear line)
    HeadTilt,
    /// Knees collapsing inwards
    KneeIn,
}

impl FindingKind {
    /// Corrective advice for this finding
    #[must_use]
    pub const fn advice(&self) -> &'static str {
        match self {
            Self::ShoulderTilt => {
                "Shoulder asymmetry: possible upper-trapezius overactivity or weak obliques. Side planks and shoulder-press form work."
            }
            Self::PelvicTilt => {
                "Pelvic asymmetry: possible weak glute medius/maximus or limited hip mobility. Clamshells and hip-hinge drills."
            }
            Self::HeadTilt => {
                "Head tilt: side-to-side difference in neck muscles. Daily thoracic extension and light neck stretches."
            }
            Self::KneeIn => {
                "Knee-in: hip external rotator / adductor imbalance. Banded squats pushing knees out, glute bridges."
            }
        }
    }
}

/// One flagged deviation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostureFinding {
    /// What was flagged
    pub kind: FindingKind,
    /// Measured value (degrees for tilts, ratio for knee-in)
    pub value: f64,
    /// Human-readable description
    pub message: String,
}

/// Whether the analysis ran
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostureStatus {
    /// Landmarks were analysed
    Analyzed,
    /// Feature unavailable or detection failed
    Skipped,
}

/// Result of a posture check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostureReport {
    /// Whether analysis ran
    pub status: PostureStatus,
    /// Status or skip reason
    pub message: String,
    /// Flagged deviations
    pub findings: Vec<PostureFinding>,
    /// Corrective advice, one entry per finding kind
    pub advice: Vec<String>,
}

impl PostureReport {
    /// Report for a check that did not run
    #[must_use]
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            status: PostureStatus::Skipped,
            message: reason.into(),
            findings: Vec::new(),
            advice: Vec::new(),
        }
    }

    /// Whether the analysis ran
    #[must_use]
    pub fn is_analyzed(&self) -> bool {
        self.status == PostureStatus::Analyzed
    }
}

/// Angle of the line from `from` to `to`, in degrees from horizontal
///
/// Normalized to [-90, 90] so the result does not depend on which side of
/// the image each landmark lands.
#[must_use]
pub fn line_tilt_deg(from: Landmark, to: Landmark) -> f64 {
    let deg = (to.y - from.y).atan2(to.x - from.x).to_degrees();
    if deg > 90.0 {
        deg - 180.0
    } else if deg < -90.0 {
        deg + 180.0
    } else {
        deg
    }
}

fn distance(a: Landmark, b: Landmark) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Analyse a landmark set
///
/// # Errors
///
/// Returns `OptionalFeatureUnavailable` if required landmarks are missing
pub fn analyze_posture(
    pose: &PoseLandmarks,
    thresholds: &PostureThresholds,
) -> AppResult<PostureReport> {
    use landmark_index as idx;

    let shoulder = line_tilt_deg(pose.point(idx::RIGHT_SHOULDER)?, pose.point(idx::LEFT_SHOULDER)?);
    let hip = line_tilt_deg(pose.point(idx::RIGHT_HIP)?, pose.point(idx::LEFT_HIP)?);
    let head = line_tilt_deg(pose.point(idx::RIGHT_EAR)?, pose.point(idx::LEFT_EAR)?);
    let knee_w = distance(pose.point(idx::LEFT_KNEE)?, pose.point(idx::RIGHT_KNEE)?);
    let ankle_w = distance(pose.point(idx::LEFT_ANKLE)?, pose.point(idx::RIGHT_ANKLE)?);

    let mut findings = Vec::new();
    let tilts = [
        (FindingKind::ShoulderTilt, shoulder, "Shoulder height difference"),
        (FindingKind::PelvicTilt, hip, "Pelvic tilt"),
        (FindingKind::HeadTilt, head, "Head tilt"),
    ];
    for (kind, value, label) in tilts {
        if value.abs() >= thresholds.tilt_deg {
            findings.push(PostureFinding {
                kind,
                value,
                message: format!(
                    "{label}: {value:.1} deg (>= {:.0} deg, check)",
                    thresholds.tilt_deg
                ),
            });
        }
    }
    if ankle_w > 0.0 {
        let ratio = knee_w / ankle_w;
        if ratio < thresholds.knee_in_ratio {
            findings.push(PostureFinding {
                kind: FindingKind::KneeIn,
                value: ratio,
                message: format!(
                    "Knee-in tendency (knee/ankle width ratio): {ratio:.2} (< {:.2}, check)",
                    thresholds.knee_in_ratio
                ),
            });
        }
    }

    let advice = findings.iter().map(|f| f.kind.advice().to_owned()).collect();
    Ok(PostureReport {
        status: PostureStatus::Analyzed,
        message: "Analysis complete".to_owned(),
        findings,
        advice,
    })
}

/// Detect and analyse, downgrading any failure to a skipped report
#[must_use]
pub fn run_posture_check(
    detector: &dyn PoseDetector,
    input: &Path,
    thresholds: &PostureThresholds,
) -> PostureReport {
    detector
        .detect(input)
        .and_then(|pose| analyze_posture(&pose, thresholds))
        .unwrap_or_else(|e| {
            AppLogger::log_feature_skipped("posture", &e.message);
            PostureReport::skipped(e.message)
        })
}
