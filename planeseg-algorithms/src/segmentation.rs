//! RANSAC plane extraction over colored point clouds
//!
//! The engine repeatedly searches the working cloud for the plane with the
//! most inliers, recolors those points with the next palette color, moves
//! them to the output cloud, and continues until the plane budget is spent
//! or too few points remain.

use crate::palette;
use crate::plane::Plane;
use crate::trials::required_trials;
use planeseg_core::{ColoredPoint3f, Error, PointCloud, Result};
use rand::Rng;

/// How the per-plane trial budget is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialMode {
    /// Re-estimate the needed trial count from the best inlier ratio after
    /// every trial, capped at `max_trials`. The target moves as the best
    /// set improves.
    Adaptive,
    /// Run exactly `max_trials` trials per plane.
    Fixed,
}

/// Parameters for [`segment_planes`].
#[derive(Debug, Clone)]
pub struct SegmentationParams {
    /// Maximum number of planes to extract
    pub n_planes: usize,
    /// Point-to-plane distance threshold for inliers
    pub threshold: f32,
    /// Per-plane trial budget; the cap for [`TrialMode::Adaptive`], the
    /// exact count for [`TrialMode::Fixed`]
    pub max_trials: usize,
    /// Trial budget semantics
    pub trial_mode: TrialMode,
    /// Desired probability that at least one trial sampled an all-inlier
    /// triple (only used by [`TrialMode::Adaptive`])
    pub confidence: f64,
    /// Stop searching once the working cloud shrinks to this fraction of
    /// its original size
    pub min_remaining_ratio: f32,
}

impl SegmentationParams {
    /// Parameters with the default adaptive trial mode, 0.9 confidence and
    /// a 10% early-stop fraction.
    pub fn new(n_planes: usize, threshold: f32, max_trials: usize) -> Self {
        Self {
            n_planes,
            threshold,
            max_trials,
            trial_mode: TrialMode::Adaptive,
            confidence: 0.9,
            min_remaining_ratio: 0.1,
        }
    }
}

/// A plane accepted by the engine.
#[derive(Debug, Clone)]
pub struct DetectedPlane {
    /// The fitted plane model
    pub plane: Plane,
    /// How many points were assigned to it
    pub inlier_count: usize,
    /// The palette color its points were painted with
    pub color: [u8; 3],
}

/// Result of a segmentation run.
#[derive(Debug, Clone)]
pub struct SegmentationResult {
    /// Points assigned to planes, recolored, in plane-discovery order
    pub output: PointCloud<ColoredPoint3f>,
    /// Summary of each accepted plane, in discovery order
    pub planes: Vec<DetectedPlane>,
}

/// Extract up to `params.n_planes` planes from `cloud`.
///
/// Accepted inliers are moved (not copied) from `cloud` into the returned
/// output cloud and recolored by plane index; `cloud` is left holding the
/// points that were never assigned to any plane. The search stops early
/// once the working cloud falls to `min_remaining_ratio` of its original
/// size or no valid plane can be fitted anymore.
///
/// All randomness comes from `rng`, so a seeded generator makes the run
/// reproducible.
pub fn segment_planes<R: Rng + ?Sized>(
    cloud: &mut PointCloud<ColoredPoint3f>,
    params: &SegmentationParams,
    rng: &mut R,
) -> Result<SegmentationResult> {
    if cloud.len() < 3 {
        return Err(Error::InvalidData(
            "Need at least 3 points for plane segmentation".to_string(),
        ));
    }
    if params.threshold <= 0.0 {
        return Err(Error::InvalidData("Threshold must be positive".to_string()));
    }
    if params.max_trials == 0 {
        return Err(Error::InvalidData(
            "Trial budget must be positive".to_string(),
        ));
    }

    let original_len = cloud.len();
    let min_remaining = original_len as f32 * params.min_remaining_ratio;

    let mut output = PointCloud::with_capacity(original_len);
    let mut planes = Vec::new();

    for plane_index in 0..params.n_planes {
        if cloud.len() as f32 <= min_remaining || cloud.len() < 3 {
            break;
        }

        let Some((plane, inliers)) = search_plane(cloud, params, rng) else {
            // No non-degenerate triple could be sampled; nothing left to fit
            break;
        };

        let color = palette::color_for(plane_index);

        // Descending order keeps the not-yet-removed inlier indices valid
        // under swap_remove: only slots above the current index are
        // disturbed, and those have already been processed.
        for &index in inliers.iter().rev() {
            let mut point = cloud.swap_remove(index);
            point.color = color;
            output.push(point);
        }

        planes.push(DetectedPlane {
            plane,
            inlier_count: inliers.len(),
            color,
        });
    }

    Ok(SegmentationResult { output, planes })
}

/// One plane search: run trials until the (possibly moving) trial target
/// is reached and return the best plane with its inlier indices.
///
/// Returns `None` only when not a single valid plane could be fitted, i.e.
/// every sampled triple was degenerate.
fn search_plane<R: Rng + ?Sized>(
    cloud: &PointCloud<ColoredPoint3f>,
    params: &SegmentationParams,
    rng: &mut R,
) -> Option<(Plane, Vec<usize>)> {
    let mut best_plane: Option<Plane> = None;
    let mut best_inliers: Vec<usize> = Vec::new();
    let mut trial = 0;

    loop {
        let Some(plane) = sample_plane(cloud, rng) else {
            // Resampling budget exhausted; settle for the best found so far
            break;
        };

        let inliers = plane.inliers(&cloud.points, params.threshold);
        if inliers.len() > best_inliers.len() {
            best_inliers = inliers;
            best_plane = Some(plane);
        }

        trial += 1;
        let target = match params.trial_mode {
            TrialMode::Fixed => params.max_trials,
            TrialMode::Adaptive => required_trials(
                params.confidence,
                best_inliers.len(),
                cloud.len(),
                params.max_trials,
            ),
        };
        if trial >= target {
            break;
        }
    }

    best_plane.map(|plane| (plane, best_inliers))
}

/// Sample a random triple (uniformly, with replacement) and fit a plane.
///
/// Degenerate triples are resampled without consuming a trial, at most
/// once per remaining point; `None` means the budget ran out without a
/// valid fit.
fn sample_plane<R: Rng + ?Sized>(
    cloud: &PointCloud<ColoredPoint3f>,
    rng: &mut R,
) -> Option<Plane> {
    for _ in 0..cloud.len() {
        let p1 = &cloud[rng.gen_range(0..cloud.len())];
        let p2 = &cloud[rng.gen_range(0..cloud.len())];
        let p3 = &cloud[rng.gen_range(0..cloud.len())];

        if let Some(plane) = Plane::from_points(&p1.position, &p2.position, &p3.position) {
            return Some(plane);
        }
    }
    None
}
