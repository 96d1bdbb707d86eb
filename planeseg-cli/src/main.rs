//! planeseg: extract planar surfaces from a PLY point cloud with RANSAC
//! and recolor each plane with a distinct palette color.

use clap::Parser;
use planeseg_algorithms::{segment_planes, SegmentationParams};
use planeseg_io::{read_point_cloud, write_point_cloud};
use std::path::PathBuf;
use std::process::ExitCode;

// Usage errors exit with clap's code 2; read and write failures get their
// own codes so scripts can tell them apart.
const EXIT_READ_FAILURE: u8 = 3;
const EXIT_WRITE_FAILURE: u8 = 4;

#[derive(Parser, Debug)]
#[command(
    name = "planeseg",
    version,
    about = "RANSAC plane segmentation for PLY point clouds",
    long_about = "Extracts up to N_PLANES planes from the input cloud and writes the \
                  points of each plane, painted with a distinct palette color, to the \
                  output file. The trial count per plane is adaptive: MAX_TRIALS only \
                  caps the estimate."
)]
struct Args {
    /// Input point cloud (.ply)
    input: PathBuf,

    /// Output point cloud (.ply), recolored by plane
    output: PathBuf,

    /// Maximum number of planes to extract
    n_planes: usize,

    /// Point-to-plane distance threshold for inliers
    threshold: f32,

    /// Cap on RANSAC trials per plane for the adaptive estimator
    max_trials: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    println!("Searching for {} planes", args.n_planes);
    println!("Using a point-plane threshold of {} units", args.threshold);
    println!("Capping RANSAC at {} trials per plane", args.max_trials);

    println!("Reading point cloud from {}", args.input.display());
    let mut cloud = match read_point_cloud(&args.input) {
        Ok(cloud) => cloud,
        Err(err) => {
            eprintln!(
                "Could not read point cloud from {}: {}",
                args.input.display(),
                err
            );
            return ExitCode::from(EXIT_READ_FAILURE);
        }
    };
    println!("Read {} points", cloud.len());

    let params = SegmentationParams::new(args.n_planes, args.threshold, args.max_trials);
    let result = match segment_planes(&mut cloud, &params, &mut rand::thread_rng()) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Segmentation failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    for (index, detected) in result.planes.iter().enumerate() {
        println!(
            "Plane {}: {} points, color {:?}",
            index + 1,
            detected.inlier_count,
            detected.color
        );
    }
    println!("{} points were not assigned to any plane", cloud.len());

    println!("Writing point cloud to {}", args.output.display());
    if let Err(err) = write_point_cloud(&result.output, &args.output) {
        eprintln!(
            "Could not write point cloud to {}: {}",
            args.output.display(),
            err
        );
        return ExitCode::from(EXIT_WRITE_FAILURE);
    }

    ExitCode::SUCCESS
}
