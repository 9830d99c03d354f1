//! Draw a few random point sets with planted lines and compare both detectors.
//!
//! Usage:
//!   cargo run -p collinear --example planted_lines -- [seed]

use collinear::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let cfg = PointSetCfg {
        noise: 12,
        ..PointSetCfg::default()
    };
    for index in 0..5 {
        let pts = draw_point_set(cfg, ReplayToken { seed, index });
        let brute = match BruteCollinearPoints::new(&pts) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("sample {index}: {e}");
                continue;
            }
        };
        let fast = match FastCollinearPoints::new(&pts) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("sample {index}: {e}");
                continue;
            }
        };
        println!(
            "sample {index}: N={}, brute={}, fast={}",
            pts.len(),
            brute.number_of_segments(),
            fast.number_of_segments()
        );
        for s in fast.segments() {
            println!("  {s}");
        }
    }
}
