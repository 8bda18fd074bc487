//! Loads a set of named curve recipes from JSON and plays them back frame by
//! frame, the way an animation player samples one curve per property.

use anyhow::{Context, Result};
use motion_curves::{Curve, CurveRecipe};
use serde::Deserialize;

const DEFINITION: &str = r#"{
    "seed": 7,
    "duration_frames": 12,
    "tracks": [
        { "property": "eye_open", "recipe": { "steps": [
            { "op": "bounce", "start": 0.1, "end": 0.1 },
            { "op": "reverse" },
            { "op": "map_range", "to_min": 1.0, "to_max": 0.0 }
        ] } },
        { "property": "head_yaw", "recipe": { "steps": [
            { "op": "wiggle", "freq": 4 },
            { "op": "map_range", "to_min": -20.0, "to_max": 20.0 }
        ] } },
        { "property": "breath", "recipe": { "steps": [
            { "op": "ease" },
            { "op": "loop", "period": 2.0 }
        ] } }
    ]
}"#;

#[derive(Deserialize)]
struct Track {
    property: String,
    recipe: CurveRecipe,
}

#[derive(Deserialize)]
struct Definition {
    seed: u64,
    duration_frames: usize,
    tracks: Vec<Track>,
}

fn main() -> Result<()> {
    let definition: Definition =
        serde_json::from_str(DEFINITION).context("parsing animation definition")?;

    let curves: Vec<(String, Curve)> = definition
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let curve = track
                .recipe
                .build_seeded(definition.seed + i as u64)
                .with_context(|| format!("building curve for {}", track.property))?;
            println!("{:>10}: {}", track.property, track.recipe);
            Ok((track.property.clone(), curve))
        })
        .collect::<Result<_>>()?;
    println!();

    let last = (definition.duration_frames - 1) as f64;
    for frame in 0..definition.duration_frames {
        let t = frame as f64 / last;
        print!("frame {frame:2} (t={t:.2})");
        for (property, curve) in &curves {
            print!("  {property}={:7.3}", curve.sample(t));
        }
        println!();
    }

    Ok(())
}
