//! Token inspector — decodes a share token and prints its contents.
//!
//! Usage: cargo run --bin inspect_token -- <TOKEN>
//!
//! Prints the decoded voxels as JSON (cell coordinates, palette index,
//! hex color), the world bounds, and the canonical re-encoding of the
//! same world, which upgrades legacy fixed-stride tokens to the delta
//! format.

use serde_json::json;

use voxpaint::codec;
use voxpaint::math::Aabb;
use voxpaint::voxel::VoxelWorld;

fn main() {
    voxpaint::core::logging::init();

    let Some(token) = std::env::args().nth(1) else {
        eprintln!("usage: inspect_token <TOKEN>");
        std::process::exit(2);
    };

    let voxels = match codec::decode(&token) {
        Ok(voxels) => voxels,
        Err(err) => {
            log::error!("cannot decode token: {err}");
            std::process::exit(1);
        }
    };

    let listing: Vec<_> = voxels
        .iter()
        .map(|voxel| {
            json!({
                "cell": [voxel.cell.x, voxel.cell.y, voxel.cell.z],
                "color": voxel.color.index(),
                "rgb": format!("#{:06X}", voxel.color.hex()),
            })
        })
        .collect();

    let bounds = voxels.iter().fold(None::<Aabb>, |bounds, voxel| {
        let aabb = voxel.aabb();
        Some(match bounds {
            Some(mut b) => {
                b.expand(aabb.min);
                b.expand(aabb.max);
                b
            }
            None => aabb,
        })
    });

    let world = VoxelWorld::from_voxels(voxels);
    let canonical = codec::encode(&world);

    let report = json!({
        "count": world.len(),
        "voxels": listing,
        "bounds": bounds.map(|b| {
            json!({
                "min": [b.min.x, b.min.y, b.min.z],
                "max": [b.max.x, b.max.y, b.max.z],
            })
        }),
        "canonical_token": canonical,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );
}
