//! Roto Rings entry point
//!
//! Native demo driver: seeds a playfield, replays a scripted tap session,
//! and prints the status line the game would draw after each tap.

use roto_rings::consts::{NUM_SEGMENTS, OUTER_RADIUS, SECTOR_ANGLE_SIZE, SECTOR_NUM_DIVISIONS};
use roto_rings::sim::handle_tap;
use roto_rings::{Playfield, RngState, TapInput, mesh, polar_deg_to_cartesian};

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2015);
    let dump_snapshot = std::env::args().any(|arg| arg == "--snapshot");

    log::info!("Roto Rings (native) starting with seed {}", seed);

    let mut rng = RngState::new(seed).to_rng();
    let mut field = Playfield::new(
        NUM_SEGMENTS,
        SECTOR_NUM_DIVISIONS,
        SECTOR_ANGLE_SIZE,
        OUTER_RADIUS,
        &mut rng,
    );

    // Scripted tap session: (radius, angle in degrees, pointer id).
    // Includes an out-of-disc tap and a hub tap to show both miss paths.
    let script: [(f32, f32, u32); 8] = [
        (150.0, 10.0, 0),
        (150.0, 100.0, 1),
        (60.0, 200.0, 0),
        (240.0, 45.0, 0),
        (100.0, 300.0, 1),
        (20.0, 90.0, 1),
        (150.0, 350.0, 0),
        (190.0, 135.0, 1),
    ];

    for (r, theta, pointer) in script {
        let pos = polar_deg_to_cartesian(r, theta);
        let tap = TapInput::new(pos.x, pos.y, pointer);
        if handle_tap(&mut field, &tap, &mut rng) {
            println!(
                "Touched ({:.1}, {:.1}) -> sector {} segment {} | Sectors filled: {}",
                pos.x,
                pos.y,
                field.last_sector_touched().unwrap_or_default(),
                field.last_segment_touched().unwrap_or_default(),
                field.num_sectors_filled()
            );
        } else {
            println!("Touched ({:.1}, {:.1}) -> no hit", pos.x, pos.y);
        }
    }

    let vertices = mesh::playfield_vertices(&field);
    println!(
        "Playfield mesh: {} vertices ({} triangles)",
        vertices.len(),
        vertices.len() / 3
    );

    if dump_snapshot {
        match serde_json::to_string_pretty(&field) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("snapshot serialization failed: {}", err),
        }
    }
}
