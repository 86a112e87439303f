//! # Clip Plane Demo
//!
//! Builds a small X3D scene, drives a clip plane through the same sequence
//! of gestures a viewer's sliders and buttons would send, and prints the
//! resulting X3D markup.
//!
//! ## Usage
//!
//! Run with: `RUST_LOG=debug cargo run --bin clip_demo`

use anyhow::Context;
use clipscope::prelude::*;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut scene = X3dScene::new();
    let root = scene.root();

    // A data cube and a smaller companion object sharing one clipping scope
    let model = scene.add_group(root)?;
    let cube = scene.add_group(model)?;
    let companion = scene.add_group(model)?;
    scene.set_bounds(
        cube,
        BoundingVolume::new(Vector3::new(-5.0, -5.0, -5.0), Vector3::new(5.0, 5.0, 5.0)),
    )?;
    // The companion is a tetrahedron; its box comes from the mesh vertices
    let companion_vertices = [
        [3.0, -2.0, -1.0],
        [7.0, -2.0, -1.0],
        [5.0, 2.0, -1.0],
        [5.0, 0.0, 1.0],
    ];
    scene.set_bounds(companion, BoundingVolume::from_points(&companion_vertices))?;

    let mut plane = ClipPlane::new(&mut scene, &model, &root, ClipPlaneConfig::default())
        .context("failed to create clip plane")?;

    plane.move_plane(&mut scene, 0.6)?;
    report(&plane, "after move");

    plane.rotate(&mut scene, 15f64.to_radians())?;
    plane.rotate(&mut scene, 15f64.to_radians())?;
    report(&plane, "after two 15 degree rotations");

    plane.set_clipping(&mut scene, plane.clip_side().flipped())?;
    plane.set_axis_by_name(&mut scene, "Y")?;
    plane.move_plane(&mut scene, 0.25)?;
    report(&plane, "after flipping and switching to Y");

    let enabled = plane.toggle_state(&mut scene)?;
    info!("Clipping enabled: {}", enabled);
    let enabled = plane.toggle_state(&mut scene)?;
    info!("Clipping enabled: {}", enabled);

    if let Err(err) = plane.set_axis_by_name(&mut scene, "W") {
        info!("Rejected axis change: {}", err);
    }

    println!("{}", scene.to_xml());
    Ok(())
}

fn report(plane: &ClipPlane<NodeId>, label: &str) {
    info!(
        "{}: axis {} distance {} angle {} plane {:?}",
        label,
        plane.axis(),
        plane.distance(),
        plane.angle(),
        plane.plane_equation()
    );
}
