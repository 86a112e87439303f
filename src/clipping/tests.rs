//! Clip plane behaviour against an in-memory X3D scene

use cgmath::{InnerSpace, Matrix3, Rad, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

use super::{ClipPlane, ClipPlaneConfig};
use crate::error::ClipPlaneError;
use crate::geometry::{Axis, BoundingVolume, ClipSide};
use crate::scene::{
    Attribute, AttributeValue, NodeId, NodeKind, SceneError, SceneGraph, X3dScene,
};

const EPS: f64 = 1e-3;

struct Fixture {
    scene: X3dScene,
    model: NodeId,
    plane: ClipPlane<NodeId>,
}

fn fixture_with(config: ClipPlaneConfig) -> Fixture {
    let mut scene = X3dScene::new();
    let root = scene.root();
    let model = scene.add_group(root).unwrap();
    scene
        .set_bounds(
            model,
            BoundingVolume::new(Vector3::new(-5.0, -2.0, -1.0), Vector3::new(5.0, 2.0, 1.0)),
        )
        .unwrap();
    let plane = ClipPlane::new(&mut scene, &model, &root, config).unwrap();
    Fixture { scene, model, plane }
}

fn fixture() -> Fixture {
    fixture_with(ClipPlaneConfig::default())
}

fn floats(text: &str) -> Vec<f64> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().unwrap())
        .collect()
}

fn attr(f: &Fixture, node: &NodeId, name: &str) -> String {
    f.scene.attribute(*node, name).unwrap().to_string()
}

/// Slider position mapped onto the fixture's X extent, rounded to a tenth
/// with ties going toward positive infinity
fn expected_distance(value: f64) -> f64 {
    let scaled = (value * 10.0 - 5.0) * 10.0;
    let nearest = scaled.round();
    let nearest = if scaled - nearest == 0.5 { nearest + 1.0 } else { nearest };
    nearest / 10.0
}

/// Scene that rejects writes of one attribute and forwards everything else
struct FlakyScene {
    inner: X3dScene,
    fail_on: Option<Attribute>,
}

impl SceneGraph for FlakyScene {
    type Node = NodeId;

    fn bounding_volume(&self, scope: &NodeId) -> Result<BoundingVolume, SceneError> {
        self.inner.bounding_volume(scope)
    }

    fn create_node(&mut self, kind: NodeKind) -> Result<NodeId, SceneError> {
        self.inner.create_node(kind)
    }

    fn set_attribute(
        &mut self,
        node: &NodeId,
        attribute: Attribute,
        value: AttributeValue,
    ) -> Result<(), SceneError> {
        if self.fail_on == Some(attribute) {
            return Err(SceneError::Host(format!("{} rejected", attribute)));
        }
        self.inner.set_attribute(node, attribute, value)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), SceneError> {
        self.inner.append_child(parent, child)
    }
}

fn flaky_scene() -> (FlakyScene, NodeId) {
    let mut inner = X3dScene::new();
    let model = inner.add_group(inner.root()).unwrap();
    inner
        .set_bounds(
            model,
            BoundingVolume::new(Vector3::new(-5.0, -2.0, -1.0), Vector3::new(5.0, 2.0, 1.0)),
        )
        .unwrap();
    (FlakyScene { inner, fail_on: None }, model)
}

#[test]
fn test_construction_builds_both_subtrees() {
    let f = fixture();
    let clip = f.plane.clip_plane_node();

    assert_eq!(attr(&f, clip, "enabled"), "true");
    assert_eq!(attr(&f, clip, "plane"), "-1 0 0 0");
    assert_eq!(attr(&f, clip, "cappingStrength"), "0.003");
    assert_eq!(attr(&f, clip, "cappingColor"), "0 0 0");
    assert_eq!(f.scene.parent(*clip), Some(f.model));

    let proxy = f.plane.proxy();
    assert_eq!(f.scene.parent(*proxy.transform()), Some(f.scene.root()));
    assert_eq!(attr(&f, proxy.transform(), "rotation"), "0 1 0 0");
    assert_eq!(attr(&f, proxy.transform(), "translation"), "0 0 0");
    assert_eq!(attr(&f, proxy.material(), "emissiveColor"), "0 0 0");
    assert_eq!(attr(&f, proxy.material(), "transparency"), "0");
    assert_eq!(
        attr(&f, proxy.coordinates(), "point"),
        "0 2 -1, 0 -2 -1, 0 -2 1, 0 2 1, 0 2 -1"
    );

    let lines = f.scene.find_all(NodeKind::LineSet);
    assert_eq!(lines.len(), 1);
    assert_eq!(attr(&f, &lines[0], "vertexCount"), "5");

    assert_eq!(f.plane.axis(), Axis::X);
    assert_eq!(f.plane.clip_side(), ClipSide::Negative);
    assert_eq!(f.plane.normal(), Vector3::new(-1.0, 0.0, 0.0));
    assert_eq!(f.plane.distance(), 0.0);
    assert_eq!(f.plane.angle(), 0);
    assert!(f.plane.is_enabled());
}

#[test]
fn test_construction_errors() {
    let mut scene = X3dScene::new();
    let root = scene.root();
    let empty = scene.add_group(root).unwrap();

    let result = ClipPlane::new(&mut scene, &empty, &root, ClipPlaneConfig::default());
    assert!(matches!(
        result,
        Err(ClipPlaneError::Scene(SceneError::EmptyScope(_)))
    ));

    scene
        .set_bounds(
            empty,
            BoundingVolume::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 1.0)),
        )
        .unwrap();
    let result = ClipPlane::new(&mut scene, &empty, &root, ClipPlaneConfig::default());
    assert!(matches!(result, Err(ClipPlaneError::DegenerateVolume { .. })));

    let config = ClipPlaneConfig::default().with_capping_strength(-1.0);
    let result = ClipPlane::new(&mut scene, &empty, &root, config);
    assert!(matches!(result, Err(ClipPlaneError::InvalidConfig(_))));
}

#[test]
fn test_disabled_configuration_hides_proxy() {
    let f = fixture_with(ClipPlaneConfig::default().with_enabled(false));

    assert!(!f.plane.is_enabled());
    assert_eq!(attr(&f, f.plane.clip_plane_node(), "enabled"), "false");
    assert_eq!(attr(&f, f.plane.proxy().material(), "transparency"), "1");
}

#[test]
fn test_move_interpolates_extent() {
    let mut f = fixture();

    f.plane.move_plane(&mut f.scene, 0.5).unwrap();
    assert_eq!(f.plane.distance(), 0.0);

    f.plane.move_plane(&mut f.scene, 1.0).unwrap();
    assert_eq!(f.plane.distance(), 5.0);
    assert_eq!(attr(&f, f.plane.clip_plane_node(), "plane"), "-1 0 0 5");
    assert_eq!(attr(&f, f.plane.proxy().transform(), "translation"), "5 0 0");

    f.plane.move_plane(&mut f.scene, 0.0).unwrap();
    assert_eq!(f.plane.distance(), -5.0);

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let value: f64 = rng.random_range(0.0..=1.0);
        f.plane.move_plane(&mut f.scene, value).unwrap();
        assert_eq!(f.plane.distance(), expected_distance(value));
    }

    for step in 0..=10_000 {
        let value = step as f64 / 10_000.0;
        f.plane.move_plane(&mut f.scene, value).unwrap();
        assert_eq!(f.plane.distance(), expected_distance(value), "value {}", value);
    }
}

#[test]
fn test_move_half_tenth_rounds_up() {
    let mut f = fixture();

    // -3.05 sits just below the tie and must not drop to -3.1
    f.plane.move_plane(&mut f.scene, 0.195).unwrap();
    assert_eq!(f.plane.distance(), -3.0);

    f.plane.move_plane(&mut f.scene, 0.225).unwrap();
    assert_eq!(f.plane.distance(), -2.7);
}

#[test]
fn test_move_uses_active_axis_extent() {
    let mut f = fixture();

    f.plane.set_axis(&mut f.scene, Axis::Y).unwrap();
    f.plane.move_plane(&mut f.scene, 1.0).unwrap();
    assert_eq!(f.plane.distance(), 2.0);

    f.plane.set_axis(&mut f.scene, Axis::Z).unwrap();
    f.plane.move_plane(&mut f.scene, 0.25).unwrap();
    assert_eq!(f.plane.distance(), -0.5);
}

#[test]
fn test_move_outside_unit_range_extrapolates() {
    let mut f = fixture();

    f.plane.move_plane(&mut f.scene, 1.5).unwrap();
    assert_eq!(f.plane.distance(), 10.0);
}

#[test]
fn test_rotate_accumulates() {
    let mut f = fixture();

    f.plane.rotate(&mut f.scene, FRAC_PI_2).unwrap();
    assert_eq!(f.plane.angle(), 90);
    // -X rotated a quarter turn around Y
    assert!((f.plane.normal() - Vector3::new(0.0, 0.0, 1.0)).magnitude() < EPS);

    f.plane.rotate(&mut f.scene, -PI).unwrap();
    assert_eq!(f.plane.angle(), -90);

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let r1: f64 = rng.random_range(-1.0..1.0);
        let r2: f64 = rng.random_range(-1.0..1.0);

        let mut split = fixture();
        split.plane.rotate(&mut split.scene, r1).unwrap();
        split.plane.rotate(&mut split.scene, r2).unwrap();

        let mut single = fixture();
        single.plane.rotate(&mut single.scene, r1 + r2).unwrap();

        assert_eq!(split.plane.angle(), single.plane.angle());
        assert!((split.plane.normal() - single.plane.normal()).magnitude() < EPS);
    }
}

#[test]
fn test_rotation_attribute_follows_axis() {
    let mut f = fixture();

    f.plane.rotate(&mut f.scene, 0.5).unwrap();
    assert_eq!(attr(&f, f.plane.proxy().transform(), "rotation"), "0 1 0 0.5");

    f.plane.set_axis(&mut f.scene, Axis::Y).unwrap();
    f.plane.rotate(&mut f.scene, 0.25).unwrap();
    assert_eq!(attr(&f, f.plane.proxy().transform(), "rotation"), "0 0 1 0.25");

    f.plane.set_axis(&mut f.scene, Axis::Z).unwrap();
    f.plane.rotate(&mut f.scene, -0.25).unwrap();
    assert_eq!(attr(&f, f.plane.proxy().transform(), "rotation"), "1 0 0 -0.25");
}

#[test]
fn test_toggle_state_is_a_flip() {
    let mut f = fixture();
    let clip = *f.plane.clip_plane_node();
    let material = *f.plane.proxy().material();

    assert!(!f.plane.toggle_state(&mut f.scene).unwrap());
    assert_eq!(f.scene.attribute(clip, "enabled"), Some("false"));
    assert_eq!(f.scene.attribute(material, "transparency"), Some("1"));

    assert!(f.plane.toggle_state(&mut f.scene).unwrap());
    assert_eq!(f.scene.attribute(clip, "enabled"), Some("true"));
    assert_eq!(f.scene.attribute(material, "transparency"), Some("0"));
}

#[test]
fn test_axis_and_side_changes_reset_state() {
    for axis in Axis::ALL {
        for side in [ClipSide::Negative, ClipSide::Positive] {
            let mut f = fixture();
            f.plane.move_plane(&mut f.scene, 0.8).unwrap();
            f.plane.rotate(&mut f.scene, 0.7).unwrap();

            f.plane.set_axis(&mut f.scene, axis).unwrap();
            f.plane.move_plane(&mut f.scene, 0.1).unwrap();
            f.plane.set_clipping(&mut f.scene, side).unwrap();

            assert_eq!(f.plane.angle(), 0);
            assert_eq!(f.plane.distance(), 0.0);
            assert_eq!(f.plane.normal(), axis.normal(side));

            let plane = floats(&attr(&f, f.plane.clip_plane_node(), "plane"));
            let normal = axis.normal(side);
            assert_eq!(plane, vec![normal.x, normal.y, normal.z, 0.0]);
        }
    }
}

#[test]
fn test_axis_change_rebuilds_outline() {
    let mut f = fixture();

    f.plane.set_axis(&mut f.scene, Axis::Y).unwrap();
    assert_eq!(
        attr(&f, f.plane.proxy().coordinates(), "point"),
        "-5 0 1, -5 0 -1, 5 0 -1, 5 0 1, -5 0 1"
    );
    assert_eq!(attr(&f, f.plane.clip_plane_node(), "plane"), "0 -1 0 0");

    f.plane.set_axis(&mut f.scene, Axis::Z).unwrap();
    let points = floats(&attr(&f, f.plane.proxy().coordinates(), "point"));
    assert_eq!(points.len(), 15);
    assert_eq!(&points[0..3], &points[12..15]);
    assert!(points.chunks(3).all(|p| p[2] == 0.0));
    assert_eq!(
        points.chunks(3).map(|p| p[0]).fold(f64::INFINITY, f64::min),
        -5.0
    );
    assert_eq!(
        points.chunks(3).map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max),
        2.0
    );
}

#[test]
fn test_side_change_keeps_outline() {
    let mut f = fixture();
    let before = attr(&f, f.plane.proxy().coordinates(), "point");

    f.plane.set_clipping(&mut f.scene, ClipSide::Positive).unwrap();
    assert_eq!(attr(&f, f.plane.proxy().coordinates(), "point"), before);
    assert_eq!(attr(&f, f.plane.clip_plane_node(), "plane"), "1 0 0 0");
}

#[test]
fn test_invalid_names_leave_state_untouched() {
    let mut f = fixture();
    f.plane.move_plane(&mut f.scene, 0.9).unwrap();
    let plane_before = attr(&f, f.plane.clip_plane_node(), "plane");

    let err = f.plane.set_axis_by_name(&mut f.scene, "W").unwrap_err();
    assert_eq!(err, ClipPlaneError::UnknownAxis("W".to_string()));
    assert!(matches!(
        f.plane.set_clipping_value(&mut f.scene, 0),
        Err(ClipPlaneError::InvalidClipSide(_))
    ));

    assert_eq!(f.plane.axis(), Axis::X);
    assert_eq!(f.plane.clip_side(), ClipSide::Negative);
    assert_eq!(f.plane.distance(), 4.0);
    assert_eq!(attr(&f, f.plane.clip_plane_node(), "plane"), plane_before);

    f.plane.set_axis_by_name(&mut f.scene, "z").unwrap();
    f.plane.set_clipping_value(&mut f.scene, 1).unwrap();
    assert_eq!(f.plane.axis(), Axis::Z);
    assert_eq!(f.plane.clip_side(), ClipSide::Positive);
}

#[test]
fn test_proxy_tracks_clip_plane() {
    let mut rng = StdRng::seed_from_u64(42);

    for axis in Axis::ALL {
        let mut f = fixture();
        f.plane.set_axis(&mut f.scene, axis).unwrap();

        for _ in 0..40 {
            if rng.random_bool(0.5) {
                let value: f64 = rng.random_range(0.0..=1.0);
                f.plane.move_plane(&mut f.scene, value).unwrap();
            } else {
                let delta: f64 = rng.random_range(-0.6..0.6);
                f.plane.rotate(&mut f.scene, delta).unwrap();
            }

            // Translation is the distance along the full normal
            let translation = floats(&attr(&f, f.plane.proxy().transform(), "translation"));
            let expected = f.plane.normal() * -f.plane.raw_distance();
            let actual = Vector3::new(translation[0], translation[1], translation[2]);
            assert!((actual - expected).magnitude() < EPS);
            assert!((expected.magnitude() - f.plane.raw_distance().abs()).abs() < EPS);

            // Every outline corner, once transformed, lies on the clip plane
            let equation = floats(&attr(&f, f.plane.clip_plane_node(), "plane"));
            let normal = Vector3::new(equation[0], equation[1], equation[2]);
            let (rotation_axis, angle) = f.plane.proxy_rotation();
            let rotation = Matrix3::from_axis_angle(rotation_axis, Rad(angle));
            let translation = f.plane.proxy_translation();

            for corner in axis.outline(f.plane.volume()) {
                let world = rotation * corner + translation;
                assert!(normal.dot(world) + equation[3] < EPS);
                assert!(normal.dot(world) + equation[3] > -EPS);
            }
        }
    }
}

#[test]
fn test_host_errors_reach_callers() {
    let (mut scene, model) = flaky_scene();
    let root = scene.inner.root();
    let mut plane = ClipPlane::new(&mut scene, &model, &root, ClipPlaneConfig::default()).unwrap();

    scene.fail_on = Some(Attribute::Plane);
    assert!(matches!(
        plane.move_plane(&mut scene, 0.7),
        Err(ClipPlaneError::Scene(SceneError::Host(_)))
    ));
    assert!(matches!(
        plane.rotate(&mut scene, 0.3),
        Err(ClipPlaneError::Scene(SceneError::Host(_)))
    ));

    scene.fail_on = Some(Attribute::Transparency);
    let err = plane.toggle_state(&mut scene).unwrap_err();
    assert_eq!(
        err,
        ClipPlaneError::Scene(SceneError::Host("transparency rejected".to_string()))
    );

    scene.fail_on = None;
    plane.move_plane(&mut scene, 1.0).unwrap();
    assert_eq!(plane.distance(), 5.0);
}

#[test]
fn test_failed_construction_attaches_nothing() {
    for attribute in [
        Attribute::Enabled,
        Attribute::Plane,
        Attribute::CappingColor,
        Attribute::Rotation,
        Attribute::Translation,
    ] {
        let (mut scene, model) = flaky_scene();
        let root = scene.inner.root();
        scene.fail_on = Some(attribute);

        let result = ClipPlane::new(&mut scene, &model, &root, ClipPlaneConfig::default());
        assert!(matches!(
            result,
            Err(ClipPlaneError::Scene(SceneError::Host(_)))
        ));
        assert_eq!(scene.inner.children(root), &[model][..]);
        assert!(scene.inner.children(model).is_empty());
    }
}
