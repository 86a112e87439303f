//! # Clip Plane Controller
//!
//! Owns the state of one interactive clip plane and keeps two scene subtrees
//! in step with it: the invisible `ClipPlane` node that removes geometry, and
//! the proxy outline that shows the user where the cut is.
//!
//! The plane is described by its active [`Axis`], the [`ClipSide`] being
//! removed, an accumulated rotation angle and a distance. The normal starts
//! as the axis unit vector scaled by the side and is rotated together with
//! the angle, so the written plane equation and the proxy transform are
//! always derived from the same values.
//!
//! ## Usage
//!
//! ```no_run
//! use clipscope::prelude::*;
//!
//! # fn main() -> clipscope::Result<()> {
//! let mut scene = X3dScene::new();
//! let model = scene.add_group(scene.root())?;
//! scene.set_bounds(model, BoundingVolume::new(Vector3::new(-5.0, -1.0, -1.0), Vector3::new(5.0, 1.0, 1.0)))?;
//!
//! let root = scene.root();
//! let mut plane = ClipPlane::new(&mut scene, &model, &root, ClipPlaneConfig::default())?;
//! plane.move_plane(&mut scene, 0.75)?;
//! plane.rotate(&mut scene, 0.1)?;
//! println!("distance {} angle {}", plane.distance(), plane.angle());
//! # Ok(())
//! # }
//! ```

use std::fmt::Debug;

use cgmath::{Vector3, Vector4};
use log::{debug, info, warn};

use super::config::ClipPlaneConfig;
use super::proxy::ProxyPlane;
use crate::error::{ClipPlaneError, Result};
use crate::geometry::{round_degrees, round_to_tenth, Axis, BoundingVolume, ClipSide};
use crate::scene::{Attribute, AttributeValue, NodeKind, SceneGraph};

fn plane_equation(normal: Vector3<f64>, distance: f64) -> Vector4<f64> {
    Vector4::new(normal.x, normal.y, normal.z, distance)
}

/// Interactive clip plane bound to a host scene
pub struct ClipPlane<N> {
    axis: Axis,
    side: ClipSide,
    /// Accumulated rotation in radians
    angle: f64,
    distance: f64,
    normal: Vector3<f64>,
    enabled: bool,
    volume: BoundingVolume,
    clip_plane: N,
    proxy: ProxyPlane<N>,
}

impl<N: Clone + Debug> ClipPlane<N> {
    /// Creates the clip plane and its proxy outline
    ///
    /// Queries the bounding volume of `scope` once; the volume is not
    /// re-read afterwards. Both subtrees are written in full before the
    /// `ClipPlane` node is appended to `scope` and the proxy transform to
    /// `proxy_parent`, so a failed host write leaves the scene untouched.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, a degenerate volume, or any error
    /// reported by the host scene.
    pub fn new<S>(
        scene: &mut S,
        scope: &N,
        proxy_parent: &N,
        config: ClipPlaneConfig,
    ) -> Result<Self>
    where
        S: SceneGraph<Node = N>,
    {
        config.validate()?;

        let volume = scene.bounding_volume(scope)?;
        if !volume.is_valid() {
            return Err(ClipPlaneError::DegenerateVolume {
                min: volume.min.into(),
                max: volume.max.into(),
            });
        }

        let normal = config.axis.normal(config.side);
        let proxy = ProxyPlane::build(scene, config.color, &config.axis.outline(&volume))?;

        let clip_plane = scene.create_node(NodeKind::ClipPlane)?;
        scene.set_attribute(&clip_plane, Attribute::Enabled, AttributeValue::Bool(config.enabled))?;
        scene.set_attribute(
            &clip_plane,
            Attribute::Plane,
            AttributeValue::Plane(plane_equation(normal, 0.0)),
        )?;
        scene.set_attribute(
            &clip_plane,
            Attribute::CappingStrength,
            AttributeValue::Float(config.capping_strength),
        )?;
        scene.set_attribute(
            &clip_plane,
            Attribute::CappingColor,
            AttributeValue::Color(config.color),
        )?;

        let plane = Self {
            axis: config.axis,
            side: config.side,
            angle: 0.0,
            distance: 0.0,
            normal,
            enabled: config.enabled,
            volume,
            clip_plane,
            proxy,
        };
        plane.update_proxy(scene)?;
        if !plane.enabled {
            plane.write_visibility(scene)?;
        }

        // Nothing becomes visible until every node is fully written.
        scene.append_child(scope, &plane.clip_plane)?;
        plane.proxy.attach(scene, proxy_parent)?;

        info!(
            "Created clip plane on axis {} (side {}) over volume {:?} .. {:?}",
            plane.axis,
            plane.side.sign(),
            volume.min,
            volume.max
        );

        Ok(plane)
    }

    /// Moves the plane along the active axis
    ///
    /// `value` in `[0, 1]` maps linearly onto the volume's extent along the
    /// axis; values outside that range extrapolate.
    pub fn move_plane<S>(&mut self, scene: &mut S, value: f64) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        if !(0.0..=1.0).contains(&value) {
            warn!("Clip plane move value {} lies outside [0, 1]", value);
        }

        let (min, max) = self.volume.extent(self.axis);
        self.distance = (max - min) * value + min;
        debug!("Clip plane moved to distance {}", self.distance);

        self.update_clip_plane(scene)?;
        self.update_proxy(scene)
    }

    /// Rotates the plane by `delta` radians around the active axis' rotation axis
    ///
    /// Rotations accumulate; see [`Axis::rotation_axis`].
    pub fn rotate<S>(&mut self, scene: &mut S, delta: f64) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        self.angle += delta;
        self.normal = self.axis.rotation(delta) * self.normal;
        debug!(
            "Clip plane rotated by {} rad, angle now {} rad, normal {:?}",
            delta, self.angle, self.normal
        );

        self.update_clip_plane(scene)?;
        self.update_proxy(scene)
    }

    /// Current distance rounded to one decimal place
    pub fn distance(&self) -> f64 {
        round_to_tenth(self.distance)
    }

    /// Current rotation in whole degrees
    pub fn angle(&self) -> i32 {
        round_degrees(self.angle)
    }

    /// Flips clipping on or off and returns the new state
    ///
    /// A disabled plane leaves geometry untouched and its proxy outline fully
    /// transparent.
    pub fn toggle_state<S>(&mut self, scene: &mut S) -> Result<bool>
    where
        S: SceneGraph<Node = N>,
    {
        self.enabled = !self.enabled;
        debug!("Clip plane {}", if self.enabled { "enabled" } else { "disabled" });

        self.write_visibility(scene)?;
        Ok(self.enabled)
    }

    /// Switches the active axis
    ///
    /// Resets angle and distance, rebuilds the normal from the current
    /// clipping side and regenerates the proxy outline for the new axis.
    pub fn set_axis<S>(&mut self, scene: &mut S, axis: Axis) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        self.axis = axis;
        self.reset_orientation();
        debug!("Clip plane axis set to {}", axis);

        self.update_proxy(scene)?;
        self.update_clip_plane(scene)?;
        self.update_proxy_coordinates(scene)
    }

    /// Switches which half-space is removed
    ///
    /// Resets angle and distance and rebuilds the normal along the active
    /// axis. The proxy outline is unchanged.
    pub fn set_clipping<S>(&mut self, scene: &mut S, side: ClipSide) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        self.side = side;
        self.reset_orientation();
        debug!("Clip plane side set to {}", side.sign());

        self.update_proxy(scene)?;
        self.update_clip_plane(scene)
    }

    /// [`set_axis`](Self::set_axis) from an axis name such as `"Y"`
    ///
    /// An unknown name is an error and leaves the plane untouched.
    pub fn set_axis_by_name<S>(&mut self, scene: &mut S, name: &str) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        let axis = name.parse::<Axis>()?;
        self.set_axis(scene, axis)
    }

    /// [`set_clipping`](Self::set_clipping) from the signed value `-1` or `1`
    ///
    /// Any other value is an error and leaves the plane untouched.
    pub fn set_clipping_value<S>(&mut self, scene: &mut S, value: i32) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        let side = ClipSide::try_from(value)?;
        self.set_clipping(scene, side)
    }

    fn reset_orientation(&mut self) {
        self.angle = 0.0;
        self.distance = 0.0;
        self.normal = self.axis.normal(self.side);
    }

    fn update_clip_plane<S>(&self, scene: &mut S) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        scene.set_attribute(
            &self.clip_plane,
            Attribute::Plane,
            AttributeValue::Plane(self.plane_equation()),
        )?;
        Ok(())
    }

    // Translating along the full normal keeps the outline on the plane once it
    // has been rotated; an offset along the axis alone only holds at angle 0.
    fn update_proxy<S>(&self, scene: &mut S) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        let (axis, angle) = self.proxy_rotation();
        scene.set_attribute(
            self.proxy.transform(),
            Attribute::Rotation,
            AttributeValue::Rotation { axis, angle },
        )?;
        scene.set_attribute(
            self.proxy.transform(),
            Attribute::Translation,
            AttributeValue::Vec3(self.proxy_translation()),
        )?;
        Ok(())
    }

    fn update_proxy_coordinates<S>(&self, scene: &mut S) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        let outline = self.axis.outline(&self.volume);
        scene.set_attribute(
            self.proxy.coordinates(),
            Attribute::Point,
            AttributeValue::Points(outline.to_vec()),
        )?;
        Ok(())
    }

    fn write_visibility<S>(&self, scene: &mut S) -> Result<()>
    where
        S: SceneGraph<Node = N>,
    {
        let transparency = if self.enabled { 0.0 } else { 1.0 };
        scene.set_attribute(
            &self.clip_plane,
            Attribute::Enabled,
            AttributeValue::Bool(self.enabled),
        )?;
        scene.set_attribute(
            self.proxy.material(),
            Attribute::Transparency,
            AttributeValue::Float(transparency),
        )?;
        Ok(())
    }

    /// Active axis
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Half-space currently removed
    pub fn clip_side(&self) -> ClipSide {
        self.side
    }

    /// Current plane normal
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Volume queried at construction
    pub fn volume(&self) -> &BoundingVolume {
        &self.volume
    }

    /// Unrounded distance
    pub fn raw_distance(&self) -> f64 {
        self.distance
    }

    /// Unrounded angle in radians
    pub fn raw_angle(&self) -> f64 {
        self.angle
    }

    /// Plane equation `(normal, distance)` written to the clip plane node
    pub fn plane_equation(&self) -> Vector4<f64> {
        plane_equation(self.normal, self.distance)
    }

    /// Translation written to the proxy transform
    pub fn proxy_translation(&self) -> Vector3<f64> {
        self.normal * -self.distance
    }

    /// Rotation axis and angle (radians) written to the proxy transform
    pub fn proxy_rotation(&self) -> (Vector3<f64>, f64) {
        (self.axis.rotation_axis(), self.angle)
    }

    /// Handle to the `ClipPlane` node
    pub fn clip_plane_node(&self) -> &N {
        &self.clip_plane
    }

    /// Handles to the proxy outline nodes
    pub fn proxy(&self) -> &ProxyPlane<N> {
        &self.proxy
    }
}
