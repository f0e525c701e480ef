//! Scene data for the hero globe.
//! The controlled object, its transform, and the model asset that may replace
//! the fallback sphere once it has loaded.

use glam::{DQuat, DVec3, EulerRot};
use serde::Deserialize;
use std::rc::Rc;

use crate::error::ViewerError;
use crate::state::Ray;

/// Radius of the primitive sphere shown while the model is unavailable.
pub const FALLBACK_RADIUS: f64 = 1.0;
pub const FALLBACK_COLOR: &str = "#2E75B6";
pub const FALLBACK_EMISSIVE: &str = "#103a62";

/// Accumulated rotation in radians. Never wrapped or clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    /// Rotation about X.
    pub pitch: f64,
    /// Rotation about Y.
    pub yaw: f64,
}

impl Orientation {
    pub fn quat(&self) -> DQuat {
        DQuat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotation: Orientation,
    pub position: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: Orientation::default(),
            position: DVec3::ZERO,
        }
    }
}

impl Transform {
    /// Maps a point from object space into world space.
    pub fn apply(&self, local: DVec3) -> DVec3 {
        self.position + self.rotation.quat() * local
    }
}

/// Anything with a writable rotation and world position.
pub trait Controllable {
    fn set_rotation(&mut self, rotation: Orientation);
    fn set_position(&mut self, position: DVec3);
}

/// Anything the pointer ray can land on.
pub trait Pickable {
    fn hit(&self, ray: &Ray) -> bool;
}

impl Controllable for Transform {
    fn set_rotation(&mut self, rotation: Orientation) {
        self.rotation = rotation;
    }
    fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }
}

/// Globe model as served from `models/earth.json`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModelAsset {
    pub name: String,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_ocean")]
    pub ocean_color: String,
    #[serde(default = "default_land")]
    pub land_color: String,
    /// Coastline polylines as `[longitude, latitude]` pairs in degrees.
    #[serde(default)]
    pub outlines: Vec<Vec<[f64; 2]>>,
}

fn default_radius() -> f64 {
    FALLBACK_RADIUS
}
fn default_ocean() -> String {
    "#1b4f8a".to_string()
}
fn default_land() -> String {
    "#3fa34d".to_string()
}

impl ModelAsset {
    pub fn from_json(raw: &str) -> Result<Self, ViewerError> {
        let asset: ModelAsset = serde_json::from_str(raw)?;
        if !(asset.radius.is_finite() && asset.radius > 0.0) {
            return Err(ViewerError::InvalidModel(format!(
                "radius must be positive, got {}",
                asset.radius
            )));
        }
        for line in &asset.outlines {
            for &[lon, lat] in line {
                if !(-90.0..=90.0).contains(&lat) || !lon.is_finite() {
                    return Err(ViewerError::InvalidModel(format!(
                        "outline point ({lon}, {lat}) is off the sphere"
                    )));
                }
            }
        }
        Ok(asset)
    }

    pub fn point_count(&self) -> usize {
        self.outlines.iter().map(Vec::len).sum()
    }
}

/// Point on a sphere of `radius` centred at the object origin, Y up,
/// longitude 0 facing +Z.
pub fn lon_lat_to_local(lon_deg: f64, lat_deg: f64, radius: f64) -> DVec3 {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    DVec3::new(
        radius * cos_lat * sin_lon,
        radius * sin_lat,
        radius * cos_lat * cos_lon,
    )
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssetState {
    Loading,
    Ready(Rc<ModelAsset>),
    Failed(String),
}

/// What the renderer draws for the controlled object.
#[derive(Clone, Debug, PartialEq)]
pub enum Visual {
    Fallback,
    Model(Rc<ModelAsset>),
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub transform: Transform,
    pub asset: AssetState,
}

impl Default for SceneObject {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            asset: AssetState::Loading,
        }
    }
}

impl SceneObject {
    pub fn visual(&self) -> Visual {
        match &self.asset {
            AssetState::Ready(model) => Visual::Model(model.clone()),
            AssetState::Loading | AssetState::Failed(_) => Visual::Fallback,
        }
    }

    pub fn radius(&self) -> f64 {
        match &self.asset {
            AssetState::Ready(model) => model.radius,
            _ => FALLBACK_RADIUS,
        }
    }

    /// Swaps the visual; the transform carries over.
    pub fn set_asset(&mut self, asset: AssetState) {
        self.asset = asset;
    }
}

impl Pickable for SceneObject {
    /// Bounding-sphere pick.
    fn hit(&self, ray: &Ray) -> bool {
        ray.intersects_sphere(self.transform.position, self.radius())
    }
}

impl Controllable for SceneObject {
    fn set_rotation(&mut self, rotation: Orientation) {
        self.transform.set_rotation(rotation);
    }
    fn set_position(&mut self, position: DVec3) {
        self.transform.set_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_lon_lat_axes() {
        let north = lon_lat_to_local(0.0, 90.0, 2.0);
        assert!((north - DVec3::new(0.0, 2.0, 0.0)).length() < EPSILON);
        let front = lon_lat_to_local(0.0, 0.0, 1.0);
        assert!((front - DVec3::Z).length() < EPSILON);
        let east = lon_lat_to_local(90.0, 0.0, 1.0);
        assert!((east - DVec3::X).length() < EPSILON);
    }

    #[test]
    fn test_transform_applies_rotation_then_translation() {
        let t = Transform {
            rotation: Orientation {
                pitch: 0.0,
                yaw: std::f64::consts::FRAC_PI_2,
            },
            position: DVec3::new(1.0, 0.0, 0.0),
        };
        // Yaw of +90° turns +Z into +X.
        let p = t.apply(DVec3::Z);
        assert!((p - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_model_parses_with_defaults() {
        let asset = ModelAsset::from_json(r#"{"name":"Earth","outlines":[[[0,0],[10,5]]]}"#)
            .unwrap();
        assert_eq!(asset.name, "Earth");
        assert_eq!(asset.radius, 1.0);
        assert_eq!(asset.point_count(), 2);
        assert_eq!(asset.land_color, "#3fa34d");
    }

    #[test]
    fn test_shipped_model_is_valid() {
        let asset = ModelAsset::from_json(include_str!("../models/earth.json")).unwrap();
        assert_eq!(asset.name, "Earth");
        assert!(!asset.outlines.is_empty());
        assert!(asset.outlines.iter().all(|line| line.len() >= 2));
    }

    #[test]
    fn test_model_rejects_bad_data() {
        assert!(matches!(
            ModelAsset::from_json("{not json"),
            Err(ViewerError::Parse(_))
        ));
        assert!(matches!(
            ModelAsset::from_json(r#"{"name":"x","radius":0}"#),
            Err(ViewerError::InvalidModel(_))
        ));
        assert!(matches!(
            ModelAsset::from_json(r#"{"name":"x","outlines":[[[0,91]]]}"#),
            Err(ViewerError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_visual_follows_asset_state() {
        let mut obj = SceneObject::default();
        assert_eq!(obj.visual(), Visual::Fallback);
        obj.transform.rotation.yaw = 0.3;
        let model = Rc::new(ModelAsset {
            name: "Earth".into(),
            radius: 1.5,
            ocean_color: default_ocean(),
            land_color: default_land(),
            outlines: Vec::new(),
        });
        obj.set_asset(AssetState::Ready(model.clone()));
        assert_eq!(obj.visual(), Visual::Model(model));
        assert_eq!(obj.radius(), 1.5);
        assert_eq!(obj.transform.rotation.yaw, 0.3);
        obj.set_asset(AssetState::Failed("404".into()));
        assert_eq!(obj.visual(), Visual::Fallback);
    }

    #[test]
    fn test_hit_uses_bounding_sphere() {
        let obj = SceneObject::default();
        let toward = Ray::new(DVec3::new(0.0, 0.0, 8.0), -DVec3::Z);
        assert!(obj.hit(&toward));
        let beside = Ray::new(DVec3::new(3.0, 0.0, 8.0), -DVec3::Z);
        assert!(!obj.hit(&beside));
    }
}
