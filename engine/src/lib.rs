pub mod classify;
pub mod config;
pub mod engine;
pub mod feed;
pub mod joint;
pub mod marker;
pub mod scene;
pub mod skeleton;
pub mod tracking;
pub mod util;

pub use self::{
    classify::{classify, MarkerStyle, StyleTable, Tier},
    config::Config,
    engine::{Engine, System, SystemContext},
    feed::TrackingFeed,
    joint::JointName,
    marker::{Marker, Material, Sphere},
    scene::{Anchor, Global3, Local3, SceneSystem},
    skeleton::{BodySkeleton, Skeleton},
    tracking::{RawSnapshot, RawTransform, TrackedBody, Tracker, TrackingSnapshot},
};
