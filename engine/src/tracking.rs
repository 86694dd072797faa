use {
    crate::{
        classify::StyleTable,
        engine::{System, SystemContext},
        joint::JointName,
        skeleton::BodySkeleton,
        util::{decompose_transform3, rotation_from_xyzw, TransformError},
    },
    ahash::RandomState,
    hecs::{Entity, World},
    nalgebra as na,
    std::{collections::HashMap, convert::TryFrom},
};

/// Body detected by the tracking platform in one frame.
pub trait TrackedBody {
    /// World-space transform of the whole body.
    fn root_transform(&self) -> na::Isometry3<f32>;

    /// Root-relative transform of the joint, if known in this frame.
    fn joint_pose(&self, joint: JointName) -> Option<na::Isometry3<f32>>;
}

/// Transform as reported by the tracking platform.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RawTransform {
    /// Column-major affine matrix. Scale is discarded.
    Matrix { columns: [[f32; 4]; 4] },

    /// Translation and `[x, y, z, w]` rotation quaternion.
    Parts {
        translation: [f32; 3],
        #[serde(default = "identity_xyzw")]
        rotation: [f32; 4],
    },
}

fn identity_xyzw() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

impl RawTransform {
    pub fn to_isometry(&self) -> Result<na::Isometry3<f32>, TransformError> {
        match *self {
            RawTransform::Matrix { columns } => {
                let [c0, c1, c2, c3] = columns;
                let m = na::Matrix4::from_columns(&[
                    na::Vector4::from(c0),
                    na::Vector4::from(c1),
                    na::Vector4::from(c2),
                    na::Vector4::from(c3),
                ]);
                let (iso, _scale) = decompose_transform3(&m)?;
                Ok(iso)
            }
            RawTransform::Parts {
                translation: [x, y, z],
                rotation,
            } => Ok(na::Isometry3::from_parts(
                na::Translation3::new(x, y, z),
                rotation_from_xyzw(rotation)?,
            )),
        }
    }
}

/// Snapshot as recorded from the tracking platform.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RawSnapshot {
    pub body: u64,
    pub root: RawTransform,
    #[serde(default)]
    pub joints: HashMap<JointName, RawTransform, RandomState>,
}

/// Tracking data of one body for one frame.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct TrackingSnapshot {
    /// Identifier of the tracked body.
    pub body: u64,
    pub root: na::Isometry3<f32>,
    joints: HashMap<JointName, na::Isometry3<f32>, RandomState>,
}

impl TrackingSnapshot {
    pub fn new(body: u64, root: na::Isometry3<f32>) -> Self {
        TrackingSnapshot {
            body,
            root,
            joints: HashMap::default(),
        }
    }

    pub fn insert(&mut self, joint: JointName, pose: na::Isometry3<f32>) {
        self.joints.insert(joint, pose);
    }

    /// Number of joints with known pose.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}

impl TryFrom<RawSnapshot> for TrackingSnapshot {
    type Error = TransformError;

    fn try_from(raw: RawSnapshot) -> Result<Self, TransformError> {
        let mut snapshot =
            TrackingSnapshot::new(raw.body, raw.root.to_isometry()?);

        for (joint, pose) in raw.joints {
            snapshot.insert(joint, pose.to_isometry()?);
        }

        Ok(snapshot)
    }
}

impl TrackedBody for TrackingSnapshot {
    fn root_transform(&self) -> na::Isometry3<f32> {
        self.root
    }

    fn joint_pose(&self, joint: JointName) -> Option<na::Isometry3<f32>> {
        self.joints.get(&joint).copied()
    }
}

/// Keeps the skeleton of the tracked body.
///
/// The first snapshot spawns the skeleton and attaches it beneath the anchor.
/// Every later snapshot updates that skeleton, whichever body it belongs to.
pub struct Tracker {
    anchor: Entity,
    styles: StyleTable,
    skeleton: Option<BodySkeleton>,
    spawned: usize,
    updates: usize,
}

impl Tracker {
    pub fn new(anchor: Entity, styles: StyleTable) -> Self {
        Tracker {
            anchor,
            styles,
            skeleton: None,
            spawned: 0,
            updates: 0,
        }
    }

    /// Applies tracked body to the skeleton, spawning it if there is none.
    pub fn track(&mut self, body: &impl TrackedBody, world: &mut World) {
        if let Some(skeleton) = &self.skeleton {
            skeleton.update(body, world);
            self.updates += 1;
            return;
        }

        let skeleton = BodySkeleton::spawn(body, &self.styles, self.anchor, world);
        tracing::info!("Body detected, skeleton spawned as {:?}", skeleton.node());
        self.skeleton = Some(skeleton);
        self.spawned += 1;
    }

    pub fn skeleton(&self) -> Option<&BodySkeleton> {
        self.skeleton.as_ref()
    }

    pub fn anchor(&self) -> Entity {
        self.anchor
    }

    /// Number of skeletons spawned so far. Never exceeds one.
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// Number of snapshots applied to an existing skeleton.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl System for Tracker {
    fn name(&self) -> &str {
        "Tracker"
    }

    fn run(&mut self, ctx: SystemContext<'_>) {
        for snapshot in ctx.feed.drain() {
            if snapshot.is_empty() {
                tracing::debug!("Snapshot of body {} has no joints", snapshot.body);
            } else {
                tracing::debug!(
                    "Snapshot of body {} with {} joints",
                    snapshot.body,
                    snapshot.len()
                );
            }
            self.track(&snapshot, &mut *ctx.world);
        }
    }
}
