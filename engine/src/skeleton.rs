use {
    crate::{
        classify::StyleTable,
        joint::JointName,
        marker::spawn_marker,
        scene::{Global3, Local3},
        tracking::TrackedBody,
    },
    ahash::RandomState,
    hecs::{Entity, World},
    nalgebra as na,
    std::collections::HashMap,
};

/// Scene node component of a skeleton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Skeleton;

/// Markers of one tracked body.
///
/// Holds exactly one marker entity per joint of the vocabulary.
/// Markers are children of the skeleton node and are never added or removed
/// after spawning.
#[derive(Debug)]
pub struct BodySkeleton {
    node: Entity,
    joints: HashMap<JointName, Entity, RandomState>,
}

impl BodySkeleton {
    /// Spawns skeleton node beneath the anchor with a marker for every joint
    /// and poses markers from the body.
    ///
    /// If the anchor is gone the node becomes a scene root at the origin,
    /// so markers stay in the scene either way.
    #[tracing::instrument(skip(body, styles, world))]
    pub fn spawn(
        body: &impl TrackedBody,
        styles: &StyleTable,
        anchor: Entity,
        world: &mut World,
    ) -> Self {
        let node = if world.entity(anchor).is_ok() {
            world.spawn((Skeleton, Local3::identity(anchor), Global3::identity()))
        } else {
            tracing::warn!(
                "Anchor {:?} is gone, skeleton is placed at scene root",
                anchor
            );
            world.spawn((Skeleton, Global3::identity()))
        };

        let joints = JointName::ALL
            .iter()
            .map(|&joint| (joint, spawn_marker(joint, styles, node, world)))
            .collect();

        let skeleton = BodySkeleton { node, joints };
        skeleton.update(body, world);
        skeleton
    }

    /// Moves markers to joint poses of the body.
    ///
    /// Marker position is body root position offset by joint translation.
    /// Marker orientation is joint rotation alone, root rotation is not
    /// applied. Markers of joints without pose keep their previous pose.
    pub fn update(&self, body: &impl TrackedBody, world: &World) {
        let root = body.root_transform().translation.vector;

        for &joint in JointName::ALL {
            let marker = match self.joints.get(&joint) {
                Some(&marker) => marker,
                None => continue,
            };

            let pose = match body.joint_pose(joint) {
                Some(pose) => pose,
                None => {
                    tracing::trace!("No pose for '{}' in snapshot", joint);
                    continue;
                }
            };

            match world.get_mut::<Local3>(marker) {
                Ok(mut local) => {
                    local.iso = na::Isometry3::from_parts(
                        na::Translation3::from(root + pose.translation.vector),
                        pose.rotation,
                    );
                }
                Err(err) => {
                    tracing::warn!("Marker of '{}' is unavailable: {}", joint, err);
                }
            }
        }
    }

    pub fn node(&self) -> Entity {
        self.node
    }

    pub fn marker(&self, joint: JointName) -> Option<Entity> {
        self.joints.get(&joint).copied()
    }

    /// Markers in joint vocabulary order.
    pub fn markers(&self) -> impl Iterator<Item = (JointName, Entity)> + '_ {
        JointName::ALL
            .iter()
            .filter_map(move |&joint| Some((joint, self.marker(joint)?)))
    }

    /// Marker pose relative to skeleton node.
    pub fn marker_pose(
        &self,
        joint: JointName,
        world: &World,
    ) -> Option<na::Isometry3<f32>> {
        let marker = self.marker(joint)?;
        let local = world.get::<Local3>(marker).ok()?;
        Some(local.iso)
    }
}
