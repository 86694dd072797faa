use {
    crate::engine::{System, SystemContext},
    ahash::AHashSet,
    bumpalo::collections::Vec as BVec,
    hecs::{Entity, EntityRef, World},
    nalgebra as na,
};

/// Root node of a scene hierarchy.
/// Tracked bodies are attached beneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor;

/// Pose relative to parent node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Local3 {
    pub parent: Entity,
    pub iso: na::Isometry3<f32>,
}

impl Local3 {
    pub fn identity(parent: Entity) -> Self {
        Local3 {
            parent,
            iso: na::Isometry3::identity(),
        }
    }

    pub fn from_iso(parent: Entity, iso: na::Isometry3<f32>) -> Self {
        Local3 { parent, iso }
    }
}

/// World-space pose.
/// Derived from `Local3` chain by `SceneSystem` unless node is a root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Global3 {
    pub iso: na::Isometry3<f32>,
}

impl Global3 {
    pub fn identity() -> Self {
        Global3 {
            iso: na::Isometry3::identity(),
        }
    }

    pub fn from_iso(iso: na::Isometry3<f32>) -> Self {
        Global3 { iso }
    }

    pub fn append_local(&self, local: &Local3) -> Self {
        Global3 {
            iso: self.iso * local.iso,
        }
    }

    pub fn position(&self) -> na::Point3<f32> {
        self.iso.translation.vector.into()
    }
}

/// Propagates `Local3` poses into `Global3` poses.
pub struct SceneSystem;

impl System for SceneSystem {
    fn name(&self) -> &str {
        "Scene"
    }

    fn run(&mut self, ctx: SystemContext<'_>) {
        let mut updated = AHashSet::new();
        let mut despawn = BVec::new_in(ctx.bump);

        for (entity, local) in
            ctx.world.query::<&Local3>().with::<Global3>().iter()
        {
            if !updated.insert(entity) {
                continue;
            }

            if let Ok(entity_ref) = ctx.world.entity(entity) {
                update_global(
                    entity,
                    entity_ref,
                    local,
                    ctx.world,
                    &mut updated,
                    &mut despawn,
                );
            }
        }

        // Despawn entities whose parents are despawned.
        for entity in despawn {
            let _ = ctx.world.despawn(entity);
        }
    }
}

fn update_global<'a>(
    entity: Entity,
    entity_ref: EntityRef<'a>,
    local: &Local3,
    world: &'a World,
    updated: &mut AHashSet<Entity>,
    despawn: &mut BVec<'_, Entity>,
) -> Option<hecs::RefMut<'a, Global3>> {
    let parent_ref = match world.entity(local.parent) {
        Ok(parent_ref) => parent_ref,
        Err(hecs::NoSuchEntity) => {
            despawn.push(entity);
            return None;
        }
    };

    let parent_local = parent_ref.get::<Local3>().map(|local| *local);

    let parent_global = match parent_local {
        None => {
            // Parent has no parent node.
            if parent_ref.get::<Global3>().is_none() {
                // Parent is not in hierarchy.
                tracing::warn!(
                    "Entity's ({:?}) parent is not in scene and shall be despawned",
                    entity
                );
            }
            parent_ref.get_mut::<Global3>()
        }
        Some(parent_local) => {
            if updated.insert(local.parent) {
                update_global(
                    local.parent,
                    parent_ref,
                    &parent_local,
                    world,
                    updated,
                    despawn,
                )
            } else {
                parent_ref.get_mut::<Global3>()
            }
        }
    };

    match parent_global {
        Some(parent_global) => {
            let global = parent_global.append_local(local);
            drop(parent_global);

            let mut global_ref = entity_ref.get_mut::<Global3>()?;
            *global_ref = global;
            Some(global_ref)
        }
        None => {
            despawn.push(entity);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::engine::Engine};

    #[test]
    fn propagates_through_chain() {
        let mut engine = Engine::new();
        engine.add_system(SceneSystem);

        let anchor = engine.spawn_anchor(na::Isometry3::translation(1.0, 0.0, 0.0));
        let node = engine.world.spawn((
            Local3::from_iso(anchor, na::Isometry3::translation(0.0, 2.0, 0.0)),
            Global3::identity(),
        ));
        let leaf = engine.world.spawn((
            Local3::from_iso(node, na::Isometry3::translation(0.0, 0.0, 3.0)),
            Global3::identity(),
        ));

        engine.advance();

        let global = *engine.world.get::<Global3>(leaf).unwrap();
        assert_eq!(global.position(), na::Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn rotation_applies_to_children() {
        let mut engine = Engine::new();
        engine.add_system(SceneSystem);

        let quarter = na::UnitQuaternion::from_axis_angle(
            &na::Vector3::y_axis(),
            std::f32::consts::FRAC_PI_2,
        );
        let anchor = engine.spawn_anchor(na::Isometry3::from_parts(
            na::Translation3::identity(),
            quarter,
        ));
        let leaf = engine.world.spawn((
            Local3::from_iso(anchor, na::Isometry3::translation(1.0, 0.0, 0.0)),
            Global3::identity(),
        ));

        engine.advance();

        let global = *engine.world.get::<Global3>(leaf).unwrap();
        let expected = na::Point3::new(0.0, 0.0, -1.0);
        assert!((global.position() - expected).norm() < 1e-6);
        assert_eq!(global.iso.rotation, quarter);
    }

    #[test]
    fn orphans_are_despawned() {
        let mut engine = Engine::new();
        engine.add_system(SceneSystem);

        let anchor = engine.spawn_anchor(na::Isometry3::identity());
        let node = engine
            .world
            .spawn((Local3::identity(anchor), Global3::identity()));
        let leaf = engine
            .world
            .spawn((Local3::identity(node), Global3::identity()));

        engine.world.despawn(node).unwrap();
        engine.advance();

        assert!(engine.world.entity(leaf).is_err());
        assert!(engine.world.entity(anchor).is_ok());
    }
}
