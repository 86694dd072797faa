use {
    crate::{
        classify::{StyleTable, Tier},
        config::StyleConfig,
        joint::JointName,
        scene::{Global3, Local3},
    },
    hecs::{Entity, World},
    palette::Srgb,
};

/// Joint marker component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Marker {
    pub joint: JointName,
    pub tier: Tier,
}

/// Sphere mesh centered at the node origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
}

/// Flat-shaded material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Srgb,
    pub roughness: f32,
    pub metallic: bool,
}

impl Material {
    pub fn for_tier(tier: Tier, config: &StyleConfig) -> Self {
        let color = match tier {
            Tier::Tracked => config.tracked_color,
            Tier::Inferred => config.inferred_color,
        };

        Material {
            color,
            roughness: config.roughness,
            metallic: config.metallic,
        }
    }
}

/// Spawns marker for the joint as a child of `parent`.
/// Marker starts at parent's origin.
pub fn spawn_marker(
    joint: JointName,
    styles: &StyleTable,
    parent: Entity,
    world: &mut World,
) -> Entity {
    let style = styles.get(joint);

    world.spawn((
        Marker {
            joint,
            tier: style.tier,
        },
        Sphere {
            radius: style.radius,
        },
        styles.material(style.tier),
        Local3::identity(parent),
        Global3::identity(),
    ))
}
