use {
    crate::{
        feed::TrackingFeed,
        scene::{Anchor, Global3},
    },
    bumpalo::Bump,
    hecs::{Entity, World},
    nalgebra as na,
};

pub struct SystemContext<'a> {
    pub world: &'a mut World,
    pub feed: &'a mut TrackingFeed,
    pub bump: &'a Bump,
}

pub trait System {
    fn name(&self) -> &str;

    fn run(&mut self, ctx: SystemContext<'_>);
}

/// Root data structure of the visualizer.
///
/// Everything runs on the thread that feeds tracking snapshots.
/// Snapshots added to `feed` are processed by `advance` in arrival order.
pub struct Engine {
    pub world: World,
    pub feed: TrackingFeed,
    schedule: Vec<Box<dyn System>>,
    bump: Bump,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            world: World::new(),
            feed: TrackingFeed::new(),
            schedule: Vec::new(),
            bump: Bump::new(),
        }
    }

    /// Spawns scene root node at given pose.
    pub fn spawn_anchor(&mut self, iso: na::Isometry3<f32>) -> Entity {
        self.world.spawn((Anchor, Global3::from_iso(iso)))
    }

    /// Adds a system to this engine.
    /// Systems run in order of addition.
    pub fn add_system<S>(&mut self, system: S) -> &mut Self
    where
        S: System + 'static,
    {
        self.schedule.push(Box::new(system));
        self
    }

    /// Runs all systems once and drops snapshots of this frame.
    pub fn advance(&mut self) {
        for system in &mut self.schedule {
            let _span = tracing::trace_span!("system", name = system.name())
                .entered();

            system.run(SystemContext {
                world: &mut self.world,
                feed: &mut self.feed,
                bump: &self.bump,
            });
        }

        let dropped = self.feed.clear();
        if dropped > 0 {
            tracing::debug!("{} tracking snapshots left unprocessed", dropped);
        }

        self.bump.reset();
    }
}
