mod config;
mod recording;

use {
    crate::{config::Config, recording::Recording},
    bodytrack::{
        Engine, Global3, JointName, Marker, SceneSystem, Skeleton, StyleTable,
        Tracker,
    },
    color_eyre::Report,
    hecs::World,
};

fn main() -> Result<(), Report> {
    install_tracing();
    color_eyre::install()?;

    tracing::info!("Running at {}", std::env::current_dir()?.display());
    let config = Config::load_default()?;
    let recording = Recording::load(&config.replay.recording)?;

    let mut engine = Engine::new();
    let anchor = engine.spawn_anchor(config.engine.anchor.iso());
    engine
        .add_system(Tracker::new(anchor, StyleTable::new(&config.engine.style)))
        .add_system(SceneSystem);

    let frames = recording.frames.len();
    for (index, frame) in recording.frames.into_iter().enumerate() {
        let _span = tracing::info_span!("frame", index).entered();

        for body in frame.bodies {
            engine.feed.push(body);
        }
        engine.advance();

        log_markers(&engine.world, &config.replay.log_joints);
    }

    tracing::info!(
        "Replay finished: {} frames, {} skeletons, {} markers",
        frames,
        engine.world.query::<&Skeleton>().iter().count(),
        engine.world.query::<&Marker>().iter().count(),
    );

    Ok(())
}

fn log_markers(world: &World, joints: &[JointName]) {
    for (_, (marker, global)) in world.query::<(&Marker, &Global3)>().iter() {
        if joints.contains(&marker.joint) {
            let p = global.position();
            tracing::info!(
                "{}: ({:.3}, {:.3}, {:.3})",
                marker.joint,
                p.x,
                p.y,
                p.z
            );
        }
    }
}

fn install_tracing() {
    use {
        tracing_error::ErrorLayer,
        tracing_subscriber::{fmt, prelude::*, EnvFilter},
    };

    let fmt_layer = fmt::layer().with_target(false);
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();
}
