use {bodytrack::TrackingSnapshot, eyre::Report, std::path::Path};

/// Tracking frames captured from the body-tracking platform.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Recording {
    pub frames: Vec<Frame>,
}

/// Bodies detected in one frame, in delivery order.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub bodies: Vec<TrackingSnapshot>,
}

impl Recording {
    pub fn load(path: &Path) -> Result<Self, Report> {
        let recording: Recording = bodytrack::config::load(path)?;
        tracing::info!(
            "Recording '{}' loaded, {} frames",
            path.display(),
            recording.frames.len()
        );
        Ok(recording)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, bodytrack::{JointName, TrackedBody}};

    #[test]
    fn frames_without_bodies() {
        let recording: Recording = ron::de::from_str(
            r#"(frames: [
                (),
                (bodies: [
                    (
                        body: 1,
                        root: (translation: (0.0, 1.0, 0.0)),
                        joints: { "head_joint": (translation: (0.0, 0.7, 0.0)) },
                    ),
                ]),
            ])"#,
        )
        .unwrap();

        assert_eq!(recording.frames.len(), 2);
        assert!(recording.frames[0].bodies.is_empty());

        let body = &recording.frames[1].bodies[0];
        assert_eq!(body.body, 1);
        assert!(body.joint_pose(JointName::Head).is_some());
    }

    #[test]
    fn bundled_recording() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../recordings/wave.ron");
        let recording = Recording::load(&path).unwrap();

        assert_eq!(recording.frames.len(), 9);
        assert!(recording.frames[1..].iter().all(|frame| frame.bodies.len() == 1));

        // Left hand is lost for one frame.
        let lost = &recording.frames[6].bodies[0];
        assert!(lost.joint_pose(JointName::LeftHand).is_none());
        assert!(lost.joint_pose(JointName::RightHand).is_some());
    }
}
