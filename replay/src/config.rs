use {
    bodytrack::JointName,
    eyre::Report,
    std::path::PathBuf,
};

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: bodytrack::Config,

    pub replay: ReplayConfig,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ReplayConfig {
    /// Recording of tracking frames to play.
    pub recording: PathBuf,

    /// Joints whose marker pose is logged every frame.
    #[serde(default = "default_log_joints")]
    pub log_joints: Vec<JointName>,
}

impl Config {
    pub fn load_default() -> Result<Self, Report> {
        bodytrack::config::load(&bodytrack::config::config_path())
    }
}

fn default_log_joints() -> Vec<JointName> {
    vec![JointName::Head, JointName::LeftHand, JointName::RightHand]
}
