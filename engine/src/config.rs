use {
    eyre::{Report, WrapErr},
    nalgebra as na,
    palette::Srgb,
    std::path::{Path, PathBuf},
};

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub anchor: AnchorConfig,
}

/// Appearance of joint markers.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct StyleConfig {
    /// Reference radius scaled per joint class.
    #[serde(default = "default_base_radius")]
    pub base_radius: f32,

    /// Radius of joints not matched by any class.
    #[serde(default = "default_default_radius")]
    pub default_radius: f32,

    #[serde(default = "default_tracked_color")]
    pub tracked_color: Srgb,

    #[serde(default = "default_inferred_color")]
    pub inferred_color: Srgb,

    #[serde(default = "default_roughness")]
    pub roughness: f32,

    #[serde(default)]
    pub metallic: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            base_radius: default_base_radius(),
            default_radius: default_default_radius(),
            tracked_color: default_tracked_color(),
            inferred_color: default_inferred_color(),
            roughness: default_roughness(),
            metallic: false,
        }
    }
}

/// Placement of the node skeletons are attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize)]
pub struct AnchorConfig {
    #[serde(default)]
    pub translation: [f32; 3],
}

impl AnchorConfig {
    pub fn iso(&self) -> na::Isometry3<f32> {
        let [x, y, z] = self.translation;
        na::Isometry3::translation(x, y, z)
    }
}

/// Path of the configuration file.
/// Taken from `BODYTRACK_CONFIG_PATH`, `./cfg.ron` by default.
pub fn config_path() -> PathBuf {
    std::env::var("BODYTRACK_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./cfg.ron"))
}

/// Loads RON document from file.
#[tracing::instrument]
pub fn load<T>(path: &Path) -> Result<T, Report>
where
    T: serde::de::DeserializeOwned + std::fmt::Debug,
{
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("Failed to open '{}'", path.display()))?;

    let value = ron::de::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse '{}'", path.display()))?;

    tracing::debug!("Loaded {:?}", value);
    Ok(value)
}

fn default_base_radius() -> f32 {
    0.03
}

fn default_default_radius() -> f32 {
    0.03
}

fn default_tracked_color() -> Srgb {
    Srgb::new(0.0, 1.0, 0.0)
}

fn default_inferred_color() -> Srgb {
    Srgb::new(1.0, 1.0, 0.0)
}

fn default_roughness() -> f32 {
    0.8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = ron::de::from_str("()").unwrap();
        assert_eq!(config.style, StyleConfig::default());
        assert_eq!(config.anchor, AnchorConfig::default());
        assert_eq!(config.anchor.iso(), na::Isometry3::identity());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load::<Config>(Path::new("./no/such/cfg.ron")).unwrap_err();
        assert!(err.to_string().contains("no/such/cfg.ron"));
    }

    #[test]
    fn partial_style() {
        let config: Config = ron::de::from_str(
            "(style: (base_radius: 0.05, metallic: true), anchor: (translation: (0.0, 1.0, 0.0)))",
        )
        .unwrap();

        assert_eq!(config.style.base_radius, 0.05);
        assert_eq!(config.style.default_radius, 0.03);
        assert!(config.style.metallic);
        assert_eq!(
            config.anchor.iso().translation.vector,
            na::Vector3::new(0.0, 1.0, 0.0)
        );
    }
}
