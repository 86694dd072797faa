use {
    crate::{config::StyleConfig, joint::JointName, marker::Material},
    ahash::RandomState,
    std::collections::HashMap,
};

/// Cosmetic classification of a joint marker.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Tier {
    /// Pose is sensed directly.
    Tracked,

    /// Pose is extrapolated from a tracked ancestor.
    Inferred,
}

/// Visual style of a joint marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub radius: f32,
    pub tier: Tier,
}

enum Pattern {
    Exact(&'static [&'static str]),
    Prefix(&'static [&'static str]),
}

impl Pattern {
    fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Exact(names) => names.iter().any(|exact| *exact == name),
            Pattern::Prefix(prefixes) => {
                prefixes.iter().any(|prefix| name.starts_with(prefix))
            }
        }
    }
}

enum Radius {
    /// Multiple of the base radius.
    Scaled(f32),

    /// Default radius, regardless of base.
    Fixed,
}

struct Rule {
    pattern: Pattern,
    radius: Radius,
    tier: Tier,
}

/// Classification rules. First matching rule wins.
const RULES: &[Rule] = &[
    Rule {
        pattern: Pattern::Exact(&[
            "neck_1_joint",
            "neck_2_joint",
            "neck_3_joint",
            "neck_4_joint",
            "head_joint",
            "left_shoulder_1_joint",
            "right_shoulder_1_joint",
        ]),
        radius: Radius::Scaled(0.5),
        tier: Tier::Tracked,
    },
    Rule {
        pattern: Pattern::Exact(&[
            "jaw_joint",
            "chin_joint",
            "left_eye_joint",
            "left_eyeLowerLid_joint",
            "left_eyeUpperLid_joint",
            "left_eyeball_joint",
            "nose_joint",
            "right_eye_joint",
            "right_eyeLowerLid_joint",
            "right_eyeUpperLid_joint",
            "right_eyeball_joint",
        ]),
        radius: Radius::Scaled(0.2),
        tier: Tier::Inferred,
    },
    Rule {
        pattern: Pattern::Prefix(&["spine_"]),
        radius: Radius::Scaled(0.75),
        tier: Tier::Tracked,
    },
    Rule {
        pattern: Pattern::Exact(&["left_hand_joint", "right_hand_joint"]),
        radius: Radius::Scaled(1.0),
        tier: Tier::Tracked,
    },
    Rule {
        pattern: Pattern::Prefix(&["left_hand", "right_hand"]),
        radius: Radius::Scaled(0.25),
        tier: Tier::Inferred,
    },
    Rule {
        pattern: Pattern::Prefix(&["left_toes", "right_toes"]),
        radius: Radius::Scaled(0.5),
        tier: Tier::Inferred,
    },
];

/// Limbs, pelvis, clavicles, feet and anything unknown.
static DEFAULT_RULE: Rule = Rule {
    pattern: Pattern::Prefix(&[""]),
    radius: Radius::Fixed,
    tier: Tier::Tracked,
};

/// Returns marker style for joint with given raw name.
///
/// Names matched by no rule, including names outside the joint vocabulary,
/// get the default radius and `Tier::Tracked`.
pub fn classify(name: &str, config: &StyleConfig) -> MarkerStyle {
    let rule = RULES
        .iter()
        .find(|rule| rule.pattern.matches(name))
        .unwrap_or(&DEFAULT_RULE);

    MarkerStyle {
        radius: match rule.radius {
            Radius::Scaled(factor) => config.base_radius * factor,
            Radius::Fixed => config.default_radius,
        },
        tier: rule.tier,
    }
}

/// Styles of all joints in the vocabulary, classified once.
#[derive(Clone, Debug)]
pub struct StyleTable {
    styles: HashMap<JointName, MarkerStyle, RandomState>,
    tracked: Material,
    inferred: Material,
}

impl StyleTable {
    pub fn new(config: &StyleConfig) -> Self {
        StyleTable {
            styles: JointName::ALL
                .iter()
                .map(|&joint| (joint, classify(joint.as_str(), config)))
                .collect(),
            tracked: Material::for_tier(Tier::Tracked, config),
            inferred: Material::for_tier(Tier::Inferred, config),
        }
    }

    pub fn get(&self, joint: JointName) -> MarkerStyle {
        self.styles[&joint]
    }

    pub fn material(&self, tier: Tier) -> Material {
        match tier {
            Tier::Tracked => self.tracked,
            Tier::Inferred => self.inferred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(name: &str) -> MarkerStyle {
        classify(name, &StyleConfig::default())
    }

    #[test]
    fn rule_table() {
        let base = StyleConfig::default().base_radius;
        let fixed = StyleConfig::default().default_radius;

        let cases = [
            ("neck_3_joint", base * 0.5, Tier::Tracked),
            ("head_joint", base * 0.5, Tier::Tracked),
            ("right_shoulder_1_joint", base * 0.5, Tier::Tracked),
            ("jaw_joint", base * 0.2, Tier::Inferred),
            ("left_eyeUpperLid_joint", base * 0.2, Tier::Inferred),
            ("nose_joint", base * 0.2, Tier::Inferred),
            ("spine_7_joint", base * 0.75, Tier::Tracked),
            ("left_hand_joint", base, Tier::Tracked),
            ("right_hand_joint", base, Tier::Tracked),
            ("left_handPinky_2_joint", base * 0.25, Tier::Inferred),
            ("right_handThumbEnd_joint", base * 0.25, Tier::Inferred),
            ("left_toes_joint", base * 0.5, Tier::Inferred),
            ("right_toesEnd_joint", base * 0.5, Tier::Inferred),
            ("hips_joint", fixed, Tier::Tracked),
            ("left_foot_joint", fixed, Tier::Tracked),
            ("right_forearm_joint", fixed, Tier::Tracked),
            ("root", fixed, Tier::Tracked),
        ];

        for &(name, radius, tier) in &cases {
            assert_eq!(style(name), MarkerStyle { radius, tier }, "{}", name);
        }
    }

    #[test]
    fn first_rule_wins() {
        // Matches both the hand root rule and the hand prefix rule.
        assert_eq!(style("left_hand_joint").tier, Tier::Tracked);
        assert_eq!(style("left_handIndex_1_joint").tier, Tier::Inferred);
    }

    #[test]
    fn unknown_names_fall_to_default() {
        let config = StyleConfig::default();
        assert_eq!(
            style("tail_joint"),
            MarkerStyle {
                radius: config.default_radius,
                tier: Tier::Tracked,
            }
        );
        assert_eq!(style("").tier, Tier::Tracked);
    }

    #[test]
    fn default_radius_ignores_base() {
        let config = StyleConfig {
            base_radius: 1.0,
            ..StyleConfig::default()
        };

        assert_eq!(
            classify("hips_joint", &config).radius,
            config.default_radius
        );
        assert_eq!(classify("head_joint", &config).radius, 0.5);
    }

    #[test]
    fn table_covers_vocabulary() {
        let config = StyleConfig::default();
        let table = StyleTable::new(&config);

        for &joint in JointName::ALL {
            let style = table.get(joint);
            assert!(style.radius > 0.0);
            assert_eq!(style, classify(joint.as_str(), &config));
        }

        assert_eq!(table.material(Tier::Tracked).color, config.tracked_color);
        assert_eq!(table.material(Tier::Inferred).roughness, 0.8);
    }
}
