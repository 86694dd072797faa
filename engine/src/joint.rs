use std::{fmt, str::FromStr};

macro_rules! joints {
    ($($variant:ident => $name:literal,)*) => {
        /// Skeletal joint reported by the body-tracking feed.
        ///
        /// The vocabulary is closed and owned by the tracking platform.
        /// Variants are declared in the platform's canonical order.
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
        )]
        pub enum JointName {
            $($variant,)*
        }

        impl JointName {
            /// All joints in canonical order.
            pub const ALL: &'static [JointName] = &[$(JointName::$variant,)*];

            /// Raw joint name as the tracking platform spells it.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(JointName::$variant => $name,)*
                }
            }
        }

        impl FromStr for JointName {
            type Err = UnknownJoint;

            fn from_str(name: &str) -> Result<Self, UnknownJoint> {
                match name {
                    $($name => Ok(JointName::$variant),)*
                    _ => Err(UnknownJoint {
                        name: name.to_owned(),
                    }),
                }
            }
        }
    };
}

joints! {
    Root => "root",
    Hips => "hips_joint",
    LeftUpLeg => "left_upLeg_joint",
    LeftLeg => "left_leg_joint",
    LeftFoot => "left_foot_joint",
    LeftToes => "left_toes_joint",
    LeftToesEnd => "left_toesEnd_joint",
    RightUpLeg => "right_upLeg_joint",
    RightLeg => "right_leg_joint",
    RightFoot => "right_foot_joint",
    RightToes => "right_toes_joint",
    RightToesEnd => "right_toesEnd_joint",
    Spine1 => "spine_1_joint",
    Spine2 => "spine_2_joint",
    Spine3 => "spine_3_joint",
    Spine4 => "spine_4_joint",
    Spine5 => "spine_5_joint",
    Spine6 => "spine_6_joint",
    Spine7 => "spine_7_joint",
    LeftShoulder1 => "left_shoulder_1_joint",
    LeftArm => "left_arm_joint",
    LeftForearm => "left_forearm_joint",
    LeftHand => "left_hand_joint",
    LeftHandIndexStart => "left_handIndexStart_joint",
    LeftHandIndex1 => "left_handIndex_1_joint",
    LeftHandIndex2 => "left_handIndex_2_joint",
    LeftHandIndex3 => "left_handIndex_3_joint",
    LeftHandIndexEnd => "left_handIndexEnd_joint",
    LeftHandMidStart => "left_handMidStart_joint",
    LeftHandMid1 => "left_handMid_1_joint",
    LeftHandMid2 => "left_handMid_2_joint",
    LeftHandMid3 => "left_handMid_3_joint",
    LeftHandMidEnd => "left_handMidEnd_joint",
    LeftHandPinkyStart => "left_handPinkyStart_joint",
    LeftHandPinky1 => "left_handPinky_1_joint",
    LeftHandPinky2 => "left_handPinky_2_joint",
    LeftHandPinky3 => "left_handPinky_3_joint",
    LeftHandPinkyEnd => "left_handPinkyEnd_joint",
    LeftHandRingStart => "left_handRingStart_joint",
    LeftHandRing1 => "left_handRing_1_joint",
    LeftHandRing2 => "left_handRing_2_joint",
    LeftHandRing3 => "left_handRing_3_joint",
    LeftHandRingEnd => "left_handRingEnd_joint",
    LeftHandThumbStart => "left_handThumbStart_joint",
    LeftHandThumb1 => "left_handThumb_1_joint",
    LeftHandThumb2 => "left_handThumb_2_joint",
    LeftHandThumbEnd => "left_handThumbEnd_joint",
    Neck1 => "neck_1_joint",
    Neck2 => "neck_2_joint",
    Neck3 => "neck_3_joint",
    Neck4 => "neck_4_joint",
    Head => "head_joint",
    Jaw => "jaw_joint",
    Chin => "chin_joint",
    LeftEye => "left_eye_joint",
    LeftEyeLowerLid => "left_eyeLowerLid_joint",
    LeftEyeUpperLid => "left_eyeUpperLid_joint",
    LeftEyeball => "left_eyeball_joint",
    Nose => "nose_joint",
    RightEye => "right_eye_joint",
    RightEyeLowerLid => "right_eyeLowerLid_joint",
    RightEyeUpperLid => "right_eyeUpperLid_joint",
    RightEyeball => "right_eyeball_joint",
    RightShoulder1 => "right_shoulder_1_joint",
    RightArm => "right_arm_joint",
    RightForearm => "right_forearm_joint",
    RightHand => "right_hand_joint",
    RightHandIndexStart => "right_handIndexStart_joint",
    RightHandIndex1 => "right_handIndex_1_joint",
    RightHandIndex2 => "right_handIndex_2_joint",
    RightHandIndex3 => "right_handIndex_3_joint",
    RightHandIndexEnd => "right_handIndexEnd_joint",
    RightHandMidStart => "right_handMidStart_joint",
    RightHandMid1 => "right_handMid_1_joint",
    RightHandMid2 => "right_handMid_2_joint",
    RightHandMid3 => "right_handMid_3_joint",
    RightHandMidEnd => "right_handMidEnd_joint",
    RightHandPinkyStart => "right_handPinkyStart_joint",
    RightHandPinky1 => "right_handPinky_1_joint",
    RightHandPinky2 => "right_handPinky_2_joint",
    RightHandPinky3 => "right_handPinky_3_joint",
    RightHandPinkyEnd => "right_handPinkyEnd_joint",
    RightHandRingStart => "right_handRingStart_joint",
    RightHandRing1 => "right_handRing_1_joint",
    RightHandRing2 => "right_handRing_2_joint",
    RightHandRing3 => "right_handRing_3_joint",
    RightHandRingEnd => "right_handRingEnd_joint",
    RightHandThumbStart => "right_handThumbStart_joint",
    RightHandThumb1 => "right_handThumb_1_joint",
    RightHandThumb2 => "right_handThumb_2_joint",
    RightHandThumbEnd => "right_handThumbEnd_joint",
}

impl fmt::Display for JointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for JointName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for JointName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Joint '{name}' is not part of the body skeleton vocabulary")]
pub struct UnknownJoint {
    pub name: String,
}
