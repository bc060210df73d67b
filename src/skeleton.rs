//! In-memory skeleton for headless hosts.

use std::collections::BTreeMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::capability::{BoneTransform, SkeletalMesh};
use crate::model::BoneId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BonePose {
    pub transform: BoneTransform,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

fn visible_by_default() -> bool {
    true
}

/// Named bones with a fixed world transform and a visibility flag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skeleton {
    bones: BTreeMap<BoneId, BonePose>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bone(self, bone: impl Into<BoneId>, position: Vec3) -> Self {
        self.with_bone_transform(bone, BoneTransform::from_position(position))
    }

    pub fn with_bone_transform(mut self, bone: impl Into<BoneId>, transform: BoneTransform) -> Self {
        self.insert(bone, transform);
        self
    }

    pub fn insert(&mut self, bone: impl Into<BoneId>, transform: BoneTransform) {
        self.bones.insert(
            bone.into(),
            BonePose {
                transform,
                visible: true,
            },
        );
    }

    /// Unknown bones report as not visible.
    pub fn is_visible(&self, bone: &str) -> bool {
        self.bones.get(bone).is_some_and(|pose| pose.visible)
    }

    pub fn hidden_bones(&self) -> impl Iterator<Item = &BoneId> {
        self.bones
            .iter()
            .filter(|(_, pose)| !pose.visible)
            .map(|(bone, _)| bone)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }
}

impl SkeletalMesh for Skeleton {
    fn locate(&self, bone: &str) -> Option<BoneTransform> {
        self.bones.get(bone).map(|pose| pose.transform)
    }

    fn set_bone_visible(&mut self, bone: &str, visible: bool) {
        if let Some(pose) = self.bones.get_mut(bone) {
            pose.visible = visible;
        }
    }
}
