//! Display transformations inherited from a parent model.
//!
//! The baker never computes these; they are copied verbatim from the parent
//! so items and held blocks are posed the same way as every other cube.

use serde::Deserialize;

/// Rotation in degrees, translation in sixteenths of a block, scale as a factor.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transformation {
    pub rotation: [f32; 3],
    pub translation: [f32; 3],
    pub scale: [f32; 3],
}

impl Transformation {
    pub const IDENTITY: Transformation = Transformation {
        rotation: [0.0; 3],
        translation: [0.0; 3],
        scale: [1.0; 3],
    };

    pub const fn new(rotation: [f32; 3], translation: [f32; 3], scale: [f32; 3]) -> Self {
        Self {
            rotation,
            translation,
            scale,
        }
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Transformation::IDENTITY
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DisplayMode {
    ThirdPersonLeftHand,
    ThirdPersonRightHand,
    FirstPersonLeftHand,
    FirstPersonRightHand,
    Head,
    Gui,
    Ground,
    Fixed,
}

/// Per-context poses for a model.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ModelTransformation {
    #[serde(rename = "thirdperson_lefthand")]
    pub third_person_left_hand: Option<Transformation>,
    #[serde(rename = "thirdperson_righthand", default)]
    pub third_person_right_hand: Transformation,
    #[serde(rename = "firstperson_lefthand")]
    pub first_person_left_hand: Option<Transformation>,
    #[serde(rename = "firstperson_righthand", default)]
    pub first_person_right_hand: Transformation,
    #[serde(default)]
    pub head: Transformation,
    #[serde(default)]
    pub gui: Transformation,
    #[serde(default)]
    pub ground: Transformation,
    #[serde(default)]
    pub fixed: Transformation,
}

impl ModelTransformation {
    /// Pose for `mode`. A missing left-hand pose reuses the right-hand one.
    pub fn get(&self, mode: DisplayMode) -> Transformation {
        match mode {
            DisplayMode::ThirdPersonLeftHand => self
                .third_person_left_hand
                .unwrap_or(self.third_person_right_hand),
            DisplayMode::ThirdPersonRightHand => self.third_person_right_hand,
            DisplayMode::FirstPersonLeftHand => self
                .first_person_left_hand
                .unwrap_or(self.first_person_right_hand),
            DisplayMode::FirstPersonRightHand => self.first_person_right_hand,
            DisplayMode::Head => self.head,
            DisplayMode::Gui => self.gui,
            DisplayMode::Ground => self.ground,
            DisplayMode::Fixed => self.fixed,
        }
    }

    /// Poses of the stock full-block parent.
    pub fn block_default() -> ModelTransformation {
        ModelTransformation {
            third_person_left_hand: None,
            third_person_right_hand: Transformation::new(
                [75.0, 45.0, 0.0],
                [0.0, 2.5, 0.0],
                [0.375; 3],
            ),
            first_person_left_hand: Some(Transformation::new(
                [0.0, 225.0, 0.0],
                [0.0; 3],
                [0.40; 3],
            )),
            first_person_right_hand: Transformation::new([0.0, 45.0, 0.0], [0.0; 3], [0.40; 3]),
            head: Transformation::IDENTITY,
            gui: Transformation::new([30.0, 225.0, 0.0], [0.0; 3], [0.625; 3]),
            ground: Transformation::new([0.0; 3], [0.0, 3.0, 0.0], [0.25; 3]),
            fixed: Transformation::new([0.0; 3], [0.0; 3], [0.5; 3]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_hand_falls_back_to_right() {
        let t = ModelTransformation::block_default();
        assert_eq!(
            t.get(DisplayMode::ThirdPersonLeftHand),
            t.get(DisplayMode::ThirdPersonRightHand)
        );
        assert_ne!(
            t.get(DisplayMode::FirstPersonLeftHand),
            t.get(DisplayMode::FirstPersonRightHand)
        );
    }

    #[test]
    fn missing_fields_default_to_identity() {
        let t: ModelTransformation = toml::from_str(
            r#"
            [gui]
            rotation = [30.0, 225.0, 0.0]
        "#,
        )
        .unwrap();
        assert_eq!(t.gui.scale, [1.0; 3]);
        assert_eq!(t.gui.rotation, [30.0, 225.0, 0.0]);
        assert_eq!(t.get(DisplayMode::Fixed), Transformation::IDENTITY);
    }
}
