use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::error::{LedmapError, LedmapResult};
use crate::model::animation::{Animation, AnimationKind};

/// Valid animation identifier: firmware rejects anything else.
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("name pattern is valid"));

/// The set of named animations of a device configuration.
///
/// The name is the identity key: unique across the set, immutable except
/// through [`AnimationRegistry::rename`]. The registry is a plain value;
/// persistence and change propagation belong to the host, which serializes
/// it as a JSON map keyed by name.
///
/// Every mutating operation validates first and leaves the registry
/// untouched when it returns an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AnimationRegistry {
    animations: BTreeMap<String, Animation>,
}

impl AnimationRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered animations.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// `true` when no animation is registered.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Looks up an animation by name.
    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    /// All animations in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Animation)> {
        self.animations.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// Animations of one kind, in ascending name order.
    ///
    /// The static-map authoring surface lists only `Static` records and must
    /// never see custom animations.
    pub fn of_kind(&self, kind: AnimationKind) -> impl Iterator<Item = (&str, &Animation)> {
        self.iter().filter(move |(_, a)| a.kind == kind)
    }

    /// Validates a proposed name for a new animation.
    ///
    /// Returns [`LedmapError::DuplicateName`] when the name is taken and
    /// [`LedmapError::InvalidName`] when it is empty or fails the identifier
    /// pattern. The duplicate check runs first, matching the order the
    /// original validation messages were surfaced in.
    pub fn validate_name(&self, proposed: &str) -> LedmapResult<()> {
        self.validate_name_excluding(proposed, None)
    }

    /// Like [`AnimationRegistry::validate_name`], but ignores `current` in
    /// the duplicate check. Used by rename, where keeping the same name must
    /// not count as a collision with itself.
    pub fn validate_name_excluding(
        &self,
        proposed: &str,
        current: Option<&str>,
    ) -> LedmapResult<()> {
        if self.animations.contains_key(proposed) && Some(proposed) != current {
            return Err(LedmapError::duplicate_name(proposed));
        }
        if !NAME.is_match(proposed) {
            return Err(LedmapError::invalid_name(proposed));
        }
        Ok(())
    }

    /// Registers a new animation under `name`, seeded per `kind`.
    ///
    /// Static maps start as a header-only program with the fixed settings
    /// literal (see [`Animation::seed`]).
    pub fn create(&mut self, name: &str, kind: AnimationKind) -> LedmapResult<()> {
        self.validate_name(name)?;
        self.animations.insert(name.to_string(), Animation::seed(kind));
        Ok(())
    }

    /// Changes an animation's identity key from `old` to `new`.
    ///
    /// `kind`/`settings`/`frames` are preserved verbatim and the old name is
    /// freed. Validation runs against all names other than `old`; on any
    /// error nothing changes, so callers holding `old` as an active
    /// reference can switch to `new` atomically on success.
    pub fn rename(&mut self, old: &str, new: &str) -> LedmapResult<()> {
        if !self.animations.contains_key(old) {
            return Err(LedmapError::unknown_animation(old));
        }
        self.validate_name_excluding(new, Some(old))?;
        if old == new {
            return Ok(());
        }
        let animation = self
            .animations
            .remove(old)
            .ok_or_else(|| LedmapError::unknown_animation(old))?;
        self.animations.insert(new.to_string(), animation);
        Ok(())
    }

    /// Replaces the stored frame program text of an existing animation.
    pub fn update_frames(&mut self, name: &str, frames: impl Into<String>) -> LedmapResult<()> {
        let animation = self
            .animations
            .get_mut(name)
            .ok_or_else(|| LedmapError::unknown_animation(name))?;
        animation.frames = frames.into();
        Ok(())
    }
}
