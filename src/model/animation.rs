/// Fixed settings directive attached to every static color map.
///
/// Opaque to the compiler: it is stored and passed through to firmware
/// verbatim, never parsed.
pub const STATIC_MAP_SETTINGS: &str = "loop, replace:clear, framedelay:255";

/// What kind of program an animation record holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// A generated static color map; `frames` is owned by this compiler.
    Static,
    /// Free-form animation text authored by hand; never touched here.
    Custom,
}

/// One named animation record.
///
/// The name is the identity key and lives in the enclosing
/// [`crate::AnimationRegistry`], not in the record itself (mirrors the
/// persisted JSON form, a map keyed by name).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Animation {
    /// Program kind.
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Opaque settings directive passed through to firmware.
    pub settings: String,
    /// The serialized frame program text.
    pub frames: String,
}

impl Animation {
    /// Seed record for a freshly created animation of the given kind.
    ///
    /// Static maps start as a header-only program with the fixed settings
    /// literal; custom animations start empty.
    pub fn seed(kind: AnimationKind) -> Self {
        match kind {
            AnimationKind::Static => Self {
                kind,
                settings: STATIC_MAP_SETTINGS.to_string(),
                frames: crate::program::codec::PROGRAM_HEADER.to_string(),
            },
            AnimationKind::Custom => Self {
                kind,
                settings: String::new(),
                frames: String::new(),
            },
        }
    }
}
