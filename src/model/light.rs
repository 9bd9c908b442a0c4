use std::collections::BTreeMap;

/// Identity of one addressable LED position.
///
/// Ascending id order is the canonical clause order of an encoded frame
/// program; [`Ord`] on this newtype is what makes a [`ColorTable`] emit
/// deterministically.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct LightId(pub u32);

impl std::fmt::Display for LightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One light of the device inventory.
///
/// The inventory is fixed per device and supplied by the host; the compiler
/// never invents or removes lights. `has_scan_code` classifies the zone:
/// lights sitting under keys carry a scan code (backlighting), strip lights
/// around the case do not (underlighting).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Light {
    /// Immutable light identity.
    pub id: LightId,
    /// `true` for backlighting-zone lights, `false` for underlighting.
    pub has_scan_code: bool,
}

/// One color assignment, three 8-bit channels.
///
/// `u8` channels make the [0,255] range a type-level fact; there is no alpha
/// and no color-space handling anywhere in the compiler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// All channels zero; the default displayed color for a selection with
    /// no existing entries.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Build an [`Rgb`] from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Sparse mapping from light id to its explicitly assigned color.
///
/// Absence of a key means "no explicit color assigned to that light in this
/// program". A table is materialized by [`crate::decode`] when editing
/// begins and discarded once [`crate::encode`]d back into program text; the
/// store of record is always the text. Keys are not required to exist in the
/// device inventory (decode preserves out-of-inventory references).
pub type ColorTable = BTreeMap<LightId, Rgb>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_id_orders_numerically() {
        let mut ids = vec![LightId(10), LightId(2), LightId(33)];
        ids.sort();
        assert_eq!(ids, vec![LightId(2), LightId(10), LightId(33)]);
    }

    #[test]
    fn color_table_iterates_in_ascending_id_order() {
        let mut t = ColorTable::new();
        t.insert(LightId(42), Rgb::new(1, 2, 3));
        t.insert(LightId(7), Rgb::BLACK);
        let keys: Vec<_> = t.keys().copied().collect();
        assert_eq!(keys, vec![LightId(7), LightId(42)]);
    }
}
