use crate::model::light::{Light, LightId};

/// Symbolic group selector resolved against the device inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightGroup {
    /// Clear the selection.
    None,
    /// Lights with a scan code (under keys).
    Backlighting,
    /// Lights without a scan code (case strip).
    Underlighting,
    /// Every light in the inventory.
    All,
}

/// Resolves a group selector into the concrete list of light ids.
///
/// The result fully replaces the previously active selection; grouping is
/// not additive. Inventory order is preserved, which is what gives
/// [`crate::displayed_color`] its deterministic tie-break. A group with zero
/// matching lights yields an empty selection, which is a valid state.
pub fn select_group(lights: &[Light], group: LightGroup) -> Vec<LightId> {
    match group {
        LightGroup::None => Vec::new(),
        LightGroup::Backlighting => lights
            .iter()
            .filter(|l| l.has_scan_code)
            .map(|l| l.id)
            .collect(),
        LightGroup::Underlighting => lights
            .iter()
            .filter(|l| !l.has_scan_code)
            .map(|l| l.id)
            .collect(),
        LightGroup::All => lights.iter().map(|l| l.id).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Vec<Light> {
        vec![
            Light {
                id: LightId(1),
                has_scan_code: true,
            },
            Light {
                id: LightId(2),
                has_scan_code: false,
            },
        ]
    }

    #[test]
    fn groups_resolve_by_zone() {
        let lights = inventory();
        assert_eq!(select_group(&lights, LightGroup::None), vec![]);
        assert_eq!(
            select_group(&lights, LightGroup::Backlighting),
            vec![LightId(1)]
        );
        assert_eq!(
            select_group(&lights, LightGroup::Underlighting),
            vec![LightId(2)]
        );
        assert_eq!(
            select_group(&lights, LightGroup::All),
            vec![LightId(1), LightId(2)]
        );
    }

    #[test]
    fn group_with_no_matching_lights_is_empty() {
        let only_keys = vec![Light {
            id: LightId(7),
            has_scan_code: true,
        }];
        assert_eq!(select_group(&only_keys, LightGroup::Underlighting), vec![]);
        assert_eq!(select_group(&[], LightGroup::All), vec![]);
    }
}
