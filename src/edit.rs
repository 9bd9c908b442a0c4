use crate::model::light::{ColorTable, LightId, Rgb};

/// Applies `color` to every selected light in a copy of `prior`.
///
/// Entries for unselected lights are left untouched, including entries whose
/// id is not in the current inventory. An empty selection returns `prior`
/// unchanged; callers are expected not to offer the color editor at all in
/// that state, so an empty-selection merge causes no program mutation and no
/// persistence write.
pub fn merge(prior: &ColorTable, selection: &[LightId], color: Rgb) -> ColorTable {
    let mut updated = prior.clone();
    for &id in selection {
        updated.insert(id, color);
    }
    updated
}

/// The color to show the operator before an edit.
///
/// Defined as the color of the first selected light (in selection order)
/// that already has an entry in `table`; [`Rgb::BLACK`] when none does. The
/// default is cosmetic only and must never be written back unless the
/// operator performs an edit.
pub fn displayed_color(table: &ColorTable, selection: &[LightId]) -> Rgb {
    selection
        .iter()
        .find_map(|id| table.get(id).copied())
        .unwrap_or(Rgb::BLACK)
}
