use std::sync::LazyLock;

use regex::Regex;

use crate::model::light::{ColorTable, LightId, Rgb};

/// Header line opening every generated static color map program.
///
/// The trailing `;` is part of the literal format understood by firmware.
pub const PROGRAM_HEADER: &str = "### AUTO GENERATED - DO NOT EDIT - STATIC COLOR MAP ###;\n";

/// One position-color clause: `P[<id>](<r>,<g>,<b>)`, whitespace tolerated
/// between tokens. Deliberately not a structural grammar: program text is
/// free-form and may interleave hand-written comments with generated
/// clauses, so the decoder scans rather than parses.
static CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"P\s*\[\s*(\d+)\s*\]\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)")
        .expect("clause pattern is valid")
});

/// Scans program text for position-color clauses and builds the color table.
///
/// Never fails: text with no clause yields an empty table, and fragments
/// that match the clause shape but carry an out-of-range value (id beyond
/// `u32`, channel beyond 255) are skipped. When the same light id appears in
/// several clauses the last one wins.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn decode(text: &str) -> ColorTable {
    let mut table = ColorTable::new();
    let mut skipped = 0usize;
    for caps in CLAUSE.captures_iter(text) {
        let id = caps[1].parse::<u32>();
        let r = caps[2].parse::<u8>();
        let g = caps[3].parse::<u8>();
        let b = caps[4].parse::<u8>();
        match (id, r, g, b) {
            (Ok(id), Ok(r), Ok(g), Ok(b)) => {
                table.insert(LightId(id), Rgb { r, g, b });
            }
            _ => skipped += 1,
        }
    }
    tracing::debug!(entries = table.len(), skipped, "decoded frame program");
    table
}

/// Serializes a color table into canonical frame program text.
///
/// Emits [`PROGRAM_HEADER`], then one `P[id](r,g,b)` clause per entry in
/// ascending light-id order, clauses joined by `",\n"`, terminated by a
/// single `;`. An empty table encodes to the header plus a bare `;`. Output
/// depends only on the table contents, never on construction order, so
/// re-encoding an unchanged program is diff-stable.
#[tracing::instrument(skip(table), fields(entries = table.len()))]
pub fn encode(table: &ColorTable) -> String {
    let clauses: Vec<String> = table
        .iter()
        .map(|(id, c)| format!("P[{}]({},{},{})", id, c.r, c.g, c.b))
        .collect();
    format!("{}{};", PROGRAM_HEADER, clauses.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(u32, (u8, u8, u8))]) -> ColorTable {
        entries
            .iter()
            .map(|&(id, (r, g, b))| (LightId(id), Rgb { r, g, b }))
            .collect()
    }

    #[test]
    fn decode_extracts_all_clauses() {
        let t = decode("P[3](255,0,0),\nP[17](0,255,0);");
        assert_eq!(t, table(&[(3, (255, 0, 0)), (17, (0, 255, 0))]));
    }

    #[test]
    fn decode_tolerates_whitespace_between_tokens() {
        let t = decode("P [ 5 ] ( 1 , 2 , 3 )");
        assert_eq!(t, table(&[(5, (1, 2, 3))]));
    }

    #[test]
    fn decode_of_garbage_is_empty_not_an_error() {
        assert!(decode("garbage text with no pattern").is_empty());
        assert!(decode("").is_empty());
        assert!(decode(PROGRAM_HEADER).is_empty());
    }

    #[test]
    fn decode_last_match_wins() {
        let t = decode("P[1](1,1,1), P[1](2,2,2);");
        assert_eq!(t, table(&[(1, (2, 2, 2))]));
    }

    #[test]
    fn decode_skips_out_of_range_channels() {
        // 300 does not fit a channel; the clause is dropped, its neighbors kept.
        let t = decode("P[1](300,0,0), P[2](0,255,0);");
        assert_eq!(t, table(&[(2, (0, 255, 0))]));
    }

    #[test]
    fn decode_ignores_interleaved_hand_written_comments() {
        let text = "### my notes ###;\nP[1](9,9,9), # left edge\nP[2](0,0,9);";
        let t = decode(text);
        assert_eq!(t, table(&[(1, (9, 9, 9)), (2, (0, 0, 9))]));
    }

    #[test]
    fn encode_emits_ascending_id_order_regardless_of_insertion() {
        let mut t = ColorTable::new();
        t.insert(LightId(17), Rgb::new(0, 255, 0));
        t.insert(LightId(3), Rgb::new(255, 0, 0));
        assert_eq!(
            encode(&t),
            "### AUTO GENERATED - DO NOT EDIT - STATIC COLOR MAP ###;\nP[3](255,0,0),\nP[17](0,255,0);"
        );
    }

    #[test]
    fn encode_empty_table_is_header_plus_semicolon() {
        assert_eq!(encode(&ColorTable::new()), format!("{PROGRAM_HEADER};"));
    }

    #[test]
    fn roundtrip_is_identity() {
        let t = table(&[(0, (0, 0, 0)), (12, (128, 64, 32)), (255, (255, 255, 255))]);
        assert_eq!(decode(&encode(&t)), t);
    }

    #[test]
    fn reencode_of_decoded_program_is_stable() {
        let canonical = encode(&table(&[(1, (10, 20, 30)), (9, (40, 50, 60))]));
        assert_eq!(encode(&decode(&canonical)), canonical);
    }
}
