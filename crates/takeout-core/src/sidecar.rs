//! Sidecar naming rules
//!
//! The canonical sidecar name for a content file is
//! `<content-filename>.supplemental-metadata.json`. Export-tool filename
//! truncation produces a small fixed set of deviations from that form;
//! each one is handled by a pure function mapping a raw filename to the
//! repaired name, or `None` when the name matches no known pattern.

/// Full metadata marker carried by a canonical sidecar name.
pub const METADATA_MARKER: &str = "supplemental-metadata";

/// Truncated marker forms observed in real exports, in the priority
/// order the matcher probes them.
pub const ABBREVIATED_MARKERS: &[&str] =
    &["supplemental-meta", "supplemental-metadat", "supplem"];

/// Marker forms a misplaced counter can follow, longest first so the
/// longest suffix wins.
const COUNTER_MARKERS: &[&str] = &[
    "supplemental-metadata",
    "supplemental-metadat",
    "supplemental-meta",
];

/// The single correct sidecar name for a content file.
pub fn canonical_sidecar_name(content_name: &str) -> String {
    format!("{content_name}.{METADATA_MARKER}.json")
}

/// Repair an abbreviated metadata marker.
///
/// `trip.jpg.supplemental-meta.json` -> `trip.jpg.supplemental-metadata.json`
pub fn repair_abbreviated(name: &str) -> Option<String> {
    for marker in ABBREVIATED_MARKERS {
        let suffix = format!(".{marker}.json");
        if let Some(prefix) = name.strip_suffix(suffix.as_str())
            && !prefix.is_empty()
        {
            return Some(canonical_sidecar_name(prefix));
        }
    }
    None
}

/// Whether a name carries a disambiguation counter in the sidecar
/// position, i.e. ends in `(<digits>).json`.
pub fn has_counter_suffix(name: &str) -> bool {
    parse_counter_suffix(name).is_some()
}

/// Repair a disambiguation counter appended after the metadata marker
/// instead of after the original content filename.
///
/// `photo.jpg.supplemental-metadata(3).json` -> `photo(3).jpg.supplemental-metadata.json`
///
/// Returns `None` when the name does not end in `(<digits>).json`, or
/// when no known marker variant precedes the counter (such names are
/// left untouched and logged as unhandled by the caller).
pub fn repair_misplaced_counter(name: &str) -> Option<String> {
    let (before, counter) = parse_counter_suffix(name)?;

    let original = COUNTER_MARKERS
        .iter()
        .find_map(|marker| before.strip_suffix(format!(".{marker}").as_str()))?;
    if original.is_empty() {
        return None;
    }

    // Re-insert the counter between base name and extension.
    let renamed = match original.rfind('.') {
        Some(idx) if idx > 0 => {
            format!("{}({counter}).{}", &original[..idx], &original[idx + 1..])
        }
        _ => format!("{original}({counter})"),
    };
    Some(canonical_sidecar_name(&renamed))
}

/// Apply the known malformation repairs in order; first match wins.
pub fn repair_sidecar_name(name: &str) -> Option<String> {
    repair_abbreviated(name).or_else(|| repair_misplaced_counter(name))
}

/// Split a `<rest>(<digits>).json` name into the part before the counter
/// and the counter digits.
fn parse_counter_suffix(name: &str) -> Option<(&str, &str)> {
    let stem = name.strip_suffix(".json")?.strip_suffix(')')?;
    let open = stem.rfind('(')?;
    let counter = &stem[open + 1..];
    if counter.is_empty() || !counter.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&stem[..open], counter))
}

/// Case-insensitive match for the sidecar candidate pattern
/// `<content-base-name>.*.supplemental-metadata.json`, with the wildcard
/// covering the (possibly wrong) extension segment.
pub fn matches_candidate_pattern(name: &str, content_base: &str) -> bool {
    let name = name.to_lowercase();
    let prefix = format!("{}.", content_base.to_lowercase());
    let suffix = format!(".{METADATA_MARKER}.json");
    // The prefix and suffix must not overlap, mirroring the minimum
    // length a `<base>.*.<marker>.json` glob would accept.
    name.len() >= prefix.len() + suffix.len()
        && name.starts_with(&prefix)
        && name.ends_with(&suffix)
}

/// Sidecar name produced when the export truncated the trailing
/// character of a long content base name: `<base minus last char>.json`.
pub fn legacy_truncated_name(content_base: &str) -> Option<String> {
    let mut chars = content_base.chars();
    chars.next_back()?;
    let stem = chars.as_str();
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}.json"))
}

/// Abbreviated-suffix candidate names for a content file, in probe order.
pub fn abbreviated_suffix_names(content_name: &str) -> impl Iterator<Item = String> + '_ {
    ABBREVIATED_MARKERS
        .iter()
        .map(move |marker| format!("{content_name}.{marker}.json"))
}
