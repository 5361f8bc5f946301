/// Normalize an ingredient name for table keys and lookups.
///
/// Trims surrounding whitespace and lowercases. The same normalization is
/// applied when the score table is loaded and when a query is scored, so
/// lookups are case- and whitespace-insensitive.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Split a captured ingredient payload into individual names.
///
/// Capture sources (manual entry, decoded barcode/QR payloads, product
/// database lookups) deliver a single comma-separated string. Pieces are
/// trimmed and empty pieces dropped. Duplicates are kept; they count toward
/// the score once per occurrence.
pub fn split_list(payload: &str) -> Vec<String> {
    payload
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
