//! Built-in reference defaults.

/// Abbreviations commonly found in OCR and informal deed writing.
///
/// Expanding these before county matching catches inputs like "S. Clara".
/// Keys are matched against lowercased, whitespace-split tokens.
pub const BUILTIN_ABBREVIATIONS: &[(&str, &str)] = &[
    ("s.", "santa"),
    ("st.", "saint"),
    ("mt.", "mount"),
    ("ft.", "fort"),
    ("n.", "north"),
];
