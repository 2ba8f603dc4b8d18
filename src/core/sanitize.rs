// src/core/sanitize.rs

/// Commas become semicolons so the value can never split a CSV field.
pub fn replace_commas(s: &str) -> String {
    s.replace(',', ";")
}

/// Protein ids become file stems; keep them readable but path-safe.
/// ASCII alphanumerics, `-` and `.` survive; any other run becomes one `_`.
pub fn sanitize_file_stem(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut last_us = false;
    for ch in id.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '.' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!("protein") } else { out }
}
