/// Whether `id` is usable as a file stem inside a single directory.
///
/// Preset names are stored as `<presets_dir>/<id>.toml`, so an identifier
/// must be non-empty, must not name the current or parent directory, and may
/// only hold alphanumerics, `-`, `_`, and `.` when `allow_dots` is set.
/// Separators are rejected by the character check.
pub fn validate_identifier(id: &str, allow_dots: bool) -> bool {
    let allowed =
        |c: char| c.is_alphanumeric() || matches!(c, '-' | '_') || (allow_dots && c == '.');
    !matches!(id, "" | "." | "..") && id.chars().all(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_stems_are_accepted() {
        for stem in ["default", "mobile-2d", "vr_template", "Unity6"] {
            assert!(validate_identifier(stem, false), "{stem}");
        }
    }

    #[test]
    fn dots_need_opt_in() {
        assert!(validate_identifier("mobile.v2", true));
        assert!(!validate_identifier("mobile.v2", false));
    }

    #[test]
    fn names_that_leave_the_presets_dir_are_rejected() {
        for stem in ["", ".", "..", "../default", "nested/preset", "nested\\preset"] {
            assert!(!validate_identifier(stem, true), "{stem:?}");
        }
        assert!(!validate_identifier("two words", true));
    }
}
