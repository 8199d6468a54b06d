//! Device names and output file names.
//!
//! AutoEQ exports are usually named like `Sennheiser HD 600 Graphic Filters
//! Harman.txt`. The device part is recovered by stripping known decorative
//! suffixes, then substituted into per-output file name templates.

use crate::pipeline::OutputKind;

/// Name used when nothing recognisable is left of the file name.
pub const UNKNOWN_DEVICE: &str = "UnknownDevice";

/// Placeholder replaced by the device name in naming templates.
pub const DEVICE_PLACEHOLDER: &str = "{device}";

/// Default template for the primary output.
pub const DEFAULT_PRIMARY_TEMPLATE: &str = "{device}_AHTVC-By_MiFun.txt";

/// Default template for the secondary output.
pub const DEFAULT_SECONDARY_TEMPLATE: &str = "{device}_AHTVCLr2-By_MiFun.txt";

/// Suffixes stripped from the end of a file stem, checked in this order.
const DECORATIVE_SUFFIXES: [&str; 12] = [
    " Graphic Filters Harman",
    " Graphic Filters VDSF",
    " Graphic Filters",
    " target Harman",
    " target VDSF",
    " target",
    " (AVG)",
    " (Target)",
    "(L)",
    "(R)",
    " Harman",
    " VDSF",
];

/// Stems too generic to be a device name.
const GENERIC_STEMS: [&str; 4] = ["result", "output", "graphic", "eq"];

/// Derive a device name from an uploaded file name.
///
/// ```rust
/// use retarget_core::naming::device_name_from_file_name;
///
/// assert_eq!(
///     device_name_from_file_name("Sennheiser HD 600 Graphic Filters Harman.txt"),
///     "Sennheiser HD 600"
/// );
/// assert_eq!(device_name_from_file_name(".txt"), "UnknownDevice");
/// ```
pub fn device_name_from_file_name(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".txt").unwrap_or(file_name);

    let mut name = stem;
    while let Some(stripped) = strip_decorative_suffix(name) {
        name = stripped.trim();
    }
    let name = name.trim();

    if name.is_empty() {
        return UNKNOWN_DEVICE.to_string();
    }

    let lower = name.to_lowercase();
    if GENERIC_STEMS.contains(&lower.as_str()) {
        return match stem.split_whitespace().next() {
            Some(first) if first.to_lowercase() != lower => first.to_string(),
            _ => UNKNOWN_DEVICE.to_string(),
        };
    }

    name.to_string()
}

fn strip_decorative_suffix(name: &str) -> Option<&str> {
    DECORATIVE_SUFFIXES.iter().find_map(|suffix| {
        let split = name.len().checked_sub(suffix.len())?;
        if !name.is_char_boundary(split) {
            return None;
        }
        let (head, tail) = name.split_at(split);
        tail.eq_ignore_ascii_case(suffix).then_some(head)
    })
}

/// File name templates for the two outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    /// Template for the primary output; `{device}` is substituted.
    pub primary: String,
    /// Template for the secondary output; `{device}` is substituted.
    pub secondary: String,
}

impl OutputNaming {
    /// Create naming templates.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Template for `kind`.
    pub fn template(&self, kind: OutputKind) -> &str {
        match kind {
            OutputKind::Primary => &self.primary,
            OutputKind::Secondary => &self.secondary,
        }
    }

    /// File name for `kind` with `device` substituted.
    pub fn file_name(&self, kind: OutputKind, device: &str) -> String {
        self.template(kind).replace(DEVICE_PLACEHOLDER, device)
    }
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_TEMPLATE, DEFAULT_SECONDARY_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_autoeq_suffixes() {
        assert_eq!(
            device_name_from_file_name("Moondrop Aria Graphic Filters Harman.txt"),
            "Moondrop Aria"
        );
        assert_eq!(
            device_name_from_file_name("Moondrop Aria target VDSF.txt"),
            "Moondrop Aria"
        );
        assert_eq!(device_name_from_file_name("HD650 Harman"), "HD650");
    }

    #[test]
    fn stripping_is_repeated_and_case_insensitive() {
        assert_eq!(
            device_name_from_file_name("Truthear Zero (AVG) GRAPHIC FILTERS harman.txt"),
            "Truthear Zero"
        );
        assert_eq!(device_name_from_file_name("KZ ZSN (L)(R).txt"), "KZ ZSN");
    }

    #[test]
    fn extension_is_case_sensitive() {
        assert_eq!(device_name_from_file_name("Aria.TXT"), "Aria.TXT");
    }

    #[test]
    fn empty_result_is_unknown() {
        assert_eq!(device_name_from_file_name(" Harman.txt"), UNKNOWN_DEVICE);
        assert_eq!(device_name_from_file_name(""), UNKNOWN_DEVICE);
    }

    #[test]
    fn generic_stem_falls_back_to_first_word() {
        assert_eq!(device_name_from_file_name("Result.txt"), UNKNOWN_DEVICE);
        assert_eq!(device_name_from_file_name("output Harman.txt"), UNKNOWN_DEVICE);
        assert_eq!(device_name_from_file_name("eq target.txt"), UNKNOWN_DEVICE);
        assert_eq!(device_name_from_file_name("graphic(R).txt"), "graphic(R)");
    }

    #[test]
    fn non_ascii_names_survive() {
        assert_eq!(device_name_from_file_name("수월우 Harman.txt"), "수월우");
        assert_eq!(device_name_from_file_name("é"), "é");
    }

    #[test]
    fn templates_substitute_device() {
        let naming = OutputNaming::default();
        assert_eq!(
            naming.file_name(OutputKind::Primary, "Aria"),
            "Aria_AHTVC-By_MiFun.txt"
        );
        assert_eq!(
            naming.file_name(OutputKind::Secondary, "Aria"),
            "Aria_AHTVCLr2-By_MiFun.txt"
        );

        let custom = OutputNaming::new("{device}.vdsf.txt", "{device}-{device}.txt");
        assert_eq!(custom.file_name(OutputKind::Secondary, "X"), "X-X.txt");
    }
}
