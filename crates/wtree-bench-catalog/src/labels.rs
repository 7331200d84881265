//! Label sets for benchmarked structures and input categories.
//!
//! Order is significant: plotting code uses these slices as legend order.

/// Key width names, matching width codes 2/4/8 bytes.
pub const KEY_WIDTH_NAMES: [&str; 3] = ["ushort", "uint", "ulong"];

/// Key generator distribution names, matching generator ids 0/1/2.
pub const GENERATOR_NAMES: [&str; 3] = ["uniform", "normal", "bimodal"];

/// Rival structures benchmarked against the subject.
pub const RIVAL_NAMES: [&str; 3] = ["BST", "RB", "BTREE"];

/// All benchmarked structures: the subject first, then rivals in rival order.
pub const STRUCT_NAMES: [&str; 4] = ["WTREE", "BST", "RB", "BTREE"];

/// Colormap name used by the external plotting component for legends.
pub const PALETTE: &str = "tab10";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_names_subject_then_rivals() {
        assert_eq!(STRUCT_NAMES[0], "WTREE");
        assert_eq!(&STRUCT_NAMES[1..], &RIVAL_NAMES);
    }

    #[test]
    fn test_label_sets_align_with_codes() {
        // One name per width code and per generator id.
        assert_eq!(KEY_WIDTH_NAMES.len(), 3);
        assert_eq!(GENERATOR_NAMES.len(), 3);
    }
}
