//! Property-based tests for template substitution and prompt semantics.

use etyper_provision::prompt::is_affirmative;
use etyper_provision::service::{render_unit, INSTALL_DIR_TOKEN};
use proptest::prelude::*;
use std::path::PathBuf;

/// Absolute, token-free install directory paths.
fn install_dir_strategy() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec("[a-zA-Z0-9_.-]{1,12}", 1..4)
        .prop_map(|parts| PathBuf::from(format!("/{}", parts.join("/"))))
}

/// Template text: token-free filler segments joined by placeholder tokens.
fn template_strategy() -> impl Strategy<Value = (String, usize)> {
    proptest::collection::vec("[a-zA-Z0-9 =/.\\n\\[\\]-]{0,30}", 1..6).prop_map(|segments| {
        let occurrences = segments.len() - 1;
        (segments.join(INSTALL_DIR_TOKEN), occurrences)
    })
}

proptest! {
    /// No placeholder token survives rendering.
    #[test]
    fn rendering_removes_every_token((template, _) in template_strategy(),
                                     dir in install_dir_strategy()) {
        let rendered = render_unit(&template, &dir);
        prop_assert!(!rendered.contains(INSTALL_DIR_TOKEN));
    }

    /// Each token occurrence becomes one copy of the install path.
    #[test]
    fn rendering_substitutes_once_per_occurrence((template, occurrences) in template_strategy(),
                                                 dir in install_dir_strategy()) {
        let rendered = render_unit(&template, &dir);
        let dir_str = dir.display().to_string();
        prop_assert!(rendered.matches(&dir_str).count() >= occurrences);
        // Length accounting: every token swapped for the path, nothing else changed.
        let expected_len = template.len()
            + occurrences * dir_str.len()
            - occurrences * INSTALL_DIR_TOKEN.len();
        prop_assert_eq!(rendered.len(), expected_len);
    }

    /// A template without the token is returned unchanged.
    #[test]
    fn rendering_token_free_template_is_identity(text in "[a-zA-Z0-9 =/.\\n-]{0,200}",
                                                 dir in install_dir_strategy()) {
        prop_assert_eq!(render_unit(&text, &dir), text);
    }

    /// Rendering the same inputs twice gives identical output.
    #[test]
    fn rendering_is_deterministic((template, _) in template_strategy(),
                                  dir in install_dir_strategy()) {
        prop_assert_eq!(render_unit(&template, &dir), render_unit(&template, &dir));
    }

    /// Default-to-no: only y/Y (modulo whitespace) ever accepts.
    #[test]
    fn prompt_declines_everything_but_y(reply in "\\PC{0,10}") {
        let accepted = is_affirmative(&reply);
        let expected = matches!(reply.trim(), "y" | "Y");
        prop_assert_eq!(accepted, expected);
    }
}
