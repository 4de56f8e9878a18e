//! Property tests for the identifier codec.

use compo_model::{FillMode, make_coded_value, make_identifier};
use proptest::prelude::*;

proptest! {
    #[test]
    fn coded_value_roundtrips_terminology_and_code(
        terminology in "[A-Za-z]{1,8}",
        code in "[0-9A-Za-z_.]{1,12}",
        label in ".{0,20}",
    ) {
        let compound = format!("{terminology}:{code}");
        let coded = make_coded_value(&compound, &label).unwrap();
        prop_assert_eq!(coded.terminology, terminology);
        prop_assert_eq!(coded.code, code);
        prop_assert_eq!(coded.value, label);
    }

    #[test]
    fn ids_without_separator_are_malformed(raw in "[^:]{0,16}") {
        prop_assert!(make_coded_value(&raw, "label").is_err());
    }

    #[test]
    fn identifier_keeps_raw_id(raw in ".{0,24}", fill in any::<bool>()) {
        let identifier = make_identifier(&raw, FillMode::from(fill));
        prop_assert_eq!(&identifier.id, &raw);
        prop_assert_eq!(identifier.issuer.is_some(), fill);
    }
}
