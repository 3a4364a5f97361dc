use chrono::NaiveDate;
use proptest::prelude::*;

use pactchain_types::{Agreement, AgreementDraft, BlockHash, PreviousHash, Timestamp};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// BlockHash hex rendering parses back to the same hash.
    #[test]
    fn block_hash_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        let parsed: BlockHash = hash.to_hex().parse().unwrap();
        prop_assert_eq!(parsed, hash);
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// PreviousHash survives its string wire form.
    #[test]
    fn previous_hash_string_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let previous = PreviousHash::Block(BlockHash::new(bytes));
        let wire: String = previous.into();
        prop_assert_eq!(wire.len(), 64);
        prop_assert_eq!(PreviousHash::try_from(wire).unwrap(), previous);
    }

    /// Timestamp ordering matches millisecond ordering.
    #[test]
    fn timestamp_ordering(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(
            Timestamp::from_millis(a) < Timestamp::from_millis(b),
            a < b
        );
    }

    /// A draft with non-blank fields and a real date always converts, and
    /// keeps the text exactly as submitted.
    #[test]
    fn complete_draft_converts(
        party_a in "[A-Za-z][A-Za-z ]{0,20}",
        party_b in "[A-Za-z][A-Za-z ]{0,20}",
        title in "[A-Za-z0-9][A-Za-z0-9 ]{0,30}",
        terms in "[ -~]{0,60}[a-z]",
        date in any_date(),
    ) {
        let draft = AgreementDraft {
            party_a: Some(party_a.clone()),
            party_b: Some(party_b.clone()),
            agreement_title: Some(title.clone()),
            terms: Some(terms.clone()),
            date_signed: Some(date.format("%Y-%m-%d").to_string()),
        };
        let agreement = draft.into_agreement().unwrap();
        prop_assert_eq!(
            agreement,
            Agreement::new(party_a, party_b, title, terms, date).unwrap()
        );
    }

    /// Whitespace-only text is never accepted.
    #[test]
    fn blank_terms_rejected(blank in "[ \t\n]{0,10}", date in any_date()) {
        prop_assert!(Agreement::new("Alice", "Bob", "NDA", blank, date).is_err());
    }
}
