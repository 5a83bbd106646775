mod common;

use common::{OrgField, Organisation};
use prw_form::{EquivalenceEncoder, FieldValue, FormRecord, GenericFormState};
use prw_model::SelectOption;
use proptest::prelude::*;

fn existing_options(max: usize) -> impl Strategy<Value = Vec<SelectOption>> {
    proptest::sample::subsequence((1..=20_i64).collect::<Vec<_>>(), 0..=max)
        .prop_shuffle()
        .prop_map(|ids| {
            ids.into_iter()
                .map(|id| SelectOption::entity(id, format!("Unit {id}")))
                .collect()
        })
}

fn field() -> impl Strategy<Value = OrgField> {
    proptest::sample::select(Organisation::FIELDS)
}

proptest! {
    #[test]
    fn set_field_touches_only_its_key(
        name in field(),
        other in field(),
        v in "[a-zA-Z0-9 ]{0,12}",
        w in "[a-zA-Z0-9 ]{0,12}",
    ) {
        let mut form = GenericFormState::new(Organisation {
            org_id: "90001".into(),
            name: "Sydney Skills Institute".into(),
            abn: "51 824 753 556".into(),
            phone: "02 9876 5432".into(),
        });
        form.set_field(name, v.as_str()).unwrap();
        let snapshot = form.values().clone();
        form.set_field(other, w.as_str()).unwrap();

        if name != other {
            prop_assert_eq!(form.field(name), FieldValue::from(v.as_str()));
        }
        for &key in Organisation::FIELDS {
            if key != other {
                prop_assert_eq!(form.values().get(key), snapshot.get(key));
            }
        }
    }

    #[test]
    fn encode_decode_round_trip(
        existing in existing_options(3),
        typed in proptest::option::of("[A-Za-z ]{0,15}"),
        typed_at in 0usize..4,
    ) {
        let mut selection = existing.clone();
        if let Some(label) = &typed {
            selection.insert(typed_at.min(selection.len()), SelectOption::typed(label.as_str()));
        }
        let catalogue: Vec<SelectOption> = (1..=20)
            .map(|id| SelectOption::entity(id, format!("Unit {id}")))
            .collect();

        let record = EquivalenceEncoder::encode(&selection);
        let decoded = EquivalenceEncoder::decode(&record, &catalogue);

        let decoded_existing: Vec<SelectOption> =
            decoded.iter().filter(|o| !o.is_new).cloned().collect();
        prop_assert_eq!(decoded_existing, existing);
        let decoded_typed: Vec<&str> = decoded
            .iter()
            .filter(|o| o.is_new)
            .map(|o| o.label.as_str())
            .collect();
        let stored: Vec<&str> = typed
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .into_iter()
            .collect();
        prop_assert_eq!(decoded_typed, stored);
    }

    #[test]
    fn encode_keeps_first_three_existing(existing in existing_options(8)) {
        let outcome = EquivalenceEncoder::encode_detailed(&existing);
        let kept = existing.len().min(3);

        prop_assert_eq!(outcome.record.filled(), kept);
        for (slot, option) in existing.iter().take(3).enumerate() {
            prop_assert_eq!(outcome.record.slot(slot + 1), Some(&option.value));
        }
        prop_assert_eq!(&outcome.dropped[..], &existing[kept..]);
    }
}

#[test]
fn encode_five_existing_drops_last_two() {
    let options: Vec<SelectOption> = (1..=5)
        .map(|id| SelectOption::entity(id, format!("Unit {id}")))
        .collect();

    let outcome = EquivalenceEncoder::encode_detailed(&options);

    let slots: Vec<_> = outcome.record.slots.iter().flatten().cloned().collect();
    let expected: Vec<_> = options[..3].iter().map(|o| o.value.clone()).collect();
    assert_eq!(slots, expected);
    assert_eq!(outcome.dropped, options[3..].to_vec());
    assert!(outcome.record.overflow_text.is_empty());
}
