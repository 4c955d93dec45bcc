//! Property-based coverage of the rotation algebra.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use cipher_core::alphabet::{Alphabet, RotationTable};
    use cipher_core::constants::BASIC_LATIN_UPPER;
    use cipher_core::engines::VigenereRot;
    use cipher_core::rotation::{normalize_shift, unique_rotation_count};
    use cipher_core::sequence::Sequence;

    fn latin() -> Alphabet {
        Alphabet::from_ranges("basic_latin", &[BASIC_LATIN_UPPER], &[]).expect("valid alphabet")
    }

    proptest! {
        #[test]
        fn zero_rotation_is_identity(items in prop::collection::vec(any::<u8>(), 1..64)) {
            let seq = Sequence::new(items);
            prop_assert_eq!(seq.rotate(0).unwrap(), seq);
        }

        #[test]
        fn rotation_round_trips(
            items in prop::collection::vec(any::<u8>(), 1..64),
            shift in -500i64..500,
        ) {
            let seq = Sequence::new(items);
            prop_assert_eq!(seq.rotate(shift).unwrap().rotate(-shift).unwrap(), seq);
        }

        #[test]
        fn rotating_by_the_normalized_shift_is_equivalent(
            items in prop::collection::vec(any::<u8>(), 1..64),
            shift in -500i64..500,
        ) {
            let seq = Sequence::new(items);
            let normalized = normalize_shift(shift, seq.len()).unwrap();
            prop_assert!(normalized.unsigned_abs() < seq.len() as u64);
            prop_assert!((shift >= 0) == (normalized >= 0) || normalized == 0);
            prop_assert_eq!(seq.rotate(shift).unwrap(), seq.rotate(normalized).unwrap());
        }

        #[test]
        fn cycle_length_is_len_over_gcd(length in 1usize..48, step in -48i64..48) {
            prop_assume!(step != 0);
            let seq = Sequence::from_fn(length, |i| i);
            let cycle = seq.rotate_cycle(step).unwrap();
            let expected = unique_rotation_count(length, step).unwrap();
            prop_assert_eq!(cycle.expected_len(), expected);
            prop_assert_eq!(cycle.count(), expected);
        }

        #[test]
        fn cycle_rotations_are_distinct(length in 1usize..32, step in 1i64..32) {
            let seq = Sequence::from_fn(length, |i| i);
            let rotations: Vec<Vec<usize>> = seq
                .rotate_cycle(step)
                .unwrap()
                .map(|rotation| rotation.to_vec())
                .collect();
            let distinct: HashSet<&Vec<usize>> = rotations.iter().collect();
            prop_assert_eq!(distinct.len(), rotations.len());
        }

        #[test]
        fn rotation_maps_are_full_size_bijections(shift in -500i64..500) {
            let map = latin().rotation_map(shift);
            prop_assert_eq!(map.len(), 26);
            let values: HashSet<char> = map.iter().map(|(_, to)| to).collect();
            prop_assert_eq!(values.len(), 26);
        }

        #[test]
        fn table_lookup_matches_keyed_engine(
            key_index in 0usize..26,
            plain_index in 0usize..26,
            pos in 0usize..512,
        ) {
            let latin = latin();
            let key = latin.get(key_index).unwrap();
            let plain = latin.get(plain_index).unwrap();
            let table = RotationTable::with_unit_step(&latin).unwrap();
            let keyed = VigenereRot::new(&latin, &key.to_string()).unwrap();
            prop_assert_eq!(
                table.lookup(plain, key).unwrap(),
                keyed.map_for_position(pos).apply(plain)
            );
        }

        #[test]
        fn move_to_front_keeps_the_symbol_set(
            items in prop::collection::vec(0u8..16, 1..32),
            value in 0u8..16,
        ) {
            let seq = Sequence::new(items.clone());
            match seq.move_to_front(&value).unwrap() {
                Some(moved) => {
                    prop_assert_eq!(moved.len(), seq.len());
                    prop_assert_eq!(moved.get(0), Some(&value));
                    let mut expected = items;
                    expected.sort_unstable();
                    let mut actual = moved.to_vec();
                    actual.sort_unstable();
                    prop_assert_eq!(actual, expected);
                }
                None => prop_assert!(!seq.contains(&value)),
            }
        }
    }
}
