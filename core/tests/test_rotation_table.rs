#[cfg(test)]
mod tests {
    use cipher_core::alphabet::{Alphabet, RotationTable, TableError};
    use cipher_core::constants::BASIC_LATIN_UPPER;
    use cipher_core::engines::VigenereRot;

    fn latin() -> Alphabet {
        Alphabet::from_ranges("basic_latin", &[BASIC_LATIN_UPPER], &[]).expect("valid alphabet")
    }

    #[test]
    fn unit_step_table_has_one_row_per_rotation() {
        let table = RotationTable::with_unit_step(&latin()).unwrap();
        assert_eq!(table.len(), 26);
        assert_eq!(table.step(), 1);
        assert_eq!(table.row(0), latin().sequence());
        assert_eq!(table.row(1)[0], 'B');
    }

    #[test]
    fn lookup_resolves_row_by_key_and_column_by_plain() {
        let table = RotationTable::with_unit_step(&latin()).unwrap();
        assert_eq!(table.lookup('A', 'A').unwrap(), 'A');
        assert_eq!(table.lookup('A', 'B').unwrap(), 'B');
        assert_eq!(table.lookup('A', 'L').unwrap(), 'L');
        assert_eq!(table.lookup('T', 'E').unwrap(), 'X');
    }

    #[test]
    fn unknown_symbols_fail_lookup() {
        let table = RotationTable::with_unit_step(&latin()).unwrap();
        assert!(matches!(
            table.lookup('a', 'B'),
            Err(TableError::UnknownSymbol { symbol: 'a' })
        ));
        assert!(matches!(
            table.lookup('A', '?'),
            Err(TableError::UnknownSymbol { symbol: '?' })
        ));
    }

    #[test]
    fn stepped_table_materializes_the_shorter_cycle() {
        let table = RotationTable::new(&latin(), 2).unwrap();
        assert_eq!(table.len(), 13);
        // Row 1 is the rotation by one step of two.
        assert_eq!(table.row(1)[0], 'C');
        // Row indices wrap modulo the number of rows.
        assert_eq!(table.row(13)[0], table.row(0)[0]);
    }

    #[test]
    fn zero_step_fails_table_construction() {
        assert!(matches!(
            RotationTable::new(&latin(), 0),
            Err(TableError::Cycle(_))
        ));
    }

    #[test]
    fn table_lookup_matches_a_keyed_engine_at_any_position() {
        let latin = latin();
        let table = RotationTable::with_unit_step(&latin).unwrap();
        for key in ['A', 'E', 'L', 'Z'] {
            let keyed = VigenereRot::new(&latin, &key.to_string()).unwrap();
            for plain in latin.symbols() {
                let expected = table.lookup(plain, key).unwrap();
                for pos in [0, 1, 7, 100] {
                    assert_eq!(keyed.map_for_position(pos).apply(plain), expected);
                }
            }
        }
    }
}
