#[cfg(test)]
mod tests {
    use cipher_core::alphabet::{Alphabet, SubstitutionMap};
    use cipher_core::constants::BASIC_LATIN_UPPER;
    use cipher_core::engines::{AlbertiRot, Engine, Plugboard, StaticRot, VigenereRot};
    use cipher_core::pipeline::Pipeline;

    fn latin() -> Alphabet {
        Alphabet::from_ranges("basic_latin", &[BASIC_LATIN_UPPER], &[]).expect("valid alphabet")
    }

    fn caesar(shift: i64) -> Engine {
        Engine::Static(StaticRot::new(&latin(), shift))
    }

    #[test]
    fn empty_pipeline_is_the_identity() {
        let pipeline = Pipeline::new(vec![]);
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.encrypt("ATTACK AT DAWN!"), "ATTACK AT DAWN!");
        assert_eq!(pipeline.encrypt(""), "");
    }

    #[test]
    fn single_stage_caesar_round_trips() {
        let encrypt = Pipeline::new(vec![caesar(3)]);
        let decrypt = Pipeline::new(vec![caesar(-3)]);
        let ciphertext = encrypt.encrypt("HELLO");
        assert_eq!(ciphertext, "KHOOR");
        assert_eq!(decrypt.encrypt(&ciphertext), "HELLO");
    }

    #[test]
    fn sequential_static_shifts_compose_additively() {
        let chained = Pipeline::new(vec![caesar(1), caesar(2)]);
        let single = Pipeline::new(vec![caesar(3)]);
        assert_eq!(chained.encrypt("A"), single.encrypt("A"));
        assert_eq!(chained.encrypt("HELLO"), single.encrypt("HELLO"));
    }

    #[test]
    fn engine_order_changes_the_result() {
        let plugboard = || {
            Engine::Plugboard(Plugboard::new(SubstitutionMap::from_pairs([('A', 'B')])))
        };
        let plug_then_shift = Pipeline::new(vec![plugboard(), caesar(1)]);
        let shift_then_plug = Pipeline::new(vec![caesar(1), plugboard()]);
        assert_eq!(plug_then_shift.encrypt("A"), "C");
        assert_eq!(shift_then_plug.encrypt("A"), "B");
    }

    #[test]
    fn positional_engines_restart_per_stage() {
        // Each stage counts positions over its own input, so a periodic
        // engine after a static one still starts at position 0.
        let disk = Engine::Periodic(AlbertiRot::new(&latin(), 0, 2, 1).unwrap());
        let pipeline = Pipeline::new(vec![caesar(1), disk]);
        assert_eq!(pipeline.encrypt("AAAA"), "BBCC");
    }

    #[test]
    fn non_alphabet_symbols_survive_every_stage() {
        let pipeline = Pipeline::new(vec![
            caesar(3),
            Engine::Keyed(VigenereRot::new(&latin(), "KEY").unwrap()),
        ]);
        let ciphertext = pipeline.encrypt("HI, THERE!");
        assert!(ciphertext.contains(','));
        assert!(ciphertext.contains('!'));
        assert!(ciphertext.contains(' '));
    }

    #[test]
    fn multi_stage_decryption_runs_inverses_in_reverse_order() {
        let encrypt = Pipeline::new(vec![caesar(3), caesar(5)]);
        let decrypt = Pipeline::new(vec![caesar(-5), caesar(-3)]);
        let ciphertext = encrypt.encrypt("MEETATMIDNIGHT");
        assert_eq!(decrypt.encrypt(&ciphertext), "MEETATMIDNIGHT");
    }

    #[test]
    fn plugboard_inverse_comes_from_the_inverted_map() {
        let map = SubstitutionMap::from_pairs([('A', 'X'), ('B', 'Y'), ('C', 'Z')]);
        let encrypt = Pipeline::new(vec![Engine::Plugboard(Plugboard::new(map.clone()))]);
        let decrypt = Pipeline::new(vec![Engine::Plugboard(Plugboard::new(map.invert()))]);
        let ciphertext = encrypt.encrypt("CAB");
        assert_eq!(ciphertext, "ZXY");
        assert_eq!(decrypt.encrypt(&ciphertext), "CAB");
    }
}
