#![allow(missing_docs)]
use enigma_core::key_generator::{self, MAX_PLUG_PAIRS};
use enigma_core::{ConfigError, Error, Machine};
use std::collections::HashSet;

#[test]
fn test_generated_settings_configure_a_machine() {
    for seed in 0..20 {
        let config = key_generator::generate_config(3, 10, Some(seed)).unwrap();
        let distinct: HashSet<_> = config.rotors.iter().collect();
        assert_eq!(distinct.len(), 3);
        assert!(config.plugboard.is_involution());
        assert_eq!(config.plugboard.pairs().len(), 10);

        let ciphertext = Machine::new(&config).unwrap().process_text("RANDOMKEYS").unwrap();
        let plaintext = Machine::new(&config).unwrap().process_text(&ciphertext).unwrap();
        assert_eq!(plaintext, "RANDOMKEYS");
    }
}

#[test]
fn test_same_seed_gives_same_settings() {
    let first = key_generator::generate_config(5, MAX_PLUG_PAIRS, Some(42)).unwrap();
    let second = key_generator::generate_config(5, MAX_PLUG_PAIRS, Some(42)).unwrap();
    assert_eq!(first, second);
    assert!(!first.plugboard.has_fixed_point());
}

#[test]
fn test_unseeded_generation_works() {
    let config = key_generator::generate_config(1, 0, None).unwrap();
    assert_eq!(config.rotors.len(), 1);
    assert!(config.plugboard.pairs().is_empty());
}

#[test]
fn test_impossible_requests_are_rejected() {
    assert!(matches!(
        key_generator::generate_config(6, 0, Some(1)),
        Err(Error::Config(ConfigError::RotorCountOutOfRange { requested: 6, available: 5 }))
    ));
    assert!(matches!(
        key_generator::generate_config(3, 14, Some(1)),
        Err(Error::Config(ConfigError::TooManyPlugs { requested: 14, max: 13 }))
    ));
    assert!(matches!(
        key_generator::generate_config(0, 0, Some(1)),
        Err(Error::Config(ConfigError::EmptyRotorStack))
    ));
}
