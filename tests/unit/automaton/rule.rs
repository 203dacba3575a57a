use super::*;

#[test]
fn presets_format_in_bs_notation() {
    assert_eq!(Rule::CLASSIC.to_string(), "B3/S23");
    assert_eq!(Rule::LABYRINTH.to_string(), "B3/S12345");
    assert_eq!(Rule::HIGH_LIFE.to_string(), "B36/S23");
    assert_eq!(Rule::SEEDS.to_string(), "B2/S");
    assert_eq!(Rule::LIFE_34.to_string(), "B34/S34");
    assert_eq!(Rule::DAY_AND_NIGHT.to_string(), "B3678/S34678");
}

#[test]
fn parse_accepts_notation_order_case_and_presets() {
    assert_eq!(Rule::parse("B3/S23").unwrap(), Rule::CLASSIC);
    assert_eq!(Rule::parse("s23/b3").unwrap(), Rule::CLASSIC);
    assert_eq!(Rule::parse(" B36 / S23 ").unwrap(), Rule::HIGH_LIFE);
    assert_eq!(Rule::parse("B2/S").unwrap(), Rule::SEEDS);
    assert_eq!(Rule::parse("Labyrinth").unwrap(), Rule::LABYRINTH);
    assert_eq!(Rule::parse("day-and-night").unwrap(), Rule::DAY_AND_NIGHT);
    assert_eq!("B34/S34".parse::<Rule>().unwrap(), Rule::LIFE_34);
}

#[test]
fn parse_rejects_malformed_rules() {
    for bad in ["", "B3", "B3/S2x", "B9/S23", "B3/B4", "X3/S23", "23/3"] {
        assert!(
            matches!(Rule::parse(bad), Err(GeomotionError::Automaton(_))),
            "{bad}"
        );
    }
}

#[test]
fn membership_queries() {
    let r = Rule::CLASSIC;
    assert!(r.births(3));
    assert!(!r.births(2));
    assert!(r.survives(2));
    assert!(r.survives(3));
    assert!(!r.survives(4));
    assert!(!r.survives(9));
    assert_eq!(Rule::LABYRINTH.survival_counts(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn new_validates_counts() {
    assert_eq!(Rule::new(&[3], &[2, 3]).unwrap(), Rule::CLASSIC);
    assert!(Rule::new(&[9], &[]).is_err());
}

#[test]
fn serde_uses_string_form() {
    let json = serde_json::to_string(&Rule::HIGH_LIFE).unwrap();
    assert_eq!(json, "\"B36/S23\"");
    let back: Rule = serde_json::from_str("\"classic\"").unwrap();
    assert_eq!(back, Rule::CLASSIC);
    assert!(serde_json::from_str::<Rule>("\"nope\"").is_err());
}

#[test]
fn every_preset_name_resolves() {
    for name in Rule::preset_names() {
        assert!(Rule::preset(name).is_some(), "{name}");
    }
}
