use influxo::dice::{CUSTOM_ROLL_LABEL, HISTORY_LIMIT, STANDARD_ROLL_LABEL};
use influxo::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_roller() -> DiceRoller<StdRng> {
    DiceRoller::with_rng(StdRng::seed_from_u64(42), HISTORY_LIMIT)
}

#[test]
fn test_d20_stays_in_range() {
    let mut roller = seeded_roller();
    for _ in 0..500 {
        let total = roller.roll(20, 0, "").unwrap();
        assert!((1..=20).contains(&total), "rolled {total}");
    }
}

#[test]
fn test_modifier_shifts_range() {
    let mut roller = seeded_roller();
    for _ in 0..500 {
        let total = roller.roll(6, 3, "x").unwrap();
        assert!((4..=9).contains(&total), "rolled {total}");
        let latest = roller.history().latest().unwrap();
        assert_eq!(latest.total, latest.raw + 3);
        assert_eq!(latest.label, "x");
    }
}

#[test]
fn test_every_face_shows_up() {
    let mut roller = seeded_roller();
    let mut seen = [false; 6];
    for _ in 0..600 {
        let face = roller.roll(6, 0, "").unwrap();
        seen[(face - 1) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_history_keeps_ten_most_recent() {
    let mut roller = seeded_roller();
    for i in 0..11 {
        roller.roll(20, i, &format!("roll {i}")).unwrap();
    }

    let history = roller.history();
    assert_eq!(history.len(), 10);
    let labels: Vec<&str> = history.iter().map(|r| r.label.as_str()).collect();
    let expected: Vec<String> = (1..11).rev().map(|i| format!("roll {i}")).collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_invalid_sides_are_rejected() {
    let mut roller = seeded_roller();
    assert!(matches!(
        roller.roll(0, 0, ""),
        Err(AppError::InvalidDiceShape(0))
    ));
    assert!(matches!(
        roller.roll(-6, 2, ""),
        Err(AppError::InvalidDiceShape(-6))
    ));
    assert!(roller.history().is_empty());
}

#[test]
fn test_presets_parse_free_text_modifier() {
    let mut roller = seeded_roller();

    let total = roller.roll_standard(4, "2").unwrap();
    let latest = roller.history().latest().unwrap();
    assert_eq!(latest.label, STANDARD_ROLL_LABEL);
    assert_eq!(latest.sides, 4);
    assert_eq!(latest.modifier, 2);
    assert_eq!(total, latest.raw + 2);

    roller.roll_custom("não é número").unwrap();
    let latest = roller.history().latest().unwrap();
    assert_eq!(latest.label, CUSTOM_ROLL_LABEL);
    assert_eq!(latest.sides, 20);
    assert_eq!(latest.modifier, 0);
    assert!(latest.to_string().ends_with(&format!("(Resultado: {})", latest.total)));
}

#[test]
fn test_attribute_check_uses_attribute_modifier() {
    let roller = seeded_roller();
    let mut app = App::with_roller(CharacterStore::new(MemoryStorage::new()), roller);
    app.select_score(15);
    app.assign_to_attribute(AttributeKey::For);

    let total = app.attribute_check(AttributeKey::For).unwrap();
    let latest = app.roll_history().latest().unwrap();
    assert_eq!(latest.label, "FOR");
    assert_eq!(latest.modifier, 2);
    assert_eq!(total, latest.raw + 2);

    app.attribute_check(AttributeKey::Sab).unwrap();
    assert_eq!(app.roll_history().latest().unwrap().modifier, 0);
}

#[test]
fn test_custom_history_capacity() {
    let mut roller = DiceRoller::with_rng(StdRng::seed_from_u64(1), 3);
    for _ in 0..5 {
        roller.roll(8, 0, "").unwrap();
    }
    assert_eq!(roller.history().len(), 3);
    assert_eq!(roller.history().capacity(), 3);
}

#[test]
fn test_huge_typed_modifier_saturates() {
    let mut roller = seeded_roller();

    let total = roller.roll_custom("2147483647").unwrap();
    assert_eq!(total, i32::MAX);
    let latest = roller.history().latest().unwrap();
    assert_eq!(latest.modifier, i32::MAX);
    assert!((1..=20).contains(&latest.raw));

    let total = roller.roll(20, i32::MIN, "").unwrap();
    assert_eq!(total, i32::MIN + roller.history().latest().unwrap().raw);
}

#[test]
fn test_zero_history_capacity_keeps_latest_roll() {
    let mut roller = DiceRoller::with_rng(StdRng::seed_from_u64(1), 0);
    assert_eq!(roller.history().capacity(), 1);

    roller.roll(6, 0, "a").unwrap();
    roller.roll(6, 0, "b").unwrap();
    assert_eq!(roller.history().len(), 1);
    assert_eq!(roller.history().latest().unwrap().label, "b");
}
