use std::sync::Arc;

use food_content::FoodContent;
use food_core::{
    Consumed, EatOutcome, EffectHandle, EffectRegistrySnapshot, FoodRecord, ItemProperties,
    ItemRegistrySnapshot, PlayerId, Rejection, ResourceId,
};
use food_runtime::{OracleManager, PlayerFoods};

const CONFIG: &str = r#"
[common]
maxSlots = 2
eatAgainPercentage = 0.25
drinkSlotFoodEffectivenessBonus = 0.5
passTicksDuringNight = true
foodProperties = [
    "minecraft:apple|600|4|0.005",
    "minecraft:cooked_beef|1800|8|0.01",
    "minecraft:golden_apple|2400|4|0.05|minecraft:regeneration:1.0:1",
    "minecraft:honey_bottle|600|6|0.001",
    "broken entry",
]
"#;

fn id(s: &str) -> ResourceId {
    s.parse().unwrap()
}

fn host_items() -> ItemRegistrySnapshot {
    ItemRegistrySnapshot::new()
        .with(id("apple"), ItemProperties::food())
        .with(id("cooked_beef"), ItemProperties::food())
        .with(id("golden_apple"), ItemProperties::food())
        .with(id("honey_bottle"), ItemProperties::drink())
        .with(id("rotten_flesh"), ItemProperties::food())
}

fn host_effects() -> EffectRegistrySnapshot {
    EffectRegistrySnapshot::new().with(id("regeneration"), EffectHandle(10))
}

/// Full player session: load config, eat, tick, sleep, save, reconnect.
#[test]
fn test_player_session_survives_reconnect() {
    food_runtime::logging::init(tracing::Level::DEBUG);

    // ================================================================
    // PHASE 1: Host setup
    // ================================================================
    let dir = tempfile::tempdir().expect("temp dir");
    let config_path = dir.path().join("food.toml");
    std::fs::write(&config_path, CONFIG).expect("write config");

    let content = FoodContent::load(&config_path, &host_effects()).expect("config should load");
    assert_eq!(content.config.max_slots, 2);

    let oracles = OracleManager::from_content(content, Arc::new(host_items()));
    let mut players = PlayerFoods::new(oracles);
    let steve = PlayerId(1);

    // ================================================================
    // PHASE 2: Eating fills slots and the drink slot
    // ================================================================
    players.attach(steve);
    assert_eq!(
        players.try_eat(steve, &id("golden_apple")).unwrap(),
        EatOutcome::Accepted(Consumed::SlotAdded)
    );
    assert_eq!(
        players.try_eat(steve, &id("cooked_beef")).unwrap(),
        EatOutcome::Accepted(Consumed::SlotAdded)
    );
    assert_eq!(
        players.try_eat(steve, &id("apple")).unwrap(),
        EatOutcome::Rejected(Rejection::SlotsFull)
    );
    assert_eq!(
        players.try_eat(steve, &id("honey_bottle")).unwrap(),
        EatOutcome::Accepted(Consumed::DrinkFilled)
    );

    let env = players.oracles().env();
    let golden = env.definition(&id("golden_apple")).expect("golden apple defined");
    let effects: Vec<_> = golden.effect_applications().collect();
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0].handle, EffectHandle(10));
    assert_eq!(effects[0].duration_ticks, 2400);

    let health = players.health_bonus(steve).unwrap();
    assert!((health - (4.0 + 8.0 + 6.0) * 1.5).abs() < 1e-4, "got {health}");

    // ================================================================
    // PHASE 3: Time passes; the drink runs out
    // ================================================================
    for _ in 0..600 {
        players.tick();
    }
    let tracker = players.get(steve).unwrap();
    assert!(tracker.drink().is_none());
    assert_eq!(tracker.slots().len(), 2);
    // beef 1200/1800 and golden 1800/2400 are both still above 25%.
    assert!(!players.can_eat(steve, &id("apple")));

    // Sleeping skips 1000 ticks: beef drops to 200 and becomes replaceable.
    players.skip_ticks(1000);
    assert_eq!(
        players.try_eat(steve, &id("apple")).unwrap(),
        EatOutcome::Accepted(Consumed::SlotReplaced {
            previous: id("cooked_beef")
        })
    );

    // ================================================================
    // PHASE 4: Disconnect and reconnect
    // ================================================================
    let mut save = FoodRecord::new();
    save.put_int("PlayerXp", 30);
    players.save(steve, &mut save).expect("save");
    let before = players.detach(steve).expect("was attached");
    assert!(players.get(steve).is_none());

    // The host keeps the record inside its own player data.
    let save_path = dir.path().join("player_1.json");
    std::fs::write(&save_path, serde_json::to_vec_pretty(&save).unwrap()).expect("write save");
    let stored: FoodRecord =
        serde_json::from_slice(&std::fs::read(&save_path).expect("read save")).expect("parse save");
    assert_eq!(stored.get_int("PlayerXp"), 30);

    let restored = players.restore(steve, &stored);
    assert_eq!(restored, &before);

    // ================================================================
    // PHASE 5: Cure-all wipes everything
    // ================================================================
    assert_eq!(
        players.try_eat(steve, &id("rotten_flesh")).unwrap(),
        EatOutcome::Accepted(Consumed::Cleared)
    );
    assert!(players.get(steve).unwrap().is_empty());
    assert_eq!(players.health_bonus(steve), Some(0.0));
}

/// A reload swaps the table; stale entries stop contributing but stay put.
#[test]
fn test_reload_replaces_table_wholesale() {
    let mut players = PlayerFoods::new(OracleManager::from_content(
        FoodContent::defaults(&host_effects()),
        Arc::new(host_items()),
    ));
    let alex = PlayerId(2);
    players.attach(alex);
    players.try_eat(alex, &id("cooked_beef")).unwrap();
    assert_eq!(players.health_bonus(alex), Some(8.0));

    let dir = tempfile::tempdir().expect("temp dir");
    let config_path = dir.path().join("food.toml");
    std::fs::write(&config_path, "[common]\nfoodProperties = [\"minecraft:apple|600|4|0.005\"]\n")
        .expect("write config");
    let reloaded = FoodContent::load(&config_path, &host_effects()).expect("config should load");
    players.oracles_mut().replace_content(reloaded);

    assert_eq!(players.oracles().generation(), 1);
    assert_eq!(players.get(alex).unwrap().slots().len(), 1);
    assert_eq!(players.health_bonus(alex), Some(0.0));
    assert!(!players.can_eat(alex, &id("cooked_beef")));
}

/// A broken config file degrades to the built-in defaults.
#[test]
fn test_unreadable_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config_path = dir.path().join("food.toml");
    std::fs::write(&config_path, "[common\nmaxSlots = ").expect("write config");

    let content = FoodContent::load_or_default(&config_path, &host_effects());

    assert_eq!(content, FoodContent::defaults(&host_effects()));
    assert_eq!(content.config.max_slots, 3);
}
