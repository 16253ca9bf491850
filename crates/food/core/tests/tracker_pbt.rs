use food_core::{
    Env, FoodConfig, FoodDefinition, FoodEnv, FoodTableSnapshot, FoodTracker, ItemProperties,
    ItemRegistrySnapshot, ResourceId, decode, encode,
};
use proptest::prelude::*;

const MENU: [(&str, i64, bool); 9] = [
    ("apple", 600, false),
    ("bread", 1200, false),
    ("cooked_beef", 1800, false),
    ("rabbit_stew", 2000, false),
    ("golden_carrot", 2400, false),
    ("baked_potato", 9000, false),
    ("honey_bottle", 600, true),
    ("milk_bucket", 3000, true),
    ("rotten_flesh", 300, false),
];

struct World {
    foods: FoodTableSnapshot,
    items: ItemRegistrySnapshot,
    config: FoodConfig,
}

impl World {
    fn new(config: FoodConfig) -> Self {
        let mut foods = FoodTableSnapshot::new();
        let mut items = ItemRegistrySnapshot::new();
        for (name, ticks, drink) in MENU {
            let item = id(name);
            foods.insert(FoodDefinition::new(item.clone(), ticks, 2.0, 0.01, Vec::new()));
            let properties = if drink {
                ItemProperties::drink()
            } else {
                ItemProperties::food()
            };
            items.register(item, properties);
        }
        Self {
            foods,
            items,
            config,
        }
    }

    fn env(&self) -> FoodEnv<'_> {
        Env::with_all(&self.foods, &self.items, &self.config).into_food_env()
    }
}

fn id(name: &str) -> ResourceId {
    ResourceId::vanilla(name).unwrap()
}

#[derive(Clone, Debug)]
enum Step {
    Eat(usize),
    Advance(u32),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0..MENU.len()).prop_map(Step::Eat),
        1 => (1u32..2500).prop_map(Step::Advance),
    ]
}

prop_compose! {
    fn arb_config()(
        max_slots in 1usize..=10,
        eat_again in 0.0f32..=1.0,
        drink_bonus in 0.0f32..=5.0,
    ) -> FoodConfig {
        FoodConfig::new()
            .with_max_slots(max_slots)
            .with_eat_again_percentage(eat_again)
            .with_drink_bonus(drink_bonus)
    }
}

fn is_sorted(tracker: &FoodTracker) -> bool {
    tracker
        .slots()
        .windows(2)
        .all(|pair| pair[0].ticks_remaining <= pair[1].ticks_remaining)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn slots_stay_bounded_and_sorted(
        config in arb_config(),
        steps in prop::collection::vec(arb_step(), 0..80),
    ) {
        let world = World::new(config);
        let env = world.env();
        let mut tracker = FoodTracker::new(env.config());

        for step in steps {
            match step {
                Step::Eat(index) => {
                    tracker.try_eat(&id(MENU[index].0), &env);
                }
                Step::Advance(ticks) => {
                    tracker.advance_by(ticks);
                }
            }
            prop_assert!(tracker.slots().len() <= tracker.max_slots());
            prop_assert!(is_sorted(&tracker));
            prop_assert!(tracker.slots().iter().all(|e| e.ticks_remaining > 0));
            prop_assert!(tracker.drink().is_none_or(|d| d.ticks_remaining > 0));
        }
    }

    #[test]
    fn can_eat_agrees_with_try_eat(
        config in arb_config(),
        steps in prop::collection::vec(arb_step(), 0..60),
        probe in 0..MENU.len(),
    ) {
        let world = World::new(config);
        let env = world.env();
        let mut tracker = FoodTracker::new(env.config());
        for step in steps {
            match step {
                Step::Eat(index) => {
                    tracker.try_eat(&id(MENU[index].0), &env);
                }
                Step::Advance(ticks) => {
                    tracker.advance_by(ticks);
                }
            }
        }

        let item = id(MENU[probe].0);
        let before = tracker.clone();
        let predicted = tracker.can_eat(&item, &env);
        prop_assert_eq!(&tracker, &before);

        let outcome = tracker.try_eat(&item, &env);
        prop_assert_eq!(predicted, outcome.is_accepted());
        if !predicted {
            prop_assert_eq!(&tracker, &before);
        }
    }

    #[test]
    fn record_round_trip(
        config in arb_config(),
        steps in prop::collection::vec(arb_step(), 0..60),
    ) {
        let world = World::new(config);
        let env = world.env();
        let mut tracker = FoodTracker::new(env.config());
        for step in steps {
            match step {
                Step::Eat(index) => {
                    tracker.try_eat(&id(MENU[index].0), &env);
                }
                Step::Advance(ticks) => {
                    tracker.advance_by(ticks);
                }
            }
        }

        let record = encode(&tracker, &world.items);
        let decoded = decode(&record, &FoodConfig::new(), &world.items);

        prop_assert_eq!(decoded, tracker);
    }
}
