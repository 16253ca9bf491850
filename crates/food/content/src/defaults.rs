//! Built-in definitions used when a config file carries no `foodProperties`.

/// Vanilla foods and drinks, in definition-string form.
pub const DEFAULT_FOOD_PROPERTIES: [&str; 27] = [
    "minecraft:apple|600|4|0.005",
    "minecraft:bread|1200|5|0.005",
    "minecraft:cooked_porkchop|1800|8|0.01",
    "minecraft:cooked_beef|1800|8|0.01",
    "minecraft:cooked_chicken|1400|6|0.0075",
    "minecraft:cooked_cod|1200|5|0.005",
    "minecraft:cooked_salmon|1400|6|0.0075",
    "minecraft:cooked_mutton|1400|6|0.0075",
    "minecraft:cooked_rabbit|1200|5|0.005",
    "minecraft:baked_potato|1200|5|0.005",
    "minecraft:carrot|800|3|0.0025",
    "minecraft:beetroot|400|1|0.001",
    "minecraft:beetroot_soup|1400|6|0.0075",
    "minecraft:pumpkin_pie|1800|8|0.01",
    "minecraft:mushroom_stew|1400|6|0.0075",
    "minecraft:rabbit_stew|2000|10|0.0125",
    "minecraft:suspicious_stew|800|6|0.0075",
    // cake is eaten per slice from the block
    "minecraft:cake|1|14|0.0175",
    "minecraft:cookie|400|2|0.001",
    "minecraft:melon_slice|600|2|0.001",
    "minecraft:dried_kelp|200|1|0.0",
    "minecraft:honey_bottle|600|6|0.001",
    "minecraft:milk_bucket|1|0|0.0",
    "minecraft:potion|600|0|0.0",
    "minecraft:golden_carrot|1600|6|0.0075",
    "minecraft:golden_apple|2400|4|0.05|minecraft:regeneration:1.0:1|minecraft:absorption:1.0:0",
    "minecraft:enchanted_golden_apple|3600|4|0.1|minecraft:regeneration:1.0:4|minecraft:absorption:1.0:3|minecraft:resistance:1.0:0|minecraft:fire_resistance:1.0:0",
];
