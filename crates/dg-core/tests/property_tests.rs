use proptest::prelude::*;

use dg_core::dungeon::{CellType, Rect};
use dg_core::{Dungeon, DungeonRng, GeneratorConfig};

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (1usize..=6, 1usize..=6, 1usize..=3).prop_map(|(w, h, m)| GeneratorConfig {
        min_room_width: w,
        min_room_height: h,
        room_margin: m,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_default_config_is_connected(
        width in 5usize..=120,
        height in 5usize..=120,
        seed in any::<u64>(),
    ) {
        let dungeon = Dungeon::with_seed(width, height, seed).unwrap();
        prop_assert_eq!(dungeon.floor_components(), 1);
        prop_assert_eq!(dungeon.rooms().len(), dungeon.leaf_count());
        prop_assert_eq!(dungeon.grid().count(CellType::Corridor), 0);
        prop_assert_eq!(dungeon.render(&Default::default()), dungeon.to_string());
    }

    #[test]
    fn prop_any_config_any_supported_size(
        config in config_strategy(),
        extra_w in 0usize..=60,
        extra_h in 0usize..=60,
        seed in any::<u64>(),
    ) {
        let width = config.min_region_width() + extra_w;
        let height = config.min_region_height() + extra_h;
        let mut rng = DungeonRng::new(seed);
        let dungeon = Dungeon::generate(width, height, &config, &mut rng).unwrap();

        prop_assert_eq!(dungeon.floor_components(), 1);
        for room in dungeon.rooms() {
            let inner = room.region.inset(config.room_margin).unwrap();
            prop_assert!(inner.contains(&room.bounds));
            prop_assert!(room.bounds.width >= config.min_room_width);
            prop_assert!(room.bounds.height >= config.min_room_height);
        }
    }

    #[test]
    fn prop_outer_margin_stays_wall(
        width in 5usize..=80,
        height in 5usize..=80,
        seed in any::<u64>(),
    ) {
        let dungeon = Dungeon::with_seed(width, height, seed).unwrap();
        let inner = Rect::new(1, 1, width - 2, height - 2);
        for (x, y) in dungeon.grid().bounds().cells() {
            if !inner.contains_point(x, y) {
                prop_assert_eq!(dungeon.cell(x, y), Some(CellType::Wall));
            }
        }
    }

    #[test]
    fn prop_seed_determines_output(
        width in 5usize..=60,
        height in 5usize..=60,
        seed in any::<u64>(),
    ) {
        let a = Dungeon::with_seed(width, height, seed).unwrap();
        let b = Dungeon::with_seed(width, height, seed).unwrap();
        prop_assert_eq!(a.to_string(), b.to_string());
    }
}
