use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shrine_of_disorder::shrine::{randomize_each_item, randomize_each_stack, session_rng, swap_all_inventories};
use shrine_of_disorder::{Inventory, ItemCatalog, ItemTier, Policy};

fn catalog() -> ItemCatalog {
    let mut catalog = ItemCatalog::new();
    for (offset, tier) in ItemTier::ALL.into_iter().enumerate() {
        let base = offset as u32 * 100;
        catalog.set_tier(tier, base..base + 40);
    }
    catalog
}

fn loaded_inventory(owner: u32) -> Inventory {
    Inventory::with_items(owner, (0..30).map(|i| ((i % 3) * 100 + i, 1 + i % 5)))
}

fn bench_randomize(c: &mut Criterion) {
    let catalog = catalog();
    let policy = Policy::default();
    let start = loaded_inventory(0);

    c.bench_function("randomize_each_item", |b| {
        let mut rng = session_rng(1);
        b.iter(|| {
            let mut inventory = start.clone();
            black_box(randomize_each_item(&mut inventory, &catalog, &policy, &mut rng));
        })
    });

    c.bench_function("randomize_each_stack", |b| {
        let mut rng = session_rng(1);
        b.iter(|| {
            let mut inventory = start.clone();
            black_box(randomize_each_stack(&mut inventory, &catalog, &policy, &mut rng));
        })
    });
}

fn bench_swap_all(c: &mut Criterion) {
    let party: Vec<Inventory> = (0..16).map(loaded_inventory).collect();

    c.bench_function("swap_all_inventories_16", |b| {
        let mut rng = session_rng(1);
        b.iter(|| {
            let mut members = party.clone();
            black_box(swap_all_inventories(&mut members, &mut rng)).ok();
        })
    });
}

criterion_group!(benches, bench_randomize, bench_swap_all);
criterion_main!(benches);
