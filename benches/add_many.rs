//! This bench test simulates building a large catalog, then draining it from
//! the front, which is the worst case for positional removal.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use recipebook::{Catalog, Ingredient, Recipe, Tier};

/// Generates `count` recipes with unique ids, spread across every tier.
fn recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let tier = Tier::ALL[i % Tier::ALL.len()];
            Recipe::with_ingredients(
                format!("recipe_{i:05}"),
                format!("Recipe {i}"),
                tier,
                [
                    Ingredient::new("Flour", 2).unwrap(),
                    Ingredient::new("Water", 1).unwrap(),
                ],
            )
            .unwrap()
        })
        .collect()
}

fn add_many(c: &mut Criterion) {
    c.bench_function("add 10k recipes", |b| {
        b.iter_batched(
            || recipes(10_000),
            |recipes| {
                let mut catalog = Catalog::with_capacity(recipes.len());
                for recipe in recipes {
                    catalog.add(recipe).unwrap();
                }
                catalog
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("lookup 10k recipes by id", |b| {
        let catalog = Catalog::try_from(recipes(10_000)).unwrap();
        let ids: Vec<String> = catalog.ids().map(str::to_owned).collect();
        b.iter(|| {
            for id in &ids {
                std::hint::black_box(catalog.get_by_id(id).unwrap());
            }
        });
    });

    c.bench_function("filter 10k recipes by tier", |b| {
        let catalog = Catalog::try_from(recipes(10_000)).unwrap();
        b.iter(|| catalog.enumerate_by_tier(Tier::Master).count());
    });
}

fn remove_from_front(c: &mut Criterion) {
    c.bench_function("remove 1k recipes from the front", |b| {
        b.iter_batched(
            || Catalog::try_from(recipes(1_000)).unwrap(),
            |mut catalog| {
                while catalog.remove(0) {}
                catalog
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, add_many, remove_from_front);
criterion_main!(benches);
