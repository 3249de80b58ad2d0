//! End-to-end use of the public API: build ingredients and recipes, hand them
//! to a catalog, then query and remove.

#![allow(missing_docs)]

use recipebook::{Catalog, Error, Ingredient, Recipe, Tier};

fn recipe(id: &str, title: &str, tier: Tier, ingredients: &[(&str, i64)]) -> Recipe {
    let ingredients = ingredients
        .iter()
        .map(|&(code, quantity)| Ingredient::new(code, quantity).unwrap());
    Recipe::with_ingredients(id, title, tier, ingredients).unwrap()
}

fn kitchen() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add(recipe(
            "bread_001",
            "Bread",
            Tier::Basic,
            &[("Wheat", 3), ("Water", 1), ("Yeast", 1)],
        ))
        .unwrap();
    catalog
        .add(recipe(
            "cake_001",
            "Cake",
            Tier::Advanced,
            &[("Flour", 2), ("Eggs", 3), ("Sugar", 2), ("Butter", 1), ("Milk", 1)],
        ))
        .unwrap();
    catalog
        .add(recipe(
            "pie_001",
            "Apple Pie",
            Tier::Basic,
            &[("Flour", 2), ("Apples", 4), ("Sugar", 1), ("Butter", 1)],
        ))
        .unwrap();
    catalog
        .add(recipe(
            "stew_001",
            "Mushroom Stew",
            Tier::Basic,
            &[("Mushrooms", 5), ("Potatoes", 2), ("Carrots", 2), ("Onion", 1), ("Water", 2)],
        ))
        .unwrap();
    catalog
}

#[test]
fn lookup_by_id_and_position() {
    let catalog = kitchen();

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.get_by_id("cake_001").unwrap().tier(), Tier::Advanced);
    assert_eq!(catalog.get(2).unwrap().id(), "pie_001");
}

#[test]
fn advanced_and_above() {
    let catalog = kitchen();
    let titles: Vec<String> = catalog
        .enumerate_by_tier(Tier::Advanced)
        .map(ToString::to_string)
        .collect();
    assert_eq!(titles, ["Cake"]);
}

#[test]
fn remove_stew() {
    let mut catalog = kitchen();

    assert!(catalog.remove_by_id("stew_001"));
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.get_by_id("stew_001"),
        Err(Error::NotFound("stew_001".to_string()))
    );
    assert_eq!(catalog.get(2).unwrap().id(), "pie_001");
    assert!(matches!(
        catalog.get(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));

    let remaining: Vec<_> = catalog.iter().map(Recipe::title).collect();
    assert_eq!(remaining, ["Bread", "Cake", "Apple Pie"]);
}

#[test]
fn duplicate_bread() {
    let mut catalog = kitchen();
    let result = catalog.add(recipe("bread_001", "Rye Bread", Tier::Expert, &[]));

    assert_eq!(result, Err(Error::DuplicateKey("bread_001".to_string())));
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.get(0).unwrap().title(), "Bread");
}

#[test]
fn invalid_construction() {
    assert!(matches!(
        Ingredient::new("Wheat", 0),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        Recipe::new("bread_002", "", Tier::Basic),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn remove_past_the_end() {
    let mut catalog = kitchen();
    let before = catalog.clone();

    assert!(!catalog.remove(10));
    assert_eq!(catalog, before);
}

#[test]
fn ingredients_are_listed_in_order() {
    let catalog = kitchen();
    let bread = catalog.get_by_id("bread_001").unwrap();
    let listed: Vec<String> = bread.ingredients().iter().map(ToString::to_string).collect();
    assert_eq!(listed, ["Wheat×3", "Water×1", "Yeast×1"]);
}
