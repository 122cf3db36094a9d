use mealbook_shopping::{IngredientAggregator, IngredientLineItem, Section, ShoppingListGroup};

fn line_item(id: &str, name: &str, amount: f64, unit: &str, section: &str) -> IngredientLineItem {
    IngredientLineItem {
        id: id.to_owned(),
        ingredient_name: Some(name.to_owned()),
        unit: Some(unit.to_owned()),
        section: Section::from(section),
        description: None,
        amount: Some(amount),
    }
}

fn names(group: &ShoppingListGroup) -> Vec<&str> {
    group
        .ingredients
        .iter()
        .map(|i| i.ingredient.as_str())
        .collect()
}

/// Integration test for a booking made of three recipes with overlapping ingredients
#[test]
fn test_full_booking_shopping_list() {
    let items = vec![
        // Roast chicken
        line_item("rec01", "Chicken thigh", 600.0, "g", "MEAT"),
        line_item("rec02", "Lemon", 1.0, "pc", "PRODUCE"),
        line_item("rec03", "Olive oil", 30.0, "ml", "PANTRY"),
        // Risotto
        line_item("rec04", "Arborio rice", 300.0, "g", "PANTRY"),
        line_item("rec05", "Parmesan", 50.0, "g", "DAIRY"),
        line_item("rec06", "Olive oil", 15.0, "ml", "PANTRY"),
        line_item("rec07", "Lemon", 0.5, "pc", "PRODUCE"),
        // Packaging
        line_item("rec08", "Deli container", 3.0, "pc", "SUPPLIES"),
        line_item("rec09", "Butcher twine", 1.0, "m", "HARDWARE"),
    ];

    let groups = IngredientAggregator::aggregate(&items);

    let sections = groups.iter().map(|g| g.section.clone()).collect::<Vec<_>>();
    assert_eq!(
        sections,
        vec![
            Section::Produce,
            Section::Pantry,
            Section::Meat,
            Section::Dairy,
            Section::Supplies,
            Section::Other("HARDWARE".to_owned()),
        ]
    );

    assert_eq!(names(&groups[0]), vec!["Lemon"]);
    assert_eq!(groups[0].ingredients[0].amount, 1.5);
    assert_eq!(groups[0].ingredients[0].id, "rec07");

    assert_eq!(names(&groups[1]), vec!["Arborio rice", "Olive oil"]);
    assert_eq!(groups[1].ingredients[1].amount, 45.0);

    let total = groups.iter().map(|g| g.ingredients.len()).sum::<usize>();
    assert_eq!(total, 7);
}

#[test]
fn test_duplicate_names_merge_into_one_entry() {
    let groups = IngredientAggregator::aggregate(&[
        line_item("a", "Garlic", 2.0, "clove", "PRODUCE"),
        line_item("b", "Shallot", 1.0, "pc", "PRODUCE"),
        line_item("c", "Garlic", 3.0, "clove", "PRODUCE"),
    ]);

    let garlic = groups[0]
        .ingredients
        .iter()
        .filter(|i| i.ingredient == "Garlic")
        .collect::<Vec<_>>();

    assert_eq!(garlic.len(), 1);
    assert_eq!(garlic[0].amount, 5.0);
}

#[test]
fn test_dropped_rows_do_not_affect_other_entries() {
    let mut nameless = line_item("c", "", 40.0, "g", "DAIRY");
    nameless.ingredient_name = None;

    let groups = IngredientAggregator::aggregate(&[
        line_item("a", "Butter", 20.0, "g", "DAIRY"),
        line_item("b", "Butter", 0.0, "g", "DAIRY"),
        nameless,
        line_item("d", "Cream", 0.0, "ml", "DAIRY"),
    ]);

    assert_eq!(groups.len(), 1);
    assert_eq!(names(&groups[0]), vec!["Butter"]);
    assert_eq!(groups[0].ingredients[0].amount, 20.0);
    assert_eq!(groups[0].ingredients[0].id, "a");
}

#[test]
fn test_known_sections_first_then_unknown() {
    let groups = IngredientAggregator::aggregate(&[
        line_item("a", "Yogurt", 1.0, "pot", "DAIRY"),
        line_item("b", "Kale", 1.0, "bunch", "PRODUCE"),
        line_item("c", "Kombu", 1.0, "sheet", "CUSTOM"),
    ]);

    let sections = groups
        .iter()
        .map(|g| g.section.to_string())
        .collect::<Vec<_>>();

    assert_eq!(sections, vec!["PRODUCE", "DAIRY", "CUSTOM"]);
}

#[test]
fn test_ordinal_name_ordering() {
    let groups = IngredientAggregator::aggregate(&[
        line_item("a", "banana", 1.0, "pc", "PRODUCE"),
        line_item("b", "Cherry", 1.0, "pc", "PRODUCE"),
        line_item("c", "Apple", 1.0, "pc", "PRODUCE"),
        line_item("d", "apricot", 1.0, "pc", "PRODUCE"),
    ]);

    // Upper-case letters sort before all lower-case ones.
    assert_eq!(
        names(&groups[0]),
        vec!["Apple", "Cherry", "apricot", "banana"]
    );
}

#[test]
fn test_aggregate_is_deterministic() {
    let items = vec![
        line_item("a", "Thyme", 1.0, "sprig", "PRODUCE"),
        line_item("b", "Salt", 5.0, "g", "PANTRY"),
        line_item("c", "Thyme", 2.0, "sprig", "PRODUCE"),
    ];

    assert_eq!(
        IngredientAggregator::aggregate(&items),
        IngredientAggregator::aggregate(&items)
    );
}

#[test]
fn test_reaggregating_output_is_stable() {
    let items = vec![
        line_item("a", "Fennel", 1.0, "bulb", "PRODUCE"),
        line_item("b", "Fennel", 1.0, "bulb", "PRODUCE"),
        line_item("c", "Stock", 500.0, "ml", "PANTRY"),
        line_item("d", "Foil tray", 2.0, "pc", "SUPPLIES"),
    ];

    let first = IngredientAggregator::aggregate(&items);
    let again = first
        .iter()
        .flat_map(|g| g.ingredients.iter().map(|i| i.to_line_item()))
        .collect::<Vec<_>>();
    let second = IngredientAggregator::aggregate(&again);

    assert_eq!(first, second);
}
