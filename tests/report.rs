use mealbook::{ChefReport, OrderFile};
use mealbook_catalog::Catalog;
use mealbook_shared::Portion;
use mealbook_shopping::Section;
use temp_dir::TempDir;

fn catalog() -> anyhow::Result<Catalog> {
    Ok(Catalog::load("demos/catalog.json")?)
}

fn order() -> anyhow::Result<OrderFile> {
    let content = std::fs::read_to_string("demos/order.json")?;
    Ok(serde_json::from_str(&content)?)
}

#[test]
fn test_report_meals() -> anyhow::Result<()> {
    let catalog = catalog()?;
    let session = order()?.into_session(&catalog, Portion::Medium)?;
    let report = ChefReport::build(&catalog, &session);

    assert_eq!(report.booking_id, "recBooking2026W43");
    assert_eq!(report.client_name, "Jordan");

    let meals = report
        .meals
        .iter()
        .map(|m| (m.name.as_str(), m.portion, m.quantity))
        .collect::<Vec<_>>();

    assert_eq!(
        meals,
        vec![
            ("Shakshuka", Portion::Medium, 2),
            ("Vegan Shakshuka", Portion::Medium, 1),
            ("Grain bowl", Portion::Large, 1),
            ("Gluten-free tofu grain bowl", Portion::Medium, 1),
        ]
    );

    assert_eq!(report.meals[1].recipes[0].name, "Tofu shakshuka");
    assert_eq!(
        report.meals[0].recipes[0].reheating_tips.as_deref(),
        Some("Warm covered on low heat for 6 minutes.")
    );

    Ok(())
}

#[test]
fn test_report_shopping_list() -> anyhow::Result<()> {
    let catalog = catalog()?;
    let session = order()?.into_session(&catalog, Portion::Medium)?;
    let report = ChefReport::build(&catalog, &session);

    let sections = report
        .shopping_list
        .iter()
        .map(|g| g.section.clone())
        .collect::<Vec<_>>();

    assert_eq!(
        sections,
        vec![
            Section::Produce,
            Section::Pantry,
            Section::Meat,
            Section::Dairy,
            Section::Supplies,
        ]
    );

    let amount = |name: &str| {
        report
            .shopping_list
            .iter()
            .flat_map(|g| &g.ingredients)
            .find(|i| i.ingredient == name)
            .map(|i| i.amount)
    };

    // 2 x (Egg, Tomato 400) + vegan (Tomato 400, tofu 200) + GF bowl (tofu 200)
    assert_eq!(amount("Egg"), Some(4.0));
    assert_eq!(amount("Tomato"), Some(1200.0));
    assert_eq!(amount("Firm tofu"), Some(400.0));
    assert_eq!(amount("Chicken thigh"), Some(300.0));
    assert_eq!(amount("Farro"), Some(90.0));
    assert_eq!(amount("Quinoa"), Some(0.5));
    assert_eq!(amount("Meal container"), Some(2.0));

    Ok(())
}

#[test]
fn test_order_with_unknown_menu_item_fails() -> anyhow::Result<()> {
    let catalog = catalog()?;
    let order = serde_json::from_value::<OrderFile>(serde_json::json!({
        "booking": { "id": "recB", "clientName": "Sam", "email": "sam@mealbook.test" },
        "items": [{ "menuItem": "recNope" }]
    }))?;

    let error = order
        .into_session(&catalog, Portion::Medium)
        .expect_err("unknown menu item");

    assert!(error.to_string().contains("recNope"));

    Ok(())
}

#[test]
fn test_order_missing_required_selection_fails() -> anyhow::Result<()> {
    let catalog = catalog()?;
    let order = serde_json::from_value::<OrderFile>(serde_json::json!({
        "booking": { "id": "recB", "clientName": "Sam", "email": "sam@mealbook.test" },
        "items": [{ "menuItem": "recGrainBowl", "portion": "Medium" }]
    }))?;

    assert!(order.into_session(&catalog, Portion::Medium).is_err());

    Ok(())
}

#[test]
fn test_report_text_from_copied_catalog() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("catalog.json");
    std::fs::copy("demos/catalog.json", &path)?;

    let catalog = Catalog::load(&path)?;
    let session = order()?.into_session(&catalog, Portion::Small)?;
    let report = ChefReport::build(&catalog, &session);

    let text = report.render_text();
    assert!(text.starts_with("Booking recBooking2026W43 for Jordan\n"));
    assert!(text.contains("Vegan Shakshuka x1 (Small)"));
    assert!(text.contains("PRODUCE\n"));

    Ok(())
}
