use crate::aggregation::ShoppingListGroup;

/// Format an aggregated amount for display
///
/// Amounts are rounded to two decimals with trailing zeros removed, so whole
/// numbers print without decimals at any magnitude. A value that rounds to zero
/// prints as `0`. The unit follows when present.
pub fn format_amount(amount: f64, unit: Option<&str>) -> String {
    let rounded = format!("{amount:.2}");
    let value = match rounded.trim_end_matches('0').trim_end_matches('.') {
        "-0" => "0",
        trimmed => trimmed,
    };

    match unit.filter(|u| !u.is_empty()) {
        Some(unit) => format!("{value} {unit}"),
        None => value.to_owned(),
    }
}

/// Render a grouped shopping list as plain text, one heading per section.
pub fn render_text(groups: &[ShoppingListGroup]) -> String {
    let mut out = String::new();

    for group in groups {
        let heading = if group.section.as_str().is_empty() {
            "OTHER"
        } else {
            group.section.as_str()
        };

        out.push_str(heading);
        out.push('\n');

        for ingredient in &group.ingredients {
            out.push_str(&format!(
                "  - {}: {}",
                ingredient.ingredient,
                format_amount(ingredient.amount, ingredient.unit.as_deref())
            ));

            if let Some(description) = ingredient.description.as_deref().filter(|d| !d.is_empty())
            {
                out.push_str(&format!(" ({description})"));
            }

            out.push('\n');
        }
    }

    out
}
