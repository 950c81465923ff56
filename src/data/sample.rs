use polars::prelude::*;

/// Number of rows produced by [`sample_data`]
pub const SAMPLE_ROWS: i64 = 100;

/// Category labels, assigned round-robin by row
pub const CATEGORIES: [&str; 4] = ["A", "B", "C", "D"];

/// Generate a deterministic dataset for notebooks and tests
///
/// Row `i` (1-based) holds `id = i`, `name = "Item {i}"`, `value = i * 10.5`
/// and `category = CATEGORIES[(i - 1) % 4]`.
pub fn sample_data() -> PolarsResult<DataFrame> {
    let ids: Vec<i64> = (1..=SAMPLE_ROWS).collect();
    let names: Vec<String> = ids.iter().map(|id| format!("Item {id}")).collect();
    let values: Vec<f64> = ids.iter().map(|&id| id as f64 * 10.5).collect();
    let categories: Vec<&str> = (0..CATEGORIES.len())
        .cycle()
        .take(ids.len())
        .map(|idx| CATEGORIES[idx])
        .collect();

    df!(
        "id" => ids,
        "name" => names,
        "value" => values,
        "category" => categories,
    )
}
