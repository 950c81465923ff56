use polars::prelude::*;

/// Row labels of the `statistic` column produced by [`describe`]
pub const STATISTICS: [&str; 9] = [
    "count",
    "null_count",
    "mean",
    "std",
    "min",
    "25%",
    "50%",
    "75%",
    "max",
];

const QUARTILES: [f64; 3] = [0.25, 0.5, 0.75];

/// Summary statistics for every numeric column
///
/// The result has a leading `statistic` column labelled with [`STATISTICS`]
/// and one `Float64` column per numeric input column, in input order.
/// Non-numeric columns are skipped.
pub fn describe(df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut columns = vec![Column::new("statistic".into(), STATISTICS.as_slice())];

    for column in df.get_columns() {
        if !is_numeric(column.dtype()) {
            continue;
        }
        let series = column.as_materialized_series().cast(&DataType::Float64)?;
        columns.push(Column::new(column.name().clone(), summarize(&series)?));
    }

    tracing::debug!(columns = columns.len() - 1, "described frame");
    DataFrame::new(columns)
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

// One value per entry of `STATISTICS`, in the same order.
fn summarize(series: &Series) -> PolarsResult<Vec<Option<f64>>> {
    let null_count = series.null_count();
    let mut stats = vec![
        Some((series.len() - null_count) as f64),
        Some(null_count as f64),
        series.mean(),
        series.std(1),
        series.min::<f64>()?,
    ];
    for q in QUARTILES {
        stats.push(quantile(series, q)?);
    }
    stats.push(series.max::<f64>()?);
    Ok(stats)
}

fn quantile(series: &Series, q: f64) -> PolarsResult<Option<f64>> {
    if series.null_count() == series.len() {
        return Ok(None);
    }
    let scalar = series.quantile_reduce(q, QuantileMethod::Nearest)?;
    Ok(scalar.value().extract::<f64>())
}
