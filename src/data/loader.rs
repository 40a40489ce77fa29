use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, LargeListArray, ListArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{Dataset, InputRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{ "label": "...", "values": [...] }, ...]`
/// * `.csv`     – optional `label` column, every other column is a dimension
/// * `.parquet` – optional `label` string column and a `values` list column
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    Dataset::new(records).with_context(|| format!("validating {}", path.display()))
}

/// Records without a label get their 1-based row number instead.
///
/// Error messages use the same numbering.
fn fallback_label(label: String, row_no: usize) -> String {
    if label.trim().is_empty() {
        format!("#{row_no}")
    } else {
        label
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// [
///   { "label": "pattern A", "values": [0.0, 1.0, 0.5] },
///   { "label": "pattern B", "values": [1.0, 0.0, 0.25] }
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<InputRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<Vec<InputRecord>> {
    let records: Vec<InputRecord> =
        serde_json::from_str(text).context("parsing JSON (expected an array of {label, values})")?;

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(row, rec)| InputRecord::new(fallback_label(rec.label, row + 1), rec.values))
        .collect())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names.
/// A `label` column is optional; all other columns are numeric dimensions,
/// in header order.
fn load_csv(path: &Path) -> Result<Vec<InputRecord>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<InputRecord>> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let label_idx = headers.iter().position(|h| h.eq_ignore_ascii_case("label"));
    let value_cols: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != label_idx)
        .map(|(i, h)| (i, h.as_str()))
        .collect();

    let mut records = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let row_no = row + 1;
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let label = label_idx
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .to_string();

        let values = value_cols
            .iter()
            .map(|&(col_idx, col_name)| {
                let tok = record.get(col_idx).unwrap_or("").trim();
                tok.parse::<f64>().with_context(|| {
                    format!("Row {row_no}, column '{col_name}': '{tok}' is not a number")
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        records.push(InputRecord::new(fallback_label(label, row_no), values));
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing input patterns.
///
/// Expected schema:
/// - `values`: List<Float64> or LargeList<Float64> (Float32 is widened)
/// - `label`: optional Utf8 / LargeUtf8 column
///
/// Other columns are ignored.
fn load_parquet(path: &Path) -> Result<Vec<InputRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let values_idx = schema
            .index_of("values")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'values' column"))?;
        let label_idx = schema.index_of("label").ok();

        let values_col = batch.column(values_idx);

        for row in 0..batch.num_rows() {
            // Numbered across batches, not within this one.
            let row_no = records.len() + 1;
            let values = extract_f64_list(values_col, row)
                .with_context(|| format!("Row {row_no}: failed to read 'values'"))?;
            let label = match label_idx {
                Some(i) => extract_label(batch.column(i), row)
                    .with_context(|| format!("Row {row_no}: failed to read 'label'"))?,
                None => String::new(),
            };

            records.push(InputRecord::new(fallback_label(label, row_no), values));
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

/// Extract a `Vec<f64>` from a List or LargeList column at the given row.
fn extract_f64_list(col: &Arc<dyn Array>, row: usize) -> Result<Vec<f64>> {
    if col.is_null(row) {
        bail!("null value in list column");
    }

    let values_array = match col.data_type() {
        DataType::List(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<ListArray>()
                .context("expected ListArray")?;
            list_arr.value(row)
        }
        DataType::LargeList(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<LargeListArray>()
                .context("expected LargeListArray")?;
            list_arr.value(row)
        }
        other => bail!("Expected List or LargeList column, got {other:?}"),
    };

    if let Some(f64_arr) = values_array.as_any().downcast_ref::<Float64Array>() {
        Ok(f64_arr.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    } else if let Some(f32_arr) = values_array.as_any().downcast_ref::<Float32Array>() {
        Ok(f32_arr.iter().map(|v| v.unwrap_or(f32::NAN) as f64).collect())
    } else {
        bail!(
            "List inner type is {:?}, expected Float64 or Float32",
            values_array.data_type()
        )
    }
}

fn extract_label(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected Utf8 label column, got {other:?}"),
    }
}
