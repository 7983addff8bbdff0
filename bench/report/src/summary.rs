use crate::error::ReportError;
use crate::latency_row::LatencyRow;
use crate::summary_row::SummaryRow;
use crate::utils::{ensure_absent, read_csv, write_csv};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

pub const SUMMARY_TABLE: &str = "single_request_latency_summary.csv";

/// Variables derived from every latency row, in reporting order.
pub const VARIABLES: [(&str, fn(&LatencyRow) -> f64); 3] = [
    ("latency_ms", LatencyRow::latency_ms),
    ("server_ms", LatencyRow::server_ms),
    ("lifecycle_ms", LatencyRow::lifecycle_ms),
];

/// Reads a latency table and writes its descriptive statistics next to
/// `output_dir`, refusing to overwrite an existing summary.
pub fn summarize_file(latency_csv: &Path, output_dir: &Path) -> Result<Vec<SummaryRow>, ReportError> {
    let output = output_dir.join(SUMMARY_TABLE);
    ensure_absent(&output)?;

    let rows: Vec<LatencyRow> = read_csv(latency_csv)?;
    let summary = summarize(&rows);
    if summary.is_empty() {
        return Err(ReportError::NoData {
            table: "latency".to_string(),
            dir: latency_csv.to_path_buf(),
        });
    }

    write_csv(&output, &summary)?;
    info!("Wrote {} summary rows to {}", summary.len(), output.display());
    Ok(summary)
}

/// Groups rows by `(protocol, size)` and describes each variable.
pub fn summarize(rows: &[LatencyRow]) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<(&str, u64), Vec<&LatencyRow>> = BTreeMap::new();
    for row in rows {
        groups
            .entry((row.mode.as_str(), row.size))
            .or_default()
            .push(row);
    }

    let mut summary = Vec::new();
    for (variable, extract) in VARIABLES {
        for ((protocol, size), group) in &groups {
            let values: Vec<f64> = group.iter().map(|row| extract(row)).collect();
            if let Some(row) = describe(protocol, *size, variable, values) {
                summary.push(row);
            }
        }
    }
    summary
}

fn describe(protocol: &str, size: u64, variable: &str, mut values: Vec<f64>) -> Option<SummaryRow> {
    values.retain(|value| value.is_finite());
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let variance = values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        variance.sqrt()
    });

    Some(SummaryRow {
        protocol: protocol.to_string(),
        size,
        variable: variable.to_string(),
        mean,
        std,
        iqr: calculate_percentile(&values, 75.0) - calculate_percentile(&values, 25.0),
        min: values[0],
        max: values[count - 1],
        count,
    })
}

/// Linear interpolation between the closest ranks.
fn calculate_percentile(sorted_data: &[f64], percentile: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }

    let rank = percentile / 100.0 * (sorted_data.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if upper >= sorted_data.len() {
        return sorted_data[sorted_data.len() - 1];
    }

    let weight = rank - lower as f64;
    sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use test_case::test_case;

    fn row(mode: &str, size: u64, latency_ms: u64) -> LatencyRow {
        let t_req = 10_000_000;
        LatencyRow {
            mode: mode.to_string(),
            size,
            req_id: format!("{mode}-{latency_ms}"),
            t0: t_req - 1_000_000,
            t_req,
            t_res: t_req + latency_ms * 1_000_000,
            t_in: t_req + 100_000,
            t_out: t_req + 600_000,
            perf_base_ns: 0,
            epoch_base_ns: 0,
            req_size_bytes: 2,
            res_size_bytes: 64,
        }
    }

    #[test_case(&[1.0, 2.0, 3.0, 4.0], 25.0, 1.75)]
    #[test_case(&[1.0, 2.0, 3.0, 4.0], 75.0, 3.25)]
    #[test_case(&[5.0], 75.0, 5.0)]
    fn percentile_should_interpolate_linearly(data: &[f64], percentile: f64, expected: f64) {
        assert!((calculate_percentile(data, percentile) - expected).abs() < 1e-9);
    }

    #[test]
    fn summary_should_describe_each_group_and_variable() {
        let rows = vec![
            row("grpc", 1, 2),
            row("grpc", 1, 4),
            row("grpc", 1, 6),
            row("rest_json", 1, 10),
        ];

        let summary = summarize(&rows);
        assert_eq!(summary.len(), 6);

        let grpc = &summary[0];
        assert_eq!(grpc.protocol, "grpc");
        assert_eq!(grpc.variable, "latency_ms");
        assert_eq!(grpc.count, 3);
        assert!((grpc.mean - 4.0).abs() < 1e-9);
        assert!((grpc.std.unwrap() - 2.0).abs() < 1e-9);
        assert!((grpc.iqr - 2.0).abs() < 1e-9);
        assert_eq!(grpc.min, 2.0);
        assert_eq!(grpc.max, 6.0);

        let single = &summary[1];
        assert_eq!(single.protocol, "rest_json");
        assert_eq!(single.std, None);

        assert_eq!(summary[2].variable, "server_ms");
        assert!((summary[2].mean - 0.5).abs() < 1e-9);
        assert_eq!(summary[4].variable, "lifecycle_ms");
        assert!((summary[4].mean - 5.0).abs() < 1e-9);
    }

    #[test]
    fn summary_file_should_use_iqr_header_and_refuse_overwrite() {
        let dir = TempDir::new().unwrap();
        let latency = dir.path().join("latency.csv");
        crate::utils::write_csv(&latency, &[row("grpc", 10, 3), row("grpc", 10, 5)]).unwrap();

        summarize_file(&latency, dir.path()).unwrap();
        let content = fs::read_to_string(dir.path().join(SUMMARY_TABLE)).unwrap();
        assert_eq!(
            content.lines().next().unwrap(),
            "protocol,size,variable,mean,std,IQR,min,max,count"
        );

        let error = summarize_file(&latency, dir.path()).unwrap_err();
        assert!(matches!(error, ReportError::OutputExists(_)));
    }
}
