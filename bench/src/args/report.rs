use super::defaults::DEFAULT_DATA_DIR;
use bench_report::convert::LATENCY_TABLE;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportTable {
    Latency,
    ServerUsage,
    ClientUsage,
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Root of the per-mode journal directories
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub input_dir: PathBuf,

    /// Directory the CSV tables are written to
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub output_dir: PathBuf,

    /// Build only the listed tables
    #[arg(long, value_enum, num_args = 1..)]
    pub only: Vec<ReportTable>,
}

impl ConvertArgs {
    pub fn tables(&self) -> Vec<ReportTable> {
        if self.only.is_empty() {
            vec![
                ReportTable::Latency,
                ReportTable::ServerUsage,
                ReportTable::ClientUsage,
            ]
        } else {
            self.only.clone()
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct SummarizeArgs {
    /// Latency table produced by `convert`
    #[arg(long, default_value_t = format!("{DEFAULT_DATA_DIR}/{LATENCY_TABLE}"))]
    pub input: String,

    /// Directory the summary table is written to
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{BenchArgs, BenchCommand};

    #[test]
    fn convert_should_build_every_table_by_default() {
        let args = BenchArgs::try_parse_from(["timestream-bench", "convert"]).unwrap();
        let BenchCommand::Convert(convert) = args.command else {
            panic!("Expected the convert command");
        };
        assert_eq!(convert.tables().len(), 3);
    }

    #[test]
    fn convert_should_honor_only() {
        let args =
            BenchArgs::try_parse_from(["timestream-bench", "convert", "--only", "server-usage"])
                .unwrap();
        let BenchCommand::Convert(convert) = args.command else {
            panic!("Expected the convert command");
        };
        assert_eq!(convert.tables(), vec![ReportTable::ServerUsage]);
    }
}
