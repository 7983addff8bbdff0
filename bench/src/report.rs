use crate::args::report::{ConvertArgs, ReportTable, SummarizeArgs};
use crate::error::BenchError;
use bench_report::convert::Converter;
use bench_report::prints::print_summary;
use bench_report::summary::summarize_file;
use std::path::Path;
use timestream::journal::UsageSide;

pub fn convert(args: ConvertArgs) -> Result<(), BenchError> {
    convert_tables(&args.input_dir, &args.output_dir, &args.tables())
}

/// Builds the latency and both usage tables.
pub fn convert_all(input_dir: &Path, output_dir: &Path) -> Result<(), BenchError> {
    convert_tables(
        input_dir,
        output_dir,
        &[
            ReportTable::Latency,
            ReportTable::ServerUsage,
            ReportTable::ClientUsage,
        ],
    )
}

fn convert_tables(
    input_dir: &Path,
    output_dir: &Path,
    tables: &[ReportTable],
) -> Result<(), BenchError> {
    let converter = Converter::new(input_dir, output_dir);
    for table in tables {
        match table {
            ReportTable::Latency => converter.convert_latency()?,
            ReportTable::ServerUsage => converter.convert_usage(UsageSide::Server)?,
            ReportTable::ClientUsage => converter.convert_usage(UsageSide::Client)?,
        };
    }
    Ok(())
}

pub fn summarize(args: SummarizeArgs) -> Result<(), BenchError> {
    let summary = summarize_file(Path::new(&args.input), &args.output_dir)?;
    print_summary(&summary);
    Ok(())
}
