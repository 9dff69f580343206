use std::io::Write;
use std::path::Path;
use csv::WriterBuilder;
use crate::analysis::cost::FarmCost;
use crate::utils::logging::{self, OperationCategory, FileIOType};

const BREAKDOWN_HEADER: [&str; 6] = ["index", "x", "y", "premium", "distance", "cost"];

/// Writes one row per farm in input order. IO failures surface as `csv::Error`.
/// Costs are written as text since they are `i128`.
pub fn write_cost_breakdown_to<W: Write>(writer: W, rows: &[FarmCost]) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(BREAKDOWN_HEADER)?;

    for row in rows {
        wtr.write_record(&[
            row.index.to_string(),
            row.position.x.to_string(),
            row.position.y.to_string(),
            row.premium.to_string(),
            row.distance.to_string(),
            row.cost.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_cost_breakdown<P: AsRef<Path>>(path: P, rows: &[FarmCost]) -> Result<(), csv::Error> {
    let _timing = logging::start_timing("write_cost_breakdown",
        OperationCategory::FileIO { subcategory: FileIOType::BreakdownExport });

    let file = std::fs::File::create(path)?;
    write_cost_breakdown_to(file, rows)
}
