use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use chrono::Local;
use serde::Serialize;
use crate::core::placement::Placement;
use crate::data::poi::{POI, GridPoint};
use crate::models::wind_farm::WindFarm;
use crate::utils::logging::{self, OperationCategory, FileIOType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub min: GridPoint,
    pub max: GridPoint,
}

impl BoundingBox {
    pub fn of(farms: &[WindFarm]) -> Option<Self> {
        let first = *farms.first()?.get_position();
        let (min, max) = farms.iter().fold((first, first), |(min, max), farm| {
            let p = farm.get_position();
            (
                GridPoint::new(min.x.min(p.x), min.y.min(p.y)),
                GridPoint::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self { min, max })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacementReport {
    pub farm_count: usize,
    pub total_premium: i64,
    pub center: GridPoint,
    pub total_cost: i128,
    pub bounds: Option<BoundingBox>,
    pub generated_at: String,
}

impl PlacementReport {
    pub fn new(farms: &[WindFarm], placement: &Placement) -> Self {
        Self {
            farm_count: farms.len(),
            total_premium: farms.iter().map(|f| i64::from(f.get_premium())).sum(),
            center: placement.center,
            total_cost: placement.total_cost,
            bounds: BoundingBox::of(farms),
            generated_at: Local::now().to_rfc3339(),
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let _timing = logging::start_timing("save_report",
            OperationCategory::FileIO { subcategory: FileIOType::ReportSave });

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()
    }
}

pub fn print_placement_summary(report: &PlacementReport) {
    eprintln!("\nControl Center Placement");
    eprintln!("----------------------------------------");
    eprintln!("Wind farms: {}", report.farm_count);
    eprintln!("Total premium: {}", report.total_premium);
    if let Some(bounds) = &report.bounds {
        eprintln!("Farm extent: {} to {}", bounds.min, bounds.max);
    }
    eprintln!("Center: {}", report.center);
    eprintln!("Total connection cost: {}", report.total_cost);
    eprintln!("----------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WindFarm> {
        vec![
            WindFarm::new(0, GridPoint::new(-4, 9), 2),
            WindFarm::new(1, GridPoint::new(6, -1), 5),
            WindFarm::new(2, GridPoint::new(0, 3), 0),
        ]
    }

    #[test]
    fn bounding_box_spans_all_farms() {
        let bounds = BoundingBox::of(&sample()).unwrap();
        assert_eq!(bounds.min, GridPoint::new(-4, -1));
        assert_eq!(bounds.max, GridPoint::new(6, 9));
        assert!(BoundingBox::of(&[]).is_none());
    }

    #[test]
    fn report_is_written_as_json() {
        let farms = sample();
        let placement = Placement { center: GridPoint::new(0, 3), total_cost: 66 };
        let report = PlacementReport::new(&farms, &placement);
        assert_eq!(report.total_premium, 7);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.save_to_file(&path).unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["farm_count"], 3);
        assert_eq!(json["total_cost"], 66);
        assert_eq!(json["center"]["x"], 0);
        assert_eq!(json["center"]["y"], 3);
        assert!(json["generated_at"].is_string());
    }
}
