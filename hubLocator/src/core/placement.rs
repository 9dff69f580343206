use serde::Serialize;
use tracing::debug;
use crate::analysis::cost::calculate_cost;
use crate::analysis::median::find_median;
use crate::data::poi::{POI, GridPoint};
use crate::models::wind_farm::WindFarm;
use crate::utils::logging::{self, OperationCategory, PlacementType};

/// Chosen control center and what it costs to connect every farm to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub center: GridPoint,
    pub total_cost: i128,
}

/// Places the control center at the coordinate-wise median of the farm positions
/// and prices it with the premium-weighted Manhattan cost.
///
/// Premiums play no part in choosing the center; each axis is solved on its own.
/// Returns `None` when `farms` is empty.
pub fn locate_control_center(farms: &[WindFarm]) -> Option<Placement> {
    let _timing = logging::start_timing("locate_control_center",
        OperationCategory::Placement { subcategory: PlacementType::Orchestration });

    let center = median_center(farms)?;
    let total_cost = calculate_cost(farms, &center);

    debug!("Control center at {} with total cost {}", center, total_cost);
    Some(Placement { center, total_cost })
}

fn median_center(farms: &[WindFarm]) -> Option<GridPoint> {
    let _timing = logging::start_timing("median_center",
        OperationCategory::Placement { subcategory: PlacementType::MedianSearch });

    let xs: Vec<i32> = farms.iter().map(|f| f.get_position().x).collect();
    let ys: Vec<i32> = farms.iter().map(|f| f.get_position().y).collect();

    Some(GridPoint::new(find_median(&xs)?, find_median(&ys)?))
}
