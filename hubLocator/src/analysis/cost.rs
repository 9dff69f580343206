use serde::Serialize;
use crate::data::poi::{POI, GridPoint};
use crate::models::wind_farm::WindFarm;
use crate::utils::logging::{self, OperationCategory, PlacementType};

/// One farm's share of the total connection cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FarmCost {
    pub index: usize,
    pub position: GridPoint,
    pub premium: i32,
    pub distance: i64,
    pub cost: i128,
}

/// Sum of premium-weighted Manhattan distances from every farm to `center`.
///
/// Products are accumulated in `i128`; with 32-bit coordinates and premiums no
/// input of realistic length can overflow.
pub fn calculate_cost(farms: &[WindFarm], center: &GridPoint) -> i128 {
    let _timing = logging::start_timing("calculate_cost",
        OperationCategory::Placement { subcategory: PlacementType::CostEvaluation });

    farms.iter().map(|farm| farm.connection_cost(center)).sum()
}

pub fn farm_costs(farms: &[WindFarm], center: &GridPoint) -> Vec<FarmCost> {
    farms
        .iter()
        .map(|farm| FarmCost {
            index: farm.get_index(),
            position: *farm.get_position(),
            premium: farm.get_premium(),
            distance: farm.get_position().manhattan_distance(center),
            cost: farm.connection_cost(center),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farms(raw: &[(i32, i32, i32)]) -> Vec<WindFarm> {
        raw.iter()
            .enumerate()
            .map(|(i, &(x, y, p))| WindFarm::new(i, GridPoint::new(x, y), p))
            .collect()
    }

    #[test]
    fn sums_weighted_distances() {
        let line = farms(&[(0, 0, 1), (10, 0, 1), (5, 0, 1)]);
        assert_eq!(calculate_cost(&line, &GridPoint::new(5, 0)), 10);

        let pair = farms(&[(0, 0, 3), (10, 0, 1)]);
        assert_eq!(calculate_cost(&pair, &GridPoint::new(0, 0)), 10);
    }

    #[test]
    fn empty_farm_list_costs_nothing() {
        assert_eq!(calculate_cost(&[], &GridPoint::new(3, 3)), 0);
    }

    #[test]
    fn zero_premiums_cost_nothing() {
        let farms = farms(&[(-100, 40, 0), (900, -7, 0), (3, 3, 0)]);
        assert_eq!(calculate_cost(&farms, &GridPoint::new(0, 0)), 0);
    }

    #[test]
    fn large_inputs_stay_exact() {
        let raw: Vec<(i32, i32, i32)> = (0..1000)
            .map(|i| if i % 2 == 0 { (1_000_000_000, 1_000_000_000, 1_000_000_000) } else { (-1_000_000_000, -1_000_000_000, 1_000_000_000) })
            .collect();
        let farms = farms(&raw);
        let center = GridPoint::new(-1_000_000_000, -1_000_000_000);

        // 500 farms at distance 4e9 with premium 1e9
        assert_eq!(calculate_cost(&farms, &center), 500 * 4_000_000_000i128 * 1_000_000_000);
    }

    #[test]
    fn breakdown_matches_total() {
        let farms = farms(&[(2, 9, 4), (-3, 1, 2), (0, 0, 7)]);
        let center = GridPoint::new(0, 1);
        let rows = farm_costs(&farms, &center);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].distance, 10);
        assert_eq!(rows[0].cost, 40);
        assert_eq!(rows[1].distance, 3);
        assert_eq!(rows[2].cost, 7);
        assert_eq!(rows.iter().map(|r| r.cost).sum::<i128>(), calculate_cost(&farms, &center));
    }
}
