use serde::Serialize;
use crate::data::poi::{POI, GridPoint};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindFarm {
    index: usize,
    position: GridPoint,
    premium: i32, // Connection cost per unit distance
}

impl WindFarm {
    pub fn new(index: usize, position: GridPoint, premium: i32) -> Self {
        Self { index, position, premium }
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn get_premium(&self) -> i32 {
        self.premium
    }

    /// Cost of linking this farm to a control center at `center`.
    pub fn connection_cost(&self, center: &GridPoint) -> i128 {
        i128::from(self.premium) * i128::from(self.position.manhattan_distance(center))
    }
}

impl POI for WindFarm {
    fn get_position(&self) -> &GridPoint {
        &self.position
    }

    fn get_id(&self) -> String {
        format!("farm_{}", self.index)
    }
}
