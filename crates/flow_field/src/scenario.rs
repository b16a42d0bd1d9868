use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::IMPASSABLE;
use crate::error::{FlowFieldError, Result};
use crate::grid::Grid;
use crate::integration::CostField;

/// Map description read from a TOML file.
///
/// `width`, `height` and `targets` are required. Walls default to none
/// and the open-cell cost defaults to 1.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub width: usize,
    pub height: usize,
    #[serde(default = "default_cell_cost")]
    pub default_cost: u8,
    #[serde(default)]
    pub walls: Vec<(usize, usize)>,
    pub targets: Vec<(usize, usize)>,
}

fn default_cell_cost() -> u8 {
    1
}

impl Default for Scenario {
    /// Ten by ten demo map: a wall shelf across row 6, one target
    /// below the shelf and one above it.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            default_cost: 1,
            walls: vec![(0, 0), (9, 6), (8, 6), (7, 6), (6, 6), (5, 6)],
            targets: vec![(6, 9), (4, 5)],
        }
    }
}

impl Scenario {
    /// Reads and validates a scenario file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let scenario: Scenario = toml::from_str(&text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FlowFieldError::InvalidScenario(format!(
                "map dimensions must be nonzero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.default_cost == IMPASSABLE {
            return Err(FlowFieldError::InvalidScenario(format!(
                "default cell cost {IMPASSABLE} is reserved for walls"
            )));
        }
        for &(x, y) in &self.walls {
            if x >= self.width || y >= self.height {
                return Err(FlowFieldError::WallOutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        if self.targets.is_empty() {
            return Err(FlowFieldError::NoTargets);
        }
        for &(x, y) in &self.targets {
            if x >= self.width || y >= self.height {
                return Err(FlowFieldError::TargetOutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        Ok(())
    }

    /// Expands the description into a cost field and target cell indices.
    pub fn build(&self) -> Result<(CostField, Vec<usize>)> {
        self.validate()?;

        let mut cost = Grid::new(self.width, self.height, self.default_cost);
        for &(x, y) in &self.walls {
            *cost.get_mut(x, y) = IMPASSABLE;
        }

        let targets = self
            .targets
            .iter()
            .map(|&(x, y)| cost.index(x, y))
            .collect();

        Ok((cost, targets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_builds() {
        let scenario = Scenario::default();
        let (cost, targets) = scenario.build().unwrap();

        assert_eq!(cost.width(), 10);
        assert_eq!(cost.height(), 10);
        assert_eq!(*cost.get(0, 0), IMPASSABLE);
        assert_eq!(*cost.get(5, 6), IMPASSABLE);
        assert_eq!(*cost.get(4, 6), 1);
        assert_eq!(targets, vec![cost.index(6, 9), cost.index(4, 5)]);
    }

    #[test]
    fn test_minimal_toml_fills_defaults() {
        let scenario: Scenario = toml::from_str(
            "width = 4\nheight = 3\ntargets = [[3, 2]]\n",
        )
        .unwrap();

        assert_eq!(scenario.default_cost, 1);
        assert!(scenario.walls.is_empty());

        let (cost, targets) = scenario.build().unwrap();
        assert_eq!(cost.len(), 12);
        assert_eq!(targets, vec![cost.index(3, 2)]);
    }

    #[test]
    fn test_from_path_reads_full_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.toml");
        fs::write(
            &path,
            "width = 5\nheight = 5\ndefault_cost = 2\nwalls = [[1, 1], [2, 2]]\ntargets = [[4, 4]]\n",
        )
        .unwrap();

        let scenario = Scenario::from_path(&path).unwrap();
        assert_eq!(scenario.default_cost, 2);
        assert_eq!(scenario.walls, vec![(1, 1), (2, 2)]);

        let (cost, _) = scenario.build().unwrap();
        assert_eq!(*cost.get(1, 1), IMPASSABLE);
        assert_eq!(*cost.get(0, 1), 2);
    }

    #[test]
    fn test_from_path_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.toml");
        fs::write(&path, "width = \"wide\"\n").unwrap();

        assert!(matches!(
            Scenario::from_path(&path),
            Err(FlowFieldError::InvalidScenario(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_scenarios() {
        let mut scenario = Scenario::default();
        scenario.width = 0;
        assert!(matches!(
            scenario.build(),
            Err(FlowFieldError::InvalidScenario(_))
        ));

        let mut scenario = Scenario::default();
        scenario.default_cost = IMPASSABLE;
        assert!(matches!(
            scenario.build(),
            Err(FlowFieldError::InvalidScenario(_))
        ));

        let mut scenario = Scenario::default();
        scenario.walls.push((10, 0));
        assert!(matches!(
            scenario.build(),
            Err(FlowFieldError::WallOutOfBounds { x: 10, y: 0, .. })
        ));

        let mut scenario = Scenario::default();
        scenario.targets.clear();
        assert!(matches!(scenario.build(), Err(FlowFieldError::NoTargets)));

        let mut scenario = Scenario::default();
        scenario.targets.push((0, 10));
        assert!(matches!(
            scenario.build(),
            Err(FlowFieldError::TargetOutOfBounds { x: 0, y: 10, .. })
        ));
    }
}
