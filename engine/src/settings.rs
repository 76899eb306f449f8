use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::Validate;

pub const MAX_DIMENSION: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self { rows: 4, columns: 4 }
    }
}

impl BoardSettings {
    pub fn build<M: Copy + Eq>(&self) -> Result<Board<M>, String> {
        self.validate()?;
        Board::new(self.rows, self.columns)
    }
}

impl Validate for BoardSettings {
    fn validate(&self) -> Result<(), String> {
        if self.rows < 1 || self.rows > MAX_DIMENSION {
            return Err(format!("Row count must be between 1 and {}", MAX_DIMENSION));
        }
        if self.columns < 1 || self.columns > MAX_DIMENSION {
            return Err(format!("Column count must be between 1 and {}", MAX_DIMENSION));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(BoardSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_dimensions() {
        assert!(BoardSettings { rows: 0, columns: 3 }.validate().is_err());
        assert!(BoardSettings { rows: 3, columns: 0 }.validate().is_err());
        assert!(BoardSettings { rows: MAX_DIMENSION + 1, columns: 3 }.validate().is_err());
        assert!(BoardSettings { rows: 1, columns: MAX_DIMENSION }.validate().is_ok());
    }

    #[test]
    fn test_build_uses_configured_dimensions() {
        let board = BoardSettings { rows: 2, columns: 5 }.build::<Mark>().unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.columns(), 5);
    }
}
