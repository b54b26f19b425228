use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assets::Direction;

/// Strategy shapes the classifier recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StrategyKind {
    Spread,
    Strangle,
    Straddle,
    CoveredCall,
    CoveredPut,
    IronCondor,
    IronButterfly,
    CallButterfly,
    PutButterfly,
    JadeLizard,
    NakedStock,
    NakedCall,
    NakedPut,
    Custom,
    #[default]
    Empty,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 15] = [
        StrategyKind::Spread,
        StrategyKind::Strangle,
        StrategyKind::Straddle,
        StrategyKind::CoveredCall,
        StrategyKind::CoveredPut,
        StrategyKind::IronCondor,
        StrategyKind::IronButterfly,
        StrategyKind::CallButterfly,
        StrategyKind::PutButterfly,
        StrategyKind::JadeLizard,
        StrategyKind::NakedStock,
        StrategyKind::NakedCall,
        StrategyKind::NakedPut,
        StrategyKind::Custom,
        StrategyKind::Empty,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Spread => "Spread",
            StrategyKind::Strangle => "Strangle",
            StrategyKind::Straddle => "Straddle",
            StrategyKind::CoveredCall => "CoveredCall",
            StrategyKind::CoveredPut => "CoveredPut",
            StrategyKind::IronCondor => "IronCondor",
            StrategyKind::IronButterfly => "IronButterfly",
            StrategyKind::CallButterfly => "CallButterfly",
            StrategyKind::PutButterfly => "PutButterfly",
            StrategyKind::JadeLizard => "JadeLizard",
            StrategyKind::NakedStock => "NakedStock",
            StrategyKind::NakedCall => "NakedCall",
            StrategyKind::NakedPut => "NakedPut",
            StrategyKind::Custom => "Custom",
            StrategyKind::Empty => "Empty",
        }
    }

    /// Directions a basket of this kind can be classified with.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            StrategyKind::Empty => &[Direction::None],
            _ => &[Direction::Long, Direction::Short],
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
