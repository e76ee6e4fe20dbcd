use log::debug;

/// Global pivot anchor applied to every sprite in a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PivotMode {
    /// Center (`C`)
    #[default]
    Center,
    /// Top-left corner (`TL`)
    TopLeft,
    /// Bottom-center (`BC`)
    BottomCenter,
}

/// Normalized pivot fractions in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub x: f32,
    pub y: f32,
}

impl PivotMode {
    /// Resolve a pivot token (`C`, `TL`, `BC`, case-insensitive).
    ///
    /// Anything unrecognized falls back to [`PivotMode::Center`].
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "TL" => PivotMode::TopLeft,
            "BC" => PivotMode::BottomCenter,
            "C" => PivotMode::Center,
            other => {
                debug!("Unknown pivot '{}', using center", other);
                PivotMode::Center
            }
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            PivotMode::Center => "C",
            PivotMode::TopLeft => "TL",
            PivotMode::BottomCenter => "BC",
        }
    }

    pub fn pivot(self) -> Pivot {
        match self {
            PivotMode::Center => Pivot { x: 0.5, y: 0.5 },
            PivotMode::TopLeft => Pivot { x: 0.0, y: 0.0 },
            PivotMode::BottomCenter => Pivot { x: 0.5, y: 1.0 },
        }
    }
}

impl std::str::FromStr for PivotMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PivotMode::from_token(s))
    }
}
