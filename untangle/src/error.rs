#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `min_orbs` below the smallest graph that fits two 3-cycles
    TooFewOrbs(u32),
    /// `min_orbs > max_orbs` or `max_orbs` above the cap
    OrbRange { min: u32, max: u32 },
    /// Canvas minus margins leaves no room to place anything
    CanvasTooSmall { width: f32, height: f32, margin: f32 },
    NonFinite(&'static str),
    ZeroAttempts(&'static str),
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewOrbs(n) => write!(f, "at least {} orbs are required, got {}", crate::geometry::limits::MIN_ORBS, n),
            Self::OrbRange { min, max } => write!(f, "invalid orb range {}..={}", min, max),
            Self::CanvasTooSmall { width, height, margin } => {
                write!(f, "canvas {}x{} leaves no room inside margin {}", width, height, margin)
            }
            Self::NonFinite(param) => write!(f, "parameter '{}' must be finite", param),
            Self::ZeroAttempts(param) => write!(f, "parameter '{}' must be at least 1", param),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PuzzleError {
    InvalidConfig(ConfigError),
    /// Every regenerated layout stayed crossing-free within the shuffle budget
    NoTangledLayout { regenerations: u32 },
}

impl From<ConfigError> for PuzzleError {
    fn from(value: ConfigError) -> Self { Self::InvalidConfig(value) }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::NoTangledLayout { .. } => None,
        }
    }
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "invalid puzzle config: {}", e),
            Self::NoTangledLayout { regenerations } => {
                write!(f, "no tangled layout found after {} regenerations", regenerations)
            }
        }
    }
}
