// Defaults for the solver configuration
pub const TARGET: f64 = 24.0;
pub const TOLERANCE: f64 = 1e-3;
pub const DIVISION_EPSILON: f64 = 1e-9;
pub const MAX_CACHE_ENTRIES: usize = 10_000;
