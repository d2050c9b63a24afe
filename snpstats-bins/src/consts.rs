pub const LINEPLOT_CMD: &str = "lineplot";
pub const BARPLOT_CMD: &str = "barplot";
pub const DEFAULT_OUT: &str = "-";

/// Edges of the default MAF bins, fine near zero where most variants sit.
pub const DEFAULT_MAF_EDGES: [f64; 15] = [
    0.0, 0.0005, 0.001, 0.002, 0.005, 0.01, 0.015, 0.02, 0.035, 0.05, 0.1, 0.2, 0.3, 0.4, 0.5,
];

pub const DEFAULT_INFO_THRESHOLDS: [f64; 2] = [0.3, 0.8];

/// First column of every report table.
pub const BIN_COLUMN: &str = "bin";
