mod config;
pub mod logging;

pub use config::{
    COLUMNS_ENV, DEFAULT_TERMINAL_WIDTH, GRID_MARGIN, NO_COLOR_ENV, PROGRAM_LOG_LEVEL,
    PROGRAM_NAME, color_disabled_by_env, columns_from_env,
};

pub use logging::init;
