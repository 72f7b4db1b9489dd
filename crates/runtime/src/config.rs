pub const PROGRAM_NAME: &str = "lz";
pub const PROGRAM_LOG_LEVEL: &str = "LZ_LOG_LEVEL";

/// https://no-color.org
pub const NO_COLOR_ENV: &str = "NO_COLOR";
/// Width hint exported by most shells when stdout is not a terminal.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// Width used for grid layout when neither the terminal nor `COLUMNS` knows better.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Spaces between grid columns.
pub const GRID_MARGIN: usize = 2;

/// `NO_COLOR` disables color when present and non-empty.
pub fn color_disabled_by_env() -> bool {
    std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty())
}

/// Terminal width from `COLUMNS`, ignoring zero and garbage values.
pub fn columns_from_env() -> Option<usize> {
    std::env::var(COLUMNS_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&w| w > 0)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
