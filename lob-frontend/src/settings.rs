use std::{path::PathBuf, time::Duration};

use lob_file::{validation::ValidationOptions, MAX_FILE_COUNT};

#[derive(Debug)]
pub struct Settings {
    /// Chance per tick that the simulated transport fails, in `[0, 1]`.
    pub failure_rate: f64,
    pub max_files: usize,
    pub paths: Vec<PathBuf>,
    pub start_on_accept: bool,
    pub tick: Duration,
    pub validation: ValidationOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            failure_rate: 0.0,
            max_files: MAX_FILE_COUNT,
            paths: Vec::new(),
            start_on_accept: false,
            tick: Duration::from_millis(500),
            validation: ValidationOptions::default(),
        }
    }
}
