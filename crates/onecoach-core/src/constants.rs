// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Mesocycle bounds, phase intensity profiles, and planner defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. The phase profiles are the
//! volume/intensity/RPE prescriptions the plan builder stamps onto each phase.

/// Mesocycle length bounds and defaults
pub mod mesocycle {
    /// Shortest mesocycle the planner builds
    pub const MIN_TOTAL_WEEKS: u32 = 2;
    /// Longest mesocycle the planner builds
    pub const MAX_TOTAL_WEEKS: u32 = 16;
    /// Default mesocycle length
    pub const DEFAULT_TOTAL_WEEKS: u32 = 8;
    /// Smallest advisory deload frequency (weeks between deloads)
    pub const MIN_DELOAD_FREQUENCY: u8 = 2;
    /// Largest advisory deload frequency (weeks between deloads)
    pub const MAX_DELOAD_FREQUENCY: u8 = 8;
    /// Default advisory deload frequency
    pub const DEFAULT_DELOAD_FREQUENCY: u8 = 4;
    /// Every phase lasts at least this long
    pub const MIN_PHASE_WEEKS: u32 = 1;
    /// Duration of an appended deload phase for block and single-phase models
    pub const DELOAD_WEEKS: u32 = 1;
    /// Days in a training week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Share of the mesocycle given to each phase, as integer fractions
/// (`weeks * NUMERATOR / DENOMINATOR` floors the same way as a float product)
pub mod proportions {
    /// Linear model accumulation share (0.5)
    pub const LINEAR_ACCUMULATION: (u32, u32) = (1, 2);
    /// Linear model intensification share (0.3)
    pub const LINEAR_INTENSIFICATION: (u32, u32) = (3, 10);
    /// Block model: number of equal blocks
    pub const BLOCK_COUNT: u32 = 3;
}

/// RPE scale bounds
pub mod rpe {
    /// Lowest rating on the RPE scale
    pub const MIN: u8 = 1;
    /// Highest rating on the RPE scale
    pub const MAX: u8 = 10;
}

/// Volume/intensity/RPE prescriptions per phase
pub mod phase_profiles {
    /// Accumulation: high volume, moderate intensity
    pub mod accumulation {
        /// Relative training volume
        pub const VOLUME: f64 = 1.0;
        /// Relative training intensity
        pub const INTENSITY: f64 = 0.7;
        /// RPE bounds
        pub const RPE: (u8, u8) = (6, 8);
    }

    /// Intensification: volume tapers as intensity climbs
    pub mod intensification {
        /// Relative training volume
        pub const VOLUME: f64 = 0.8;
        /// Relative training intensity
        pub const INTENSITY: f64 = 0.85;
        /// RPE bounds
        pub const RPE: (u8, u8) = (7, 9);
    }

    /// Realization: low volume, peak intensity
    pub mod realization {
        /// Relative training volume
        pub const VOLUME: f64 = 0.6;
        /// Relative training intensity
        pub const INTENSITY: f64 = 1.0;
        /// RPE bounds
        pub const RPE: (u8, u8) = (8, 10);
    }

    /// Deload: recovery week
    pub mod deload {
        /// Relative training volume
        pub const VOLUME: f64 = 0.5;
        /// Relative training intensity
        pub const INTENSITY: f64 = 0.6;
        /// RPE bounds
        pub const RPE: (u8, u8) = (4, 6);
    }

    /// Single mixed phase used by undulating and autoregulated models
    pub mod mixed {
        /// Relative training volume
        pub const VOLUME: f64 = 0.9;
        /// Relative training intensity
        pub const INTENSITY: f64 = 0.8;
        /// RPE bounds
        pub const RPE: (u8, u8) = (6, 9);
    }
}

/// Focus annotations for the single-phase models
pub mod focus {
    /// Undulating periodization focus
    pub const UNDULATING: &str = "Daily/weekly variation";
    /// Autoregulated periodization focus
    pub const AUTOREGULATED: &str = "RPE-driven auto-adjustment";
}

/// Service names for structured logging
pub mod service_names {
    /// CLI service name
    pub const ONECOACH_CLI: &str = "onecoach-cli";
}
