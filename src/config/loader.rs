//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for assembling a
//! [`SchedulePolicy`] from YAML configuration files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Post;

use super::types::{
    CoverageTarget, DeviationBands, ObjectiveWeights, PostRestriction, SchedulePolicy,
    ShiftHours, SolverSettings,
};

/// Contents of `coverage.yaml`: the staffing shape of the unit.
#[derive(Debug, Clone, Deserialize)]
struct CoverageConfig {
    /// Active posts.
    posts: Vec<Post>,
    /// Per-day headcount targets.
    targets: Vec<CoverageTarget>,
    /// Optional competency restriction.
    #[serde(default)]
    restricted: Option<PostRestriction>,
}

/// Contents of `rules.yaml`: rest rules, caps, and toggles.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RulesConfig {
    max_nights_per_week: u32,
    max_shifts_per_week: u32,
    max_mornings_per_week: u32,
    weekend_single_shot: bool,
    allow_24h_shifts: bool,
    count_truncated_weekends: bool,
    shift_hours: ShiftHours,
}

impl Default for RulesConfig {
    fn default() -> Self {
        let policy = SchedulePolicy::default();
        Self {
            max_nights_per_week: policy.max_nights_per_week,
            max_shifts_per_week: policy.max_shifts_per_week,
            max_mornings_per_week: policy.max_mornings_per_week,
            weekend_single_shot: policy.weekend_single_shot,
            allow_24h_shifts: policy.allow_24h_shifts,
            count_truncated_weekends: policy.count_truncated_weekends,
            shift_hours: policy.shift_hours,
        }
    }
}

/// Contents of `objective.yaml`: weights, bands, and solver settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ObjectiveConfig {
    weights: ObjectiveWeights,
    bands: DeviationBands,
    solver: SolverSettings,
}

/// Loads and provides access to a scheduling policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── coverage.yaml   # Posts, headcount targets, competency restriction
/// ├── rules.yaml      # Rest rules, rolling caps, toggles
/// └── objective.yaml  # Objective weights, deviation bands, solver budget
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/default").unwrap();
/// let policy = loader.policy();
/// println!("night cap: {}", policy.max_nights_per_week);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: SchedulePolicy,
}

impl PolicyLoader {
    /// Loads a policy from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `coverage.yaml` is missing or any present file
    /// contains invalid YAML. `rules.yaml` and `objective.yaml` may be
    /// omitted; their defaults apply.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let coverage_path = path.join("coverage.yaml");

        let coverage = Self::load_yaml::<CoverageConfig>(&coverage_path)?;
        let rules = Self::load_optional_yaml::<RulesConfig>(&path.join("rules.yaml"))?;
        let objective = Self::load_optional_yaml::<ObjectiveConfig>(&path.join("objective.yaml"))?;

        // A target on an inactive post would never be built into the
        // model yet would still inflate the viability headcount.
        if let Some(bad) = coverage
            .targets
            .iter()
            .find(|t| !coverage.posts.contains(&t.post))
        {
            return Err(EngineError::ConfigParse {
                path: coverage_path.display().to_string(),
                message: format!("coverage target names a post missing from `posts`: {:?}", bad.post),
            });
        }

        let policy = SchedulePolicy {
            posts: coverage.posts,
            coverage: coverage.targets,
            restricted: coverage.restricted,
            max_nights_per_week: rules.max_nights_per_week,
            max_shifts_per_week: rules.max_shifts_per_week,
            max_mornings_per_week: rules.max_mornings_per_week,
            weekend_single_shot: rules.weekend_single_shot,
            allow_24h_shifts: rules.allow_24h_shifts,
            count_truncated_weekends: rules.count_truncated_weekends,
            shift_hours: rules.shift_hours,
            weights: objective.weights,
            bands: objective.bands,
            solver: objective.solver,
        };

        Ok(Self { policy })
    }

    /// Loads and parses a required YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads an optional YAML file, falling back to its default when absent.
    fn load_optional_yaml<T>(path: &Path) -> EngineResult<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if path.exists() {
            Self::load_yaml(path)
        } else {
            Ok(T::default())
        }
    }

    /// Returns the assembled policy.
    pub fn policy(&self) -> &SchedulePolicy {
        &self.policy
    }
}
