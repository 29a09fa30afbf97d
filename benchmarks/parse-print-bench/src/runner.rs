//! Benchmark runner
//!
//! Drives one model build and a configured number of print phases against a
//! [`ModelBackend`], timing each phase independently.
//!
//! The runner moves through `Idle -> ModelBuilt -> Completed`. The model is
//! owned by the runner while it is built and released once the last print
//! phase finishes; only the durations survive into the report.

use crate::{
    backend::ModelBackend,
    error::{BenchError, BenchResult},
    timer::{PhaseDuration, Timer},
    BenchmarkReport,
};
use std::path::Path;

/// Upper bound on print phases per run
pub const MAX_REPETITIONS: usize = 10_000;

/// Configuration for the benchmark runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Number of print phases to run after the model is built
    pub repetitions: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { repetitions: 1 }
    }
}

impl RunnerConfig {
    pub fn with_repetitions(repetitions: usize) -> Self {
        Self { repetitions }
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfig(
                "repetitions must be at least 1".to_string(),
            ));
        }
        if self.repetitions > MAX_REPETITIONS {
            return Err(BenchError::InvalidConfig(format!(
                "repetitions must be at most {}, got {}",
                MAX_REPETITIONS, self.repetitions
            )));
        }
        Ok(())
    }
}

/// Observable runner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    /// Nothing has run yet
    Idle,
    /// Model is built; print phases may run
    ModelBuilt,
    /// All print phases ran; the report is final
    Completed,
}

impl std::fmt::Display for RunnerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunnerState::Idle => "idle",
            RunnerState::ModelBuilt => "model built",
            RunnerState::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

enum Phase<M> {
    Idle,
    ModelBuilt {
        model: M,
        build: PhaseDuration,
        prints: Vec<PhaseDuration>,
    },
    Completed(BenchmarkReport),
}

/// Benchmark runner
pub struct BenchmarkRunner<B: ModelBackend> {
    backend: B,
    config: RunnerConfig,
    timer: Timer,
    phase: Phase<B::Model>,
}

impl<B: ModelBackend> BenchmarkRunner<B> {
    /// Create a new benchmark runner
    pub fn new(backend: B, config: RunnerConfig) -> BenchResult<Self> {
        config.validate()?;
        Ok(Self {
            backend,
            config,
            timer: Timer::new(),
            phase: Phase::Idle,
        })
    }

    /// Create with the default single print phase
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            config: RunnerConfig::default(),
            timer: Timer::new(),
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> RunnerState {
        match self.phase {
            Phase::Idle => RunnerState::Idle,
            Phase::ModelBuilt { .. } => RunnerState::ModelBuilt,
            Phase::Completed(_) => RunnerState::Completed,
        }
    }

    /// Build the model for `root` and record how long it took.
    ///
    /// On failure the runner stays idle and nothing is recorded.
    pub fn run_build_phase(&mut self, root: &Path) -> BenchResult<PhaseDuration> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(self.invalid_state("run the build phase"));
        }

        tracing::info!(root = %root.display(), "Building model");

        let backend = &self.backend;
        let (model, elapsed) = self.timer.measure(|| backend.build_model(root))?;

        tracing::info!(
            duration_ms = elapsed.as_millis(),
            units = backend.compilation_units(&model).len(),
            "Model built"
        );

        self.phase = Phase::ModelBuilt {
            model,
            build: elapsed,
            prints: Vec::new(),
        };
        Ok(elapsed)
    }

    /// Print every compilation unit once, in backend order, and record the
    /// elapsed time.
    ///
    /// The printed text is discarded. After the configured number of
    /// repetitions the runner completes and drops the model.
    pub fn run_print_phase(&mut self) -> BenchResult<PhaseDuration> {
        let state = self.state();
        let Phase::ModelBuilt { model, prints, .. } = &mut self.phase else {
            return Err(BenchError::InvalidState {
                state,
                operation: "run a print phase",
            });
        };

        let backend = &self.backend;
        let (units, elapsed) = self.timer.measure(|| print_all(backend, model))?;
        prints.push(elapsed);
        let repetition = prints.len();

        tracing::info!(
            repetition,
            of = self.config.repetitions,
            units,
            duration_ms = elapsed.as_millis(),
            "Print phase complete"
        );

        if repetition >= self.config.repetitions {
            self.complete();
        }
        Ok(elapsed)
    }

    /// Run the build phase followed by every print phase
    pub fn run(mut self, root: &Path) -> BenchResult<BenchmarkReport> {
        self.run_build_phase(root)?;
        while self.state() == RunnerState::ModelBuilt {
            self.run_print_phase()?;
        }
        self.into_report()
    }

    /// Finalized report, available once the runner has completed
    pub fn report(&self) -> Option<&BenchmarkReport> {
        match &self.phase {
            Phase::Completed(report) => Some(report),
            _ => None,
        }
    }

    pub fn into_report(self) -> BenchResult<BenchmarkReport> {
        match self.phase {
            Phase::Completed(report) => Ok(report),
            Phase::Idle => Err(BenchError::InvalidState {
                state: RunnerState::Idle,
                operation: "produce a report",
            }),
            Phase::ModelBuilt { .. } => Err(BenchError::InvalidState {
                state: RunnerState::ModelBuilt,
                operation: "produce a report",
            }),
        }
    }

    fn complete(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::ModelBuilt { build, prints, .. } => {
                let report = BenchmarkReport::new(build, &prints);
                tracing::debug!(
                    build_ms = build.as_millis(),
                    total_print_ms = report.total_print_ms(),
                    "Benchmark completed"
                );
                self.phase = Phase::Completed(report);
            }
            other => self.phase = other,
        }
    }

    fn invalid_state(&self, operation: &'static str) -> BenchError {
        BenchError::InvalidState {
            state: self.state(),
            operation,
        }
    }
}

/// Print all units of `model`, returning how many were printed
fn print_all<B: ModelBackend>(backend: &B, model: &B::Model) -> BenchResult<usize> {
    let units = backend.compilation_units(model);
    for unit in units {
        let text = backend.print(unit)?;
        std::hint::black_box(text);
    }
    Ok(units.len())
}
