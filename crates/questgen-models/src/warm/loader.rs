//! The language model holder and its concurrent constructor.
//!
//! # Loading Sequence
//!
//! 1. Validate the configuration, build the shared [`ModelSource`], resolve
//!    the preferred device
//! 2. Spawn one named loader thread per [`LoadTask`]
//! 3. Join every thread; construction blocks until all of them return
//! 4. Fail with `StartupFailed` if any task failed, otherwise populate
//!
//! There is no cancellation and no timeout. A hung download hangs
//! construction.

use std::any::Any;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use candle_core::Device;
use tracing::{debug, error, info};

use super::summary::LoadingSummary;
use super::task::LoadTask;
use crate::config::ModelsConfig;
use crate::distractor::DistractorGenerator;
use crate::error::{ModelError, ModelResult, TaskFailure};
use crate::linguistic::LinguisticResources;
use crate::pretrained::ModelBundle;
use crate::source::{source_from_config, ModelSource};
use crate::types::ModelFamily;

/// What a loader thread hands back on success.
enum TaskOutput {
    Model(ModelBundle),
    /// `None` in download-only mode.
    Distractor(Option<DistractorGenerator>),
    Linguistic(LinguisticResources),
}

struct TaskReport {
    task: LoadTask,
    elapsed: Duration,
    outcome: ModelResult<(TaskOutput, Vec<&'static str>)>,
}

/// Every pretrained model the question generation service needs, loaded once.
///
/// Fields are private and set exactly once by the constructor.
#[derive(Debug)]
pub struct LanguageModels {
    en_qg: ModelBundle,
    zh_qg: ModelBundle,
    en_qgg: ModelBundle,
    en_dg: Option<DistractorGenerator>,
    linguistic: Option<LinguisticResources>,
    download_only: bool,
    summary: LoadingSummary,
}

impl LanguageModels {
    /// Load every model family concurrently from the configured source.
    ///
    /// # Errors
    /// - `ModelError::ConfigError` / `DeviceError` before any thread starts
    /// - `ModelError::StartupFailed` listing every task that failed or panicked
    pub fn new(config: &ModelsConfig) -> ModelResult<Self> {
        let source = source_from_config(&config.hub)?;
        Self::with_source(config, source)
    }

    /// Same as [`LanguageModels::new`] with an explicit source.
    ///
    /// # Errors
    /// See [`LanguageModels::new`].
    pub fn with_source(config: &ModelsConfig, source: Arc<dyn ModelSource>) -> ModelResult<Self> {
        config.validate()?;
        if config.download_only {
            info!("Pre-downloading language models");
        }
        let device = config.device.resolve()?;
        let tasks = LoadTask::planned(config);
        debug!(
            "Spawning {} loaders against {} source",
            tasks.len(),
            source.name()
        );

        let started = Instant::now();
        let reports = run_all(&tasks, source.as_ref(), config, &device);
        let total_duration = started.elapsed();
        info!("Model loading took {:.2} secs", total_duration.as_secs_f64());

        let mut failures = Vec::new();
        let mut task_durations = Vec::with_capacity(reports.len());
        let mut loaded_models = Vec::new();
        let mut en_qg = None;
        let mut zh_qg = None;
        let mut en_qgg = None;
        let mut en_dg = None;
        let mut linguistic = None;

        for report in reports {
            task_durations.push((report.task, report.elapsed));
            let (output, names) = match report.outcome {
                Ok(loaded) => loaded,
                Err(error) => {
                    failures.push(TaskFailure {
                        task: report.task,
                        error,
                    });
                    continue;
                }
            };
            loaded_models.extend(names);
            match (report.task, output) {
                (LoadTask::Family(ModelFamily::EnglishQg), TaskOutput::Model(b)) => en_qg = Some(b),
                (LoadTask::Family(ModelFamily::ChineseQg), TaskOutput::Model(b)) => zh_qg = Some(b),
                (LoadTask::Family(ModelFamily::EnglishQgg), TaskOutput::Model(b)) => en_qgg = Some(b),
                (LoadTask::Family(ModelFamily::EnglishDg), TaskOutput::Distractor(dg)) => en_dg = dg,
                (LoadTask::LinguisticResources, TaskOutput::Linguistic(l)) => linguistic = Some(l),
                (task, _) => failures.push(TaskFailure {
                    task,
                    error: ModelError::InternalError {
                        message: format!("{task} loader returned the wrong output kind"),
                    },
                }),
            }
        }

        if !failures.is_empty() {
            error!(
                "{} of {} loaders failed",
                failures.len(),
                task_durations.len()
            );
            return Err(ModelError::StartupFailed { failures });
        }

        let missing = |name: &str| ModelError::InternalError {
            message: format!("{name} loader finished without a model"),
        };
        let summary = LoadingSummary {
            task_durations,
            total_duration,
            download_only: config.download_only,
            loaded_models,
            source: source.name(),
        };
        debug!("{summary}");

        Ok(Self {
            en_qg: en_qg.ok_or_else(|| missing("en_qg"))?,
            zh_qg: zh_qg.ok_or_else(|| missing("zh_qg"))?,
            en_qgg: en_qgg.ok_or_else(|| missing("en_qgg"))?,
            en_dg,
            linguistic,
            download_only: config.download_only,
            summary,
        })
    }

    /// Run [`LanguageModels::new`] on the blocking pool.
    ///
    /// # Errors
    /// Everything [`LanguageModels::new`] returns, plus `InternalError` if the
    /// blocking task itself could not be joined.
    pub async fn load_async(config: ModelsConfig) -> ModelResult<Self> {
        tokio::task::spawn_blocking(move || Self::new(&config))
            .await
            .map_err(|e| ModelError::InternalError {
                message: format!("blocking load task failed: {e}"),
            })?
    }

    /// English question generation (BART).
    #[must_use]
    pub fn en_qg(&self) -> &ModelBundle {
        &self.en_qg
    }

    /// Chinese question generation (GPT-2).
    #[must_use]
    pub fn zh_qg(&self) -> &ModelBundle {
        &self.zh_qg
    }

    /// English question-group generation.
    #[must_use]
    pub fn en_qgg(&self) -> &ModelBundle {
        &self.en_qgg
    }

    /// Distractor generation composite. `None` in download-only mode.
    #[must_use]
    pub fn en_dg(&self) -> Option<&DistractorGenerator> {
        self.en_dg.as_ref()
    }

    /// Stanza package, unless disabled in the configuration.
    #[must_use]
    pub fn linguistic(&self) -> Option<&LinguisticResources> {
        self.linguistic.as_ref()
    }

    #[must_use]
    pub fn is_download_only(&self) -> bool {
        self.download_only
    }

    #[must_use]
    pub fn summary(&self) -> &LoadingSummary {
        &self.summary
    }
}

/// Spawn every task, then join them all in spawn order.
fn run_all(
    tasks: &[LoadTask],
    source: &dyn ModelSource,
    config: &ModelsConfig,
    device: &Device,
) -> Vec<TaskReport> {
    thread::scope(|scope| {
        let handles: Vec<_> = tasks
            .iter()
            .map(|&task| {
                let device = device.clone();
                let handle = thread::Builder::new()
                    .name(format!("load-{}", task.as_str()))
                    .spawn_scoped(scope, move || {
                        info!("Start loading {task}");
                        let started = Instant::now();
                        let outcome = run_task(task, source, config, &device);
                        let elapsed = started.elapsed();
                        match &outcome {
                            Ok(_) => info!("{task} loaded ({:.2}s)", elapsed.as_secs_f64()),
                            Err(e) => error!("{task} failed after {:.2}s: {e}", elapsed.as_secs_f64()),
                        }
                        (elapsed, outcome)
                    });
                (task, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(task, handle)| {
                let (elapsed, outcome) = match handle {
                    Ok(handle) => match handle.join() {
                        Ok(finished) => finished,
                        Err(payload) => {
                            let message = panic_message(payload.as_ref());
                            error!("{task} loader panicked: {message}");
                            (Duration::ZERO, Err(ModelError::LoaderPanicked { task, message }))
                        }
                    },
                    Err(e) => (Duration::ZERO, Err(ModelError::IoError(e))),
                };
                TaskReport {
                    task,
                    elapsed,
                    outcome,
                }
            })
            .collect()
    })
}

fn run_task(
    task: LoadTask,
    source: &dyn ModelSource,
    config: &ModelsConfig,
    device: &Device,
) -> ModelResult<(TaskOutput, Vec<&'static str>)> {
    let family = match task {
        LoadTask::Family(family) => family,
        LoadTask::LinguisticResources => {
            let resources = LinguisticResources::download(source, &config.linguistic)?;
            return Ok((TaskOutput::Linguistic(resources), Vec::new()));
        }
    };

    let bundles = family
        .specs()
        .iter()
        .map(|spec| ModelBundle::fetch(source, spec, device))
        .collect::<ModelResult<Vec<_>>>()?;
    let names = bundles.iter().map(|b| b.spec().name).collect();

    let output = match family {
        ModelFamily::EnglishDg if config.download_only => {
            debug!("Skipping distractor composite in download-only mode");
            TaskOutput::Distractor(None)
        }
        ModelFamily::EnglishDg => {
            TaskOutput::Distractor(Some(DistractorGenerator::from_family(bundles)?))
        }
        _ => {
            let bundle = bundles
                .into_iter()
                .next()
                .ok_or_else(|| ModelError::InternalError {
                    message: format!("{family} has no catalog entry"),
                })?;
            TaskOutput::Model(bundle)
        }
    };
    Ok((output, names))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
