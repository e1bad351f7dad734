//! Derive images use case
//!
//! Runs the derivation policy over a sorted list of sources. Sequential by
//! default; with more than one job the sources are spread over a bounded
//! rayon pool and the outcomes merged back in source order, so the report
//! does not depend on scheduling.

use crate::application::dto::{DerivationProfile, RunReport};
use crate::domain::entities::{DerivationOutcome, SkipReason};
use crate::domain::repositories::{CodecError, EncodeRequest, ImageCodec};
use crate::domain::services::{
    SourceDecision, TargetDecision, classify_source, classify_target, derivative_path,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Progress callback: (sources done, total sources)
pub type DerivationProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Derive images use case
pub struct DeriveImagesUseCase<C: ImageCodec> {
    codec: C,
    profile: DerivationProfile,
    root: PathBuf,
}

impl<C: ImageCodec> DeriveImagesUseCase<C> {
    /// Creates a new use case; report paths are made relative to `root`
    pub fn new(codec: C, profile: DerivationProfile, root: impl Into<PathBuf>) -> Self {
        Self {
            codec,
            profile,
            root: root.into(),
        }
    }

    pub fn profile(&self) -> &DerivationProfile {
        &self.profile
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Runs every target width of one source through the policy
    pub fn derive_source(&self, source: &Path) -> Vec<DerivationOutcome> {
        let probe = self.codec.probe_width(source).map_err(|e| e.to_string());

        let width = match classify_source(probe, self.profile.min_source_width) {
            SourceDecision::Derive { width } => width,
            SourceDecision::Skip(reason) => {
                if matches!(reason, SkipReason::WidthUnreadable { .. }) {
                    warn!(source = %source.display(), reason = %reason, "cannot read width");
                } else {
                    debug!(source = %source.display(), reason = %reason, "source skipped");
                }
                return vec![DerivationOutcome::Skipped {
                    source: source.to_path_buf(),
                    target: None,
                    reason,
                }];
            }
        };

        let mut outcomes = Vec::with_capacity(self.profile.targets.len());

        for &target in &self.profile.targets {
            let output = derivative_path(source, target);
            let exists = width >= target && self.codec.output_exists(&output);

            match classify_target(width, target, exists) {
                TargetDecision::Skip(skip) => outcomes.push(DerivationOutcome::Skipped {
                    source: source.to_path_buf(),
                    target: Some(target),
                    reason: skip.into(),
                }),
                TargetDecision::Derive => outcomes.push(self.encode(source, &output, target)),
            }
        }

        outcomes
    }

    fn encode(&self, source: &Path, output: &Path, target: u32) -> DerivationOutcome {
        let request = EncodeRequest {
            source,
            output,
            target_width: target,
            quality: self.profile.quality,
        };

        match self.codec.derive(&request) {
            Ok(()) => {
                debug!(output = %output.display(), "derivative written");
                DerivationOutcome::Generated {
                    source: source.to_path_buf(),
                    target,
                    output: output.to_path_buf(),
                }
            }
            // Another writer created it between the existence check and ours
            Err(CodecError::OutputExists(_)) => DerivationOutcome::Skipped {
                source: source.to_path_buf(),
                target: Some(target),
                reason: SkipReason::OutputAlreadyExists,
            },
            Err(e) => {
                warn!(source = %source.display(), width = target, error = %e, "encode failed");
                DerivationOutcome::Failed {
                    source: source.to_path_buf(),
                    target,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Derives every source and builds the run report
    pub fn execute(
        &self,
        sources: &[PathBuf],
        progress_callback: Option<DerivationProgressCallback>,
    ) -> Result<RunReport> {
        let start_time = Instant::now();
        let total = sources.len();

        info!(
            profile = %self.profile.name,
            sources = total,
            jobs = self.profile.jobs,
            "starting derivation"
        );

        let done = AtomicUsize::new(0);
        let run_one = |source: &PathBuf| {
            let outcomes = self.derive_source(source);
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(ref callback) = progress_callback {
                callback(finished, total);
            }
            outcomes
        };

        let per_source: Vec<Vec<DerivationOutcome>> = if self.profile.jobs > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.profile.jobs)
                .build()
                .context("failed to build derivation worker pool")?;
            // Sources sharing a stem write the same derivatives, so they run
            // in one unit in sorted order and the first one wins as it would
            // sequentially.
            let groups = group_by_stem(sources);
            let mut indexed: Vec<(usize, Vec<DerivationOutcome>)> = pool.install(|| {
                groups
                    .par_iter()
                    .flat_map_iter(|group| {
                        group.iter().map(|&i| (i, run_one(&sources[i]))).collect::<Vec<_>>()
                    })
                    .collect()
            });
            indexed.sort_by_key(|(i, _)| *i);
            indexed.into_iter().map(|(_, outcomes)| outcomes).collect()
        } else {
            sources.iter().map(&run_one).collect()
        };

        let mut report = RunReport::new(&self.profile, &self.root, total);
        for outcome in per_source.iter().flatten() {
            report.record(outcome);
        }

        info!(
            generated = report.generated_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "derivation complete"
        );

        Ok(report)
    }
}

/// Indices of `sources` grouped by the path they derive to, minus the
/// width suffix. Groups and their members keep input order.
fn group_by_stem(sources: &[PathBuf]) -> Vec<Vec<usize>> {
    let mut slots: HashMap<PathBuf, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (i, source) in sources.iter().enumerate() {
        let slot = *slots.entry(source.with_extension("")).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(i);
    }
    groups
}
