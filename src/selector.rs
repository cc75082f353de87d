// In: src/selector.rs

//! The benchmark-driven kernel selector.
//!
//! Given a content type and a weighting parameter `alpha`, the selector ranks
//! every kernel that was benchmarked on that content type and returns the best
//! one. It operates by:
//! 1. Collecting the candidate kernels' `(bits_per_byte, compression_time)`.
//! 2. Normalising both against the candidate averages, so a score of `1.0` on
//!    either axis means "exactly average".
//! 3. Blending the two normalised figures with `alpha` and taking the maximum.
//!
//! Selection is a pure function of `(catalog, content_type, alpha)`. There is no
//! cached or global state, so identical inputs always produce the same kernel.

use crate::catalog::MetricsCatalog;
use crate::error::{EasyCompressError, Result};
use crate::types::{ContentType, KernelIndex};

/// The scoring breakdown for one candidate kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelScore {
    pub kernel: KernelIndex,
    /// `avg_bpb / bpb_k`: above `1.0` for kernels that compress better than average.
    pub compression_ratio: f64,
    /// `avg_time / time_k`: above `1.0` for kernels faster than average.
    pub time_factor: f64,
    /// `alpha * compression_ratio + (1 - alpha) * time_factor`.
    pub score: f64,
}

fn validate_alpha(alpha: f64) -> Result<()> {
    // `contains` is false for NaN.
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(EasyCompressError::AlphaOutOfRange(alpha))
    }
}

/// Scores every candidate kernel for `content_type`, in kernel order.
///
/// A kernel with no benchmark entry for `content_type` is not a candidate and
/// is simply absent from the result.
///
/// # Errors
/// * `AlphaOutOfRange` if `alpha` is outside `[0, 1]` or NaN.
/// * `UnknownContentType` if no kernel was benchmarked on `content_type`.
pub fn score_kernels(
    catalog: &MetricsCatalog,
    content_type: ContentType,
    alpha: f64,
) -> Result<Vec<KernelScore>> {
    validate_alpha(alpha)?;

    let candidates: Vec<(KernelIndex, f64, f64)> = catalog
        .kernels()
        .filter_map(|(kernel, metrics)| {
            metrics
                .get(content_type)
                .map(|e| (kernel, e.bits_per_byte, e.compression_time))
        })
        .collect();

    if candidates.is_empty() {
        return Err(EasyCompressError::UnknownContentType(
            content_type.to_string(),
        ));
    }

    let count = candidates.len() as f64;
    let avg_bpb = candidates.iter().map(|&(_, bpb, _)| bpb).sum::<f64>() / count;
    let avg_time = candidates.iter().map(|&(_, _, time)| time).sum::<f64>() / count;

    Ok(candidates
        .into_iter()
        .map(|(kernel, bpb, time)| {
            let compression_ratio = avg_bpb / bpb;
            let time_factor = avg_time / time;
            KernelScore {
                kernel,
                compression_ratio,
                time_factor,
                score: alpha * compression_ratio + (1.0 - alpha) * time_factor,
            }
        })
        .collect())
}

/// Selects the best kernel for `content_type` under the trade-off `alpha`.
///
/// `alpha = 1.0` optimises purely for compression ratio, `alpha = 0.0` purely
/// for speed. Ties go to the lowest kernel index.
pub fn select(catalog: &MetricsCatalog, content_type: ContentType, alpha: f64) -> Result<KernelIndex> {
    let scores = score_kernels(catalog, content_type, alpha)?;

    let mut best = scores[0];
    for candidate in &scores[1..] {
        // Strictly greater, so the first-seen kernel keeps a tie.
        if candidate.score > best.score {
            best = *candidate;
        }
    }

    log_metric!(
        "event" = "select_kernel",
        "content_type" = content_type,
        "alpha" = alpha,
        "candidates" = scores.len(),
        "kernel" = best.kernel,
        "score" = format!("{:.4}", best.score)
    );

    Ok(best.kernel)
}

/// Like `select`, but accepts a raw content-type label.
pub fn select_for_label(catalog: &MetricsCatalog, content_type: &str, alpha: f64) -> Result<KernelIndex> {
    select(catalog, content_type.parse()?, alpha)
}

//==================================================================================
// Unit Tests
//==================================================================================
