//! The compiled-in benchmark table.
//!
//! Rows are kernels 1..=11, columns follow `ContentType::ALL`. Compression time
//! was measured per kernel over the whole corpus, so it is repeated for every
//! content type of that kernel.

use super::{KernelMetricEntry, KernelMetrics, MetricsCatalog};
use crate::types::{ContentType, KERNEL_COUNT};

const COMPRESSION_TIMES: [f64; KERNEL_COUNT] = [
    875.0, 844.0, 1031.0, 1812.0, 2296.0, 3062.0, 4875.0, 5484.0, 4641.0, 547.0, 734.0,
];

#[rustfmt::skip]
const BITS_PER_BYTE: [[f64; 11]; KERNEL_COUNT] = [
    [4.576, 4.82062, 5.27058, 5.08269, 4.78151, 3.42421, 4.65552, 4.53897, 1.16966, 5.3682, 5.03998],
    [3.48033, 3.48761, 3.79173, 3.39587, 3.50228, 2.66821, 3.5305, 3.39085, 0.843731, 3.82992, 3.97445],
    [2.72525, 2.8121, 2.79706, 2.43874, 2.73475, 1.84252, 2.75737, 2.82208, 0.845336, 3.17782, 3.33665],
    [2.39754, 2.71176, 2.51839, 2.27085, 2.66165, 1.51397, 2.09653, 2.45897, 0.874096, 2.98075, 3.28555],
    [2.51658, 2.88029, 2.57334, 2.35265, 2.7541, 1.6337, 2.17129, 2.61234, 0.880362, 3.02636, 3.36882],
    [2.14059, 2.39152, 2.2303, 2.00323, 2.33056, 1.21892, 1.9272, 2.26894, 0.796686, 2.63389, 2.89567],
    [2.1156, 2.39344, 2.21729, 1.98744, 2.33271, 1.23088, 1.87917, 2.26042, 0.785229, 2.59142, 2.89189],
    [2.12334, 2.41478, 2.22022, 1.94439, 2.33056, 1.26447, 1.88376, 2.30955, 0.783701, 2.55628, 2.90135],
    [2.9275, 3.17293, 2.71349, 2.52126, 2.96479, 0.564156, 2.72575, 3.25586, 0.775346, 2.77259, 3.51455],
    [6.2395, 6.63121, 4.57408, 4.16502, 4.60521, 3.03748, 5.81782, 7.22449, 1.81285, 4.82762, 6.01278],
    [5.86693, 6.48396, 4.52433, 4.13274, 4.64391, 3.16557, 5.46419, 6.93805, 1.77918, 4.85021, 5.97871],
];

pub(super) fn build() -> MetricsCatalog {
    let kernels = BITS_PER_BYTE
        .iter()
        .zip(COMPRESSION_TIMES)
        .map(|(row, time)| KernelMetrics {
            entries: ContentType::ALL
                .iter()
                .zip(row)
                .map(|(&content_type, &bits_per_byte)| KernelMetricEntry {
                    content_type,
                    bits_per_byte,
                    compression_time: time,
                })
                .collect(),
        })
        .collect();
    MetricsCatalog { kernels }
}
