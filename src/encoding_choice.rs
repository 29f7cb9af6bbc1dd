//! Scoring of the per-partition encoding simplifications.
//!
//! For every partition, four candidate color space lines are fitted from
//! the externally supplied block statistics:
//!
//!  * uncorrelated RGB: best-fit line through the partition average.
//!  * same-chroma: line through the origin, modeling the endpoints as
//!    scalar multiples of one chroma vector (the LDR RGB-scale encoding).
//!  * RGB + luma: line through the partition average along the gray axis
//!    (the HDR RGB-scale encoding).
//!  * luminance: gray axis through the origin.
//!
//! One pass over the partition's texels accumulates the channel-weighted
//! squared projection error against all four lines, plus the error from
//! replacing alpha with its default. The sums are turned into calibrated
//! error deltas relative to the uncorrelated baseline, the cheapest
//! encoding being charged for exactly the information it discards.

use glam::Vec4;

use crate::{
    block::{ErrorWeightBlock, ImageBlock, PartitionInfo},
    endpoints::EndpointFits,
    line::{dot3, normalized3, Line3, ProcessedLine3},
    settings::Settings,
    BLOCK_MAX_PARTITIONS,
};

/// Per-partition color statistics of one block.
///
/// Parallel arrays with one entry per partition, produced by the
/// surrounding compressor's block analysis. The alpha lane of the
/// direction and scale factor vectors is ignored.
#[derive(Copy, Clone, Debug, Default)]
pub struct ColorStatistics {
    /// Weighted average color.
    pub averages: [Vec4; BLOCK_MAX_PARTITIONS],
    /// Dominant RGB direction. May be zero length for flat partitions.
    pub directions_rgb: [Vec4; BLOCK_MAX_PARTITIONS],
    /// Per-channel error weighting.
    pub error_weightings: [Vec4; BLOCK_MAX_PARTITIONS],
    /// Per-channel color scale factor.
    pub color_scale_factors: [Vec4; BLOCK_MAX_PARTITIONS],
}

/// Relative error of each encoding simplification for one partition.
///
/// Written by [`compute_encoding_choice_errors`], read by the mode
/// selection together with a separately computed quantization error
/// estimate.
#[derive(Copy, Clone, Debug, Default)]
pub struct EncodingChoiceErrors {
    /// Error from encoding the endpoints as scalar multiples of one
    /// chroma vector.
    pub rgb_scale_error: f32,
    /// Error from the HDR RGB + luma-shift encoding.
    pub rgb_luma_error: f32,
    /// Error from keeping luminance only.
    pub luminance_error: f32,
    /// Error from dropping the alpha channel.
    pub alpha_drop_error: f32,
    /// Whether the endpoints are close enough together for offset
    /// encoding.
    pub can_offset_encode: bool,
    /// Whether the endpoints allow blue contraction.
    pub can_blue_contract: bool,
}

/// Squared error sums of one partition against the four candidate lines.
#[derive(Copy, Clone, Default)]
struct PartitionSquaredErrors {
    uncorrelated: f32,
    same_chroma: f32,
    rgb_luma: f32,
    luminance: f32,
    alpha_drop: f32,
}

/// Sums the channel-weighted squared projection error of one partition's
/// texels against the four candidate lines, and the error that arises from
/// replacing alpha with its default.
///
/// Texels outside the partition and texels whose RGB weight is below the
/// cutoff are skipped, not zero-valued.
fn compute_error_squared_rgb_single_partition(
    partition_to_test: usize,
    blk: &ImageBlock,
    pi: &PartitionInfo,
    ewb: &ErrorWeightBlock,
    uncor_pline: &ProcessedLine3,
    samec_pline: &ProcessedLine3,
    rgbl_pline: &ProcessedLine3,
    l_pline: &ProcessedLine3,
) -> PartitionSquaredErrors {
    let mut sums = PartitionSquaredErrors::default();

    for i in 0..blk.texel_count {
        let partition = pi.partition_of_texel[i] as usize;
        let texel_weight = ewb.texel_weight_rgb[i];
        if partition != partition_to_test || texel_weight < 1e-20 {
            continue;
        }

        let point = blk.texel(i);
        let ews = ewb.error_weights[i];

        // The error that arises from just ditching alpha.
        let default_alpha = if blk.alpha_lns[i] {
            0x7800 as f32
        } else {
            0xFFFF as f32
        };
        let omalpha = point.w - default_alpha;
        sums.alpha_drop += omalpha * omalpha * ews.w;

        let param = dot3(point, uncor_pline.bs);
        let dist = uncor_pline.amod + param * uncor_pline.bis - point;
        sums.uncorrelated += dot3(ews, dist * dist);

        let param = dot3(point, samec_pline.bs);
        let dist = samec_pline.amod + param * samec_pline.bis - point;
        sums.same_chroma += dot3(ews, dist * dist);

        let param = dot3(point, rgbl_pline.bs);
        let dist = rgbl_pline.amod + param * rgbl_pline.bis - point;
        sums.rgb_luma += dot3(ews, dist * dist);

        let param = dot3(point, l_pline.bs);
        // No luminance amod, it is known to be zero.
        let dist = param * l_pline.bis - point;
        sums.luminance += dot3(ews, dist * dist);
    }

    sums
}

/// Computes the encoding choice errors of every partition of a block.
///
/// For the given texel colors, partitioning and error weight data this
/// determines per partition the color error that results from RGB-scale
/// encoding (relevant for LDR), from RGB + luma-shift encoding (relevant
/// for HDR), from luminance encoding and from dropping alpha, and whether
/// the partition endpoints are eligible for offset encoding and blue
/// contraction.
///
/// Results are written to `eci[0..partition_count]`. Entries past the
/// partition count are left untouched.
///
/// Preconditions, guaranteed by the surrounding pipeline and not checked
/// at runtime: positive partition and texel counts, every texel assigned
/// to a valid partition, non-negative error weights and an output slice
/// with at least one entry per partition.
pub fn compute_encoding_choice_errors(
    blk: &ImageBlock,
    pi: &PartitionInfo,
    ewb: &ErrorWeightBlock,
    stats: &ColorStatistics,
    fits: EndpointFits,
    settings: &Settings,
    eci: &mut [EncodingChoiceErrors],
) {
    let partition_count = pi.partition_count;

    debug_assert!(partition_count > 0);
    debug_assert!(blk.texel_count > 0);
    debug_assert!(eci.len() >= partition_count);

    let ep = fits.resolve();

    for i in 0..partition_count {
        let mut csf = stats.color_scale_factors[i];
        csf.w = 0.0;

        let mut icsf = stats.color_scale_factors[i].max(Vec4::splat(1e-7)).recip();
        icsf.w = 0.0;

        let uncor_rgb_line = Line3 {
            a: stats.averages[i],
            b: if dot3(stats.directions_rgb[i], stats.directions_rgb[i]) == 0.0 {
                normalized3(csf)
            } else {
                normalized3(stats.directions_rgb[i])
            },
        };

        let samec_rgb_line = Line3 {
            a: Vec4::ZERO,
            b: if dot3(stats.averages[i], stats.averages[i]) < 1e-20 {
                normalized3(csf)
            } else {
                normalized3(stats.averages[i])
            },
        };

        let rgb_luma_line = Line3 {
            a: stats.averages[i],
            b: normalized3(csf),
        };

        let uncor_pline = ProcessedLine3::new(uncor_rgb_line, csf, icsf);
        let samec_pline = ProcessedLine3::new(samec_rgb_line, csf, icsf);
        let rgbl_pline = ProcessedLine3::new(rgb_luma_line, csf, icsf);

        // The luminance line always goes through zero, so its offset is
        // known to be zero as well.
        let l_pline = ProcessedLine3 {
            amod: Vec4::ZERO,
            bs: normalized3(csf) * csf,
            bis: normalized3(csf) * icsf,
        };

        let sums = compute_error_squared_rgb_single_partition(
            i,
            blk,
            pi,
            ewb,
            &uncor_pline,
            &samec_pline,
            &rgbl_pline,
            &l_pline,
        );

        // Determine if the RGB lanes can be offset encoded.
        let endpt0 = ep.endpt0[i];
        let endpt1 = ep.endpt1[i];

        let endpt_diff = (endpt1 - endpt0).abs();
        let offset_limit = settings.offset_limit * 65535.0;
        let can_offset_encode = endpt_diff.x < offset_limit
            && endpt_diff.y < offset_limit
            && endpt_diff.z < offset_limit;

        // Determine if the RGB lanes can be blue contract encoded. Red and
        // green are re-expressed relative to blue, and all the contracted
        // values must stay clear of the range ends.
        let endpt_bc = [
            endpt0.x + (endpt0.x - endpt0.z),
            endpt1.x + (endpt1.x - endpt1.z),
            endpt0.y + (endpt0.y - endpt0.z),
            endpt1.y + (endpt1.y - endpt1.z),
        ];

        let bc_low = settings.blue_contract_low * 65535.0;
        let bc_high = settings.blue_contract_high * 65535.0;
        let can_blue_contract = endpt_bc.iter().all(|&v| v > bc_low && v < bc_high);

        // Store out the settings.
        eci[i] = EncodingChoiceErrors {
            rgb_scale_error: (sums.same_chroma - sums.uncorrelated) * settings.rgb_scale_weight,
            rgb_luma_error: (sums.rgb_luma - sums.uncorrelated) * settings.rgb_luma_weight,
            luminance_error: (sums.luminance - sums.uncorrelated) * settings.luminance_weight,
            alpha_drop_error: sums.alpha_drop * settings.alpha_drop_weight,
            can_offset_encode,
            can_blue_contract,
        };
    }
}
