use astc_encoding_choice::{
    glam::Vec4, ColorStatistics, ErrorWeightBlock, ImageBlock, PartitionInfo,
};

/// Builds a one-row block holding the given texel colors.
pub fn block_from_colors(colors: &[[f32; 4]]) -> ImageBlock {
    let mut blk = ImageBlock::new(colors.len(), 1);

    for (i, color) in colors.iter().enumerate() {
        blk.data_r[i] = color[0];
        blk.data_g[i] = color[1];
        blk.data_b[i] = color[2];
        blk.data_a[i] = color[3];
    }

    blk
}

/// Test-side stand-in for the compressor's block analysis pass.
///
/// Per partition: the error weighting is the mean of the texel error
/// weights and the color scale factor its per-channel square root, the
/// average is the RGB-weighted mean color, and the dominant direction is
/// the longest of the three deviation sums flipped into the positive
/// half-space of each channel.
pub fn compute_color_statistics(
    blk: &ImageBlock,
    pi: &PartitionInfo,
    ewb: &ErrorWeightBlock,
) -> ColorStatistics {
    let mut stats = ColorStatistics::default();

    for partition in 0..pi.partition_count {
        let mut weight_sum = Vec4::ZERO;
        let mut texels = 0;

        let mut base_sum = Vec4::ZERO;
        let mut partition_weight = 0.0;

        for i in 0..blk.texel_count {
            if pi.partition_of_texel[i] as usize != partition {
                continue;
            }

            weight_sum += ewb.error_weights[i];
            texels += 1;

            let weight = ewb.texel_weight_rgb[i];
            let mut texel = blk.texel(i);
            texel.w = 0.0;

            base_sum += texel * weight;
            partition_weight += weight;
        }

        let error_weighting = weight_sum / texels.max(1) as f32;
        let average = if partition_weight > 0.0 {
            base_sum / partition_weight
        } else {
            Vec4::ZERO
        };

        let mut sum_xp = Vec4::ZERO;
        let mut sum_yp = Vec4::ZERO;
        let mut sum_zp = Vec4::ZERO;

        for i in 0..blk.texel_count {
            if pi.partition_of_texel[i] as usize != partition {
                continue;
            }

            let mut texel = blk.texel(i);
            texel.w = 0.0;
            let texel_datum = (texel - average) * ewb.texel_weight_rgb[i];

            if texel_datum.x > 0.0 {
                sum_xp += texel_datum;
            }
            if texel_datum.y > 0.0 {
                sum_yp += texel_datum;
            }
            if texel_datum.z > 0.0 {
                sum_zp += texel_datum;
            }
        }

        let mut best_direction = sum_xp;
        let mut best_length = sum_xp.truncate().length_squared();

        for candidate in [sum_yp, sum_zp] {
            let length = candidate.truncate().length_squared();
            if length > best_length {
                best_direction = candidate;
                best_length = length;
            }
        }

        stats.averages[partition] = average;
        stats.directions_rgb[partition] = best_direction;
        stats.error_weightings[partition] = error_weighting;
        stats.color_scale_factors[partition] = Vec4::new(
            error_weighting.x.sqrt(),
            error_weighting.y.sqrt(),
            error_weighting.z.sqrt(),
            0.0,
        );
    }

    stats
}
