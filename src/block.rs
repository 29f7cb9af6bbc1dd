use glam::Vec4;

use crate::{BLOCK_MAX_PARTITIONS, BLOCK_MAX_TEXELS};

/// Working copy of one block's texels.
///
/// Channels are stored as planes in the 16-bit working range
/// (`0.0..=65535.0`). `alpha_lns` marks texels whose alpha channel uses the
/// logarithmic HDR encoding.
#[derive(Clone)]
pub struct ImageBlock {
    pub data_r: [f32; BLOCK_MAX_TEXELS],
    pub data_g: [f32; BLOCK_MAX_TEXELS],
    pub data_b: [f32; BLOCK_MAX_TEXELS],
    pub data_a: [f32; BLOCK_MAX_TEXELS],
    pub alpha_lns: [bool; BLOCK_MAX_TEXELS],
    pub xdim: usize,
    pub ydim: usize,
    pub texel_count: usize,
}

impl ImageBlock {
    /// Creates a zeroed block with a `xdim` x `ydim` texel footprint.
    ///
    /// # Panics
    /// If the footprint is empty or exceeds [`BLOCK_MAX_TEXELS`].
    pub fn new(xdim: usize, ydim: usize) -> Self {
        let texel_count = xdim * ydim;
        assert!(
            texel_count > 0 && texel_count <= BLOCK_MAX_TEXELS,
            "unsupported block footprint {}x{}",
            xdim,
            ydim
        );

        Self {
            data_r: [0.0; BLOCK_MAX_TEXELS],
            data_g: [0.0; BLOCK_MAX_TEXELS],
            data_b: [0.0; BLOCK_MAX_TEXELS],
            data_a: [0.0; BLOCK_MAX_TEXELS],
            alpha_lns: [false; BLOCK_MAX_TEXELS],
            xdim,
            ydim,
            texel_count,
        }
    }

    /// Gathers the color of one texel.
    #[inline(always)]
    pub fn texel(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.data_r[index],
            self.data_g[index],
            self.data_b[index],
            self.data_a[index],
        )
    }

    /// Loads one block from interleaved RGBA8 data.
    ///
    /// `xx` and `yy` are block coordinates, `stride` the number of bytes
    /// per source row. The 8-bit channels are widened into the 16-bit
    /// working range.
    pub fn load_block_interleaved_rgba8(
        &mut self,
        rgba_data: &[u8],
        xx: usize,
        yy: usize,
        stride: usize,
    ) {
        for y in 0..self.ydim {
            for x in 0..self.xdim {
                let pixel_x = xx * self.xdim + x;
                let pixel_y = yy * self.ydim + y;

                let offset = pixel_y * stride + pixel_x * 4;
                let index = y * self.xdim + x;

                self.data_r[index] = rgba_data[offset] as f32 * (65535.0 / 255.0);
                self.data_g[index] = rgba_data[offset + 1] as f32 * (65535.0 / 255.0);
                self.data_b[index] = rgba_data[offset + 2] as f32 * (65535.0 / 255.0);
                self.data_a[index] = rgba_data[offset + 3] as f32 * (65535.0 / 255.0);
                self.alpha_lns[index] = false;
            }
        }
    }

    /// Loads one block from interleaved RGBA16F data.
    ///
    /// `xx` and `yy` are block coordinates, `stride` the number of `f16`
    /// values per source row. Channels are stored through their half float
    /// bit patterns, the logarithmic working encoding of the HDR path, and
    /// every loaded texel is flagged as having LNS encoded alpha.
    #[cfg(feature = "hdr")]
    #[cfg_attr(docsrs, doc(cfg(feature = "hdr")))]
    pub fn load_block_interleaved_rgba_f16(
        &mut self,
        rgba_data: &[half::f16],
        xx: usize,
        yy: usize,
        stride: usize,
    ) {
        for y in 0..self.ydim {
            for x in 0..self.xdim {
                let pixel_x = xx * self.xdim + x;
                let pixel_y = yy * self.ydim + y;

                let offset = pixel_y * stride + pixel_x * 4;
                let index = y * self.xdim + x;

                self.data_r[index] = rgba_data[offset].to_bits() as f32;
                self.data_g[index] = rgba_data[offset + 1].to_bits() as f32;
                self.data_b[index] = rgba_data[offset + 2].to_bits() as f32;
                self.data_a[index] = rgba_data[offset + 3].to_bits() as f32;
                self.alpha_lns[index] = true;
            }
        }
    }
}

/// Per-texel error weights steering the squared-error accumulation.
///
/// `texel_weight_rgb` is derived from the 4-lane weights on construction so
/// the two views cannot disagree.
#[derive(Clone)]
pub struct ErrorWeightBlock {
    pub error_weights: [Vec4; BLOCK_MAX_TEXELS],
    pub texel_weight_rgb: [f32; BLOCK_MAX_TEXELS],
}

impl ErrorWeightBlock {
    /// Builds a weight block from per-texel 4-lane error weights.
    ///
    /// The scalar RGB weight of each texel is the mean of its R, G and B
    /// weight lanes. Weights must be non-negative.
    ///
    /// # Panics
    /// If more than [`BLOCK_MAX_TEXELS`] weights are passed.
    pub fn new(error_weights: &[Vec4]) -> Self {
        assert!(
            error_weights.len() <= BLOCK_MAX_TEXELS,
            "too many texel weights: {}",
            error_weights.len()
        );

        let mut ewb = Self {
            error_weights: [Vec4::ZERO; BLOCK_MAX_TEXELS],
            texel_weight_rgb: [0.0; BLOCK_MAX_TEXELS],
        };

        for (i, &ews) in error_weights.iter().enumerate() {
            ewb.error_weights[i] = ews;
            ewb.texel_weight_rgb[i] = (ews.x + ews.y + ews.z) * (1.0 / 3.0);
        }

        ewb
    }

    /// Uniform weights across all channels of `texel_count` texels.
    pub fn new_uniform(texel_count: usize, weight: f32) -> Self {
        assert!(texel_count <= BLOCK_MAX_TEXELS);

        let mut ewb = Self {
            error_weights: [Vec4::ZERO; BLOCK_MAX_TEXELS],
            texel_weight_rgb: [0.0; BLOCK_MAX_TEXELS],
        };

        for i in 0..texel_count {
            ewb.error_weights[i] = Vec4::splat(weight);
            ewb.texel_weight_rgb[i] = weight;
        }

        ewb
    }
}

/// Assignment of each texel of a block to a partition.
#[derive(Clone)]
pub struct PartitionInfo {
    pub partition_count: usize,
    pub partition_of_texel: [u8; BLOCK_MAX_TEXELS],
}

impl PartitionInfo {
    /// Builds a partition table from per-texel partition ids.
    ///
    /// # Panics
    /// If the partition count is out of range or a texel is assigned to a
    /// partition outside of it.
    pub fn new(partition_count: usize, partition_of_texel: &[u8]) -> Self {
        assert!(
            partition_count > 0 && partition_count <= BLOCK_MAX_PARTITIONS,
            "unsupported partition count {}",
            partition_count
        );
        assert!(partition_of_texel.len() <= BLOCK_MAX_TEXELS);

        let mut pt = [0; BLOCK_MAX_TEXELS];
        for (dst, &partition) in pt.iter_mut().zip(partition_of_texel) {
            assert!(
                (partition as usize) < partition_count,
                "texel assigned to invalid partition {}",
                partition
            );
            *dst = partition;
        }

        Self {
            partition_count,
            partition_of_texel: pt,
        }
    }

    /// Puts the whole block into one partition.
    pub fn new_single_partition() -> Self {
        Self {
            partition_count: 1,
            partition_of_texel: [0; BLOCK_MAX_TEXELS],
        }
    }
}
