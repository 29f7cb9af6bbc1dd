use glam::Vec4;

use crate::BLOCK_MAX_PARTITIONS;

/// Representative color pair for each partition of a block.
///
/// Produced by the surrounding compressor's endpoint estimation, one fit
/// for single-plane blocks and two component-separated fits for dual-plane
/// blocks.
#[derive(Copy, Clone, Debug, Default)]
pub struct Endpoints {
    pub partition_count: usize,
    pub endpt0: [Vec4; BLOCK_MAX_PARTITIONS],
    pub endpt1: [Vec4; BLOCK_MAX_PARTITIONS],
}

/// Endpoint fits feeding [`compute_encoding_choice_errors`].
///
/// Dual-plane blocks interpolate one channel on its own weight plane, so
/// their endpoints arrive as two component-separated fits which are merged
/// before use.
///
/// [`compute_encoding_choice_errors`]: crate::compute_encoding_choice_errors
#[derive(Copy, Clone)]
pub enum EndpointFits<'a> {
    /// One fit covering all four channels.
    SinglePlane(&'a Endpoints),
    /// Two fits: `base` covers three channels, `separate` contributes the
    /// channel at `component` (0..=3).
    DualPlane {
        base: &'a Endpoints,
        separate: &'a Endpoints,
        component: usize,
    },
}

impl EndpointFits<'_> {
    pub(crate) fn resolve(self) -> Endpoints {
        match self {
            EndpointFits::SinglePlane(ep) => *ep,
            EndpointFits::DualPlane {
                base,
                separate,
                component,
            } => merge_endpoints(base, separate, component),
        }
    }
}

/// Merges two component-separated endpoint sets into one.
///
/// `ep1` contributes three of the color components and `ep2` the component
/// at `separate_component`. Both sets must cover the same partitions.
pub fn merge_endpoints(
    ep1: &Endpoints,
    ep2: &Endpoints,
    separate_component: usize,
) -> Endpoints {
    let partition_count = ep1.partition_count;
    debug_assert!(partition_count > 0);
    debug_assert!(separate_component < 4);

    let mut res = Endpoints {
        partition_count,
        ..Default::default()
    };

    for i in 0..partition_count {
        let mut endpt0 = ep1.endpt0[i];
        let mut endpt1 = ep1.endpt1[i];
        endpt0[separate_component] = ep2.endpt0[i][separate_component];
        endpt1[separate_component] = ep2.endpt1[i][separate_component];

        res.endpt0[i] = endpt0;
        res.endpt1[i] = endpt1;
    }

    res
}
