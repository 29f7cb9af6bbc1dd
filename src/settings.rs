use bytemuck::{Pod, Zeroable};

/// Calibration constants for the encoding choice error estimation.
///
/// The error weights scale the raw squared-error deltas into scores that
/// are comparable against quantization error estimates; the limits control
/// the endpoint range eligibility tests. All values are empirically tuned,
/// not derived. Use [`Settings::reference`] for output parity with the
/// reference encoder, or supply your own values when re-tuning against new
/// reference data.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Settings {
    /// Weight applied to the RGB-scale error delta.
    pub rgb_scale_weight: f32,
    /// Weight applied to the HDR RGB + luma-shift error delta.
    pub rgb_luma_weight: f32,
    /// Weight applied to the luminance-only error delta.
    pub luminance_weight: f32,
    /// Weight applied to the accumulated alpha drop error.
    pub alpha_drop_weight: f32,
    /// Largest per-channel endpoint difference that still allows offset
    /// encoding, as a fraction of the 16-bit range.
    pub offset_limit: f32,
    /// Lower bound on the blue-contracted endpoint proxies, as a fraction
    /// of the 16-bit range.
    pub blue_contract_low: f32,
    /// Upper bound on the blue-contracted endpoint proxies.
    pub blue_contract_high: f32,
}

impl Settings {
    /// Calibration matching the reference encoder.
    pub const fn reference() -> Self {
        Self {
            rgb_scale_weight: 0.7,  // empirical
            rgb_luma_weight: 1.5,   // wild guess
            luminance_weight: 3.0,  // empirical
            alpha_drop_weight: 3.0,
            offset_limit: 0.12,
            blue_contract_low: 0.01,
            blue_contract_high: 0.99,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::reference()
    }
}
