//! Practical split scheme: cascade boundaries blended between logarithmic
//! and uniform distributions (GPU Gems 3, ch. 10).

/// Compute `split_count + 1` cascade boundary depths between `near_clip`
/// and `far_clip`.
///
/// `lambda = 1` gives the pure logarithmic split, `lambda = 0` the pure
/// uniform split. Values outside `[0, 1]` extrapolate.
///
/// # Panics
///
/// Panics if `split_count` is zero or `near_clip` is zero.
pub fn compute_split_positions(
    split_count: usize,
    lambda: f32,
    near_clip: f32,
    far_clip: f32,
) -> Vec<f32> {
    let mut positions = vec![0.0; split_count + 1];
    write_split_positions(split_count, lambda, near_clip, far_clip, &mut positions);
    positions
}

/// In-place form of [`compute_split_positions`] writing into
/// `positions[..=split_count]`.
///
/// # Panics
///
/// Panics if `split_count` is zero, `near_clip` is zero or `positions`
/// holds fewer than `split_count + 1` entries.
pub fn write_split_positions(
    split_count: usize,
    lambda: f32,
    near_clip: f32,
    far_clip: f32,
    positions: &mut [f32],
) {
    assert!(split_count >= 1, "split count must be at least 1");
    assert!(
        positions.len() > split_count,
        "need {} split slots, got {}",
        split_count + 1,
        positions.len()
    );

    if split_count == 1 {
        positions[0] = near_clip;
        positions[1] = far_clip;
        return;
    }

    assert!(near_clip != 0.0, "near clip must not be zero");

    let inv_m = 1.0 / split_count as f32;
    let f_div_n = far_clip / near_clip;
    let f_sub_n = far_clip - near_clip;

    for (i, slot) in positions.iter_mut().enumerate().take(split_count).skip(1) {
        let t = i as f32 * inv_m;
        let c_log = near_clip * f_div_n.powf(t);
        let c_uni = near_clip + f_sub_n * t;
        *slot = lambda * c_log + (1.0 - lambda) * c_uni;
    }

    positions[0] = near_clip;
    positions[split_count] = far_clip;
}
