use alloc::vec::Vec;

/// Computes the `(padded index, scale)` writes for a slider centered on logical `index`.
///
/// The centered item is restored to `1.0` and its two padded neighbors get `scale`. At the wrap
/// boundaries the clones mirror their real counterparts, so the zero-duration re-snap between a
/// clone and its real item never flashes a different scale.
///
/// Returns nothing when `scale >= 1.0` or there is nothing to slide.
pub fn scale_plan(index: usize, item_count: usize, scale: f32) -> Vec<(usize, f32)> {
    let mut out = Vec::new();
    if scale >= 1.0 || item_count < 2 || index >= item_count {
        return out;
    }

    out.push((index, scale));
    out.push((index + 1, 1.0));
    out.push((index + 2, scale));

    if index == 0 {
        // Shown when resting on the appended clone of item 0.
        out.push((item_count, scale));
        out.push((item_count + 1, 1.0));
    } else if index == item_count - 1 {
        // Shown when resting on the prepended clone of the last item.
        out.push((item_count - 1, scale));
        out.push((0, 1.0));
        out.push((1, scale));
    }
    out
}
