//! Geometry resolution: which item sits closest to the container's focal point.
//!
//! `nearest_index` is the pure resolver. Layout is read through the
//! `MeasurementProvider` trait so the resolver never touches a rendering tree.

use std::collections::BTreeSet;

/// Positions measured at a single instant
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySnapshot {
    /// Horizontal center of the visible container
    pub container_center_x: f64,
    /// Horizontal center of each item, in item order; `None` when unmeasurable
    pub item_center_xs: Vec<Option<f64>>,
}

impl GeometrySnapshot {
    /// Index of the item nearest the container center
    pub fn nearest(&self) -> Option<usize> {
        nearest_index(self.container_center_x, &self.item_center_xs)
    }
}

/// Source of live layout positions.
///
/// Returns `None` when the container itself cannot be measured.
pub trait MeasurementProvider {
    fn measure(&self) -> Option<GeometrySnapshot>;
}

impl MeasurementProvider for GeometrySnapshot {
    fn measure(&self) -> Option<GeometrySnapshot> {
        Some(self.clone())
    }
}

/// Find the index whose center is nearest to `container_center_x`.
///
/// Unmeasurable entries are skipped. A candidate replaces the current best only
/// on a strictly smaller distance, so ties keep the earliest index. Returns
/// `None` for an empty or fully unmeasurable sequence.
pub fn nearest_index(container_center_x: f64, item_center_xs: &[Option<f64>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, center) in item_center_xs.iter().enumerate() {
        let Some(center) = center else {
            continue;
        };
        let distance = (center - container_center_x).abs();
        // NaN compares false and never becomes the best
        let closer = match best {
            Some((_, best_distance)) => distance < best_distance,
            None => distance < f64::INFINITY,
        };
        if closer {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// Layout of a strip whose items are each exactly one container wide.
///
/// `strip_x` is the strip's horizontal translation relative to the container's
/// left edge: `0.0` shows item 0, `-width` shows item 1, and so on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripLayout {
    pub container_left: f64,
    pub container_width: f64,
    pub item_count: usize,
    pub strip_x: f64,
    /// Items that currently report no position
    pub unmounted: BTreeSet<usize>,
}

impl StripLayout {
    pub fn new(container_left: f64, container_width: f64, item_count: usize) -> Self {
        Self {
            container_left,
            container_width,
            item_count,
            strip_x: 0.0,
            unmounted: BTreeSet::new(),
        }
    }

    /// Strip translation that shows `index` shifted by a transient `offset`
    pub fn strip_x_for(&self, index: usize, offset: f64) -> f64 {
        -(index as f64) * self.container_width + offset
    }

    /// Translation expressed as a percentage of one item width
    pub fn translate_percent(&self) -> f64 {
        if self.container_width <= 0.0 {
            return 0.0;
        }
        self.strip_x / self.container_width * 100.0
    }

    pub fn container_center_x(&self) -> f64 {
        self.container_left + self.container_width / 2.0
    }

    pub fn item_center_x(&self, index: usize) -> f64 {
        self.container_left
            + self.strip_x
            + index as f64 * self.container_width
            + self.container_width / 2.0
    }
}

impl MeasurementProvider for StripLayout {
    fn measure(&self) -> Option<GeometrySnapshot> {
        if self.container_width.is_nan() || self.container_width <= 0.0 {
            return None;
        }

        let item_center_xs = (0..self.item_count)
            .map(|index| {
                if self.unmounted.contains(&index) {
                    None
                } else {
                    Some(self.item_center_x(index))
                }
            })
            .collect();

        Some(GeometrySnapshot {
            container_center_x: self.container_center_x(),
            item_center_xs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert_eq!(nearest_index(0.0, &[]), None);
    }

    #[test]
    fn test_all_unmeasurable_is_none() {
        assert_eq!(nearest_index(50.0, &[None, None, None]), None);
    }

    #[test]
    fn test_tie_keeps_first() {
        assert_eq!(nearest_index(10.0, &[Some(10.0), Some(10.0)]), Some(0));
        assert_eq!(nearest_index(0.0, &[Some(-5.0), Some(5.0)]), Some(0));
    }

    #[test]
    fn test_skips_unmeasurable() {
        let centers = [None, Some(300.0), Some(110.0), None];
        assert_eq!(nearest_index(100.0, &centers), Some(2));
    }

    #[test]
    fn test_nan_never_wins() {
        assert_eq!(nearest_index(0.0, &[Some(f64::NAN), Some(1000.0)]), Some(1));
        assert_eq!(nearest_index(0.0, &[Some(f64::NAN)]), None);
    }

    #[test]
    fn test_strip_layout_centers() {
        let mut layout = StripLayout::new(10.0, 100.0, 3);
        assert_eq!(layout.container_center_x(), 60.0);
        assert_eq!(layout.item_center_x(0), 60.0);
        assert_eq!(layout.item_center_x(2), 260.0);

        layout.strip_x = layout.strip_x_for(1, -20.0);
        assert_eq!(layout.strip_x, -120.0);
        assert_eq!(layout.translate_percent(), -120.0);
        assert_eq!(layout.measure().and_then(|s| s.nearest()), Some(1));
    }

    #[test]
    fn test_strip_layout_unmounted() {
        let mut layout = StripLayout::new(0.0, 100.0, 3);
        layout.strip_x = -100.0;
        layout.unmounted.insert(1);
        let snapshot = layout.measure().unwrap();
        assert_eq!(snapshot.item_center_xs[1], None);
        // Items 0 and 2 are equally far; the earlier wins
        assert_eq!(snapshot.nearest(), Some(0));
    }

    #[test]
    fn test_zero_width_unmeasurable() {
        let layout = StripLayout::new(0.0, 0.0, 3);
        assert_eq!(layout.measure(), None);
    }
}
