use super::attribute::WeightedAttribute;
use super::payload::Payload;

/// Running sum of attribute samples with a weighted-mean summary.
///
/// The same accumulator serves every level of the hierarchy: pixels into a
/// superpixel, superpixels into a larger segment.
#[derive(Clone, Debug)]
pub struct SegmentAccumulator<T> {
    sum: WeightedAttribute<T>,
}

impl<T: Payload> Default for SegmentAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Payload> SegmentAccumulator<T> {
    pub fn new() -> Self {
        Self {
            sum: WeightedAttribute::zero(),
        }
    }

    pub fn add(&mut self, sample: &WeightedAttribute<T>) {
        self.sum += sample;
    }

    /// True until a sample with nonzero count has been added.
    pub fn empty(&self) -> bool {
        self.sum.count == 0.0
    }

    /// Running sum in sum form. Not a valid input for `add`; merge `mean()`
    /// into a higher-level accumulator instead.
    pub fn sum(&self) -> &WeightedAttribute<T> {
        &self.sum
    }

    /// Weighted mean of all samples.
    ///
    /// Fields other than `count` are true averages; `count` keeps the raw
    /// accumulated weight so the summary still records how many samples
    /// contributed. An empty accumulator returns the zero bundle.
    pub fn mean(&self) -> WeightedAttribute<T> {
        if self.empty() {
            return self.sum.clone();
        }
        let mut seg = (1.0 / self.sum.count) * &self.sum;
        seg.count = self.sum.count;
        seg
    }
}

impl<'a, T: Payload + 'a> Extend<&'a WeightedAttribute<T>> for SegmentAccumulator<T> {
    fn extend<I: IntoIterator<Item = &'a WeightedAttribute<T>>>(&mut self, iter: I) {
        for sample in iter {
            self.add(sample);
        }
    }
}

impl<T: Payload> Extend<WeightedAttribute<T>> for SegmentAccumulator<T> {
    fn extend<I: IntoIterator<Item = WeightedAttribute<T>>>(&mut self, iter: I) {
        for sample in iter {
            self.add(&sample);
        }
    }
}

impl<T: Payload> FromIterator<WeightedAttribute<T>> for SegmentAccumulator<T> {
    fn from_iter<I: IntoIterator<Item = WeightedAttribute<T>>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl<'a, T: Payload + 'a> FromIterator<&'a WeightedAttribute<T>> for SegmentAccumulator<T> {
    fn from_iter<I: IntoIterator<Item = &'a WeightedAttribute<T>>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
