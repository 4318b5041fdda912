use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;
use crate::error::{BarChartError, BarChartResult};

/// Which sort key a toggle operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortAxis {
    /// Sort by the numeric value (triggered from the strip left of the value axis).
    Value,
    /// Sort lexicographically by name (triggered from the strip below the category axis).
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Ascending => ordering,
            // Equal stays Equal, so reversing preserves sort stability.
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Ordered collection of named samples plus one stored direction per sort axis.
///
/// Membership is fixed after construction; toggling only permutes the order.
/// Each stored direction names the order most recently applied on that axis
/// and starts at `Ascending` for the untouched loaded baseline, so the first
/// toggle on an axis flips it and produces a descending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesState {
    points: Vec<DataPoint>,
    value_direction: SortDirection,
    name_direction: SortDirection,
}

impl SeriesState {
    /// Builds a series from loaded rows, keeping their order as the baseline.
    ///
    /// Rejects duplicate names and non-finite values; an empty series is valid.
    pub fn new(points: Vec<DataPoint>) -> BarChartResult<Self> {
        let mut seen: IndexSet<&str> = IndexSet::with_capacity(points.len());
        for point in &points {
            if !point.value.is_finite() {
                return Err(BarChartError::InvalidData(format!(
                    "value for `{}` must be finite",
                    point.name
                )));
            }
            if !seen.insert(point.name.as_str()) {
                return Err(BarChartError::DuplicateName(point.name.clone()));
            }
        }

        Ok(Self {
            points,
            value_direction: SortDirection::Ascending,
            name_direction: SortDirection::Ascending,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|point| point.name.as_str())
    }

    /// Largest value in the series, `None` when empty.
    #[must_use]
    pub fn value_max(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| OrderedFloat(point.value))
            .max()
            .map(OrderedFloat::into_inner)
    }

    #[must_use]
    pub fn direction(&self, axis: SortAxis) -> SortDirection {
        match axis {
            SortAxis::Value => self.value_direction,
            SortAxis::Name => self.name_direction,
        }
    }

    /// Flips the stored direction for `axis`, then stably re-sorts the points
    /// by that axis' key in the new direction. Ties keep their prior relative
    /// order. Returns the direction that was applied.
    ///
    /// The two axes are independent: toggling one never changes the other's
    /// stored direction.
    pub fn toggle_sort(&mut self, axis: SortAxis) -> SortDirection {
        let direction = match axis {
            SortAxis::Value => {
                self.value_direction = self.value_direction.flipped();
                self.value_direction
            }
            SortAxis::Name => {
                self.name_direction = self.name_direction.flipped();
                self.name_direction
            }
        };

        match axis {
            SortAxis::Value => self.points.sort_by(|a, b| {
                direction.apply(OrderedFloat(a.value).cmp(&OrderedFloat(b.value)))
            }),
            SortAxis::Name => self
                .points
                .sort_by(|a, b| direction.apply(a.name.cmp(&b.name))),
        }

        direction
    }
}
