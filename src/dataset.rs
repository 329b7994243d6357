use binplot_helpers::Float;
use ndarray::{Array1, Array2, ArrayView2, Axis, arr2, concatenate};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Label given to the first class of a binary dataset.
pub const POSITIVE_LABEL: f64 = 1.0;
/// Label given to the second class of a binary dataset.
pub const NEGATIVE_LABEL: f64 = 0.0;

/// Toy class 1: row 0 holds x, row 1 holds y.
pub const CLASS_ONE: [[f64; 7]; 2] = [
    [17.0, 12.0, 13.0, 15.0, 15.0, 20.0, 20.0],
    [10.0, 12.0, 14.0, 15.0, 20.0, 15.0, 20.0],
];

/// Toy class 2, given as 14 values laid out row-major into a 2×7 block.
pub const CLASS_TWO_VALUES: [f64; 14] = [
    4.0, 7.5, 10.0, 11.0, 5.0, 5.0, 6.0, 8.0, 5.0, 0.0, 5.0, 0.0, 10.0, 6.0,
];

const CLASS_TWO: [[f64; 7]; 2] = [
    [4.0, 7.5, 10.0, 11.0, 5.0, 5.0, 6.0],
    [8.0, 5.0, 0.0, 5.0, 0.0, 10.0, 6.0],
];

/// Errors that can occur when assembling a labeled dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// Points must be a 2×N array.
    NotTwoDimensional { rows: usize },
    /// There must be one label per point.
    LabelCountMismatch { points: usize, labels: usize },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::NotTwoDimensional { rows } => {
                write!(f, "Points must have 2 rows (x and y), got {}", rows)
            }
            DatasetError::LabelCountMismatch { points, labels } => write!(
                f,
                "Expected one label per point: {} points but {} labels",
                points, labels
            ),
        }
    }
}

impl Error for DatasetError {}

/// 2D points stored column-wise with a parallel label per column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct LabeledDataset<F> {
    points: Array2<F>,
    labels: Array1<F>,
}

impl<F: Float> LabeledDataset<F> {
    /// Wraps `points` (2×N) and `labels` (N).
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::NotTwoDimensional` if `points` does not have 2 rows.
    /// Returns `DatasetError::LabelCountMismatch` if the counts differ.
    pub fn new(points: Array2<F>, labels: Array1<F>) -> Result<Self, DatasetError> {
        if points.nrows() != 2 {
            return Err(DatasetError::NotTwoDimensional {
                rows: points.nrows(),
            });
        }
        if points.ncols() != labels.len() {
            return Err(DatasetError::LabelCountMismatch {
                points: points.ncols(),
                labels: labels.len(),
            });
        }
        Ok(Self { points, labels })
    }

    /// Concatenates two classes column-wise; the first block is labeled
    /// `POSITIVE_LABEL`, the second `NEGATIVE_LABEL`.
    pub fn from_classes(
        positive: ArrayView2<F>,
        negative: ArrayView2<F>,
    ) -> Result<Self, DatasetError> {
        for rows in [positive.nrows(), negative.nrows()] {
            if rows != 2 {
                return Err(DatasetError::NotTwoDimensional { rows });
            }
        }
        let points = concatenate![Axis(1), positive, negative];
        let labels = Self::block_labels(positive.ncols(), negative.ncols());
        Ok(Self { points, labels })
    }

    fn block_labels(positives: usize, negatives: usize) -> Array1<F> {
        let one = F::one();
        let zero = F::zero();
        std::iter::repeat_n(one, positives)
            .chain(std::iter::repeat_n(zero, negatives))
            .collect()
    }

    pub fn points(&self) -> ArrayView2<F> {
        self.points.view()
    }

    pub fn labels(&self) -> &Array1<F> {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The 2×K block of points whose label equals `label`, in dataset order.
    pub fn split_by_label(&self, label: F) -> Array2<F> {
        let columns: Vec<usize> = self
            .labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == label)
            .map(|(i, _)| i)
            .collect();
        self.points.select(Axis(1), &columns)
    }

    /// Number of points labeled 1 and labeled 0.
    pub fn class_sizes(&self) -> (usize, usize) {
        let positives = self.labels.iter().filter(|&&l| l == F::one()).count();
        let negatives = self.labels.iter().filter(|&&l| l == F::zero()).count();
        (positives, negatives)
    }
}

pub fn class_one() -> Array2<f64> {
    arr2(&CLASS_ONE)
}

pub fn class_two() -> Array2<f64> {
    arr2(&CLASS_TWO)
}

/// The built-in 14 point toy dataset: class 1 first (label 1), class 2 after (label 0).
pub fn toy_dataset() -> LabeledDataset<f64> {
    let first = class_one();
    let second = class_two();
    let points = concatenate![Axis(1), first, second];
    let labels = LabeledDataset::<f64>::block_labels(first.ncols(), second.ncols());
    LabeledDataset { points, labels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, array};

    #[test]
    fn test_toy_labels_layout() {
        let data = toy_dataset();
        assert_eq!(data.labels().len(), 14);
        assert!(data.labels().iter().take(7).all(|&l| l == POSITIVE_LABEL));
        assert!(data.labels().iter().skip(7).all(|&l| l == NEGATIVE_LABEL));
        assert_eq!(data.class_sizes(), (7, 7));
    }

    #[test]
    fn test_toy_points_match_labels() {
        let data = toy_dataset();
        assert_eq!(data.points().nrows(), 2);
        assert_eq!(data.points().ncols(), data.labels().len());
        assert_eq!(data.len(), 14);
    }

    #[test]
    fn test_class_two_is_row_major_reshape() {
        let reshaped = Array::from(CLASS_TWO_VALUES.to_vec())
            .into_shape_with_order((2, 7))
            .unwrap();
        assert_eq!(reshaped, class_two());
    }

    #[test]
    fn test_split_by_label_recovers_classes() {
        let data = toy_dataset();
        assert_eq!(data.split_by_label(POSITIVE_LABEL), class_one());
        assert_eq!(data.split_by_label(NEGATIVE_LABEL), class_two());
        assert_eq!(data.split_by_label(2.0).ncols(), 0);
    }

    #[test]
    fn test_from_classes_uneven_blocks() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![[7.0], [8.0]];
        let data = LabeledDataset::from_classes(a.view(), b.view()).unwrap();
        assert_eq!(data.labels(), &array![1.0, 1.0, 1.0, 0.0]);
        assert_eq!(data.split_by_label(0.0), b);
    }

    #[test]
    fn test_from_classes_empty_class() {
        let a = array![[1.0_f32], [2.0]];
        let empty = Array2::<f32>::zeros((2, 0));
        let data = LabeledDataset::from_classes(a.view(), empty.view()).unwrap();
        assert_eq!(data.class_sizes(), (1, 0));
    }

    #[test]
    fn test_from_classes_rejects_bad_block() {
        let ok = array![[1.0, 2.0], [3.0, 4.0]];
        let one_row = array![[5.0, 6.0]];
        let result = LabeledDataset::from_classes(ok.view(), one_row.view());
        assert_eq!(result, Err(DatasetError::NotTwoDimensional { rows: 1 }));

        let result = LabeledDataset::from_classes(one_row.view(), ok.view());
        assert_eq!(result, Err(DatasetError::NotTwoDimensional { rows: 1 }));
    }

    #[test]
    fn test_new_rejects_bad_shapes() {
        let three_rows = Array2::<f64>::zeros((3, 4));
        let result = LabeledDataset::new(three_rows, Array1::zeros(4));
        assert!(matches!(result, Err(DatasetError::NotTwoDimensional { rows: 3 })));

        let result = LabeledDataset::new(Array2::<f64>::zeros((2, 4)), Array1::zeros(5));
        assert_eq!(
            result,
            Err(DatasetError::LabelCountMismatch {
                points: 4,
                labels: 5
            })
        );
    }
}
