use super::node::Label;
use crate::error::Result;

/// Common interface for clusterers that label raw coordinate vectors.
pub trait Clustering {
    /// Fit and return one label per input point, in input order.
    ///
    /// No returned label is [`Label::Unassigned`].
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<Label>>;
}
