use crate::numerics::Scalar;
use crate::moments::storage::Storage;
use crate::moments::accumulator::{PointAccumulator,ContourAccumulator};
use crate::moments::central::CentralMoments;
use crate::moments::normalized_central::NormalizedCentralMoments;

/// The maximum total degree i + j of the moments a structure holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Order<const O: usize>;

/**
 * Implemented for the orders 0 to 3 only. Naming a moment structure of any other order does not compile.
 * The supertraits carry the per order formulas and can not be implemented outside of this crate.
 */
pub trait SupportedOrder<T: Scalar>: PointAccumulator<T> + ContourAccumulator<T> + CentralMoments<T> + NormalizedCentralMoments<T> {
    type Storage: Storage<T>;
}

impl<T: Scalar> SupportedOrder<T> for Order<0> {
    type Storage = [T; 1];
}

impl<T: Scalar> SupportedOrder<T> for Order<1> {
    type Storage = [T; 3];
}

impl<T: Scalar> SupportedOrder<T> for Order<2> {
    type Storage = [T; 6];
}

impl<T: Scalar> SupportedOrder<T> for Order<3> {
    type Storage = [T; 10];
}
