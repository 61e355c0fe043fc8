use crate::numerics::Scalar;
use crate::moments::central::Central;
use crate::moments::order::{Order, SupportedOrder};
use crate::moments::storage::Storage;

/**
 * Central moments divided by mu00^((i+j)/2 + 1), which makes them invariant to translation.
 * Scale cancels only for area moments (`Spatial::from_contour`); for unit-weight point sums
 * an entry of order k still grows with s^k.
 * By convention nu00 is one and nu10, nu01 are zero.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedCentral<T: Scalar, const ORDER: usize>(pub(crate) <Order<ORDER> as SupportedOrder<T>>::Storage)
where
    Order<ORDER>: SupportedOrder<T>;

impl_moment_representation!(NormalizedCentral, "nu");

impl<'a, T: Scalar, const ORDER: usize> From<&'a Central<T, ORDER>> for NormalizedCentral<T, ORDER>
where
    Order<ORDER>: SupportedOrder<T>,
{
    fn from(central: &'a Central<T, ORDER>) -> Self {
        let mut normalized = <Order<ORDER> as SupportedOrder<T>>::Storage::zeros();
        <Order<ORDER> as NormalizedCentralMoments<T>>::derive_normalized(&central.0, &mut normalized);
        Self(normalized)
    }
}

impl<T: Scalar> NormalizedCentral<T, 3> {
    /// The seven rotation invariants of Hu (1962).
    pub fn hu_invariants(&self) -> [T; 7] {
        let n = &self.0;
        let four = T::TWO * T::TWO;

        let diff_20_02 = n.get::<2, 0>() - n.get::<0, 2>();
        let sum_30_12 = n.get::<3, 0>() + n.get::<1, 2>();
        let sum_21_03 = n.get::<2, 1>() + n.get::<0, 3>();
        let sum_30_12_2 = sum_30_12.powi(2);
        let sum_21_03_2 = sum_21_03.powi(2);
        let diff_30_3_12 = n.get::<3, 0>() - T::THREE * n.get::<1, 2>();
        let diff_3_21_03 = T::THREE * n.get::<2, 1>() - n.get::<0, 3>();
        let tail = sum_21_03 * (T::THREE * sum_30_12_2 - sum_21_03_2);

        [
            n.get::<2, 0>() + n.get::<0, 2>(),
            diff_20_02.powi(2) + four * n.get::<1, 1>().powi(2),
            diff_30_3_12.powi(2) + diff_3_21_03.powi(2),
            sum_30_12_2 + sum_21_03_2,
            diff_30_3_12 * sum_30_12 * (sum_30_12_2 - T::THREE * sum_21_03_2) + diff_3_21_03 * tail,
            diff_20_02 * (sum_30_12_2 - sum_21_03_2) + four * n.get::<1, 1>() * sum_30_12 * sum_21_03,
            diff_3_21_03 * sum_30_12 * (sum_30_12_2 - T::THREE * sum_21_03_2) - diff_30_3_12 * tail,
        ]
    }
}

/// `normalized` has to be zeroed. Returns the scale factors so higher orders can reuse them.
pub trait NormalizedCentralMoments<T: Scalar> {
    type Scales;

    fn derive_normalized<S: Storage<T>>(central: &S, normalized: &mut S) -> Self::Scales;
}

impl<T: Scalar> NormalizedCentralMoments<T> for Order<0> {
    type Scales = T;

    fn derive_normalized<S: Storage<T>>(central: &S, normalized: &mut S) -> Self::Scales {
        *normalized.get_mut::<0, 0>() = T::ONE;
        T::ONE / central.get::<0, 0>()
    }
}

impl<T: Scalar> NormalizedCentralMoments<T> for Order<1> {
    type Scales = T;

    fn derive_normalized<S: Storage<T>>(central: &S, normalized: &mut S) -> Self::Scales {
        // nu10 and nu01 are zero just like their central counterparts
        Order::<0>::derive_normalized(central, normalized)
    }
}

impl<T: Scalar> NormalizedCentralMoments<T> for Order<2> {
    type Scales = (T, T);

    fn derive_normalized<S: Storage<T>>(central: &S, normalized: &mut S) -> Self::Scales {
        let inv_mu00 = Order::<1>::derive_normalized(central, normalized);
        let s2 = inv_mu00 * inv_mu00;

        *normalized.get_mut::<2, 0>() = central.get::<2, 0>() * s2;
        *normalized.get_mut::<1, 1>() = central.get::<1, 1>() * s2;
        *normalized.get_mut::<0, 2>() = central.get::<0, 2>() * s2;

        (inv_mu00, s2)
    }
}

impl<T: Scalar> NormalizedCentralMoments<T> for Order<3> {
    type Scales = (T, T, T);

    fn derive_normalized<S: Storage<T>>(central: &S, normalized: &mut S) -> Self::Scales {
        let (inv_mu00, s2) = Order::<2>::derive_normalized(central, normalized);
        let s3 = s2 * inv_mu00.abs().sqrt();

        *normalized.get_mut::<3, 0>() = central.get::<3, 0>() * s3;
        *normalized.get_mut::<2, 1>() = central.get::<2, 1>() * s3;
        *normalized.get_mut::<1, 2>() = central.get::<1, 2>() * s3;
        *normalized.get_mut::<0, 3>() = central.get::<0, 3>() * s3;

        (inv_mu00, s2, s3)
    }
}
