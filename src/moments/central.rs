use crate::numerics::Scalar;
use crate::moments::order::{Order, SupportedOrder};
use crate::moments::spatial::Spatial;
use crate::moments::storage::Storage;

/// The moments taken about the centroid, which makes them invariant to translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Central<T: Scalar, const ORDER: usize>(pub(crate) <Order<ORDER> as SupportedOrder<T>>::Storage)
where
    Order<ORDER>: SupportedOrder<T>;

impl_moment_representation!(Central, "mu");

impl<'a, T: Scalar, const ORDER: usize> From<&'a Spatial<T, ORDER>> for Central<T, ORDER>
where
    Order<ORDER>: SupportedOrder<T>,
{
    fn from(spatial: &'a Spatial<T, ORDER>) -> Self {
        let mut central = <Order<ORDER> as SupportedOrder<T>>::Storage::zeros();
        <Order<ORDER> as CentralMoments<T>>::derive_central(&spatial.0, &mut central);
        Self(central)
    }
}

/**
 * Expands (x - cx)^i * (y - cy)^j binomially so the central moments follow from the raw ones alone.
 * `central` has to be zeroed. A zero m00 is not guarded against and yields NaN.
 */
pub trait CentralMoments<T: Scalar> {
    type Centroid;

    fn derive_central<S: Storage<T>>(spatial: &S, central: &mut S) -> Self::Centroid;
}

impl<T: Scalar> CentralMoments<T> for Order<0> {
    type Centroid = ();

    fn derive_central<S: Storage<T>>(spatial: &S, central: &mut S) -> Self::Centroid {
        *central.get_mut::<0, 0>() = spatial.get::<0, 0>();
    }
}

impl<T: Scalar> CentralMoments<T> for Order<1> {
    type Centroid = (T, T);

    fn derive_central<S: Storage<T>>(spatial: &S, central: &mut S) -> Self::Centroid {
        Order::<0>::derive_central(spatial, central);
        // mu10 and mu01 vanish identically and stay zero
        let m00 = spatial.get::<0, 0>();
        (spatial.get::<1, 0>() / m00, spatial.get::<0, 1>() / m00)
    }
}

impl<T: Scalar> CentralMoments<T> for Order<2> {
    type Centroid = (T, T);

    fn derive_central<S: Storage<T>>(spatial: &S, central: &mut S) -> Self::Centroid {
        let (cx, cy) = Order::<1>::derive_central(spatial, central);

        *central.get_mut::<2, 0>() = spatial.get::<2, 0>() - spatial.get::<1, 0>() * cx;
        *central.get_mut::<1, 1>() = spatial.get::<1, 1>() - spatial.get::<1, 0>() * cy;
        *central.get_mut::<0, 2>() = spatial.get::<0, 2>() - spatial.get::<0, 1>() * cy;

        (cx, cy)
    }
}

impl<T: Scalar> CentralMoments<T> for Order<3> {
    type Centroid = (T, T);

    fn derive_central<S: Storage<T>>(spatial: &S, central: &mut S) -> Self::Centroid {
        let (cx, cy) = Order::<2>::derive_central(spatial, central);
        let mu20 = central.get::<2, 0>();
        let mu02 = central.get::<0, 2>();
        let mu11_2 = central.get::<1, 1>() * T::TWO;

        *central.get_mut::<3, 0>() = spatial.get::<3, 0>()
            - cx * T::THREE.mul_add(mu20, cx * spatial.get::<1, 0>());

        *central.get_mut::<2, 1>() = spatial.get::<2, 1>()
            - cx * spatial.get::<0, 1>().mul_add(cx, mu11_2)
            - cy * mu20;

        *central.get_mut::<1, 2>() = spatial.get::<1, 2>()
            - cy * spatial.get::<1, 0>().mul_add(cy, mu11_2)
            - cx * mu02;

        *central.get_mut::<0, 3>() = spatial.get::<0, 3>()
            - cy * T::THREE.mul_add(mu02, cy * spatial.get::<0, 1>());

        (cx, cy)
    }
}
