use crate::error::MomentError;
use crate::numerics::Scalar;

pub use self::index::{Index, SupportedIndex};
pub use self::order::{Order, SupportedOrder};

/**
 * Read access shared by all moment representations, so downstream code can be written once.
 */
pub trait Moments<T: Scalar, const ORDER: usize> {
    /// The moment of x^I * y^J. Indices outside of ORDER do not compile.
    fn get<const I: usize, const J: usize>(&self) -> T
    where
        Index<I, J>: SupportedIndex<ORDER>;

    /// The moment of x^i * y^j for indices only known at runtime.
    fn try_get(&self, i: usize, j: usize) -> Result<T, MomentError>;
}

/// Boilerplate every representation shares: contract, default, display and precision casts.
macro_rules! impl_moment_representation {
    ($name:ident, $prefix:expr) => {
        impl<T: Scalar, const ORDER: usize> crate::moments::Moments<T, ORDER> for $name<T, ORDER>
        where
            Order<ORDER>: SupportedOrder<T>,
        {
            #[inline(always)]
            fn get<const I: usize, const J: usize>(&self) -> T
            where
                crate::moments::Index<I, J>: crate::moments::SupportedIndex<ORDER>,
            {
                self.0.get::<I, J>()
            }

            fn try_get(&self, i: usize, j: usize) -> Result<T, crate::error::MomentError> {
                self.0.lookup(i, j).ok_or(crate::error::MomentError::IndexOutOfOrder { i, j, order: ORDER })
            }
        }

        impl<T: Scalar, const ORDER: usize> Default for $name<T, ORDER>
        where
            Order<ORDER>: SupportedOrder<T>,
        {
            fn default() -> Self {
                Self(<Order<ORDER> as SupportedOrder<T>>::Storage::zeros())
            }
        }

        impl<T: Scalar, const ORDER: usize> std::fmt::Display for $name<T, ORDER>
        where
            Order<ORDER>: SupportedOrder<T>,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                crate::moments::storage::write_moments::<T, _>(f, $prefix, &self.0)
            }
        }

        impl<T: Scalar, const ORDER: usize> $name<T, ORDER>
        where
            Order<ORDER>: SupportedOrder<T>,
        {
            /// Converts every moment into another floating-point precision.
            pub fn cast<F2: Scalar + simba::scalar::SupersetOf<T>>(&self) -> $name<F2, ORDER>
            where
                Order<ORDER>: SupportedOrder<F2>,
            {
                let mut storage = <Order<ORDER> as SupportedOrder<F2>>::Storage::zeros();
                for (target, value) in storage.values_mut().iter_mut().zip(self.0.values()) {
                    *target = nalgebra::convert(*value);
                }
                $name(storage)
            }
        }
    };
}

pub mod storage;
pub mod order;
pub mod index;
pub mod accumulator;
pub mod spatial;
pub mod central;
pub mod normalized_central;
