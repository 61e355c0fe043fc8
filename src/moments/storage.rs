use std::fmt;
use crate::numerics::Scalar;

/**
 * Triangular array holding one value for every (i,j) with i + j <= ORDER.
 * Values are laid out in rows of constant j: (0,0),(1,0),..,(ORDER,0),(0,1),..
 */
pub trait Storage<T: Scalar>: Copy + fmt::Debug + PartialEq {
    const ORDER: usize;

    fn zeros() -> Self;

    /// I + J must be <= Self::ORDER
    fn get<const I: usize, const J: usize>(&self) -> T;

    /// I + J must be <= Self::ORDER
    fn get_mut<const I: usize, const J: usize>(&mut self) -> &mut T;

    fn values(&self) -> &[T];
    fn values_mut(&mut self) -> &mut [T];

    fn lookup(&self, i: usize, j: usize) -> Option<T> {
        match i + j <= Self::ORDER {
            true => self.values().get(position(i, j, Self::ORDER)).copied(),
            false => None
        }
    }
}

pub const fn calculate_space(order: usize) -> usize {
    (order + 1) * (order + 2) / 2
}

pub const fn position(i: usize, j: usize, order: usize) -> usize {
    j * (order + 1) - j * j.saturating_sub(1) / 2 + i
}

macro_rules! impl_storage_for_order {
    ($order:expr => $size:expr) => {
        const _: () = assert!(calculate_space($order) == $size);

        impl<T: Scalar> Storage<T> for [T; $size] {
            const ORDER: usize = $order;

            #[inline(always)]
            fn zeros() -> Self {
                [T::ZERO; $size]
            }

            #[inline(always)]
            fn get<const I: usize, const J: usize>(&self) -> T {
                self[position(I, J, $order)]
            }

            #[inline(always)]
            fn get_mut<const I: usize, const J: usize>(&mut self) -> &mut T {
                &mut self[position(I, J, $order)]
            }

            #[inline(always)]
            fn values(&self) -> &[T] {
                self
            }

            #[inline(always)]
            fn values_mut(&mut self) -> &mut [T] {
                self
            }
        }
    }
}

impl_storage_for_order!(0 => 1);
impl_storage_for_order!(1 => 3);
impl_storage_for_order!(2 => 6);
impl_storage_for_order!(3 => 10);

/// Writes `m00 = .., m10 = .., ..` in storage order using the given prefix.
pub fn write_moments<T: Scalar, S: Storage<T>>(f: &mut fmt::Formatter, prefix: &str, storage: &S) -> fmt::Result {
    let mut first = true;
    for j in 0..=S::ORDER {
        for i in 0..=(S::ORDER - j) {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}{}{} = {}", prefix, i, j, storage.values()[position(i, j, S::ORDER)])?;
        }
    }
    Ok(())
}
