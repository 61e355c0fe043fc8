extern crate nalgebra as na;
extern crate num_traits;

use na::{Point2,Vector2};
use num_traits::ToPrimitive;
use crate::numerics::Scalar;

/**
 * Anything that has an x and a y coordinate which can be read as the scalar type S.
 * Implement this for custom point types to feed them into the moment computations.
 */
pub trait Point<S: Scalar> {
    fn x(&self) -> S;
    fn y(&self) -> S;
}

impl<S: Scalar, P: Point<S> + ?Sized> Point<S> for &P {
    #[inline(always)]
    fn x(&self) -> S { (**self).x() }

    #[inline(always)]
    fn y(&self) -> S { (**self).y() }
}

impl<S: Scalar, C: ToPrimitive + Copy> Point<S> for (C,C) {
    #[inline(always)]
    fn x(&self) -> S { S::from_primitive(self.0) }

    #[inline(always)]
    fn y(&self) -> S { S::from_primitive(self.1) }
}

impl<S: Scalar, C: ToPrimitive + Copy> Point<S> for [C;2] {
    #[inline(always)]
    fn x(&self) -> S { S::from_primitive(self[0]) }

    #[inline(always)]
    fn y(&self) -> S { S::from_primitive(self[1]) }
}

impl<S: Scalar, C: na::Scalar + ToPrimitive + Copy> Point<S> for Point2<C> {
    #[inline(always)]
    fn x(&self) -> S { S::from_primitive(self.x) }

    #[inline(always)]
    fn y(&self) -> S { S::from_primitive(self.y) }
}

impl<S: Scalar, C: na::Scalar + ToPrimitive + Copy> Point<S> for Vector2<C> {
    #[inline(always)]
    fn x(&self) -> S { S::from_primitive(self.x) }

    #[inline(always)]
    fn y(&self) -> S { S::from_primitive(self.y) }
}
