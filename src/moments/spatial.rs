use std::iter::FromIterator;

use crate::geometry::point::Point;
use crate::numerics::Scalar;
use crate::moments::accumulator::{ContourAccumulator, Edge, PointAccumulator};
use crate::moments::order::{Order, SupportedOrder};
use crate::moments::storage::Storage;

/// The raw moments of a point set, taken about the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spatial<T: Scalar, const ORDER: usize>(pub(crate) <Order<ORDER> as SupportedOrder<T>>::Storage)
where
    Order<ORDER>: SupportedOrder<T>;

impl_moment_representation!(Spatial, "m");

impl<T: Scalar, const ORDER: usize> Spatial<T, ORDER>
where
    Order<ORDER>: SupportedOrder<T>,
{
    /**
     * Sums x^i * y^j over all points with unit weight, in input order.
     * An empty sequence gives all zeros.
     */
    pub fn from_points<P: Point<T>, I: IntoIterator<Item = P>>(points: I) -> Self {
        let mut storage = <Order<ORDER> as SupportedOrder<T>>::Storage::zeros();
        for point in points {
            <Order<ORDER> as PointAccumulator<T>>::accumulate_point(&mut storage, point.x(), point.y());
        }
        Self(storage)
    }

    /**
     * Area moments of the closed polygon through the given vertices, the last vertex connecting back to the first.
     * The result does not depend on the winding direction. Fewer than three vertices enclose no area.
     * Self-intersecting polygons are not supported: lobes of opposite winding cancel, and the sign
     * is taken from the net area only.
     */
    pub fn from_contour<P: Point<T>, I: IntoIterator<Item = P>>(vertices: I) -> Self {
        let mut vertices = vertices.into_iter().map(|p| (p.x(), p.y()));
        let first = match vertices.next() {
            Some(vertex) => vertex,
            None => return Self::default()
        };

        let mut storage = <Order<ORDER> as SupportedOrder<T>>::Storage::zeros();
        let mut from = first;
        for to in vertices {
            <Order<ORDER> as ContourAccumulator<T>>::accumulate_edge(&mut storage, &Edge { from, to });
            from = to;
        }
        <Order<ORDER> as ContourAccumulator<T>>::accumulate_edge(&mut storage, &Edge { from, to: first });

        let sign = T::ONE.copysign(storage.get::<0, 0>());
        <Order<ORDER> as ContourAccumulator<T>>::finalize(&mut storage, sign);
        Self(storage)
    }
}

impl<T: Scalar, P: Point<T>, const ORDER: usize> FromIterator<P> for Spatial<T, ORDER>
where
    Order<ORDER>: SupportedOrder<T>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
