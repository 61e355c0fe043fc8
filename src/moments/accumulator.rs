use crate::numerics::Scalar;
use crate::moments::order::Order;
use crate::moments::storage::Storage;

/// Adds a single unit weight point to the raw moment sums. Higher orders call the lower ones first.
pub trait PointAccumulator<T: Scalar> {
    fn accumulate_point<S: Storage<T>>(storage: &mut S, x: T, y: T);
}

impl<T: Scalar> PointAccumulator<T> for Order<0> {
    fn accumulate_point<S: Storage<T>>(storage: &mut S, _x: T, _y: T) {
        *storage.get_mut::<0, 0>() += T::ONE;
    }
}

impl<T: Scalar> PointAccumulator<T> for Order<1> {
    fn accumulate_point<S: Storage<T>>(storage: &mut S, x: T, y: T) {
        Order::<0>::accumulate_point(storage, x, y);
        *storage.get_mut::<1, 0>() += x;
        *storage.get_mut::<0, 1>() += y;
    }
}

impl<T: Scalar> PointAccumulator<T> for Order<2> {
    fn accumulate_point<S: Storage<T>>(storage: &mut S, x: T, y: T) {
        Order::<1>::accumulate_point(storage, x, y);
        *storage.get_mut::<2, 0>() += x.powi(2);
        *storage.get_mut::<1, 1>() += x * y;
        *storage.get_mut::<0, 2>() += y.powi(2);
    }
}

impl<T: Scalar> PointAccumulator<T> for Order<3> {
    fn accumulate_point<S: Storage<T>>(storage: &mut S, x: T, y: T) {
        Order::<2>::accumulate_point(storage, x, y);
        *storage.get_mut::<3, 0>() += x.powi(3);
        *storage.get_mut::<2, 1>() += x.powi(2) * y;
        *storage.get_mut::<1, 2>() += x * y.powi(2);
        *storage.get_mut::<0, 3>() += y.powi(3);
    }
}

/// A directed polygon edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<T: Scalar> {
    pub from: (T, T),
    pub to: (T, T)
}

/**
 * Area moments of a closed polygon via Green's theorem.
 * Every edge contributes its cross product times a polynomial in its end points.
 * The sums are only scaled to the actual integrals in `finalize`.
 */
pub trait ContourAccumulator<T: Scalar> {
    type EdgeTerms;

    fn accumulate_edge<S: Storage<T>>(storage: &mut S, edge: &Edge<T>) -> Self::EdgeTerms;

    /// `sign` is the sign of the unscaled m00, so both windings give a positive area.
    fn finalize<S: Storage<T>>(storage: &mut S, sign: T);
}

impl<T: Scalar> ContourAccumulator<T> for Order<0> {
    type EdgeTerms = T;

    fn accumulate_edge<S: Storage<T>>(storage: &mut S, edge: &Edge<T>) -> Self::EdgeTerms {
        let cross = edge.from.0.mul_add(edge.to.1, -(edge.to.0 * edge.from.1));
        *storage.get_mut::<0, 0>() += cross;
        cross
    }

    fn finalize<S: Storage<T>>(storage: &mut S, sign: T) {
        *storage.get_mut::<0, 0>() *= T::F1_2.copysign(sign);
    }
}

impl<T: Scalar> ContourAccumulator<T> for Order<1> {
    type EdgeTerms = (T, (T, T));

    fn accumulate_edge<S: Storage<T>>(storage: &mut S, edge: &Edge<T>) -> Self::EdgeTerms {
        let cross = Order::<0>::accumulate_edge(storage, edge);
        let sum = (edge.from.0 + edge.to.0, edge.from.1 + edge.to.1);

        let m10 = storage.get_mut::<1, 0>();
        *m10 = cross.mul_add(sum.0, *m10);
        let m01 = storage.get_mut::<0, 1>();
        *m01 = cross.mul_add(sum.1, *m01);

        (cross, sum)
    }

    fn finalize<S: Storage<T>>(storage: &mut S, sign: T) {
        Order::<0>::finalize(storage, sign);
        let f1_6 = T::F1_6.copysign(sign);
        *storage.get_mut::<1, 0>() *= f1_6;
        *storage.get_mut::<0, 1>() *= f1_6;
    }
}

impl<T: Scalar> ContourAccumulator<T> for Order<2> {
    type EdgeTerms = (T, (T, T), (T, T));

    fn accumulate_edge<S: Storage<T>>(storage: &mut S, edge: &Edge<T>) -> Self::EdgeTerms {
        let (cross, sum) = Order::<1>::accumulate_edge(storage, edge);
        let (x0, y0) = edge.from;
        let (x1, y1) = edge.to;
        let to_squared = (x1.powi(2), y1.powi(2));

        let m20 = storage.get_mut::<2, 0>();
        *m20 = cross.mul_add(x0.mul_add(sum.0, to_squared.0), *m20);

        let m11 = storage.get_mut::<1, 1>();
        *m11 = cross.mul_add(x0.mul_add(sum.1 + y0, x1 * (sum.1 + y1)), *m11);

        let m02 = storage.get_mut::<0, 2>();
        *m02 = cross.mul_add(y0.mul_add(sum.1, to_squared.1), *m02);

        (cross, sum, to_squared)
    }

    fn finalize<S: Storage<T>>(storage: &mut S, sign: T) {
        Order::<1>::finalize(storage, sign);
        let f1_12 = T::F1_12.copysign(sign);
        *storage.get_mut::<2, 0>() *= f1_12;
        *storage.get_mut::<0, 2>() *= f1_12;
        *storage.get_mut::<1, 1>() *= T::F1_24.copysign(sign);
    }
}

impl<T: Scalar> ContourAccumulator<T> for Order<3> {
    type EdgeTerms = ();

    fn accumulate_edge<S: Storage<T>>(storage: &mut S, edge: &Edge<T>) -> Self::EdgeTerms {
        let (cross, sum, to_squared) = Order::<2>::accumulate_edge(storage, edge);
        let (x0, y0) = edge.from;
        let (x1, y1) = edge.to;
        let from_squared = (x0.powi(2), y0.powi(2));

        let m30 = storage.get_mut::<3, 0>();
        *m30 = cross.mul_add(sum.0 * (from_squared.0 + to_squared.0), *m30);

        let m03 = storage.get_mut::<0, 3>();
        *m03 = cross.mul_add(sum.1 * (from_squared.1 + to_squared.1), *m03);

        let m21 = storage.get_mut::<2, 1>();
        *m21 = cross.mul_add(
            from_squared.0 * T::THREE.mul_add(y0, y1)
                + T::TWO * x1 * x0 * sum.1
                + to_squared.0 * T::THREE.mul_add(y1, y0),
            *m21);

        let m12 = storage.get_mut::<1, 2>();
        *m12 = cross.mul_add(
            from_squared.1 * T::THREE.mul_add(x0, x1)
                + T::TWO * y1 * y0 * sum.0
                + to_squared.1 * T::THREE.mul_add(x1, x0),
            *m12);
    }

    fn finalize<S: Storage<T>>(storage: &mut S, sign: T) {
        Order::<2>::finalize(storage, sign);
        let f1_20 = T::F1_20.copysign(sign);
        let f1_60 = T::F1_60.copysign(sign);
        *storage.get_mut::<3, 0>() *= f1_20;
        *storage.get_mut::<2, 1>() *= f1_60;
        *storage.get_mut::<1, 2>() *= f1_60;
        *storage.get_mut::<0, 3>() *= f1_20;
    }
}
