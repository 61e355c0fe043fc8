extern crate nalgebra as na;

use na::{Matrix2,Point2};
use crate::geometry::point::Point;
use crate::moments::{Index, Moments, SupportedIndex};
use crate::moments::spatial::Spatial;
use crate::moments::central::Central;
use crate::moments::normalized_central::NormalizedCentral;
use crate::numerics::Scalar;

pub mod descriptor_parameters;

use self::descriptor_parameters::{DescriptorParameters,PointSource};

/// Mass weighted mean position. Expects spatial moments.
pub fn centroid<T: Scalar, M: Moments<T, ORDER>, const ORDER: usize>(spatial: &M) -> Point2<T>
where
    Index<0, 0>: SupportedIndex<ORDER>,
    Index<1, 0>: SupportedIndex<ORDER>,
    Index<0, 1>: SupportedIndex<ORDER>,
{
    let m00 = spatial.get::<0, 0>();
    Point2::new(spatial.get::<1, 0>() / m00, spatial.get::<0, 1>() / m00)
}

/// Second order central moments divided by the mass.
pub fn covariance<T: Scalar, M: Moments<T, ORDER>, const ORDER: usize>(central: &M) -> Matrix2<T>
where
    Index<0, 0>: SupportedIndex<ORDER>,
    Index<2, 0>: SupportedIndex<ORDER>,
    Index<1, 1>: SupportedIndex<ORDER>,
    Index<0, 2>: SupportedIndex<ORDER>,
{
    let mu00 = central.get::<0, 0>();
    let mu11 = central.get::<1, 1>() / mu00;
    Matrix2::new(central.get::<2, 0>() / mu00, mu11,
                 mu11, central.get::<0, 2>() / mu00)
}

/**
 * Angle of the major principal axis against the x-axis in (-pi/2, pi/2].
 * Works on central as well as normalized central moments.
 */
pub fn orientation<T: Scalar, M: Moments<T, ORDER>, const ORDER: usize>(central: &M) -> T
where
    Index<2, 0>: SupportedIndex<ORDER>,
    Index<1, 1>: SupportedIndex<ORDER>,
    Index<0, 2>: SupportedIndex<ORDER>,
{
    let mu11_2 = T::TWO * central.get::<1, 1>();
    T::F1_2 * mu11_2.atan2(central.get::<2, 0>() - central.get::<0, 2>())
}

/**
 * sqrt(1 - minor/major) of the principal axes' variances.
 * 0 for rotationally symmetric sets and single points, approaching 1 for a line.
 * NaN moments give a NaN eccentricity.
 */
pub fn eccentricity<T: Scalar, M: Moments<T, ORDER>, const ORDER: usize>(central: &M) -> T
where
    Index<2, 0>: SupportedIndex<ORDER>,
    Index<1, 1>: SupportedIndex<ORDER>,
    Index<0, 2>: SupportedIndex<ORDER>,
{
    let mu20 = central.get::<2, 0>();
    let mu02 = central.get::<0, 2>();
    let mu11 = central.get::<1, 1>();
    let spread = ((mu20 - mu02).powi(2) + T::TWO * T::TWO * mu11.powi(2)).sqrt();
    let major = mu20 + mu02 + spread;
    let minor = mu20 + mu02 - spread;
    match major == T::ZERO {
        true => T::ZERO,
        false => (T::ONE - minor / major).abs().sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDescriptor<T: Scalar> {
    pub area: T,
    pub centroid: Point2<T>,
    pub orientation: T,
    pub eccentricity: T,
    pub hu_invariants: [T; 7]
}

impl<T: Scalar> ShapeDescriptor<T> {
    pub fn from_points<P: Point<T>, I: IntoIterator<Item = P>>(points: I, parameters: &DescriptorParameters) -> ShapeDescriptor<T> {
        let spatial = match parameters.source {
            PointSource::Pixels => Spatial::<T, 3>::from_points(points),
            PointSource::Contour => Spatial::<T, 3>::from_contour(points)
        };
        ShapeDescriptor::from_spatial(&spatial, parameters)
    }

    pub fn from_spatial(spatial: &Spatial<T, 3>, parameters: &DescriptorParameters) -> ShapeDescriptor<T> {
        let central = Central::from(spatial);
        let normalized = NormalizedCentral::from(&central);

        let descriptor = ShapeDescriptor {
            area: spatial.get::<0, 0>(),
            centroid: centroid(spatial),
            orientation: orientation(&central),
            eccentricity: eccentricity(&central),
            hu_invariants: normalized.hu_invariants()
        };

        if parameters.print {
            match descriptor.is_finite() {
                true => println!("{}: area {}, centroid ({}, {}), orientation {}, eccentricity {}",
                    parameters, descriptor.area, descriptor.centroid.x, descriptor.centroid.y, descriptor.orientation, descriptor.eccentricity),
                false => println!("{}: degenerate point set with area {}, descriptor is not finite", parameters, descriptor.area)
            }
        }

        descriptor
    }

    pub fn is_finite(&self) -> bool {
        self.area.is_finite()
            && self.centroid.x.is_finite()
            && self.centroid.y.is_finite()
            && self.orientation.is_finite()
            && self.eccentricity.is_finite()
            && self.hu_invariants.iter().all(|h| h.is_finite())
    }
}
