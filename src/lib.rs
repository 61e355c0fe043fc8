//! Spatial, central and normalized central moments of point sets up to order 3.
//!
//! The order of a moment structure and every index into it are checked at compile time.
//! An order above 3 does not compile:
//!
//! ```compile_fail
//! use vision_moments::Spatial;
//! let moments: Spatial<f64, 4> = Spatial::from_points(vec![(0.0, 0.0)]);
//! ```
//!
//! Neither does an index beyond the order of the structure:
//!
//! ```compile_fail
//! use vision_moments::{Moments, Spatial};
//! let moments: Spatial<f64, 2> = Spatial::from_points(vec![(0.0, 0.0)]);
//! let m30 = moments.get::<3, 0>();
//! ```
//!
//! ```
//! use vision_moments::{Central, Moments, NormalizedCentral, Spatial};
//! let spatial: Spatial<f64, 3> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)].iter().collect();
//! let central = Central::from(&spatial);
//! let normalized = NormalizedCentral::from(&central);
//! assert_eq!(spatial.get::<0, 0>(), 4.0);
//! assert_eq!(central.get::<1, 1>(), 0.0);
//! assert_eq!(normalized.get::<2, 0>(), 0.0625);
//! ```

pub mod numerics;
pub mod geometry;
pub mod descriptors;
pub mod error;
mod moments;

pub use self::numerics::Scalar;
pub use self::geometry::point::Point;
pub use self::error::MomentError;
pub use self::moments::{Index, Moments, Order, SupportedIndex, SupportedOrder};
pub use self::moments::spatial::Spatial;
pub use self::moments::central::Central;
pub use self::moments::normalized_central::NormalizedCentral;
pub use self::descriptors::{ShapeDescriptor, descriptor_parameters::{DescriptorParameters, PointSource}};

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);
