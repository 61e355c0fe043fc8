use self::private::Sealed;

/// The exponents (I,J) of a single moment x^I * y^J, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Index<const I: usize, const J: usize>;

/// Marks an index as valid for ORDER, i.e. I + J <= ORDER. Sealed.
pub trait SupportedIndex<const ORDER: usize>: Sealed {}

macro_rules! impl_supported_index {
    ($i:literal, $j:literal => $( $order:literal ),+) => {
        impl Sealed for Index<$i, $j> {}
        $(
            impl SupportedIndex<$order> for Index<$i, $j> {}
        )+
    };
}

impl_supported_index!(0, 0 => 0, 1, 2, 3);
impl_supported_index!(1, 0 => 1, 2, 3);
impl_supported_index!(0, 1 => 1, 2, 3);
impl_supported_index!(2, 0 => 2, 3);
impl_supported_index!(1, 1 => 2, 3);
impl_supported_index!(0, 2 => 2, 3);
impl_supported_index!(3, 0 => 3);
impl_supported_index!(2, 1 => 3);
impl_supported_index!(1, 2 => 3);
impl_supported_index!(0, 3 => 3);

mod private {
    pub trait Sealed {}
}
