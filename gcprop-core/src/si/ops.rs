use super::Quantity;
use approx::{AbsDiffEq, RelativeEq};
use ndarray::{Array, ArrayBase, Data, Dimension};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use typenum::{Diff, Integer, Negate, Prod, Quot, Sum};

// Products and quotients of two quantities combine their units, by value
// and by reference.
macro_rules! impl_mul_div {
    ($trait:ident, $method:ident, $unit_trait:ident, $unit_op:ident, $value_op:ident) => {
        impl<T1, T2, U1, U2> $trait<Quantity<T2, U2>> for Quantity<T1, U1>
        where
            T1: $trait<T2>,
            U1: $unit_trait<U2>,
        {
            type Output = Quantity<$value_op<T1, T2>, $unit_op<U1, U2>>;
            fn $method(self, other: Quantity<T2, U2>) -> Self::Output {
                Quantity(self.0.$method(other.0), PhantomData)
            }
        }

        impl<'a, T1, T2, U1, U2> $trait<Quantity<T2, U2>> for &'a Quantity<T1, U1>
        where
            &'a T1: $trait<T2>,
            U1: $unit_trait<U2>,
        {
            type Output = Quantity<$value_op<&'a T1, T2>, $unit_op<U1, U2>>;
            fn $method(self, other: Quantity<T2, U2>) -> Self::Output {
                Quantity((&self.0).$method(other.0), PhantomData)
            }
        }

        impl<'a, 'b, T1, T2, U1, U2> $trait<&'b Quantity<T2, U2>> for &'a Quantity<T1, U1>
        where
            &'a T1: $trait<&'b T2>,
            U1: $unit_trait<U2>,
        {
            type Output = Quantity<$value_op<&'a T1, &'b T2>, $unit_op<U1, U2>>;
            fn $method(self, other: &'b Quantity<T2, U2>) -> Self::Output {
                Quantity((&self.0).$method(&other.0), PhantomData)
            }
        }

        impl<T: $trait<f64>, U> $trait<f64> for Quantity<T, U> {
            type Output = Quantity<$value_op<T, f64>, U>;
            fn $method(self, other: f64) -> Self::Output {
                Quantity(self.0.$method(other), PhantomData)
            }
        }

        impl<'a, T, U> $trait<f64> for &'a Quantity<T, U>
        where
            &'a T: $trait<f64>,
        {
            type Output = Quantity<$value_op<&'a T, f64>, U>;
            fn $method(self, other: f64) -> Self::Output {
                Quantity((&self.0).$method(other), PhantomData)
            }
        }
    };
}

impl_mul_div!(Mul, mul, Add, Sum, Prod);
impl_mul_div!(Div, div, Sub, Diff, Quot);

impl<T, U> Mul<Quantity<T, U>> for f64
where
    f64: Mul<T>,
{
    type Output = Quantity<Prod<f64, T>, U>;
    fn mul(self, other: Quantity<T, U>) -> Self::Output {
        Quantity(self * other.0, PhantomData)
    }
}

impl<T, U> Div<Quantity<T, U>> for f64
where
    U: Neg,
    f64: Div<T>,
{
    type Output = Quantity<Quot<f64, T>, Negate<U>>;
    fn div(self, other: Quantity<T, U>) -> Self::Output {
        Quantity(self / other.0, PhantomData)
    }
}

impl<U, S: Data<Elem = f64>, D: Dimension> Mul<Quantity<f64, U>> for &ArrayBase<S, D> {
    type Output = Quantity<Array<f64, D>, U>;
    fn mul(self, other: Quantity<f64, U>) -> Self::Output {
        Quantity(self * other.0, PhantomData)
    }
}

impl<U, D: Dimension> Mul<Quantity<f64, U>> for Array<f64, D> {
    type Output = Quantity<Array<f64, D>, U>;
    fn mul(self, other: Quantity<f64, U>) -> Self::Output {
        Quantity(self * other.0, PhantomData)
    }
}

impl<U, T1, T2> MulAssign<T2> for Quantity<T1, U>
where
    T1: MulAssign<T2>,
{
    fn mul_assign(&mut self, other: T2) {
        self.0 *= other;
    }
}

// Sums and differences are only defined for equal units.
macro_rules! impl_add_sub {
    ($trait:ident, $method:ident, $value_op:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<T1, T2, U> $trait<Quantity<T2, U>> for Quantity<T1, U>
        where
            T1: $trait<T2>,
        {
            type Output = Quantity<$value_op<T1, T2>, U>;
            fn $method(self, other: Quantity<T2, U>) -> Self::Output {
                Quantity(self.0.$method(other.0), PhantomData)
            }
        }

        impl<'a, 'b, T1, T2, U> $trait<&'b Quantity<T2, U>> for &'a Quantity<T1, U>
        where
            &'a T1: $trait<&'b T2>,
        {
            type Output = Quantity<$value_op<&'a T1, &'b T2>, U>;
            fn $method(self, other: &'b Quantity<T2, U>) -> Self::Output {
                Quantity((&self.0).$method(&other.0), PhantomData)
            }
        }

        impl<T1, T2, U> $assign_trait<Quantity<T2, U>> for Quantity<T1, U>
        where
            T1: $assign_trait<T2>,
        {
            fn $assign_method(&mut self, rhs: Quantity<T2, U>) {
                self.0.$assign_method(rhs.0);
            }
        }
    };
}

impl_add_sub!(Add, add, Sum, AddAssign, add_assign);
impl_add_sub!(Sub, sub, Diff, SubAssign, sub_assign);

impl<T, U> Neg for Quantity<T, U>
where
    T: Neg,
{
    type Output = Quantity<Negate<T>, U>;
    fn neg(self) -> Self::Output {
        Quantity(-self.0, PhantomData)
    }
}

/// Operations for scalars
impl<U> Quantity<f64, U> {
    pub fn powi<E: Integer>(self) -> Quantity<f64, Prod<U, E>>
    where
        U: Mul<E>,
    {
        Quantity(self.0.powi(E::I32), PhantomData)
    }

    pub fn sqrt(self) -> Quantity<f64, Quot<U, typenum::P2>>
    where
        U: Div<typenum::P2>,
    {
        Quantity(self.0.sqrt(), PhantomData)
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs(), PhantomData)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.0.is_sign_negative()
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0), PhantomData)
    }

    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0), PhantomData)
    }
}

/// Comparisons
impl<T: PartialEq, U> PartialEq for Quantity<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: PartialOrd, U> PartialOrd for Quantity<T, U> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: AbsDiffEq, U> AbsDiffEq for Quantity<T, U> {
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<T: RelativeEq, U> RelativeEq for Quantity<T, U> {
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
