use super::Quantity;
use ndarray::{Array, Array1, ArrayBase, Data, Dimension, NdIndex};
use std::iter::FromIterator;
use std::marker::PhantomData;

/// Temperature sweeps and other one-dimensional series.
impl<U> Quantity<Array1<f64>, U> {
    pub fn from_vec(v: Vec<Quantity<f64, U>>) -> Self {
        v.into_iter().collect()
    }

    pub fn linspace(start: Quantity<f64, U>, end: Quantity<f64, U>, n: usize) -> Self {
        Self(Array1::linspace(start.0, end.0, n), PhantomData)
    }
}

impl<S: Data<Elem = f64>, U, D: Dimension> Quantity<ArrayBase<S, D>, U> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get<I: NdIndex<D>>(&self, index: I) -> Quantity<f64, U> {
        Quantity(self.0[index], PhantomData)
    }

    /// Apply `f` element-wise, allowing the unit to change.
    pub fn mapv<F, U2>(&self, mut f: F) -> Quantity<Array<f64, D>, U2>
    where
        F: FnMut(Quantity<f64, U>) -> Quantity<f64, U2>,
    {
        Quantity(self.0.mapv(|x| f(Quantity(x, PhantomData)).0), PhantomData)
    }

    /// Iterate over the elements as scalar quantities.
    pub fn iter(&self) -> impl Iterator<Item = Quantity<f64, U>> + '_ {
        self.0.iter().map(|&x| Quantity(x, PhantomData))
    }
}

impl<U> FromIterator<Quantity<f64, U>> for Quantity<Array1<f64>, U> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Quantity<f64, U>>,
    {
        Self(iter.into_iter().map(|v| v.0).collect(), PhantomData)
    }
}
