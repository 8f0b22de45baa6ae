use serde::{Deserialize, Serialize};

/// a value computed under both readings of the network diameter δ: counted
/// in transfers between lines, or in trains boarded (transfers + 1).
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dual<T> {
    pub transfers: T,
    pub trains: T,
}

impl<T> Dual<T> {
    pub fn new(transfers: T, trains: T) -> Dual<T> {
        Dual { transfers, trains }
    }

    pub fn map<U>(self, f: impl Fn(T) -> U) -> Dual<U> {
        Dual {
            transfers: f(self.transfers),
            trains: f(self.trains),
        }
    }

    /// combines two dual values interpretation by interpretation.
    pub fn zip_with<U, V>(self, other: Dual<U>, f: impl Fn(T, U) -> V) -> Dual<V> {
        Dual {
            transfers: f(self.transfers, other.transfers),
            trains: f(self.trains, other.trains),
        }
    }
}

impl<T: Copy> Dual<T> {
    pub fn splat(value: T) -> Dual<T> {
        Dual {
            transfers: value,
            trains: value,
        }
    }
}

impl Dual<f64> {
    /// mean of each interpretation across a set of values, `None` when empty.
    pub fn mean<'a>(values: impl Iterator<Item = &'a Dual<f64>>) -> Option<Dual<f64>> {
        let mut count = 0;
        let mut sum = Dual::splat(0.0);
        for v in values {
            sum = sum.zip_with(*v, |a, b| a + b);
            count += 1;
        }
        if count == 0 {
            None
        } else {
            Some(sum.map(|s| s / count as f64))
        }
    }
}
