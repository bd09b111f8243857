//! The secondary capability: "can produce an independent duplicate of itself".
//!
//! Unlike `Clone`, which a reference-semantics handle implements by handing out
//! another handle, `duplicate` must never alias the original's state. Types
//! opt in explicitly; nothing implements it by accident.

pub trait Duplicate: Sized {
    fn duplicate(&self) -> Self;
}

// For owned value types a clone already is an independent copy.
macro_rules! duplicate_by_clone {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Duplicate for $ty {
                fn duplicate(&self) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

duplicate_by_clone!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl<T: Duplicate> Duplicate for Option<T> {
    fn duplicate(&self) -> Self {
        self.as_ref().map(Duplicate::duplicate)
    }
}

impl<T: Duplicate> Duplicate for Box<T> {
    fn duplicate(&self) -> Self {
        Box::new((**self).duplicate())
    }
}

impl<T: Duplicate> Duplicate for Vec<T> {
    fn duplicate(&self) -> Self {
        self.iter().map(Duplicate::duplicate).collect()
    }
}

impl<A: Duplicate, B: Duplicate> Duplicate for (A, B) {
    fn duplicate(&self) -> Self {
        (self.0.duplicate(), self.1.duplicate())
    }
}
