//! Positional arguments of a console call

use serde::Serialize;

use crate::repr::{to_repr, Repr};
use vb_core::Result;

/// Values passed positionally to [`Console::call`](crate::Console::call).
///
/// Implemented for tuples of up to twelve `Serialize` values; each element
/// is one argument. `()` is the empty argument list.
pub trait Args {
    fn to_args(&self) -> Result<Vec<Repr>>;
}

macro_rules! impl_args_for_tuple {
    ($($arg:ident),*) => {
        impl<$($arg: Serialize),*> Args for ($($arg,)*) {
            #[allow(non_snake_case)]
            fn to_args(&self) -> Result<Vec<Repr>> {
                let ($($arg,)*) = self;
                Ok(vec![$(to_repr($arg)?),*])
            }
        }
    };
}

impl_args_for_tuple!();
impl_args_for_tuple!(A);
impl_args_for_tuple!(A, B);
impl_args_for_tuple!(A, B, C);
impl_args_for_tuple!(A, B, C, D);
impl_args_for_tuple!(A, B, C, D, E);
impl_args_for_tuple!(A, B, C, D, E, F);
impl_args_for_tuple!(A, B, C, D, E, F, G);
impl_args_for_tuple!(A, B, C, D, E, F, G, H);
impl_args_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_args_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_args_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_args_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
