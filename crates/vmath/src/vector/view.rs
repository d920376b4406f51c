//! Named field access (`v.x`, `v.y`, ...) for 2, 3 and 4-element vectors.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! views {
    ($($n:literal => $name:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $( pub $field: T, )+
                _priv: (), // prevent external construction
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $name<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Layout-compatible: `[T; N]` followed by a ZST, both `repr(C)`/transparent.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    2 => XY { x, y },
    3 => XYZ { x, y, z },
    4 => XYZW { x, y, z, w },
}
