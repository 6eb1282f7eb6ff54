//! Node IDs and ranges for the flat AST.
//!
//! - `ExprId(u32)`/`StmtId(u32)` instead of `Box<Expr>`/`Box<Stmt>`
//! - `ExprRange`/`StmtRange` for argument lists and block bodies, indexing the
//!   arena's flattened list storage

use std::fmt;

/// Define a `u32` index newtype into one of the arena's node vectors.
macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new id.
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Get the index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    )* };
}

define_id!(
    /// Index into the arena's expression nodes.
    ExprId,
    /// Index into the arena's statement nodes.
    StmtId,
    /// Index into the arena's function declarations.
    FunctionId,
);

/// Define a `(start, len)` range into one of the arena's flattened lists.
macro_rules! define_range {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// The `start..end` slice bounds of this range.
            #[inline]
            pub const fn bounds(&self) -> ::std::ops::Range<usize> {
                self.start as usize..(self.start as usize + self.len as usize)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.start + self.len)
            }
        }
    )* };
}

define_range!(
    /// Range of expressions (call arguments).
    ExprRange,
    /// Range of statements (block and function bodies, programs).
    StmtRange,
);
