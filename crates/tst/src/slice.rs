// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Slice comparison over a closed set of element types.
//!
//! [`SliceRef`] tags a borrowed slice with its element type so two values
//! can be validated (shape, element type, length) before the elementwise
//! comparison. Unsupported element types and non-slice values are
//! representable so that each failure category stays distinct.

use std::fmt;
use thiserror::Error;

/// Supported slice element types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    U8,
    I32,
    U32,
    Isize,
    F32,
    F64,
}

impl ElementType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::Isize => "isize",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed value tagged for comparison
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliceRef<'a> {
    U8(&'a [u8]),
    I32(&'a [i32]),
    U32(&'a [u32]),
    Isize(&'a [isize]),
    F32(&'a [f32]),
    F64(&'a [f64]),
    /// A slice whose element type is outside the supported set
    Unsupported { type_name: &'static str, len: usize },
    /// A value that is not a slice at all
    NotSlice { type_name: &'static str },
}

impl<'a> SliceRef<'a> {
    /// Tag a slice of an element type the comparator does not support
    pub fn unsupported<T>(slice: &'a [T]) -> Self {
        Self::Unsupported {
            type_name: std::any::type_name::<T>(),
            len: slice.len(),
        }
    }

    /// Tag a non-slice value
    pub fn scalar<T: ?Sized>(_value: &T) -> Self {
        Self::NotSlice {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Element type, if supported
    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            Self::U8(_) => Some(ElementType::U8),
            Self::I32(_) => Some(ElementType::I32),
            Self::U32(_) => Some(ElementType::U32),
            Self::Isize(_) => Some(ElementType::Isize),
            Self::F32(_) => Some(ElementType::F32),
            Self::F64(_) => Some(ElementType::F64),
            Self::Unsupported { .. } | Self::NotSlice { .. } => None,
        }
    }

    /// Element type name, or the value's type name for non-slices
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Unsupported { type_name, .. } | Self::NotSlice { type_name } => *type_name,
            other => other.element_type().map_or("", |t| t.name()),
        }
    }

    /// Supported element type plus type name; an unsupported `u8` slice
    /// differs from a supported one.
    fn type_tag(&self) -> (Option<ElementType>, &'static str) {
        (self.element_type(), self.type_name())
    }

    /// Whether the value is a slice (supported or not)
    pub fn is_slice(&self) -> bool {
        !matches!(self, Self::NotSlice { .. })
    }

    /// Number of elements; None for non-slices
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::U8(s) => Some(s.len()),
            Self::I32(s) => Some(s.len()),
            Self::U32(s) => Some(s.len()),
            Self::Isize(s) => Some(s.len()),
            Self::F32(s) => Some(s.len()),
            Self::F64(s) => Some(s.len()),
            Self::Unsupported { len, .. } => Some(*len),
            Self::NotSlice { .. } => None,
        }
    }

    /// Whether the value is an empty slice
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

macro_rules! slice_ref_from {
    ($($elem:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a [$elem]> for SliceRef<'a> {
                fn from(slice: &'a [$elem]) -> Self {
                    Self::$variant(slice)
                }
            }

            impl<'a, const N: usize> From<&'a [$elem; N]> for SliceRef<'a> {
                fn from(array: &'a [$elem; N]) -> Self {
                    Self::$variant(array.as_slice())
                }
            }

            impl<'a> From<&'a Vec<$elem>> for SliceRef<'a> {
                fn from(vec: &'a Vec<$elem>) -> Self {
                    Self::$variant(vec.as_slice())
                }
            }
        )*
    };
}

slice_ref_from! {
    u8 => U8,
    i32 => I32,
    u32 => U32,
    isize => Isize,
    f32 => F32,
    f64 => F64,
}

/// Why two slices compared unequal
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SliceMismatch {
    #[error("mismatch in kind or not slices")]
    Kind,

    #[error("mismatch in types")]
    Types {
        left: &'static str,
        right: &'static str,
    },

    #[error("mismatch in sizes")]
    Sizes { left: usize, right: usize },

    #[error("invalid slice type")]
    UnsupportedType { type_name: &'static str },

    #[error("mismatch at index {index}")]
    Element { index: usize },
}

/// Compare two tagged slices.
///
/// Checks run in order: both are slices, same element type, same length,
/// supported element type, then elements. The first differing index is
/// reported.
pub fn compare_slices(a: SliceRef<'_>, b: SliceRef<'_>) -> Result<(), SliceMismatch> {
    if !a.is_slice() || !b.is_slice() {
        return Err(SliceMismatch::Kind);
    }
    if a.type_tag() != b.type_tag() {
        return Err(SliceMismatch::Types {
            left: a.type_name(),
            right: b.type_name(),
        });
    }
    let (left, right) = (a.len().unwrap_or(0), b.len().unwrap_or(0));
    if left != right {
        return Err(SliceMismatch::Sizes { left, right });
    }

    let index = match (a, b) {
        (SliceRef::U8(x), SliceRef::U8(y)) => first_difference(x, y),
        (SliceRef::I32(x), SliceRef::I32(y)) => first_difference(x, y),
        (SliceRef::U32(x), SliceRef::U32(y)) => first_difference(x, y),
        (SliceRef::Isize(x), SliceRef::Isize(y)) => first_difference(x, y),
        (SliceRef::F32(x), SliceRef::F32(y)) => first_difference(x, y),
        (SliceRef::F64(x), SliceRef::F64(y)) => first_difference(x, y),
        _ => {
            return Err(SliceMismatch::UnsupportedType {
                type_name: a.type_name(),
            })
        }
    };

    match index {
        Some(index) => Err(SliceMismatch::Element { index }),
        None => Ok(()),
    }
}

fn first_difference<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
    a.iter().zip(b).position(|(x, y)| x != y)
}

#[cfg(test)]
#[path = "slice_tests.rs"]
mod tests;
