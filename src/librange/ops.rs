// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Range specific operations.

use num_integer::Integer;
use num_traits::{CheckedAdd, Unsigned};

/// Smallest value of `Self` enclosing both operands.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Whole
{
  fn whole() -> Self;
}

/// Distance between two bounds of a discrete domain, used to count the members of a range.
pub trait Width : Ord + Clone
{
  type Output: Unsigned + Integer + CheckedAdd + Clone;

  /// Number of steps needed to go from `lower` to `upper`, it requires `lower <= upper`.
  /// The width of `[x, x]` is zero, the width of the full domain of `u8` is `255`.
  fn width(lower: &Self, upper: &Self) -> Self::Output;
}

macro_rules! unsigned_width_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Width for $t
    {
      type Output = $t;

      fn width(lower: &$t, upper: &$t) -> $t {
        debug_assert!(lower <= upper);
        *upper - *lower
      }
    }
  )*}
}

macro_rules! signed_width_impl
{
  ( $( $t: ty, $u: ty ),* ) =>
  {$(
    impl Width for $t
    {
      type Output = $u;

      fn width(lower: &$t, upper: &$t) -> $u {
        debug_assert!(lower <= upper);
        // Two's complement: the unsigned difference is exact even when `upper - lower` overflows `$t`.
        (*upper as $u).wrapping_sub(*lower as $u)
      }
    }
  )*}
}

unsigned_width_impl!(u8,u16,u32,u64,usize);
signed_width_impl!(i8,u8,i16,u16,i32,u32,i64,u64,isize,usize);
