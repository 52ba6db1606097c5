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

//! Ranges over totally ordered values.
//!
//! A range is a contiguous subset of an ordered domain, each end is either absent (unbounded) or present with an inclusivity flag. Ranges are built with named factories: two-sided ones (`open`, `closed`, `open_closed`, `closed_open`) validate their bounds, one-sided ones (`greater_than`, `at_least`, `less_than`, `at_most`) and `all` cannot fail.
//!
//! # Examples
//!
//! ```rust
//! use range::Range;
//!
//! let a = Range::closed(1, 3).unwrap();
//! let b = Range::closed(3, 5).unwrap();
//! assert_eq!(a.intersection(&b), Range::closed(3, 3).unwrap());
//! assert!(Range::all().encloses(&a));
//!
//! // Disjoint operands give an empty-like range instead of failing.
//! let c = Range::closed(7, 9).unwrap();
//! assert!(a.intersection(&c).is_empty());
//! assert_eq!(a.checked_intersection(&c), None);
//! assert_eq!(a.span(&c), Range::closed(1, 9).unwrap());
//! ```
//!
//! # See also
//! [ops](../ops/index.html) for the generic operations implemented by `Range`.

use crate::error::RangeError;
use crate::ops::*;
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Intersection, IsEmpty, Subset};
use log::{debug, trace};
use num_traits::{CheckedAdd, One, Zero};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Error};
use std::ops::{Bound, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<C> {
  lower: Option<C>,
  upper: Option<C>,
  lower_inclusive: bool,
  upper_inclusive: bool
}

impl<C> Range<C>
{
  fn from_parts(lower: Option<C>, upper: Option<C>, lower_inclusive: bool, upper_inclusive: bool) -> Range<C> {
    Range { lower, upper, lower_inclusive, upper_inclusive }
  }

  pub fn greater_than(lower: C) -> Range<C> {
    Range::from_parts(Some(lower), None, false, false)
  }

  pub fn at_least(lower: C) -> Range<C> {
    Range::from_parts(Some(lower), None, true, false)
  }

  pub fn less_than(upper: C) -> Range<C> {
    Range::from_parts(None, Some(upper), false, false)
  }

  pub fn at_most(upper: C) -> Range<C> {
    Range::from_parts(None, Some(upper), false, true)
  }

  /// The range of the entire domain, `(-INF, INF)`.
  pub fn all() -> Range<C> {
    Range::from_parts(None, None, false, false)
  }

  /// `None` if the range is unbounded below.
  pub fn lower(&self) -> Option<&C> {
    self.lower.as_ref()
  }

  /// `None` if the range is unbounded above.
  pub fn upper(&self) -> Option<&C> {
    self.upper.as_ref()
  }

  pub fn has_lower_bound(&self) -> bool {
    self.lower.is_some()
  }

  pub fn has_upper_bound(&self) -> bool {
    self.upper.is_some()
  }

  /// The flag is stored even when the lower bound is absent, in which case it is `false`.
  pub fn is_lower_inclusive(&self) -> bool {
    self.lower_inclusive
  }

  /// The flag is stored even when the upper bound is absent, in which case it is `false` for every range built by a factory.
  pub fn is_upper_inclusive(&self) -> bool {
    self.upper_inclusive
  }

  pub fn is_all(&self) -> bool {
    self.lower.is_none() && self.upper.is_none()
  }
}

impl<C: Ord> Range<C>
{
  // Ranges derived by intersection and span skip validation, they may be empty-like but never inverted.
  fn derived(lower: Option<C>, upper: Option<C>, lower_inclusive: bool, upper_inclusive: bool) -> Range<C> {
    debug_assert!(match (&lower, &upper) {
      (Some(l), Some(u)) => l < u || (l == u && (lower_inclusive || upper_inclusive)),
      _ => true
    }, "derived range with inverted or open equal bounds");
    Range::from_parts(lower, upper, lower_inclusive, upper_inclusive)
  }

  fn two_sided(lower: C, upper: C, lower_inclusive: bool, upper_inclusive: bool) -> Result<Range<C>, RangeError<C>> {
    match lower.cmp(&upper) {
      Ordering::Greater => {
        debug!("range rejected: the lower bound is greater than the upper bound");
        Err(RangeError::InvalidRange { lower, upper })
      }
      Ordering::Equal if !(lower_inclusive && upper_inclusive) => {
        debug!("range rejected: equal bounds require two closed ends");
        Err(RangeError::InvalidRange { lower, upper })
      }
      _ => Ok(Range::from_parts(Some(lower), Some(upper), lower_inclusive, upper_inclusive))
    }
  }

  /// `(lower, upper)`, it requires `lower < upper`.
  pub fn open(lower: C, upper: C) -> Result<Range<C>, RangeError<C>> {
    Range::two_sided(lower, upper, false, false)
  }

  /// `[lower, upper]`, it requires `lower <= upper`.
  pub fn closed(lower: C, upper: C) -> Result<Range<C>, RangeError<C>> {
    Range::two_sided(lower, upper, true, true)
  }

  /// `(lower, upper]`, it requires `lower < upper`.
  pub fn open_closed(lower: C, upper: C) -> Result<Range<C>, RangeError<C>> {
    Range::two_sided(lower, upper, false, true)
  }

  /// `[lower, upper)`, it requires `lower < upper`.
  pub fn closed_open(lower: C, upper: C) -> Result<Range<C>, RangeError<C>> {
    Range::two_sided(lower, upper, true, false)
  }

  pub fn contains(&self, value: &C) -> bool {
    let above_lower = match &self.lower {
      None => true,
      Some(lower) => value > lower || (self.lower_inclusive && value == lower)
    };
    let below_upper = match &self.upper {
      None => true,
      Some(upper) => value < upper || (self.upper_inclusive && value == upper)
    };
    above_lower && below_upper
  }

  /// `true` if every value of `other` belongs to `self`.
  ///
  /// A bound of `other` equal to the matching bound of `self` is covered when that end of `self` is closed, or when that end of `other` is open.
  /// The rule also applies when `self` is unbounded on the other side, so `(5, INF)` encloses `(5, 8)` even though `(5, INF)` does not contain `5`.
  pub fn encloses(&self, other: &Range<C>) -> bool {
    if self == other || self.is_all() {
      return true;
    }
    self.covers_lower(other) && self.covers_upper(other)
  }

  fn covers_lower(&self, other: &Range<C>) -> bool {
    match (&self.lower, &other.lower) {
      (None, _) => true,
      (Some(_), None) => false,
      (Some(mine), Some(theirs)) => match theirs.cmp(mine) {
        Ordering::Greater => true,
        Ordering::Equal => self.lower_inclusive || !other.lower_inclusive,
        Ordering::Less => false
      }
    }
  }

  fn covers_upper(&self, other: &Range<C>) -> bool {
    match (&self.upper, &other.upper) {
      (None, _) => true,
      (Some(_), None) => false,
      (Some(mine), Some(theirs)) => match theirs.cmp(mine) {
        Ordering::Less => true,
        Ordering::Equal => self.upper_inclusive || !other.upper_inclusive,
        Ordering::Greater => false
      }
    }
  }

  /// True exactly when the ends differ in inclusivity while the bounds are equal or both absent.
  /// No factory builds such a range, only `intersection` of non-overlapping operands does.
  pub fn is_empty(&self) -> bool {
    self.lower_inclusive != self.upper_inclusive &&
      match (&self.lower, &self.upper) {
        (Some(lower), Some(upper)) => lower == upper,
        (None, None) => true,
        _ => false
      }
  }

  /// `true` if the union of `self` and `other` is contiguous: they overlap, or they touch at a point that one of them includes.
  pub fn is_connected(&self, other: &Range<C>) -> bool {
    let lower = Range::pick_lower(self, other, false);
    let upper = Range::pick_upper(self, other, false);
    match (&lower.lower, &upper.upper) {
      (Some(l), Some(u)) => match l.cmp(u) {
        Ordering::Less => true,
        Ordering::Equal => lower.lower_inclusive || upper.upper_inclusive,
        Ordering::Greater => false
      },
      _ => true
    }
  }

  // Selects the operand whose lower end reaches furthest down when `outermost`, the other one otherwise.
  fn pick_lower<'a>(a: &'a Range<C>, b: &'a Range<C>, outermost: bool) -> &'a Range<C> {
    let a_first = match (&a.lower, &b.lower) {
      (None, _) => true,
      (_, None) => false,
      (Some(x), Some(y)) => match x.cmp(y) {
        Ordering::Less => true,
        Ordering::Equal => a.lower_inclusive || !b.lower_inclusive,
        Ordering::Greater => false
      }
    };
    if a_first == outermost { a } else { b }
  }

  fn pick_upper<'a>(a: &'a Range<C>, b: &'a Range<C>, outermost: bool) -> &'a Range<C> {
    let a_last = match (&a.upper, &b.upper) {
      (None, _) => true,
      (_, None) => false,
      (Some(x), Some(y)) => match x.cmp(y) {
        Ordering::Greater => true,
        Ordering::Equal => a.upper_inclusive || !b.upper_inclusive,
        Ordering::Less => false
      }
    };
    if a_last == outermost { a } else { b }
  }
}

impl<C: Ord + Clone> Range<C>
{
  /// Intersection of two overlapping ranges.
  ///
  /// The operands are not checked for overlap: if they are disjoint, the result is the empty-like range `(x, x]` anchored on the upper bound of `other` (on its lower bound when `other` is unbounded above). Use [is_empty](#method.is_empty) on the result or [checked_intersection](#method.checked_intersection) to detect this case.
  /// Disjoint one-sided operands such as `(-INF, 2]` and `[4, INF)` give `(4, 4]`, never a range with both bounds absent, so the result contains no value.
  pub fn intersection(&self, other: &Range<C>) -> Range<C> {
    if self.encloses(other) {
      return other.clone();
    }
    if other.encloses(self) {
      return self.clone();
    }
    if self.is_connected(other) {
      let lower = Range::pick_lower(self, other, false);
      let upper = Range::pick_upper(self, other, false);
      Range::derived(lower.lower.clone(), upper.upper.clone(), lower.lower_inclusive, upper.upper_inclusive)
    }
    else {
      trace!("intersection of disjoint ranges, an empty range is returned");
      let anchor = other.upper.clone().or_else(|| other.lower.clone());
      Range::derived(anchor.clone(), anchor, false, true)
    }
  }

  /// Same as [intersection](#method.intersection) but returns `None` instead of an empty range.
  pub fn checked_intersection(&self, other: &Range<C>) -> Option<Range<C>> {
    let res = self.intersection(other);
    if res.is_empty() { None } else { Some(res) }
  }

  /// Smallest range enclosing both `self` and `other`.
  ///
  /// When the operands are not [connected](#method.is_connected), the result also covers the gap between them.
  pub fn span(&self, other: &Range<C>) -> Range<C> {
    if self.encloses(other) || other.is_empty() {
      return self.clone();
    }
    if other.encloses(self) || self.is_empty() {
      return other.clone();
    }
    let lower = Range::pick_lower(self, other, true);
    let upper = Range::pick_upper(self, other, true);
    Range::derived(lower.lower.clone(), upper.upper.clone(), lower.lower_inclusive, upper.upper_inclusive)
  }
}

impl<C: Ord + Display> Display for Range<C>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    if self.is_empty() {
      return formatter.write_str("EMPTY");
    }
    formatter.write_str(if self.lower_inclusive { "[" } else { "(" })?;
    match &self.lower {
      Some(lower) => write!(formatter, "{}", lower)?,
      None => formatter.write_str("-INF")?
    }
    formatter.write_str(", ")?;
    match &self.upper {
      Some(upper) => write!(formatter, "{}", upper)?,
      None => formatter.write_str("INF")?
    }
    formatter.write_str(if self.upper_inclusive { "]" } else { ")" })
  }
}

impl<C> RangeBounds<C> for Range<C>
{
  fn start_bound(&self) -> Bound<&C> {
    match &self.lower {
      None => Bound::Unbounded,
      Some(lower) if self.lower_inclusive => Bound::Included(lower),
      Some(lower) => Bound::Excluded(lower)
    }
  }

  fn end_bound(&self) -> Bound<&C> {
    match &self.upper {
      None => Bound::Unbounded,
      Some(upper) if self.upper_inclusive => Bound::Included(upper),
      Some(upper) => Bound::Excluded(upper)
    }
  }
}

impl<C> Collection for Range<C>
{
  type Item = C;
}

impl<C: Ord> Contains for Range<C>
{
  fn contains(&self, value: &C) -> bool {
    self.contains(value)
  }
}

impl<C: Ord + Clone> Intersection for Range<C>
{
  type Output = Range<C>;

  fn intersection(&self, other: &Range<C>) -> Range<C> {
    self.intersection(other)
  }
}

impl<C: Ord> Subset for Range<C>
{
  fn is_subset(&self, other: &Range<C>) -> bool {
    other.encloses(self)
  }
}

impl<C: Ord> IsEmpty for Range<C>
{
  fn is_empty(&self) -> bool {
    self.is_empty()
  }
}

impl<C: Ord + Clone> Hull for Range<C>
{
  type Output = Range<C>;

  fn hull(&self, other: &Range<C>) -> Range<C> {
    self.span(other)
  }
}

impl<C> Whole for Range<C>
{
  fn whole() -> Range<C> {
    Range::all()
  }
}

impl<C: Width> Range<C>
{
  /// Number of integers in the range, `None` if it is unbounded or if the count does not fit in `Width::Output`.
  pub fn size(&self) -> Option<<C as Width>::Output> {
    if self.is_empty() {
      return Some(<C as Width>::Output::zero());
    }
    match (&self.lower, &self.upper) {
      (Some(lower), Some(upper)) => {
        let steps = C::width(lower, upper);
        match (self.lower_inclusive, self.upper_inclusive) {
          (true, true) => steps.checked_add(&<C as Width>::Output::one()),
          // Both ends open implies `lower < upper`.
          (false, false) => Some(steps - <C as Width>::Output::one()),
          _ => Some(steps)
        }
      }
      _ => None
    }
  }
}

pub trait ToRange<C> {
  fn to_range(self) -> Result<Range<C>, RangeError<C>>;
}

impl<C> ToRange<C> for Range<C> {
  fn to_range(self) -> Result<Range<C>, RangeError<C>> { Ok(self) }
}

impl<C: Ord> ToRange<C> for (C, C) {
  fn to_range(self) -> Result<Range<C>, RangeError<C>> {
    let (a, b) = self;
    Range::closed(a, b)
  }
}

impl<C: Ord> ToRange<C> for std::ops::Range<C> {
  fn to_range(self) -> Result<Range<C>, RangeError<C>> {
    Range::closed_open(self.start, self.end)
  }
}

impl<C: Ord> ToRange<C> for RangeInclusive<C> {
  fn to_range(self) -> Result<Range<C>, RangeError<C>> {
    let (a, b) = self.into_inner();
    Range::closed(a, b)
  }
}

impl<C> ToRange<C> for RangeFrom<C> {
  fn to_range(self) -> Result<Range<C>, RangeError<C>> {
    Ok(Range::at_least(self.start))
  }
}

impl<C> ToRange<C> for RangeTo<C> {
  fn to_range(self) -> Result<Range<C>, RangeError<C>> {
    Ok(Range::less_than(self.end))
  }
}

impl<C> ToRange<C> for RangeToInclusive<C> {
  fn to_range(self) -> Result<Range<C>, RangeError<C>> {
    Ok(Range::at_most(self.end))
  }
}

impl<C> ToRange<C> for RangeFull {
  fn to_range(self) -> Result<Range<C>, RangeError<C>> {
    Ok(Range::all())
  }
}
