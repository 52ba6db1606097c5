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

//! This library proposes a range structure over any totally ordered type. Each end of a range is either bounded (open or closed) or unbounded, which covers the usual mathematical intervals `(a, b)`, `[a, b]`, `(a, b]`, `[a, b)`, `(a, +inf)`, `[a, +inf)`, `(-inf, b)`, `(-inf, b]` and the whole domain.
//!
//! Ranges are immutable values: every operation (`contains`, `encloses`, `intersection`, `span`, ...) returns a new value and never fails once a range has been built. Only the two-sided factories may reject their bounds, see [RangeError](error/enum.RangeError.html).
//!
//! # Examples
//!
//! ```rust
//! use range::Range;
//!
//! let a = Range::closed(1, 5).unwrap();
//! let b = Range::closed(3, 8).unwrap();
//! assert_eq!(a.intersection(&b), Range::closed(3, 5).unwrap());
//! assert_eq!(a.span(&b).to_string(), "[1, 8]");
//! assert!(Range::at_least(5).contains(&5));
//! assert_eq!(Range::at_most(3).to_string(), "(-INF, 3]");
//! ```
//!
//! # References
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)
//! * [Guava Ranges Explained](https://github.com/google/guava/wiki/RangesExplained)

pub mod error;
pub mod ops;
pub mod range;

pub use crate::error::RangeError;
pub use crate::range::{Range, ToRange};
