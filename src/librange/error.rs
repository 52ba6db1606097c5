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

use thiserror::Error;

/// Rejection of the bounds given to a two-sided factory such as [Range::closed](../range/struct.Range.html#method.closed).
///
/// Two bounds form a range when `lower < upper`, or when `lower == upper` and both ends are closed (the singleton `[x, x]`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError<C>
{
  #[error("invalid range: bounds {lower:?} and {upper:?} do not delimit a non-empty range")]
  InvalidRange {
    lower: C,
    upper: C
  }
}
