//! Zero-copy **string segmentation** for Rust 🦀
//!
//! * borrowed `(buffer, offset, length)` **views**, no copy, no allocation
//! * lazy **splitting** by char, fixed sequence, or regex, with empty-entry
//!   policies
//! * **first/last occurrence** navigation with bounded look-around views
//! * fixed **comparison policies** (ordinal / ignore-case) without normalized
//!   copies
//! * **join/replace** composed from the same primitives, allocating only when
//!   asked
//!
//! # Examples
//!
//! ```rust
//! use segstr::{Segment, SplitOptions};
//!
//! let seg = Segment::new("Hello,there,,I,am,Joe");
//! let names: Vec<_> = seg.split(',', SplitOptions::REMOVE_EMPTY).collect();
//! assert_eq!(names, ["Hello", "there", "I", "am", "Joe"]);
//!
//! let text = Segment::new("Hello well how are you");
//! let m = text.find_first("well how").unwrap();
//! assert_eq!(m.preceding(), "Hello ");
//! assert_eq!(m.following(), " are you");
//! ```
//!
//! # Design
//!
//! A [`Segment`] borrows its buffer for a lifetime the borrow checker tracks,
//! so a buffer can never be dropped while views into it exist. Segments are
//! `Copy`; every transformation — narrowing, trimming, boundary moves,
//! splitting, searching — describes a new window over the same buffer. The
//! only allocation points are the explicit owned conversions: `to_string`,
//! [`join_to_string`], and [`Segment::try_replace`].
//!
//! Split and occurrence iterators are lazy, restartable (`Clone`), and safe
//! to abandon early: stopping at the first match does no work beyond the
//! match point.
//!
//! All operations are pure functions of their inputs. Buffers are never
//! mutated, so any number of threads may operate on segments over the same
//! buffer concurrently.
//!
//! # Errors
//!
//! Fallible operations come in `try_` form returning [`SegmentError`]
//! (classified by [`ErrorKind`]) and in panicking form, like
//! [`Segment::try_subsegment`] and [`Segment::subsegment`]. "Not found" is an
//! expected outcome, not a failure: searches return [`Option`].
//!
//! # Feature flags
//!
//! * `serde`: serialization support for [`Segment`] (zero-copy, borrowing
//!   deserializers only)

#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![forbid(unsafe_code)]

mod common;
pub mod compare;
pub mod find;
pub mod join;
mod macros;
pub mod pattern;
pub mod segment;
pub mod split;

pub use common::{ErrorKind, SegmentError};
pub use compare::{Comparable, Comparison};
pub use find::Occurrences;
pub use join::{join, join_non_empty, join_to_string, Join};
pub use segment::Segment;
pub use split::{Split, SplitOptions};
