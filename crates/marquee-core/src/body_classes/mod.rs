//! # Marquee Core Body Classes
//!
//! Manages the class names the family's plugins contribute to the page's
//! `body` element, in two independent namespaces: `display` for
//! public-facing pages and `admin` for dashboard pages.
//!
//! Each namespace maps a class label to an enabled flag, so a label can be
//! registered but temporarily suppressed without losing its registration —
//! "asked for, currently off" is distinct from "never asked for". The
//! [`Queue::All`] selector reads the merged view (admin wins on collision)
//! and writes through to both namespaces at once.
//!
//! Every mutation that creates a label, and every export into a page's
//! class list, is gated by an approval predicate supplied by the embedding
//! application. The defaults decline, making the whole system opt-in.
pub mod filter;
pub mod manager;
pub mod queue;

pub use manager::{BodyClasses, ClassSpec};
pub use queue::Queue;
