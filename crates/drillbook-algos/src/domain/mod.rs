//! Domain layer - Pure computational logic
//!
//! Every routine here is a leaf: it borrows its input, allocates its own
//! scratch space and never calls another routine in this layer.

pub mod dp;
pub mod error;
pub mod frequency;
pub mod greedy;
pub mod sliding_window;
pub mod two_pointer;

#[cfg(feature = "fx-hash")]
pub(crate) type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(feature = "fx-hash")]
pub(crate) type HashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(not(feature = "fx-hash"))]
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type HashSet<T> = std::collections::HashSet<T>;
