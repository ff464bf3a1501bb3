//! Macros for compilation control.
//!
//! [`define_alias!`] turns a `#[cfg(...)]` predicate into a named macro, so
//! feature checks can be written once in a crate's `cfg` module and reused:
//!
//! ```
//! mod cfg {
//!     sk_cfg::define_alias! {
//!         #[cfg(debug_assertions)] => debug,
//!         #[cfg(any())] => never,
//!     }
//! }
//!
//! cfg::never! {
//!     compile_error!("never expanded");
//! }
//!
//! let flag = cfg::never! {
//!     if { "on" } else { "off" }
//! };
//! assert_eq!(flag, "off");
//! assert!(!cfg::never!());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

/// Defines one macro alias per `#[cfg(...)] => name` pair.
///
/// Each alias behaves like [`enabled!`] when the predicate holds and like
/// [`disabled!`] otherwise.
#[macro_export]
macro_rules! define_alias {
    (#[cfg($meta:meta)] => $p:ident) => {
        #[cfg($meta)]
        #[doc(inline)]
        pub use $crate::enabled as $p;

        #[cfg(not($meta))]
        #[doc(inline)]
        pub use $crate::disabled as $p;
    };
    (#[cfg($meta:meta)] => $p:ident, $($rest:tt)*) => {
        $crate::define_alias! { #[cfg($meta)] => $p }
        $crate::define_alias! { $($rest)* }
    };
    () => {};
}

/// The expansion of an alias whose predicate holds.
///
/// - `alias!()` evaluates to `true`.
/// - `alias! { if { a } else { b } }` expands to `a`.
/// - `alias! { items }` expands to `items`.
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// The expansion of an alias whose predicate does not hold.
///
/// - `alias!()` evaluates to `false`.
/// - `alias! { if { a } else { b } }` expands to `b`.
/// - `alias! { items }` expands to nothing.
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}
