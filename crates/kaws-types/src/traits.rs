//! Core trait definitions for kaws abstractions.

use crate::config::Experimental;
use crate::errors::Result;

/// Field-wise union where the receiver's non-empty fields win.
///
/// A field is empty when it equals its type's `Default` value: `""` for
/// strings, `false` for flags, `0` for counters, an empty list. Nested
/// structs merge recursively.
pub trait MergeIfEmpty {
    /// Fill every empty field of `self` from the same field of `other`.
    fn merge_if_empty(&mut self, other: &Self);
}

/// Fill `target` from `source` when `target` holds its default value.
pub fn fill_if_empty<T>(target: &mut T, source: &T)
where
    T: Default + PartialEq + Clone,
{
    if *target == T::default() {
        *target = source.clone();
    }
}

/// Implement [`MergeIfEmpty`] for a struct from a list of its fields.
///
/// Plain fields are filled with [`fill_if_empty`]; fields listed after
/// `nested:` merge recursively through their own `MergeIfEmpty` impl.
///
/// ```ignore
/// impl_merge_if_empty!(Image { repo, tag, rkt_pull_docker });
/// impl_merge_if_empty!(CloudWatchLogging { enabled, retention_in_days; nested: local_streaming });
/// ```
#[macro_export]
macro_rules! impl_merge_if_empty {
    ($ty:ty { $($field:ident),* $(,)? $(; nested: $($nested:ident),+ )? }) => {
        impl $crate::traits::MergeIfEmpty for $ty {
            fn merge_if_empty(&mut self, other: &Self) {
                $( $crate::traits::fill_if_empty(&mut self.$field, &other.$field); )*
                $($( $crate::traits::MergeIfEmpty::merge_if_empty(&mut self.$nested, &other.$nested); )+)?
            }
        }
    };
}

/// Validity check for the experimental settings group.
///
/// Node pool validation delegates to an implementation of this trait once
/// its own override checks pass, and propagates the returned error as-is.
pub trait ExperimentalValidator: Send + Sync {
    /// Check the experimental settings.
    fn validate(&self, experimental: &Experimental) -> Result<()>;
}

impl<F> ExperimentalValidator for F
where
    F: Fn(&Experimental) -> Result<()> + Send + Sync,
{
    fn validate(&self, experimental: &Experimental) -> Result<()> {
        self(experimental)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Inner {
        level: u32,
    }

    impl_merge_if_empty!(Inner { level });

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Outer {
        name: String,
        flag: bool,
        inner: Inner,
    }

    impl_merge_if_empty!(Outer { name, flag; nested: inner });

    #[test]
    fn test_fill_if_empty() {
        let mut s = String::new();
        fill_if_empty(&mut s, &"main".to_string());
        assert_eq!(s, "main");

        let mut s = "pool".to_string();
        fill_if_empty(&mut s, &"main".to_string());
        assert_eq!(s, "pool");
    }

    #[test]
    fn test_macro_merges_nested_fields() {
        let mut pool = Outer { name: "pool".into(), flag: false, inner: Inner::default() };
        let main = Outer { name: "main".into(), flag: true, inner: Inner { level: 3 } };
        pool.merge_if_empty(&main);
        assert_eq!(pool, Outer { name: "pool".into(), flag: true, inner: Inner { level: 3 } });
    }

    #[test]
    fn test_closure_is_experimental_validator() {
        let reject = |_: &Experimental| -> Result<()> {
            Err(crate::KawsError::Experimental("nope".into()))
        };
        assert!(reject.validate(&Experimental::default()).is_err());
    }
}
