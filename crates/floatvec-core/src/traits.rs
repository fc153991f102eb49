//! Storage-kind tag and the size/capacity query trait.

use std::fmt;

/// Who owns a container's buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// Caller-owned buffer of fixed size. Never reallocated or freed
    /// by the container.
    Fixed,
    /// Container-owned heap buffer, reallocated on growth and freed
    /// exactly once.
    Growable,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => f.write_str("fixed"),
            Self::Growable => f.write_str("growable"),
        }
    }
}

/// Size and capacity queries shared by every container kind.
///
/// Implemented by both the growable and the fixed vector so code can be
/// written once against either storage.
pub trait Container {
    /// Number of logically valid elements.
    fn len(&self) -> usize;

    /// Number of allocated element slots.
    fn capacity(&self) -> usize;

    /// Which storage discipline backs this container.
    fn storage_kind(&self) -> StorageKind;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the next insertion needs more capacity.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Free slots before the container must grow.
    fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }
}

/// Number of elements in any container.
pub fn size<C: Container + ?Sized>(container: &C) -> usize {
    container.len()
}

/// Allocated capacity of any container.
pub fn alloc<C: Container + ?Sized>(container: &C) -> usize {
    container.capacity()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        len: usize,
        cap: usize,
    }

    impl Container for Probe {
        fn len(&self) -> usize {
            self.len
        }

        fn capacity(&self) -> usize {
            self.cap
        }

        fn storage_kind(&self) -> StorageKind {
            StorageKind::Fixed
        }
    }

    #[test]
    fn provided_methods_follow_len_and_capacity() {
        let probe = Probe { len: 3, cap: 4 };
        assert!(!probe.is_empty());
        assert!(!probe.is_full());
        assert_eq!(probe.remaining(), 1);
        assert_eq!(size(&probe), 3);
        assert_eq!(alloc(&probe), 4);
    }

    #[test]
    fn dyn_dispatch_works() {
        let probe = Probe { len: 0, cap: 0 };
        let dynamic: &dyn Container = &probe;
        assert!(dynamic.is_empty());
        assert!(dynamic.is_full());
        assert_eq!(size(dynamic), 0);
    }

    #[test]
    fn storage_kind_display() {
        assert_eq!(StorageKind::Fixed.to_string(), "fixed");
        assert_eq!(StorageKind::Growable.to_string(), "growable");
    }
}
