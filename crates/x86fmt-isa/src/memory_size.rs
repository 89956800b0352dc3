//! Memory operand sizes.

/// Size and shape of a memory operand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[allow(non_camel_case_types)]
pub enum MemorySize {
    #[default]
    Unknown,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    Int32,
    Int64,
    Float32,
    Float64,
    Float80,
    Fword6,
    Fword10,
    SegPtr16,
    SegPtr32,
    SegPtr64,
    FpuEnv28,
    Packed64_UInt8,
    Packed128_UInt32,
    Packed128_Float32,
    Packed128_Float64,
    Packed256_UInt32,
    Packed256_Float32,
    Packed256_Float64,
    Packed512_UInt32,
    Packed512_Float32,
    Packed512_Float64,
    Broadcast128_Float32,
    Broadcast256_Float32,
    Broadcast512_Float32,
    Broadcast512_Float64,
    Broadcast512_UInt32,
}

// (accessed bytes, element bytes, vector bytes)
const fn shape(size: MemorySize) -> (u32, u32, u32) {
    match size {
        MemorySize::Unknown => (0, 0, 0),
        MemorySize::UInt8 => (1, 1, 1),
        MemorySize::UInt16 => (2, 2, 2),
        MemorySize::UInt32 | MemorySize::Int32 | MemorySize::Float32 | MemorySize::SegPtr16 => (4, 4, 4),
        MemorySize::UInt64 | MemorySize::Int64 | MemorySize::Float64 => (8, 8, 8),
        MemorySize::UInt128 => (16, 16, 16),
        MemorySize::Float80 => (10, 10, 10),
        MemorySize::Fword6 | MemorySize::SegPtr32 => (6, 6, 6),
        MemorySize::Fword10 | MemorySize::SegPtr64 => (10, 10, 10),
        MemorySize::FpuEnv28 => (28, 28, 28),
        MemorySize::Packed64_UInt8 => (8, 1, 8),
        MemorySize::Packed128_UInt32 | MemorySize::Packed128_Float32 => (16, 4, 16),
        MemorySize::Packed128_Float64 => (16, 8, 16),
        MemorySize::Packed256_UInt32 | MemorySize::Packed256_Float32 => (32, 4, 32),
        MemorySize::Packed256_Float64 => (32, 8, 32),
        MemorySize::Packed512_UInt32 | MemorySize::Packed512_Float32 => (64, 4, 64),
        MemorySize::Packed512_Float64 => (64, 8, 64),
        MemorySize::Broadcast128_Float32 => (4, 4, 16),
        MemorySize::Broadcast256_Float32 => (4, 4, 32),
        MemorySize::Broadcast512_Float32 | MemorySize::Broadcast512_UInt32 => (4, 4, 64),
        MemorySize::Broadcast512_Float64 => (8, 8, 64),
    }
}

impl MemorySize {
    /// Bytes accessed. For broadcasts this is the element size.
    #[must_use]
    pub const fn size(self) -> u32 {
        shape(self).0
    }

    #[must_use]
    pub const fn element_size(self) -> u32 {
        shape(self).1
    }

    /// Bytes of the full vector (for broadcasts, the destination width).
    #[must_use]
    pub const fn vector_size(self) -> u32 {
        shape(self).2
    }

    #[must_use]
    pub const fn is_broadcast(self) -> bool {
        matches!(
            self,
            Self::Broadcast128_Float32
                | Self::Broadcast256_Float32
                | Self::Broadcast512_Float32
                | Self::Broadcast512_Float64
                | Self::Broadcast512_UInt32
        )
    }

    /// Element count of a broadcast (the `N` in `{1toN}`), 0 otherwise.
    #[must_use]
    pub const fn broadcast_count(self) -> u32 {
        if self.is_broadcast() {
            self.vector_size() / self.element_size()
        } else {
            0
        }
    }

    /// Far pointer forms (`seg:offset` in memory).
    #[must_use]
    pub const fn is_far_pointer(self) -> bool {
        matches!(self, Self::SegPtr16 | Self::SegPtr32 | Self::SegPtr64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(MemorySize::UInt16.size(), 2);
        assert_eq!(MemorySize::SegPtr16.size(), 4);
        assert_eq!(MemorySize::SegPtr32.size(), 6);
        assert_eq!(MemorySize::Packed512_Float32.size(), 64);
        assert_eq!(MemorySize::Unknown.size(), 0);
    }

    #[test]
    fn test_broadcast() {
        assert!(MemorySize::Broadcast512_Float32.is_broadcast());
        assert_eq!(MemorySize::Broadcast512_Float32.broadcast_count(), 16);
        assert_eq!(MemorySize::Broadcast512_Float64.broadcast_count(), 8);
        assert_eq!(MemorySize::Broadcast128_Float32.broadcast_count(), 4);
        assert_eq!(MemorySize::Packed512_Float32.broadcast_count(), 0);
    }
}
