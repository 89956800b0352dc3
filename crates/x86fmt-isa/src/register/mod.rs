//! Registers and register-class helpers.

mod generated;

pub use generated::Register;
use generated::{ALL_REGISTERS, REGISTER_COUNT, REGISTER_NAMES};

// ============================================================================
// Register classes
// ============================================================================

/// First register and element count of each class, in enum order.
const CLASSES: [(Register, u8, u32); 15] = [
    (Register::AL, 20, 1),
    (Register::AX, 16, 2),
    (Register::EAX, 16, 4),
    (Register::RAX, 16, 8),
    (Register::EIP, 1, 4),
    (Register::RIP, 1, 8),
    (Register::ES, 6, 2),
    (Register::XMM0, 32, 16),
    (Register::YMM0, 32, 32),
    (Register::ZMM0, 32, 64),
    (Register::K0, 8, 8),
    (Register::BND0, 4, 16),
    (Register::CR0, 16, 8),
    (Register::DR0, 16, 8),
    (Register::ST0, 8, 10),
];

impl Register {
    /// Number of registers, including `None`.
    pub const COUNT: usize = REGISTER_COUNT;

    /// All registers in enum order.
    #[must_use]
    pub fn values() -> impl Iterator<Item = Self> {
        ALL_REGISTERS.iter().copied()
    }

    /// Register from its enum index.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_REGISTERS.get(usize::from(index)).copied()
    }

    /// Canonical lower-case name (`eax`, `r8b`, `xmm0`, `st0`). Empty for `None`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        REGISTER_NAMES[self as usize]
    }

    fn class(self) -> Option<(Register, u8, u32)> {
        let v = self as u8;
        if v >= Self::MM0 as u8 {
            return Some((Self::MM0, 8, 8));
        }
        CLASSES
            .iter()
            .copied()
            .find(|&(base, count, _)| v >= base as u8 && v < base as u8 + count)
    }

    /// Size of the register in bytes, 0 for `None`.
    #[must_use]
    pub fn size(self) -> u32 {
        self.class().map_or(0, |(_, _, size)| size)
    }

    /// Index within its register class (`ecx` is 1, `xmm5` is 5).
    #[must_use]
    pub fn number(self) -> u32 {
        self.class()
            .map_or(0, |(base, _, _)| u32::from(self as u8 - base as u8))
    }

    #[must_use]
    pub const fn is_gpr8(self) -> bool {
        let v = self as u8;
        v >= Self::AL as u8 && v <= Self::R15L as u8
    }

    #[must_use]
    pub const fn is_gpr16(self) -> bool {
        let v = self as u8;
        v >= Self::AX as u8 && v <= Self::R15W as u8
    }

    #[must_use]
    pub const fn is_gpr32(self) -> bool {
        let v = self as u8;
        v >= Self::EAX as u8 && v <= Self::R15D as u8
    }

    #[must_use]
    pub const fn is_gpr64(self) -> bool {
        let v = self as u8;
        v >= Self::RAX as u8 && v <= Self::R15 as u8
    }

    #[must_use]
    pub const fn is_gpr(self) -> bool {
        self.is_gpr8() || self.is_gpr16() || self.is_gpr32() || self.is_gpr64()
    }

    #[must_use]
    pub const fn is_segment(self) -> bool {
        let v = self as u8;
        v >= Self::ES as u8 && v <= Self::GS as u8
    }

    #[must_use]
    pub const fn is_k(self) -> bool {
        let v = self as u8;
        v >= Self::K0 as u8 && v <= Self::K7 as u8
    }

    #[must_use]
    pub const fn is_st(self) -> bool {
        let v = self as u8;
        v >= Self::ST0 as u8 && v <= Self::ST7 as u8
    }

    #[must_use]
    pub const fn is_vector(self) -> bool {
        let v = self as u8;
        v >= Self::XMM0 as u8 && v <= Self::ZMM31 as u8
    }

    /// The 16-bit form of a 16/32/64-bit GPR. Other registers are returned unchanged.
    #[must_use]
    pub fn to_gpr16(self) -> Self {
        self.convert_gpr(Self::AX)
    }

    /// The 32-bit form of a 16/32/64-bit GPR. Other registers are returned unchanged.
    #[must_use]
    pub fn to_gpr32(self) -> Self {
        self.convert_gpr(Self::EAX)
    }

    /// The 64-bit form of a 16/32/64-bit GPR. Other registers are returned unchanged.
    #[must_use]
    pub fn to_gpr64(self) -> Self {
        self.convert_gpr(Self::RAX)
    }

    fn convert_gpr(self, base: Self) -> Self {
        if !(self.is_gpr16() || self.is_gpr32() || self.is_gpr64()) {
            return self;
        }
        let number = self.number();
        u8::try_from(number)
            .ok()
            .and_then(|n| Self::from_index(base as u8 + n))
            .unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Register::None.name(), "");
        assert_eq!(Register::EAX.name(), "eax");
        assert_eq!(Register::R8L.name(), "r8b");
        assert_eq!(Register::R15W.name(), "r15w");
        assert_eq!(Register::ZMM31.name(), "zmm31");
        assert_eq!(Register::ST0.name(), "st0");
    }

    #[test]
    fn test_size_and_number() {
        assert_eq!(Register::AL.size(), 1);
        assert_eq!(Register::R9W.size(), 2);
        assert_eq!(Register::ECX.size(), 4);
        assert_eq!(Register::ECX.number(), 1);
        assert_eq!(Register::R10.number(), 10);
        assert_eq!(Register::XMM5.number(), 5);
        assert_eq!(Register::YMM0.size(), 32);
        assert_eq!(Register::MM7.number(), 7);
        assert_eq!(Register::MM7.size(), 8);
        assert_eq!(Register::ST3.size(), 10);
        assert_eq!(Register::None.size(), 0);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Register::RAX.to_gpr16(), Register::AX);
        assert_eq!(Register::R12D.to_gpr16(), Register::R12W);
        assert_eq!(Register::R12.to_gpr32(), Register::R12D);
        assert_eq!(Register::SI.to_gpr64(), Register::RSI);
        assert_eq!(Register::XMM1.to_gpr16(), Register::XMM1);
    }

    #[test]
    fn test_index_round_trip() {
        for reg in Register::values() {
            assert_eq!(Register::from_index(reg as u8), Some(reg));
        }
        assert_eq!(Register::from_index(u8::MAX), None);
    }
}
