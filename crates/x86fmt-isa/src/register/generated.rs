// Generated by tools/gen_tables.py. Do not edit.

/// Architectural register.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(u8)]
pub enum Register {
    #[default]
    None = 0,
    AL = 1,
    CL = 2,
    DL = 3,
    BL = 4,
    AH = 5,
    CH = 6,
    DH = 7,
    BH = 8,
    SPL = 9,
    BPL = 10,
    SIL = 11,
    DIL = 12,
    R8L = 13,
    R9L = 14,
    R10L = 15,
    R11L = 16,
    R12L = 17,
    R13L = 18,
    R14L = 19,
    R15L = 20,
    AX = 21,
    CX = 22,
    DX = 23,
    BX = 24,
    SP = 25,
    BP = 26,
    SI = 27,
    DI = 28,
    R8W = 29,
    R9W = 30,
    R10W = 31,
    R11W = 32,
    R12W = 33,
    R13W = 34,
    R14W = 35,
    R15W = 36,
    EAX = 37,
    ECX = 38,
    EDX = 39,
    EBX = 40,
    ESP = 41,
    EBP = 42,
    ESI = 43,
    EDI = 44,
    R8D = 45,
    R9D = 46,
    R10D = 47,
    R11D = 48,
    R12D = 49,
    R13D = 50,
    R14D = 51,
    R15D = 52,
    RAX = 53,
    RCX = 54,
    RDX = 55,
    RBX = 56,
    RSP = 57,
    RBP = 58,
    RSI = 59,
    RDI = 60,
    R8 = 61,
    R9 = 62,
    R10 = 63,
    R11 = 64,
    R12 = 65,
    R13 = 66,
    R14 = 67,
    R15 = 68,
    EIP = 69,
    RIP = 70,
    ES = 71,
    CS = 72,
    SS = 73,
    DS = 74,
    FS = 75,
    GS = 76,
    XMM0 = 77,
    XMM1 = 78,
    XMM2 = 79,
    XMM3 = 80,
    XMM4 = 81,
    XMM5 = 82,
    XMM6 = 83,
    XMM7 = 84,
    XMM8 = 85,
    XMM9 = 86,
    XMM10 = 87,
    XMM11 = 88,
    XMM12 = 89,
    XMM13 = 90,
    XMM14 = 91,
    XMM15 = 92,
    XMM16 = 93,
    XMM17 = 94,
    XMM18 = 95,
    XMM19 = 96,
    XMM20 = 97,
    XMM21 = 98,
    XMM22 = 99,
    XMM23 = 100,
    XMM24 = 101,
    XMM25 = 102,
    XMM26 = 103,
    XMM27 = 104,
    XMM28 = 105,
    XMM29 = 106,
    XMM30 = 107,
    XMM31 = 108,
    YMM0 = 109,
    YMM1 = 110,
    YMM2 = 111,
    YMM3 = 112,
    YMM4 = 113,
    YMM5 = 114,
    YMM6 = 115,
    YMM7 = 116,
    YMM8 = 117,
    YMM9 = 118,
    YMM10 = 119,
    YMM11 = 120,
    YMM12 = 121,
    YMM13 = 122,
    YMM14 = 123,
    YMM15 = 124,
    YMM16 = 125,
    YMM17 = 126,
    YMM18 = 127,
    YMM19 = 128,
    YMM20 = 129,
    YMM21 = 130,
    YMM22 = 131,
    YMM23 = 132,
    YMM24 = 133,
    YMM25 = 134,
    YMM26 = 135,
    YMM27 = 136,
    YMM28 = 137,
    YMM29 = 138,
    YMM30 = 139,
    YMM31 = 140,
    ZMM0 = 141,
    ZMM1 = 142,
    ZMM2 = 143,
    ZMM3 = 144,
    ZMM4 = 145,
    ZMM5 = 146,
    ZMM6 = 147,
    ZMM7 = 148,
    ZMM8 = 149,
    ZMM9 = 150,
    ZMM10 = 151,
    ZMM11 = 152,
    ZMM12 = 153,
    ZMM13 = 154,
    ZMM14 = 155,
    ZMM15 = 156,
    ZMM16 = 157,
    ZMM17 = 158,
    ZMM18 = 159,
    ZMM19 = 160,
    ZMM20 = 161,
    ZMM21 = 162,
    ZMM22 = 163,
    ZMM23 = 164,
    ZMM24 = 165,
    ZMM25 = 166,
    ZMM26 = 167,
    ZMM27 = 168,
    ZMM28 = 169,
    ZMM29 = 170,
    ZMM30 = 171,
    ZMM31 = 172,
    K0 = 173,
    K1 = 174,
    K2 = 175,
    K3 = 176,
    K4 = 177,
    K5 = 178,
    K6 = 179,
    K7 = 180,
    BND0 = 181,
    BND1 = 182,
    BND2 = 183,
    BND3 = 184,
    CR0 = 185,
    CR1 = 186,
    CR2 = 187,
    CR3 = 188,
    CR4 = 189,
    CR5 = 190,
    CR6 = 191,
    CR7 = 192,
    CR8 = 193,
    CR9 = 194,
    CR10 = 195,
    CR11 = 196,
    CR12 = 197,
    CR13 = 198,
    CR14 = 199,
    CR15 = 200,
    DR0 = 201,
    DR1 = 202,
    DR2 = 203,
    DR3 = 204,
    DR4 = 205,
    DR5 = 206,
    DR6 = 207,
    DR7 = 208,
    DR8 = 209,
    DR9 = 210,
    DR10 = 211,
    DR11 = 212,
    DR12 = 213,
    DR13 = 214,
    DR14 = 215,
    DR15 = 216,
    ST0 = 217,
    ST1 = 218,
    ST2 = 219,
    ST3 = 220,
    ST4 = 221,
    ST5 = 222,
    ST6 = 223,
    ST7 = 224,
    MM0 = 225,
    MM1 = 226,
    MM2 = 227,
    MM3 = 228,
    MM4 = 229,
    MM5 = 230,
    MM6 = 231,
    MM7 = 232,
}

pub(crate) const REGISTER_COUNT: usize = 233;

pub(crate) static ALL_REGISTERS: [Register; REGISTER_COUNT] = [
    Register::None,
    Register::AL,
    Register::CL,
    Register::DL,
    Register::BL,
    Register::AH,
    Register::CH,
    Register::DH,
    Register::BH,
    Register::SPL,
    Register::BPL,
    Register::SIL,
    Register::DIL,
    Register::R8L,
    Register::R9L,
    Register::R10L,
    Register::R11L,
    Register::R12L,
    Register::R13L,
    Register::R14L,
    Register::R15L,
    Register::AX,
    Register::CX,
    Register::DX,
    Register::BX,
    Register::SP,
    Register::BP,
    Register::SI,
    Register::DI,
    Register::R8W,
    Register::R9W,
    Register::R10W,
    Register::R11W,
    Register::R12W,
    Register::R13W,
    Register::R14W,
    Register::R15W,
    Register::EAX,
    Register::ECX,
    Register::EDX,
    Register::EBX,
    Register::ESP,
    Register::EBP,
    Register::ESI,
    Register::EDI,
    Register::R8D,
    Register::R9D,
    Register::R10D,
    Register::R11D,
    Register::R12D,
    Register::R13D,
    Register::R14D,
    Register::R15D,
    Register::RAX,
    Register::RCX,
    Register::RDX,
    Register::RBX,
    Register::RSP,
    Register::RBP,
    Register::RSI,
    Register::RDI,
    Register::R8,
    Register::R9,
    Register::R10,
    Register::R11,
    Register::R12,
    Register::R13,
    Register::R14,
    Register::R15,
    Register::EIP,
    Register::RIP,
    Register::ES,
    Register::CS,
    Register::SS,
    Register::DS,
    Register::FS,
    Register::GS,
    Register::XMM0,
    Register::XMM1,
    Register::XMM2,
    Register::XMM3,
    Register::XMM4,
    Register::XMM5,
    Register::XMM6,
    Register::XMM7,
    Register::XMM8,
    Register::XMM9,
    Register::XMM10,
    Register::XMM11,
    Register::XMM12,
    Register::XMM13,
    Register::XMM14,
    Register::XMM15,
    Register::XMM16,
    Register::XMM17,
    Register::XMM18,
    Register::XMM19,
    Register::XMM20,
    Register::XMM21,
    Register::XMM22,
    Register::XMM23,
    Register::XMM24,
    Register::XMM25,
    Register::XMM26,
    Register::XMM27,
    Register::XMM28,
    Register::XMM29,
    Register::XMM30,
    Register::XMM31,
    Register::YMM0,
    Register::YMM1,
    Register::YMM2,
    Register::YMM3,
    Register::YMM4,
    Register::YMM5,
    Register::YMM6,
    Register::YMM7,
    Register::YMM8,
    Register::YMM9,
    Register::YMM10,
    Register::YMM11,
    Register::YMM12,
    Register::YMM13,
    Register::YMM14,
    Register::YMM15,
    Register::YMM16,
    Register::YMM17,
    Register::YMM18,
    Register::YMM19,
    Register::YMM20,
    Register::YMM21,
    Register::YMM22,
    Register::YMM23,
    Register::YMM24,
    Register::YMM25,
    Register::YMM26,
    Register::YMM27,
    Register::YMM28,
    Register::YMM29,
    Register::YMM30,
    Register::YMM31,
    Register::ZMM0,
    Register::ZMM1,
    Register::ZMM2,
    Register::ZMM3,
    Register::ZMM4,
    Register::ZMM5,
    Register::ZMM6,
    Register::ZMM7,
    Register::ZMM8,
    Register::ZMM9,
    Register::ZMM10,
    Register::ZMM11,
    Register::ZMM12,
    Register::ZMM13,
    Register::ZMM14,
    Register::ZMM15,
    Register::ZMM16,
    Register::ZMM17,
    Register::ZMM18,
    Register::ZMM19,
    Register::ZMM20,
    Register::ZMM21,
    Register::ZMM22,
    Register::ZMM23,
    Register::ZMM24,
    Register::ZMM25,
    Register::ZMM26,
    Register::ZMM27,
    Register::ZMM28,
    Register::ZMM29,
    Register::ZMM30,
    Register::ZMM31,
    Register::K0,
    Register::K1,
    Register::K2,
    Register::K3,
    Register::K4,
    Register::K5,
    Register::K6,
    Register::K7,
    Register::BND0,
    Register::BND1,
    Register::BND2,
    Register::BND3,
    Register::CR0,
    Register::CR1,
    Register::CR2,
    Register::CR3,
    Register::CR4,
    Register::CR5,
    Register::CR6,
    Register::CR7,
    Register::CR8,
    Register::CR9,
    Register::CR10,
    Register::CR11,
    Register::CR12,
    Register::CR13,
    Register::CR14,
    Register::CR15,
    Register::DR0,
    Register::DR1,
    Register::DR2,
    Register::DR3,
    Register::DR4,
    Register::DR5,
    Register::DR6,
    Register::DR7,
    Register::DR8,
    Register::DR9,
    Register::DR10,
    Register::DR11,
    Register::DR12,
    Register::DR13,
    Register::DR14,
    Register::DR15,
    Register::ST0,
    Register::ST1,
    Register::ST2,
    Register::ST3,
    Register::ST4,
    Register::ST5,
    Register::ST6,
    Register::ST7,
    Register::MM0,
    Register::MM1,
    Register::MM2,
    Register::MM3,
    Register::MM4,
    Register::MM5,
    Register::MM6,
    Register::MM7,
];

pub(crate) static REGISTER_NAMES: [&str; REGISTER_COUNT] = [
    "",
    "al",
    "cl",
    "dl",
    "bl",
    "ah",
    "ch",
    "dh",
    "bh",
    "spl",
    "bpl",
    "sil",
    "dil",
    "r8b",
    "r9b",
    "r10b",
    "r11b",
    "r12b",
    "r13b",
    "r14b",
    "r15b",
    "ax",
    "cx",
    "dx",
    "bx",
    "sp",
    "bp",
    "si",
    "di",
    "r8w",
    "r9w",
    "r10w",
    "r11w",
    "r12w",
    "r13w",
    "r14w",
    "r15w",
    "eax",
    "ecx",
    "edx",
    "ebx",
    "esp",
    "ebp",
    "esi",
    "edi",
    "r8d",
    "r9d",
    "r10d",
    "r11d",
    "r12d",
    "r13d",
    "r14d",
    "r15d",
    "rax",
    "rcx",
    "rdx",
    "rbx",
    "rsp",
    "rbp",
    "rsi",
    "rdi",
    "r8",
    "r9",
    "r10",
    "r11",
    "r12",
    "r13",
    "r14",
    "r15",
    "eip",
    "rip",
    "es",
    "cs",
    "ss",
    "ds",
    "fs",
    "gs",
    "xmm0",
    "xmm1",
    "xmm2",
    "xmm3",
    "xmm4",
    "xmm5",
    "xmm6",
    "xmm7",
    "xmm8",
    "xmm9",
    "xmm10",
    "xmm11",
    "xmm12",
    "xmm13",
    "xmm14",
    "xmm15",
    "xmm16",
    "xmm17",
    "xmm18",
    "xmm19",
    "xmm20",
    "xmm21",
    "xmm22",
    "xmm23",
    "xmm24",
    "xmm25",
    "xmm26",
    "xmm27",
    "xmm28",
    "xmm29",
    "xmm30",
    "xmm31",
    "ymm0",
    "ymm1",
    "ymm2",
    "ymm3",
    "ymm4",
    "ymm5",
    "ymm6",
    "ymm7",
    "ymm8",
    "ymm9",
    "ymm10",
    "ymm11",
    "ymm12",
    "ymm13",
    "ymm14",
    "ymm15",
    "ymm16",
    "ymm17",
    "ymm18",
    "ymm19",
    "ymm20",
    "ymm21",
    "ymm22",
    "ymm23",
    "ymm24",
    "ymm25",
    "ymm26",
    "ymm27",
    "ymm28",
    "ymm29",
    "ymm30",
    "ymm31",
    "zmm0",
    "zmm1",
    "zmm2",
    "zmm3",
    "zmm4",
    "zmm5",
    "zmm6",
    "zmm7",
    "zmm8",
    "zmm9",
    "zmm10",
    "zmm11",
    "zmm12",
    "zmm13",
    "zmm14",
    "zmm15",
    "zmm16",
    "zmm17",
    "zmm18",
    "zmm19",
    "zmm20",
    "zmm21",
    "zmm22",
    "zmm23",
    "zmm24",
    "zmm25",
    "zmm26",
    "zmm27",
    "zmm28",
    "zmm29",
    "zmm30",
    "zmm31",
    "k0",
    "k1",
    "k2",
    "k3",
    "k4",
    "k5",
    "k6",
    "k7",
    "bnd0",
    "bnd1",
    "bnd2",
    "bnd3",
    "cr0",
    "cr1",
    "cr2",
    "cr3",
    "cr4",
    "cr5",
    "cr6",
    "cr7",
    "cr8",
    "cr9",
    "cr10",
    "cr11",
    "cr12",
    "cr13",
    "cr14",
    "cr15",
    "dr0",
    "dr1",
    "dr2",
    "dr3",
    "dr4",
    "dr5",
    "dr6",
    "dr7",
    "dr8",
    "dr9",
    "dr10",
    "dr11",
    "dr12",
    "dr13",
    "dr14",
    "dr15",
    "st0",
    "st1",
    "st2",
    "st3",
    "st4",
    "st5",
    "st6",
    "st7",
    "mm0",
    "mm1",
    "mm2",
    "mm3",
    "mm4",
    "mm5",
    "mm6",
    "mm7",
];
