// Generated by tools/gen_tables.py. Do not edit.

/// Intel-order rules for 454 codes.
pub(crate) static INTEL_RULES_DATA: [u8; 1421] = [
    0x01, 0x00, 0x08, 0x39, 0x08, 0x3E, 0x08, 0x3A, 0x08, 0x3D, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x08, 0x03, 0x00, 0x00, 0x2E, 0x08, 0x04, 0x03, 0x2E, 0x08, 0x01, 0x03,
    0x2E, 0x08, 0x02, 0x03, 0x2E, 0x08, 0x03, 0x03, 0x01, 0xA6, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x02, 0xA6, 0x01, 0x03, 0x00, 0x00, 0x2E, 0xA6, 0x01, 0x04, 0x03, 0x2E, 0xA6, 0x01,
    0x01, 0x03, 0x2E, 0xA6, 0x01, 0x02, 0x03, 0x2E, 0xA6, 0x01, 0x03, 0x03, 0x01, 0x07, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x07, 0x03, 0x00, 0x00, 0x2E, 0x07, 0x04, 0x03, 0x2E, 0x07,
    0x01, 0x03, 0x2E, 0x07, 0x02, 0x03, 0x2E, 0x07, 0x03, 0x03, 0x01, 0xBE, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x02, 0xBE, 0x01, 0x03, 0x00, 0x00, 0x2E, 0xBE, 0x01, 0x04, 0x03, 0x2E,
    0xBE, 0x01, 0x01, 0x03, 0x2E, 0xBE, 0x01, 0x02, 0x03, 0x2E, 0xBE, 0x01, 0x03, 0x03, 0x01, 0x0C,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x0C, 0x03, 0x00, 0x00, 0x2E, 0x0C, 0x04, 0x03,
    0x2E, 0x0C, 0x01, 0x03, 0x2E, 0x0C, 0x02, 0x03, 0x2E, 0x0C, 0x03, 0x03, 0x01, 0xEA, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xEA, 0x01, 0x03, 0x00, 0x00, 0x2E, 0xEA, 0x01, 0x04,
    0x03, 0x2E, 0xEA, 0x01, 0x01, 0x03, 0x2E, 0xEA, 0x01, 0x02, 0x03, 0x2E, 0xEA, 0x01, 0x03, 0x03,
    0x01, 0xF1, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xF1, 0x01, 0x03, 0x00, 0x00,
    0x2E, 0xF1, 0x01, 0x04, 0x03, 0x2E, 0xF1, 0x01, 0x01, 0x03, 0x2E, 0xF1, 0x01, 0x02, 0x03, 0x2E,
    0xF1, 0x01, 0x03, 0x03, 0x01, 0x27, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x27, 0x03,
    0x00, 0x00, 0x2E, 0x27, 0x04, 0x03, 0x2E, 0x27, 0x01, 0x03, 0x2E, 0x27, 0x02, 0x03, 0x2E, 0x27,
    0x03, 0x03, 0x01, 0xEC, 0x01, 0x00, 0x00, 0x02, 0xEC, 0x01, 0x03, 0x02, 0x4E, 0x03, 0x00, 0x00,
    0x00, 0x02, 0x3B, 0x03, 0x00, 0x00, 0x00, 0x02, 0xA3, 0x01, 0x03, 0x00, 0x00, 0x00, 0x02, 0xA5,
    0x01, 0x03, 0x00, 0x00, 0x00, 0x02, 0xA0, 0x01, 0x03, 0x00, 0x00, 0x00, 0x02, 0x3C, 0x03, 0x00,
    0x00, 0x00, 0x02, 0xE0, 0x01, 0x03, 0x00, 0x00, 0x02, 0xE1, 0x01, 0x03, 0x00, 0x00, 0x02, 0xBD,
    0x01, 0x03, 0x00, 0x00, 0x02, 0xBC, 0x01, 0x03, 0x00, 0x00, 0x01, 0x92, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x92, 0x01, 0x03, 0x2F, 0x92, 0x01, 0x04, 0x06, 0x03,
    0x0F, 0x92, 0x01, 0x01, 0x00, 0x00, 0x0F, 0x92, 0x01, 0x00, 0x00, 0x22, 0x92, 0x01, 0x10, 0x02,
    0x9F, 0x01, 0x01, 0x00, 0x00, 0x02, 0x9B, 0x01, 0x01, 0x00, 0x02, 0x9C, 0x01, 0x01, 0x02, 0x79,
    0x80, 0x80, 0x02, 0x00, 0x01, 0xEE, 0x01, 0x2A, 0xEE, 0x01, 0x01, 0x0F, 0x00, 0x01, 0x2F, 0x01,
    0x30, 0x01, 0x4D, 0x00, 0x30, 0x4D, 0x02, 0x30, 0x4D, 0x04, 0x03, 0x06, 0x03, 0x05, 0x01, 0x12,
    0x01, 0x37, 0x01, 0x13, 0x01, 0x32, 0x01, 0xB3, 0x01, 0x01, 0xB0, 0x01, 0x01, 0xB3, 0x01, 0x01,
    0xB0, 0x01, 0x01, 0xB3, 0x01, 0x01, 0xB0, 0x01, 0x02, 0xB3, 0x01, 0x03, 0x00, 0x00, 0x02, 0xB0,
    0x01, 0x03, 0x2C, 0xB3, 0x01, 0x10, 0x01, 0x2C, 0xB3, 0x01, 0x20, 0x02, 0x2C, 0xB3, 0x01, 0x40,
    0x03, 0x2D, 0xB3, 0x01, 0x10, 0x05, 0x2D, 0xB3, 0x01, 0x20, 0x06, 0x2D, 0xB3, 0x01, 0x40, 0x04,
    0x24, 0xB3, 0x01, 0x10, 0x00, 0x24, 0xB3, 0x01, 0x20, 0x00, 0x24, 0xB3, 0x01, 0x40, 0x00, 0x11,
    0xB4, 0x01, 0x01, 0x11, 0xB4, 0x01, 0x02, 0x11, 0xB4, 0x01, 0x03, 0x11, 0xB1, 0x01, 0x01, 0x11,
    0xB1, 0x01, 0x02, 0x11, 0xB1, 0x01, 0x03, 0x11, 0x54, 0x01, 0x11, 0x54, 0x02, 0x11, 0x54, 0x03,
    0x14, 0x7A, 0x10, 0x14, 0x7A, 0x40, 0x01, 0x40, 0x16, 0x10, 0x10, 0x01, 0x16, 0x10, 0x20, 0x01,
    0x16, 0x10, 0x40, 0x01, 0x16, 0x10, 0x10, 0x01, 0x16, 0x10, 0x20, 0x01, 0x16, 0x10, 0x40, 0x01,
    0x0B, 0x10, 0x10, 0x0B, 0x10, 0x20, 0x0C, 0x10, 0x20, 0x15, 0x61, 0x10, 0x80, 0x80, 0x18, 0x15,
    0x61, 0x20, 0x80, 0x80, 0x18, 0x15, 0x61, 0x40, 0x80, 0x80, 0x18, 0x16, 0x61, 0x10, 0x01, 0x16,
    0x61, 0x20, 0x01, 0x16, 0x61, 0x40, 0x01, 0x16, 0x61, 0x20, 0x01, 0x16, 0x61, 0x40, 0x01, 0x0B,
    0x61, 0x10, 0x0B, 0x61, 0x20, 0x0C, 0x61, 0x10, 0x0C, 0x61, 0x40, 0x12, 0xB7, 0x01, 0xB7, 0x01,
    0xBA, 0x01, 0xBA, 0x01, 0x07, 0xB7, 0x01, 0x00, 0x00, 0x00, 0x1D, 0x70, 0x00, 0x40, 0x80, 0x80,
    0x18, 0x1A, 0x70, 0x00, 0x40, 0x1D, 0x6C, 0x01, 0x40, 0x80, 0x80, 0x18, 0x1A, 0x6C, 0x01, 0x40,
    0x1F, 0x57, 0x59, 0x63, 0x02, 0x40, 0x80, 0x80, 0x18, 0x1C, 0x57, 0x59, 0x63, 0x02, 0x40, 0x1F,
    0x56, 0x64, 0x66, 0x03, 0x40, 0x80, 0x80, 0x18, 0x1C, 0x56, 0x64, 0x66, 0x03, 0x40, 0x1E, 0x5B,
    0x76, 0x04, 0x40, 0x80, 0x80, 0x18, 0x1B, 0x5B, 0x76, 0x04, 0x40, 0x1E, 0x67, 0x6F, 0x05, 0x40,
    0x80, 0x80, 0x18, 0x1B, 0x67, 0x6F, 0x05, 0x40, 0x1E, 0x58, 0x62, 0x06, 0x40, 0x80, 0x80, 0x18,
    0x1B, 0x58, 0x62, 0x06, 0x40, 0x1E, 0x55, 0x65, 0x07, 0x40, 0x80, 0x80, 0x18, 0x1B, 0x55, 0x65,
    0x07, 0x40, 0x1D, 0x75, 0x08, 0x40, 0x80, 0x80, 0x18, 0x1A, 0x75, 0x08, 0x40, 0x1D, 0x6E, 0x09,
    0x40, 0x80, 0x80, 0x18, 0x1A, 0x6E, 0x09, 0x40, 0x1E, 0x71, 0x72, 0x0A, 0x40, 0x80, 0x80, 0x18,
    0x1B, 0x71, 0x72, 0x0A, 0x40, 0x1E, 0x6D, 0x73, 0x0B, 0x40, 0x80, 0x80, 0x18, 0x1B, 0x6D, 0x73,
    0x0B, 0x40, 0x1E, 0x5F, 0x69, 0x0C, 0x40, 0x80, 0x80, 0x18, 0x1B, 0x5F, 0x69, 0x0C, 0x40, 0x1E,
    0x5E, 0x6A, 0x0D, 0x40, 0x80, 0x80, 0x18, 0x1B, 0x5E, 0x6A, 0x0D, 0x40, 0x1E, 0x60, 0x68, 0x0E,
    0x40, 0x80, 0x80, 0x18, 0x1B, 0x60, 0x68, 0x0E, 0x40, 0x1E, 0x5D, 0x6B, 0x0F, 0x40, 0x80, 0x80,
    0x18, 0x1B, 0x5D, 0x6B, 0x0F, 0x40, 0x1F, 0x57, 0x59, 0x63, 0x02, 0x20, 0x80, 0x80, 0x18, 0x1C,
    0x57, 0x59, 0x63, 0x02, 0x20, 0x1C, 0x57, 0x59, 0x63, 0x02, 0x10, 0x1F, 0x56, 0x64, 0x66, 0x03,
    0x20, 0x80, 0x80, 0x18, 0x1C, 0x56, 0x64, 0x66, 0x03, 0x20, 0x1C, 0x56, 0x64, 0x66, 0x03, 0x10,
    0x1E, 0x5B, 0x76, 0x04, 0x20, 0x80, 0x80, 0x18, 0x1B, 0x5B, 0x76, 0x04, 0x20, 0x1B, 0x5B, 0x76,
    0x04, 0x10, 0x1E, 0x67, 0x6F, 0x05, 0x20, 0x80, 0x80, 0x18, 0x1B, 0x67, 0x6F, 0x05, 0x20, 0x1B,
    0x67, 0x6F, 0x05, 0x10, 0x04, 0x5A, 0x10, 0x04, 0x5C, 0x20, 0x04, 0x74, 0x40, 0x21, 0x83, 0x01,
    0x10, 0x16, 0x21, 0x83, 0x01, 0x20, 0x26, 0x21, 0x83, 0x01, 0x40, 0x26, 0x21, 0x83, 0x01, 0x40,
    0x36, 0x20, 0x84, 0x01, 0x8B, 0x01, 0x04, 0x40, 0x36, 0x20, 0x87, 0x01, 0x89, 0x01, 0x05, 0x40,
    0x36, 0x20, 0x84, 0x01, 0x8B, 0x01, 0x04, 0x20, 0x26, 0x17, 0xDA, 0x01, 0x00, 0x17, 0xD6, 0x01,
    0x01, 0x19, 0xC4, 0x01, 0xC6, 0x01, 0xCD, 0x01, 0x02, 0x19, 0xC3, 0x01, 0xCE, 0x01, 0xD0, 0x01,
    0x03, 0x18, 0xC7, 0x01, 0xDF, 0x01, 0x04, 0x18, 0xD1, 0x01, 0xD9, 0x01, 0x05, 0x18, 0xC5, 0x01,
    0xCC, 0x01, 0x06, 0x18, 0xC2, 0x01, 0xCF, 0x01, 0x07, 0x17, 0xDE, 0x01, 0x08, 0x17, 0xD8, 0x01,
    0x09, 0x18, 0xDB, 0x01, 0xDC, 0x01, 0x0A, 0x18, 0xD7, 0x01, 0xDD, 0x01, 0x0B, 0x18, 0xCA, 0x01,
    0xD3, 0x01, 0x0C, 0x18, 0xC9, 0x01, 0xD4, 0x01, 0x0D, 0x18, 0xCB, 0x01, 0xD2, 0x01, 0x0E, 0x18,
    0xC8, 0x01, 0xD5, 0x01, 0x0F, 0x19, 0x17, 0x18, 0x1C, 0x02, 0x19, 0x16, 0x1D, 0x1E, 0x03, 0x18,
    0x19, 0x26, 0x04, 0x18, 0x1F, 0x22, 0x05, 0x18, 0x1B, 0x20, 0x0C, 0x18, 0x1A, 0x21, 0x0F, 0x17,
    0x25, 0x08, 0x18, 0x23, 0x24, 0x0A, 0x05, 0x96, 0x01, 0x05, 0x9A, 0x01, 0x05, 0x97, 0x01, 0x05,
    0x99, 0x01, 0x05, 0x2B, 0x05, 0x2D, 0x05, 0xE7, 0x01, 0x05, 0xE8, 0x01, 0x05, 0xE9, 0x01, 0x05,
    0x81, 0x01, 0x05, 0x82, 0x01, 0x05, 0xC0, 0x01, 0x05, 0xC1, 0x01, 0x05, 0xA8, 0x01, 0x05, 0x50,
    0x34, 0xF0, 0x01, 0x01, 0x4C, 0x01, 0xEB, 0x01, 0x01, 0x31, 0x01, 0xB6, 0x01, 0x01, 0xED, 0x01,
    0x01, 0x3F, 0x01, 0xAA, 0x01, 0x01, 0x7B, 0x01, 0x14, 0x01, 0xE5, 0x01, 0x01, 0x52, 0x10, 0xA4,
    0x01, 0x10, 0x15, 0x10, 0xA4, 0x01, 0x20, 0x25, 0x10, 0xA4, 0x01, 0x40, 0x35, 0x02, 0xA4, 0x01,
    0x03, 0x01, 0x51, 0x02, 0xB2, 0x01, 0x80, 0x80, 0x02, 0x0D, 0x53, 0x10, 0x0D, 0x53, 0x20, 0x0D,
    0x53, 0x40, 0x04, 0x91, 0x01, 0x10, 0x04, 0x91, 0x01, 0x20, 0x04, 0x91, 0x01, 0x40, 0x01, 0xA1,
    0x01, 0x01, 0xA2, 0x01, 0x13, 0x7C, 0x77, 0x10, 0x01, 0x7C, 0x00, 0x22, 0xE3, 0x01, 0x10, 0x23,
    0xE3, 0x01, 0x20, 0x23, 0xE3, 0x01, 0x40, 0x28, 0xE2, 0x01, 0x01, 0x92, 0x01, 0x01, 0x0E, 0x01,
    0x94, 0x01, 0x00, 0x80, 0x80, 0x01, 0x0A, 0x80, 0x80, 0x01, 0xB5, 0x01, 0x00, 0x80, 0x02, 0x35,
    0x03, 0x00, 0x01, 0xAF, 0x01, 0x29, 0xAF, 0x01, 0x01, 0x77, 0x25, 0xAB, 0x01, 0x25, 0x0D, 0x0E,
    0x8F, 0x01, 0x0E, 0x8E, 0x01, 0x80, 0x26, 0xAC, 0x01, 0x08, 0xA6, 0xAC, 0x01, 0x09, 0x27, 0x29,
    0x00, 0x27, 0x28, 0x01, 0x27, 0x2E, 0x02, 0x27, 0x2C, 0x03, 0xA7, 0x29, 0x04, 0xA7, 0x2C, 0x07,
    0xA7, 0x29, 0x04, 0xA7, 0x28, 0x05, 0xA7, 0xAD, 0x01, 0x0A, 0xA7, 0xAE, 0x01, 0x0B, 0x81, 0x94,
    0x01, 0x80, 0x81, 0xA9, 0x01, 0x81, 0x0A, 0x80, 0x89, 0x0A, 0x03, 0x89, 0x09, 0x03, 0x89, 0x0B,
    0x03, 0x89, 0xE4, 0x01, 0x02, 0x8A, 0x35, 0x03, 0x03, 0x80, 0x86, 0x34, 0x03, 0xAB, 0x90, 0x01,
    0x03, 0xAB, 0x36, 0x02, 0xAB, 0xBB, 0x01, 0x02, 0x02, 0x45, 0x03, 0x00, 0x00, 0x02, 0x48, 0x03,
    0x01, 0x45, 0x01, 0x48, 0x01, 0x47, 0x01, 0x41, 0x00, 0x32, 0x42, 0x01, 0x32, 0x46, 0x01, 0x33,
    0x49, 0x00, 0x31, 0x43, 0x01, 0x31, 0x44, 0x00, 0x31, 0x4B, 0x01, 0x01, 0x4A,
];
