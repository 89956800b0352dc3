// Generated by tools/gen_tables.py. Do not edit.

/// MASM rules for 454 codes.
pub(crate) static MASM_RULES_DATA: [u8; 1237] = [
    0x01, 0x00, 0x08, 0x39, 0x08, 0x3E, 0x08, 0x3A, 0x08, 0x3D, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x08, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xA6, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xA6, 0x01, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x07, 0x03, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xBE, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xBE, 0x01, 0x03,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
    0x0C, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xEA, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x02, 0xEA, 0x01, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xF1, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xF1, 0x01, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x27, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x27, 0x03, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xEC, 0x01, 0x00, 0x00, 0x02, 0xEC, 0x01, 0x03, 0x02, 0x4E, 0x03, 0x00, 0x00,
    0x00, 0x02, 0x3B, 0x03, 0x00, 0x00, 0x00, 0x02, 0xA3, 0x01, 0x03, 0x00, 0x00, 0x00, 0x02, 0xA5,
    0x01, 0x03, 0x00, 0x00, 0x00, 0x02, 0xA0, 0x01, 0x03, 0x00, 0x00, 0x00, 0x02, 0x3C, 0x03, 0x00,
    0x00, 0x00, 0x02, 0xE0, 0x01, 0x03, 0x00, 0x00, 0x02, 0xE1, 0x01, 0x03, 0x00, 0x00, 0x02, 0xBD,
    0x01, 0x03, 0x00, 0x00, 0x02, 0xBC, 0x01, 0x03, 0x00, 0x00, 0x01, 0x92, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x92, 0x01, 0x03, 0x00, 0x01, 0x92, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x9F, 0x01, 0x01, 0x00, 0x00, 0x02, 0x9B, 0x01, 0x01, 0x00, 0x02, 0x9C,
    0x01, 0x01, 0x02, 0x79, 0x80, 0x80, 0x02, 0x00, 0x01, 0xEE, 0x01, 0x1E, 0xEE, 0x01, 0x01, 0x0F,
    0x00, 0x01, 0x2F, 0x01, 0x30, 0x01, 0x4D, 0x00, 0x0A, 0x4D, 0x00, 0x03, 0x06, 0x03, 0x05, 0x01,
    0x12, 0x01, 0x37, 0x01, 0x13, 0x01, 0x32, 0x01, 0xB3, 0x01, 0x01, 0xB0, 0x01, 0x01, 0xB3, 0x01,
    0x01, 0xB0, 0x01, 0x01, 0xB3, 0x01, 0x01, 0xB0, 0x01, 0x02, 0xB3, 0x01, 0x03, 0x00, 0x00, 0x02,
    0xB0, 0x01, 0x03, 0x16, 0xB3, 0x01, 0x01, 0x16, 0xB3, 0x01, 0x02, 0x16, 0xB3, 0x01, 0x03, 0x16,
    0xB3, 0x01, 0x01, 0x16, 0xB3, 0x01, 0x02, 0x16, 0xB3, 0x01, 0x03, 0x16, 0xB3, 0x01, 0x01, 0x16,
    0xB3, 0x01, 0x02, 0x16, 0xB3, 0x01, 0x03, 0x16, 0xB4, 0x01, 0x01, 0x16, 0xB4, 0x01, 0x02, 0x16,
    0xB4, 0x01, 0x03, 0x16, 0xB1, 0x01, 0x01, 0x16, 0xB1, 0x01, 0x02, 0x16, 0xB1, 0x01, 0x03, 0x16,
    0x54, 0x01, 0x16, 0x54, 0x02, 0x16, 0x54, 0x03, 0x01, 0x7A, 0x00, 0x01, 0x40, 0x04, 0x10, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x10, 0x00, 0x02, 0x10, 0x03, 0x02, 0x61, 0x80, 0x80, 0x18,
    0x00, 0x00, 0x04, 0x61, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x61, 0x00, 0x02, 0x61, 0x03, 0x00,
    0x18, 0xB7, 0x01, 0xB7, 0x01, 0xBA, 0x01, 0xBA, 0x01, 0x01, 0x04, 0xB7, 0x01, 0x00, 0x00, 0x00,
    0x0D, 0x70, 0x00, 0x80, 0x80, 0x18, 0x0D, 0x70, 0x00, 0x00, 0x0D, 0x6C, 0x01, 0x80, 0x80, 0x18,
    0x0D, 0x6C, 0x01, 0x00, 0x0F, 0x57, 0x59, 0x63, 0x02, 0x80, 0x80, 0x18, 0x0F, 0x57, 0x59, 0x63,
    0x02, 0x00, 0x0F, 0x56, 0x64, 0x66, 0x03, 0x80, 0x80, 0x18, 0x0F, 0x56, 0x64, 0x66, 0x03, 0x00,
    0x0E, 0x5B, 0x76, 0x04, 0x80, 0x80, 0x18, 0x0E, 0x5B, 0x76, 0x04, 0x00, 0x0E, 0x67, 0x6F, 0x05,
    0x80, 0x80, 0x18, 0x0E, 0x67, 0x6F, 0x05, 0x00, 0x0E, 0x58, 0x62, 0x06, 0x80, 0x80, 0x18, 0x0E,
    0x58, 0x62, 0x06, 0x00, 0x0E, 0x55, 0x65, 0x07, 0x80, 0x80, 0x18, 0x0E, 0x55, 0x65, 0x07, 0x00,
    0x0D, 0x75, 0x08, 0x80, 0x80, 0x18, 0x0D, 0x75, 0x08, 0x00, 0x0D, 0x6E, 0x09, 0x80, 0x80, 0x18,
    0x0D, 0x6E, 0x09, 0x00, 0x0E, 0x71, 0x72, 0x0A, 0x80, 0x80, 0x18, 0x0E, 0x71, 0x72, 0x0A, 0x00,
    0x0E, 0x6D, 0x73, 0x0B, 0x80, 0x80, 0x18, 0x0E, 0x6D, 0x73, 0x0B, 0x00, 0x0E, 0x5F, 0x69, 0x0C,
    0x80, 0x80, 0x18, 0x0E, 0x5F, 0x69, 0x0C, 0x00, 0x0E, 0x5E, 0x6A, 0x0D, 0x80, 0x80, 0x18, 0x0E,
    0x5E, 0x6A, 0x0D, 0x00, 0x0E, 0x60, 0x68, 0x0E, 0x80, 0x80, 0x18, 0x0E, 0x60, 0x68, 0x0E, 0x00,
    0x0E, 0x5D, 0x6B, 0x0F, 0x80, 0x80, 0x18, 0x0E, 0x5D, 0x6B, 0x0F, 0x00, 0x0F, 0x57, 0x59, 0x63,
    0x02, 0x80, 0x80, 0x18, 0x0F, 0x57, 0x59, 0x63, 0x02, 0x00, 0x00, 0x0F, 0x56, 0x64, 0x66, 0x03,
    0x80, 0x80, 0x18, 0x0F, 0x56, 0x64, 0x66, 0x03, 0x00, 0x00, 0x0E, 0x5B, 0x76, 0x04, 0x80, 0x80,
    0x18, 0x0E, 0x5B, 0x76, 0x04, 0x00, 0x00, 0x0E, 0x67, 0x6F, 0x05, 0x80, 0x80, 0x18, 0x0E, 0x67,
    0x6F, 0x05, 0x00, 0x00, 0x01, 0x5A, 0x01, 0x5C, 0x01, 0x74, 0x16, 0x83, 0x01, 0x01, 0x16, 0x83,
    0x01, 0x02, 0x00, 0x16, 0x83, 0x01, 0x03, 0x17, 0x84, 0x01, 0x03, 0x04, 0x8B, 0x01, 0x86, 0x01,
    0x8D, 0x01, 0x17, 0x87, 0x01, 0x03, 0x05, 0x89, 0x01, 0x88, 0x01, 0x8A, 0x01, 0x17, 0x84, 0x01,
    0x02, 0x04, 0x8B, 0x01, 0x85, 0x01, 0x8C, 0x01, 0x05, 0xDA, 0x01, 0x00, 0x05, 0xD6, 0x01, 0x01,
    0x07, 0xC4, 0x01, 0xC6, 0x01, 0xCD, 0x01, 0x02, 0x07, 0xC3, 0x01, 0xCE, 0x01, 0xD0, 0x01, 0x03,
    0x06, 0xC7, 0x01, 0xDF, 0x01, 0x04, 0x06, 0xD1, 0x01, 0xD9, 0x01, 0x05, 0x06, 0xC5, 0x01, 0xCC,
    0x01, 0x06, 0x06, 0xC2, 0x01, 0xCF, 0x01, 0x07, 0x05, 0xDE, 0x01, 0x08, 0x05, 0xD8, 0x01, 0x09,
    0x06, 0xDB, 0x01, 0xDC, 0x01, 0x0A, 0x06, 0xD7, 0x01, 0xDD, 0x01, 0x0B, 0x06, 0xCA, 0x01, 0xD3,
    0x01, 0x0C, 0x06, 0xC9, 0x01, 0xD4, 0x01, 0x0D, 0x06, 0xCB, 0x01, 0xD2, 0x01, 0x0E, 0x06, 0xC8,
    0x01, 0xD5, 0x01, 0x0F, 0x07, 0x17, 0x18, 0x1C, 0x02, 0x07, 0x16, 0x1D, 0x1E, 0x03, 0x06, 0x19,
    0x26, 0x04, 0x06, 0x1F, 0x22, 0x05, 0x06, 0x1B, 0x20, 0x0C, 0x06, 0x1A, 0x21, 0x0F, 0x05, 0x25,
    0x08, 0x06, 0x23, 0x24, 0x0A, 0x24, 0x95, 0x01, 0x96, 0x01, 0x24, 0x95, 0x01, 0x9A, 0x01, 0x24,
    0x95, 0x01, 0x97, 0x01, 0x24, 0x95, 0x01, 0x99, 0x01, 0x25, 0x2A, 0x2B, 0x25, 0x2A, 0x2D, 0x26,
    0xE6, 0x01, 0xE7, 0x01, 0x26, 0xE6, 0x01, 0xE8, 0x01, 0x26, 0xE6, 0x01, 0xE9, 0x01, 0x27, 0x80,
    0x01, 0x81, 0x01, 0x27, 0x80, 0x01, 0x82, 0x01, 0x28, 0xBF, 0x01, 0xC0, 0x01, 0x28, 0xBF, 0x01,
    0xC1, 0x01, 0x23, 0xA7, 0x01, 0xA8, 0x01, 0x22, 0x4F, 0x50, 0x29, 0xEF, 0x01, 0xF0, 0x01, 0x01,
    0x4C, 0x01, 0xEB, 0x01, 0x01, 0x31, 0x01, 0xB6, 0x01, 0x01, 0xED, 0x01, 0x01, 0x3F, 0x01, 0xAA,
    0x01, 0x01, 0x7B, 0x01, 0x14, 0x01, 0xE5, 0x01, 0x0B, 0x51, 0x15, 0xA4, 0x01, 0x10, 0x15, 0x15,
    0xA4, 0x01, 0x20, 0x25, 0x15, 0xA4, 0x01, 0x40, 0x35, 0x02, 0xA4, 0x01, 0x03, 0x01, 0x51, 0x02,
    0xB2, 0x01, 0x80, 0x80, 0x02, 0x0C, 0x53, 0x10, 0x0C, 0x53, 0x20, 0x0C, 0x53, 0x40, 0x12, 0x91,
    0x01, 0x15, 0x26, 0x27, 0x12, 0x91, 0x01, 0x25, 0x26, 0x27, 0x12, 0x91, 0x01, 0x35, 0x26, 0x27,
    0x13, 0xA1, 0x01, 0x14, 0xA2, 0x01, 0x09, 0x7C, 0x01, 0x00, 0x7E, 0x09, 0x7C, 0x02, 0x00, 0x7D,
    0x11, 0x7C, 0x40, 0x01, 0xE3, 0x01, 0x00, 0x00, 0x1C, 0xE2, 0x01, 0x00, 0x01, 0x92, 0x01, 0x01,
    0x0E, 0x01, 0x94, 0x01, 0x00, 0x80, 0x80, 0x01, 0x0A, 0x80, 0x80, 0x01, 0xB5, 0x01, 0x00, 0x80,
    0x02, 0x35, 0x03, 0x00, 0x01, 0xAF, 0x01, 0x1D, 0xAF, 0x01, 0x00, 0x01, 0x77, 0x19, 0xAB, 0x01,
    0x19, 0x0D, 0x10, 0x8F, 0x01, 0x00, 0x10, 0x8E, 0x01, 0x00, 0x80, 0x1A, 0xAC, 0x01, 0x08, 0x9A,
    0xAC, 0x01, 0x09, 0x1B, 0x29, 0x00, 0x00, 0x1B, 0x28, 0x01, 0x00, 0x1B, 0x2E, 0x02, 0x00, 0x1B,
    0x2C, 0x03, 0x00, 0x9B, 0x29, 0x04, 0x00, 0x9B, 0x2C, 0x07, 0x00, 0x9B, 0x29, 0x04, 0x00, 0x9B,
    0x28, 0x05, 0x00, 0x9B, 0xAD, 0x01, 0x0A, 0x00, 0x9B, 0xAE, 0x01, 0x0B, 0x00, 0x81, 0x94, 0x01,
    0x80, 0x81, 0xA9, 0x01, 0x81, 0x0A, 0x80, 0x80, 0x81, 0x09, 0x81, 0x0B, 0x81, 0xE4, 0x01, 0x82,
    0x35, 0x03, 0x80, 0x82, 0x34, 0x03, 0x81, 0x90, 0x01, 0x81, 0x36, 0x81, 0xBB, 0x01, 0x02, 0x45,
    0x03, 0x00, 0x00, 0x02, 0x48, 0x03, 0x01, 0x45, 0x01, 0x48, 0x01, 0x47, 0x1F, 0x41, 0x20, 0x41,
    0x00, 0x20, 0x42, 0x01, 0x20, 0x46, 0x01, 0x20, 0x49, 0x00, 0x21, 0x43, 0x01, 0x21, 0x44, 0x00,
    0x21, 0x4B, 0x01, 0x1F, 0x4A,
];
