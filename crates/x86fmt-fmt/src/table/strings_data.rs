// Generated by tools/gen_tables.py. Do not edit.

/// 242 mnemonic strings.
pub(crate) static STRINGS_DATA: [u8; 1351] = [
    0xF2, 0x01, 0x05, 0x28, 0x62, 0x61, 0x64, 0x29, 0x05, 0x2E, 0x62, 0x79, 0x74, 0x65, 0x05, 0x2E,
    0x6C, 0x6F, 0x6E, 0x67, 0x05, 0x2E, 0x71, 0x75, 0x61, 0x64, 0x05, 0x2E, 0x77, 0x6F, 0x72, 0x64,
    0x03, 0x61, 0x61, 0x64, 0x03, 0x61, 0x61, 0x6D, 0x03, 0x61, 0x64, 0x63, 0x03, 0x61, 0x64, 0x64,
    0x05, 0x61, 0x64, 0x64, 0x70, 0x64, 0x05, 0x61, 0x64, 0x64, 0x70, 0x73, 0x05, 0x61, 0x64, 0x64,
    0x73, 0x64, 0x03, 0x61, 0x6E, 0x64, 0x08, 0x62, 0x6C, 0x65, 0x6E, 0x64, 0x76, 0x70, 0x73, 0x05,
    0x62, 0x6E, 0x64, 0x6D, 0x6B, 0x05, 0x62, 0x73, 0x77, 0x61, 0x70, 0x04, 0x63, 0x61, 0x6C, 0x6C,
    0x04, 0x63, 0x62, 0x74, 0x77, 0x03, 0x63, 0x62, 0x77, 0x04, 0x63, 0x64, 0x71, 0x65, 0x03, 0x63,
    0x6C, 0x63, 0x04, 0x63, 0x6C, 0x74, 0x71, 0x06, 0x63, 0x6D, 0x6F, 0x76, 0x61, 0x65, 0x05, 0x63,
    0x6D, 0x6F, 0x76, 0x62, 0x05, 0x63, 0x6D, 0x6F, 0x76, 0x63, 0x05, 0x63, 0x6D, 0x6F, 0x76, 0x65,
    0x05, 0x63, 0x6D, 0x6F, 0x76, 0x67, 0x05, 0x63, 0x6D, 0x6F, 0x76, 0x6C, 0x07, 0x63, 0x6D, 0x6F,
    0x76, 0x6E, 0x61, 0x65, 0x06, 0x63, 0x6D, 0x6F, 0x76, 0x6E, 0x62, 0x06, 0x63, 0x6D, 0x6F, 0x76,
    0x6E, 0x63, 0x06, 0x63, 0x6D, 0x6F, 0x76, 0x6E, 0x65, 0x07, 0x63, 0x6D, 0x6F, 0x76, 0x6E, 0x67,
    0x65, 0x07, 0x63, 0x6D, 0x6F, 0x76, 0x6E, 0x6C, 0x65, 0x06, 0x63, 0x6D, 0x6F, 0x76, 0x6E, 0x7A,
    0x05, 0x63, 0x6D, 0x6F, 0x76, 0x70, 0x06, 0x63, 0x6D, 0x6F, 0x76, 0x70, 0x65, 0x05, 0x63, 0x6D,
    0x6F, 0x76, 0x73, 0x05, 0x63, 0x6D, 0x6F, 0x76, 0x7A, 0x03, 0x63, 0x6D, 0x70, 0x05, 0x63, 0x6D,
    0x70, 0x70, 0x64, 0x05, 0x63, 0x6D, 0x70, 0x70, 0x73, 0x04, 0x63, 0x6D, 0x70, 0x73, 0x05, 0x63,
    0x6D, 0x70, 0x73, 0x62, 0x05, 0x63, 0x6D, 0x70, 0x73, 0x64, 0x05, 0x63, 0x6D, 0x70, 0x73, 0x71,
    0x05, 0x63, 0x6D, 0x70, 0x73, 0x73, 0x07, 0x63, 0x6D, 0x70, 0x78, 0x63, 0x68, 0x67, 0x0A, 0x63,
    0x6D, 0x70, 0x78, 0x63, 0x68, 0x67, 0x31, 0x36, 0x62, 0x05, 0x63, 0x70, 0x75, 0x69, 0x64, 0x03,
    0x63, 0x71, 0x6F, 0x04, 0x63, 0x71, 0x74, 0x6F, 0x08, 0x63, 0x76, 0x74, 0x70, 0x64, 0x32, 0x70,
    0x73, 0x08, 0x63, 0x76, 0x74, 0x73, 0x69, 0x32, 0x73, 0x64, 0x09, 0x63, 0x76, 0x74, 0x74, 0x73,
    0x73, 0x32, 0x73, 0x69, 0x04, 0x63, 0x77, 0x64, 0x65, 0x04, 0x63, 0x77, 0x74, 0x6C, 0x02, 0x64,
    0x62, 0x02, 0x64, 0x64, 0x03, 0x64, 0x65, 0x63, 0x03, 0x64, 0x69, 0x76, 0x02, 0x64, 0x71, 0x02,
    0x64, 0x77, 0x07, 0x65, 0x6E, 0x64, 0x62, 0x72, 0x36, 0x34, 0x05, 0x65, 0x6E, 0x74, 0x65, 0x72,
    0x04, 0x66, 0x61, 0x64, 0x64, 0x05, 0x66, 0x61, 0x64, 0x64, 0x70, 0x04, 0x66, 0x63, 0x6F, 0x6D,
    0x05, 0x66, 0x63, 0x6F, 0x6D, 0x70, 0x03, 0x66, 0x6C, 0x64, 0x05, 0x66, 0x6D, 0x75, 0x6C, 0x70,
    0x07, 0x66, 0x6E, 0x73, 0x74, 0x65, 0x6E, 0x76, 0x04, 0x66, 0x73, 0x74, 0x70, 0x06, 0x66, 0x73,
    0x75, 0x62, 0x72, 0x70, 0x06, 0x66, 0x75, 0x63, 0x6F, 0x6D, 0x69, 0x04, 0x66, 0x78, 0x63, 0x68,
    0x03, 0x68, 0x6C, 0x74, 0x04, 0x69, 0x6D, 0x75, 0x6C, 0x03, 0x69, 0x6E, 0x63, 0x03, 0x69, 0x6E,
    0x73, 0x04, 0x69, 0x6E, 0x73, 0x62, 0x03, 0x69, 0x6E, 0x74, 0x04, 0x69, 0x6E, 0x74, 0x33, 0x07,
    0x69, 0x6E, 0x76, 0x6C, 0x70, 0x67, 0x61, 0x04, 0x69, 0x72, 0x65, 0x74, 0x02, 0x6A, 0x61, 0x03,
    0x6A, 0x61, 0x65, 0x02, 0x6A, 0x62, 0x03, 0x6A, 0x62, 0x65, 0x02, 0x6A, 0x63, 0x04, 0x6A, 0x63,
    0x78, 0x7A, 0x02, 0x6A, 0x65, 0x05, 0x6A, 0x65, 0x63, 0x78, 0x7A, 0x02, 0x6A, 0x67, 0x03, 0x6A,
    0x67, 0x65, 0x02, 0x6A, 0x6C, 0x03, 0x6A, 0x6C, 0x65, 0x03, 0x6A, 0x6D, 0x70, 0x03, 0x6A, 0x6E,
    0x61, 0x04, 0x6A, 0x6E, 0x61, 0x65, 0x03, 0x6A, 0x6E, 0x62, 0x04, 0x6A, 0x6E, 0x62, 0x65, 0x03,
    0x6A, 0x6E, 0x63, 0x03, 0x6A, 0x6E, 0x65, 0x03, 0x6A, 0x6E, 0x67, 0x04, 0x6A, 0x6E, 0x67, 0x65,
    0x03, 0x6A, 0x6E, 0x6C, 0x04, 0x6A, 0x6E, 0x6C, 0x65, 0x03, 0x6A, 0x6E, 0x6F, 0x03, 0x6A, 0x6E,
    0x70, 0x03, 0x6A, 0x6E, 0x73, 0x03, 0x6A, 0x6E, 0x7A, 0x02, 0x6A, 0x6F, 0x02, 0x6A, 0x70, 0x03,
    0x6A, 0x70, 0x65, 0x03, 0x6A, 0x70, 0x6F, 0x05, 0x6A, 0x72, 0x63, 0x78, 0x7A, 0x02, 0x6A, 0x73,
    0x02, 0x6A, 0x7A, 0x05, 0x6B, 0x6D, 0x6F, 0x76, 0x77, 0x05, 0x6C, 0x63, 0x61, 0x6C, 0x6C, 0x03,
    0x6C, 0x65, 0x61, 0x05, 0x6C, 0x65, 0x61, 0x76, 0x65, 0x06, 0x6C, 0x66, 0x65, 0x6E, 0x63, 0x65,
    0x04, 0x6C, 0x67, 0x64, 0x74, 0x05, 0x6C, 0x67, 0x64, 0x74, 0x64, 0x05, 0x6C, 0x67, 0x64, 0x74,
    0x77, 0x04, 0x6C, 0x6A, 0x6D, 0x70, 0x04, 0x6C, 0x6F, 0x64, 0x73, 0x05, 0x6C, 0x6F, 0x64, 0x73,
    0x62, 0x05, 0x6C, 0x6F, 0x64, 0x73, 0x71, 0x04, 0x6C, 0x6F, 0x6F, 0x70, 0x05, 0x6C, 0x6F, 0x6F,
    0x70, 0x65, 0x06, 0x6C, 0x6F, 0x6F, 0x70, 0x65, 0x64, 0x06, 0x6C, 0x6F, 0x6F, 0x70, 0x65, 0x71,
    0x06, 0x6C, 0x6F, 0x6F, 0x70, 0x6E, 0x65, 0x07, 0x6C, 0x6F, 0x6F, 0x70, 0x6E, 0x65, 0x71, 0x06,
    0x6C, 0x6F, 0x6F, 0x70, 0x6E, 0x7A, 0x07, 0x6C, 0x6F, 0x6F, 0x70, 0x6E, 0x7A, 0x71, 0x05, 0x6C,
    0x6F, 0x6F, 0x70, 0x7A, 0x06, 0x6C, 0x6F, 0x6F, 0x70, 0x7A, 0x64, 0x06, 0x6C, 0x6F, 0x6F, 0x70,
    0x7A, 0x71, 0x0A, 0x6D, 0x61, 0x73, 0x6B, 0x6D, 0x6F, 0x76, 0x64, 0x71, 0x75, 0x08, 0x6D, 0x61,
    0x73, 0x6B, 0x6D, 0x6F, 0x76, 0x71, 0x05, 0x6D, 0x61, 0x78, 0x70, 0x73, 0x07, 0x6D, 0x6F, 0x6E,
    0x69, 0x74, 0x6F, 0x72, 0x03, 0x6D, 0x6F, 0x76, 0x06, 0x6D, 0x6F, 0x76, 0x61, 0x62, 0x73, 0x06,
    0x6D, 0x6F, 0x76, 0x61, 0x70, 0x73, 0x04, 0x6D, 0x6F, 0x76, 0x73, 0x05, 0x6D, 0x6F, 0x76, 0x73,
    0x62, 0x05, 0x6D, 0x6F, 0x76, 0x73, 0x64, 0x05, 0x6D, 0x6F, 0x76, 0x73, 0x6C, 0x05, 0x6D, 0x6F,
    0x76, 0x73, 0x71, 0x05, 0x6D, 0x6F, 0x76, 0x73, 0x77, 0x05, 0x6D, 0x6F, 0x76, 0x73, 0x78, 0x06,
    0x6D, 0x6F, 0x76, 0x73, 0x78, 0x64, 0x05, 0x6D, 0x6F, 0x76, 0x7A, 0x62, 0x05, 0x6D, 0x6F, 0x76,
    0x7A, 0x77, 0x05, 0x6D, 0x6F, 0x76, 0x7A, 0x78, 0x03, 0x6D, 0x75, 0x6C, 0x05, 0x6D, 0x77, 0x61,
    0x69, 0x74, 0x06, 0x6D, 0x77, 0x61, 0x69, 0x74, 0x78, 0x03, 0x6E, 0x65, 0x67, 0x03, 0x6E, 0x6F,
    0x70, 0x03, 0x6E, 0x6F, 0x74, 0x02, 0x6F, 0x72, 0x04, 0x6F, 0x75, 0x74, 0x73, 0x05, 0x6F, 0x75,
    0x74, 0x73, 0x62, 0x05, 0x70, 0x61, 0x64, 0x64, 0x64, 0x05, 0x70, 0x61, 0x75, 0x73, 0x65, 0x08,
    0x70, 0x62, 0x6C, 0x65, 0x6E, 0x64, 0x76, 0x62, 0x09, 0x70, 0x63, 0x6C, 0x6D, 0x75, 0x6C, 0x71,
    0x64, 0x71, 0x05, 0x70, 0x63, 0x6D, 0x70, 0x64, 0x06, 0x70, 0x63, 0x6D, 0x70, 0x75, 0x64, 0x06,
    0x70, 0x65, 0x78, 0x74, 0x72, 0x77, 0x03, 0x70, 0x6F, 0x70, 0x04, 0x70, 0x6F, 0x70, 0x66, 0x0B,
    0x70, 0x72, 0x65, 0x66, 0x65, 0x74, 0x63, 0x68, 0x6E, 0x74, 0x61, 0x04, 0x70, 0x75, 0x73, 0x68,
    0x05, 0x70, 0x75, 0x73, 0x68, 0x66, 0x04, 0x70, 0x78, 0x6F, 0x72, 0x05, 0x72, 0x64, 0x74, 0x73,
    0x63, 0x03, 0x72, 0x65, 0x74, 0x04, 0x72, 0x65, 0x74, 0x6C, 0x04, 0x72, 0x65, 0x74, 0x71, 0x04,
    0x72, 0x65, 0x74, 0x77, 0x0A, 0x72, 0x6E, 0x64, 0x73, 0x63, 0x61, 0x6C, 0x65, 0x70, 0x73, 0x03,
    0x72, 0x6F, 0x6C, 0x03, 0x73, 0x61, 0x72, 0x03, 0x73, 0x62, 0x62, 0x04, 0x73, 0x63, 0x61, 0x73,
    0x05, 0x73, 0x63, 0x61, 0x73, 0x62, 0x05, 0x73, 0x63, 0x61, 0x73, 0x71, 0x04, 0x73, 0x65, 0x74,
    0x61, 0x05, 0x73, 0x65, 0x74, 0x61, 0x65, 0x04, 0x73, 0x65, 0x74, 0x62, 0x05, 0x73, 0x65, 0x74,
    0x62, 0x65, 0x04, 0x73, 0x65, 0x74, 0x63, 0x04, 0x73, 0x65, 0x74, 0x65, 0x04, 0x73, 0x65, 0x74,
    0x67, 0x05, 0x73, 0x65, 0x74, 0x67, 0x65, 0x04, 0x73, 0x65, 0x74, 0x6C, 0x05, 0x73, 0x65, 0x74,
    0x6C, 0x65, 0x05, 0x73, 0x65, 0x74, 0x6E, 0x61, 0x06, 0x73, 0x65, 0x74, 0x6E, 0x61, 0x65, 0x05,
    0x73, 0x65, 0x74, 0x6E, 0x62, 0x06, 0x73, 0x65, 0x74, 0x6E, 0x62, 0x65, 0x05, 0x73, 0x65, 0x74,
    0x6E, 0x63, 0x05, 0x73, 0x65, 0x74, 0x6E, 0x65, 0x05, 0x73, 0x65, 0x74, 0x6E, 0x67, 0x06, 0x73,
    0x65, 0x74, 0x6E, 0x67, 0x65, 0x05, 0x73, 0x65, 0x74, 0x6E, 0x6C, 0x06, 0x73, 0x65, 0x74, 0x6E,
    0x6C, 0x65, 0x05, 0x73, 0x65, 0x74, 0x6E, 0x6F, 0x05, 0x73, 0x65, 0x74, 0x6E, 0x70, 0x05, 0x73,
    0x65, 0x74, 0x6E, 0x73, 0x05, 0x73, 0x65, 0x74, 0x6E, 0x7A, 0x04, 0x73, 0x65, 0x74, 0x6F, 0x04,
    0x73, 0x65, 0x74, 0x70, 0x05, 0x73, 0x65, 0x74, 0x70, 0x65, 0x05, 0x73, 0x65, 0x74, 0x70, 0x6F,
    0x04, 0x73, 0x65, 0x74, 0x73, 0x04, 0x73, 0x65, 0x74, 0x7A, 0x03, 0x73, 0x68, 0x6C, 0x03, 0x73,
    0x68, 0x72, 0x04, 0x73, 0x6C, 0x64, 0x74, 0x04, 0x73, 0x6D, 0x73, 0x77, 0x06, 0x73, 0x71, 0x72,
    0x74, 0x70, 0x73, 0x03, 0x73, 0x74, 0x64, 0x04, 0x73, 0x74, 0x6F, 0x73, 0x05, 0x73, 0x74, 0x6F,
    0x73, 0x62, 0x05, 0x73, 0x74, 0x6F, 0x73, 0x64, 0x05, 0x73, 0x74, 0x6F, 0x73, 0x71, 0x03, 0x73,
    0x75, 0x62, 0x07, 0x73, 0x79, 0x73, 0x63, 0x61, 0x6C, 0x6C, 0x04, 0x74, 0x65, 0x73, 0x74, 0x03,
    0x75, 0x64, 0x32, 0x04, 0x78, 0x63, 0x68, 0x67, 0x04, 0x78, 0x6C, 0x61, 0x74, 0x05, 0x78, 0x6C,
    0x61, 0x74, 0x62, 0x03, 0x78, 0x6F, 0x72,
];
