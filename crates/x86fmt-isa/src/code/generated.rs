// Generated by tools/gen_tables.py. Do not edit.

use super::{CodeInfo, OpTemplate};
use crate::MemorySize;

/// Opcode form. Each variant names the mnemonic and its operand layout.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[allow(non_camel_case_types)]
#[repr(u16)]
pub enum Code {
    #[default]
    INVALID = 0,
    DeclareByte = 1,
    DeclareWord = 2,
    DeclareDword = 3,
    DeclareQword = 4,
    Add_rm8_r8 = 5,
    Add_rm16_r16 = 6,
    Add_rm32_r32 = 7,
    Add_rm64_r64 = 8,
    Add_r32_rm32 = 9,
    Add_r64_rm64 = 10,
    Add_AL_imm8 = 11,
    Add_EAX_imm32 = 12,
    Add_rm8_imm8 = 13,
    Add_rm16_imm16 = 14,
    Add_rm32_imm32 = 15,
    Add_rm64_imm32 = 16,
    Add_rm16_imm8 = 17,
    Add_rm32_imm8 = 18,
    Add_rm64_imm8 = 19,
    Or_rm8_r8 = 20,
    Or_rm16_r16 = 21,
    Or_rm32_r32 = 22,
    Or_rm64_r64 = 23,
    Or_r32_rm32 = 24,
    Or_r64_rm64 = 25,
    Or_AL_imm8 = 26,
    Or_EAX_imm32 = 27,
    Or_rm8_imm8 = 28,
    Or_rm16_imm16 = 29,
    Or_rm32_imm32 = 30,
    Or_rm64_imm32 = 31,
    Or_rm16_imm8 = 32,
    Or_rm32_imm8 = 33,
    Or_rm64_imm8 = 34,
    Adc_rm8_r8 = 35,
    Adc_rm16_r16 = 36,
    Adc_rm32_r32 = 37,
    Adc_rm64_r64 = 38,
    Adc_r32_rm32 = 39,
    Adc_r64_rm64 = 40,
    Adc_AL_imm8 = 41,
    Adc_EAX_imm32 = 42,
    Adc_rm8_imm8 = 43,
    Adc_rm16_imm16 = 44,
    Adc_rm32_imm32 = 45,
    Adc_rm64_imm32 = 46,
    Adc_rm16_imm8 = 47,
    Adc_rm32_imm8 = 48,
    Adc_rm64_imm8 = 49,
    Sbb_rm8_r8 = 50,
    Sbb_rm16_r16 = 51,
    Sbb_rm32_r32 = 52,
    Sbb_rm64_r64 = 53,
    Sbb_r32_rm32 = 54,
    Sbb_r64_rm64 = 55,
    Sbb_AL_imm8 = 56,
    Sbb_EAX_imm32 = 57,
    Sbb_rm8_imm8 = 58,
    Sbb_rm16_imm16 = 59,
    Sbb_rm32_imm32 = 60,
    Sbb_rm64_imm32 = 61,
    Sbb_rm16_imm8 = 62,
    Sbb_rm32_imm8 = 63,
    Sbb_rm64_imm8 = 64,
    And_rm8_r8 = 65,
    And_rm16_r16 = 66,
    And_rm32_r32 = 67,
    And_rm64_r64 = 68,
    And_r32_rm32 = 69,
    And_r64_rm64 = 70,
    And_AL_imm8 = 71,
    And_EAX_imm32 = 72,
    And_rm8_imm8 = 73,
    And_rm16_imm16 = 74,
    And_rm32_imm32 = 75,
    And_rm64_imm32 = 76,
    And_rm16_imm8 = 77,
    And_rm32_imm8 = 78,
    And_rm64_imm8 = 79,
    Sub_rm8_r8 = 80,
    Sub_rm16_r16 = 81,
    Sub_rm32_r32 = 82,
    Sub_rm64_r64 = 83,
    Sub_r32_rm32 = 84,
    Sub_r64_rm64 = 85,
    Sub_AL_imm8 = 86,
    Sub_EAX_imm32 = 87,
    Sub_rm8_imm8 = 88,
    Sub_rm16_imm16 = 89,
    Sub_rm32_imm32 = 90,
    Sub_rm64_imm32 = 91,
    Sub_rm16_imm8 = 92,
    Sub_rm32_imm8 = 93,
    Sub_rm64_imm8 = 94,
    Xor_rm8_r8 = 95,
    Xor_rm16_r16 = 96,
    Xor_rm32_r32 = 97,
    Xor_rm64_r64 = 98,
    Xor_r32_rm32 = 99,
    Xor_r64_rm64 = 100,
    Xor_AL_imm8 = 101,
    Xor_EAX_imm32 = 102,
    Xor_rm8_imm8 = 103,
    Xor_rm16_imm16 = 104,
    Xor_rm32_imm32 = 105,
    Xor_rm64_imm32 = 106,
    Xor_rm16_imm8 = 107,
    Xor_rm32_imm8 = 108,
    Xor_rm64_imm8 = 109,
    Cmp_rm8_r8 = 110,
    Cmp_rm16_r16 = 111,
    Cmp_rm32_r32 = 112,
    Cmp_rm64_r64 = 113,
    Cmp_r32_rm32 = 114,
    Cmp_r64_rm64 = 115,
    Cmp_AL_imm8 = 116,
    Cmp_EAX_imm32 = 117,
    Cmp_rm8_imm8 = 118,
    Cmp_rm16_imm16 = 119,
    Cmp_rm32_imm32 = 120,
    Cmp_rm64_imm32 = 121,
    Cmp_rm16_imm8 = 122,
    Cmp_rm32_imm8 = 123,
    Cmp_rm64_imm8 = 124,
    Test_rm8_r8 = 125,
    Test_rm32_r32 = 126,
    Test_rm64_r64 = 127,
    Test_rm32_imm32 = 128,
    Inc_rm8 = 129,
    Inc_rm16 = 130,
    Inc_rm32 = 131,
    Inc_rm64 = 132,
    Dec_rm8 = 133,
    Dec_rm16 = 134,
    Dec_rm32 = 135,
    Dec_rm64 = 136,
    Neg_rm8 = 137,
    Neg_rm16 = 138,
    Neg_rm32 = 139,
    Neg_rm64 = 140,
    Not_rm8 = 141,
    Not_rm16 = 142,
    Not_rm32 = 143,
    Not_rm64 = 144,
    Mul_rm8 = 145,
    Mul_rm16 = 146,
    Mul_rm32 = 147,
    Mul_rm64 = 148,
    Div_rm8 = 149,
    Div_rm16 = 150,
    Div_rm32 = 151,
    Div_rm64 = 152,
    Shl_rm32_imm8 = 153,
    Shl_rm64_imm8 = 154,
    Shl_rm32_CL = 155,
    Shr_rm32_imm8 = 156,
    Shr_rm64_imm8 = 157,
    Shr_rm32_CL = 158,
    Sar_rm32_imm8 = 159,
    Sar_rm64_imm8 = 160,
    Sar_rm32_CL = 161,
    Rol_rm32_imm8 = 162,
    Rol_rm64_imm8 = 163,
    Rol_rm32_CL = 164,
    Mov_rm8_r8 = 165,
    Mov_rm16_r16 = 166,
    Mov_rm32_r32 = 167,
    Mov_rm64_r64 = 168,
    Mov_r8_rm8 = 169,
    Mov_r16_rm16 = 170,
    Mov_r32_rm32 = 171,
    Mov_r64_rm64 = 172,
    Mov_r32_imm32 = 173,
    Mov_r64_imm64 = 174,
    Mov_rm32_imm32 = 175,
    Mov_rm64_imm32 = 176,
    Mov_AL_moffs8 = 177,
    Mov_EAX_moffs32 = 178,
    Mov_RAX_moffs64 = 179,
    Mov_moffs32_EAX = 180,
    Mov_moffs64_RAX = 181,
    Mov_r32m16_Sreg = 182,
    Movzx_r32_rm8 = 183,
    Movzx_r32_rm16 = 184,
    Movzx_r64_rm8 = 185,
    Movsx_r32_rm8 = 186,
    Movsx_r64_rm16 = 187,
    Movsxd_r64_rm32 = 188,
    Lea_r32_m = 189,
    Lea_r64_m = 190,
    Xchg_rm32_r32 = 191,
    Xchg_r32_EAX = 192,
    Bswap_r32 = 193,
    Bswap_r64 = 194,
    Cmpxchg_rm32_r32 = 195,
    Cmpxchg16b_m128 = 196,
    Imul_r32_rm32 = 197,
    Imul_r64_rm64 = 198,
    Imul_r32_rm32_imm8 = 199,
    Imul_r64_rm64_imm32 = 200,
    Aam_imm8 = 201,
    Aad_imm8 = 202,
    Cbw = 203,
    Cwde = 204,
    Cdqe = 205,
    Cqo = 206,
    Push_r16 = 207,
    Pop_r16 = 208,
    Push_r64 = 209,
    Pop_r64 = 210,
    Push_r32 = 211,
    Pop_r32 = 212,
    Push_rm16 = 213,
    Push_rm32 = 214,
    Push_rm64 = 215,
    Pop_rm64 = 216,
    Pushw_imm8 = 217,
    Pushd_imm8 = 218,
    Pushq_imm8 = 219,
    Push_imm16 = 220,
    Pushd_imm32 = 221,
    Pushq_imm32 = 222,
    Pushw_FS = 223,
    Pushd_FS = 224,
    Pushq_FS = 225,
    Pushfw = 226,
    Pushfd = 227,
    Pushfq = 228,
    Popfw = 229,
    Popfd = 230,
    Popfq = 231,
    Iretw = 232,
    Iretd = 233,
    Iretq = 234,
    Leavew = 235,
    Leaveq = 236,
    Enterq_imm16_imm8 = 237,
    Call_rel16 = 238,
    Call_rel32_32 = 239,
    Call_rel32_64 = 240,
    Call_rm16 = 241,
    Call_rm32 = 242,
    Call_rm64 = 243,
    Call_ptr1616 = 244,
    Call_ptr1632 = 245,
    Call_m1632 = 246,
    Jmp_rel8_16 = 247,
    Jmp_rel8_32 = 248,
    Jmp_rel8_64 = 249,
    Jmp_rel16 = 250,
    Jmp_rel32_32 = 251,
    Jmp_rel32_64 = 252,
    Jmp_rm32 = 253,
    Jmp_rm64 = 254,
    Jmp_ptr1616 = 255,
    Jmp_ptr1632 = 256,
    Jmp_m1616 = 257,
    Jmp_m1664 = 258,
    Retnw = 259,
    Retnd = 260,
    Retnq = 261,
    Retnq_imm16 = 262,
    Jo_rel8_64 = 263,
    Jo_rel32_64 = 264,
    Jno_rel8_64 = 265,
    Jno_rel32_64 = 266,
    Jb_rel8_64 = 267,
    Jb_rel32_64 = 268,
    Jae_rel8_64 = 269,
    Jae_rel32_64 = 270,
    Je_rel8_64 = 271,
    Je_rel32_64 = 272,
    Jne_rel8_64 = 273,
    Jne_rel32_64 = 274,
    Jbe_rel8_64 = 275,
    Jbe_rel32_64 = 276,
    Ja_rel8_64 = 277,
    Ja_rel32_64 = 278,
    Js_rel8_64 = 279,
    Js_rel32_64 = 280,
    Jns_rel8_64 = 281,
    Jns_rel32_64 = 282,
    Jp_rel8_64 = 283,
    Jp_rel32_64 = 284,
    Jnp_rel8_64 = 285,
    Jnp_rel32_64 = 286,
    Jl_rel8_64 = 287,
    Jl_rel32_64 = 288,
    Jge_rel8_64 = 289,
    Jge_rel32_64 = 290,
    Jle_rel8_64 = 291,
    Jle_rel32_64 = 292,
    Jg_rel8_64 = 293,
    Jg_rel32_64 = 294,
    Jb_rel8_32 = 295,
    Jb_rel32_32 = 296,
    Jb_rel16 = 297,
    Jae_rel8_32 = 298,
    Jae_rel32_32 = 299,
    Jae_rel16 = 300,
    Je_rel8_32 = 301,
    Je_rel32_32 = 302,
    Je_rel16 = 303,
    Jne_rel8_32 = 304,
    Jne_rel32_32 = 305,
    Jne_rel16 = 306,
    Jcxz_rel8_16 = 307,
    Jecxz_rel8_32 = 308,
    Jrcxz_rel8_64 = 309,
    Loop_rel8_16_CX = 310,
    Loop_rel8_32_ECX = 311,
    Loop_rel8_64_ECX = 312,
    Loop_rel8_64_RCX = 313,
    Loope_rel8_64_RCX = 314,
    Loopne_rel8_64_RCX = 315,
    Loope_rel8_32_ECX = 316,
    Seto_rm8 = 317,
    Setno_rm8 = 318,
    Setb_rm8 = 319,
    Setae_rm8 = 320,
    Sete_rm8 = 321,
    Setne_rm8 = 322,
    Setbe_rm8 = 323,
    Seta_rm8 = 324,
    Sets_rm8 = 325,
    Setns_rm8 = 326,
    Setp_rm8 = 327,
    Setnp_rm8 = 328,
    Setl_rm8 = 329,
    Setge_rm8 = 330,
    Setle_rm8 = 331,
    Setg_rm8 = 332,
    Cmovb_r32_rm32 = 333,
    Cmovae_r32_rm32 = 334,
    Cmove_r64_rm64 = 335,
    Cmovne_r64_rm64 = 336,
    Cmovl_r16_rm16 = 337,
    Cmovg_r32_rm32 = 338,
    Cmovs_r64_rm64 = 339,
    Cmovp_r32_rm32 = 340,
    Movsb_m8_m8 = 341,
    Movsw_m16_m16 = 342,
    Movsd_m32_m32 = 343,
    Movsq_m64_m64 = 344,
    Cmpsb_m8_m8 = 345,
    Cmpsq_m64_m64 = 346,
    Stosb_m8_AL = 347,
    Stosd_m32_EAX = 348,
    Stosq_m64_RAX = 349,
    Lodsb_AL_m8 = 350,
    Lodsq_RAX_m64 = 351,
    Scasb_AL_m8 = 352,
    Scasq_RAX_m64 = 353,
    Outsb_DX_m8 = 354,
    Insb_m8_DX = 355,
    Xlat_m8 = 356,
    Hlt = 357,
    Syscall = 358,
    Cpuid = 359,
    Rdtsc = 360,
    Ud2 = 361,
    Endbr64 = 362,
    Pause = 363,
    Lfence = 364,
    Clc = 365,
    Std = 366,
    Int3 = 367,
    Nopw = 368,
    Nopd = 369,
    Nopq = 370,
    Nop_rm32 = 371,
    Int_imm8 = 372,
    Prefetchnta_m8 = 373,
    Invlpgaw = 374,
    Invlpgad = 375,
    Invlpgaq = 376,
    Monitorw = 377,
    Monitord = 378,
    Monitorq = 379,
    Mwait = 380,
    Mwaitx = 381,
    Lgdt_m1632_16 = 382,
    Lgdt_m1632 = 383,
    Lgdt_m1664 = 384,
    Smsw_rm16 = 385,
    Smsw_r32m16 = 386,
    Smsw_r64m16 = 387,
    Sldt_r32m16 = 388,
    Mov_r64_cr = 389,
    Bndmk_bnd_m64 = 390,
    Movaps_xmm_xmmm128 = 391,
    Movaps_xmmm128_xmm = 392,
    VEX_Vmovaps_xmm_xmmm128 = 393,
    VEX_Vmovaps_ymm_ymmm256 = 394,
    Addps_xmm_xmmm128 = 395,
    VEX_Vaddps_xmm_xmm_xmmm128 = 396,
    VEX_Vaddps_ymm_ymm_ymmm256 = 397,
    Pxor_mm_mmm64 = 398,
    Pxor_xmm_xmmm128 = 399,
    VEX_Vpxor_ymm_ymm_ymmm256 = 400,
    Cvtsi2sd_xmm_rm32 = 401,
    Cvtsi2sd_xmm_rm64 = 402,
    Pextrw_r32_xmm_imm8 = 403,
    Pextrw_r64_xmm_imm8 = 404,
    VEX_Kmovw_kr_km16 = 405,
    Pblendvb_xmm_xmmm128 = 406,
    Blendvps_xmm_xmmm128 = 407,
    Maskmovq_rDI_mm_mm = 408,
    Maskmovdqu_rDI_xmm_xmm = 409,
    VEX_Vmaskmovdqu_rDI_xmm_xmm = 410,
    Pclmulqdq_xmm_xmmm128_imm8 = 411,
    VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8 = 412,
    Cmpps_xmm_xmmm128_imm8 = 413,
    Cmppd_xmm_xmmm128_imm8 = 414,
    Cmpss_xmm_xmmm32_imm8 = 415,
    Cmpsd_xmm_xmmm64_imm8 = 416,
    VEX_Vcmpps_ymm_ymm_ymmm256_imm8 = 417,
    VEX_Vcmpsd_xmm_xmm_xmmm64_imm8 = 418,
    EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae = 419,
    EVEX_Vcmppd_kr_k1_zmm_zmmm512b64_imm8_sae = 420,
    EVEX_Vpcmpd_kr_k1_zmm_zmmm512b32_imm8 = 421,
    EVEX_Vpcmpud_kr_k1_zmm_zmmm512b32_imm8 = 422,
    EVEX_Vmovaps_zmm_k1z_zmmm512 = 423,
    EVEX_Vmovaps_zmmm512_k1z_zmm = 424,
    EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32 = 425,
    EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32 = 426,
    EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32 = 427,
    EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er = 428,
    EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er = 429,
    EVEX_Vaddsd_xmm_k1z_xmm_xmmm64_er = 430,
    EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er = 431,
    EVEX_Vcvtsi2sd_xmm_xmm_rm32_er = 432,
    EVEX_Vcvtsi2sd_xmm_xmm_rm64_er = 433,
    EVEX_Vcvtpd2ps_ymm_k1z_zmmm512b64 = 434,
    EVEX_Vmaxps_zmm_k1z_zmm_zmmm512b32_sae = 435,
    EVEX_Vcvttss2si_r32_xmmm32_sae = 436,
    EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_imm8_sae = 437,
    Fld_m32fp = 438,
    Fld_m64fp = 439,
    Fld_m80fp = 440,
    Fstp_m64fp = 441,
    Fld_sti = 442,
    Fstp_sti = 443,
    Fnstenv_m28byte = 444,
    Fadd_st0_sti = 445,
    Fadd_sti_st0 = 446,
    Faddp_sti_st0 = 447,
    Fmulp_sti_st0 = 448,
    Fsubrp_sti_st0 = 449,
    Fcom_st0_sti = 450,
    Fcomp_st0_sti = 451,
    Fxch_st0_sti = 452,
    Fucomi_st0_sti = 453,
}

pub(crate) const CODE_COUNT: usize = 454;

pub(crate) static ALL_CODES: [Code; CODE_COUNT] = [
    Code::INVALID,
    Code::DeclareByte,
    Code::DeclareWord,
    Code::DeclareDword,
    Code::DeclareQword,
    Code::Add_rm8_r8,
    Code::Add_rm16_r16,
    Code::Add_rm32_r32,
    Code::Add_rm64_r64,
    Code::Add_r32_rm32,
    Code::Add_r64_rm64,
    Code::Add_AL_imm8,
    Code::Add_EAX_imm32,
    Code::Add_rm8_imm8,
    Code::Add_rm16_imm16,
    Code::Add_rm32_imm32,
    Code::Add_rm64_imm32,
    Code::Add_rm16_imm8,
    Code::Add_rm32_imm8,
    Code::Add_rm64_imm8,
    Code::Or_rm8_r8,
    Code::Or_rm16_r16,
    Code::Or_rm32_r32,
    Code::Or_rm64_r64,
    Code::Or_r32_rm32,
    Code::Or_r64_rm64,
    Code::Or_AL_imm8,
    Code::Or_EAX_imm32,
    Code::Or_rm8_imm8,
    Code::Or_rm16_imm16,
    Code::Or_rm32_imm32,
    Code::Or_rm64_imm32,
    Code::Or_rm16_imm8,
    Code::Or_rm32_imm8,
    Code::Or_rm64_imm8,
    Code::Adc_rm8_r8,
    Code::Adc_rm16_r16,
    Code::Adc_rm32_r32,
    Code::Adc_rm64_r64,
    Code::Adc_r32_rm32,
    Code::Adc_r64_rm64,
    Code::Adc_AL_imm8,
    Code::Adc_EAX_imm32,
    Code::Adc_rm8_imm8,
    Code::Adc_rm16_imm16,
    Code::Adc_rm32_imm32,
    Code::Adc_rm64_imm32,
    Code::Adc_rm16_imm8,
    Code::Adc_rm32_imm8,
    Code::Adc_rm64_imm8,
    Code::Sbb_rm8_r8,
    Code::Sbb_rm16_r16,
    Code::Sbb_rm32_r32,
    Code::Sbb_rm64_r64,
    Code::Sbb_r32_rm32,
    Code::Sbb_r64_rm64,
    Code::Sbb_AL_imm8,
    Code::Sbb_EAX_imm32,
    Code::Sbb_rm8_imm8,
    Code::Sbb_rm16_imm16,
    Code::Sbb_rm32_imm32,
    Code::Sbb_rm64_imm32,
    Code::Sbb_rm16_imm8,
    Code::Sbb_rm32_imm8,
    Code::Sbb_rm64_imm8,
    Code::And_rm8_r8,
    Code::And_rm16_r16,
    Code::And_rm32_r32,
    Code::And_rm64_r64,
    Code::And_r32_rm32,
    Code::And_r64_rm64,
    Code::And_AL_imm8,
    Code::And_EAX_imm32,
    Code::And_rm8_imm8,
    Code::And_rm16_imm16,
    Code::And_rm32_imm32,
    Code::And_rm64_imm32,
    Code::And_rm16_imm8,
    Code::And_rm32_imm8,
    Code::And_rm64_imm8,
    Code::Sub_rm8_r8,
    Code::Sub_rm16_r16,
    Code::Sub_rm32_r32,
    Code::Sub_rm64_r64,
    Code::Sub_r32_rm32,
    Code::Sub_r64_rm64,
    Code::Sub_AL_imm8,
    Code::Sub_EAX_imm32,
    Code::Sub_rm8_imm8,
    Code::Sub_rm16_imm16,
    Code::Sub_rm32_imm32,
    Code::Sub_rm64_imm32,
    Code::Sub_rm16_imm8,
    Code::Sub_rm32_imm8,
    Code::Sub_rm64_imm8,
    Code::Xor_rm8_r8,
    Code::Xor_rm16_r16,
    Code::Xor_rm32_r32,
    Code::Xor_rm64_r64,
    Code::Xor_r32_rm32,
    Code::Xor_r64_rm64,
    Code::Xor_AL_imm8,
    Code::Xor_EAX_imm32,
    Code::Xor_rm8_imm8,
    Code::Xor_rm16_imm16,
    Code::Xor_rm32_imm32,
    Code::Xor_rm64_imm32,
    Code::Xor_rm16_imm8,
    Code::Xor_rm32_imm8,
    Code::Xor_rm64_imm8,
    Code::Cmp_rm8_r8,
    Code::Cmp_rm16_r16,
    Code::Cmp_rm32_r32,
    Code::Cmp_rm64_r64,
    Code::Cmp_r32_rm32,
    Code::Cmp_r64_rm64,
    Code::Cmp_AL_imm8,
    Code::Cmp_EAX_imm32,
    Code::Cmp_rm8_imm8,
    Code::Cmp_rm16_imm16,
    Code::Cmp_rm32_imm32,
    Code::Cmp_rm64_imm32,
    Code::Cmp_rm16_imm8,
    Code::Cmp_rm32_imm8,
    Code::Cmp_rm64_imm8,
    Code::Test_rm8_r8,
    Code::Test_rm32_r32,
    Code::Test_rm64_r64,
    Code::Test_rm32_imm32,
    Code::Inc_rm8,
    Code::Inc_rm16,
    Code::Inc_rm32,
    Code::Inc_rm64,
    Code::Dec_rm8,
    Code::Dec_rm16,
    Code::Dec_rm32,
    Code::Dec_rm64,
    Code::Neg_rm8,
    Code::Neg_rm16,
    Code::Neg_rm32,
    Code::Neg_rm64,
    Code::Not_rm8,
    Code::Not_rm16,
    Code::Not_rm32,
    Code::Not_rm64,
    Code::Mul_rm8,
    Code::Mul_rm16,
    Code::Mul_rm32,
    Code::Mul_rm64,
    Code::Div_rm8,
    Code::Div_rm16,
    Code::Div_rm32,
    Code::Div_rm64,
    Code::Shl_rm32_imm8,
    Code::Shl_rm64_imm8,
    Code::Shl_rm32_CL,
    Code::Shr_rm32_imm8,
    Code::Shr_rm64_imm8,
    Code::Shr_rm32_CL,
    Code::Sar_rm32_imm8,
    Code::Sar_rm64_imm8,
    Code::Sar_rm32_CL,
    Code::Rol_rm32_imm8,
    Code::Rol_rm64_imm8,
    Code::Rol_rm32_CL,
    Code::Mov_rm8_r8,
    Code::Mov_rm16_r16,
    Code::Mov_rm32_r32,
    Code::Mov_rm64_r64,
    Code::Mov_r8_rm8,
    Code::Mov_r16_rm16,
    Code::Mov_r32_rm32,
    Code::Mov_r64_rm64,
    Code::Mov_r32_imm32,
    Code::Mov_r64_imm64,
    Code::Mov_rm32_imm32,
    Code::Mov_rm64_imm32,
    Code::Mov_AL_moffs8,
    Code::Mov_EAX_moffs32,
    Code::Mov_RAX_moffs64,
    Code::Mov_moffs32_EAX,
    Code::Mov_moffs64_RAX,
    Code::Mov_r32m16_Sreg,
    Code::Movzx_r32_rm8,
    Code::Movzx_r32_rm16,
    Code::Movzx_r64_rm8,
    Code::Movsx_r32_rm8,
    Code::Movsx_r64_rm16,
    Code::Movsxd_r64_rm32,
    Code::Lea_r32_m,
    Code::Lea_r64_m,
    Code::Xchg_rm32_r32,
    Code::Xchg_r32_EAX,
    Code::Bswap_r32,
    Code::Bswap_r64,
    Code::Cmpxchg_rm32_r32,
    Code::Cmpxchg16b_m128,
    Code::Imul_r32_rm32,
    Code::Imul_r64_rm64,
    Code::Imul_r32_rm32_imm8,
    Code::Imul_r64_rm64_imm32,
    Code::Aam_imm8,
    Code::Aad_imm8,
    Code::Cbw,
    Code::Cwde,
    Code::Cdqe,
    Code::Cqo,
    Code::Push_r16,
    Code::Pop_r16,
    Code::Push_r64,
    Code::Pop_r64,
    Code::Push_r32,
    Code::Pop_r32,
    Code::Push_rm16,
    Code::Push_rm32,
    Code::Push_rm64,
    Code::Pop_rm64,
    Code::Pushw_imm8,
    Code::Pushd_imm8,
    Code::Pushq_imm8,
    Code::Push_imm16,
    Code::Pushd_imm32,
    Code::Pushq_imm32,
    Code::Pushw_FS,
    Code::Pushd_FS,
    Code::Pushq_FS,
    Code::Pushfw,
    Code::Pushfd,
    Code::Pushfq,
    Code::Popfw,
    Code::Popfd,
    Code::Popfq,
    Code::Iretw,
    Code::Iretd,
    Code::Iretq,
    Code::Leavew,
    Code::Leaveq,
    Code::Enterq_imm16_imm8,
    Code::Call_rel16,
    Code::Call_rel32_32,
    Code::Call_rel32_64,
    Code::Call_rm16,
    Code::Call_rm32,
    Code::Call_rm64,
    Code::Call_ptr1616,
    Code::Call_ptr1632,
    Code::Call_m1632,
    Code::Jmp_rel8_16,
    Code::Jmp_rel8_32,
    Code::Jmp_rel8_64,
    Code::Jmp_rel16,
    Code::Jmp_rel32_32,
    Code::Jmp_rel32_64,
    Code::Jmp_rm32,
    Code::Jmp_rm64,
    Code::Jmp_ptr1616,
    Code::Jmp_ptr1632,
    Code::Jmp_m1616,
    Code::Jmp_m1664,
    Code::Retnw,
    Code::Retnd,
    Code::Retnq,
    Code::Retnq_imm16,
    Code::Jo_rel8_64,
    Code::Jo_rel32_64,
    Code::Jno_rel8_64,
    Code::Jno_rel32_64,
    Code::Jb_rel8_64,
    Code::Jb_rel32_64,
    Code::Jae_rel8_64,
    Code::Jae_rel32_64,
    Code::Je_rel8_64,
    Code::Je_rel32_64,
    Code::Jne_rel8_64,
    Code::Jne_rel32_64,
    Code::Jbe_rel8_64,
    Code::Jbe_rel32_64,
    Code::Ja_rel8_64,
    Code::Ja_rel32_64,
    Code::Js_rel8_64,
    Code::Js_rel32_64,
    Code::Jns_rel8_64,
    Code::Jns_rel32_64,
    Code::Jp_rel8_64,
    Code::Jp_rel32_64,
    Code::Jnp_rel8_64,
    Code::Jnp_rel32_64,
    Code::Jl_rel8_64,
    Code::Jl_rel32_64,
    Code::Jge_rel8_64,
    Code::Jge_rel32_64,
    Code::Jle_rel8_64,
    Code::Jle_rel32_64,
    Code::Jg_rel8_64,
    Code::Jg_rel32_64,
    Code::Jb_rel8_32,
    Code::Jb_rel32_32,
    Code::Jb_rel16,
    Code::Jae_rel8_32,
    Code::Jae_rel32_32,
    Code::Jae_rel16,
    Code::Je_rel8_32,
    Code::Je_rel32_32,
    Code::Je_rel16,
    Code::Jne_rel8_32,
    Code::Jne_rel32_32,
    Code::Jne_rel16,
    Code::Jcxz_rel8_16,
    Code::Jecxz_rel8_32,
    Code::Jrcxz_rel8_64,
    Code::Loop_rel8_16_CX,
    Code::Loop_rel8_32_ECX,
    Code::Loop_rel8_64_ECX,
    Code::Loop_rel8_64_RCX,
    Code::Loope_rel8_64_RCX,
    Code::Loopne_rel8_64_RCX,
    Code::Loope_rel8_32_ECX,
    Code::Seto_rm8,
    Code::Setno_rm8,
    Code::Setb_rm8,
    Code::Setae_rm8,
    Code::Sete_rm8,
    Code::Setne_rm8,
    Code::Setbe_rm8,
    Code::Seta_rm8,
    Code::Sets_rm8,
    Code::Setns_rm8,
    Code::Setp_rm8,
    Code::Setnp_rm8,
    Code::Setl_rm8,
    Code::Setge_rm8,
    Code::Setle_rm8,
    Code::Setg_rm8,
    Code::Cmovb_r32_rm32,
    Code::Cmovae_r32_rm32,
    Code::Cmove_r64_rm64,
    Code::Cmovne_r64_rm64,
    Code::Cmovl_r16_rm16,
    Code::Cmovg_r32_rm32,
    Code::Cmovs_r64_rm64,
    Code::Cmovp_r32_rm32,
    Code::Movsb_m8_m8,
    Code::Movsw_m16_m16,
    Code::Movsd_m32_m32,
    Code::Movsq_m64_m64,
    Code::Cmpsb_m8_m8,
    Code::Cmpsq_m64_m64,
    Code::Stosb_m8_AL,
    Code::Stosd_m32_EAX,
    Code::Stosq_m64_RAX,
    Code::Lodsb_AL_m8,
    Code::Lodsq_RAX_m64,
    Code::Scasb_AL_m8,
    Code::Scasq_RAX_m64,
    Code::Outsb_DX_m8,
    Code::Insb_m8_DX,
    Code::Xlat_m8,
    Code::Hlt,
    Code::Syscall,
    Code::Cpuid,
    Code::Rdtsc,
    Code::Ud2,
    Code::Endbr64,
    Code::Pause,
    Code::Lfence,
    Code::Clc,
    Code::Std,
    Code::Int3,
    Code::Nopw,
    Code::Nopd,
    Code::Nopq,
    Code::Nop_rm32,
    Code::Int_imm8,
    Code::Prefetchnta_m8,
    Code::Invlpgaw,
    Code::Invlpgad,
    Code::Invlpgaq,
    Code::Monitorw,
    Code::Monitord,
    Code::Monitorq,
    Code::Mwait,
    Code::Mwaitx,
    Code::Lgdt_m1632_16,
    Code::Lgdt_m1632,
    Code::Lgdt_m1664,
    Code::Smsw_rm16,
    Code::Smsw_r32m16,
    Code::Smsw_r64m16,
    Code::Sldt_r32m16,
    Code::Mov_r64_cr,
    Code::Bndmk_bnd_m64,
    Code::Movaps_xmm_xmmm128,
    Code::Movaps_xmmm128_xmm,
    Code::VEX_Vmovaps_xmm_xmmm128,
    Code::VEX_Vmovaps_ymm_ymmm256,
    Code::Addps_xmm_xmmm128,
    Code::VEX_Vaddps_xmm_xmm_xmmm128,
    Code::VEX_Vaddps_ymm_ymm_ymmm256,
    Code::Pxor_mm_mmm64,
    Code::Pxor_xmm_xmmm128,
    Code::VEX_Vpxor_ymm_ymm_ymmm256,
    Code::Cvtsi2sd_xmm_rm32,
    Code::Cvtsi2sd_xmm_rm64,
    Code::Pextrw_r32_xmm_imm8,
    Code::Pextrw_r64_xmm_imm8,
    Code::VEX_Kmovw_kr_km16,
    Code::Pblendvb_xmm_xmmm128,
    Code::Blendvps_xmm_xmmm128,
    Code::Maskmovq_rDI_mm_mm,
    Code::Maskmovdqu_rDI_xmm_xmm,
    Code::VEX_Vmaskmovdqu_rDI_xmm_xmm,
    Code::Pclmulqdq_xmm_xmmm128_imm8,
    Code::VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8,
    Code::Cmpps_xmm_xmmm128_imm8,
    Code::Cmppd_xmm_xmmm128_imm8,
    Code::Cmpss_xmm_xmmm32_imm8,
    Code::Cmpsd_xmm_xmmm64_imm8,
    Code::VEX_Vcmpps_ymm_ymm_ymmm256_imm8,
    Code::VEX_Vcmpsd_xmm_xmm_xmmm64_imm8,
    Code::EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae,
    Code::EVEX_Vcmppd_kr_k1_zmm_zmmm512b64_imm8_sae,
    Code::EVEX_Vpcmpd_kr_k1_zmm_zmmm512b32_imm8,
    Code::EVEX_Vpcmpud_kr_k1_zmm_zmmm512b32_imm8,
    Code::EVEX_Vmovaps_zmm_k1z_zmmm512,
    Code::EVEX_Vmovaps_zmmm512_k1z_zmm,
    Code::EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32,
    Code::EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32,
    Code::EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32,
    Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
    Code::EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er,
    Code::EVEX_Vaddsd_xmm_k1z_xmm_xmmm64_er,
    Code::EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er,
    Code::EVEX_Vcvtsi2sd_xmm_xmm_rm32_er,
    Code::EVEX_Vcvtsi2sd_xmm_xmm_rm64_er,
    Code::EVEX_Vcvtpd2ps_ymm_k1z_zmmm512b64,
    Code::EVEX_Vmaxps_zmm_k1z_zmm_zmmm512b32_sae,
    Code::EVEX_Vcvttss2si_r32_xmmm32_sae,
    Code::EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_imm8_sae,
    Code::Fld_m32fp,
    Code::Fld_m64fp,
    Code::Fld_m80fp,
    Code::Fstp_m64fp,
    Code::Fld_sti,
    Code::Fstp_sti,
    Code::Fnstenv_m28byte,
    Code::Fadd_st0_sti,
    Code::Fadd_sti_st0,
    Code::Faddp_sti_st0,
    Code::Fmulp_sti_st0,
    Code::Fsubrp_sti_st0,
    Code::Fcom_st0_sti,
    Code::Fcomp_st0_sti,
    Code::Fxch_st0_sti,
    Code::Fucomi_st0_sti,
];

pub(crate) static CODE_INFOS: [CodeInfo; CODE_COUNT] = [
    CodeInfo::new("INVALID", "(bad)", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("DeclareByte", "db", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("DeclareWord", "dw", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("DeclareDword", "dd", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("DeclareQword", "dq", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm8_r8", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm16_r16", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm32_r32", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm64_r64", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_r32_rm32", "add", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_r64_rm64", "add", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_AL_imm8", "add", &[OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_EAX_imm32", "add", &[OpTemplate::Register, OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm8_imm8", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm16_imm16", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm32_imm32", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm64_imm32", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm16_imm8", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm32_imm8", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Add_rm64_imm8", "add", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm8_r8", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm16_r16", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm32_r32", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm64_r64", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_r32_rm32", "or", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_r64_rm64", "or", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_AL_imm8", "or", &[OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_EAX_imm32", "or", &[OpTemplate::Register, OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm8_imm8", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm16_imm16", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm32_imm32", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm64_imm32", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm16_imm8", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm32_imm8", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Or_rm64_imm8", "or", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm8_r8", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm16_r16", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm32_r32", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm64_r64", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_r32_rm32", "adc", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_r64_rm64", "adc", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_AL_imm8", "adc", &[OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_EAX_imm32", "adc", &[OpTemplate::Register, OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm8_imm8", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm16_imm16", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm32_imm32", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm64_imm32", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm16_imm8", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm32_imm8", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Adc_rm64_imm8", "adc", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm8_r8", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm16_r16", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm32_r32", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm64_r64", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_r32_rm32", "sbb", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_r64_rm64", "sbb", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_AL_imm8", "sbb", &[OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_EAX_imm32", "sbb", &[OpTemplate::Register, OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm8_imm8", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm16_imm16", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm32_imm32", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm64_imm32", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm16_imm8", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm32_imm8", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sbb_rm64_imm8", "sbb", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm8_r8", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm16_r16", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm32_r32", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm64_r64", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_r32_rm32", "and", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_r64_rm64", "and", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_AL_imm8", "and", &[OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_EAX_imm32", "and", &[OpTemplate::Register, OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm8_imm8", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm16_imm16", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm32_imm32", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm64_imm32", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm16_imm8", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm32_imm8", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("And_rm64_imm8", "and", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm8_r8", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm16_r16", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm32_r32", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm64_r64", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_r32_rm32", "sub", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_r64_rm64", "sub", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_AL_imm8", "sub", &[OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_EAX_imm32", "sub", &[OpTemplate::Register, OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm8_imm8", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm16_imm16", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm32_imm32", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm64_imm32", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm16_imm8", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm32_imm8", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sub_rm64_imm8", "sub", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm8_r8", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm16_r16", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm32_r32", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm64_r64", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_r32_rm32", "xor", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_r64_rm64", "xor", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_AL_imm8", "xor", &[OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_EAX_imm32", "xor", &[OpTemplate::Register, OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm8_imm8", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm16_imm16", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm32_imm32", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm64_imm32", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm16_imm8", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm32_imm8", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xor_rm64_imm8", "xor", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm8_r8", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm16_r16", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm32_r32", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm64_r64", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_r32_rm32", "cmp", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_r64_rm64", "cmp", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_AL_imm8", "cmp", &[OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_EAX_imm32", "cmp", &[OpTemplate::Register, OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm8_imm8", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm16_imm16", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm32_imm32", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm64_imm32", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm16_imm8", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to16], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm32_imm8", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmp_rm64_imm8", "cmp", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Test_rm8_r8", "test", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Test_rm32_r32", "test", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Test_rm64_r64", "test", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Test_rm32_imm32", "test", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Inc_rm8", "inc", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Inc_rm16", "inc", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Inc_rm32", "inc", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Inc_rm64", "inc", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Dec_rm8", "dec", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Dec_rm16", "dec", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Dec_rm32", "dec", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Dec_rm64", "dec", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Neg_rm8", "neg", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Neg_rm16", "neg", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Neg_rm32", "neg", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Neg_rm64", "neg", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Not_rm8", "not", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Not_rm16", "not", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Not_rm32", "not", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Not_rm64", "not", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mul_rm8", "mul", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mul_rm16", "mul", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mul_rm32", "mul", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mul_rm64", "mul", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Div_rm8", "div", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Div_rm16", "div", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Div_rm32", "div", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Div_rm64", "div", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Shl_rm32_imm8", "shl", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Shl_rm64_imm8", "shl", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Shl_rm32_CL", "shl", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Shr_rm32_imm8", "shr", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Shr_rm64_imm8", "shr", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Shr_rm32_CL", "shr", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sar_rm32_imm8", "sar", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sar_rm64_imm8", "sar", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sar_rm32_CL", "sar", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Rol_rm32_imm8", "rol", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Rol_rm64_imm8", "rol", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Rol_rm32_CL", "rol", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_rm8_r8", "mov", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_rm16_r16", "mov", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_rm32_r32", "mov", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_rm64_r64", "mov", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_r8_rm8", "mov", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_r16_rm16", "mov", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_r32_rm32", "mov", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_r64_rm64", "mov", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_r32_imm32", "mov", &[OpTemplate::Register, OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_r64_imm64", "mov", &[OpTemplate::Register, OpTemplate::Immediate64], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_rm32_imm32", "mov", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_rm64_imm32", "mov", &[OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_AL_moffs8", "mov", &[OpTemplate::Register, OpTemplate::Memory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_EAX_moffs32", "mov", &[OpTemplate::Register, OpTemplate::Memory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_RAX_moffs64", "mov", &[OpTemplate::Register, OpTemplate::Memory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_moffs32_EAX", "mov", &[OpTemplate::Memory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_moffs64_RAX", "mov", &[OpTemplate::Memory, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_r32m16_Sreg", "mov", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Movzx_r32_rm8", "movzx", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Movzx_r32_rm16", "movzx", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Movzx_r64_rm8", "movzx", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Movsx_r32_rm8", "movsx", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Movsx_r64_rm16", "movsx", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Movsxd_r64_rm32", "movsxd", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Int32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Lea_r32_m", "lea", &[OpTemplate::Register, OpTemplate::Memory], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Lea_r64_m", "lea", &[OpTemplate::Register, OpTemplate::Memory], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xchg_rm32_r32", "xchg", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Xchg_r32_EAX", "xchg", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Bswap_r32", "bswap", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Bswap_r64", "bswap", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmpxchg_rm32_r32", "cmpxchg", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmpxchg16b_m128", "cmpxchg16b", &[OpTemplate::Memory], MemorySize::UInt128, MemorySize::Unknown, 0x00),
    CodeInfo::new("Imul_r32_rm32", "imul", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Imul_r64_rm64", "imul", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Imul_r32_rm32_imm8", "imul", &[OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8to32], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Imul_r64_rm64_imm32", "imul", &[OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate32to64], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Aam_imm8", "aam", &[OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Aad_imm8", "aad", &[OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cbw", "cbw", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cwde", "cwde", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cdqe", "cdqe", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cqo", "cqo", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Push_r16", "push", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pop_r16", "pop", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Push_r64", "push", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pop_r64", "pop", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Push_r32", "push", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pop_r32", "pop", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Push_rm16", "push", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Push_rm32", "push", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Push_rm64", "push", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pop_rm64", "pop", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushw_imm8", "push", &[OpTemplate::Immediate8to16], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushd_imm8", "push", &[OpTemplate::Immediate8to32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushq_imm8", "push", &[OpTemplate::Immediate8to64], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Push_imm16", "push", &[OpTemplate::Immediate16], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushd_imm32", "push", &[OpTemplate::Immediate32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushq_imm32", "push", &[OpTemplate::Immediate32to64], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushw_FS", "push", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushd_FS", "push", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushq_FS", "push", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushfw", "pushf", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushfd", "pushf", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pushfq", "pushf", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Popfw", "popf", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Popfd", "popf", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Popfq", "popf", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Iretw", "iret", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Iretd", "iret", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Iretq", "iret", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Leavew", "leave", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Leaveq", "leave", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Enterq_imm16_imm8", "enter", &[OpTemplate::Immediate16, OpTemplate::Immediate8_2nd], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Call_rel16", "call", &[OpTemplate::NearBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x01),
    CodeInfo::new("Call_rel32_32", "call", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x01),
    CodeInfo::new("Call_rel32_64", "call", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x01),
    CodeInfo::new("Call_rm16", "call", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x09),
    CodeInfo::new("Call_rm32", "call", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x09),
    CodeInfo::new("Call_rm64", "call", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x09),
    CodeInfo::new("Call_ptr1616", "call", &[OpTemplate::FarBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x01),
    CodeInfo::new("Call_ptr1632", "call", &[OpTemplate::FarBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x01),
    CodeInfo::new("Call_m1632", "call", &[OpTemplate::Memory], MemorySize::SegPtr32, MemorySize::Unknown, 0x01),
    CodeInfo::new("Jmp_rel8_16", "jmp", &[OpTemplate::NearBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jmp_rel8_32", "jmp", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jmp_rel8_64", "jmp", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jmp_rel16", "jmp", &[OpTemplate::NearBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jmp_rel32_32", "jmp", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jmp_rel32_64", "jmp", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jmp_rm32", "jmp", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x08),
    CodeInfo::new("Jmp_rm64", "jmp", &[OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x08),
    CodeInfo::new("Jmp_ptr1616", "jmp", &[OpTemplate::FarBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jmp_ptr1632", "jmp", &[OpTemplate::FarBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jmp_m1616", "jmp", &[OpTemplate::Memory], MemorySize::SegPtr16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jmp_m1664", "jmp", &[OpTemplate::Memory], MemorySize::SegPtr64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Retnw", "ret", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Retnd", "ret", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Retnq", "ret", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Retnq_imm16", "ret", &[OpTemplate::Immediate16], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Jo_rel8_64", "jo", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jo_rel32_64", "jo", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jno_rel8_64", "jno", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jno_rel32_64", "jno", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jb_rel8_64", "jb", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jb_rel32_64", "jb", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jae_rel8_64", "jae", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jae_rel32_64", "jae", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Je_rel8_64", "je", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Je_rel32_64", "je", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jne_rel8_64", "jne", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jne_rel32_64", "jne", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jbe_rel8_64", "jbe", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jbe_rel32_64", "jbe", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Ja_rel8_64", "ja", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Ja_rel32_64", "ja", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Js_rel8_64", "js", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Js_rel32_64", "js", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jns_rel8_64", "jns", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jns_rel32_64", "jns", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jp_rel8_64", "jp", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jp_rel32_64", "jp", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jnp_rel8_64", "jnp", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jnp_rel32_64", "jnp", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jl_rel8_64", "jl", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jl_rel32_64", "jl", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jge_rel8_64", "jge", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jge_rel32_64", "jge", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jle_rel8_64", "jle", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jle_rel32_64", "jle", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jg_rel8_64", "jg", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jg_rel32_64", "jg", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jb_rel8_32", "jb", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jb_rel32_32", "jb", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jb_rel16", "jb", &[OpTemplate::NearBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jae_rel8_32", "jae", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jae_rel32_32", "jae", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jae_rel16", "jae", &[OpTemplate::NearBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Je_rel8_32", "je", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Je_rel32_32", "je", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Je_rel16", "je", &[OpTemplate::NearBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jne_rel8_32", "jne", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jne_rel32_32", "jne", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jne_rel16", "jne", &[OpTemplate::NearBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x40),
    CodeInfo::new("Jcxz_rel8_16", "jcxz", &[OpTemplate::NearBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Jecxz_rel8_32", "jecxz", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Jrcxz_rel8_64", "jrcxz", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Loop_rel8_16_CX", "loop", &[OpTemplate::NearBranch16], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Loop_rel8_32_ECX", "loop", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Loop_rel8_64_ECX", "loop", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Loop_rel8_64_RCX", "loop", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Loope_rel8_64_RCX", "loope", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Loopne_rel8_64_RCX", "loopne", &[OpTemplate::NearBranch64], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Loope_rel8_32_ECX", "loope", &[OpTemplate::NearBranch32], MemorySize::Unknown, MemorySize::Unknown, 0x80),
    CodeInfo::new("Seto_rm8", "seto", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setno_rm8", "setno", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setb_rm8", "setb", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setae_rm8", "setae", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sete_rm8", "sete", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setne_rm8", "setne", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setbe_rm8", "setbe", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Seta_rm8", "seta", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sets_rm8", "sets", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setns_rm8", "setns", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setp_rm8", "setp", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setnp_rm8", "setnp", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setl_rm8", "setl", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setge_rm8", "setge", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setle_rm8", "setle", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Setg_rm8", "setg", &[OpTemplate::RegisterOrMemory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmovb_r32_rm32", "cmovb", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmovae_r32_rm32", "cmovae", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmove_r64_rm64", "cmove", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmovne_r64_rm64", "cmovne", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmovl_r16_rm16", "cmovl", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmovg_r32_rm32", "cmovg", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmovs_r64_rm64", "cmovs", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmovp_r32_rm32", "cmovp", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Movsb_m8_m8", "movsb", &[OpTemplate::StringDest, OpTemplate::StringSource], MemorySize::UInt8, MemorySize::Unknown, 0x22),
    CodeInfo::new("Movsw_m16_m16", "movsw", &[OpTemplate::StringDest, OpTemplate::StringSource], MemorySize::UInt16, MemorySize::Unknown, 0x22),
    CodeInfo::new("Movsd_m32_m32", "movsd", &[OpTemplate::StringDest, OpTemplate::StringSource], MemorySize::UInt32, MemorySize::Unknown, 0x22),
    CodeInfo::new("Movsq_m64_m64", "movsq", &[OpTemplate::StringDest, OpTemplate::StringSource], MemorySize::UInt64, MemorySize::Unknown, 0x22),
    CodeInfo::new("Cmpsb_m8_m8", "cmpsb", &[OpTemplate::StringSource, OpTemplate::StringDest], MemorySize::UInt8, MemorySize::Unknown, 0x26),
    CodeInfo::new("Cmpsq_m64_m64", "cmpsq", &[OpTemplate::StringSource, OpTemplate::StringDest], MemorySize::UInt64, MemorySize::Unknown, 0x26),
    CodeInfo::new("Stosb_m8_AL", "stosb", &[OpTemplate::StringDest, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x02),
    CodeInfo::new("Stosd_m32_EAX", "stosd", &[OpTemplate::StringDest, OpTemplate::Register], MemorySize::UInt32, MemorySize::Unknown, 0x02),
    CodeInfo::new("Stosq_m64_RAX", "stosq", &[OpTemplate::StringDest, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x02),
    CodeInfo::new("Lodsb_AL_m8", "lodsb", &[OpTemplate::Register, OpTemplate::StringSource], MemorySize::UInt8, MemorySize::Unknown, 0x22),
    CodeInfo::new("Lodsq_RAX_m64", "lodsq", &[OpTemplate::Register, OpTemplate::StringSource], MemorySize::UInt64, MemorySize::Unknown, 0x22),
    CodeInfo::new("Scasb_AL_m8", "scasb", &[OpTemplate::Register, OpTemplate::StringDest], MemorySize::UInt8, MemorySize::Unknown, 0x06),
    CodeInfo::new("Scasq_RAX_m64", "scasq", &[OpTemplate::Register, OpTemplate::StringDest], MemorySize::UInt64, MemorySize::Unknown, 0x06),
    CodeInfo::new("Outsb_DX_m8", "outsb", &[OpTemplate::Register, OpTemplate::StringSource], MemorySize::UInt8, MemorySize::Unknown, 0x22),
    CodeInfo::new("Insb_m8_DX", "insb", &[OpTemplate::StringDest, OpTemplate::Register], MemorySize::UInt8, MemorySize::Unknown, 0x02),
    CodeInfo::new("Xlat_m8", "xlatb", &[OpTemplate::Memory], MemorySize::UInt8, MemorySize::Unknown, 0x20),
    CodeInfo::new("Hlt", "hlt", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Syscall", "syscall", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cpuid", "cpuid", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Rdtsc", "rdtsc", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Ud2", "ud2", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Endbr64", "endbr64", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pause", "pause", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Lfence", "lfence", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Clc", "clc", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Std", "std", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Int3", "int3", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Nopw", "nop", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Nopd", "nop", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Nopq", "nop", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Nop_rm32", "nop", &[OpTemplate::RegisterOrMemory], MemorySize::UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Int_imm8", "int", &[OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Prefetchnta_m8", "prefetchnta", &[OpTemplate::Memory], MemorySize::UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Invlpgaw", "invlpga", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Invlpgad", "invlpga", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Invlpgaq", "invlpga", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Monitorw", "monitor", &[], MemorySize::Unknown, MemorySize::Unknown, 0x20),
    CodeInfo::new("Monitord", "monitor", &[], MemorySize::Unknown, MemorySize::Unknown, 0x20),
    CodeInfo::new("Monitorq", "monitor", &[], MemorySize::Unknown, MemorySize::Unknown, 0x20),
    CodeInfo::new("Mwait", "mwait", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mwaitx", "mwaitx", &[], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Lgdt_m1632_16", "lgdt", &[OpTemplate::Memory], MemorySize::Fword6, MemorySize::Unknown, 0x00),
    CodeInfo::new("Lgdt_m1632", "lgdt", &[OpTemplate::Memory], MemorySize::Fword6, MemorySize::Unknown, 0x00),
    CodeInfo::new("Lgdt_m1664", "lgdt", &[OpTemplate::Memory], MemorySize::Fword10, MemorySize::Unknown, 0x00),
    CodeInfo::new("Smsw_rm16", "smsw", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Smsw_r32m16", "smsw", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Smsw_r64m16", "smsw", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Sldt_r32m16", "sldt", &[OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Mov_r64_cr", "mov", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Bndmk_bnd_m64", "bndmk", &[OpTemplate::Register, OpTemplate::Memory], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Movaps_xmm_xmmm128", "movaps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed128_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Movaps_xmmm128_xmm", "movaps", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::Packed128_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("VEX_Vmovaps_xmm_xmmm128", "vmovaps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed128_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("VEX_Vmovaps_ymm_ymmm256", "vmovaps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed256_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Addps_xmm_xmmm128", "addps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed128_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("VEX_Vaddps_xmm_xmm_xmmm128", "vaddps", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed128_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("VEX_Vaddps_ymm_ymm_ymmm256", "vaddps", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed256_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pxor_mm_mmm64", "pxor", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed64_UInt8, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pxor_xmm_xmmm128", "pxor", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt128, MemorySize::Unknown, 0x00),
    CodeInfo::new("VEX_Vpxor_ymm_ymm_ymmm256", "vpxor", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed256_UInt32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cvtsi2sd_xmm_rm32", "cvtsi2sd", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Int32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cvtsi2sd_xmm_rm64", "cvtsi2sd", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Int64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pextrw_r32_xmm_imm8", "pextrw", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pextrw_r64_xmm_imm8", "pextrw", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::Immediate8], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("VEX_Kmovw_kr_km16", "kmovw", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt16, MemorySize::Unknown, 0x00),
    CodeInfo::new("Pblendvb_xmm_xmmm128", "pblendvb", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::UInt128, MemorySize::Unknown, 0x00),
    CodeInfo::new("Blendvps_xmm_xmmm128", "blendvps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed128_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Maskmovq_rDI_mm_mm", "maskmovq", &[OpTemplate::StringSegDest, OpTemplate::Register, OpTemplate::Register], MemorySize::UInt64, MemorySize::Unknown, 0x20),
    CodeInfo::new("Maskmovdqu_rDI_xmm_xmm", "maskmovdqu", &[OpTemplate::StringSegDest, OpTemplate::Register, OpTemplate::Register], MemorySize::UInt128, MemorySize::Unknown, 0x20),
    CodeInfo::new("VEX_Vmaskmovdqu_rDI_xmm_xmm", "vmaskmovdqu", &[OpTemplate::StringSegDest, OpTemplate::Register, OpTemplate::Register], MemorySize::UInt128, MemorySize::Unknown, 0x20),
    CodeInfo::new("Pclmulqdq_xmm_xmmm128_imm8", "pclmulqdq", &[OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt128, MemorySize::Unknown, 0x00),
    CodeInfo::new("VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8", "vpclmulqdq", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::UInt128, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmpps_xmm_xmmm128_imm8", "cmpps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Packed128_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmppd_xmm_xmmm128_imm8", "cmppd", &[OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Packed128_Float64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmpss_xmm_xmmm32_imm8", "cmpss", &[OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Cmpsd_xmm_xmmm64_imm8", "cmpsd", &[OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Float64, MemorySize::Unknown, 0x00),
    CodeInfo::new("VEX_Vcmpps_ymm_ymm_ymmm256_imm8", "vcmpps", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Packed256_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("VEX_Vcmpsd_xmm_xmm_xmmm64_imm8", "vcmpsd", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Float64, MemorySize::Unknown, 0x00),
    CodeInfo::new("EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae", "vcmpps", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Packed512_Float32, MemorySize::Broadcast512_Float32, 0x00),
    CodeInfo::new("EVEX_Vcmppd_kr_k1_zmm_zmmm512b64_imm8_sae", "vcmppd", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Packed512_Float64, MemorySize::Broadcast512_Float64, 0x00),
    CodeInfo::new("EVEX_Vpcmpd_kr_k1_zmm_zmmm512b32_imm8", "vpcmpd", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Packed512_UInt32, MemorySize::Broadcast512_UInt32, 0x00),
    CodeInfo::new("EVEX_Vpcmpud_kr_k1_zmm_zmmm512b32_imm8", "vpcmpud", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Packed512_UInt32, MemorySize::Broadcast512_UInt32, 0x00),
    CodeInfo::new("EVEX_Vmovaps_zmm_k1z_zmmm512", "vmovaps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed512_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("EVEX_Vmovaps_zmmm512_k1z_zmm", "vmovaps", &[OpTemplate::RegisterOrMemory, OpTemplate::Register], MemorySize::Packed512_Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32", "vpaddd", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed512_UInt32, MemorySize::Broadcast512_UInt32, 0x00),
    CodeInfo::new("EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32", "vaddps", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed128_Float32, MemorySize::Broadcast128_Float32, 0x00),
    CodeInfo::new("EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32", "vaddps", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed256_Float32, MemorySize::Broadcast256_Float32, 0x00),
    CodeInfo::new("EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er", "vaddps", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed512_Float32, MemorySize::Broadcast512_Float32, 0x00),
    CodeInfo::new("EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er", "vaddpd", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed512_Float64, MemorySize::Broadcast512_Float64, 0x00),
    CodeInfo::new("EVEX_Vaddsd_xmm_k1z_xmm_xmmm64_er", "vaddsd", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Float64, MemorySize::Unknown, 0x00),
    CodeInfo::new("EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er", "vsqrtps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed512_Float32, MemorySize::Broadcast512_Float32, 0x00),
    CodeInfo::new("EVEX_Vcvtsi2sd_xmm_xmm_rm32_er", "vcvtsi2sd", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Int32, MemorySize::Unknown, 0x10),
    CodeInfo::new("EVEX_Vcvtsi2sd_xmm_xmm_rm64_er", "vcvtsi2sd", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Int64, MemorySize::Unknown, 0x00),
    CodeInfo::new("EVEX_Vcvtpd2ps_ymm_k1z_zmmm512b64", "vcvtpd2ps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed512_Float64, MemorySize::Broadcast512_Float64, 0x00),
    CodeInfo::new("EVEX_Vmaxps_zmm_k1z_zmm_zmmm512b32_sae", "vmaxps", &[OpTemplate::Register, OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Packed512_Float32, MemorySize::Broadcast512_Float32, 0x00),
    CodeInfo::new("EVEX_Vcvttss2si_r32_xmmm32_sae", "vcvttss2si", &[OpTemplate::Register, OpTemplate::RegisterOrMemory], MemorySize::Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_imm8_sae", "vrndscaleps", &[OpTemplate::Register, OpTemplate::RegisterOrMemory, OpTemplate::Immediate8], MemorySize::Packed512_Float32, MemorySize::Broadcast512_Float32, 0x00),
    CodeInfo::new("Fld_m32fp", "fld", &[OpTemplate::Memory], MemorySize::Float32, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fld_m64fp", "fld", &[OpTemplate::Memory], MemorySize::Float64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fld_m80fp", "fld", &[OpTemplate::Memory], MemorySize::Float80, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fstp_m64fp", "fstp", &[OpTemplate::Memory], MemorySize::Float64, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fld_sti", "fld", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fstp_sti", "fstp", &[OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fnstenv_m28byte", "fnstenv", &[OpTemplate::Memory], MemorySize::FpuEnv28, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fadd_st0_sti", "fadd", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fadd_sti_st0", "fadd", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Faddp_sti_st0", "faddp", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fmulp_sti_st0", "fmulp", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fsubrp_sti_st0", "fsubrp", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fcom_st0_sti", "fcom", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fcomp_st0_sti", "fcomp", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fxch_st0_sti", "fxch", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
    CodeInfo::new("Fucomi_st0_sti", "fucomi", &[OpTemplate::Register, OpTemplate::Register], MemorySize::Unknown, MemorySize::Unknown, 0x00),
];
