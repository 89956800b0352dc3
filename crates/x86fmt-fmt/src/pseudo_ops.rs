//! Pseudo-op mnemonics selected by an immediate (`cmpps xmm0,xmm1,1` is
//! `cmpltps xmm0,xmm1`).

use std::sync::Arc;

use crate::error::TableError;

const CMP_PREDICATES: [&str; 8] = ["eq", "lt", "le", "unord", "neq", "nlt", "nle", "ord"];

const VCMP_PREDICATES: [&str; 32] = [
    "eq", "lt", "le", "unord", "neq", "nlt", "nle", "ord", "eq_uq", "nge", "ngt", "false", "neq_oq", "ge", "gt",
    "true", "eq_os", "lt_oq", "le_oq", "unord_s", "neq_us", "nlt_uq", "nle_uq", "ord_s", "eq_us", "nge_uq",
    "ngt_uq", "false_os", "neq_os", "ge_oq", "gt_oq", "true_us",
];

const PCLMUL_PREDICATES: [&str; 4] = ["lqlq", "hqlq", "lqhq", "hqhq"];

const VPCMP_PREDICATES: [&str; 8] = ["eq", "lt", "le", "false", "neq", "nlt", "nle", "true"];

/// Pseudo-op family. The discriminant is the selector byte stored in the
/// rule tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub(crate) enum PseudoOpsKind {
    Cmpps,
    Cmppd,
    Cmpss,
    Cmpsd,
    Vcmpps,
    Vcmppd,
    Vcmpss,
    Vcmpsd,
    Pclmulqdq,
    Vpclmulqdq,
    Vpcmpd,
    Vpcmpud,
    Vpcmpb,
    Vpcmpw,
    Vpcmpq,
    Vpcmpub,
    Vpcmpuw,
    Vpcmpuq,
}

impl PseudoOpsKind {
    const ALL: [Self; 18] = [
        Self::Cmpps,
        Self::Cmppd,
        Self::Cmpss,
        Self::Cmpsd,
        Self::Vcmpps,
        Self::Vcmppd,
        Self::Vcmpss,
        Self::Vcmpsd,
        Self::Pclmulqdq,
        Self::Vpclmulqdq,
        Self::Vpcmpd,
        Self::Vpcmpud,
        Self::Vpcmpb,
        Self::Vpcmpw,
        Self::Vpcmpq,
        Self::Vpcmpub,
        Self::Vpcmpuw,
        Self::Vpcmpuq,
    ];

    pub(crate) fn from_selector(value: u8, offset: usize) -> Result<Self, TableError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(TableError::InvalidValue {
                what: "pseudo-op selector",
                value: u32::from(value),
                offset,
            })
    }

    /// Plain mnemonic of the immediate form, e.g. `vcmpps`.
    const fn mnemonic(self) -> &'static str {
        match self {
            Self::Cmpps => "cmpps",
            Self::Cmppd => "cmppd",
            Self::Cmpss => "cmpss",
            Self::Cmpsd => "cmpsd",
            Self::Vcmpps => "vcmpps",
            Self::Vcmppd => "vcmppd",
            Self::Vcmpss => "vcmpss",
            Self::Vcmpsd => "vcmpsd",
            Self::Pclmulqdq => "pclmulqdq",
            Self::Vpclmulqdq => "vpclmulqdq",
            Self::Vpcmpd => "vpcmpd",
            Self::Vpcmpud => "vpcmpud",
            Self::Vpcmpb => "vpcmpb",
            Self::Vpcmpw => "vpcmpw",
            Self::Vpcmpq => "vpcmpq",
            Self::Vpcmpub => "vpcmpub",
            Self::Vpcmpuw => "vpcmpuw",
            Self::Vpcmpuq => "vpcmpuq",
        }
    }

    pub(crate) fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.mnemonic() == mnemonic)
    }

    /// Pseudo-op selected by `imm` as (prefix, predicate, suffix), without
    /// building the family's list.
    pub(crate) fn spelling(self, imm: u8) -> Option<(&'static str, &'static str, &'static str)> {
        let (prefix, predicates, suffix) = self.parts();
        let index = match self {
            Self::Pclmulqdq | Self::Vpclmulqdq => pclmulqdq_index(imm)?,
            _ => usize::from(imm),
        };
        predicates.get(index).map(|&predicate| (prefix, predicate, suffix))
    }

    /// (prefix, predicates, suffix)
    const fn parts(self) -> (&'static str, &'static [&'static str], &'static str) {
        match self {
            Self::Cmpps => ("cmp", &CMP_PREDICATES, "ps"),
            Self::Cmppd => ("cmp", &CMP_PREDICATES, "pd"),
            Self::Cmpss => ("cmp", &CMP_PREDICATES, "ss"),
            Self::Cmpsd => ("cmp", &CMP_PREDICATES, "sd"),
            Self::Vcmpps => ("vcmp", &VCMP_PREDICATES, "ps"),
            Self::Vcmppd => ("vcmp", &VCMP_PREDICATES, "pd"),
            Self::Vcmpss => ("vcmp", &VCMP_PREDICATES, "ss"),
            Self::Vcmpsd => ("vcmp", &VCMP_PREDICATES, "sd"),
            Self::Pclmulqdq => ("pclmul", &PCLMUL_PREDICATES, "dq"),
            Self::Vpclmulqdq => ("vpclmul", &PCLMUL_PREDICATES, "dq"),
            Self::Vpcmpd => ("vpcmp", &VPCMP_PREDICATES, "d"),
            Self::Vpcmpud => ("vpcmp", &VPCMP_PREDICATES, "ud"),
            Self::Vpcmpb => ("vpcmp", &VPCMP_PREDICATES, "b"),
            Self::Vpcmpw => ("vpcmp", &VPCMP_PREDICATES, "w"),
            Self::Vpcmpq => ("vpcmp", &VPCMP_PREDICATES, "q"),
            Self::Vpcmpub => ("vpcmp", &VPCMP_PREDICATES, "ub"),
            Self::Vpcmpuw => ("vpcmp", &VPCMP_PREDICATES, "uw"),
            Self::Vpcmpuq => ("vpcmp", &VPCMP_PREDICATES, "uq"),
        }
    }
}

/// Mnemonic lists for every pseudo-op family, built once per rule table and
/// shared by the rules that reference them.
#[derive(Debug)]
pub(crate) struct PseudoOps {
    lists: Vec<Arc<[String]>>,
}

impl PseudoOps {
    pub(crate) fn new() -> Self {
        let lists = PseudoOpsKind::ALL
            .iter()
            .map(|kind| {
                let (prefix, predicates, suffix) = kind.parts();
                predicates
                    .iter()
                    .map(|pred| format!("{prefix}{pred}{suffix}"))
                    .collect::<Arc<[String]>>()
            })
            .collect();
        Self { lists }
    }

    pub(crate) fn get(&self, kind: PseudoOpsKind) -> Arc<[String]> {
        Arc::clone(&self.lists[kind as usize])
    }
}

/// Maps a `pclmulqdq` immediate to its pseudo-op index.
pub(crate) const fn pclmulqdq_index(imm: u8) -> Option<usize> {
    match imm {
        0x00 => Some(0),
        0x01 => Some(1),
        0x10 => Some(2),
        0x11 => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists() {
        let ops = PseudoOps::new();
        let cmpps = ops.get(PseudoOpsKind::Cmpps);
        assert_eq!(cmpps.len(), 8);
        assert_eq!(cmpps[1], "cmpltps");
        let vcmpsd = ops.get(PseudoOpsKind::Vcmpsd);
        assert_eq!(vcmpsd.len(), 32);
        assert_eq!(vcmpsd[31], "vcmptrue_ussd");
        assert_eq!(ops.get(PseudoOpsKind::Vpclmulqdq)[3], "vpclmulhqhqdq");
        assert_eq!(ops.get(PseudoOpsKind::Vpcmpud)[4], "vpcmpnequd");
    }

    #[test]
    fn test_selector() {
        assert_eq!(PseudoOpsKind::from_selector(11, 0).unwrap(), PseudoOpsKind::Vpcmpud);
        assert!(PseudoOpsKind::from_selector(18, 3).is_err());
        assert_eq!(pclmulqdq_index(0x10), Some(2));
        assert_eq!(pclmulqdq_index(0x02), None);
    }

    #[test]
    fn test_spelling_by_mnemonic() {
        let vcmp = PseudoOpsKind::from_mnemonic("vcmpps").unwrap();
        assert_eq!(vcmp.spelling(0x1F), Some(("vcmp", "true_us", "ps")));
        assert_eq!(vcmp.spelling(0x20), None);
        let pclmul = PseudoOpsKind::from_mnemonic("pclmulqdq").unwrap();
        assert_eq!(pclmul.spelling(0x11), Some(("pclmul", "hqhq", "dq")));
        assert_eq!(pclmul.spelling(0x02), None);
        assert_eq!(PseudoOpsKind::from_mnemonic("add"), None);
    }
}
