//
// stdf_types.rs
// Author: noonchen - chennoon233@foxmail.com
// Created Date: October 3rd 2022
// -----
// Last Modified: Thu Oct 06 2022
// Modified By: noonchen
// -----
// Copyright (c) 2022 noonchen
//

// Re-exported wholesale so existing callers (and the crate's own tests)
// can spell these as `stdf_types::read_uint8` / `stdf_types::read_u2`,
// the way the teacher's test module already does.
pub use crate::codec::{
    read_b1, read_bn, read_c1, read_cf, read_cn, read_dn, read_i2, read_i4, read_nibble_array,
    read_r4, read_r8, read_sn, read_u2, read_u4, read_u8, read_uf, read_uint8, uf_width,
    write_b1, write_bn, write_c1, write_cf, write_cn, write_dn, write_i2, write_i4,
    write_nibble_array, write_r4, write_r8, write_sn, write_u2, write_u4, write_u8, write_uf,
    write_uint8, ByteOrder,
};
use crate::stdf_error::{StdfError, StdfErrorKind};
use smart_default::SmartDefault;

// Data Types
pub type B1 = u8;
pub type C1 = char;
pub type U1 = u8;
pub type U2 = u16;
pub type U4 = u32;
pub type U8 = u64;
pub type I1 = i8;
pub type I2 = i16;
pub type I4 = i32;
pub type I8 = i64;
pub type R4 = f32;
pub type R8 = f64;

pub type Cn = String;
pub type Cf = String;
pub type Sn = String;
pub type Bn = Box<[u8]>;
pub type Dn = Box<[u8]>;

pub type KxCn = Vec<Cn>;
pub type KxCf = Vec<Cf>;
pub type KxSn = Vec<Sn>;
pub type KxU1 = Vec<U1>;
pub type KxU2 = Vec<U2>;
pub type KxU4 = Vec<U4>;
pub type KxU8 = Vec<U8>;
pub type KxR4 = Vec<R4>;
pub type KxN1 = Vec<U1>;

/// A `Uf` array's element width is named by another field (1/2/4/8
/// bytes); values always widen to `u64` in memory.
pub type KxUf = Vec<u64>;

/// One self-describing `Vn` slot (spec.md section 4.4's variant tag
/// table).
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum V1 {
    B0,
    U1(U1),
    U2(U2),
    U4(U4),
    I1(I1),
    I2(I2),
    I4(I4),
    R4(R4),
    R8(R8),
    Cn(Cn),
    Bn(Bn),
    Dn(Dn),
    N1(U1),
}

pub type Vn = Vec<V1>;

fn bit_set(flag: u8, bit: u8) -> bool {
    flag & (1 << bit) != 0
}

fn set_bit(flag: &mut u8, bit: u8) {
    *flag |= 1 << bit;
}

/// Compression wrapper selected from a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressType {
    Uncompressed,
    GzipCompressed,
    BzipCompressed,
    ZipCompressed,
}

/// 4-byte record header: 2-byte payload length, 1-byte major type,
/// 1-byte minor subtype. `type_code` is the resolved registry bit flag,
/// `REC_INVALID` (0) for an unknown `(typ, sub)` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordHeader {
    pub len: U2,
    pub typ: U1,
    pub sub: U1,
    pub type_code: u64,
}

impl RecordHeader {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn read_from_bytes(mut self, buf: &[u8], order: &ByteOrder) -> Result<Self, StdfError> {
        if buf.len() < 4 {
            return Err(StdfError::new(
                StdfErrorKind::EndOfFile,
                "header requires 4 bytes",
            ));
        }
        let mut pos = 0usize;
        self.len = read_u2(buf, &mut pos, order);
        self.typ = read_uint8(buf, &mut pos);
        self.sub = read_uint8(buf, &mut pos);
        self.type_code = stdf_record_type::code_from_type_sub(self.typ, self.sub);
        Ok(self)
    }
}

pub mod stdf_record_type {
    pub const REC_INVALID: u64 = 0;
    pub const REC_FAR: u64 = 1 << 0;
    pub const REC_ATR: u64 = 1 << 1;
    pub const REC_VUR: u64 = 1 << 2;
    pub const REC_MIR: u64 = 1 << 3;
    pub const REC_MRR: u64 = 1 << 4;
    pub const REC_PCR: u64 = 1 << 5;
    pub const REC_HBR: u64 = 1 << 6;
    pub const REC_SBR: u64 = 1 << 7;
    pub const REC_PMR: u64 = 1 << 8;
    pub const REC_PGR: u64 = 1 << 9;
    pub const REC_PLR: u64 = 1 << 10;
    pub const REC_RDR: u64 = 1 << 11;
    pub const REC_SDR: u64 = 1 << 12;
    pub const REC_PSR: u64 = 1 << 13;
    pub const REC_NMR: u64 = 1 << 14;
    pub const REC_CNR: u64 = 1 << 15;
    pub const REC_SSR: u64 = 1 << 16;
    pub const REC_CDR: u64 = 1 << 17;
    pub const REC_WIR: u64 = 1 << 18;
    pub const REC_WRR: u64 = 1 << 19;
    pub const REC_WCR: u64 = 1 << 20;
    pub const REC_PIR: u64 = 1 << 21;
    pub const REC_PRR: u64 = 1 << 22;
    pub const REC_TSR: u64 = 1 << 23;
    pub const REC_PTR: u64 = 1 << 24;
    pub const REC_MPR: u64 = 1 << 25;
    pub const REC_FTR: u64 = 1 << 26;
    pub const REC_STR: u64 = 1 << 27;
    pub const REC_BPS: u64 = 1 << 28;
    pub const REC_EPS: u64 = 1 << 29;
    pub const REC_GDR: u64 = 1 << 30;
    pub const REC_DTR: u64 = 1 << 31;

    /// All record kinds known to this registry.
    pub const REC_ALL: u64 = REC_FAR
        | REC_ATR
        | REC_VUR
        | REC_MIR
        | REC_MRR
        | REC_PCR
        | REC_HBR
        | REC_SBR
        | REC_PMR
        | REC_PGR
        | REC_PLR
        | REC_RDR
        | REC_SDR
        | REC_PSR
        | REC_NMR
        | REC_CNR
        | REC_SSR
        | REC_CDR
        | REC_WIR
        | REC_WRR
        | REC_WCR
        | REC_PIR
        | REC_PRR
        | REC_TSR
        | REC_PTR
        | REC_MPR
        | REC_FTR
        | REC_STR
        | REC_BPS
        | REC_EPS
        | REC_GDR
        | REC_DTR;

    pub fn code_from_type_sub(typ: u8, sub: u8) -> u64 {
        match (typ, sub) {
            (0, 10) => REC_FAR,
            (0, 20) => REC_ATR,
            (0, 30) => REC_VUR,
            (1, 10) => REC_MIR,
            (1, 20) => REC_MRR,
            (1, 30) => REC_PCR,
            (1, 40) => REC_HBR,
            (1, 50) => REC_SBR,
            (1, 60) => REC_PMR,
            (1, 62) => REC_PGR,
            (1, 63) => REC_PLR,
            (1, 70) => REC_RDR,
            (1, 80) => REC_SDR,
            (1, 90) => REC_PSR,
            (1, 91) => REC_NMR,
            (1, 92) => REC_CNR,
            (1, 93) => REC_SSR,
            (1, 94) => REC_CDR,
            (2, 10) => REC_WIR,
            (2, 20) => REC_WRR,
            (2, 30) => REC_WCR,
            (5, 10) => REC_PIR,
            (5, 20) => REC_PRR,
            (10, 30) => REC_TSR,
            (15, 10) => REC_PTR,
            (15, 15) => REC_MPR,
            (15, 20) => REC_FTR,
            (15, 30) => REC_STR,
            (20, 10) => REC_BPS,
            (20, 20) => REC_EPS,
            (50, 10) => REC_GDR,
            (50, 30) => REC_DTR,
            _ => REC_INVALID,
        }
    }

    pub fn type_sub_from_code(code: u64) -> (u8, u8) {
        match code {
            REC_FAR => (0, 10),
            REC_ATR => (0, 20),
            REC_VUR => (0, 30),
            REC_MIR => (1, 10),
            REC_MRR => (1, 20),
            REC_PCR => (1, 30),
            REC_HBR => (1, 40),
            REC_SBR => (1, 50),
            REC_PMR => (1, 60),
            REC_PGR => (1, 62),
            REC_PLR => (1, 63),
            REC_RDR => (1, 70),
            REC_SDR => (1, 80),
            REC_PSR => (1, 90),
            REC_NMR => (1, 91),
            REC_CNR => (1, 92),
            REC_SSR => (1, 93),
            REC_CDR => (1, 94),
            REC_WIR => (2, 10),
            REC_WRR => (2, 20),
            REC_WCR => (2, 30),
            REC_PIR => (5, 10),
            REC_PRR => (5, 20),
            REC_TSR => (10, 30),
            REC_PTR => (15, 10),
            REC_MPR => (15, 15),
            REC_FTR => (15, 20),
            REC_STR => (15, 30),
            REC_BPS => (20, 10),
            REC_EPS => (20, 20),
            REC_GDR => (50, 10),
            REC_DTR => (50, 30),
            _ => (0, 0),
        }
    }
}

use stdf_record_type::*;

// ---------------------------------------------------------------------
// Record structs
// ---------------------------------------------------------------------

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct FAR {
    pub cpu_type: U1,
    #[default = 4]
    pub stdf_ver: U1,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct ATR {
    pub mod_tim: U4,
    pub cmd_line: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct VUR {
    pub upd_nam: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct MIR {
    pub setup_t: U4,
    pub start_t: U4,
    pub stat_num: U1,
    #[default(' ')]
    pub mode_cod: C1,
    #[default(' ')]
    pub rtst_cod: C1,
    #[default(' ')]
    pub prot_cod: C1,
    #[default = 65535]
    pub burn_tim: U2,
    #[default(' ')]
    pub cmod_cod: C1,
    pub lot_id: Cn,
    pub part_typ: Cn,
    pub node_nam: Cn,
    pub tstr_typ: Cn,
    pub job_nam: Cn,
    pub job_rev: Cn,
    pub sblot_id: Cn,
    pub oper_nam: Cn,
    pub exec_typ: Cn,
    pub exec_ver: Cn,
    pub test_cod: Cn,
    pub tst_temp: Cn,
    pub user_txt: Cn,
    pub aux_file: Cn,
    pub pkg_typ: Cn,
    pub famly_id: Cn,
    pub date_cod: Cn,
    pub facil_id: Cn,
    pub floor_id: Cn,
    pub proc_id: Cn,
    pub oper_frq: Cn,
    pub spec_nam: Cn,
    pub spec_ver: Cn,
    pub flow_id: Cn,
    pub setup_id: Cn,
    pub dsgn_rev: Cn,
    pub eng_id: Cn,
    pub rom_cod: Cn,
    pub serl_num: Cn,
    pub supr_nam: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct MRR {
    pub finish_t: U4,
    #[default(' ')]
    pub disp_cod: C1,
    pub usr_desc: Cn,
    pub exc_desc: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct PCR {
    pub head_num: U1,
    pub site_num: U1,
    pub part_cnt: U4,
    #[default = 4_294_967_295]
    pub rtst_cnt: U4,
    #[default = 4_294_967_295]
    pub abrt_cnt: U4,
    #[default = 4_294_967_295]
    pub good_cnt: U4,
    #[default = 4_294_967_295]
    pub func_cnt: U4,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct HBR {
    pub head_num: U1,
    pub site_num: U1,
    pub hbin_num: U2,
    pub hbin_cnt: U4,
    #[default(' ')]
    pub hbin_pf: C1,
    pub hbin_nam: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct SBR {
    pub head_num: U1,
    pub site_num: U1,
    pub sbin_num: U2,
    pub sbin_cnt: U4,
    #[default(' ')]
    pub sbin_pf: C1,
    pub sbin_nam: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct PMR {
    pub pmr_indx: U2,
    pub chan_typ: U2,
    pub chan_nam: Cn,
    pub phy_nam: Cn,
    pub log_nam: Cn,
    #[default = 1]
    pub head_num: U1,
    #[default = 1]
    pub site_num: U1,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct PGR {
    pub grp_indx: U2,
    pub grp_nam: Cn,
    pub indx_cnt: U2,
    pub pmr_indx: KxU2,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct PLR {
    pub grp_cnt: U2,
    pub grp_indx: KxU2,
    pub grp_mode: KxU2,
    pub grp_radx: KxU1,
    pub pgm_char: KxCn,
    pub rtn_char: KxCn,
    pub pgm_chal: KxCn,
    pub rtn_chal: KxCn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct RDR {
    pub num_bins: U2,
    pub rtst_bin: KxU2,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct SDR {
    pub head_num: U1,
    pub site_grp: U1,
    pub site_cnt: U1,
    pub site_num: KxU1,
    pub hand_typ: Cn,
    pub hand_id: Cn,
    pub card_typ: Cn,
    pub card_id: Cn,
    pub load_typ: Cn,
    pub load_id: Cn,
    pub dib_typ: Cn,
    pub dib_id: Cn,
    pub cabl_typ: Cn,
    pub cabl_id: Cn,
    pub cont_typ: Cn,
    pub cont_id: Cn,
    pub lasr_typ: Cn,
    pub lasr_id: Cn,
    pub extr_typ: Cn,
    pub extr_id: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct PSR {
    pub cont_flg: B1,
    pub psr_indx: U2,
    pub psr_nam: Cn,
    pub opt_flg: B1,
    pub totp_cnt: U2,
    pub locp_cnt: U2,
    pub pat_bgn: KxU8,
    pub pat_end: KxU8,
    pub pat_file: KxCn,
    pub pat_lbl: KxCn,
    pub file_uid: KxCn,
    pub atpg_dsc: KxCn,
    pub src_id: KxCn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct NMR {
    pub cont_flg: B1,
    pub totm_cnt: U2,
    pub locm_cnt: U2,
    pub pmr_indx: KxU2,
    pub atpg_nam: KxCn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct CNR {
    pub chn_num: U2,
    pub bit_pos: U4,
    pub cell_nam: Sn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct SSR {
    pub ssr_nam: Cn,
    pub chn_cnt: U2,
    pub chn_list: KxU2,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct CDR {
    pub cont_flg: B1,
    pub cdr_indx: U2,
    pub chn_nam: Cn,
    pub chn_len: U4,
    pub sin_pin: U2,
    pub sout_pin: U2,
    pub mstr_cnt: U1,
    pub m_clks: KxU2,
    pub slav_cnt: U1,
    pub s_clks: KxU2,
    #[default = 255]
    pub inv_val: U1,
    pub lst_cnt: U2,
    pub cell_lst: KxSn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct WIR {
    pub head_num: U1,
    #[default = 255]
    pub site_grp: U1,
    pub start_t: U4,
    pub wafer_id: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct WRR {
    pub head_num: U1,
    #[default = 255]
    pub site_grp: U1,
    pub finish_t: U4,
    pub part_cnt: U4,
    #[default = 4_294_967_295]
    pub rtst_cnt: U4,
    #[default = 4_294_967_295]
    pub abrt_cnt: U4,
    #[default = 4_294_967_295]
    pub good_cnt: U4,
    #[default = 4_294_967_295]
    pub func_cnt: U4,
    pub wafer_id: Cn,
    pub fabwf_id: Cn,
    pub frame_id: Cn,
    pub mask_id: Cn,
    pub usr_desc: Cn,
    pub exc_desc: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct WCR {
    pub wafr_siz: R4,
    pub die_ht: R4,
    pub die_wid: R4,
    pub wf_units: U1,
    #[default(' ')]
    pub wf_flat: C1,
    #[default = -32768]
    pub center_x: I2,
    #[default = -32768]
    pub center_y: I2,
    #[default(' ')]
    pub pos_x: C1,
    #[default(' ')]
    pub pos_y: C1,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct PIR {
    pub head_num: U1,
    pub site_num: U1,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct PRR {
    pub head_num: U1,
    pub site_num: U1,
    pub part_flg: B1,
    pub num_test: U2,
    pub hard_bin: U2,
    #[default = 65535]
    pub soft_bin: U2,
    #[default = -32768]
    pub x_coord: I2,
    #[default = -32768]
    pub y_coord: I2,
    pub test_t: U4,
    pub part_id: Cn,
    pub part_txt: Cn,
    pub part_fix: Bn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct TSR {
    pub head_num: U1,
    pub site_num: U1,
    #[default(' ')]
    pub test_typ: C1,
    pub test_num: U4,
    #[default = 4_294_967_295]
    pub exec_cnt: U4,
    #[default = 4_294_967_295]
    pub fail_cnt: U4,
    #[default = 4_294_967_295]
    pub alrm_cnt: U4,
    pub test_nam: Cn,
    pub seq_name: Cn,
    pub test_lbl: Cn,
    pub opt_flag: B1,
    #[default = -1e300]
    pub test_tim: R4,
    #[default = -1e300]
    pub test_min: R4,
    #[default = -1e300]
    pub test_max: R4,
    #[default = -1e300]
    pub tst_sums: R4,
    #[default = -1e300]
    pub tst_sqrs: R4,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct PTR {
    pub test_num: U4,
    pub head_num: U1,
    pub site_num: U1,
    pub test_flg: B1,
    pub parm_flg: B1,
    pub result: R4,
    pub test_txt: Cn,
    pub alarm_id: Cn,
    pub opt_flag: B1,
    pub res_scal: I1,
    pub llm_scal: I1,
    pub hlm_scal: I1,
    #[default = -1e300]
    pub lo_limit: R4,
    #[default = -1e300]
    pub hi_limit: R4,
    pub units: Cn,
    pub c_resfmt: Cn,
    pub c_llmfmt: Cn,
    pub c_hlmfmt: Cn,
    #[default = -1e300]
    pub lo_spec: R4,
    #[default = -1e300]
    pub hi_spec: R4,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct MPR {
    pub test_num: U4,
    pub head_num: U1,
    pub site_num: U1,
    pub test_flg: B1,
    pub parm_flg: B1,
    pub rtn_icnt: U2,
    pub rslt_cnt: U2,
    pub rtn_stat: KxN1,
    pub rtn_rslt: KxR4,
    pub test_txt: Cn,
    pub alarm_id: Cn,
    pub opt_flag: B1,
    pub res_scal: I1,
    pub llm_scal: I1,
    pub hlm_scal: I1,
    #[default = -1e300]
    pub lo_limit: R4,
    #[default = -1e300]
    pub hi_limit: R4,
    pub start_in: R4,
    pub incr_in: R4,
    pub rtn_indx: KxU2,
    pub units: Cn,
    pub units_in: Cn,
    pub c_resfmt: Cn,
    pub c_llmfmt: Cn,
    pub c_hlmfmt: Cn,
    #[default = -1e300]
    pub lo_spec: R4,
    #[default = -1e300]
    pub hi_spec: R4,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct FTR {
    pub test_num: U4,
    pub head_num: U1,
    pub site_num: U1,
    pub test_flg: B1,
    pub opt_flag: B1,
    pub cycl_cnt: U4,
    pub rel_vadr: U4,
    pub rept_cnt: U4,
    pub num_fail: U4,
    #[default = -2_147_483_648]
    pub xfail_ad: I4,
    #[default = -2_147_483_648]
    pub yfail_ad: I4,
    pub vect_off: I2,
    pub rtn_icnt: U2,
    pub pgm_icnt: U2,
    pub rtn_indx: KxU2,
    pub rtn_stat: KxN1,
    pub pgm_indx: KxU2,
    pub pgm_stat: KxN1,
    pub fail_pin: Dn,
    pub vect_nam: Cn,
    pub time_set: Cn,
    pub op_code: Cn,
    pub test_txt: Cn,
    pub alarm_id: Cn,
    pub prog_txt: Cn,
    pub rslt_txt: Cn,
    #[default = 255]
    pub patg_num: U1,
    pub spin_map: Dn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct STR {
    pub cont_flg: B1,
    pub test_num: U4,
    pub head_num: U1,
    pub site_num: U1,
    pub psr_ref: U2,
    pub test_flg: B1,
    pub log_typ: Cn,
    pub test_txt: Cn,
    pub alarm_id: Cn,
    pub prog_txt: Cn,
    pub rslt_txt: Cn,
    #[default = 255]
    pub z_val: U1,
    pub fmu_flg: B1,
    pub mask_map: Dn,
    pub fal_map: Dn,
    pub cyc_cnt_t: U8,
    pub totf_cnt: U4,
    pub totl_cnt: U4,
    pub cyc_base: U8,
    pub bit_base: U4,
    pub cond_cnt: U2,
    pub lim_cnt: U2,
    #[default = 1]
    pub cyc_size: U1,
    #[default = 1]
    pub pmr_size: U1,
    #[default = 1]
    pub chn_size: U1,
    #[default = 1]
    pub pat_size: U1,
    #[default = 1]
    pub bit_size: U1,
    #[default = 1]
    pub u1_size: U1,
    #[default = 1]
    pub u2_size: U1,
    #[default = 1]
    pub u3_size: U1,
    pub utx_size: U1,
    pub cap_bgn: U2,
    pub lim_indx: KxU2,
    pub lim_spec: KxU4,
    pub cond_lst: KxCn,
    pub cyc_cnt: U2,
    pub cyc_ofst: KxUf,
    pub pmr_cnt: U2,
    pub pmr_indx: KxUf,
    pub chn_cnt: U2,
    pub chn_num: KxUf,
    pub exp_cnt: U2,
    pub exp_data: KxU1,
    pub cap_cnt: U2,
    pub cap_data: KxU1,
    pub new_cnt: U2,
    pub new_data: KxU1,
    pub pat_cnt: U2,
    pub pat_num: KxUf,
    pub bpos_cnt: U2,
    pub bit_pos: KxUf,
    pub usr1_cnt: U2,
    pub usr1: KxUf,
    pub usr2_cnt: U2,
    pub usr2: KxUf,
    pub usr3_cnt: U2,
    pub usr3: KxUf,
    pub txt_cnt: U2,
    pub user_txt: KxCf,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct BPS {
    pub seq_name: Cn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EPS {}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct GDR {
    pub fld_cnt: U2,
    pub gen_data: Vn,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct DTR {
    pub text_dat: Cn,
}

/// Placeholder for an unrecognized `(type, subtype)` pair; carries the
/// raw payload through unmodified (spec.md section 4.4 "unknown record
/// kind" handling).
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, struct_field_names_as_array::FieldNamesAsArray)
)]
#[cfg_attr(feature = "serialize", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvalidRec {
    pub typ: U1,
    pub sub: U1,
    pub raw_data: Vec<u8>,
}

// ---------------------------------------------------------------------
// Per-record codec impls
// ---------------------------------------------------------------------

macro_rules! field_or_missing {
    ($buf:expr, $pos:expr, $setter:expr) => {
        if *$pos < $buf.len() {
            $setter
        }
    };
}

impl FAR {
    pub fn read_from_bytes(&mut self, buf: &[u8], _order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.cpu_type = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.stdf_ver = read_uint8(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, _order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.cpu_type);
        write_uint8(&mut out, self.stdf_ver);
        out
    }
}

impl ATR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.mod_tim = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.cmd_line = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u4(&mut out, self.mod_tim, order);
        write_cn(&mut out, &self.cmd_line);
        out
    }
}

impl VUR {
    pub fn read_from_bytes(&mut self, buf: &[u8], _order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.upd_nam = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, _order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_cn(&mut out, &self.upd_nam);
        out
    }
}

impl MIR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.setup_t = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.start_t = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.stat_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.mode_cod = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.rtst_cod = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.prot_cod = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.burn_tim = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.cmod_cod = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.lot_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.part_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.node_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.tstr_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.job_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.job_rev = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.sblot_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.oper_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.exec_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.exec_ver = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_cod = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.tst_temp = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.user_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.aux_file = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.pkg_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.famly_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.date_cod = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.facil_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.floor_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.proc_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.oper_frq = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.spec_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.spec_ver = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.flow_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.setup_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.dsgn_rev = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.eng_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.rom_cod = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.serl_num = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.supr_nam = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u4(&mut out, self.setup_t, order);
        write_u4(&mut out, self.start_t, order);
        write_uint8(&mut out, self.stat_num);
        write_c1(&mut out, self.mode_cod);
        write_c1(&mut out, self.rtst_cod);
        write_c1(&mut out, self.prot_cod);
        write_u2(&mut out, self.burn_tim, order);
        write_c1(&mut out, self.cmod_cod);
        for s in [
            &self.lot_id,
            &self.part_typ,
            &self.node_nam,
            &self.tstr_typ,
            &self.job_nam,
            &self.job_rev,
            &self.sblot_id,
            &self.oper_nam,
            &self.exec_typ,
            &self.exec_ver,
            &self.test_cod,
            &self.tst_temp,
            &self.user_txt,
            &self.aux_file,
            &self.pkg_typ,
            &self.famly_id,
            &self.date_cod,
            &self.facil_id,
            &self.floor_id,
            &self.proc_id,
            &self.oper_frq,
            &self.spec_nam,
            &self.spec_ver,
            &self.flow_id,
            &self.setup_id,
            &self.dsgn_rev,
            &self.eng_id,
            &self.rom_cod,
            &self.serl_num,
            &self.supr_nam,
        ] {
            write_cn(&mut out, s);
        }
        out
    }
}

impl MRR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.finish_t = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.disp_cod = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.usr_desc = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.exc_desc = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u4(&mut out, self.finish_t, order);
        write_c1(&mut out, self.disp_cod);
        write_cn(&mut out, &self.usr_desc);
        write_cn(&mut out, &self.exc_desc);
        out
    }
}

impl PCR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.part_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.rtst_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.abrt_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.good_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.func_cnt = read_u4(buf, &mut pos, order));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        write_u4(&mut out, self.part_cnt, order);
        write_u4(&mut out, self.rtst_cnt, order);
        write_u4(&mut out, self.abrt_cnt, order);
        write_u4(&mut out, self.good_cnt, order);
        write_u4(&mut out, self.func_cnt, order);
        out
    }
}

impl HBR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.hbin_num = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.hbin_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.hbin_pf = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.hbin_nam = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        write_u2(&mut out, self.hbin_num, order);
        write_u4(&mut out, self.hbin_cnt, order);
        write_c1(&mut out, self.hbin_pf);
        write_cn(&mut out, &self.hbin_nam);
        out
    }
}

impl SBR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.sbin_num = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.sbin_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.sbin_pf = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.sbin_nam = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        write_u2(&mut out, self.sbin_num, order);
        write_u4(&mut out, self.sbin_cnt, order);
        write_c1(&mut out, self.sbin_pf);
        write_cn(&mut out, &self.sbin_nam);
        out
    }
}

impl PMR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.pmr_indx = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.chan_typ = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.chan_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.phy_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.log_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u2(&mut out, self.pmr_indx, order);
        write_u2(&mut out, self.chan_typ, order);
        write_cn(&mut out, &self.chan_nam);
        write_cn(&mut out, &self.phy_nam);
        write_cn(&mut out, &self.log_nam);
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        out
    }
}

impl PGR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.grp_indx = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.grp_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.indx_cnt = read_u2(buf, &mut pos, order));
        let n = self.indx_cnt as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.pmr_indx = v;
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u2(&mut out, self.grp_indx, order);
        write_cn(&mut out, &self.grp_nam);
        write_u2(&mut out, self.pmr_indx.len() as u16, order);
        for v in &self.pmr_indx {
            write_u2(&mut out, *v, order);
        }
        out
    }
}

impl PLR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.grp_cnt = read_u2(buf, &mut pos, order));
        let n = self.grp_cnt as usize;
        let mut read_u2_arr = |pos: &mut usize| -> Vec<u16> {
            let mut v = Vec::with_capacity(n);
            for _ in 0..n {
                if *pos >= buf.len() {
                    break;
                }
                v.push(read_u2(buf, pos, order));
            }
            v
        };
        self.grp_indx = read_u2_arr(&mut pos);
        self.grp_mode = read_u2_arr(&mut pos);
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_uint8(buf, &mut pos));
        }
        self.grp_radx = v;
        let mut read_cn_arr = |pos: &mut usize| -> Vec<String> {
            let mut v = Vec::with_capacity(n);
            for _ in 0..n {
                if *pos >= buf.len() {
                    break;
                }
                v.push(read_cn(buf, pos));
            }
            v
        };
        self.pgm_char = read_cn_arr(&mut pos);
        self.rtn_char = read_cn_arr(&mut pos);
        self.pgm_chal = read_cn_arr(&mut pos);
        self.rtn_chal = read_cn_arr(&mut pos);
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u2(&mut out, self.grp_indx.len() as u16, order);
        for v in &self.grp_indx {
            write_u2(&mut out, *v, order);
        }
        for v in &self.grp_mode {
            write_u2(&mut out, *v, order);
        }
        for v in &self.grp_radx {
            write_uint8(&mut out, *v);
        }
        for group in [
            &self.pgm_char,
            &self.rtn_char,
            &self.pgm_chal,
            &self.rtn_chal,
        ] {
            for s in group {
                write_cn(&mut out, s);
            }
        }
        out
    }
}

impl RDR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.num_bins = read_u2(buf, &mut pos, order));
        let n = self.num_bins as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.rtst_bin = v;
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u2(&mut out, self.rtst_bin.len() as u16, order);
        for v in &self.rtst_bin {
            write_u2(&mut out, *v, order);
        }
        out
    }
}

impl SDR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_grp = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_cnt = read_uint8(buf, &mut pos));
        let n = self.site_cnt as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_uint8(buf, &mut pos));
        }
        self.site_num = v;
        field_or_missing!(buf, &mut pos, self.hand_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.hand_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.card_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.card_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.load_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.load_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.dib_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.dib_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.cabl_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.cabl_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.cont_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.cont_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.lasr_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.lasr_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.extr_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.extr_id = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, _order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_grp);
        write_uint8(&mut out, self.site_num.len() as u8);
        for v in &self.site_num {
            write_uint8(&mut out, *v);
        }
        for s in [
            &self.hand_typ,
            &self.hand_id,
            &self.card_typ,
            &self.card_id,
            &self.load_typ,
            &self.load_id,
            &self.dib_typ,
            &self.dib_id,
            &self.cabl_typ,
            &self.cabl_id,
            &self.cont_typ,
            &self.cont_id,
            &self.lasr_typ,
            &self.lasr_id,
            &self.extr_typ,
            &self.extr_id,
        ] {
            write_cn(&mut out, s);
        }
        out
    }
}

impl PSR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.cont_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.psr_indx = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.psr_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.opt_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.totp_cnt = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.locp_cnt = read_u2(buf, &mut pos, order));
        let n = self.locp_cnt as usize;
        let mut read_u8_arr = |pos: &mut usize| -> Vec<u64> {
            let mut v = Vec::with_capacity(n);
            for _ in 0..n {
                if *pos >= buf.len() {
                    break;
                }
                v.push(read_u8(buf, pos, order));
            }
            v
        };
        self.pat_bgn = read_u8_arr(&mut pos);
        self.pat_end = read_u8_arr(&mut pos);
        let mut read_cn_arr = |pos: &mut usize| -> Vec<String> {
            let mut v = Vec::with_capacity(n);
            for _ in 0..n {
                if *pos >= buf.len() {
                    break;
                }
                v.push(read_cn(buf, pos));
            }
            v
        };
        self.pat_file = read_cn_arr(&mut pos);
        if !bit_set(self.opt_flg, 0) {
            self.pat_lbl = read_cn_arr(&mut pos);
        }
        if !bit_set(self.opt_flg, 1) {
            self.file_uid = read_cn_arr(&mut pos);
        }
        if !bit_set(self.opt_flg, 2) {
            self.atpg_dsc = read_cn_arr(&mut pos);
        }
        if !bit_set(self.opt_flg, 3) {
            self.src_id = read_cn_arr(&mut pos);
        }
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_b1(&mut out, self.cont_flg);
        write_u2(&mut out, self.psr_indx, order);
        write_cn(&mut out, &self.psr_nam);
        let mut opt_flg = self.opt_flg;
        if self.pat_lbl.is_empty() {
            set_bit(&mut opt_flg, 0);
        }
        if self.file_uid.is_empty() {
            set_bit(&mut opt_flg, 1);
        }
        if self.atpg_dsc.is_empty() {
            set_bit(&mut opt_flg, 2);
        }
        if self.src_id.is_empty() {
            set_bit(&mut opt_flg, 3);
        }
        write_b1(&mut out, opt_flg);
        write_u2(&mut out, self.totp_cnt, order);
        write_u2(&mut out, self.pat_bgn.len() as u16, order);
        for v in &self.pat_bgn {
            write_u8(&mut out, *v, order);
        }
        for v in &self.pat_end {
            write_u8(&mut out, *v, order);
        }
        for s in &self.pat_file {
            write_cn(&mut out, s);
        }
        if !bit_set(opt_flg, 0) {
            for s in &self.pat_lbl {
                write_cn(&mut out, s);
            }
        }
        if !bit_set(opt_flg, 1) {
            for s in &self.file_uid {
                write_cn(&mut out, s);
            }
        }
        if !bit_set(opt_flg, 2) {
            for s in &self.atpg_dsc {
                write_cn(&mut out, s);
            }
        }
        if !bit_set(opt_flg, 3) {
            for s in &self.src_id {
                write_cn(&mut out, s);
            }
        }
        out
    }
}

impl NMR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.cont_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.totm_cnt = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.locm_cnt = read_u2(buf, &mut pos, order));
        let n = self.locm_cnt as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.pmr_indx = v;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_cn(buf, &mut pos));
        }
        self.atpg_nam = v;
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_b1(&mut out, self.cont_flg);
        write_u2(&mut out, self.totm_cnt, order);
        write_u2(&mut out, self.pmr_indx.len() as u16, order);
        for v in &self.pmr_indx {
            write_u2(&mut out, *v, order);
        }
        for s in &self.atpg_nam {
            write_cn(&mut out, s);
        }
        out
    }
}

impl CNR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.chn_num = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.bit_pos = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.cell_nam = read_sn(buf, &mut pos, order));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u2(&mut out, self.chn_num, order);
        write_u4(&mut out, self.bit_pos, order);
        write_sn(&mut out, &self.cell_nam, order);
        out
    }
}

impl SSR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.ssr_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.chn_cnt = read_u2(buf, &mut pos, order));
        let n = self.chn_cnt as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.chn_list = v;
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_cn(&mut out, &self.ssr_nam);
        write_u2(&mut out, self.chn_list.len() as u16, order);
        for v in &self.chn_list {
            write_u2(&mut out, *v, order);
        }
        out
    }
}

impl CDR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.cont_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.cdr_indx = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.chn_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.chn_len = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.sin_pin = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.sout_pin = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.mstr_cnt = read_uint8(buf, &mut pos));
        let m = self.mstr_cnt as usize;
        let mut v = Vec::with_capacity(m);
        for _ in 0..m {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.m_clks = v;
        field_or_missing!(buf, &mut pos, self.slav_cnt = read_uint8(buf, &mut pos));
        let s = self.slav_cnt as usize;
        let mut v = Vec::with_capacity(s);
        for _ in 0..s {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.s_clks = v;
        field_or_missing!(buf, &mut pos, self.inv_val = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.lst_cnt = read_u2(buf, &mut pos, order));
        let k = self.lst_cnt as usize;
        let mut v = Vec::with_capacity(k);
        for _ in 0..k {
            if pos >= buf.len() {
                break;
            }
            v.push(read_sn(buf, &mut pos, order));
        }
        self.cell_lst = v;
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_b1(&mut out, self.cont_flg);
        write_u2(&mut out, self.cdr_indx, order);
        write_cn(&mut out, &self.chn_nam);
        write_u4(&mut out, self.chn_len, order);
        write_u2(&mut out, self.sin_pin, order);
        write_u2(&mut out, self.sout_pin, order);
        write_uint8(&mut out, self.m_clks.len() as u8);
        for v in &self.m_clks {
            write_u2(&mut out, *v, order);
        }
        write_uint8(&mut out, self.s_clks.len() as u8);
        for v in &self.s_clks {
            write_u2(&mut out, *v, order);
        }
        write_uint8(&mut out, self.inv_val);
        write_u2(&mut out, self.cell_lst.len() as u16, order);
        for v in &self.cell_lst {
            write_sn(&mut out, v, order);
        }
        out
    }
}

impl WIR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_grp = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.start_t = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.wafer_id = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_grp);
        write_u4(&mut out, self.start_t, order);
        write_cn(&mut out, &self.wafer_id);
        out
    }
}

impl WRR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_grp = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.finish_t = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.part_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.rtst_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.abrt_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.good_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.func_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.wafer_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.fabwf_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.frame_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.mask_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.usr_desc = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.exc_desc = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_grp);
        write_u4(&mut out, self.finish_t, order);
        write_u4(&mut out, self.part_cnt, order);
        write_u4(&mut out, self.rtst_cnt, order);
        write_u4(&mut out, self.abrt_cnt, order);
        write_u4(&mut out, self.good_cnt, order);
        write_u4(&mut out, self.func_cnt, order);
        write_cn(&mut out, &self.wafer_id);
        write_cn(&mut out, &self.fabwf_id);
        write_cn(&mut out, &self.frame_id);
        write_cn(&mut out, &self.mask_id);
        write_cn(&mut out, &self.usr_desc);
        write_cn(&mut out, &self.exc_desc);
        out
    }
}

impl WCR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.wafr_siz = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.die_ht = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.die_wid = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.wf_units = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.wf_flat = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.center_x = read_i2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.center_y = read_i2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.pos_x = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.pos_y = read_c1(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_r4(&mut out, self.wafr_siz, order);
        write_r4(&mut out, self.die_ht, order);
        write_r4(&mut out, self.die_wid, order);
        write_uint8(&mut out, self.wf_units);
        write_c1(&mut out, self.wf_flat);
        write_i2(&mut out, self.center_x, order);
        write_i2(&mut out, self.center_y, order);
        write_c1(&mut out, self.pos_x);
        write_c1(&mut out, self.pos_y);
        out
    }
}

impl PIR {
    pub fn read_from_bytes(&mut self, buf: &[u8], _order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, _order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        out
    }
}

impl PRR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.part_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.num_test = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.hard_bin = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.soft_bin = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.x_coord = read_i2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.y_coord = read_i2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.test_t = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.part_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.part_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.part_fix = read_bn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        write_b1(&mut out, self.part_flg);
        write_u2(&mut out, self.num_test, order);
        write_u2(&mut out, self.hard_bin, order);
        write_u2(&mut out, self.soft_bin, order);
        write_i2(&mut out, self.x_coord, order);
        write_i2(&mut out, self.y_coord, order);
        write_u4(&mut out, self.test_t, order);
        write_cn(&mut out, &self.part_id);
        write_cn(&mut out, &self.part_txt);
        write_bn(&mut out, &self.part_fix);
        out
    }
}

impl TSR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_typ = read_c1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_num = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.exec_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.fail_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.alrm_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.test_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.seq_name = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_lbl = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.opt_flag = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_tim = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.test_min = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.test_max = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.tst_sums = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.tst_sqrs = read_r4(buf, &mut pos, order));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        write_c1(&mut out, self.test_typ);
        write_u4(&mut out, self.test_num, order);
        write_u4(&mut out, self.exec_cnt, order);
        write_u4(&mut out, self.fail_cnt, order);
        write_u4(&mut out, self.alrm_cnt, order);
        write_cn(&mut out, &self.test_nam);
        write_cn(&mut out, &self.seq_name);
        write_cn(&mut out, &self.test_lbl);
        let mut opt_flag = self.opt_flag;
        if self.test_min == -1e300 {
            set_bit(&mut opt_flag, 2);
        }
        if self.test_max == -1e300 {
            set_bit(&mut opt_flag, 3);
        }
        if self.tst_sums == -1e300 {
            set_bit(&mut opt_flag, 4);
        }
        if self.tst_sqrs == -1e300 {
            set_bit(&mut opt_flag, 5);
        }
        write_b1(&mut out, opt_flag);
        write_r4(&mut out, self.test_tim, order);
        write_r4(&mut out, if bit_set(opt_flag, 2) { -1e300 } else { self.test_min }, order);
        write_r4(&mut out, if bit_set(opt_flag, 3) { -1e300 } else { self.test_max }, order);
        write_r4(&mut out, if bit_set(opt_flag, 4) { -1e300 } else { self.tst_sums }, order);
        write_r4(&mut out, if bit_set(opt_flag, 5) { -1e300 } else { self.tst_sqrs }, order);
        out
    }
}

impl PTR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.test_num = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.parm_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.result = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.test_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.alarm_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.opt_flag = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.res_scal = read_uint8(buf, &mut pos) as i8);
        field_or_missing!(buf, &mut pos, self.llm_scal = read_uint8(buf, &mut pos) as i8);
        field_or_missing!(buf, &mut pos, self.hlm_scal = read_uint8(buf, &mut pos) as i8);
        field_or_missing!(buf, &mut pos, self.lo_limit = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.hi_limit = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.units = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.c_resfmt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.c_llmfmt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.c_hlmfmt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.lo_spec = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.hi_spec = read_r4(buf, &mut pos, order));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u4(&mut out, self.test_num, order);
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        write_b1(&mut out, self.test_flg);
        write_b1(&mut out, self.parm_flg);
        write_r4(&mut out, self.result, order);
        write_cn(&mut out, &self.test_txt);
        write_cn(&mut out, &self.alarm_id);
        // OPT_FLAG bit layout resolved for this implementation (see
        // DESIGN.md): bit0 RES_SCAL invalid, bit3 LLM_SCAL invalid,
        // bit4 HLM_SCAL invalid, bit5 LO/HI_SPEC invalid, bit6 LO_LIMIT
        // invalid, bit7 HI_LIMIT invalid.
        let mut opt_flag = self.opt_flag;
        if self.lo_limit == -1e300 {
            set_bit(&mut opt_flag, 6);
        }
        if self.hi_limit == -1e300 {
            set_bit(&mut opt_flag, 7);
        }
        if self.lo_spec == -1e300 && self.hi_spec == -1e300 {
            set_bit(&mut opt_flag, 5);
        }
        write_b1(&mut out, opt_flag);
        write_uint8(&mut out, self.res_scal as u8);
        write_uint8(&mut out, self.llm_scal as u8);
        write_uint8(&mut out, self.hlm_scal as u8);
        write_r4(&mut out, if bit_set(opt_flag, 6) { -1e300 } else { self.lo_limit }, order);
        write_r4(&mut out, if bit_set(opt_flag, 7) { -1e300 } else { self.hi_limit }, order);
        write_cn(&mut out, &self.units);
        write_cn(&mut out, &self.c_resfmt);
        write_cn(&mut out, &self.c_llmfmt);
        write_cn(&mut out, &self.c_hlmfmt);
        write_r4(&mut out, if bit_set(opt_flag, 5) { -1e300 } else { self.lo_spec }, order);
        write_r4(&mut out, if bit_set(opt_flag, 5) { -1e300 } else { self.hi_spec }, order);
        out
    }
}

impl MPR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.test_num = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.parm_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.rtn_icnt = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.rslt_cnt = read_u2(buf, &mut pos, order));
        self.rtn_stat = read_nibble_array(buf, &mut pos, self.rtn_icnt as usize);
        let n = self.rslt_cnt as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_r4(buf, &mut pos, order));
        }
        self.rtn_rslt = v;
        field_or_missing!(buf, &mut pos, self.test_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.alarm_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.opt_flag = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.res_scal = read_uint8(buf, &mut pos) as i8);
        field_or_missing!(buf, &mut pos, self.llm_scal = read_uint8(buf, &mut pos) as i8);
        field_or_missing!(buf, &mut pos, self.hlm_scal = read_uint8(buf, &mut pos) as i8);
        field_or_missing!(buf, &mut pos, self.lo_limit = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.hi_limit = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.start_in = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.incr_in = read_r4(buf, &mut pos, order));
        let m = self.rtn_icnt as usize;
        let mut v = Vec::with_capacity(m);
        for _ in 0..m {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.rtn_indx = v;
        field_or_missing!(buf, &mut pos, self.units = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.units_in = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.c_resfmt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.c_llmfmt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.c_hlmfmt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.lo_spec = read_r4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.hi_spec = read_r4(buf, &mut pos, order));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u4(&mut out, self.test_num, order);
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        write_b1(&mut out, self.test_flg);
        write_b1(&mut out, self.parm_flg);
        write_u2(&mut out, self.rtn_stat.len() as u16, order);
        write_u2(&mut out, self.rtn_rslt.len() as u16, order);
        write_nibble_array(&mut out, &self.rtn_stat);
        for v in &self.rtn_rslt {
            write_r4(&mut out, *v, order);
        }
        write_cn(&mut out, &self.test_txt);
        write_cn(&mut out, &self.alarm_id);
        let mut opt_flag = self.opt_flag;
        if self.lo_limit == -1e300 {
            set_bit(&mut opt_flag, 6);
        }
        if self.hi_limit == -1e300 {
            set_bit(&mut opt_flag, 7);
        }
        if self.lo_spec == -1e300 && self.hi_spec == -1e300 {
            set_bit(&mut opt_flag, 5);
        }
        write_b1(&mut out, opt_flag);
        write_uint8(&mut out, self.res_scal as u8);
        write_uint8(&mut out, self.llm_scal as u8);
        write_uint8(&mut out, self.hlm_scal as u8);
        write_r4(&mut out, if bit_set(opt_flag, 6) { -1e300 } else { self.lo_limit }, order);
        write_r4(&mut out, if bit_set(opt_flag, 7) { -1e300 } else { self.hi_limit }, order);
        write_r4(&mut out, self.start_in, order);
        write_r4(&mut out, self.incr_in, order);
        for v in &self.rtn_indx {
            write_u2(&mut out, *v, order);
        }
        write_cn(&mut out, &self.units);
        write_cn(&mut out, &self.units_in);
        write_cn(&mut out, &self.c_resfmt);
        write_cn(&mut out, &self.c_llmfmt);
        write_cn(&mut out, &self.c_hlmfmt);
        write_r4(&mut out, if bit_set(opt_flag, 5) { -1e300 } else { self.lo_spec }, order);
        write_r4(&mut out, if bit_set(opt_flag, 5) { -1e300 } else { self.hi_spec }, order);
        out
    }
}

impl FTR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.test_num = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_flg = read_b1(buf, &mut pos));
        // OPT_FLAG bits 6-7 are padding/reserved per the resolved Open
        // Question; never decoded into a field.
        field_or_missing!(buf, &mut pos, self.opt_flag = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.cycl_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.rel_vadr = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.rept_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.num_fail = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.xfail_ad = read_i4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.yfail_ad = read_i4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.vect_off = read_i2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.rtn_icnt = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.pgm_icnt = read_u2(buf, &mut pos, order));
        let j = self.rtn_icnt as usize;
        let mut v = Vec::with_capacity(j);
        for _ in 0..j {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.rtn_indx = v;
        self.rtn_stat = read_nibble_array(buf, &mut pos, j);
        let k = self.pgm_icnt as usize;
        let mut v = Vec::with_capacity(k);
        for _ in 0..k {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.pgm_indx = v;
        self.pgm_stat = read_nibble_array(buf, &mut pos, k);
        field_or_missing!(buf, &mut pos, self.fail_pin = read_dn(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.vect_nam = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.time_set = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.op_code = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.alarm_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.prog_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.rslt_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.patg_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.spin_map = read_dn(buf, &mut pos, order));
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_u4(&mut out, self.test_num, order);
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        write_b1(&mut out, self.test_flg);
        write_b1(&mut out, self.opt_flag);
        write_u4(&mut out, self.cycl_cnt, order);
        write_u4(&mut out, self.rel_vadr, order);
        write_u4(&mut out, self.rept_cnt, order);
        write_u4(&mut out, self.num_fail, order);
        write_i4(&mut out, self.xfail_ad, order);
        write_i4(&mut out, self.yfail_ad, order);
        write_i2(&mut out, self.vect_off, order);
        write_u2(&mut out, self.rtn_indx.len() as u16, order);
        write_u2(&mut out, self.pgm_indx.len() as u16, order);
        for v in &self.rtn_indx {
            write_u2(&mut out, *v, order);
        }
        write_nibble_array(&mut out, &self.rtn_stat);
        for v in &self.pgm_indx {
            write_u2(&mut out, *v, order);
        }
        write_nibble_array(&mut out, &self.pgm_stat);
        write_dn(&mut out, &self.fail_pin, order);
        write_cn(&mut out, &self.vect_nam);
        write_cn(&mut out, &self.time_set);
        write_cn(&mut out, &self.op_code);
        write_cn(&mut out, &self.test_txt);
        write_cn(&mut out, &self.alarm_id);
        write_cn(&mut out, &self.prog_txt);
        write_cn(&mut out, &self.rslt_txt);
        write_uint8(&mut out, self.patg_num);
        write_dn(&mut out, &self.spin_map, order);
        out
    }
}

impl STR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.cont_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_num = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.head_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.site_num = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.psr_ref = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.test_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.log_typ = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.test_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.alarm_id = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.prog_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.rslt_txt = read_cn(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.z_val = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.fmu_flg = read_b1(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.mask_map = read_dn(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.fal_map = read_dn(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.cyc_cnt_t = read_u8(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.totf_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.totl_cnt = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.cyc_base = read_u8(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.bit_base = read_u4(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.cond_cnt = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.lim_cnt = read_u2(buf, &mut pos, order));
        field_or_missing!(buf, &mut pos, self.cyc_size = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.pmr_size = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.chn_size = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.pat_size = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.bit_size = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.u1_size = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.u2_size = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.u3_size = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.utx_size = read_uint8(buf, &mut pos));
        field_or_missing!(buf, &mut pos, self.cap_bgn = read_u2(buf, &mut pos, order));
        let g = self.lim_cnt as usize;
        let mut v = Vec::with_capacity(g);
        for _ in 0..g {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u2(buf, &mut pos, order));
        }
        self.lim_indx = v;
        let mut v = Vec::with_capacity(g);
        for _ in 0..g {
            if pos >= buf.len() {
                break;
            }
            v.push(read_u4(buf, &mut pos, order));
        }
        self.lim_spec = v;
        let j = self.cond_cnt as usize;
        let mut v = Vec::with_capacity(j);
        for _ in 0..j {
            if pos >= buf.len() {
                break;
            }
            v.push(read_cn(buf, &mut pos));
        }
        self.cond_lst = v;

        let mut read_uf_array = |pos: &mut usize, size_field: U1, count: usize| -> Vec<u64> {
            let w = uf_width(size_field);
            let mut v = Vec::with_capacity(count);
            for _ in 0..count {
                if *pos >= buf.len() {
                    break;
                }
                v.push(read_uf(buf, pos, order, w));
            }
            v
        };

        field_or_missing!(buf, &mut pos, self.cyc_cnt = read_u2(buf, &mut pos, order));
        self.cyc_ofst = read_uf_array(&mut pos, self.cyc_size, self.cyc_cnt as usize);
        field_or_missing!(buf, &mut pos, self.pmr_cnt = read_u2(buf, &mut pos, order));
        self.pmr_indx = read_uf_array(&mut pos, self.pmr_size, self.pmr_cnt as usize);
        field_or_missing!(buf, &mut pos, self.chn_cnt = read_u2(buf, &mut pos, order));
        self.chn_num = read_uf_array(&mut pos, self.chn_size, self.chn_cnt as usize);
        field_or_missing!(buf, &mut pos, self.exp_cnt = read_u2(buf, &mut pos, order));
        let n = self.exp_cnt as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_uint8(buf, &mut pos));
        }
        self.exp_data = v;
        field_or_missing!(buf, &mut pos, self.cap_cnt = read_u2(buf, &mut pos, order));
        let n = self.cap_cnt as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_uint8(buf, &mut pos));
        }
        self.cap_data = v;
        field_or_missing!(buf, &mut pos, self.new_cnt = read_u2(buf, &mut pos, order));
        let n = self.new_cnt as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_uint8(buf, &mut pos));
        }
        self.new_data = v;
        field_or_missing!(buf, &mut pos, self.pat_cnt = read_u2(buf, &mut pos, order));
        self.pat_num = read_uf_array(&mut pos, self.pat_size, self.pat_cnt as usize);
        field_or_missing!(buf, &mut pos, self.bpos_cnt = read_u2(buf, &mut pos, order));
        self.bit_pos = read_uf_array(&mut pos, self.bit_size, self.bpos_cnt as usize);
        field_or_missing!(buf, &mut pos, self.usr1_cnt = read_u2(buf, &mut pos, order));
        self.usr1 = read_uf_array(&mut pos, self.u1_size, self.usr1_cnt as usize);
        field_or_missing!(buf, &mut pos, self.usr2_cnt = read_u2(buf, &mut pos, order));
        self.usr2 = read_uf_array(&mut pos, self.u2_size, self.usr2_cnt as usize);
        field_or_missing!(buf, &mut pos, self.usr3_cnt = read_u2(buf, &mut pos, order));
        self.usr3 = read_uf_array(&mut pos, self.u3_size, self.usr3_cnt as usize);
        field_or_missing!(buf, &mut pos, self.txt_cnt = read_u2(buf, &mut pos, order));
        let n = self.txt_cnt as usize;
        let w = self.utx_size as usize;
        let mut v = Vec::with_capacity(n);
        for _ in 0..n {
            if pos >= buf.len() {
                break;
            }
            v.push(read_cf(buf, &mut pos, w));
        }
        self.user_txt = v;
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_b1(&mut out, self.cont_flg);
        write_u4(&mut out, self.test_num, order);
        write_uint8(&mut out, self.head_num);
        write_uint8(&mut out, self.site_num);
        write_u2(&mut out, self.psr_ref, order);
        write_b1(&mut out, self.test_flg);
        write_cn(&mut out, &self.log_typ);
        write_cn(&mut out, &self.test_txt);
        write_cn(&mut out, &self.alarm_id);
        write_cn(&mut out, &self.prog_txt);
        write_cn(&mut out, &self.rslt_txt);
        write_uint8(&mut out, self.z_val);
        write_b1(&mut out, self.fmu_flg);
        write_dn(&mut out, &self.mask_map, order);
        write_dn(&mut out, &self.fal_map, order);
        write_u8(&mut out, self.cyc_cnt_t, order);
        write_u4(&mut out, self.totf_cnt, order);
        write_u4(&mut out, self.totl_cnt, order);
        write_u8(&mut out, self.cyc_base, order);
        write_u4(&mut out, self.bit_base, order);
        write_u2(&mut out, self.cond_lst.len() as u16, order);
        write_u2(&mut out, self.lim_indx.len() as u16, order);
        write_uint8(&mut out, self.cyc_size);
        write_uint8(&mut out, self.pmr_size);
        write_uint8(&mut out, self.chn_size);
        write_uint8(&mut out, self.pat_size);
        write_uint8(&mut out, self.bit_size);
        write_uint8(&mut out, self.u1_size);
        write_uint8(&mut out, self.u2_size);
        write_uint8(&mut out, self.u3_size);
        write_uint8(&mut out, self.utx_size);
        write_u2(&mut out, self.cap_bgn, order);
        for v in &self.lim_indx {
            write_u2(&mut out, *v, order);
        }
        for v in &self.lim_spec {
            write_u4(&mut out, *v, order);
        }
        for s in &self.cond_lst {
            write_cn(&mut out, s);
        }

        let mut write_uf_array = |out: &mut Vec<u8>, size_field: U1, data: &[u64]| {
            let w = uf_width(size_field);
            for v in data {
                write_uf(out, *v, order, w);
            }
        };

        write_u2(&mut out, self.cyc_ofst.len() as u16, order);
        write_uf_array(&mut out, self.cyc_size, &self.cyc_ofst);
        write_u2(&mut out, self.pmr_indx.len() as u16, order);
        write_uf_array(&mut out, self.pmr_size, &self.pmr_indx);
        write_u2(&mut out, self.chn_num.len() as u16, order);
        write_uf_array(&mut out, self.chn_size, &self.chn_num);
        write_u2(&mut out, self.exp_data.len() as u16, order);
        for v in &self.exp_data {
            write_uint8(&mut out, *v);
        }
        write_u2(&mut out, self.cap_data.len() as u16, order);
        for v in &self.cap_data {
            write_uint8(&mut out, *v);
        }
        write_u2(&mut out, self.new_data.len() as u16, order);
        for v in &self.new_data {
            write_uint8(&mut out, *v);
        }
        write_u2(&mut out, self.pat_num.len() as u16, order);
        write_uf_array(&mut out, self.pat_size, &self.pat_num);
        write_u2(&mut out, self.bit_pos.len() as u16, order);
        write_uf_array(&mut out, self.bit_size, &self.bit_pos);
        write_u2(&mut out, self.usr1.len() as u16, order);
        write_uf_array(&mut out, self.u1_size, &self.usr1);
        write_u2(&mut out, self.usr2.len() as u16, order);
        write_uf_array(&mut out, self.u2_size, &self.usr2);
        write_u2(&mut out, self.usr3.len() as u16, order);
        write_uf_array(&mut out, self.u3_size, &self.usr3);
        write_u2(&mut out, self.user_txt.len() as u16, order);
        for s in &self.user_txt {
            write_cf(&mut out, s, self.utx_size as usize);
        }
        out
    }
}

impl BPS {
    pub fn read_from_bytes(&mut self, buf: &[u8], _order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.seq_name = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, _order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_cn(&mut out, &self.seq_name);
        out
    }
}

impl EPS {
    pub fn read_from_bytes(&mut self, _buf: &[u8], _order: &ByteOrder) {}

    pub fn write_to_bytes(&self, _order: &ByteOrder) -> Vec<u8> {
        vec![]
    }
}

impl GDR {
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.fld_cnt = read_u2(buf, &mut pos, order));
        let mut data = Vec::with_capacity(self.fld_cnt as usize);
        // FLD_CNT counts only the non-pad slots; a tag-0 (or malformed)
        // pad byte is consumed and kept in gen_data for round-trip, but
        // does not draw down the field budget.
        let mut remaining = self.fld_cnt;
        while remaining > 0 {
            if pos >= buf.len() {
                break;
            }
            let tag = read_uint8(buf, &mut pos);
            let v = match tag {
                // the tag byte itself is the pad byte; no separate value follows
                0 => V1::B0,
                1 => V1::U1(read_uint8(buf, &mut pos)),
                2 => V1::U2(read_u2(buf, &mut pos, order)),
                3 => V1::U4(read_u4(buf, &mut pos, order)),
                4 => V1::I1(read_uint8(buf, &mut pos) as i8),
                5 => V1::I2(read_i2(buf, &mut pos, order)),
                6 => V1::I4(read_i4(buf, &mut pos, order)),
                7 => V1::R4(read_r4(buf, &mut pos, order)),
                8 => V1::R8(read_r8(buf, &mut pos, order)),
                10 => V1::Cn(read_cn(buf, &mut pos)),
                11 => V1::Bn(read_bn(buf, &mut pos)),
                12 => V1::Dn(read_dn(buf, &mut pos, order)),
                13 => V1::N1(read_uint8(buf, &mut pos)),
                // malformed tag: treat as a padding byte and continue
                _ => V1::B0,
            };
            if v != V1::B0 {
                remaining -= 1;
            }
            data.push(v);
        }
        self.gen_data = data;
    }

    pub fn write_to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        let fld_cnt = self.gen_data.iter().filter(|v| **v != V1::B0).count();
        write_u2(&mut out, fld_cnt as u16, order);
        for v in &self.gen_data {
            match v {
                V1::B0 => {
                    write_uint8(&mut out, 0);
                }
                V1::U1(x) => {
                    write_uint8(&mut out, 1);
                    write_uint8(&mut out, *x);
                }
                V1::U2(x) => {
                    write_uint8(&mut out, 2);
                    write_u2(&mut out, *x, order);
                }
                V1::U4(x) => {
                    write_uint8(&mut out, 3);
                    write_u4(&mut out, *x, order);
                }
                V1::I1(x) => {
                    write_uint8(&mut out, 4);
                    write_uint8(&mut out, *x as u8);
                }
                V1::I2(x) => {
                    write_uint8(&mut out, 5);
                    write_i2(&mut out, *x, order);
                }
                V1::I4(x) => {
                    write_uint8(&mut out, 6);
                    write_i4(&mut out, *x, order);
                }
                V1::R4(x) => {
                    write_uint8(&mut out, 7);
                    write_r4(&mut out, *x, order);
                }
                V1::R8(x) => {
                    write_uint8(&mut out, 8);
                    write_r8(&mut out, *x, order);
                }
                V1::Cn(x) => {
                    write_uint8(&mut out, 10);
                    write_cn(&mut out, x);
                }
                V1::Bn(x) => {
                    write_uint8(&mut out, 11);
                    write_bn(&mut out, x);
                }
                V1::Dn(x) => {
                    write_uint8(&mut out, 12);
                    write_dn(&mut out, x, order);
                }
                V1::N1(x) => {
                    write_uint8(&mut out, 13);
                    write_uint8(&mut out, *x);
                }
            }
        }
        out
    }
}

impl DTR {
    pub fn read_from_bytes(&mut self, buf: &[u8], _order: &ByteOrder) {
        let mut pos = 0usize;
        field_or_missing!(buf, &mut pos, self.text_dat = read_cn(buf, &mut pos));
    }

    pub fn write_to_bytes(&self, _order: &ByteOrder) -> Vec<u8> {
        let mut out = vec![];
        write_cn(&mut out, &self.text_dat);
        out
    }
}

// ---------------------------------------------------------------------
// Sum type
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum StdfRecord {
    FAR(FAR),
    ATR(ATR),
    VUR(VUR),
    MIR(MIR),
    MRR(MRR),
    PCR(PCR),
    HBR(HBR),
    SBR(SBR),
    PMR(PMR),
    PGR(PGR),
    PLR(PLR),
    RDR(RDR),
    SDR(SDR),
    PSR(PSR),
    NMR(NMR),
    CNR(CNR),
    SSR(SSR),
    CDR(CDR),
    WIR(WIR),
    WRR(WRR),
    WCR(WCR),
    PIR(PIR),
    PRR(PRR),
    TSR(TSR),
    PTR(PTR),
    MPR(MPR),
    FTR(FTR),
    STR(STR),
    BPS(BPS),
    EPS(EPS),
    GDR(GDR),
    DTR(DTR),
    InvalidRec(InvalidRec),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            StdfRecord::FAR($inner) => $body,
            StdfRecord::ATR($inner) => $body,
            StdfRecord::VUR($inner) => $body,
            StdfRecord::MIR($inner) => $body,
            StdfRecord::MRR($inner) => $body,
            StdfRecord::PCR($inner) => $body,
            StdfRecord::HBR($inner) => $body,
            StdfRecord::SBR($inner) => $body,
            StdfRecord::PMR($inner) => $body,
            StdfRecord::PGR($inner) => $body,
            StdfRecord::PLR($inner) => $body,
            StdfRecord::RDR($inner) => $body,
            StdfRecord::SDR($inner) => $body,
            StdfRecord::PSR($inner) => $body,
            StdfRecord::NMR($inner) => $body,
            StdfRecord::CNR($inner) => $body,
            StdfRecord::SSR($inner) => $body,
            StdfRecord::CDR($inner) => $body,
            StdfRecord::WIR($inner) => $body,
            StdfRecord::WRR($inner) => $body,
            StdfRecord::WCR($inner) => $body,
            StdfRecord::PIR($inner) => $body,
            StdfRecord::PRR($inner) => $body,
            StdfRecord::TSR($inner) => $body,
            StdfRecord::PTR($inner) => $body,
            StdfRecord::MPR($inner) => $body,
            StdfRecord::FTR($inner) => $body,
            StdfRecord::STR($inner) => $body,
            StdfRecord::BPS($inner) => $body,
            StdfRecord::EPS($inner) => $body,
            StdfRecord::GDR($inner) => $body,
            StdfRecord::DTR($inner) => $body,
            StdfRecord::InvalidRec($inner) => $body,
        }
    };
}

impl StdfRecord {
    pub fn new(rec_type: u64) -> Self {
        match rec_type {
            REC_FAR => StdfRecord::FAR(FAR::default()),
            REC_ATR => StdfRecord::ATR(ATR::default()),
            REC_VUR => StdfRecord::VUR(VUR::default()),
            REC_MIR => StdfRecord::MIR(MIR::default()),
            REC_MRR => StdfRecord::MRR(MRR::default()),
            REC_PCR => StdfRecord::PCR(PCR::default()),
            REC_HBR => StdfRecord::HBR(HBR::default()),
            REC_SBR => StdfRecord::SBR(SBR::default()),
            REC_PMR => StdfRecord::PMR(PMR::default()),
            REC_PGR => StdfRecord::PGR(PGR::default()),
            REC_PLR => StdfRecord::PLR(PLR::default()),
            REC_RDR => StdfRecord::RDR(RDR::default()),
            REC_SDR => StdfRecord::SDR(SDR::default()),
            REC_PSR => StdfRecord::PSR(PSR::default()),
            REC_NMR => StdfRecord::NMR(NMR::default()),
            REC_CNR => StdfRecord::CNR(CNR::default()),
            REC_SSR => StdfRecord::SSR(SSR::default()),
            REC_CDR => StdfRecord::CDR(CDR::default()),
            REC_WIR => StdfRecord::WIR(WIR::default()),
            REC_WRR => StdfRecord::WRR(WRR::default()),
            REC_WCR => StdfRecord::WCR(WCR::default()),
            REC_PIR => StdfRecord::PIR(PIR::default()),
            REC_PRR => StdfRecord::PRR(PRR::default()),
            REC_TSR => StdfRecord::TSR(TSR::default()),
            REC_PTR => StdfRecord::PTR(PTR::default()),
            REC_MPR => StdfRecord::MPR(MPR::default()),
            REC_FTR => StdfRecord::FTR(FTR::default()),
            REC_STR => StdfRecord::STR(STR::default()),
            REC_BPS => StdfRecord::BPS(BPS::default()),
            REC_EPS => StdfRecord::EPS(EPS::default()),
            REC_GDR => StdfRecord::GDR(GDR::default()),
            REC_DTR => StdfRecord::DTR(DTR::default()),
            _ => {
                let (typ, sub) = stdf_record_type::type_sub_from_code(rec_type);
                StdfRecord::InvalidRec(InvalidRec {
                    typ,
                    sub,
                    raw_data: vec![],
                })
            }
        }
    }

    /// Populate `self` from a record payload buffer. Mutating, matching
    /// the crate's `rec.read_from_bytes(&buf, &order)` call shape.
    pub fn read_from_bytes(&mut self, buf: &[u8], order: &ByteOrder) {
        if let StdfRecord::InvalidRec(inner) = self {
            inner.raw_data = buf.to_vec();
            return;
        }
        dispatch!(self, inner => inner.read_from_bytes(buf, order));
    }

    /// Consuming variant used by iterator and convenience call sites.
    pub fn from_bytes(mut self, buf: &[u8], order: &ByteOrder) -> Self {
        self.read_from_bytes(buf, order);
        self
    }

    /// Encode the record payload (without the 4-byte header).
    pub fn to_bytes(&self, order: &ByteOrder) -> Vec<u8> {
        if let StdfRecord::InvalidRec(inner) = self {
            return inner.raw_data.clone();
        }
        dispatch!(self, inner => inner.write_to_bytes(order))
    }

    /// Encode the full record, including its 4-byte header.
    pub fn to_bytes_with_header(&self, order: &ByteOrder) -> Vec<u8> {
        let payload = self.to_bytes(order);
        let (typ, sub) = stdf_record_type::type_sub_from_code(self.get_type());
        let (typ, sub) = if let StdfRecord::InvalidRec(inner) = self {
            (inner.typ, inner.sub)
        } else {
            (typ, sub)
        };
        let mut out = Vec::with_capacity(payload.len() + 4);
        write_u2(&mut out, payload.len() as u16, order);
        write_uint8(&mut out, typ);
        write_uint8(&mut out, sub);
        out.extend_from_slice(&payload);
        out
    }

    pub fn get_type(&self) -> u64 {
        match self {
            StdfRecord::FAR(_) => REC_FAR,
            StdfRecord::ATR(_) => REC_ATR,
            StdfRecord::VUR(_) => REC_VUR,
            StdfRecord::MIR(_) => REC_MIR,
            StdfRecord::MRR(_) => REC_MRR,
            StdfRecord::PCR(_) => REC_PCR,
            StdfRecord::HBR(_) => REC_HBR,
            StdfRecord::SBR(_) => REC_SBR,
            StdfRecord::PMR(_) => REC_PMR,
            StdfRecord::PGR(_) => REC_PGR,
            StdfRecord::PLR(_) => REC_PLR,
            StdfRecord::RDR(_) => REC_RDR,
            StdfRecord::SDR(_) => REC_SDR,
            StdfRecord::PSR(_) => REC_PSR,
            StdfRecord::NMR(_) => REC_NMR,
            StdfRecord::CNR(_) => REC_CNR,
            StdfRecord::SSR(_) => REC_SSR,
            StdfRecord::CDR(_) => REC_CDR,
            StdfRecord::WIR(_) => REC_WIR,
            StdfRecord::WRR(_) => REC_WRR,
            StdfRecord::WCR(_) => REC_WCR,
            StdfRecord::PIR(_) => REC_PIR,
            StdfRecord::PRR(_) => REC_PRR,
            StdfRecord::TSR(_) => REC_TSR,
            StdfRecord::PTR(_) => REC_PTR,
            StdfRecord::MPR(_) => REC_MPR,
            StdfRecord::FTR(_) => REC_FTR,
            StdfRecord::STR(_) => REC_STR,
            StdfRecord::BPS(_) => REC_BPS,
            StdfRecord::EPS(_) => REC_EPS,
            StdfRecord::GDR(_) => REC_GDR,
            StdfRecord::DTR(_) => REC_DTR,
            StdfRecord::InvalidRec(_) => REC_INVALID,
        }
    }

    pub fn is_type(&self, mask: u64) -> bool {
        self.get_type() & mask != 0
    }
}
