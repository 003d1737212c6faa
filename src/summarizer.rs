//
// summarizer.rs
//
// Minimal example `Sink` implementations (spec 4.7: "summarizer sinks
// are named only as example consumers", out of scope beyond that). Two
// are provided here to exercise the pipeline end to end: a bin
// summarizer accumulating hardware/software bin pass/fail counts from
// PRR/HBR/SBR, and a part summarizer accumulating per-site part
// counts from PRR/PCR. Neither attempts the full domain-specific
// aggregation (parametric limits, fail maps) that a real summarizer
// would add on top.
//

use crate::pipeline::Sink;
use crate::stdf_error::StdfError;
use crate::stdf_types::StdfRecord;
use std::collections::HashMap;

/// Part-pass state derived from `PART_FLG` per spec 8 scenario 5: bit 3
/// set means fail, bit 2 set means abort regardless of bit 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOutcome {
    Pass,
    Fail,
    Abort,
}

pub fn part_outcome(part_flg: u8) -> PartOutcome {
    if part_flg & 0x04 != 0 {
        PartOutcome::Abort
    } else if part_flg & 0x08 != 0 {
        PartOutcome::Fail
    } else {
        PartOutcome::Pass
    }
}

#[derive(Debug, Clone, Default)]
pub struct BinCount {
    pub part_count: u64,
    pub pass_count: u64,
    pub fail_count: u64,
}

/// Accumulates per-(site, bin) pass/fail counts from `PRR.HARD_BIN` and
/// `PRR.SOFT_BIN`, keyed the way `BinSummarizer.onPrr` keys them, and
/// keeps the `HBR`/`SBR` summary rows the stream itself reports.
#[derive(Debug, Default)]
pub struct BinSummarySink {
    pub hbin_parts: HashMap<(u8, u16), BinCount>,
    pub sbin_parts: HashMap<(u8, u16), BinCount>,
    pub hbr_rows: HashMap<(u8, u16), (u32, char)>,
    pub sbr_rows: HashMap<(u8, u16), (u32, char)>,
}

impl Sink for BinSummarySink {
    fn before_begin(&mut self) -> Result<(), StdfError> {
        self.hbin_parts.clear();
        self.sbin_parts.clear();
        self.hbr_rows.clear();
        self.sbr_rows.clear();
        Ok(())
    }

    fn before_send(&mut self, record: &StdfRecord) -> Result<(), StdfError> {
        match record {
            StdfRecord::PRR(prr) => {
                let outcome = part_outcome(prr.part_flg);
                let hbin_entry = self
                    .hbin_parts
                    .entry((prr.site_num, prr.hard_bin))
                    .or_default();
                hbin_entry.part_count += 1;
                match outcome {
                    PartOutcome::Pass => hbin_entry.pass_count += 1,
                    PartOutcome::Fail | PartOutcome::Abort => hbin_entry.fail_count += 1,
                }

                let sbin_entry = self
                    .sbin_parts
                    .entry((prr.site_num, prr.soft_bin))
                    .or_default();
                sbin_entry.part_count += 1;
                match outcome {
                    PartOutcome::Pass => sbin_entry.pass_count += 1,
                    PartOutcome::Fail | PartOutcome::Abort => sbin_entry.fail_count += 1,
                }
            }
            StdfRecord::HBR(hbr) => {
                self.hbr_rows
                    .insert((hbr.site_num, hbr.hbin_num), (hbr.hbin_cnt, hbr.hbin_pf));
            }
            StdfRecord::SBR(sbr) => {
                self.sbr_rows
                    .insert((sbr.site_num, sbr.sbin_num), (sbr.sbin_cnt, sbr.sbin_pf));
            }
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SiteCounts {
    pub part_count: u64,
    pub good_count: u64,
    pub abort_count: u64,
}

/// Accumulates per-site part counts from `PRR.PART_FLG` (spec 8
/// scenario 5) and keeps the per-site `PCR` rows the stream itself
/// reports, plus the head-255 overall `PCR` row.
#[derive(Debug, Default)]
pub struct PartSummarySink {
    pub site_synth: HashMap<u8, SiteCounts>,
    pub pcr_rows: HashMap<u8, (u32, u32, u32, u32, u32)>,
    pub overall_pcr: Option<(u32, u32, u32, u32, u32)>,
}

impl Sink for PartSummarySink {
    fn before_begin(&mut self) -> Result<(), StdfError> {
        self.site_synth.clear();
        self.pcr_rows.clear();
        self.overall_pcr = None;
        Ok(())
    }

    fn before_send(&mut self, record: &StdfRecord) -> Result<(), StdfError> {
        match record {
            StdfRecord::PRR(prr) => {
                let entry = self.site_synth.entry(prr.site_num).or_default();
                entry.part_count += 1;
                if prr.part_flg & 0x08 == 0 {
                    entry.good_count += 1;
                }
                if prr.part_flg & 0x04 == 0 {
                    entry.abort_count += 1;
                }
            }
            StdfRecord::PCR(pcr) => {
                let row = (
                    pcr.part_cnt,
                    pcr.rtst_cnt,
                    pcr.abrt_cnt,
                    pcr.good_cnt,
                    pcr.func_cnt,
                );
                if pcr.head_num == 255 {
                    self.overall_pcr = Some(row);
                } else {
                    self.pcr_rows.insert(pcr.site_num, row);
                }
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::DataSource;
    use crate::stdf_types::stdf_record_type::{REC_HBR, REC_PRR};

    fn make_prr(site_num: u8, hard_bin: u16, soft_bin: u16, part_flg: u8) -> StdfRecord {
        let mut rec = StdfRecord::new(REC_PRR);
        if let StdfRecord::PRR(ref mut inner) = rec {
            inner.site_num = site_num;
            inner.hard_bin = hard_bin;
            inner.soft_bin = soft_bin;
            inner.part_flg = part_flg;
        }
        rec
    }

    #[test]
    fn part_outcome_bit_precedence() {
        assert_eq!(part_outcome(0), PartOutcome::Pass);
        assert_eq!(part_outcome(0x08), PartOutcome::Fail);
        // abort (bit 2) wins regardless of the fail bit
        assert_eq!(part_outcome(0x08 | 0x04), PartOutcome::Abort);
        assert_eq!(part_outcome(0x04), PartOutcome::Abort);
    }

    #[test]
    fn bin_summary_counts_pass_and_fail() {
        let mut sink = BinSummarySink::default();
        sink.before_begin().unwrap();
        sink.before_send(&make_prr(1, 1, 100, 0)).unwrap();
        sink.before_send(&make_prr(1, 1, 100, 0x08)).unwrap();
        sink.before_send(&make_prr(1, 2, 200, 0)).unwrap();

        let bin1 = &sink.hbin_parts[&(1u8, 1u16)];
        assert_eq!(bin1.part_count, 2);
        assert_eq!(bin1.pass_count, 1);
        assert_eq!(bin1.fail_count, 1);

        let bin2 = &sink.hbin_parts[&(1u8, 2u16)];
        assert_eq!(bin2.part_count, 1);
        assert_eq!(bin2.pass_count, 1);
    }

    #[test]
    fn part_summary_good_and_abort_counts() {
        let mut sink = PartSummarySink::default();
        sink.before_begin().unwrap();
        sink.before_send(&make_prr(0, 1, 100, 0)).unwrap();
        sink.before_send(&make_prr(0, 1, 100, 0x08)).unwrap();
        sink.before_send(&make_prr(0, 1, 100, 0x04)).unwrap();

        let site = &sink.site_synth[&0u8];
        assert_eq!(site.part_count, 3);
        assert_eq!(site.good_count, 1);
        assert_eq!(site.abort_count, 2);
    }

    #[test]
    fn sinks_drive_through_a_data_source() {
        let mut source = DataSource::new();
        source.add_sink(Box::new(BinSummarySink::default()));
        source.begin().unwrap();
        source.send(&make_prr(1, 1, 100, 0)).unwrap();
        let mut hbr = StdfRecord::new(REC_HBR);
        if let StdfRecord::HBR(ref mut inner) = hbr {
            inner.site_num = 1;
            inner.hbin_num = 1;
            inner.hbin_cnt = 1;
            inner.hbin_pf = 'P';
        }
        source.send(&hbr).unwrap();
        source.complete().unwrap();
    }
}
