//
// stdf_file_tests.rs
//

use stdf_rs::{stdf_file::*, stdf_record_type::*, ByteOrder, StdfRecord};
use std::{
    env, fs,
    io::Write,
    path::PathBuf,
    sync::atomic::{AtomicU32, Ordering},
};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Write a tiny but structurally valid STDF stream to a fresh temp
/// file: `FAR`, `PIR`/`PRR` bracketing one part, `MRR`. Returns the
/// path; the caller is responsible for removing it.
fn write_demo_stream(order: ByteOrder) -> PathBuf {
    let mut path = env::temp_dir();
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    path.push(format!("stdf_rs_test_{}_{}.stdf", std::process::id(), n));

    let mut far = StdfRecord::new(REC_FAR);
    if let StdfRecord::FAR(ref mut inner) = far {
        inner.cpu_type = match order {
            ByteOrder::LittleEndian => 2,
            ByteOrder::BigEndian => 1,
        };
        inner.stdf_ver = 4;
    }

    let mut pir = StdfRecord::new(REC_PIR);
    if let StdfRecord::PIR(ref mut inner) = pir {
        inner.head_num = 1;
        inner.site_num = 1;
    }

    let mut prr = StdfRecord::new(REC_PRR);
    if let StdfRecord::PRR(ref mut inner) = prr {
        inner.head_num = 1;
        inner.site_num = 1;
        inner.part_flg = 0;
        inner.num_test = 10;
        inner.hard_bin = 1;
        inner.soft_bin = 1;
        inner.x_coord = 3;
        inner.y_coord = 4;
        inner.test_t = 123;
        inner.part_id = "P1".to_string();
    }

    let mut mrr = StdfRecord::new(REC_MRR);
    if let StdfRecord::MRR(ref mut inner) = mrr {
        inner.finish_t = 1_700_000_000;
        inner.disp_cod = ' ';
    }

    let mut bytes = vec![];
    for rec in [&far, &pir, &prr, &mrr] {
        bytes.extend(rec.to_bytes_with_header(&order));
    }

    let mut f = fs::File::create(&path).unwrap();
    f.write_all(&bytes).unwrap();
    path
}

#[test]
fn record_iter_reads_far_first_and_mrr_last_little_endian() {
    let path = write_demo_stream(ByteOrder::LittleEndian);
    let path_str = path.display().to_string();

    let mut reader = StdfReader::new(&path_str).expect("failed to open demo stream");
    let records: Vec<StdfRecord> = reader.get_record_iter().collect();
    fs::remove_file(&path).ok();

    assert_eq!(records.len(), 4);
    assert!(records[0].is_type(REC_FAR));
    assert!(records.last().unwrap().is_type(REC_MRR));

    match &records[2] {
        StdfRecord::PRR(prr) => {
            assert_eq!(prr.hard_bin, 1);
            assert_eq!(prr.x_coord, 3);
            assert_eq!(prr.part_id, "P1");
        }
        other => panic!("expected PRR, got {:?}", other),
    }
}

#[test]
fn record_iter_reads_far_first_and_mrr_last_big_endian() {
    let path = write_demo_stream(ByteOrder::BigEndian);
    let path_str = path.display().to_string();

    let mut reader = StdfReader::new(&path_str).expect("failed to open demo stream");
    let records: Vec<StdfRecord> = reader.get_record_iter().collect();
    fs::remove_file(&path).ok();

    assert_eq!(records.len(), 4);
    assert!(records[0].is_type(REC_FAR));
    assert!(records.last().unwrap().is_type(REC_MRR));
}

/// The raw-data iterator (lazy decode) must agree field-for-field with
/// the eager `RecordIter` over the same bytes.
#[test]
fn raw_iter_agrees_with_eager_iter() {
    let path = write_demo_stream(ByteOrder::LittleEndian);
    let path_str = path.display().to_string();

    let mut eager_reader = StdfReader::new(&path_str).unwrap();
    let eager: Vec<StdfRecord> = eager_reader.get_record_iter().collect();

    let mut raw_reader = StdfReader::new(&path_str).unwrap();
    let lazy: Vec<StdfRecord> = raw_reader
        .get_rawdata_iter()
        .map(|raw| raw.to_record())
        .collect();

    fs::remove_file(&path).ok();

    assert_eq!(eager, lazy);
}

/// Filtering by type code only yields the requested record kinds, in
/// stream order (spec 8, "Order").
#[test]
fn type_filter_selects_only_requested_kinds() {
    let path = write_demo_stream(ByteOrder::LittleEndian);
    let path_str = path.display().to_string();

    let mut reader = StdfReader::new(&path_str).unwrap();
    let filtered: Vec<StdfRecord> = reader
        .get_record_iter()
        .filter(|r| r.is_type(REC_PIR | REC_PRR))
        .collect();
    fs::remove_file(&path).ok();

    assert_eq!(filtered.len(), 2);
    assert!(filtered[0].is_type(REC_PIR));
    assert!(filtered[1].is_type(REC_PRR));
}

/// Re-encoding a decoded record reproduces the original bytes exactly
/// (spec 3 invariant 5 / spec 8 "Round-trip (binary)").
#[test]
fn encode_decode_round_trip_is_byte_identical() {
    let order = ByteOrder::LittleEndian;
    let mut prr = StdfRecord::new(REC_PRR);
    if let StdfRecord::PRR(ref mut inner) = prr {
        inner.head_num = 1;
        inner.site_num = 2;
        inner.part_flg = 0x08;
        inner.num_test = 42;
        inner.hard_bin = 7;
        inner.soft_bin = 7;
        inner.x_coord = -1;
        inner.y_coord = -2;
        inner.test_t = 9999;
        inner.part_id = "DUT0001".to_string();
        inner.part_txt = String::new();
        inner.part_fix = Box::new([]);
    }
    let original_bytes = prr.to_bytes(&order);

    let decoded = StdfRecord::new(REC_PRR).from_bytes(&original_bytes, &order);
    let re_encoded = decoded.to_bytes(&order);

    assert_eq!(original_bytes, re_encoded);
}

fn write_raw_bytes(bytes: &[u8]) -> PathBuf {
    let mut path = env::temp_dir();
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    path.push(format!("stdf_rs_test_raw_{}_{}.stdf", std::process::id(), n));
    let mut f = fs::File::create(&path).unwrap();
    f.write_all(bytes).unwrap();
    path
}

/// Spec 8 end-to-end scenario 1: a bare `FAR` is a complete, valid
/// stream; re-encoding reproduces the six original bytes; a subsequent
/// read hits end-of-file.
#[test]
fn minimal_far_only_stream() {
    let raw = [0x02, 0x00, 0x00, 0x0A, 0x02, 0x04];
    let path = write_raw_bytes(&raw);
    let path_str = path.display().to_string();

    let mut reader = StdfReader::new(&path_str).expect("failed to open minimal stream");
    let mut iter = reader.get_record_iter();
    let far = iter.next().expect("FAR record expected");
    assert!(iter.next().is_none(), "stream should end after FAR");
    fs::remove_file(&path).ok();

    match &far {
        StdfRecord::FAR(inner) => {
            assert_eq!(inner.cpu_type, 2);
            assert_eq!(inner.stdf_ver, 4);
        }
        other => panic!("expected FAR, got {:?}", other),
    }
    let reencoded = far.to_bytes_with_header(&ByteOrder::LittleEndian);
    assert_eq!(reencoded, raw);
}

/// Spec 8 end-to-end scenario 2: an unrecognized `(type, subtype)` is
/// skipped as an `InvalidRec` placeholder that carries its raw bytes
/// through, and the following record still decodes normally.
#[test]
fn unknown_record_is_skipped_and_stream_continues() {
    let mut raw = vec![0x02, 0x00, 0x00, 0x0A, 0x02, 0x04]; // FAR
    raw.extend_from_slice(&[0x03, 0x00, 99, 99, 0xAA, 0xBB, 0xCC]); // unknown (99,99)
    let mut mrr = StdfRecord::new(REC_MRR);
    if let StdfRecord::MRR(ref mut inner) = mrr {
        inner.finish_t = 42;
    }
    raw.extend(mrr.to_bytes_with_header(&ByteOrder::LittleEndian));

    let path = write_raw_bytes(&raw);
    let path_str = path.display().to_string();
    let mut reader = StdfReader::new(&path_str).expect("failed to open stream");
    let records: Vec<StdfRecord> = reader.get_record_iter().collect();
    fs::remove_file(&path).ok();

    assert_eq!(records.len(), 3);
    assert!(records[0].is_type(REC_FAR));
    match &records[1] {
        StdfRecord::InvalidRec(inner) => {
            assert_eq!((inner.typ, inner.sub), (99, 99));
            assert_eq!(&inner.raw_data[..], &[0xAA, 0xBB, 0xCC]);
        }
        other => panic!("expected InvalidRec, got {:?}", other),
    }
    assert!(records[2].is_type(REC_MRR));
}
