use smaa_filter::areatex::export::{write_csource, write_tga};
use smaa_filter::areatex::ortho::area_ortho;
use smaa_filter::areatex::{AreaTables, AreaTexData, AREATEX_SIZE};
use std::fs;

#[test]
fn straight_pattern_block_is_entirely_zero() {
    let data = AreaTexData::build(false);
    // Pattern 0 occupies the 16x16 block at the origin.
    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(data.ortho[y * AREATEX_SIZE + x], [0.0, 0.0]);
        }
    }
}

#[test]
fn u_pattern_origin_matches_the_analytic_integral() {
    let data = AreaTexData::build(false);
    // Both-positive U pattern at distances (0, 0): block origin (48, 48).
    let expected = area_ortho(0b1010, 0, 0, 0.0);
    let got = data.ortho[48 * AREATEX_SIZE + 48];
    assert!((got[0] - expected.x).abs() < 1e-12);
    assert!((got[1] - expected.y).abs() < 1e-12);
    assert!(expected.x > 0.0 || expected.y > 0.0);
}

#[test]
fn table_generation_is_deterministic() {
    let a = AreaTexData::build(false);
    let b = AreaTexData::build(false);
    assert_eq!(a.ortho, b.ortho);
    assert_eq!(a.diag, b.diag);

    let mut out_a = Vec::new();
    let mut out_b = Vec::new();
    write_csource(&mut out_a, &a, true).unwrap();
    write_csource(&mut out_b, &b, true).unwrap();
    assert_eq!(out_a, out_b);
}

#[test]
fn subsampled_tables_stack_slices() {
    let data = AreaTexData::build(true);
    assert_eq!(data.ortho_slices, 7);
    assert_eq!(data.diag_slices, 5);
    assert_eq!(data.ortho.len(), AREATEX_SIZE * AREATEX_SIZE * 7);
    assert_eq!(data.diag.len(), AREATEX_SIZE * AREATEX_SIZE * 5);

    // Slice 0 is the centered offset; a shifted slice must differ.
    let first = &data.ortho[..AREATEX_SIZE * AREATEX_SIZE];
    let second = &data.ortho[AREATEX_SIZE * AREATEX_SIZE..2 * AREATEX_SIZE * AREATEX_SIZE];
    assert_ne!(first, second);
}

#[test]
fn runtime_tables_expose_slice_counts() {
    let single = AreaTables::build(false);
    assert_eq!(single.ortho_slices(), 1);
    assert_eq!(single.diag_slices(), 1);
}

#[test]
fn subsample_slices_shift_the_lookup() {
    let tables = AreaTables::build(true);
    assert_eq!(tables.ortho_slices(), 7);
    assert_eq!(tables.diag_slices(), 5);

    // Index 1 selects the -0.25 offset slice; a Z pattern changes shape
    // under that offset.
    let centered = tables.ortho_area(9, 4, 1, 2, 0);
    let offset = tables.ortho_area(9, 4, 1, 2, 1);
    assert_ne!(centered, offset);
}

#[test]
fn tga_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("areatex.tga");

    let data = AreaTexData::build(false);
    let mut bytes = Vec::new();
    write_tga(&mut bytes, &data).unwrap();
    fs::write(&path, &bytes).unwrap();

    let read_back = fs::read(&path).unwrap();
    assert_eq!(read_back, bytes);
    assert_eq!(read_back.len(), 18 + 2 * AREATEX_SIZE * AREATEX_SIZE * 4);
}
