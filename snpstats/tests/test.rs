use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use snpstats::bins::{BandReport, LineReport, ReportOptions};
use snpstats::core::consts::{AUTOSOMES, NO_HW_HEADER, STANDARD_HEADER};
use snpstats::core::utils::get_dynamic_reader;
use snpstats::core::{FileNaming, SnpStatsReader};
use snpstats::remaf::{JoinStats, LookupStrategy, MafLookup, open_lookup, remaf_folder};

fn write_gz(path: &Path, contents: &str) {
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

fn snp_line(chromosome: &str, position: u64, info: f64) -> String {
    format!(
        "--- rs{position} {chromosome} {position} A G NA 1 1 10 90 0.1 0.9 -1 A G {info} 0.94 0.01 0 0 0 0 0 0 100\n"
    )
}

/// Gzipped tables for every autosome with variants at 100, 200 and 300,
/// plus a reference holding 100 and 300 of every chromosome.
#[fixture]
fn dataset() -> (tempfile::TempDir, FileNaming) {
    let tempdir = tempfile::tempdir().unwrap();
    let naming = FileNaming::new("", "-snp-stats.txt.gz");
    let tables = tempdir.path().join("tables");
    std::fs::create_dir_all(&tables).unwrap();

    let mut reference = String::new();
    for n in AUTOSOMES {
        let chromosome = format!("chr{n}");
        let mut table = format!("# qctool\n{STANDARD_HEADER}\n");
        for position in [100, 200, 300] {
            table.push_str(&snp_line(&chromosome, position, 0.9));
        }
        write_gz(&naming.path_in(&tables, n), &table);

        reference.push_str(&format!("{chromosome} 100 0.01 A G\n{chromosome} 300 0.25 C T\n"));
    }
    std::fs::write(tempdir.path().join("maf.txt"), reference).unwrap();

    (tempdir, naming)
}

#[rstest]
#[case(LookupStrategy::Cursor)]
#[case(LookupStrategy::Index)]
fn test_remaf_then_lineplot(dataset: (tempfile::TempDir, FileNaming), #[case] strategy: LookupStrategy) {
    let (tempdir, naming) = dataset;
    let tables = tempdir.path().join("tables");
    let remafed = tempdir.path().join("remaf");

    let mut lookup = open_lookup(strategy, &tempdir.path().join("maf.txt")).unwrap();
    let mut reader = SnpStatsReader::default();
    let summary = remaf_folder(&tables, &remafed, &naming, &mut reader, &mut lookup).unwrap();

    assert_eq!(summary.total, JoinStats { hits: 44, misses: 22 });

    // the output is gzipped too, since the names end in .gz
    let lines: Vec<String> = std::io::BufRead::lines(get_dynamic_reader(&naming.path_in(&remafed, 7)).unwrap())
        .collect::<std::io::Result<_>>()
        .unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], STANDARD_HEADER);

    let options = ReportOptions {
        naming: naming.clone(),
        ..Default::default()
    };
    let mut report = LineReport::new();
    report
        .add_folder::<dyn MafLookup>("remaf", &remafed, &options, None)
        .unwrap();

    let table = report.to_table();
    assert_eq!(table.get("0.01-0.015", "remaf"), None);
    assert_eq!(table.get("0.2-0.3", "remaf"), Some(0.9));
    assert_eq!(table.get("0.005-0.01", "remaf"), None);
}

#[rstest]
fn test_barplot_with_external_maf(dataset: (tempfile::TempDir, FileNaming)) {
    let (tempdir, naming) = dataset;
    let options = ReportOptions {
        naming,
        ..Default::default()
    };

    let mut lookup = open_lookup(LookupStrategy::Cursor, &tempdir.path().join("maf.txt")).unwrap();
    let mut report = BandReport::new(&[0.5]).unwrap();
    let used = report
        .add_folder(&tempdir.path().join("tables"), &options, Some(&mut lookup))
        .unwrap();

    // 0.01 sits on a bin edge, only the 0.25 MAFs are binned
    assert_eq!(used, 44);
    let table = report.to_table();
    assert_eq!(table.get("0.2-0.3", "0.5-1"), Some(22.0));
    assert_eq!(table.get("0.2-0.3", "0-0.5"), Some(0.0));
}

#[rstest]
fn test_each_table_keeps_its_declared_layout(dataset: (tempfile::TempDir, FileNaming)) {
    let (tempdir, naming) = dataset;
    let tables = tempdir.path().join("tables");

    // chr1 uses the layout without Hardy-Weinberg columns
    write_gz(
        &naming.path_in(&tables, 1),
        &format!(
            "{NO_HW_HEADER}\n--- rs1 chr1 100 A G NA 10 90 0.1 0.9 -1 A G 0.95 0.94 0.01 0 0 0 0 0 0 100\n"
        ),
    );

    let mut lookup = open_lookup(LookupStrategy::Cursor, &tempdir.path().join("maf.txt")).unwrap();
    let mut reader = SnpStatsReader::default();
    let remafed = tempdir.path().join("remaf");
    let summary = remaf_folder(&tables, &remafed, &naming, &mut reader, &mut lookup).unwrap();

    assert_eq!(summary.chromosomes[0].1, JoinStats { hits: 1, misses: 0 });
    assert_eq!(summary.chromosomes[1].1, JoinStats { hits: 2, misses: 1 });

    let read_lines = |n: u8| -> Vec<String> {
        std::io::BufRead::lines(get_dynamic_reader(&naming.path_in(&remafed, n)).unwrap())
            .collect::<std::io::Result<_>>()
            .unwrap()
    };

    let chr1 = read_lines(1);
    assert_eq!(chr1[0], NO_HW_HEADER);
    assert_eq!(chr1[1].split(' ').nth(11), Some("0.01"));

    // chr2 declares the standard header, so the MAF lands in column 13
    let chr2 = read_lines(2);
    assert_eq!(chr2[0], STANDARD_HEADER);
    let columns: Vec<&str> = chr2[1].split(' ').collect();
    assert_eq!(columns[11], "0.1");
    assert_eq!(columns[13], "0.01");

    // the line report reads the info score of both layouts
    let options = ReportOptions {
        naming: naming.clone(),
        ..Default::default()
    };
    let mut report = LineReport::new();
    let used = report
        .add_folder::<dyn MafLookup>("remaf", &remafed, &options, None)
        .unwrap();
    assert_eq!(used, 1 + 21 * 2);
}
