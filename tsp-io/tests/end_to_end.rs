//! Loading a full config-described instance and feeding it straight into an
//! algorithm and a report writer, the way `tsp-cli` does (§6).

use std::fs;
use std::io::Write;

use tsp_algo::bf;
use tsp_io::report::format_duration_micros;
use tsp_io::ReportWriter;

fn write(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn loaded_instance_runs_through_brute_force_to_scenario_a_optimum() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "instance.txt",
        "4\n-1 10 15 20\n10 -1 35 25\n15 35 -1 30\n20 25 30 -1\n",
    );
    let config_path = write(
        dir.path(),
        "config.ini",
        "[instance]\ninput_path = instance.txt\nsymmetric = true\nfull = true\n\
         [optimal]\npath = 0 1 3 2\ncost = 80\n",
    );

    let instance = tsp_io::load_instance(&config_path).unwrap();
    let solution = bf::run(&instance.matrix, &instance.graph_info).unwrap();

    assert_eq!(solution.cost, 80);
    assert_eq!(instance.optimal_cost(), Some(80));
}

#[test]
fn measurement_report_round_trips_through_a_real_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let mut writer = ReportWriter::create(&path, &["n", "run", "cost", "time_us"]).unwrap();
    writer
        .write_row(&["4".into(), "0".into(), "80".into(), format_duration_micros(std::time::Duration::from_millis(2))])
        .unwrap();
    drop(writer);

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "n;run;cost;time_us");
    assert_eq!(lines.next().unwrap(), "4;0;80;2000.00");
}
