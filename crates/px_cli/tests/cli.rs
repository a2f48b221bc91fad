//! End-to-end checks of the `px` binary: stdout, exit codes, config loading.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn px() -> Command {
    let mut cmd = Command::cargo_bin("px").unwrap();
    cmd.env_remove("PX_LOG");
    cmd
}

#[test]
fn ratio_solves_each_term() {
    px().args(["ratio", "--total", "200", "--percentage", "25"])
        .assert()
        .success()
        .stdout("variable=50\n");
    px().args(["ratio", "--variable", "50", "--percentage", "25"])
        .assert()
        .success()
        .stdout("total=200\n");
    px().args(["ratio", "--total", "200", "--variable", "50"])
        .assert()
        .success()
        .stdout("percentage=25\n");
}

#[test]
fn ratio_zero_total_guard() {
    px().args(["ratio", "--total", "0", "--variable", "5"])
        .assert()
        .success()
        .stdout("percentage=0\n");
}

#[test]
fn ratio_wrong_absent_count_exits_2() {
    px().args(["ratio", "--total", "200"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("exactly one"));
    px().args(["ratio", "--total", "1", "--variable", "2", "--percentage", "3"])
        .assert()
        .code(2);
}

#[test]
fn ratio_decimal_and_json() {
    px().args(["ratio", "--decimal", "--total", "3", "--variable", "1"])
        .assert()
        .success()
        .stdout("percentage=33.333333333333\n");
    px().args(["ratio", "--decimal", "--variable", "5", "--percentage", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("division by zero"));
    px().args(["ratio", "--json", "--total", "200", "--percentage", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""term":"variable""#));
}

#[test]
fn not_a_number_exits_2() {
    px().args(["ratio", "--total", "abc", "--percentage", "25"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a number"));
}

#[test]
fn pack_and_unpack_negative_halves() {
    px().args(["pack", "-5", "-1"])
        .assert()
        .success()
        .stdout("-17179869185\n");
    px().args(["unpack", "-17179869185"])
        .assert()
        .success()
        .stdout("-5 -1\n");
}

#[test]
fn compare_honours_epsilon() {
    px().args(["compare", "1", "1.000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nearly_equal=true"));
    px().args(["compare", "1", "1.000001", "--epsilon", "1e-9"])
        .assert()
        .success()
        .stdout("nearly_equal=false greater_than=false smaller_than=true smaller_than_or_close=true\n");
    px().args(["compare", "1", "2", "--epsilon", "-1"])
        .assert()
        .code(2);
}

#[test]
fn gcd_round_clamp_even() {
    px().args(["gcd", "48", "18"]).assert().success().stdout("6\n");
    px().args(["gcd", "--decimal", "0.3", "0.2"]).assert().success().stdout("0.1\n");
    px().args(["round-up", "2.401", "--places", "2"]).assert().success().stdout("2.41\n");
    px().args(["clamp", "11", "0", "10"]).assert().success().stdout("10\n");
    px().args(["clamp", "-1", "0", "10"]).assert().success().stdout("0\n");
    px().args(["even", "5"]).assert().success().stdout("6\n");
}

#[test]
fn config_file_sets_precision() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"{{ "decimal_places": 2 }}"#).unwrap();
    px().args(["round-up", "2.401", "--config"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("2.41\n");
}

#[test]
fn bad_config_values_exit_2_missing_file_exits_4() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"{{ "epsilon": -1 }}"#).unwrap();
    px().args(["compare", "1", "2", "--config"])
        .arg(f.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid tolerance"));
    px().args(["compare", "1", "2", "--config", "/nonexistent/px.json"])
        .assert()
        .code(4);
}

#[test]
fn raster_summary() {
    px().args(["raster", "--width", "1920", "--height", "1080", "--dpi", "96", "--target-width", "960"])
        .assert()
        .success()
        .stdout("aspect=16:9 bytes_per_pixel=4 expected_data_length=8294400 standard_dpi=true scaled_height=540\n");
}
