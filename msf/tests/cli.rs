// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};

const MSF_TIME: &str = env!("CARGO_BIN_EXE_msf_time");
const MSF_CHECK: &str = env!("CARGO_BIN_EXE_msf_check");

const EXAMPLE: &str = "\
p sp 4 5
a 0 1 1
a 1 2 2
a 2 3 3
a 0 3 4
a 0 2 5
";

fn run(bin: &str, args: &[&OsStr]) -> (Output, String) {
    let out = Command::new(bin).args(args).env_remove("MSF_LOG").output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
    (out, stdout)
}


#[test]
fn no_argument_prints_usage() {
    let (out, stdout) = run(MSF_TIME, &[]);
    assert!(out.status.success());
    assert!(stdout.contains("Usage"), "{stdout}");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.gr");
    let (out, stdout) = run(MSF_TIME, &[path.as_os_str()]);
    assert!(out.status.success());
    assert!(stdout.contains("File not found"), "{stdout}");
}

#[test]
fn reports_forest_and_writes_checkable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("example.gr");
    let output = dir.path().join("example.msf");
    fs::write(&input, EXAMPLE).unwrap();

    let (out, stdout) = run(
        MSF_TIME,
        &[OsStr::new("-r"), OsStr::new("2"), OsStr::new("-o"), output.as_os_str(), input.as_os_str()],
    );
    assert!(out.status.success());
    assert!(stdout.contains("Minimum spanning tree weight: 6"), "{stdout}");
    for line in ["Vertex 0 - Vertex 1 com peso 1", "Vertex 1 - Vertex 2 com peso 2", "Vertex 2 - Vertex 3 com peso 3"] {
        assert!(stdout.contains(line), "{stdout}");
    }
    assert_eq!(fs::read_to_string(&output).unwrap(), "0 1 1\n1 2 2\n2 3 3");

    let (out, stdout) = run(MSF_CHECK, &[output.as_os_str(), input.as_os_str()]);
    assert!(out.status.success());
    assert_eq!(stdout.trim(), "OK");
}

#[test]
fn bad_input_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let malformed = dir.path().join("malformed.gr");
    fs::write(&malformed, "p sp 2 1\na 0 x 1\n").unwrap();
    let (out, _) = run(MSF_TIME, &[malformed.as_os_str()]);
    assert_eq!(out.status.code(), Some(1));

    let overflow = dir.path().join("overflow.gr");
    fs::write(&overflow, "p sp 2 2\na 0 1 9223372036854775807\na 1 2 1\n").unwrap();
    let (out, _) = run(MSF_TIME, &[overflow.as_os_str()]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn checker_rejects_wrong_forest() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("example.gr");
    let result = dir.path().join("wrong.msf");
    fs::write(&input, EXAMPLE).unwrap();
    fs::write(&result, "0 1 1\n1 2 2\n0 3 4\n").unwrap();

    let (out, stdout) = run(MSF_CHECK, &[result.as_os_str(), input.as_os_str()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.ends_with("ERR\n"), "{stdout}");
}
