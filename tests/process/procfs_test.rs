/*!
 * Procfs Reader Tests
 * Parsing, unit conversion, and silent degrade on missing data
 */

use crate::fake_proc::FakeProc;
use mem_profiler::process::system_page_size;
use mem_profiler::ProcReader;
use std::fs;

const PID: u32 = 4242;

#[test]
fn test_memory_sizes_convert_pages_to_kb() {
    let fake = FakeProc::new();
    fake.set_statm(PID, 250, 100);

    let reader = ProcReader::with_root(fake.root(), 4096);
    assert_eq!(reader.read_memory_sizes(PID), (1000, 400));

    let reader = ProcReader::with_root(fake.root(), 16384);
    assert_eq!(reader.read_memory_sizes(PID), (4000, 1600));
}

#[test]
fn test_absent_process_degrades_to_defaults() {
    let fake = FakeProc::new();
    let reader = ProcReader::with_root(fake.root(), 4096);

    assert_eq!(reader.read_memory_sizes(PID), (0, 0));
    assert_eq!(reader.read_stack_size(PID), 0);
    assert_eq!(reader.read_process_name(PID), "Unknown");
}

#[test]
fn test_stack_size_from_status() {
    let fake = FakeProc::new();
    fake.set_stack_kb(PID, 132);

    let reader = ProcReader::with_root(fake.root(), 4096);
    assert_eq!(reader.read_stack_size(PID), 132);
}

#[test]
fn test_stack_size_last_occurrence_wins() {
    let fake = FakeProc::new();
    fake.set_stack_kb(PID, 132);
    let status = fake.root().join(PID.to_string()).join("status");
    let mut content = fs::read_to_string(&status).unwrap();
    content.push_str("VmStk:\t     200 kB\n");
    fs::write(&status, content).unwrap();

    let reader = ProcReader::with_root(fake.root(), 4096);
    assert_eq!(reader.read_stack_size(PID), 200);
}

#[test]
fn test_process_name_strips_newline() {
    let fake = FakeProc::new();
    fake.set_comm(PID, "sleeper");

    let reader = ProcReader::with_root(fake.root(), 4096);
    assert_eq!(reader.read_process_name(PID), "sleeper");
}

#[test]
fn test_malformed_statm_degrades_to_zero() {
    let fake = FakeProc::new();
    fake.set_comm(PID, "sleeper");
    fs::write(fake.root().join(PID.to_string()).join("statm"), "not numbers\n").unwrap();

    let reader = ProcReader::with_root(fake.root(), 4096);
    assert_eq!(reader.read_memory_sizes(PID), (0, 0));
}

#[test]
fn test_process_exiting_between_reads() {
    let fake = FakeProc::new();
    fake.set_statm(PID, 250, 100);
    fake.set_stack_kb(PID, 132);
    fake.set_comm(PID, "sleeper");

    let reader = ProcReader::with_root(fake.root(), 4096);
    assert_eq!(reader.read_memory_sizes(PID), (1000, 400));

    fake.remove(PID);
    assert_eq!(reader.read_stack_size(PID), 0);
    assert_eq!(reader.read_process_name(PID), "Unknown");
}

#[test]
fn test_default_reader_targets_live_procfs() {
    let reader = ProcReader::new();

    assert_eq!(reader.root(), std::path::Path::new("/proc"));
    assert_eq!(reader.page_size(), system_page_size());
    assert!(reader.page_size() > 0);
}

#[test]
fn test_custom_root_is_kept() {
    let fake = FakeProc::new();
    let reader = ProcReader::with_root(fake.root(), 16384);

    assert_eq!(reader.root(), fake.root());
    assert_eq!(reader.page_size(), 16384);
}
