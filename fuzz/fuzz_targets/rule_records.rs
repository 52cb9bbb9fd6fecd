#![no_main]

use libfuzzer_sys::fuzz_target;
use rulegen_expander::RuleReader;

fuzz_target!(|data: &[u8]| {
    // 잘못된 UTF-8 줄은 Io 에러로 끝나야 하며 패닉하면 안 된다
    let _ = RuleReader::read_records(data, "fuzz-input");
});
