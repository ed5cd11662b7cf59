use std::fs;
use std::path::PathBuf;

/// Load a hex dump from `tests/packet_examples` as raw bytes.
pub fn file_to_packet(fname: &str) -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("packet_examples");
    path.push(fname);

    let content = fs::read_to_string(&path).unwrap();
    let content = content.trim();
    assert!(content.len() % 2 == 0, "odd number of hex digits in {}", fname);

    (0..content.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&content[i..i + 2], 16).unwrap())
        .collect()
}
