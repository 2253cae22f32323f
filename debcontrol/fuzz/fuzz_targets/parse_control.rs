#![no_main]

use debcontrol::{DuplicatePolicy, FieldModes, ParseOptions, Parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = debcontrol::parse(data);

    let parser = Parser::with_options(
        FieldModes::default(),
        ParseOptions {
            duplicates: DuplicatePolicy::Reject,
            comments: true,
        },
    );
    for paragraph in parser.paragraphs(data) {
        match paragraph {
            Ok(paragraph) => assert!(!paragraph.is_empty()),
            Err(_) => break,
        }
    }
});
