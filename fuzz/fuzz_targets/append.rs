#![no_main]

use libfuzzer_sys::fuzz_target;
use tast_modify::{FieldEditor, FieldTarget};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let editor = FieldEditor::default();
        let target = FieldTarget::new("Contacts");
        // Any successful edit must still parse and end with the new value.
        if let Ok(out) = editor.append(s, &target, "fuzz@google.com") {
            let values = editor.values(&out, &target).expect("edited source failed to re-parse");
            assert_eq!(values.last().map(String::as_str), Some("fuzz@google.com"));
        }
    }
});
