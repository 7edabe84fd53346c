// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_footnoted_markdown(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(&format!(
            "A claim that needs a source[^s{section}] and a repeat of an earlier one[^s0].\n\n"
        ));
    }

    for section in 0..sections {
        content.push_str(&format!(
            "[^s{section}]: Source for section {section}.\n    Continued on a second line.\n\n"
        ));
    }

    content
}
