use std::fmt::Write as _;

use jobxml_generator::ConfigGenerator;

/// One line per SCM strategy the generator knows: name and description.
pub fn list() -> String {
    let generator = ConfigGenerator::new();
    let mut text = String::new();
    for info in generator.scm_registry().info() {
        let _ = writeln!(text, "{:<12}{}", info.name, info.description);
    }
    text
}
