//! Plain-text rendering of descriptors

use crate::UtilityDescriptor;

/// One `name — summary` line per descriptor.
pub fn listing<'a>(descriptors: impl IntoIterator<Item = &'a UtilityDescriptor>) -> String {
    let mut out = String::new();
    for desc in descriptors {
        out.push_str(&format!("{} — {}\n", desc.name, desc.summary));
    }
    out
}

/// Like [`listing`], prefixed with the 1-based position, zero-padded to at
/// least two digits.
pub fn numbered<'a>(descriptors: impl IntoIterator<Item = &'a UtilityDescriptor>) -> String {
    let mut out = String::new();
    for (i, desc) in descriptors.into_iter().enumerate() {
        out.push_str(&format!("{:02} {} — {}\n", i + 1, desc.name, desc.summary));
    }
    out
}

/// The full help block for one utility. Every block has a signature line,
/// empty for descriptors without one.
pub fn detail(desc: &UtilityDescriptor) -> String {
    let mut out = String::new();
    out.push_str(&format!("name: {}\n", desc.name));
    out.push_str(&format!("kind: {}\n", desc.kind));
    out.push_str(&format!("summary: {}\n", desc.summary));
    out.push_str(&format!("signature: {}\n", desc.signature));
    for example in &desc.examples {
        out.push_str(&format!("example: {example}\n"));
    }
    out
}

/// Message for a name with no descriptor.
pub fn not_found(name: &str, suggestion: Option<&str>) -> String {
    let mut out = format!("no such utility: '{name}'\n");
    if let Some(suggestion) = suggestion {
        out.push_str(&format!("did you mean '{suggestion}'?\n"));
    }
    out
}
