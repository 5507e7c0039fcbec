use gamegenie::genie::{self, Patch, Variant};

#[derive(Debug)]
struct Vector {
    name: String,
    code: String,
    patch: Patch,
    flagged: bool,
}

fn hex(s: &str) -> u32 {
    u32::from_str_radix(s.trim(), 16).unwrap_or_else(|e| panic!("bad hex {s:?}: {e}"))
}

fn load_vectors() -> Vec<Vector> {
    let manifest = include_str!("vectors/manifest.tsv");
    manifest
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| {
            let parts: Vec<_> = line.split('|').collect();
            assert_eq!(parts.len(), 6, "invalid vector row: {line}");
            let comp = match parts[4] {
                "-" => None,
                c => Some(hex(c)),
            };
            Vector {
                name: parts[0].to_string(),
                code: parts[1].to_string(),
                patch: Patch::new(hex(parts[2]), hex(parts[3]), comp).unwrap(),
                flagged: parts[5] == "1",
            }
        })
        .collect()
}

#[test]
fn vector_database_is_non_empty() {
    let vectors = load_vectors();
    assert!(!vectors.is_empty());
    assert!(vectors.iter().any(|v| v.code.len() == 6));
    assert!(vectors.iter().any(|v| v.code.len() == 8));
}

#[test]
fn decode_all_vectors() {
    for v in load_vectors() {
        let decoded = genie::inspect(&v.code).unwrap_or_else(|e| panic!("vector {}: {e}", v.name));
        assert_eq!(decoded.patch, v.patch, "vector {}", v.name);
        assert_eq!(decoded.diagnostic.is_some(), v.flagged, "vector {}", v.name);
    }
}

#[test]
fn decode_all_vectors_lowercase() {
    for v in load_vectors() {
        let patch = genie::decode(&v.code.to_lowercase()).unwrap();
        assert_eq!(patch, v.patch, "vector {}", v.name);
    }
}

#[test]
fn encode_reproduces_all_vectors() {
    for v in load_vectors() {
        let variant = if v.flagged {
            Variant::Alternate
        } else {
            Variant::Standard
        };
        let code = v.patch.encode(variant).unwrap();
        assert_eq!(code, v.code, "vector {}", v.name);
    }
}

#[test]
fn human_readable_all_vectors() {
    for v in load_vectors() {
        let text = genie::human_readable(v.patch.address, v.patch.data, v.patch.comp);
        assert!(
            text.starts_with(&format!("[{:#06X}] returns {:#04X}", v.patch.address, v.patch.data)),
            "vector {}: {text}",
            v.name
        );
        assert_eq!(text.contains("if read as"), v.patch.comp.is_some(), "vector {}", v.name);
    }
}
