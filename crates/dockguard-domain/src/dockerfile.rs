//! Dockerfile text inspection: base image extraction and a sensitive-name
//! heuristic over ENV/ARG declarations.

/// Variable name fragments that suggest a credential.
const SENSITIVE_NAME_PARTS: [&str; 4] = ["secret", "key", "token", "pass"];

/// A flagged ENV/ARG declaration. Only the variable name is kept; the value
/// is deliberately never captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvSecret {
    /// 1-based line in the Dockerfile.
    pub line: u32,
    pub name: String,
}

/// First base image reference following a `FROM` directive: the second
/// whitespace-separated token of the first `FROM` line.
pub fn base_image(content: &str) -> Option<&str> {
    for line in content.lines() {
        let mut parts = line.trim().split_whitespace();
        if parts.next() == Some("FROM") {
            return parts.next();
        }
    }
    None
}

/// ENV/ARG declarations whose variable name looks sensitive. At most one
/// hit per line.
pub fn env_secret_lines(content: &str) -> Vec<EnvSecret> {
    let mut out = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let mut parts = raw.trim().split_whitespace();
        let Some(directive) = parts.next() else {
            continue;
        };
        if directive != "ENV" && directive != "ARG" {
            continue;
        }
        for decl in parts {
            let name = decl.split('=').next().unwrap_or(decl);
            let lower = name.to_lowercase();
            if SENSITIVE_NAME_PARTS.iter().any(|p| lower.contains(p)) {
                out.push(EnvSecret {
                    line: (idx + 1) as u32,
                    name: name.to_string(),
                });
                break;
            }
        }
    }
    out
}
