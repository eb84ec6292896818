//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Content that would trigger a finding.
    pub before: &'static str,
    /// Content that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_SCAN_SECRETS => Some(explain_secrets()),
        ids::CHECK_SCAN_VULNS => Some(explain_vulnerabilities()),
        ids::CHECK_SCAN_LICENSES => Some(explain_licenses()),
        ids::CHECK_SCAN_MISCONFIGS => Some(explain_misconfigurations()),
        ids::CHECK_DOCKERFILE_ENV => Some(explain_env_secrets()),

        // Codes
        ids::CODE_SECRET_EXPOSED => Some(explain_secret_exposed()),
        ids::CODE_HIGH_SEVERITY_CVE => Some(explain_high_severity_cve()),
        ids::CODE_RISKY_LICENSE => Some(explain_risky_license()),
        ids::CODE_MISCONFIGURATION => Some(explain_misconfiguration_code()),
        ids::CODE_ENV_SECRET => Some(explain_env_secret_code()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_SCAN_SECRETS,
        ids::CHECK_SCAN_VULNS,
        ids::CHECK_SCAN_LICENSES,
        ids::CHECK_SCAN_MISCONFIGS,
        ids::CHECK_DOCKERFILE_ENV,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_SECRET_EXPOSED,
        ids::CODE_HIGH_SEVERITY_CVE,
        ids::CODE_RISKY_LICENSE,
        ids::CODE_MISCONFIGURATION,
        ids::CODE_ENV_SECRET,
    ]
}

// --- Check-level explanations ---

fn explain_secrets() -> Explanation {
    Explanation {
        title: "Exposed Secrets",
        description: "\
Surfaces credentials the scanner found baked into the scanned artifact:
API keys, tokens, private keys, connection strings.

A secret that ships inside an image or Dockerfile is readable by anyone who
can pull the image or clone the repository. Rotating it later does not help
the layers that already exist in registries and caches.

Dockguard never prints the raw value; findings carry a masked form only.",
        remediation: "\
Rotate the exposed credential immediately, then keep it out of the build:
- pass build-time secrets via BuildKit secret mounts (`RUN --mount=type=secret`)
- inject runtime secrets through the orchestrator (env injection, mounted files)
- add credential files to .dockerignore so COPY cannot pick them up",
        examples: ExamplePair {
            before: r#"COPY .aws/credentials /root/.aws/credentials
RUN curl -H "Authorization: Bearer sk_live_abc123" https://api.example.com"#,
            after: r#"RUN --mount=type=secret,id=api_token \
    curl -H "Authorization: Bearer $(cat /run/secrets/api_token)" https://api.example.com"#,
        },
    }
}

fn explain_vulnerabilities() -> Explanation {
    Explanation {
        title: "High Severity Vulnerabilities",
        description: "\
Collects CVEs the scanner rated HIGH or CRITICAL in the scanned image's
packages. Lower severities are left to the scanner's own tabular output.

These two levels are the ones most CI policies gate on: they are the CVEs
with known practical exploits or severe impact.",
        remediation: "\
- upgrade the affected package, or rebuild on a newer base image tag
- prefer slim/alpine variants with a smaller package surface
- if a CVE is genuinely unreachable in your deployment, document the
  exception and drop --fail-on-high rather than ignoring the report",
        examples: ExamplePair {
            before: "FROM python:3.10",
            after: "FROM python:3.10-slim  # fewer OS packages, fewer CVEs",
        },
    }
}

fn explain_licenses() -> Explanation {
    Explanation {
        title: "Risky Licenses",
        description: "\
Flags licenses whose name contains GPL, LGPL, or AGPL among the packages the
scanner inventoried.

Copyleft licenses are not wrong, but shipping them in a distributed image can
impose source-disclosure obligations that need a deliberate decision, not an
accidental `apt-get install`.",
        remediation: "\
- check whether the package is actually needed in the final image
- use a multi-stage build so build-only tooling never reaches the runtime stage
- if the dependency stays, record the obligation with your legal/compliance
  process and drop --fail-on-licenses for that pipeline",
        examples: ExamplePair {
            before: r#"FROM debian:bullseye
RUN apt-get install -y build-essential"#,
            after: r#"FROM debian:bullseye AS build
RUN apt-get install -y build-essential
# ... build ...
FROM debian:bullseye-slim
COPY --from=build /app/bin /app/bin"#,
        },
    }
}

fn explain_misconfigurations() -> Explanation {
    Explanation {
        title: "Dockerfile Misconfigurations",
        description: "\
Relays the scanner's configuration findings for Dockerfile targets: running
as root, missing HEALTHCHECK, ADD instead of COPY, unpinned base images.

These are hygiene issues rather than exploitable holes, which is why they
never fail the run on their own.",
        remediation: "\
Each finding carries the scanner's rule ID; look it up in the scanner's
documentation for the exact fix. The common ones: add a USER instruction,
pin base image tags, replace ADD with COPY.",
        examples: ExamplePair {
            before: r#"FROM ubuntu
ADD app.tar.gz /app"#,
            after: r#"FROM ubuntu:24.04
COPY app/ /app
USER app"#,
        },
    }
}

fn explain_env_secrets() -> Explanation {
    Explanation {
        title: "Sensitive Environment Declarations",
        description: "\
A heuristic over the Dockerfile itself (not scanner output): ENV or ARG
declarations whose variable name contains `secret`, `key`, `token`, or
`pass`.

ENV values persist in the image config and every derived container; ARG
values leak into the build history. Either way the value is recoverable with
`docker history` or `docker inspect`. Dockguard reports the variable name
only, never the value.",
        remediation: "\
- move the value to a BuildKit secret mount or runtime injection
- if the variable is a non-secret that happens to match (e.g. KEYBOARD),
  rename it or ignore the advisory finding",
        examples: ExamplePair {
            before: "ENV API_SECRET=hunter2",
            after: r#"# provided at runtime by the orchestrator
ENV API_SECRET="""#,
        },
    }
}

// --- Code-level explanations ---

fn explain_secret_exposed() -> Explanation {
    let mut exp = explain_secrets();
    exp.title = "Secret Exposed";
    exp
}

fn explain_high_severity_cve() -> Explanation {
    let mut exp = explain_vulnerabilities();
    exp.title = "High Severity CVE";
    exp
}

fn explain_risky_license() -> Explanation {
    let mut exp = explain_licenses();
    exp.title = "Risky License";
    exp
}

fn explain_misconfiguration_code() -> Explanation {
    let mut exp = explain_misconfigurations();
    exp.title = "Misconfiguration";
    exp
}

fn explain_env_secret_code() -> Explanation {
    let mut exp = explain_env_secrets();
    exp.title = "Sensitive ENV/ARG Name";
    exp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_check_id() {
        assert!(lookup_explanation(ids::CHECK_SCAN_SECRETS).is_some());
        assert!(lookup_explanation(ids::CHECK_SCAN_VULNS).is_some());
        assert!(lookup_explanation(ids::CHECK_SCAN_LICENSES).is_some());
        assert!(lookup_explanation(ids::CHECK_SCAN_MISCONFIGS).is_some());
        assert!(lookup_explanation(ids::CHECK_DOCKERFILE_ENV).is_some());
    }

    #[test]
    fn lookup_by_code() {
        assert!(lookup_explanation(ids::CODE_SECRET_EXPOSED).is_some());
        assert!(lookup_explanation(ids::CODE_HIGH_SEVERITY_CVE).is_some());
        assert!(lookup_explanation(ids::CODE_RISKY_LICENSE).is_some());
        assert!(lookup_explanation(ids::CODE_MISCONFIGURATION).is_some());
        assert!(lookup_explanation(ids::CODE_ENV_SECRET).is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("unknown.check").is_none());
        assert!(lookup_explanation("unknown_code").is_none());
    }

    #[test]
    fn all_check_ids_are_valid() {
        for id in all_check_ids() {
            assert!(
                lookup_explanation(id).is_some(),
                "check_id {} should be in registry",
                id
            );
        }
    }

    #[test]
    fn all_codes_are_valid() {
        for code in all_codes() {
            assert!(
                lookup_explanation(code).is_some(),
                "code {} should be in registry",
                code
            );
        }
    }
}
