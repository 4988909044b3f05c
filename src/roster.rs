//! Student roster parsing and SSH port derivation
//!
//! The roster arrives as a single comma-separated string of `name:ip` pairs.
//! Insertion order is preserved and drives the order of every generated
//! artifact. By default malformed entries are skipped without a word; strict
//! mode turns them into errors.

use anyhow::bail;
use std::collections::HashMap;

/// One student and the backend their traffic is forwarded to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Student name, used as the subdomain label and output file name
    pub name: String,
    /// Backend IPv4 address as written in the roster
    pub ip: String,
}

impl Student {
    /// SSH listen port derived from the backend IP
    pub fn ssh_port(&self) -> String {
        derive_ssh_port(&self.ip)
    }
}

/// Ordered collection of students, unique by name
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Parse a comma-separated `name:ip` roster string
    ///
    /// Candidates are trimmed and must contain exactly one `:`; anything else
    /// is skipped (or rejected in strict mode). A duplicate name keeps its
    /// original position but takes the later IP.
    pub fn parse(input: &str, strict: bool) -> anyhow::Result<Self> {
        let mut roster = Roster::default();

        for candidate in input.split(',') {
            let candidate = candidate.trim();
            if candidate.is_empty() {
                continue;
            }
            if candidate.matches(':').count() != 1 {
                if strict {
                    bail!("malformed roster entry '{}': expected 'name:ip'", candidate);
                }
                continue;
            }
            if let Some((name, ip)) = candidate.split_once(':') {
                roster.insert(name.trim(), ip.trim());
            }
        }

        Ok(roster)
    }

    fn insert(&mut self, name: &str, ip: &str) {
        match self.students.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.ip = ip.to_string(),
            None => self.students.push(Student {
                name: name.to_string(),
                ip: ip.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Fail when two backends derive the same SSH listen port
    ///
    /// Two IPs sharing a trailing octet collide; with the check disabled the
    /// later block simply shadows the earlier one at the proxy.
    pub fn check_port_collisions(&self) -> anyhow::Result<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut errors = Vec::new();

        for student in &self.students {
            let port = student.ssh_port();
            match seen.get(port.as_str()) {
                Some(first) => errors.push(format!(
                    "port {} assigned to both '{}' and '{}'",
                    port, first, student.name
                )),
                None => {
                    seen.insert(port, &student.name);
                }
            }
        }

        if !errors.is_empty() {
            bail!("SSH port collisions:\n  - {}", errors.join("\n  - "));
        }

        Ok(())
    }
}

/// Derive the SSH listen port for a backend IP
///
/// Concatenates `"22"` with the last dot-separated octet, so `.5` gives
/// `"225"` and `.123` gives `"22123"`. This is string concatenation, not
/// `22000 + octet`; the width varies with the octet. The fragment is not
/// validated, a malformed IP passes straight through.
pub fn derive_ssh_port(ip: &str) -> String {
    let last_octet = ip.rsplit('.').next().unwrap_or(ip);
    format!("22{}", last_octet)
}
