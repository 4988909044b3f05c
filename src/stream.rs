//! Stream-layer config emitters
//!
//! Both files land in the `stream.d` drop-in directory: a map routing
//! wildcard student subdomains to each backend's TLS port, and one
//! listen/proxy block per student for SSH forwarding.

use crate::roster::Roster;

/// File name of the subdomain-to-backend map inside `stream.d`
pub const STREAM_MAP_FILE: &str = "stream-map-entries.conf";

/// File name of the SSH forwarding blocks inside `stream.d`
pub const SSH_PROXY_FILE: &str = "ssh-proxy.conf";

/// Render the stream map: one entry per student plus the catch-all
///
/// Each line matches any subdomain of `{name}.{domain}` and forwards to the
/// backend's port 443. The dots around the name are escaped for the regex;
/// the catch-all default is always the last line.
pub fn render_stream_map(roster: &Roster, domain: &str) -> String {
    let mut entries: Vec<String> = roster
        .iter()
        .map(|s| format!("        ~^.*\\.{}\\.{}$ {}:443;", s.name, domain, s.ip))
        .collect();
    entries.push("        default 127.0.0.1:8443;".to_string());
    entries.join("\n")
}

/// Render the SSH proxy blocks: one server block per student
///
/// Each block listens on the student's derived port and forwards to the
/// backend's port 22 with a 10 second connect timeout.
pub fn render_ssh_proxy(roster: &Roster) -> String {
    let mut blocks = vec!["# SSH Proxy per Student\n".to_string()];
    for student in roster.iter() {
        blocks.push(format!(
            "server {{\n    listen {};\n    proxy_pass {}:22;\n    proxy_connect_timeout 10s;\n}}\n",
            student.ssh_port(),
            student.ip
        ));
    }
    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::parse("alice:10.0.0.5,bob:10.0.0.12", false).unwrap()
    }

    #[test]
    fn test_stream_map_entries() {
        let map = render_stream_map(&roster(), "example.com");
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(
            lines,
            vec![
                "        ~^.*\\.alice\\.example.com$ 10.0.0.5:443;",
                "        ~^.*\\.bob\\.example.com$ 10.0.0.12:443;",
                "        default 127.0.0.1:8443;",
            ]
        );
    }

    #[test]
    fn test_stream_map_empty_roster_still_has_default() {
        let map = render_stream_map(&Roster::default(), "example.com");
        assert_eq!(map, "        default 127.0.0.1:8443;");
    }

    #[test]
    fn test_stream_map_ends_with_default_line() {
        let map = render_stream_map(&roster(), "example.com");
        assert!(map.ends_with("default 127.0.0.1:8443;"));
    }

    #[test]
    fn test_ssh_proxy_blocks() {
        let conf = render_ssh_proxy(&roster());
        let expected = [
            "# SSH Proxy per Student\n",
            "server {\n    listen 225;\n    proxy_pass 10.0.0.5:22;\n    proxy_connect_timeout 10s;\n}\n",
            "server {\n    listen 2212;\n    proxy_pass 10.0.0.12:22;\n    proxy_connect_timeout 10s;\n}\n",
        ]
        .join("\n");
        assert_eq!(conf, expected);
    }

    #[test]
    fn test_ssh_proxy_block_order_follows_roster() {
        let conf = render_ssh_proxy(&roster());
        let alice = conf.find("listen 225;").unwrap();
        let bob = conf.find("listen 2212;").unwrap();
        assert!(alice < bob);
    }
}
