//! Per-student HTTP/HTTPS vhost emitter
//!
//! The template itself owns the routing rules; this module only supplies the
//! four substitution values and the output file name.

use crate::roster::Student;
use crate::template::TemplateEngine;

/// Render the vhost file for one student
///
/// The template sees `student`, `ip`, `domain` and `ssh_port`.
pub fn render_vhost(
    engine: &dyn TemplateEngine,
    template_name: &str,
    student: &Student,
    domain: &str,
) -> anyhow::Result<String> {
    let ssh_port = student.ssh_port();
    engine.render(
        template_name,
        &[
            ("student", &student.name),
            ("ip", &student.ip),
            ("domain", domain),
            ("ssh_port", &ssh_port),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::substitute;

    /// Engine that renders a fixed inline template, no filesystem involved
    struct InlineTemplate(&'static str);

    impl TemplateEngine for InlineTemplate {
        fn render(&self, _name: &str, vars: &[(&str, &str)]) -> anyhow::Result<String> {
            Ok(substitute(self.0, vars))
        }
    }

    #[test]
    fn test_render_vhost_supplies_all_variables() {
        let engine =
            InlineTemplate("{{ student }} {{ ip }} {{ domain }} {{ ssh_port }}");
        let student = Student {
            name: "alice".to_string(),
            ip: "10.0.0.5".to_string(),
        };
        let text = render_vhost(&engine, "student.conf.tmpl", &student, "example.com").unwrap();
        assert_eq!(text, "alice 10.0.0.5 example.com 225");
    }
}
