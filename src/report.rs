//! Console summary printed after generation
//!
//! Informational output for whoever runs the generator: per-artifact counts
//! and the SSH access cheat sheet. Not a machine-readable contract.

use crate::config::Config;
use crate::roster::Roster;
use crate::stream::{SSH_PROXY_FILE, STREAM_MAP_FILE};

/// Print the per-artifact summary and the SSH cheat sheet
pub fn print_summary(config: &Config, roster: &Roster) {
    println!("\n👥 Generating configs for {} students\n", roster.len());
    println!("✅ {} ({} students)", STREAM_MAP_FILE, roster.len());
    println!("✅ {} ({} SSH ports)", SSH_PROXY_FILE, roster.len());
    for student in roster.iter() {
        println!(
            "✅ {}.conf → HTTP/HTTPS proxy + SSH port {}",
            student.name,
            student.ssh_port()
        );
    }

    println!("\n✅ Configuration complete\n");
    println!("\n📋 SSH access per student:");
    for student in roster.iter() {
        println!(
            "   ssh -p {} user@{}  # {} ({})",
            student.ssh_port(),
            config.domain,
            student.name,
            student.ip
        );
    }
    println!();
}
