//! Terminal output formatting.

use colored::Colorize;
use mpm_core::machine::model::MachineWithParts;
use mpm_core::part::model::Part;
use mpm_core::InventoryStats;

/// Print a single part.
pub fn print_part(part: &Part) {
    println!("{} {}", part.name.cyan().bold(), format!("({})", part.uuid).dimmed());
    println!("{}: {}", "Number".bold(), part.number);

    if let Some(desc) = &part.description {
        println!("{}: {}", "Description".bold(), desc);
    }

    match &part.linked_machine {
        Some(machine) => println!("{}: {}", "Machine".bold(), machine.yellow()),
        None => println!("{}: {}", "Machine".bold(), "unlinked".dimmed()),
    }
}

/// Print a machine followed by a table of its parts.
pub fn print_machine_with_parts(machine: &MachineWithParts) {
    let m = &machine.machine;
    println!("{} {}", m.name.cyan().bold(), format!("({})", m.uuid).dimmed());
    println!("{}: {}", "Site".bold(), m.site);
    if let Some(desc) = &m.description {
        println!("{}: {}", "Description".bold(), desc);
    }
    println!();

    if machine.parts.is_empty() {
        println!("{}", "No parts linked.".dimmed());
        return;
    }

    println!("{:<38} {:<16} {:<30}", "UUID", "Number", "Name");
    println!("{}", "-".repeat(84));
    for part in &machine.parts {
        println!("{:<38} {:<16} {:<30}", part.uuid, part.number, truncate(&part.name, 28));
    }
}

/// Print inventory counts.
pub fn print_stats(stats: &InventoryStats) {
    println!("{}", "Inventory".bold());
    println!("  Machines:       {}", stats.total_machines.to_string().green());
    println!("  Parts:          {}", stats.total_parts.to_string().green());
    let unlinked = stats.unlinked_parts.to_string();
    if stats.unlinked_parts > 0 {
        println!("  Unlinked parts: {}", unlinked.yellow());
    } else {
        println!("  Unlinked parts: {}", unlinked.green());
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
